//! Cyber style: Cyan outlines on a deep blue-green background.

use super::ThemeData;
use crate::style::StyleProp;
use crate::theme::ThemeId;

pub(super) const DATA: ThemeData = ThemeData {
    id: ThemeId::Cyber,
    font_name: "Kyrou 7 Wide",
    font_size: 14,
    props: &[
        StyleProp::new(0, 0, 0x2f7486ff), // DEFAULT_BORDER_COLOR_NORMAL
        StyleProp::new(0, 1, 0x024658ff), // DEFAULT_BASE_COLOR_NORMAL
        StyleProp::new(0, 2, 0x51bfd3ff), // DEFAULT_TEXT_COLOR_NORMAL
        StyleProp::new(0, 3, 0x82cde0ff), // DEFAULT_BORDER_COLOR_FOCUSED
        StyleProp::new(0, 4, 0x3299b4ff), // DEFAULT_BASE_COLOR_FOCUSED
        StyleProp::new(0, 5, 0xb6e1eaff), // DEFAULT_TEXT_COLOR_FOCUSED
        StyleProp::new(0, 6, 0xeb7630ff), // DEFAULT_BORDER_COLOR_PRESSED
        StyleProp::new(0, 7, 0xffbc51ff), // DEFAULT_BASE_COLOR_PRESSED
        StyleProp::new(0, 8, 0xd86f36ff), // DEFAULT_TEXT_COLOR_PRESSED
        StyleProp::new(0, 9, 0x134b5aff), // DEFAULT_BORDER_COLOR_DISABLED
        StyleProp::new(0, 10, 0x02313dff), // DEFAULT_BASE_COLOR_DISABLED
        StyleProp::new(0, 11, 0x17505fff), // DEFAULT_TEXT_COLOR_DISABLED
        StyleProp::new(0, 16, 14), // DEFAULT_TEXT_SIZE
        StyleProp::new(0, 17, 0), // DEFAULT_TEXT_SPACING
        StyleProp::new(0, 18, 0x81c0d0ff), // DEFAULT_LINE_COLOR
        StyleProp::new(0, 19, 0x00222bff), // DEFAULT_BACKGROUND_COLOR
        StyleProp::new(0, 20, 20), // DEFAULT_TEXT_LINE_SPACING
    ],
};
