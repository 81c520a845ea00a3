//! RLTech style: Black on white with red focus states.

use super::ThemeData;
use crate::style::StyleProp;
use crate::theme::ThemeId;

pub(super) const DATA: ThemeData = ThemeData {
    id: ThemeId::RLTech,
    font_name: "PixAntiqua",
    font_size: 16,
    props: &[
        StyleProp::new(0, 0, 0x1e1e1eff), // DEFAULT_BORDER_COLOR_NORMAL
        StyleProp::new(0, 1, 0xf5f5f5ff), // DEFAULT_BASE_COLOR_NORMAL
        StyleProp::new(0, 2, 0x1e1e1eff), // DEFAULT_TEXT_COLOR_NORMAL
        StyleProp::new(0, 3, 0xe62937ff), // DEFAULT_BORDER_COLOR_FOCUSED
        StyleProp::new(0, 4, 0xfbe3e4ff), // DEFAULT_BASE_COLOR_FOCUSED
        StyleProp::new(0, 5, 0xbe1622ff), // DEFAULT_TEXT_COLOR_FOCUSED
        StyleProp::new(0, 6, 0x1e1e1eff), // DEFAULT_BORDER_COLOR_PRESSED
        StyleProp::new(0, 7, 0xe62937ff), // DEFAULT_BASE_COLOR_PRESSED
        StyleProp::new(0, 8, 0xf5f5f5ff), // DEFAULT_TEXT_COLOR_PRESSED
        StyleProp::new(0, 9, 0x8c8c8cff), // DEFAULT_BORDER_COLOR_DISABLED
        StyleProp::new(0, 10, 0xdcdcdcff), // DEFAULT_BASE_COLOR_DISABLED
        StyleProp::new(0, 11, 0x8c8c8cff), // DEFAULT_TEXT_COLOR_DISABLED
        StyleProp::new(0, 16, 16), // DEFAULT_TEXT_SIZE
        StyleProp::new(0, 17, 0), // DEFAULT_TEXT_SPACING
        StyleProp::new(0, 18, 0x1e1e1eff), // DEFAULT_LINE_COLOR
        StyleProp::new(0, 19, 0xf5f5f5ff), // DEFAULT_BACKGROUND_COLOR
        StyleProp::new(0, 20, 24), // DEFAULT_TEXT_LINE_SPACING
        StyleProp::new(0, 12, 2), // DEFAULT_BORDER_WIDTH
        StyleProp::new(1, 12, 0), // LABEL_BORDER_WIDTH
        StyleProp::new(14, 12, 1), // SCROLLBAR_BORDER_WIDTH
    ],
};
