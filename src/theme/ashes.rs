//! Ashes style: Light gray panels on a darker ash background.

use super::ThemeData;
use crate::style::StyleProp;
use crate::theme::ThemeId;

pub(super) const DATA: ThemeData = ThemeData {
    id: ThemeId::Ashes,
    font_name: "v5loxical",
    font_size: 16,
    props: &[
        StyleProp::new(0, 0, 0xf0f0f0ff), // DEFAULT_BORDER_COLOR_NORMAL
        StyleProp::new(0, 1, 0x868686ff), // DEFAULT_BASE_COLOR_NORMAL
        StyleProp::new(0, 2, 0xe6e6e6ff), // DEFAULT_TEXT_COLOR_NORMAL
        StyleProp::new(0, 3, 0x929999ff), // DEFAULT_BORDER_COLOR_FOCUSED
        StyleProp::new(0, 4, 0xeaeaeaff), // DEFAULT_BASE_COLOR_FOCUSED
        StyleProp::new(0, 5, 0x98a1a8ff), // DEFAULT_TEXT_COLOR_FOCUSED
        StyleProp::new(0, 6, 0x3f3f3fff), // DEFAULT_BORDER_COLOR_PRESSED
        StyleProp::new(0, 7, 0xf6f6f6ff), // DEFAULT_BASE_COLOR_PRESSED
        StyleProp::new(0, 8, 0x414141ff), // DEFAULT_TEXT_COLOR_PRESSED
        StyleProp::new(0, 9, 0x8b8b8bff), // DEFAULT_BORDER_COLOR_DISABLED
        StyleProp::new(0, 10, 0x777777ff), // DEFAULT_BASE_COLOR_DISABLED
        StyleProp::new(0, 11, 0x959595ff), // DEFAULT_TEXT_COLOR_DISABLED
        StyleProp::new(0, 16, 16), // DEFAULT_TEXT_SIZE
        StyleProp::new(0, 17, 0), // DEFAULT_TEXT_SPACING
        StyleProp::new(0, 18, 0x9dadb1ff), // DEFAULT_LINE_COLOR
        StyleProp::new(0, 19, 0x6b6b6bff), // DEFAULT_BACKGROUND_COLOR
        StyleProp::new(0, 20, 24), // DEFAULT_TEXT_LINE_SPACING
        StyleProp::new(9, 5, 0x5b6462ff), // TEXTBOX_TEXT_COLOR_FOCUSED
    ],
};
