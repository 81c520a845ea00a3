//! Bluish style: Pale blue panels with teal borders.

use super::ThemeData;
use crate::style::StyleProp;
use crate::theme::ThemeId;

pub(super) const DATA: ThemeData = ThemeData {
    id: ThemeId::Bluish,
    font_name: "homespun",
    font_size: 10,
    props: &[
        StyleProp::new(0, 0, 0x5ca6a6ff), // DEFAULT_BORDER_COLOR_NORMAL
        StyleProp::new(0, 1, 0xb4e8f3ff), // DEFAULT_BASE_COLOR_NORMAL
        StyleProp::new(0, 2, 0x447e77ff), // DEFAULT_TEXT_COLOR_NORMAL
        StyleProp::new(0, 3, 0x5f8792ff), // DEFAULT_BORDER_COLOR_FOCUSED
        StyleProp::new(0, 4, 0xcdeff7ff), // DEFAULT_BASE_COLOR_FOCUSED
        StyleProp::new(0, 5, 0x4c6c74ff), // DEFAULT_TEXT_COLOR_FOCUSED
        StyleProp::new(0, 6, 0x3b5b5fff), // DEFAULT_BORDER_COLOR_PRESSED
        StyleProp::new(0, 7, 0xeaffffff), // DEFAULT_BASE_COLOR_PRESSED
        StyleProp::new(0, 8, 0x275057ff), // DEFAULT_TEXT_COLOR_PRESSED
        StyleProp::new(0, 9, 0x96aaacff), // DEFAULT_BORDER_COLOR_DISABLED
        StyleProp::new(0, 10, 0xc8d7d9ff), // DEFAULT_BASE_COLOR_DISABLED
        StyleProp::new(0, 11, 0x8c9c9eff), // DEFAULT_TEXT_COLOR_DISABLED
        StyleProp::new(0, 16, 10), // DEFAULT_TEXT_SIZE
        StyleProp::new(0, 17, 1), // DEFAULT_TEXT_SPACING
        StyleProp::new(0, 18, 0x84adb7ff), // DEFAULT_LINE_COLOR
        StyleProp::new(0, 19, 0xe8eef1ff), // DEFAULT_BACKGROUND_COLOR
        StyleProp::new(0, 20, 15), // DEFAULT_TEXT_LINE_SPACING
    ],
};
