//! Lavanda style: Lavender and rose tones.

use super::ThemeData;
use crate::style::StyleProp;
use crate::theme::ThemeId;

pub(super) const DATA: ThemeData = ThemeData {
    id: ThemeId::Lavanda,
    font_name: "Cartridge",
    font_size: 16,
    props: &[
        StyleProp::new(0, 0, 0xab9bd3ff), // DEFAULT_BORDER_COLOR_NORMAL
        StyleProp::new(0, 1, 0x3e4350ff), // DEFAULT_BASE_COLOR_NORMAL
        StyleProp::new(0, 2, 0xdadaf4ff), // DEFAULT_TEXT_COLOR_NORMAL
        StyleProp::new(0, 3, 0xee84a0ff), // DEFAULT_BORDER_COLOR_FOCUSED
        StyleProp::new(0, 4, 0xf4b7c7ff), // DEFAULT_BASE_COLOR_FOCUSED
        StyleProp::new(0, 5, 0xb7657bff), // DEFAULT_TEXT_COLOR_FOCUSED
        StyleProp::new(0, 6, 0xd5c8dbff), // DEFAULT_BORDER_COLOR_PRESSED
        StyleProp::new(0, 7, 0x966ec0ff), // DEFAULT_BASE_COLOR_PRESSED
        StyleProp::new(0, 8, 0xd7ccf7ff), // DEFAULT_TEXT_COLOR_PRESSED
        StyleProp::new(0, 9, 0x8fa2bdff), // DEFAULT_BORDER_COLOR_DISABLED
        StyleProp::new(0, 10, 0x6b798dff), // DEFAULT_BASE_COLOR_DISABLED
        StyleProp::new(0, 11, 0x8292a9ff), // DEFAULT_TEXT_COLOR_DISABLED
        StyleProp::new(0, 16, 16), // DEFAULT_TEXT_SIZE
        StyleProp::new(0, 17, 0), // DEFAULT_TEXT_SPACING
        StyleProp::new(0, 18, 0x84adb7ff), // DEFAULT_LINE_COLOR
        StyleProp::new(0, 19, 0x5b5b81ff), // DEFAULT_BACKGROUND_COLOR
        StyleProp::new(0, 20, 24), // DEFAULT_TEXT_LINE_SPACING
        StyleProp::new(1, 2, 0xe7e6f5ff), // LABEL_TEXT_COLOR_NORMAL
        StyleProp::new(14, 1, 0x4b5067ff), // SCROLLBAR_BASE_COLOR_NORMAL
    ],
};
