//! Enefete style: Bright cyan with magenta pressed states.

use super::ThemeData;
use crate::style::StyleProp;
use crate::theme::ThemeId;

pub(super) const DATA: ThemeData = ThemeData {
    id: ThemeId::Enefete,
    font_name: "GenericMobileSystemNuevo",
    font_size: 16,
    props: &[
        StyleProp::new(0, 0, 0x1980d5ff), // DEFAULT_BORDER_COLOR_NORMAL
        StyleProp::new(0, 1, 0x4df3ebff), // DEFAULT_BASE_COLOR_NORMAL
        StyleProp::new(0, 2, 0x103e60ff), // DEFAULT_TEXT_COLOR_NORMAL
        StyleProp::new(0, 3, 0xe7e2f7ff), // DEFAULT_BORDER_COLOR_FOCUSED
        StyleProp::new(0, 4, 0x23d4ddff), // DEFAULT_BASE_COLOR_FOCUSED
        StyleProp::new(0, 5, 0xf1f1f1ff), // DEFAULT_TEXT_COLOR_FOCUSED
        StyleProp::new(0, 6, 0x6413a6ff), // DEFAULT_BORDER_COLOR_PRESSED
        StyleProp::new(0, 7, 0xea66d9ff), // DEFAULT_BASE_COLOR_PRESSED
        StyleProp::new(0, 8, 0x9f00bbff), // DEFAULT_TEXT_COLOR_PRESSED
        StyleProp::new(0, 9, 0x4b909eff), // DEFAULT_BORDER_COLOR_DISABLED
        StyleProp::new(0, 10, 0x73c7d0ff), // DEFAULT_BASE_COLOR_DISABLED
        StyleProp::new(0, 11, 0x448894ff), // DEFAULT_TEXT_COLOR_DISABLED
        StyleProp::new(0, 16, 16), // DEFAULT_TEXT_SIZE
        StyleProp::new(0, 17, 0), // DEFAULT_TEXT_SPACING
        StyleProp::new(0, 18, 0x1d9f74ff), // DEFAULT_LINE_COLOR
        StyleProp::new(0, 19, 0x29c9b8ff), // DEFAULT_BACKGROUND_COLOR
        StyleProp::new(0, 20, 24), // DEFAULT_TEXT_LINE_SPACING
        StyleProp::new(1, 2, 0xe7e2f7ff), // LABEL_TEXT_COLOR_NORMAL
        StyleProp::new(1, 5, 0x2ef3e0ff), // LABEL_TEXT_COLOR_FOCUSED
    ],
};
