//! Sunny style: Warm yellow background with brown controls.

use super::ThemeData;
use crate::style::StyleProp;
use crate::theme::ThemeId;

pub(super) const DATA: ThemeData = ThemeData {
    id: ThemeId::Sunny,
    font_name: "GenericMobileSystemNuevo",
    font_size: 16,
    props: &[
        StyleProp::new(0, 0, 0x9c760aff), // DEFAULT_BORDER_COLOR_NORMAL
        StyleProp::new(0, 1, 0x594006ff), // DEFAULT_BASE_COLOR_NORMAL
        StyleProp::new(0, 2, 0xf6d519ff), // DEFAULT_TEXT_COLOR_NORMAL
        StyleProp::new(0, 3, 0xf6e46fff), // DEFAULT_BORDER_COLOR_FOCUSED
        StyleProp::new(0, 4, 0xf0be4bff), // DEFAULT_BASE_COLOR_FOCUSED
        StyleProp::new(0, 5, 0xfff1b2ff), // DEFAULT_TEXT_COLOR_FOCUSED
        StyleProp::new(0, 6, 0x9e5e04ff), // DEFAULT_BORDER_COLOR_PRESSED
        StyleProp::new(0, 7, 0xd5a84fff), // DEFAULT_BASE_COLOR_PRESSED
        StyleProp::new(0, 8, 0x4d2e06ff), // DEFAULT_TEXT_COLOR_PRESSED
        StyleProp::new(0, 9, 0x685a33ff), // DEFAULT_BORDER_COLOR_DISABLED
        StyleProp::new(0, 10, 0x4d3f1dff), // DEFAULT_BASE_COLOR_DISABLED
        StyleProp::new(0, 11, 0x8f7a4bff), // DEFAULT_TEXT_COLOR_DISABLED
        StyleProp::new(0, 16, 16), // DEFAULT_TEXT_SIZE
        StyleProp::new(0, 17, 0), // DEFAULT_TEXT_SPACING
        StyleProp::new(0, 18, 0x725706ff), // DEFAULT_LINE_COLOR
        StyleProp::new(0, 19, 0xf0be4bff), // DEFAULT_BACKGROUND_COLOR
        StyleProp::new(0, 20, 24), // DEFAULT_TEXT_LINE_SPACING
        StyleProp::new(1, 2, 0x504506ff), // LABEL_TEXT_COLOR_NORMAL
        StyleProp::new(1, 5, 0xfdeb9bff), // LABEL_TEXT_COLOR_FOCUSED
        StyleProp::new(1, 8, 0xf5e8a4ff), // LABEL_TEXT_COLOR_PRESSED
        StyleProp::new(2, 2, 0x594006ff), // BUTTON_TEXT_COLOR_NORMAL
        StyleProp::new(12, 2, 0x594006ff), // LISTVIEW_TEXT_COLOR_NORMAL
    ],
};
