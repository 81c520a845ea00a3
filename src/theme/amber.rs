//! Amber style: Dark charcoal panels with amber focus highlights.

use super::ThemeData;
use crate::style::StyleProp;
use crate::theme::ThemeId;

pub(super) const DATA: ThemeData = ThemeData {
    id: ThemeId::Amber,
    font_name: "hello-world",
    font_size: 16,
    props: &[
        StyleProp::new(0, 0, 0x898988ff), // DEFAULT_BORDER_COLOR_NORMAL
        StyleProp::new(0, 1, 0x292929ff), // DEFAULT_BASE_COLOR_NORMAL
        StyleProp::new(0, 2, 0xd4d4d4ff), // DEFAULT_TEXT_COLOR_NORMAL
        StyleProp::new(0, 3, 0xeb891dff), // DEFAULT_BORDER_COLOR_FOCUSED
        StyleProp::new(0, 4, 0x292929ff), // DEFAULT_BASE_COLOR_FOCUSED
        StyleProp::new(0, 5, 0xffffffff), // DEFAULT_TEXT_COLOR_FOCUSED
        StyleProp::new(0, 6, 0xf1cf9dff), // DEFAULT_BORDER_COLOR_PRESSED
        StyleProp::new(0, 7, 0xf39333ff), // DEFAULT_BASE_COLOR_PRESSED
        StyleProp::new(0, 8, 0x191410ff), // DEFAULT_TEXT_COLOR_PRESSED
        StyleProp::new(0, 9, 0x6a6a6aff), // DEFAULT_BORDER_COLOR_DISABLED
        StyleProp::new(0, 10, 0x818181ff), // DEFAULT_BASE_COLOR_DISABLED
        StyleProp::new(0, 11, 0x606060ff), // DEFAULT_TEXT_COLOR_DISABLED
        StyleProp::new(0, 16, 16), // DEFAULT_TEXT_SIZE
        StyleProp::new(0, 17, 0), // DEFAULT_TEXT_SPACING
        StyleProp::new(0, 18, 0xef922aff), // DEFAULT_LINE_COLOR
        StyleProp::new(0, 19, 0x333333ff), // DEFAULT_BACKGROUND_COLOR
        StyleProp::new(0, 20, 24), // DEFAULT_TEXT_LINE_SPACING
        StyleProp::new(1, 5, 0xffffffff), // LABEL_TEXT_COLOR_FOCUSED
        StyleProp::new(1, 8, 0x191410ff), // LABEL_TEXT_COLOR_PRESSED
        StyleProp::new(4, 5, 0xf1cf9dff), // SLIDER_TEXT_COLOR_FOCUSED
        StyleProp::new(9, 5, 0xf5f5f5ff), // TEXTBOX_TEXT_COLOR_FOCUSED
        StyleProp::new(10, 5, 0xf6f6f6ff), // VALUEBOX_TEXT_COLOR_FOCUSED
    ],
};
