//! Dark style: Neutral grays; the usual choice for tool windows.

use super::ThemeData;
use crate::style::StyleProp;
use crate::theme::ThemeId;

pub(super) const DATA: ThemeData = ThemeData {
    id: ThemeId::Dark,
    font_name: "PixelOperator",
    font_size: 16,
    props: &[
        StyleProp::new(0, 0, 0x878787ff), // DEFAULT_BORDER_COLOR_NORMAL
        StyleProp::new(0, 1, 0x2c2c2cff), // DEFAULT_BASE_COLOR_NORMAL
        StyleProp::new(0, 2, 0xc3c3c3ff), // DEFAULT_TEXT_COLOR_NORMAL
        StyleProp::new(0, 3, 0xe1e1e1ff), // DEFAULT_BORDER_COLOR_FOCUSED
        StyleProp::new(0, 4, 0x848484ff), // DEFAULT_BASE_COLOR_FOCUSED
        StyleProp::new(0, 5, 0x181818ff), // DEFAULT_TEXT_COLOR_FOCUSED
        StyleProp::new(0, 6, 0x000000ff), // DEFAULT_BORDER_COLOR_PRESSED
        StyleProp::new(0, 7, 0xefefefff), // DEFAULT_BASE_COLOR_PRESSED
        StyleProp::new(0, 8, 0x202020ff), // DEFAULT_TEXT_COLOR_PRESSED
        StyleProp::new(0, 9, 0x6a6a6aff), // DEFAULT_BORDER_COLOR_DISABLED
        StyleProp::new(0, 10, 0x818181ff), // DEFAULT_BASE_COLOR_DISABLED
        StyleProp::new(0, 11, 0x606060ff), // DEFAULT_TEXT_COLOR_DISABLED
        StyleProp::new(0, 16, 16), // DEFAULT_TEXT_SIZE
        StyleProp::new(0, 17, 0), // DEFAULT_TEXT_SPACING
        StyleProp::new(0, 18, 0x9d9d9dff), // DEFAULT_LINE_COLOR
        StyleProp::new(0, 19, 0x3c3c3cff), // DEFAULT_BACKGROUND_COLOR
        StyleProp::new(0, 20, 24), // DEFAULT_TEXT_LINE_SPACING
        StyleProp::new(1, 5, 0xf7f7f7ff), // LABEL_TEXT_COLOR_FOCUSED
        StyleProp::new(1, 8, 0x898989ff), // LABEL_TEXT_COLOR_PRESSED
        StyleProp::new(4, 5, 0xb0b0b0ff), // SLIDER_TEXT_COLOR_FOCUSED
        StyleProp::new(5, 5, 0x848484ff), // PROGRESSBAR_TEXT_COLOR_FOCUSED
        StyleProp::new(9, 5, 0xf5f5f5ff), // TEXTBOX_TEXT_COLOR_FOCUSED
        StyleProp::new(10, 5, 0xf6f6f6ff), // VALUEBOX_TEXT_COLOR_FOCUSED
    ],
};
