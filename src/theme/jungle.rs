//! Jungle style: Muted greens and teal over a dark slate background.

use super::ThemeData;
use crate::style::StyleProp;
use crate::theme::ThemeId;

pub(super) const DATA: ThemeData = ThemeData {
    id: ThemeId::Jungle,
    font_name: "Pixel Intv",
    font_size: 12,
    props: &[
        StyleProp::new(0, 0, 0x60827dff), // DEFAULT_BORDER_COLOR_NORMAL
        StyleProp::new(0, 1, 0x2c3334ff), // DEFAULT_BASE_COLOR_NORMAL
        StyleProp::new(0, 2, 0x82a29fff), // DEFAULT_TEXT_COLOR_NORMAL
        StyleProp::new(0, 3, 0x5f9aa8ff), // DEFAULT_BORDER_COLOR_FOCUSED
        StyleProp::new(0, 4, 0x334e57ff), // DEFAULT_BASE_COLOR_FOCUSED
        StyleProp::new(0, 5, 0x6aa9b8ff), // DEFAULT_TEXT_COLOR_FOCUSED
        StyleProp::new(0, 6, 0xa9cb8dff), // DEFAULT_BORDER_COLOR_PRESSED
        StyleProp::new(0, 7, 0x3b6357ff), // DEFAULT_BASE_COLOR_PRESSED
        StyleProp::new(0, 8, 0x97af81ff), // DEFAULT_TEXT_COLOR_PRESSED
        StyleProp::new(0, 9, 0x5b6462ff), // DEFAULT_BORDER_COLOR_DISABLED
        StyleProp::new(0, 10, 0x2c3334ff), // DEFAULT_BASE_COLOR_DISABLED
        StyleProp::new(0, 11, 0x666b69ff), // DEFAULT_TEXT_COLOR_DISABLED
        StyleProp::new(0, 16, 12), // DEFAULT_TEXT_SIZE
        StyleProp::new(0, 17, 0), // DEFAULT_TEXT_SPACING
        StyleProp::new(0, 18, 0x638465ff), // DEFAULT_LINE_COLOR
        StyleProp::new(0, 19, 0x2b3a3aff), // DEFAULT_BACKGROUND_COLOR
        StyleProp::new(0, 20, 18), // DEFAULT_TEXT_LINE_SPACING
        StyleProp::new(4, 5, 0x5f9aa8ff), // SLIDER_TEXT_COLOR_FOCUSED
        StyleProp::new(9, 5, 0x6aa9b8ff), // TEXTBOX_TEXT_COLOR_FOCUSED
        StyleProp::new(10, 5, 0x6aa9b8ff), // VALUEBOX_TEXT_COLOR_FOCUSED
    ],
};
