//! Cherry style: Deep cherry reds with pale pink highlights.

use super::ThemeData;
use crate::style::StyleProp;
use crate::theme::ThemeId;

pub(super) const DATA: ThemeData = ThemeData {
    id: ThemeId::Cherry,
    font_name: "Westington",
    font_size: 15,
    props: &[
        StyleProp::new(0, 0, 0xda5757ff), // DEFAULT_BORDER_COLOR_NORMAL
        StyleProp::new(0, 1, 0x753233ff), // DEFAULT_BASE_COLOR_NORMAL
        StyleProp::new(0, 2, 0xe17373ff), // DEFAULT_TEXT_COLOR_NORMAL
        StyleProp::new(0, 3, 0xfaaa97ff), // DEFAULT_BORDER_COLOR_FOCUSED
        StyleProp::new(0, 4, 0xe06262ff), // DEFAULT_BASE_COLOR_FOCUSED
        StyleProp::new(0, 5, 0xfdb4aaff), // DEFAULT_TEXT_COLOR_FOCUSED
        StyleProp::new(0, 6, 0xe03c46ff), // DEFAULT_BORDER_COLOR_PRESSED
        StyleProp::new(0, 7, 0x5b1e20ff), // DEFAULT_BASE_COLOR_PRESSED
        StyleProp::new(0, 8, 0xc2474fff), // DEFAULT_TEXT_COLOR_PRESSED
        StyleProp::new(0, 9, 0xa19292ff), // DEFAULT_BORDER_COLOR_DISABLED
        StyleProp::new(0, 10, 0x706060ff), // DEFAULT_BASE_COLOR_DISABLED
        StyleProp::new(0, 11, 0x9e8585ff), // DEFAULT_TEXT_COLOR_DISABLED
        StyleProp::new(0, 16, 15), // DEFAULT_TEXT_SIZE
        StyleProp::new(0, 17, 0), // DEFAULT_TEXT_SPACING
        StyleProp::new(0, 18, 0xfb8170ff), // DEFAULT_LINE_COLOR
        StyleProp::new(0, 19, 0x3a1720ff), // DEFAULT_BACKGROUND_COLOR
        StyleProp::new(0, 20, 22), // DEFAULT_TEXT_LINE_SPACING
        StyleProp::new(9, 5, 0xfbd8cfff), // TEXTBOX_TEXT_COLOR_FOCUSED
        StyleProp::new(10, 5, 0xfbd8cfff), // VALUEBOX_TEXT_COLOR_FOCUSED
    ],
};
