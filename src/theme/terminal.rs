//! Terminal style: Phosphor green on black.

use super::ThemeData;
use crate::style::StyleProp;
use crate::theme::ThemeId;

pub(super) const DATA: ThemeData = ThemeData {
    id: ThemeId::Terminal,
    font_name: "Mecha",
    font_size: 16,
    props: &[
        StyleProp::new(0, 0, 0x1c8d00ff), // DEFAULT_BORDER_COLOR_NORMAL
        StyleProp::new(0, 1, 0x161313ff), // DEFAULT_BASE_COLOR_NORMAL
        StyleProp::new(0, 2, 0x38f620ff), // DEFAULT_TEXT_COLOR_NORMAL
        StyleProp::new(0, 3, 0xc3fbc6ff), // DEFAULT_BORDER_COLOR_FOCUSED
        StyleProp::new(0, 4, 0x43bf2eff), // DEFAULT_BASE_COLOR_FOCUSED
        StyleProp::new(0, 5, 0xdcfadcff), // DEFAULT_TEXT_COLOR_FOCUSED
        StyleProp::new(0, 6, 0x1f5b19ff), // DEFAULT_BORDER_COLOR_PRESSED
        StyleProp::new(0, 7, 0x43ff28ff), // DEFAULT_BASE_COLOR_PRESSED
        StyleProp::new(0, 8, 0x1e6f15ff), // DEFAULT_TEXT_COLOR_PRESSED
        StyleProp::new(0, 9, 0x223b22ff), // DEFAULT_BORDER_COLOR_DISABLED
        StyleProp::new(0, 10, 0x182c18ff), // DEFAULT_BASE_COLOR_DISABLED
        StyleProp::new(0, 11, 0x244125ff), // DEFAULT_TEXT_COLOR_DISABLED
        StyleProp::new(0, 16, 16), // DEFAULT_TEXT_SIZE
        StyleProp::new(0, 17, 0), // DEFAULT_TEXT_SPACING
        StyleProp::new(0, 18, 0xe6fce3ff), // DEFAULT_LINE_COLOR
        StyleProp::new(0, 19, 0x0c1505ff), // DEFAULT_BACKGROUND_COLOR
        StyleProp::new(0, 20, 24), // DEFAULT_TEXT_LINE_SPACING
    ],
};
