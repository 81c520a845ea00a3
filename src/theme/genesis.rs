//! Genesis style: Charcoal panels with cyan and orange accents.

use super::ThemeData;
use crate::style::StyleProp;
use crate::theme::ThemeId;

pub(super) const DATA: ThemeData = ThemeData {
    id: ThemeId::Genesis,
    font_name: "Retron2000",
    font_size: 16,
    props: &[
        StyleProp::new(0, 0, 0x6e7174ff), // DEFAULT_BORDER_COLOR_NORMAL
        StyleProp::new(0, 1, 0x2d2f33ff), // DEFAULT_BASE_COLOR_NORMAL
        StyleProp::new(0, 2, 0xb9bcc0ff), // DEFAULT_TEXT_COLOR_NORMAL
        StyleProp::new(0, 3, 0x5ec2d0ff), // DEFAULT_BORDER_COLOR_FOCUSED
        StyleProp::new(0, 4, 0x24484eff), // DEFAULT_BASE_COLOR_FOCUSED
        StyleProp::new(0, 5, 0xa8e3ecff), // DEFAULT_TEXT_COLOR_FOCUSED
        StyleProp::new(0, 6, 0xf2994aff), // DEFAULT_BORDER_COLOR_PRESSED
        StyleProp::new(0, 7, 0x5a3a1eff), // DEFAULT_BASE_COLOR_PRESSED
        StyleProp::new(0, 8, 0xffc892ff), // DEFAULT_TEXT_COLOR_PRESSED
        StyleProp::new(0, 9, 0x3b3d40ff), // DEFAULT_BORDER_COLOR_DISABLED
        StyleProp::new(0, 10, 0x26272aff), // DEFAULT_BASE_COLOR_DISABLED
        StyleProp::new(0, 11, 0x5c5f63ff), // DEFAULT_TEXT_COLOR_DISABLED
        StyleProp::new(0, 16, 16), // DEFAULT_TEXT_SIZE
        StyleProp::new(0, 17, 0), // DEFAULT_TEXT_SPACING
        StyleProp::new(0, 18, 0x5ec2d0ff), // DEFAULT_LINE_COLOR
        StyleProp::new(0, 19, 0x1b1c1eff), // DEFAULT_BACKGROUND_COLOR
        StyleProp::new(0, 20, 24), // DEFAULT_TEXT_LINE_SPACING
        StyleProp::new(1, 2, 0xd7dadeff), // LABEL_TEXT_COLOR_NORMAL
        StyleProp::new(12, 16, 32), // LISTVIEW_LIST_ITEMS_HEIGHT
        StyleProp::new(14, 12, 0), // SCROLLBAR_BORDER_WIDTH
    ],
};
