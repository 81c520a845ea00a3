//! Candy style: Cream background with peach and coral accents.

use super::ThemeData;
use crate::style::StyleProp;
use crate::theme::ThemeId;

pub(super) const DATA: ThemeData = ThemeData {
    id: ThemeId::Candy,
    font_name: "v5easter",
    font_size: 15,
    props: &[
        StyleProp::new(0, 0, 0xe58b68ff), // DEFAULT_BORDER_COLOR_NORMAL
        StyleProp::new(0, 1, 0xfeda96ff), // DEFAULT_BASE_COLOR_NORMAL
        StyleProp::new(0, 2, 0xe59b5fff), // DEFAULT_TEXT_COLOR_NORMAL
        StyleProp::new(0, 3, 0xee813fff), // DEFAULT_BORDER_COLOR_FOCUSED
        StyleProp::new(0, 4, 0xfcd85bff), // DEFAULT_BASE_COLOR_FOCUSED
        StyleProp::new(0, 5, 0xfc6955ff), // DEFAULT_TEXT_COLOR_FOCUSED
        StyleProp::new(0, 6, 0xb34848ff), // DEFAULT_BORDER_COLOR_PRESSED
        StyleProp::new(0, 7, 0xeb7272ff), // DEFAULT_BASE_COLOR_PRESSED
        StyleProp::new(0, 8, 0xbd4a4aff), // DEFAULT_TEXT_COLOR_PRESSED
        StyleProp::new(0, 9, 0x94795dff), // DEFAULT_BORDER_COLOR_DISABLED
        StyleProp::new(0, 10, 0xc2a37aff), // DEFAULT_BASE_COLOR_DISABLED
        StyleProp::new(0, 11, 0x9c8369ff), // DEFAULT_TEXT_COLOR_DISABLED
        StyleProp::new(0, 16, 15), // DEFAULT_TEXT_SIZE
        StyleProp::new(0, 17, 0), // DEFAULT_TEXT_SPACING
        StyleProp::new(0, 18, 0xd77575ff), // DEFAULT_LINE_COLOR
        StyleProp::new(0, 19, 0xfff5e1ff), // DEFAULT_BACKGROUND_COLOR
        StyleProp::new(0, 20, 22), // DEFAULT_TEXT_LINE_SPACING
        StyleProp::new(1, 5, 0xfc6955ff), // LABEL_TEXT_COLOR_FOCUSED
        StyleProp::new(12, 16, 30), // LISTVIEW_LIST_ITEMS_HEIGHT
    ],
};
