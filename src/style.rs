//! Style table - per-control colors, metrics and the active font
//!
//! Layout follows the immediate-mode GUI convention:
//! - 16 controls, each with 16 base properties and 8 extended properties
//! - Values are raw `u32` words; colors are packed `0xRRGGBBAA`
//! - Writing a DEFAULT base property propagates to every control

use crate::error::StyleError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of controls in the table (DEFAULT included)
pub const MAX_CONTROLS: usize = 16;
/// Base properties shared by every control
pub const MAX_PROPS_BASE: usize = 16;
/// Extended properties, meaning depends on the control
pub const MAX_PROPS_EXTENDED: usize = 8;
/// Total properties per control
pub const MAX_PROPS: usize = MAX_PROPS_BASE + MAX_PROPS_EXTENDED;

/// Color representation (RGBA)
#[repr(C)]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, bytemuck::Pod, bytemuck::Zeroable,
)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 24) & 0xFF) as u8,
            g: ((hex >> 16) & 0xFF) as u8,
            b: ((hex >> 8) & 0xFF) as u8,
            a: (hex & 0xFF) as u8,
        }
    }

    pub const fn to_u32(&self) -> u32 {
        ((self.r as u32) << 24) | ((self.g as u32) << 16) | ((self.b as u32) << 8) | (self.a as u32)
    }

    pub const fn transparent() -> Self {
        Self::new(0, 0, 0, 0)
    }

    pub const fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    pub const fn white() -> Self {
        Self::new(255, 255, 255, 255)
    }

    /// Parse a color string like "#RRGGBB" or "#RRGGBBAA"
    pub fn parse_hex(s: &str) -> Option<Self> {
        let hex_str = s.trim().trim_start_matches('#');
        if !hex_str.is_ascii() {
            return None;
        }
        if hex_str.len() == 6 {
            let r = u8::from_str_radix(&hex_str[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex_str[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex_str[4..6], 16).ok()?;
            Some(Color::new(r, g, b, 255))
        } else if hex_str.len() == 8 {
            let r = u8::from_str_radix(&hex_str[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex_str[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex_str[4..6], 16).ok()?;
            let a = u8::from_str_radix(&hex_str[6..8], 16).ok()?;
            Some(Color::new(r, g, b, a))
        } else {
            None
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

/// GUI controls, in table row order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum GuiControl {
    Default = 0,
    Label = 1,
    Button = 2,
    Toggle = 3,
    Slider = 4,
    ProgressBar = 5,
    CheckBox = 6,
    ComboBox = 7,
    DropdownBox = 8,
    TextBox = 9,
    ValueBox = 10,
    Spinner = 11,
    ListView = 12,
    ColorPicker = 13,
    ScrollBar = 14,
    StatusBar = 15,
}

impl GuiControl {
    pub const ALL: [GuiControl; MAX_CONTROLS] = [
        GuiControl::Default,
        GuiControl::Label,
        GuiControl::Button,
        GuiControl::Toggle,
        GuiControl::Slider,
        GuiControl::ProgressBar,
        GuiControl::CheckBox,
        GuiControl::ComboBox,
        GuiControl::DropdownBox,
        GuiControl::TextBox,
        GuiControl::ValueBox,
        GuiControl::Spinner,
        GuiControl::ListView,
        GuiControl::ColorPicker,
        GuiControl::ScrollBar,
        GuiControl::StatusBar,
    ];

    pub fn from_index(index: u32) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    pub fn index(self) -> u32 {
        self as u32
    }

    pub fn name(self) -> &'static str {
        match self {
            GuiControl::Default => "default",
            GuiControl::Label => "label",
            GuiControl::Button => "button",
            GuiControl::Toggle => "toggle",
            GuiControl::Slider => "slider",
            GuiControl::ProgressBar => "progressbar",
            GuiControl::CheckBox => "checkbox",
            GuiControl::ComboBox => "combobox",
            GuiControl::DropdownBox => "dropdownbox",
            GuiControl::TextBox => "textbox",
            GuiControl::ValueBox => "valuebox",
            GuiControl::Spinner => "spinner",
            GuiControl::ListView => "listview",
            GuiControl::ColorPicker => "colorpicker",
            GuiControl::ScrollBar => "scrollbar",
            GuiControl::StatusBar => "statusbar",
        }
    }

    /// Names of the extended properties (index 16 onward) for this control
    pub fn extended_property_names(self) -> &'static [&'static str] {
        match self {
            GuiControl::Default => &[
                "text_size",
                "text_spacing",
                "line_color",
                "background_color",
                "text_line_spacing",
                "text_alignment_vertical",
                "text_wrap_mode",
            ],
            GuiControl::Toggle => &["group_padding"],
            GuiControl::Slider => &["slider_width", "slider_padding"],
            GuiControl::ProgressBar => &["progress_padding"],
            GuiControl::ScrollBar => &[
                "arrows_size",
                "arrows_visible",
                "scroll_slider_padding",
                "scroll_slider_size",
                "scroll_padding",
                "scroll_speed",
            ],
            GuiControl::CheckBox => &["check_padding"],
            GuiControl::ComboBox => &["combo_button_width", "combo_button_spacing"],
            GuiControl::DropdownBox => &["arrow_padding", "dropdown_items_spacing"],
            GuiControl::TextBox => &["text_readonly"],
            GuiControl::Spinner => &["spin_button_width", "spin_button_spacing"],
            GuiControl::ListView => &[
                "list_items_height",
                "list_items_spacing",
                "scrollbar_width",
                "scrollbar_side",
            ],
            GuiControl::ColorPicker => &[
                "color_selector_size",
                "huebar_width",
                "huebar_padding",
                "huebar_selector_height",
                "huebar_selector_overflow",
            ],
            GuiControl::Label
            | GuiControl::Button
            | GuiControl::ValueBox
            | GuiControl::StatusBar => &[],
        }
    }

    /// Resolve a property name (base first, then this control's extended set)
    pub fn property_index(self, name: &str) -> Option<u32> {
        let name = name.trim().to_ascii_lowercase();
        if let Ok(base) = name.parse::<ControlProperty>() {
            return Some(base as u32);
        }
        self.extended_property_names()
            .iter()
            .position(|n| *n == name)
            .map(|i| (MAX_PROPS_BASE + i) as u32)
    }

    /// Human-readable name for a property index, if it has one
    pub fn property_name(self, property: u32) -> Option<&'static str> {
        let property = property as usize;
        if property < MAX_PROPS_BASE {
            ControlProperty::from_index(property as u32).map(ControlProperty::name)
        } else {
            self.extended_property_names().get(property - MAX_PROPS_BASE).copied()
        }
    }
}

impl FromStr for GuiControl {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.name() == lower)
            .ok_or_else(|| StyleError::UnknownControl(s.to_string()))
    }
}

/// Control interaction state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum GuiState {
    Normal = 0,
    Focused = 1,
    Pressed = 2,
    Disabled = 3,
}

/// Which part of a control a color applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum ColorRole {
    Border = 0,
    Base = 1,
    Text = 2,
}

/// Base properties, shared by every control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum ControlProperty {
    BorderColorNormal = 0,
    BaseColorNormal = 1,
    TextColorNormal = 2,
    BorderColorFocused = 3,
    BaseColorFocused = 4,
    TextColorFocused = 5,
    BorderColorPressed = 6,
    BaseColorPressed = 7,
    TextColorPressed = 8,
    BorderColorDisabled = 9,
    BaseColorDisabled = 10,
    TextColorDisabled = 11,
    BorderWidth = 12,
    TextPadding = 13,
    TextAlignment = 14,
}

impl ControlProperty {
    const ALL: [ControlProperty; 15] = [
        ControlProperty::BorderColorNormal,
        ControlProperty::BaseColorNormal,
        ControlProperty::TextColorNormal,
        ControlProperty::BorderColorFocused,
        ControlProperty::BaseColorFocused,
        ControlProperty::TextColorFocused,
        ControlProperty::BorderColorPressed,
        ControlProperty::BaseColorPressed,
        ControlProperty::TextColorPressed,
        ControlProperty::BorderColorDisabled,
        ControlProperty::BaseColorDisabled,
        ControlProperty::TextColorDisabled,
        ControlProperty::BorderWidth,
        ControlProperty::TextPadding,
        ControlProperty::TextAlignment,
    ];

    pub fn from_index(index: u32) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// Color property for a role in a given state
    pub fn color(role: ColorRole, state: GuiState) -> Self {
        Self::ALL[(state as u32 * 3 + role as u32) as usize]
    }

    pub fn name(self) -> &'static str {
        match self {
            ControlProperty::BorderColorNormal => "border_color_normal",
            ControlProperty::BaseColorNormal => "base_color_normal",
            ControlProperty::TextColorNormal => "text_color_normal",
            ControlProperty::BorderColorFocused => "border_color_focused",
            ControlProperty::BaseColorFocused => "base_color_focused",
            ControlProperty::TextColorFocused => "text_color_focused",
            ControlProperty::BorderColorPressed => "border_color_pressed",
            ControlProperty::BaseColorPressed => "base_color_pressed",
            ControlProperty::TextColorPressed => "text_color_pressed",
            ControlProperty::BorderColorDisabled => "border_color_disabled",
            ControlProperty::BaseColorDisabled => "base_color_disabled",
            ControlProperty::TextColorDisabled => "text_color_disabled",
            ControlProperty::BorderWidth => "border_width",
            ControlProperty::TextPadding => "text_padding",
            ControlProperty::TextAlignment => "text_alignment",
        }
    }
}

impl FromStr for ControlProperty {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.iter().copied().find(|p| p.name() == s).ok_or(())
    }
}

/// Extended properties of the DEFAULT control (global text and background)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum DefaultProperty {
    TextSize = 16,
    TextSpacing = 17,
    LineColor = 18,
    BackgroundColor = 19,
    TextLineSpacing = 20,
    TextAlignmentVertical = 21,
    TextWrapMode = 22,
}

/// Horizontal text alignment values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum TextAlignment {
    Left = 0,
    Center = 1,
    Right = 2,
}

/// Vertical text alignment values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum TextAlignmentVertical {
    Top = 0,
    Middle = 1,
    Bottom = 2,
}

/// One row of style data: `table[control][property] = value`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleProp {
    pub control: u32,
    pub property: u32,
    pub value: u32,
}

impl StyleProp {
    pub const fn new(control: u32, property: u32, value: u32) -> Self {
        Self { control, property, value }
    }
}

/// Font the renderer should use with the active style
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontRef {
    pub name: String,
    #[serde(alias = "size")]
    pub base_size: u32,
}

impl FontRef {
    pub fn new(name: impl Into<String>, base_size: u32) -> Self {
        Self { name: name.into(), base_size }
    }
}

impl Default for FontRef {
    fn default() -> Self {
        Self::new("default", 10)
    }
}

const fn base(control: GuiControl, property: ControlProperty, value: u32) -> StyleProp {
    StyleProp::new(control as u32, property as u32, value)
}

const fn ext(control: GuiControl, property: u32, value: u32) -> StyleProp {
    StyleProp::new(control as u32, property, value)
}

/// Library default style; every theme load starts from here
pub const DEFAULT_STYLE_PROPS: &[StyleProp] = {
    use ControlProperty as P;
    use DefaultProperty as D;
    use GuiControl as C;
    &[
        base(C::Default, P::BorderColorNormal, 0x838383ff),
        base(C::Default, P::BaseColorNormal, 0xc9c9c9ff),
        base(C::Default, P::TextColorNormal, 0x686868ff),
        base(C::Default, P::BorderColorFocused, 0x5bb2d9ff),
        base(C::Default, P::BaseColorFocused, 0xc9effeff),
        base(C::Default, P::TextColorFocused, 0x6c9bbcff),
        base(C::Default, P::BorderColorPressed, 0x0492c7ff),
        base(C::Default, P::BaseColorPressed, 0x97e8ffff),
        base(C::Default, P::TextColorPressed, 0x368bafff),
        base(C::Default, P::BorderColorDisabled, 0xb5c1c2ff),
        base(C::Default, P::BaseColorDisabled, 0xe6e9e9ff),
        base(C::Default, P::TextColorDisabled, 0xaeb7b8ff),
        base(C::Default, P::BorderWidth, 1),
        base(C::Default, P::TextPadding, 0),
        base(C::Default, P::TextAlignment, TextAlignment::Center as u32),
        // control overrides
        base(C::Label, P::TextAlignment, TextAlignment::Left as u32),
        base(C::Button, P::BorderWidth, 2),
        base(C::Slider, P::TextPadding, 4),
        base(C::ProgressBar, P::TextPadding, 4),
        base(C::CheckBox, P::TextPadding, 4),
        base(C::CheckBox, P::TextAlignment, TextAlignment::Right as u32),
        base(C::DropdownBox, P::TextPadding, 0),
        base(C::DropdownBox, P::TextAlignment, TextAlignment::Left as u32),
        base(C::TextBox, P::TextPadding, 4),
        base(C::TextBox, P::TextAlignment, TextAlignment::Left as u32),
        base(C::ValueBox, P::TextPadding, 0),
        base(C::ValueBox, P::TextAlignment, TextAlignment::Left as u32),
        base(C::StatusBar, P::TextPadding, 8),
        base(C::StatusBar, P::TextAlignment, TextAlignment::Left as u32),
        // extended
        ext(C::Default, D::TextSize as u32, 10),
        ext(C::Default, D::TextSpacing as u32, 1),
        ext(C::Default, D::LineColor as u32, 0x90abb5ff),
        ext(C::Default, D::BackgroundColor as u32, 0xf5f5f5ff),
        ext(C::Default, D::TextLineSpacing as u32, 15),
        ext(C::Default, D::TextAlignmentVertical as u32, TextAlignmentVertical::Middle as u32),
        ext(C::Toggle, 16, 2),
        ext(C::Slider, 16, 16),
        ext(C::Slider, 17, 1),
        ext(C::ProgressBar, 16, 1),
        ext(C::CheckBox, 16, 1),
        ext(C::ComboBox, 16, 32),
        ext(C::ComboBox, 17, 2),
        ext(C::DropdownBox, 16, 16),
        ext(C::DropdownBox, 17, 2),
        ext(C::ScrollBar, 16, 6),
        ext(C::ScrollBar, 17, 0),
        ext(C::ScrollBar, 18, 0),
        ext(C::ScrollBar, 19, 16),
        ext(C::ScrollBar, 20, 0),
        ext(C::ScrollBar, 21, 12),
        ext(C::Spinner, 16, 24),
        ext(C::Spinner, 17, 2),
        ext(C::ListView, 16, 28),
        ext(C::ListView, 17, 2),
        ext(C::ListView, 18, 12),
        ext(C::ListView, 19, 1),
        ext(C::ColorPicker, 16, 8),
        ext(C::ColorPicker, 17, 16),
        ext(C::ColorPicker, 18, 8),
        ext(C::ColorPicker, 19, 8),
        ext(C::ColorPicker, 20, 2),
    ]
};

/// The active style: every control's properties plus the font reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleTable {
    props: [[u32; MAX_PROPS]; MAX_CONTROLS],
    font: FontRef,
}

impl StyleTable {
    /// Create a table holding the library default style
    pub fn new() -> Self {
        let mut table = Self::zeroed();
        table.apply_props(DEFAULT_STYLE_PROPS);
        table
    }

    fn zeroed() -> Self {
        Self {
            props: [[0; MAX_PROPS]; MAX_CONTROLS],
            font: FontRef::default(),
        }
    }

    /// Overwrite every field with the library default style
    pub fn reset_to_default(&mut self) {
        *self = Self::new();
    }

    /// Read one property
    pub fn get(&self, control: u32, property: u32) -> Result<u32, StyleError> {
        check_bounds(control, property)?;
        Ok(self.props[control as usize][property as usize])
    }

    /// Write one property; DEFAULT base properties propagate to every control
    pub fn set(&mut self, control: u32, property: u32, value: u32) -> Result<(), StyleError> {
        check_bounds(control, property)?;
        self.write(control as usize, property as usize, value);
        Ok(())
    }

    fn write(&mut self, control: usize, property: usize, value: u32) {
        self.props[control][property] = value;
        if control == 0 && property < MAX_PROPS_BASE {
            for row in self.props.iter_mut().skip(1) {
                row[property] = value;
            }
        }
    }

    /// Apply rows already known to be in range
    pub(crate) fn apply_props(&mut self, props: &[StyleProp]) {
        for prop in props {
            debug_assert!(check_bounds(prop.control, prop.property).is_ok());
            self.write(prop.control as usize, prop.property as usize, prop.value);
        }
    }

    pub fn control(&self, control: GuiControl, property: ControlProperty) -> u32 {
        self.props[control as usize][property as usize]
    }

    pub fn set_control(&mut self, control: GuiControl, property: ControlProperty, value: u32) {
        self.write(control as usize, property as usize, value);
    }

    pub fn color(&self, control: GuiControl, property: ControlProperty) -> Color {
        Color::from_hex(self.control(control, property))
    }

    pub fn set_color(&mut self, control: GuiControl, property: ControlProperty, color: Color) {
        self.set_control(control, property, color.to_u32());
    }

    pub fn default_property(&self, property: DefaultProperty) -> u32 {
        self.props[0][property as usize]
    }

    pub fn background_color(&self) -> Color {
        Color::from_hex(self.default_property(DefaultProperty::BackgroundColor))
    }

    pub fn line_color(&self) -> Color {
        Color::from_hex(self.default_property(DefaultProperty::LineColor))
    }

    pub fn text_size(&self) -> u32 {
        self.default_property(DefaultProperty::TextSize)
    }

    pub fn font(&self) -> &FontRef {
        &self.font
    }

    pub fn set_font(&mut self, font: FontRef) {
        self.font = font;
    }

    /// Row-major view of every property word
    pub fn as_words(&self) -> &[u32] {
        bytemuck::cast_slice(&self.props[..])
    }

    /// Properties that differ from `other`, as `(control, property, value)` rows
    pub fn diff(&self, other: &StyleTable) -> Vec<StyleProp> {
        let mut changed = Vec::new();
        for (c, (row, other_row)) in self.props.iter().zip(other.props.iter()).enumerate() {
            for (p, (value, other_value)) in row.iter().zip(other_row.iter()).enumerate() {
                if value != other_value {
                    changed.push(StyleProp::new(c as u32, p as u32, *value));
                }
            }
        }
        changed
    }
}

impl Default for StyleTable {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn check_bounds(control: u32, property: u32) -> Result<(), StyleError> {
    if control as usize >= MAX_CONTROLS {
        return Err(StyleError::InvalidControl(control));
    }
    if property as usize >= MAX_PROPS {
        return Err(StyleError::InvalidProperty {
            control,
            property: property.to_string(),
        });
    }
    Ok(())
}
