//! User-supplied style sheets
//!
//! A sheet is validated when it is built, so applying it never fails half-way.
//! Unlike a theme load, applying a sheet layers its rows over the current table
//! (after loading `base`, when one is named).

use crate::error::StyleError;
use crate::rgs;
use crate::style::{check_bounds, Color, FontRef, GuiControl, StyleProp, StyleTable, MAX_PROPS};
use crate::theme::{self, ThemeId};
use serde::Deserialize;
use std::path::Path;

/// Parsed, range-checked style overrides
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyleSheet {
    base: Option<ThemeId>,
    font: Option<FontRef>,
    props: Vec<StyleProp>,
}

impl StyleSheet {
    pub(crate) fn new(base: Option<ThemeId>, font: Option<FontRef>, props: Vec<StyleProp>) -> Self {
        Self { base, font, props }
    }

    pub fn base(&self) -> Option<ThemeId> {
        self.base
    }

    pub fn font(&self) -> Option<&FontRef> {
        self.font.as_ref()
    }

    pub fn props(&self) -> &[StyleProp] {
        &self.props
    }

    /// Parse `.rgs` text
    pub fn from_rgs(text: &str) -> Result<Self, StyleError> {
        rgs::parse(text)
    }

    /// Render as `.rgs` text (the base theme, if any, is not representable and is dropped)
    pub fn to_rgs(&self) -> String {
        rgs::write(self)
    }

    /// Parse the TOML form
    pub fn from_toml(toml_str: &str) -> Result<Self, StyleError> {
        let raw: TomlSheet = toml::from_str(toml_str)?;

        let base = raw.base.as_deref().map(str::parse::<ThemeId>).transpose()?;
        let props = raw
            .props
            .into_iter()
            .map(TomlProp::resolve)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(base, raw.font, props))
    }

    /// Load a `.rgs` or `.toml` file
    pub fn load_file(path: impl AsRef<Path>) -> Result<Self, StyleError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase).as_deref() {
            Some("rgs") => Self::from_rgs(&text),
            Some("toml") => Self::from_toml(&text),
            _ => Err(StyleError::Io(format!(
                "unsupported style file extension: {}",
                path.display()
            ))),
        }
    }

    /// Rows that rebuild `table` when applied over the default style
    pub fn from_table(table: &StyleTable) -> Self {
        let defaults = StyleTable::new();

        // DEFAULT rows go first; they propagate, so the other controls are
        // diffed against the propagated baseline rather than the raw default.
        let mut props: Vec<StyleProp> =
            table.diff(&defaults).into_iter().filter(|p| p.control == 0).collect();
        let mut baseline = defaults;
        baseline.apply_props(&props);
        props.extend(table.diff(&baseline).into_iter().filter(|p| p.control != 0));

        let font = (table.font() != &FontRef::default()).then(|| table.font().clone());
        Self::new(None, font, props)
    }

    /// Apply over `table`; the table is untouched if the base theme is unavailable
    pub fn apply(&self, table: &mut StyleTable) -> Result<(), StyleError> {
        if let Some(base) = self.base {
            theme::load_style(table, base)?;
        }
        table.apply_props(&self.props);
        if let Some(font) = &self.font {
            table.set_font(font.clone());
        }
        log::debug!("applied style sheet ({} properties)", self.props.len());
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct TomlSheet {
    base: Option<String>,
    font: Option<FontRef>,
    #[serde(default, rename = "prop")]
    props: Vec<TomlProp>,
}

#[derive(Debug, Deserialize)]
struct TomlProp {
    control: Key,
    property: Key,
    value: Value,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Key {
    Index(u32),
    Name(String),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Value {
    Int(i64),
    Color(String),
}

impl TomlProp {
    fn resolve(self) -> Result<StyleProp, StyleError> {
        let control = match self.control {
            Key::Index(i) => GuiControl::from_index(i).ok_or(StyleError::InvalidControl(i))?,
            Key::Name(name) => name.parse::<GuiControl>()?,
        };
        let property = match self.property {
            Key::Index(p) if (p as usize) < MAX_PROPS => p,
            Key::Index(p) => {
                return Err(StyleError::InvalidProperty {
                    control: control.index(),
                    property: p.to_string(),
                })
            }
            Key::Name(name) => {
                control.property_index(&name).ok_or(StyleError::InvalidProperty {
                    control: control.index(),
                    property: name,
                })?
            }
        };
        let value = match self.value {
            Value::Int(v) if v < 0 => i32::try_from(v).map(|v| v as u32).ok(),
            Value::Int(v) => u32::try_from(v).ok(),
            Value::Color(s) => Color::parse_hex(&s).map(|c| c.to_u32()),
        }
        .ok_or_else(|| {
            StyleError::Toml(format!(
                "value out of range for {}.{}",
                control.name(),
                property
            ))
        })?;

        check_bounds(control.index(), property)?;
        Ok(StyleProp::new(control.index(), property, value))
    }
}
