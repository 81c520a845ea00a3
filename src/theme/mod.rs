//! Theme registry - the closed set of built-in styles
//!
//! Each theme is a constant list of `StyleProp` rows plus a font reference.
//! Loading a theme always starts from the library default style, so the
//! resulting table depends only on the theme, never on what was loaded before.
//!
//! Theme data modules are selected at build time with `theme-<name>` features
//! (`all-themes` enables every one of them).

#[cfg(feature = "theme-amber")]
mod amber;
#[cfg(feature = "theme-ashes")]
mod ashes;
#[cfg(feature = "theme-bluish")]
mod bluish;
#[cfg(feature = "theme-candy")]
mod candy;
#[cfg(feature = "theme-cherry")]
mod cherry;
#[cfg(feature = "theme-cyber")]
mod cyber;
#[cfg(feature = "theme-dark")]
mod dark;
#[cfg(feature = "theme-enefete")]
mod enefete;
#[cfg(feature = "theme-genesis")]
mod genesis;
#[cfg(feature = "theme-jungle")]
mod jungle;
#[cfg(feature = "theme-lavanda")]
mod lavanda;
#[cfg(feature = "theme-rltech")]
mod rltech;
#[cfg(feature = "theme-sunny")]
mod sunny;
#[cfg(feature = "theme-terminal")]
mod terminal;

use crate::error::StyleError;
use crate::style::{FontRef, StyleProp, StyleTable};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Built-in theme identifiers
///
/// Serialized as the lowercase name. Deserializing goes through `FromStr`,
/// so config files accept any case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeId {
    Amber,
    Genesis,
    Jungle,
    Cyber,
    Lavanda,
    Cherry,
    Enefete,
    RLTech,
    Sunny,
    Terminal,
    Bluish,
    Dark,
    Candy,
    Ashes,
}

impl ThemeId {
    /// Themes in selector order; selector index = position + 1 (0 is the default style)
    pub const ALL: [ThemeId; 14] = [
        ThemeId::Jungle,
        ThemeId::Lavanda,
        ThemeId::Dark,
        ThemeId::Bluish,
        ThemeId::Cyber,
        ThemeId::Terminal,
        ThemeId::Candy,
        ThemeId::Cherry,
        ThemeId::Ashes,
        ThemeId::Enefete,
        ThemeId::Sunny,
        ThemeId::Amber,
        ThemeId::Genesis,
        ThemeId::RLTech,
    ];

    pub fn name(self) -> &'static str {
        let name = self.name_with_nul();
        &name[..name.len() - 1]
    }

    /// Name with a trailing NUL, for handing to C as a static string
    pub fn name_with_nul(self) -> &'static str {
        match self {
            ThemeId::Amber => "amber\0",
            ThemeId::Genesis => "genesis\0",
            ThemeId::Jungle => "jungle\0",
            ThemeId::Cyber => "cyber\0",
            ThemeId::Lavanda => "lavanda\0",
            ThemeId::Cherry => "cherry\0",
            ThemeId::Enefete => "enefete\0",
            ThemeId::RLTech => "rltech\0",
            ThemeId::Sunny => "sunny\0",
            ThemeId::Terminal => "terminal\0",
            ThemeId::Bluish => "bluish\0",
            ThemeId::Dark => "dark\0",
            ThemeId::Candy => "candy\0",
            ThemeId::Ashes => "ashes\0",
        }
    }

    /// Selector index (1..=14)
    pub fn index(self) -> u32 {
        Self::ALL.iter().position(|t| *t == self).map_or(0, |i| i as u32 + 1)
    }

    /// Theme for a selector index; 0 and anything past 14 have no theme
    pub fn from_index(index: u32) -> Option<Self> {
        index.checked_sub(1).and_then(|i| Self::ALL.get(i as usize).copied())
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ThemeId {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.name() == lower)
            .ok_or_else(|| StyleError::UnknownTheme(s.to_string()))
    }
}

impl<'de> Deserialize<'de> for ThemeId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

/// Constant data behind one theme
#[derive(Debug)]
pub struct ThemeData {
    pub id: ThemeId,
    pub font_name: &'static str,
    pub font_size: u32,
    pub props: &'static [StyleProp],
}

impl ThemeData {
    pub fn font(&self) -> FontRef {
        FontRef::new(self.font_name, self.font_size)
    }
}

/// Data for a theme, or `None` when its feature is disabled
pub fn lookup(id: ThemeId) -> Option<&'static ThemeData> {
    match id {
        #[cfg(feature = "theme-amber")]
        ThemeId::Amber => Some(&amber::DATA),
        #[cfg(feature = "theme-genesis")]
        ThemeId::Genesis => Some(&genesis::DATA),
        #[cfg(feature = "theme-jungle")]
        ThemeId::Jungle => Some(&jungle::DATA),
        #[cfg(feature = "theme-cyber")]
        ThemeId::Cyber => Some(&cyber::DATA),
        #[cfg(feature = "theme-lavanda")]
        ThemeId::Lavanda => Some(&lavanda::DATA),
        #[cfg(feature = "theme-cherry")]
        ThemeId::Cherry => Some(&cherry::DATA),
        #[cfg(feature = "theme-enefete")]
        ThemeId::Enefete => Some(&enefete::DATA),
        #[cfg(feature = "theme-rltech")]
        ThemeId::RLTech => Some(&rltech::DATA),
        #[cfg(feature = "theme-sunny")]
        ThemeId::Sunny => Some(&sunny::DATA),
        #[cfg(feature = "theme-terminal")]
        ThemeId::Terminal => Some(&terminal::DATA),
        #[cfg(feature = "theme-bluish")]
        ThemeId::Bluish => Some(&bluish::DATA),
        #[cfg(feature = "theme-dark")]
        ThemeId::Dark => Some(&dark::DATA),
        #[cfg(feature = "theme-candy")]
        ThemeId::Candy => Some(&candy::DATA),
        #[cfg(feature = "theme-ashes")]
        ThemeId::Ashes => Some(&ashes::DATA),
        #[allow(unreachable_patterns)]
        _ => None,
    }
}

/// Themes compiled into this build, in selector order
pub fn available() -> impl Iterator<Item = ThemeId> {
    ThemeId::ALL.into_iter().filter(|id| lookup(*id).is_some())
}

/// Replace the whole table with `id`'s values
pub fn load_style(table: &mut StyleTable, id: ThemeId) -> Result<(), StyleError> {
    let data = lookup(id).ok_or(StyleError::ThemeUnavailable(id))?;
    table.reset_to_default();
    table.apply_props(data.props);
    table.set_font(data.font());
    log::debug!("loaded style '{}' ({} properties)", id, data.props.len());
    Ok(())
}

/// Replace the whole table with the library default style
pub fn load_style_default(table: &mut StyleTable) {
    table.reset_to_default();
    log::debug!("loaded default style");
}

/// Fresh table holding exactly `id`'s values
pub fn canonical(id: ThemeId) -> Option<StyleTable> {
    let mut table = StyleTable::new();
    load_style(&mut table, id).ok()?;
    Some(table)
}

#[cfg(all(test, feature = "all-themes"))]
mod tests {
    use super::*;
    use crate::style::{check_bounds, Color, ControlProperty, GuiControl, DEFAULT_STYLE_PROPS};

    #[test]
    fn test_selector_indices() {
        assert_eq!(ThemeId::from_index(0), None);
        assert_eq!(ThemeId::from_index(1), Some(ThemeId::Jungle));
        assert_eq!(ThemeId::from_index(3), Some(ThemeId::Dark));
        assert_eq!(ThemeId::from_index(14), Some(ThemeId::RLTech));
        assert_eq!(ThemeId::from_index(15), None);
        assert_eq!(ThemeId::from_index(u32::MAX), None);
        for id in ThemeId::ALL {
            assert_eq!(ThemeId::from_index(id.index()), Some(id));
        }
    }

    #[test]
    fn test_names_round_trip_and_reject_unknown() {
        for id in ThemeId::ALL {
            assert_eq!(id.name().parse::<ThemeId>().unwrap(), id);
        }
        assert_eq!("RLTech".parse::<ThemeId>().unwrap(), ThemeId::RLTech);
        assert_eq!(
            "solarized".parse::<ThemeId>(),
            Err(StyleError::UnknownTheme("solarized".to_string()))
        );
    }

    #[test]
    fn test_every_theme_is_available() {
        assert_eq!(available().count(), 14);
        for id in ThemeId::ALL {
            assert_eq!(lookup(id).map(|d| d.id), Some(id));
        }
    }

    #[test]
    fn test_theme_data_in_range() {
        for id in ThemeId::ALL {
            let data = lookup(id).unwrap();
            assert!(!data.props.is_empty());
            assert!(data.font_size > 0);
            for prop in data.props {
                assert!(check_bounds(prop.control, prop.property).is_ok(), "{id}: {prop:?}");
            }
        }
        for prop in DEFAULT_STYLE_PROPS {
            assert!(check_bounds(prop.control, prop.property).is_ok());
        }
    }

    #[test]
    fn test_load_writes_every_non_default_row() {
        for id in ThemeId::ALL {
            let table = canonical(id).unwrap();
            let data = lookup(id).unwrap();
            for prop in data.props.iter().filter(|p| p.control != 0) {
                assert_eq!(table.get(prop.control, prop.property).unwrap(), prop.value, "{id}: {prop:?}");
            }
            assert_eq!(table.font(), &data.font());
        }
    }

    #[test]
    fn test_golden_values() {
        // (theme, background, DEFAULT border/base/text normal, font, size)
        let golden = [
            (ThemeId::Jungle, 0x2b3a3aff, [0x60827dff, 0x2c3334ff, 0x82a29fff], "Pixel Intv", 12),
            (ThemeId::Lavanda, 0x5b5b81ff, [0xab9bd3ff, 0x3e4350ff, 0xdadaf4ff], "Cartridge", 16),
            (ThemeId::Dark, 0x3c3c3cff, [0x878787ff, 0x2c2c2cff, 0xc3c3c3ff], "PixelOperator", 16),
            (ThemeId::Bluish, 0xe8eef1ff, [0x5ca6a6ff, 0xb4e8f3ff, 0x447e77ff], "homespun", 10),
            (ThemeId::Cyber, 0x00222bff, [0x2f7486ff, 0x024658ff, 0x51bfd3ff], "Kyrou 7 Wide", 14),
            (ThemeId::Terminal, 0x0c1505ff, [0x1c8d00ff, 0x161313ff, 0x38f620ff], "Mecha", 16),
            (ThemeId::Candy, 0xfff5e1ff, [0xe58b68ff, 0xfeda96ff, 0xe59b5fff], "v5easter", 15),
            (ThemeId::Cherry, 0x3a1720ff, [0xda5757ff, 0x753233ff, 0xe17373ff], "Westington", 15),
            (ThemeId::Ashes, 0x6b6b6bff, [0xf0f0f0ff, 0x868686ff, 0xe6e6e6ff], "v5loxical", 16),
            (ThemeId::Enefete, 0x29c9b8ff, [0x1980d5ff, 0x4df3ebff, 0x103e60ff], "GenericMobileSystemNuevo", 16),
            (ThemeId::Sunny, 0xf0be4bff, [0x9c760aff, 0x594006ff, 0xf6d519ff], "GenericMobileSystemNuevo", 16),
            (ThemeId::Amber, 0x333333ff, [0x898988ff, 0x292929ff, 0xd4d4d4ff], "hello-world", 16),
            (ThemeId::Genesis, 0x1b1c1eff, [0x6e7174ff, 0x2d2f33ff, 0xb9bcc0ff], "Retron2000", 16),
            (ThemeId::RLTech, 0xf5f5f5ff, [0x1e1e1eff, 0xf5f5f5ff, 0x1e1e1eff], "PixAntiqua", 16),
        ];
        assert_eq!(golden.len(), ThemeId::ALL.len());

        let normal = [
            ControlProperty::BorderColorNormal,
            ControlProperty::BaseColorNormal,
            ControlProperty::TextColorNormal,
        ];
        for (i, (id, background, colors, font, size)) in golden.into_iter().enumerate() {
            assert_eq!(ThemeId::ALL[i], id);
            let table = canonical(id).unwrap();
            assert_eq!(table.background_color(), Color::from_hex(background), "{id}");
            for (property, color) in normal.into_iter().zip(colors) {
                assert_eq!(table.color(GuiControl::Default, property), Color::from_hex(color), "{id}");
                // Spinner has no per-theme overrides, so it shows the propagated value.
                assert_eq!(table.color(GuiControl::Spinner, property), Color::from_hex(color), "{id}");
            }
            assert_eq!(table.font(), &FontRef::new(font, size), "{id}");
            assert_eq!(table.text_size(), size, "{id}");
        }
    }

    #[test]
    fn test_golden_overrides() {
        use ControlProperty as P;
        use GuiControl as C;
        let golden = [
            (ThemeId::Amber, C::Label, P::TextColorFocused, 0xffffffff),
            (ThemeId::Amber, C::Slider, P::TextColorFocused, 0xf1cf9dff),
            (ThemeId::Genesis, C::Label, P::TextColorNormal, 0xd7dadeff),
            (ThemeId::Lavanda, C::Label, P::TextColorNormal, 0xe7e6f5ff),
            (ThemeId::Lavanda, C::ScrollBar, P::BaseColorNormal, 0x4b5067ff),
            (ThemeId::Cherry, C::TextBox, P::TextColorFocused, 0xfbd8cfff),
            (ThemeId::Cherry, C::ValueBox, P::TextColorFocused, 0xfbd8cfff),
            (ThemeId::Enefete, C::Label, P::TextColorFocused, 0x2ef3e0ff),
            (ThemeId::Sunny, C::Label, P::TextColorNormal, 0x504506ff),
            (ThemeId::Sunny, C::Label, P::TextColorPressed, 0xf5e8a4ff),
            (ThemeId::Ashes, C::TextBox, P::TextColorFocused, 0x5b6462ff),
            (ThemeId::Dark, C::ProgressBar, P::TextColorFocused, 0x848484ff),
            (ThemeId::Candy, C::Label, P::TextColorFocused, 0xfc6955ff),
        ];
        for (id, control, property, color) in golden {
            let table = canonical(id).unwrap();
            assert_eq!(table.color(control, property), Color::from_hex(color), "{id} {control:?}");
        }

        let rltech = canonical(ThemeId::RLTech).unwrap();
        assert_eq!(rltech.control(C::Default, P::BorderWidth), 2);
        assert_eq!(rltech.control(C::Label, P::BorderWidth), 0);
        assert_eq!(rltech.control(C::ScrollBar, P::BorderWidth), 1);
    }

    #[test]
    fn test_load_is_idempotent() {
        let mut table = StyleTable::new();
        load_style(&mut table, ThemeId::Amber).unwrap();
        let first = table.clone();
        load_style(&mut table, ThemeId::Amber).unwrap();
        assert_eq!(table, first);
        assert_eq!(table.as_words(), first.as_words());
    }

    #[test]
    fn test_overwrite_leaves_no_residue() {
        for a in ThemeId::ALL {
            for b in ThemeId::ALL {
                let mut table = StyleTable::new();
                load_style(&mut table, a).unwrap();
                load_style(&mut table, b).unwrap();
                assert_eq!(Some(table), canonical(b), "{a} then {b}");
            }
        }
    }

    #[test]
    fn test_dark_then_candy_background() {
        let mut table = StyleTable::new();
        load_style(&mut table, ThemeId::Dark).unwrap();
        load_style(&mut table, ThemeId::Candy).unwrap();
        assert_eq!(table.background_color(), Color::from_hex(0xfff5e1ff));
        assert_ne!(table.background_color(), Color::from_hex(0x3c3c3cff));
    }

    #[test]
    fn test_theme_override_is_cleared_by_next_load() {
        // Dark sets a label-specific focused text color; Terminal does not.
        let mut table = StyleTable::new();
        load_style(&mut table, ThemeId::Dark).unwrap();
        assert_eq!(
            table.color(GuiControl::Label, ControlProperty::TextColorFocused),
            Color::from_hex(0xf7f7f7ff)
        );
        load_style(&mut table, ThemeId::Terminal).unwrap();
        assert_eq!(
            table.color(GuiControl::Label, ControlProperty::TextColorFocused),
            Color::from_hex(0xdcfadcff)
        );
    }

    #[test]
    fn test_load_default_restores_library_style() {
        let mut table = StyleTable::new();
        load_style(&mut table, ThemeId::Cherry).unwrap();
        load_style_default(&mut table);
        assert_eq!(table, StyleTable::new());
    }

    #[test]
    fn test_themes_are_distinct() {
        let tables: Vec<StyleTable> = ThemeId::ALL.iter().filter_map(|id| canonical(*id)).collect();
        for (i, a) in tables.iter().enumerate() {
            for b in &tables[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}

#[cfg(all(test, not(feature = "theme-amber")))]
mod unavailable_tests {
    use super::*;
    use crate::style::{ControlProperty, GuiControl};

    #[test]
    fn test_compiled_out_theme_is_rejected() {
        assert!(lookup(ThemeId::Amber).is_none());
        assert!(available().all(|id| id != ThemeId::Amber));
        assert_eq!(canonical(ThemeId::Amber), None);

        let mut table = StyleTable::new();
        table.set_control(GuiControl::Button, ControlProperty::BorderWidth, 3);
        let before = table.clone();
        assert_eq!(
            load_style(&mut table, ThemeId::Amber),
            Err(StyleError::ThemeUnavailable(ThemeId::Amber))
        );
        assert_eq!(table, before);
    }
}
