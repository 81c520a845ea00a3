//! GUI Style Engine - theme registry and style table for immediate-mode GUIs
//!
//! This library owns the style data an immediate-mode widget renderer reads on
//! every draw: per-control colors and metrics plus the active font reference.
//! A fixed set of built-in themes can be loaded by identifier, and user styles
//! can be layered on top from `.rgs` or TOML sheets. The crate also builds as a
//! C dynamic library so a host runtime can bind one symbol per theme.

// Core modules
pub mod error;
#[cfg(not(target_arch = "wasm32"))]
pub mod ffi;
pub mod rgs;
pub mod sheet;
pub mod style;
pub mod theme;

// Re-exports for convenience
pub use error::StyleError;
pub use sheet::StyleSheet;
pub use style::{Color, ControlProperty, DefaultProperty, FontRef, GuiControl, StyleTable};
pub use theme::ThemeId;

use std::path::Path;

/// Style context configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StyleConfig {
    /// Theme applied when the context is created (library default style if unset)
    #[serde(default)]
    pub initial_theme: Option<ThemeId>,
    /// Log every theme and sheet load at info level
    #[serde(default)]
    pub log_loads: bool,
}

impl StyleConfig {
    pub fn from_json(json: &str) -> Result<Self, StyleError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_toml(toml_str: &str) -> Result<Self, StyleError> {
        Ok(toml::from_str(toml_str)?)
    }
}

/// Owner of one style table; the single writer the renderer reads from
#[derive(Debug, Clone)]
pub struct StyleContext {
    config: StyleConfig,
    table: StyleTable,
}

impl StyleContext {
    /// Create a context, applying `config.initial_theme` when set
    pub fn new(config: StyleConfig) -> Result<Self, StyleError> {
        let mut context = Self {
            table: StyleTable::new(),
            config,
        };
        if let Some(id) = context.config.initial_theme {
            context.load_theme(id)?;
        }
        Ok(context)
    }

    pub fn config(&self) -> &StyleConfig {
        &self.config
    }

    pub fn table(&self) -> &StyleTable {
        &self.table
    }

    pub fn table_mut(&mut self) -> &mut StyleTable {
        &mut self.table
    }

    /// Replace the table with a built-in theme
    pub fn load_theme(&mut self, id: ThemeId) -> Result<(), StyleError> {
        theme::load_style(&mut self.table, id)?;
        if self.config.log_loads {
            log::info!("style theme '{}' loaded", id);
        }
        Ok(())
    }

    /// Replace the table with the library default style
    pub fn load_default(&mut self) {
        theme::load_style_default(&mut self.table);
        if self.config.log_loads {
            log::info!("default style loaded");
        }
    }

    /// Layer a parsed sheet over the current table
    pub fn apply_sheet(&mut self, sheet: &StyleSheet) -> Result<(), StyleError> {
        sheet.apply(&mut self.table)?;
        if self.config.log_loads {
            log::info!("style sheet applied ({} properties)", sheet.props().len());
        }
        Ok(())
    }

    /// Parse and apply a `.rgs` or `.toml` style file
    pub fn load_style_file(&mut self, path: impl AsRef<Path>) -> Result<(), StyleError> {
        let sheet = StyleSheet::load_file(path)?;
        self.apply_sheet(&sheet)
    }

    /// Export the current table as `.rgs` text
    pub fn export_rgs(&self) -> String {
        StyleSheet::from_table(&self.table).to_rgs()
    }
}

impl Default for StyleContext {
    fn default() -> Self {
        Self {
            config: StyleConfig::default(),
            table: StyleTable::new(),
        }
    }
}
