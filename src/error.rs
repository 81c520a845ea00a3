//! Error types shared by the style table, theme registry and style sheets

use crate::theme::ThemeId;
use std::error::Error;
use std::fmt;

/// Style error types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleError {
    /// Theme exists but its data was compiled out
    ThemeUnavailable(ThemeId),
    /// Name or selector index does not match any theme
    UnknownTheme(String),
    /// Control name not recognized
    UnknownControl(String),
    /// Control index outside the table
    InvalidControl(u32),
    /// Property index outside the table (or unknown property name)
    InvalidProperty { control: u32, property: String },
    /// Malformed style sheet line
    Parse { line: usize, message: String },
    /// Malformed TOML style sheet or config
    Toml(String),
    /// Malformed JSON config
    Config(String),
    /// Style file could not be read
    Io(String),
}

impl fmt::Display for StyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleError::ThemeUnavailable(id) => {
                write!(f, "Theme '{}' was not compiled into this build", id.name())
            }
            StyleError::UnknownTheme(name) => write!(f, "Unknown theme: {}", name),
            StyleError::UnknownControl(name) => write!(f, "Unknown control: {}", name),
            StyleError::InvalidControl(control) => write!(f, "Invalid control index: {}", control),
            StyleError::InvalidProperty { control, property } => {
                write!(f, "Invalid property '{}' for control {}", property, control)
            }
            StyleError::Parse { line, message } => {
                write!(f, "Style sheet parse error on line {}: {}", line, message)
            }
            StyleError::Toml(msg) => write!(f, "Failed to parse style TOML: {}", msg),
            StyleError::Config(msg) => write!(f, "Invalid style config: {}", msg),
            StyleError::Io(msg) => write!(f, "Failed to read style file: {}", msg),
        }
    }
}

impl Error for StyleError {}

impl From<toml::de::Error> for StyleError {
    fn from(err: toml::de::Error) -> Self {
        StyleError::Toml(err.to_string())
    }
}

impl From<serde_json::Error> for StyleError {
    fn from(err: serde_json::Error) -> Self {
        StyleError::Config(err.to_string())
    }
}

impl From<std::io::Error> for StyleError {
    fn from(err: std::io::Error) -> Self {
        StyleError::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = StyleError::InvalidControl(42);
        assert_eq!(err.to_string(), "Invalid control index: 42");

        let err = StyleError::Parse { line: 3, message: "bad token".to_string() };
        assert_eq!(err.to_string(), "Style sheet parse error on line 3: bad token");

        let err = StyleError::ThemeUnavailable(ThemeId::Cyber);
        assert!(err.to_string().contains("cyber"));
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: StyleError = io.into();
        assert!(matches!(err, StyleError::Io(_)));
    }
}
