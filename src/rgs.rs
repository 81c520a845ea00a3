//! Text `.rgs` style files
//!
//! Line-oriented format:
//!
//! ```text
//! # comment
//! p <control_id> <property_id> <value>    anything after the value is ignored
//! f <font_size> <charmap_file> <font_file>
//! ```
//!
//! Values are decimal (negative values wrap to their two's-complement word)
//! or `0x`-prefixed hex.

use crate::error::StyleError;
use crate::sheet::StyleSheet;
use crate::style::{check_bounds, FontRef, GuiControl, StyleProp};
use std::fmt::Write as _;

/// Parse `.rgs` text into a validated sheet
pub fn parse(text: &str) -> Result<StyleSheet, StyleError> {
    let mut props = Vec::new();
    let mut font = None;

    for (i, raw) in text.lines().enumerate() {
        let line = i + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let (directive, rest) = next_token(trimmed);
        match directive {
            Some("p") => {
                let mut tokens = rest.split_whitespace();
                let control = parse_word(tokens.next(), line, "control id")?;
                let property = parse_word(tokens.next(), line, "property id")?;
                let value = parse_word(tokens.next(), line, "property value")?;
                check_bounds(control, property).map_err(|e| StyleError::Parse {
                    line,
                    message: e.to_string(),
                })?;
                props.push(StyleProp::new(control, property, value));
            }
            Some("f") => {
                let (size, rest) = next_token(rest);
                let size = parse_word(size, line, "font size")?;
                // Charmap file is accepted but unused; glyph loading belongs to the renderer.
                let (charmap, rest) = next_token(rest);
                charmap.ok_or_else(|| missing(line, "charmap file"))?;
                // One separator, then the file name verbatim (it may hold runs of spaces).
                let file = rest.strip_prefix(char::is_whitespace).unwrap_or(rest);
                if file.is_empty() {
                    return Err(missing(line, "font file"));
                }
                font = Some(FontRef::new(font_name(file), size));
            }
            Some(other) => {
                return Err(StyleError::Parse {
                    line,
                    message: format!("unknown directive '{}'", other),
                })
            }
            None => {}
        }
    }

    Ok(StyleSheet::new(None, font, props))
}

/// Render a sheet as `.rgs` text
pub fn write(sheet: &StyleSheet) -> String {
    let mut out = String::new();
    out.push_str("#\n# rgs style text file\n#\n");
    out.push_str("# p <control_id> <property_id> <property_value>  Property description\n");
    out.push_str("# f <font_size> <charmap_file> <font_file>      Style font\n#\n");

    if let Some(font) = sheet.font() {
        let _ = writeln!(out, "f {} 0 {}.ttf", font.base_size, font.name);
    }
    for prop in sheet.props() {
        let label = GuiControl::from_index(prop.control)
            .map(|c| {
                let property = c.property_name(prop.property).unwrap_or("reserved");
                format!("{}_{}", c.name(), property).to_ascii_uppercase()
            })
            .unwrap_or_default();
        let _ = writeln!(
            out,
            "p {:02} {:02} 0x{:08x}    {}",
            prop.control, prop.property, prop.value, label
        );
    }
    out
}

/// Split off the first whitespace-delimited token, keeping the rest untouched
fn next_token(s: &str) -> (Option<&str>, &str) {
    let s = s.trim_start();
    if s.is_empty() {
        return (None, s);
    }
    let end = s.find(char::is_whitespace).unwrap_or(s.len());
    (Some(&s[..end]), &s[end..])
}

/// Font name from a font file path: directories and the extension are dropped
fn font_name(file: &str) -> String {
    let base = file.rsplit(|c: char| c == '/' || c == '\\').next().unwrap_or(file);
    match base.rfind('.') {
        Some(dot) => base[..dot].to_string(),
        None => base.to_string(),
    }
}

fn parse_word(token: Option<&str>, line: usize, what: &str) -> Result<u32, StyleError> {
    let token = token.ok_or_else(|| missing(line, what))?;
    let parsed = if let Some(hex) = token.strip_prefix("0x").or_else(|| token.strip_prefix("0X")) {
        u32::from_str_radix(hex, 16).ok()
    } else if token.starts_with('-') {
        token.parse::<i32>().ok().map(|v| v as u32)
    } else {
        token.parse::<u32>().ok()
    };
    parsed.ok_or_else(|| StyleError::Parse {
        line,
        message: format!("invalid {} '{}'", what, token),
    })
}

fn missing(line: usize, what: &str) -> StyleError {
    StyleError::Parse {
        line,
        message: format!("missing {}", what),
    }
}
