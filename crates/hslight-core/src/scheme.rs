//! Color schemes.
//!
//! A scheme resolves a [`HighlightKey`] to a color in two steps: an explicit
//! per-key override from the config, otherwise the theme's color for the
//! key's [`DefaultColor`] fallback.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use hslight_syntax::{DefaultColor, HighlightKey};
use serde::{Deserialize, Serialize};

use crate::config::{Config, Theme};

/// A 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = SchemeError;

    /// Parses `#rrggbb` (the `#` is optional).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SchemeError::InvalidColor(s.to_string());
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        Ok(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

/// Dark theme palette.
mod dark {
    use super::Rgb;

    pub const INVALID: Rgb = Rgb::new(0xf4, 0x47, 0x47);
    pub const COMMENT: Rgb = Rgb::new(0x80, 0x8c, 0x8c);
    pub const STRING: Rgb = Rgb::new(0xb8, 0xd6, 0x8c);
    pub const NUMBER: Rgb = Rgb::new(0xd1, 0xad, 0x8c);
    pub const KEYWORD: Rgb = Rgb::new(0xdb, 0x8c, 0xc2);
    pub const OPERATOR: Rgb = Rgb::new(0xcc, 0xcc, 0xe6);
    pub const PAREN: Rgb = Rgb::new(0xb3, 0xb3, 0xb3);
    pub const BRACE: Rgb = Rgb::new(0xe6, 0xcc, 0x8c);
    pub const BRACKET: Rgb = Rgb::new(0x8c, 0xcc, 0xcc);
    pub const IDENTIFIER: Rgb = Rgb::new(0xd9, 0xd9, 0xd9);
    pub const FUNCTION: Rgb = Rgb::new(0x8c, 0xbf, 0xe6);
}

/// Light theme palette.
mod light {
    use super::Rgb;

    pub const INVALID: Rgb = Rgb::new(0xcd, 0x31, 0x31);
    pub const COMMENT: Rgb = Rgb::new(0x6a, 0x73, 0x7d);
    pub const STRING: Rgb = Rgb::new(0x22, 0x86, 0x3a);
    pub const NUMBER: Rgb = Rgb::new(0x09, 0x86, 0x58);
    pub const KEYWORD: Rgb = Rgb::new(0xaf, 0x00, 0xdb);
    pub const OPERATOR: Rgb = Rgb::new(0x38, 0x3a, 0x42);
    pub const PAREN: Rgb = Rgb::new(0x55, 0x55, 0x55);
    pub const BRACE: Rgb = Rgb::new(0x79, 0x5e, 0x26);
    pub const BRACKET: Rgb = Rgb::new(0x00, 0x70, 0xc1);
    pub const IDENTIFIER: Rgb = Rgb::new(0x24, 0x29, 0x2e);
    pub const FUNCTION: Rgb = Rgb::new(0x00, 0x5c, 0xc5);
}

/// Resolves highlight keys to colors.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScheme {
    theme: Theme,
    overrides: HashMap<HighlightKey, Rgb>,
}

impl ColorScheme {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            overrides: HashMap::new(),
        }
    }

    pub fn dark() -> Self {
        Self::new(Theme::Dark)
    }

    pub fn light() -> Self {
        Self::new(Theme::Light)
    }

    /// Builds the scheme described by a config's theme and color overrides.
    pub fn from_config(config: &Config) -> Result<Self, SchemeError> {
        let mut scheme = Self::new(config.highlight.theme);
        for (name, value) in &config.colors {
            let key: HighlightKey = name
                .parse()
                .map_err(|_| SchemeError::UnknownKey(name.clone()))?;
            scheme.set_override(key, value.parse()?);
        }
        Ok(scheme)
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_override(&mut self, key: HighlightKey, color: Rgb) {
        self.overrides.insert(key, color);
    }

    /// The theme's color for a generic editor color.
    pub fn default_color(&self, color: DefaultColor) -> Rgb {
        match self.theme {
            Theme::Dark => match color {
                DefaultColor::InvalidStringEscape => dark::INVALID,
                DefaultColor::LineComment => dark::COMMENT,
                DefaultColor::String => dark::STRING,
                DefaultColor::Number => dark::NUMBER,
                DefaultColor::Keyword => dark::KEYWORD,
                DefaultColor::OperationSign => dark::OPERATOR,
                DefaultColor::Parentheses => dark::PAREN,
                DefaultColor::Braces => dark::BRACE,
                DefaultColor::Brackets => dark::BRACKET,
                DefaultColor::Identifier => dark::IDENTIFIER,
                DefaultColor::FunctionDeclaration => dark::FUNCTION,
            },
            Theme::Light => match color {
                DefaultColor::InvalidStringEscape => light::INVALID,
                DefaultColor::LineComment => light::COMMENT,
                DefaultColor::String => light::STRING,
                DefaultColor::Number => light::NUMBER,
                DefaultColor::Keyword => light::KEYWORD,
                DefaultColor::OperationSign => light::OPERATOR,
                DefaultColor::Parentheses => light::PAREN,
                DefaultColor::Braces => light::BRACE,
                DefaultColor::Brackets => light::BRACKET,
                DefaultColor::Identifier => light::IDENTIFIER,
                DefaultColor::FunctionDeclaration => light::FUNCTION,
            },
        }
    }

    /// The color to paint a highlight key with.
    pub fn color_for(&self, key: HighlightKey) -> Rgb {
        self.overrides
            .get(&key)
            .copied()
            .unwrap_or_else(|| self.default_color(key.fallback()))
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::dark()
    }
}

/// Color scheme errors.
#[derive(Debug, thiserror::Error)]
pub enum SchemeError {
    #[error("Unknown highlight key in [colors]: {0}")]
    UnknownKey(String),

    #[error("Invalid color (expected #rrggbb): {0}")]
    InvalidColor(String),
}
