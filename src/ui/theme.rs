//! Light and dark color schemes.
//!
//! Both built-in schemes are TOML files embedded at compile time. A custom
//! scheme can be loaded from disk and replaces the built-in one for the
//! variant it declares.
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//! variant = "dark"
//!
//! [colors]
//! background = "#121212"
//! text = "#FFFFFF"
//! text_secondary = "#B0BEC5"
//! text_muted = "#78909C"
//! primary = "#FF5252"
//! secondary = "#26A69A"
//! card_bg = "#1E1E1E"
//! card_border = "#37474F"
//! border = "#37474F"
//! like = "#4CAF50"
//! nope = "#F44336"
//! super_like = "#2196F3"
//! verified = "#2196F3"
//! ```

use crate::domain::error::{Result, SwipeDeckError};
use crate::domain::{Decision, ThemeVariant};
use crate::ui::canvas::Rgb;
use serde::{Deserialize, Serialize};
use std::path::Path;

const LIGHT_TOML: &str = include_str!("../../themes/light.toml");
const DARK_TOML: &str = include_str!("../../themes/dark.toml");

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    #[serde(default)]
    pub variant: ThemeVariant,
    pub colors: ThemeColors,
}

/// Hex color strings (e.g. `"#FF6B6B"`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    pub background: String,
    pub text: String,
    pub text_secondary: String,
    pub text_muted: String,
    /// Brand accent: header title, match banner.
    pub primary: String,
    pub secondary: String,
    pub card_bg: String,
    pub card_border: String,
    /// Separator lines.
    pub border: String,
    pub like: String,
    pub nope: String,
    pub super_like: String,
    pub verified: String,
}

impl Theme {
    /// Built-in scheme for `variant`.
    ///
    /// # Panics
    ///
    /// Panics if an embedded theme file fails to parse, which would be a build defect.
    #[must_use]
    pub fn builtin(variant: ThemeVariant) -> Self {
        let source = match variant {
            ThemeVariant::Light => LIGHT_TOML,
            ThemeVariant::Dark => DARK_TOML,
        };
        toml::from_str(source).expect("built-in theme should always parse")
    }

    /// Loads a scheme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`SwipeDeckError::Theme`] if the file cannot be read or parsed,
    /// or a color is not a `#RRGGBB` value.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| SwipeDeckError::Theme(format!("failed to read {}: {e}", path.display())))?;
        Self::from_toml(&contents)
    }

    /// Parses and validates a TOML scheme.
    ///
    /// # Errors
    ///
    /// Returns [`SwipeDeckError::Theme`] on invalid TOML or colors.
    pub fn from_toml(source: &str) -> Result<Self> {
        let theme: Self = toml::from_str(source)
            .map_err(|e| SwipeDeckError::Theme(format!("failed to parse theme TOML: {e}")))?;
        theme.validate()?;
        Ok(theme)
    }

    fn validate(&self) -> Result<()> {
        let c = &self.colors;
        for (field, value) in [
            ("background", &c.background),
            ("text", &c.text),
            ("text_secondary", &c.text_secondary),
            ("text_muted", &c.text_muted),
            ("primary", &c.primary),
            ("secondary", &c.secondary),
            ("card_bg", &c.card_bg),
            ("card_border", &c.card_border),
            ("border", &c.border),
            ("like", &c.like),
            ("nope", &c.nope),
            ("super_like", &c.super_like),
            ("verified", &c.verified),
        ] {
            if Rgb::from_hex(value).is_none() {
                return Err(SwipeDeckError::Theme(format!(
                    "colors.{field}: '{value}' is not a #RRGGBB color"
                )));
            }
        }
        Ok(())
    }

    /// Parses one of this theme's colors. Invalid values fall back to white.
    #[must_use]
    pub fn rgb(hex: &str) -> Rgb {
        Rgb::from_hex(hex).unwrap_or(Rgb::WHITE)
    }

    /// Badge color for a decision.
    #[must_use]
    pub fn decision_color(&self, decision: Decision) -> Rgb {
        Self::rgb(match decision {
            Decision::Pass => &self.colors.nope,
            Decision::Like => &self.colors.like,
            Decision::SuperLike => &self.colors.super_like,
        })
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::builtin(ThemeVariant::Light)
    }
}

/// The light and dark schemes, with one of them active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeSet {
    light: Theme,
    dark: Theme,
    active: ThemeVariant,
}

impl ThemeSet {
    #[must_use]
    pub fn new(active: ThemeVariant) -> Self {
        Self {
            light: Theme::builtin(ThemeVariant::Light),
            dark: Theme::builtin(ThemeVariant::Dark),
            active,
        }
    }

    /// Replaces the scheme for the variant `theme` declares.
    #[must_use]
    pub fn with_override(mut self, theme: Theme) -> Self {
        match theme.variant {
            ThemeVariant::Light => self.light = theme,
            ThemeVariant::Dark => self.dark = theme,
        }
        self
    }

    #[must_use]
    pub const fn variant(&self) -> ThemeVariant {
        self.active
    }

    pub fn set_variant(&mut self, variant: ThemeVariant) {
        self.active = variant;
    }

    /// Switches to the other variant and returns it.
    pub fn toggle(&mut self) -> ThemeVariant {
        self.active = self.active.toggled();
        self.active
    }

    #[must_use]
    pub const fn active(&self) -> &Theme {
        match self.active {
            ThemeVariant::Light => &self.light,
            ThemeVariant::Dark => &self.dark,
        }
    }
}

impl Default for ThemeSet {
    fn default() -> Self {
        Self::new(ThemeVariant::Light)
    }
}
