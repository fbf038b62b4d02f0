//! The style table: one [`StyleSpec`] per drawable kind.
//!
//! The builtin table ships as JSON next to the crate manifest and is parsed
//! once at startup. Hand styles are written as overrides of a shared `hand`
//! base and resolved here, so the renderer only ever sees complete styles.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use serde::Deserialize;

use crate::style::StyleSpec;

const BUILTIN_THEME: &str = include_str!("../theme.json");

/// Errors raised while loading a theme.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("theme parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("style `{0}` is missing required `length`")]
    MissingLength(&'static str),
}

/// Theme exactly as written on disk.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct ThemeFile {
    #[serde(default)]
    face: StyleSpec,
    minor_tick: StyleSpec,
    major_tick: StyleSpec,
    #[serde(default)]
    hand: StyleSpec,
    hour_hand: StyleSpec,
    minute_hand: StyleSpec,
    second_hand: StyleSpec,
    #[serde(default)]
    wedge: StyleSpec,
}

/// Resolved style table.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub face: StyleSpec,
    pub minor_tick: StyleSpec,
    pub major_tick: StyleSpec,
    pub hour_hand: StyleSpec,
    pub minute_hand: StyleSpec,
    pub second_hand: StyleSpec,
    pub wedge: StyleSpec,
}

impl Theme {
    /// Parse the theme embedded in the crate.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError`] if the embedded JSON is malformed or incomplete.
    pub fn builtin() -> Result<Self, ThemeError> {
        Self::from_json(BUILTIN_THEME)
    }

    /// Parse and resolve a theme from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Parse`] on malformed JSON or unknown attributes,
    /// and [`ThemeError::MissingLength`] when a tick or hand has no `length`.
    pub fn from_json(text: &str) -> Result<Self, ThemeError> {
        let file: ThemeFile = serde_json::from_str(text)?;

        let theme = Self {
            face: file.face,
            minor_tick: file.minor_tick,
            major_tick: file.major_tick,
            hour_hand: file.hour_hand.merged_over(&file.hand),
            minute_hand: file.minute_hand.merged_over(&file.hand),
            second_hand: file.second_hand.merged_over(&file.hand),
            wedge: file.wedge,
        };
        theme.validate()?;
        Ok(theme)
    }

    fn validate(&self) -> Result<(), ThemeError> {
        let required = [
            ("minorTick", &self.minor_tick),
            ("majorTick", &self.major_tick),
            ("hourHand", &self.hour_hand),
            ("minuteHand", &self.minute_hand),
            ("secondHand", &self.second_hand),
        ];
        for (name, style) in required {
            if style.length.is_none() {
                return Err(ThemeError::MissingLength(name));
            }
        }
        Ok(())
    }

    /// Tick style for dial index `index`.
    #[must_use]
    pub fn tick(&self, index: u32, major_every: u32) -> &StyleSpec {
        if major_every > 0 && index % major_every == 0 {
            &self.major_tick
        } else {
            &self.minor_tick
        }
    }
}
