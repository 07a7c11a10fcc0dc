//! Three-state theme preference: auto, light, dark.
//!
//! The states form a fixed cycle (auto -> light -> dark -> auto). `Auto`
//! follows the operating system's color-scheme preference; the other two
//! force a mode.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

use crate::error::PageError;

/// Visitor's theme choice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    /// Mirror the system light/dark preference.
    #[default]
    Auto,
    /// Force the default (light) palette.
    Light,
    /// Force the dark palette.
    Dark,
}

impl Theme {
    /// Every theme in cycle order.
    pub const ALL: [Theme; 3] = [Theme::Auto, Theme::Light, Theme::Dark];

    /// Position of this theme in [`Theme::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Auto => 0,
            Self::Light => 1,
            Self::Dark => 2,
        }
    }

    /// Theme at `index`, wrapping modulo the cycle length.
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    /// The theme that follows this one in the cycle.
    #[must_use]
    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Name persisted to storage.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Indicator glyph shown on the toggle.
    ///
    /// `Auto` always shows the half moon, whatever the system resolves to.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Auto => "🌓",
            Self::Light => "☀️",
            Self::Dark => "🌙",
        }
    }

    /// Whether the page should be forced into dark mode.
    #[must_use]
    pub fn resolves_dark(self, system_prefers_dark: bool) -> bool {
        match self {
            Self::Auto => system_prefers_dark,
            Self::Light => false,
            Self::Dark => true,
        }
    }

    /// Resolve a persisted value, falling back to `Auto` when it is absent
    /// or not one of the three names.
    #[must_use]
    pub fn from_stored(stored: Option<&str>) -> Self {
        match stored.map(str::parse::<Self>) {
            Some(Ok(theme)) => theme,
            _ => Self::Auto,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = PageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|theme| theme.as_str() == s)
            .ok_or_else(|| PageError::UnknownTheme(s.to_owned()))
    }
}
