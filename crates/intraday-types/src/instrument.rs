//! Watched instrument definitions.

use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

/// Exchange ticker symbol (e.g., "NOKIA.HE", "^IXIC").
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display, From,
)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    /// Creates a symbol from any string-like value.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the symbol as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symbol {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Display color for an instrument's curve.
///
/// Carried for the display layer only; normalization never reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Color {
    /// An RGB triple.
    Rgb(u8, u8, u8),
    /// A named color understood by the display layer (e.g., "red").
    Named(String),
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rgb(r, g, b) => write!(f, "#{r:02x}{g:02x}{b:02x}"),
            Self::Named(name) => write!(f, "{name}"),
        }
    }
}

/// An instrument on a watchlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instrument {
    /// Ticker symbol, unique within a watchlist.
    symbol: Symbol,
    /// Human-readable name (e.g., "Nokia").
    name: String,
    /// Optional curve color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    color: Option<Color>,
}

impl Instrument {
    /// Creates a new instrument without a color.
    #[must_use]
    pub fn new(symbol: impl Into<Symbol>, name: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            color: None,
        }
    }

    /// Returns this instrument with the given display color.
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Returns the ticker symbol.
    #[must_use]
    pub const fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the display color, if any.
    #[must_use]
    pub const fn color(&self) -> Option<&Color> {
        self.color.as_ref()
    }
}

impl std::fmt::Display for Instrument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instrument_creation() {
        let nokia = Instrument::new("NOKIA.HE", "Nokia").with_color(Color::Rgb(18, 65, 145));

        assert_eq!(nokia.symbol().as_str(), "NOKIA.HE");
        assert_eq!(nokia.name(), "Nokia");
        assert_eq!(nokia.color(), Some(&Color::Rgb(18, 65, 145)));
        assert_eq!(nokia.to_string(), "Nokia (NOKIA.HE)");
    }

    #[test]
    fn test_color_display() {
        assert_eq!(Color::Rgb(254, 128, 7).to_string(), "#fe8007");
        assert_eq!(Color::Named("red".into()).to_string(), "red");
    }

    #[test]
    fn test_instrument_deserialize_color_forms() {
        let rgb: Instrument =
            serde_json::from_str(r#"{"symbol":"AMD","name":"AMD","color":[224,0,49]}"#).unwrap();
        assert_eq!(rgb.color(), Some(&Color::Rgb(224, 0, 49)));

        let named: Instrument =
            serde_json::from_str(r#"{"symbol":"TSLA","name":"Tesla","color":"red"}"#).unwrap();
        assert_eq!(named.color(), Some(&Color::Named("red".into())));

        let plain: Instrument = serde_json::from_str(r#"{"symbol":"NVDA","name":"Nvidia"}"#).unwrap();
        assert!(plain.color().is_none());
    }
}
