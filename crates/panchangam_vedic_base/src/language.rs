//! Bilingual names and display modes.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A name in Telugu script paired with its romanized transliteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bilingual {
    pub native: &'static str,
    pub romanized: &'static str,
}

impl Bilingual {
    pub const fn new(native: &'static str, romanized: &'static str) -> Self {
        Self { native, romanized }
    }

    /// Render according to `mode`.
    pub fn render(&self, mode: DisplayMode) -> String {
        match mode {
            DisplayMode::Native => self.native.to_string(),
            DisplayMode::Romanized => self.romanized.to_string(),
            DisplayMode::Bilingual => format!("{} ({})", self.native, self.romanized),
        }
    }
}

/// Anything with a fixed bilingual name.
pub trait Named {
    fn names(&self) -> Bilingual;

    fn render(&self, mode: DisplayMode) -> String {
        self.names().render(mode)
    }
}

/// Presentation language selector. Never affects computed indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// Telugu script only.
    #[serde(alias = "telugu")]
    Native,
    /// Romanized transliteration only.
    #[serde(alias = "english")]
    Romanized,
    /// `"native (romanized)"`.
    #[default]
    Bilingual,
}

impl DisplayMode {
    pub const ALL: [DisplayMode; 3] = [Self::Native, Self::Romanized, Self::Bilingual];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Native => "native",
            Self::Romanized => "romanized",
            Self::Bilingual => "bilingual",
        }
    }
}

impl Display for DisplayMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognized display mode string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown display mode {0:?} (expected telugu, english or bilingual)")]
pub struct ParseDisplayModeError(pub String);

impl FromStr for DisplayMode {
    type Err = ParseDisplayModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "native" | "telugu" | "te" => Ok(Self::Native),
            "romanized" | "english" | "en" => Ok(Self::Romanized),
            "bilingual" | "both" => Ok(Self::Bilingual),
            _ => Err(ParseDisplayModeError(s.to_string())),
        }
    }
}

/// Split a bilingual rendering back into `(native, romanized)`.
///
/// Splits at the first `" ("`; romanized names never contain parentheses.
pub fn split_bilingual(rendered: &str) -> Option<(&str, &str)> {
    let (native, rest) = rendered.split_once(" (")?;
    let romanized = rest.strip_suffix(')')?;
    Some((native, romanized))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: Bilingual = Bilingual::new("సోమవారము", "Somavaramu");

    #[test]
    fn render_each_mode() {
        assert_eq!(SAMPLE.render(DisplayMode::Native), "సోమవారము");
        assert_eq!(SAMPLE.render(DisplayMode::Romanized), "Somavaramu");
        assert_eq!(SAMPLE.render(DisplayMode::Bilingual), "సోమవారము (Somavaramu)");
    }

    #[test]
    fn romanized_with_space_splits() {
        let b = Bilingual::new("శుక్ల పక్షము", "Shukla Paksham");
        let rendered = b.render(DisplayMode::Bilingual);
        assert_eq!(split_bilingual(&rendered), Some(("శుక్ల పక్షము", "Shukla Paksham")));
    }

    #[test]
    fn split_rejects_plain() {
        assert_eq!(split_bilingual("Somavaramu"), None);
    }

    #[test]
    fn parse_aliases() {
        assert_eq!("Telugu".parse::<DisplayMode>().unwrap(), DisplayMode::Native);
        assert_eq!("english".parse::<DisplayMode>().unwrap(), DisplayMode::Romanized);
        assert_eq!(" bilingual ".parse::<DisplayMode>().unwrap(), DisplayMode::Bilingual);
        assert!("klingon".parse::<DisplayMode>().is_err());
    }

    #[test]
    fn display_parses_back() {
        for mode in DisplayMode::ALL {
            assert_eq!(mode.to_string().parse::<DisplayMode>().unwrap(), mode);
        }
    }

    #[test]
    fn serde_accepts_aliases() {
        let m: DisplayMode = serde_json::from_str("\"english\"").unwrap();
        assert_eq!(m, DisplayMode::Romanized);
        assert_eq!(serde_json::to_string(&DisplayMode::Native).unwrap(), "\"native\"");
    }
}
