//! TOML configuration for the panchangam tools.
//!
//! Every field is optional; a missing file section falls back to the
//! built-in defaults. Unknown keys are rejected.
//!
//! ```toml
//! default_zone = "Asia/Kolkata"
//! display_mode = "telugu"
//!
//! [engine]
//! first_year = 1800
//! last_year = 2200
//! frame = "j2000"      # or "of-date"
//!
//! [search]
//! step_size_days = 0.25
//! ```

pub mod error;

use std::ffi::OsString;
use std::path::Path;

use panchangam_core::{EngineConfig, LongitudeFrame};
use panchangam_search::ConjunctionConfig;
use panchangam_time::{DEFAULT_ZONE, Tz, find_zone};
use panchangam_vedic_base::DisplayMode;
use serde::Deserialize;
use tracing::debug;

pub use error::ConfigError;

/// Environment variable naming the config file used by [`PanchangamConfig::discover`].
pub const CONFIG_ENV_VAR: &str = "PANCHANGAM_CONFIG";

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PanchangamConfig {
    /// Zone used when none is given; IANA id or catalog place name.
    #[serde(default = "default_zone")]
    pub default_zone: String,

    #[serde(default)]
    pub display_mode: DisplayMode,

    /// Ephemeris settings.
    #[serde(default)]
    pub engine: EngineSection,

    /// New-moon search settings.
    #[serde(default)]
    pub search: SearchSection,
}

impl Default for PanchangamConfig {
    fn default() -> Self {
        Self {
            default_zone: default_zone(),
            display_mode: DisplayMode::default(),
            engine: EngineSection::default(),
            search: SearchSection::default(),
        }
    }
}

fn default_zone() -> String {
    DEFAULT_ZONE.to_string()
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EngineSection {
    #[serde(default = "default_first_year")]
    pub first_year: i32,
    /// Inclusive.
    #[serde(default = "default_last_year")]
    pub last_year: i32,
    /// Longitude frame, `"j2000"` (default) or `"of-date"`.
    #[serde(default)]
    pub frame: LongitudeFrame,
}

impl Default for EngineSection {
    fn default() -> Self {
        Self {
            first_year: default_first_year(),
            last_year: default_last_year(),
            frame: LongitudeFrame::default(),
        }
    }
}

fn default_first_year() -> i32 {
    1000
}
fn default_last_year() -> i32 {
    2999
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchSection {
    #[serde(default = "default_step_size_days")]
    pub step_size_days: f64,
    #[serde(default = "default_max_iterations")]
    pub max_iterations: u32,
    #[serde(default = "default_convergence_days")]
    pub convergence_days: f64,
    #[serde(default = "default_max_scan_days")]
    pub max_scan_days: f64,
}

impl Default for SearchSection {
    fn default() -> Self {
        Self {
            step_size_days: default_step_size_days(),
            max_iterations: default_max_iterations(),
            convergence_days: default_convergence_days(),
            max_scan_days: default_max_scan_days(),
        }
    }
}

fn default_step_size_days() -> f64 {
    ConjunctionConfig::new_moon().step_size_days
}
fn default_max_iterations() -> u32 {
    ConjunctionConfig::new_moon().max_iterations
}
fn default_convergence_days() -> f64 {
    ConjunctionConfig::new_moon().convergence_days
}
fn default_max_scan_days() -> f64 {
    ConjunctionConfig::new_moon().max_scan_days
}

impl PanchangamConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate the file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loading config");
        Self::from_toml_str(&text)
    }

    /// Load from `$PANCHANGAM_CONFIG` when set, otherwise use defaults.
    pub fn discover() -> Result<Self, ConfigError> {
        Self::discover_from(std::env::var_os(CONFIG_ENV_VAR))
    }

    fn discover_from(path: Option<OsString>) -> Result<Self, ConfigError> {
        match path {
            Some(p) if !p.is_empty() => Self::load(p),
            _ => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.zone()?;
        self.engine_config()?;
        self.conjunction_config()?;
        Ok(())
    }

    /// Resolve [`default_zone`](Self::default_zone).
    pub fn zone(&self) -> Result<Tz, ConfigError> {
        find_zone(&self.default_zone)
            .ok_or_else(|| ConfigError::Invalid(format!("unknown zone {:?}", self.default_zone)))
    }

    pub fn engine_config(&self) -> Result<EngineConfig, ConfigError> {
        let e = &self.engine;
        if e.last_year < e.first_year {
            return Err(ConfigError::Invalid(format!(
                "engine.last_year {} is before engine.first_year {}",
                e.last_year, e.first_year
            )));
        }
        let config = EngineConfig {
            frame: e.frame,
            ..EngineConfig::for_years(e.first_year, e.last_year)
        };
        config
            .validate()
            .map_err(|err| ConfigError::Invalid(err.to_string()))?;
        Ok(config)
    }

    pub fn conjunction_config(&self) -> Result<ConjunctionConfig, ConfigError> {
        let s = &self.search;
        let config = ConjunctionConfig {
            step_size_days: s.step_size_days,
            max_iterations: s.max_iterations,
            convergence_days: s.convergence_days,
            max_scan_days: s.max_scan_days,
            ..ConjunctionConfig::new_moon()
        };
        config
            .validate()
            .map_err(|msg| ConfigError::Invalid(format!("search: {msg}")))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_default() {
        let config = PanchangamConfig::from_toml_str("").unwrap();
        assert_eq!(config, PanchangamConfig::default());
        assert_eq!(config.display_mode, DisplayMode::Bilingual);
        assert_eq!(config.zone().unwrap(), Tz::Asia__Singapore);
    }

    #[test]
    fn defaults_match_library_defaults() {
        let config = PanchangamConfig::default();
        assert_eq!(config.engine_config().unwrap(), EngineConfig::default());
        assert_eq!(config.conjunction_config().unwrap(), ConjunctionConfig::new_moon());
    }

    #[test]
    fn full_document() {
        let text = r#"
            default_zone = "Kolkata"
            display_mode = "telugu"

            [engine]
            first_year = 1800
            last_year = 2200
            frame = "of-date"

            [search]
            step_size_days = 0.25
            max_scan_days = 35.0
        "#;
        let config = PanchangamConfig::from_toml_str(text).unwrap();
        assert_eq!(config.display_mode, DisplayMode::Native);
        assert_eq!(config.zone().unwrap(), Tz::Asia__Kolkata);

        let engine = config.engine_config().unwrap();
        assert_eq!(engine.frame, LongitudeFrame::ApparentOfDate);
        assert_eq!(
            engine,
            EngineConfig {
                frame: LongitudeFrame::ApparentOfDate,
                ..EngineConfig::for_years(1800, 2200)
            }
        );

        let search = config.conjunction_config().unwrap();
        assert_eq!(search.step_size_days, 0.25);
        assert_eq!(search.max_scan_days, 35.0);
        assert_eq!(search.max_iterations, 50);
    }

    #[test]
    fn unknown_frame_rejected() {
        let err = PanchangamConfig::from_toml_str("[engine]\nframe = \"b1950\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)), "{err}");
    }

    #[test]
    fn unknown_key_rejected() {
        let err = PanchangamConfig::from_toml_str("colour = \"blue\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)), "{err}");
        let err = PanchangamConfig::from_toml_str("[engine]\napply_nutation = true").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)), "{err}");
    }

    #[test]
    fn bad_mode_rejected() {
        let err = PanchangamConfig::from_toml_str("display_mode = \"klingon\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn unknown_zone_invalid() {
        let err = PanchangamConfig::from_toml_str("default_zone = \"Atlantis\"").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)), "{err}");
    }

    #[test]
    fn inverted_years_invalid() {
        let err =
            PanchangamConfig::from_toml_str("[engine]\nfirst_year = 2000\nlast_year = 1999").unwrap_err();
        assert!(err.to_string().contains("last_year"), "{err}");
    }

    #[test]
    fn bad_search_invalid() {
        let err = PanchangamConfig::from_toml_str("[search]\nstep_size_days = 0.0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        let err = PanchangamConfig::from_toml_str("[search]\nmax_scan_days = 0.1").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        // Steps beyond a week can bracket the full-moon wrap instead of the new moon
        let err = PanchangamConfig::from_toml_str("[search]\nstep_size_days = 15.0").unwrap_err();
        assert!(err.to_string().contains("step_size_days"), "{err}");
        assert!(PanchangamConfig::from_toml_str("[search]\nstep_size_days = 7.0").is_ok());
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = PanchangamConfig::load("/nonexistent/panchangam.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn load_from_file() {
        let path = std::env::temp_dir().join(format!("panchangam-config-{}.toml", std::process::id()));
        std::fs::write(&path, "display_mode = \"english\"\n").unwrap();
        let config = PanchangamConfig::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(config.display_mode, DisplayMode::Romanized);
    }

    #[test]
    fn discover_without_variable_uses_defaults() {
        assert_eq!(
            PanchangamConfig::discover_from(None).unwrap(),
            PanchangamConfig::default()
        );
        assert_eq!(
            PanchangamConfig::discover_from(Some(OsString::new())).unwrap(),
            PanchangamConfig::default()
        );
    }

    #[test]
    fn discover_with_variable_loads_file() {
        let err = PanchangamConfig::discover_from(Some("/nonexistent/p.toml".into())).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
