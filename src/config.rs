//! Runtime configuration.
//!
//! Loaded from a TOML file (path in `LIARS_ODDS_CONFIG`, all keys optional)
//! and then overridden by environment variables:
//!
//! ```toml
//! digits_per_number = 8
//! tail_bound = "exclusive"
//! log_filter = "liars_odds=info"
//!
//! [table]
//! max_claim = 24
//! safe_threshold = 0.5
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::bet::DEFAULT_DIGITS_PER_NUMBER;
use crate::error::{OddsError, Result};
use crate::odds::TailBound;

pub const ENV_CONFIG_PATH: &str = "LIARS_ODDS_CONFIG";
pub const ENV_DIGITS: &str = "LIARS_ODDS_DIGITS";
pub const ENV_LOG: &str = "LIARS_ODDS_LOG";

pub const DEFAULT_LOG_FILTER: &str = "liars_odds=info";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OddsConfig {
    /// Serial length used when the caller doesn't give one.
    pub digits_per_number: i64,
    pub tail_bound: TailBound,
    /// `EnvFilter` directives; `LIARS_ODDS_LOG` wins over this.
    pub log_filter: String,
    pub table: TableConfig,
}

impl Default for OddsConfig {
    fn default() -> Self {
        Self {
            digits_per_number: DEFAULT_DIGITS_PER_NUMBER,
            tail_bound: TailBound::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            table: TableConfig::default(),
        }
    }
}

/// Settings for the odds-table view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Highest claim listed.
    pub max_claim: i64,
    /// Probability a claim must keep to count as safe.
    pub safe_threshold: f64,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            max_claim: 24,
            safe_threshold: 0.5,
        }
    }
}

impl OddsConfig {
    /// Parse TOML text. `origin` is only used in error messages.
    pub fn from_toml_str(text: &str, origin: &Path) -> Result<Self> {
        let cfg: OddsConfig = toml::from_str(text).map_err(|e| OddsError::ConfigParse {
            path: origin.to_path_buf(),
            message: e.to_string(),
        })?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => OddsError::ConfigNotFound {
                path: path.to_path_buf(),
            },
            _ => OddsError::Io {
                path: path.to_path_buf(),
                source: e,
            },
        })?;
        Self::from_toml_str(&text, path)
    }

    /// File named by `LIARS_ODDS_CONFIG` (or defaults), then env overrides.
    pub fn from_env() -> Result<Self> {
        Self::resolve(None, |key| std::env::var(key).ok())
    }

    /// Same as [`OddsConfig::from_env`] with an explicit path taking
    /// precedence and an injectable variable lookup.
    pub fn resolve(
        explicit: Option<&Path>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let path = explicit
            .map(Path::to_path_buf)
            .or_else(|| lookup(ENV_CONFIG_PATH).map(PathBuf::from));
        let mut cfg = match path {
            Some(p) => Self::load(&p)?,
            None => Self::default(),
        };
        cfg.apply_overrides(lookup)?;
        Ok(cfg)
    }

    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(raw) = lookup(ENV_DIGITS) {
            self.digits_per_number = raw
                .trim()
                .parse()
                .map_err(|_| OddsError::invalid(ENV_DIGITS, format!("not an integer: `{raw}`")))?;
        }
        if let Some(filter) = lookup(ENV_LOG) {
            self.log_filter = filter;
        }
        self.validate()
    }

    pub fn validate(&self) -> Result<()> {
        if self.digits_per_number <= 0 {
            return Err(OddsError::invalid(
                "digits_per_number",
                format!("must be positive, got {}", self.digits_per_number),
            ));
        }
        if self.table.max_claim < 0 {
            return Err(OddsError::invalid(
                "table.max_claim",
                format!("must not be negative, got {}", self.table.max_claim),
            ));
        }
        if !(0.0..=1.0).contains(&self.table.safe_threshold) {
            return Err(OddsError::invalid(
                "table.safe_threshold",
                format!("must be within [0, 1], got {}", self.table.safe_threshold),
            ));
        }
        Ok(())
    }
}
