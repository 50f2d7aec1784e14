use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::core::errors::{AttendanceError, Result};

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "asistencia.toml";

/// Attendance table used when neither config nor `--file` names one.
pub const DEFAULT_STORE_FILE: &str = "asistencia.csv";

/// Top-level configuration read from `asistencia.toml`.
///
/// Every section is optional; a missing file means all defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub store: StoreSection,
    pub session: SessionSection,
    pub chart: ChartSection,
}

impl AppConfig {
    /// Load the configuration.
    ///
    /// An explicit path must exist. Without one, `asistencia.toml` in
    /// `base_dir` is used when present, otherwise defaults.
    pub fn load(explicit: Option<&Path>, base_dir: &Path) -> Result<Self> {
        let path = match explicit {
            Some(p) if !p.exists() => {
                return Err(AttendanceError::InvalidConfig {
                    detail: format!("no se encontró {}", p.display()),
                });
            }
            Some(p) => p.to_path_buf(),
            None => {
                let candidate = base_dir.join(DEFAULT_CONFIG_FILE);
                if !candidate.exists() {
                    return Ok(Self::default());
                }
                candidate
            }
        };

        let content = std::fs::read_to_string(&path)?;
        Self::parse(&content).map_err(|e| AttendanceError::InvalidConfig {
            detail: format!("no se pudo leer {}: {e}", path.display()),
        })
    }

    fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }
}

/// The `[store]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreSection {
    pub path: PathBuf,
}

impl Default for StoreSection {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_STORE_FILE),
        }
    }
}

/// The `[session]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionSection {
    /// Reject clock-outs earlier than the matching clock-in.
    pub same_day_only: bool,
}

/// The `[chart]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartSection {
    /// Rows used by the tallest bar.
    pub height: usize,
}

impl Default for ChartSection {
    fn default() -> Self {
        Self { height: 10 }
    }
}
