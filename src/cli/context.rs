use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate, NaiveTime};

use crate::adapters::chart::terminal_bar_chart::TerminalBarChart;
use crate::adapters::store::csv_store::CsvStore;
use crate::config::app_config::AppConfig;
use crate::core::errors::{AttendanceError, Result};
use crate::core::models::attendance_record::parse_time;
use crate::core::services::attendance_service::AttendanceService;
use crate::core::services::duration::DurationPolicy;
use crate::core::traits::store::AttendanceStore;

/// Settings resolved from flags, environment and `asistencia.toml`.
#[derive(Debug, Clone)]
pub struct Context {
    pub store_path: PathBuf,
    pub policy: DurationPolicy,
    pub chart_height: usize,
}

impl Context {
    /// Merge the config file with command-line overrides.
    /// Flags win over the file.
    pub fn resolve(
        config_path: Option<&Path>,
        file: Option<&Path>,
        same_day_only: bool,
    ) -> Result<Self> {
        let config = AppConfig::load(config_path, Path::new("."))?;

        Ok(Self {
            store_path: file
                .map(Path::to_path_buf)
                .unwrap_or(config.store.path),
            policy: DurationPolicy::from_flag(same_day_only || config.session.same_day_only),
            chart_height: config.chart.height.max(1),
        })
    }

    /// Open the attendance table, creating it on first use.
    pub fn service(&self) -> Result<AttendanceService<CsvStore>> {
        let store = CsvStore::new(self.store_path.clone());
        store.ensure_initialized()?;
        Ok(AttendanceService::new(store, self.policy))
    }

    pub fn chart(&self) -> TerminalBarChart {
        TerminalBarChart {
            height: self.chart_height,
        }
    }
}

/// Today's date and the time to record: `--at` when given, else the clock.
pub fn now(at: Option<&str>) -> Result<(NaiveDate, NaiveTime)> {
    let now = Local::now().naive_local();
    let time = match at {
        Some(value) => parse_time(value).ok_or_else(|| AttendanceError::InvalidTime {
            value: value.to_string(),
        })?,
        None => now.time(),
    };
    Ok((now.date(), time))
}
