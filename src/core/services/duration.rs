use chrono::NaiveTime;

use crate::core::errors::{AttendanceError, Result};

/// Elapsed hours between two times of the same day, rounded to 2 decimals.
///
/// Both times are taken to lie on the same calendar day, so an exit that
/// is earlier than the entry (a session crossing midnight) comes out
/// negative: 23:50:00 -> 00:10:00 yields -23.67.
pub fn duration_hours(entry: NaiveTime, exit: NaiveTime) -> f64 {
    let seconds = (exit - entry).num_seconds() as f64;
    round2(seconds / 3600.0)
}

/// Round half away from zero to two decimal places.
///
/// Values that round to zero come back as `0.0`, never `-0.0`.
pub fn round2(value: f64) -> f64 {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// What to do with an exit that is earlier than its entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DurationPolicy {
    /// Store whatever the subtraction yields, negative included.
    #[default]
    Permissive,
    /// Reject exits earlier than the entry; the session stays open.
    SameDayOnly,
}

impl DurationPolicy {
    pub fn from_flag(same_day_only: bool) -> Self {
        if same_day_only {
            Self::SameDayOnly
        } else {
            Self::Permissive
        }
    }

    /// Validation hook run before an exit is persisted.
    pub fn validate(&self, name: &str, entry: NaiveTime, exit: NaiveTime) -> Result<()> {
        match self {
            Self::Permissive => Ok(()),
            Self::SameDayOnly if exit < entry => Err(AttendanceError::InvalidDuration {
                name: name.to_string(),
                entry,
                exit,
            }),
            Self::SameDayOnly => Ok(()),
        }
    }
}
