use std::collections::BTreeMap;

use serde::Serialize;

use super::attendance_record::AttendanceRecord;

/// Every record for one person, in file order, plus their total hours.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub name: String,
    pub records: Vec<AttendanceRecord>,
    /// Sum of recorded durations; rows without a duration count as zero.
    pub total_hours: f64,
}

impl Report {
    /// True when the person has no rows at all.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of sessions still waiting for a clock-out.
    pub fn open_sessions(&self) -> usize {
        self.records.iter().filter(|r| r.is_open()).count()
    }
}

/// Total recorded hours per person across all closed sessions.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Statistics {
    pub totals: BTreeMap<String, f64>,
}

impl Statistics {
    /// True when no row in the table carries a duration.
    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }
}
