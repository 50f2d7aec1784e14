use std::collections::BTreeMap;

use crate::core::models::attendance_record::AttendanceRecord;
use crate::core::models::report::{Report, Statistics};
use crate::core::services::duration::round2;

/// Builds per-person reports and per-name aggregates from table rows.
pub struct ReportService;

impl ReportService {
    /// Rows belonging to `name`, in file order, and their summed hours.
    ///
    /// Rows without a duration are listed but add nothing to the total.
    pub fn individual(&self, records: &[AttendanceRecord], name: &str) -> Report {
        let records: Vec<AttendanceRecord> =
            records.iter().filter(|r| r.name == name).cloned().collect();
        let total: f64 = records.iter().filter_map(|r| r.duration_hours).sum();

        Report {
            name: name.to_string(),
            records,
            total_hours: round2(total),
        }
    }

    /// Total hours per name.
    ///
    /// Rows without a duration are skipped, so a name only appears once at
    /// least one of its sessions has been closed.
    pub fn statistics(&self, records: &[AttendanceRecord]) -> Statistics {
        let mut totals: BTreeMap<String, f64> = BTreeMap::new();

        for record in records {
            if let Some(hours) = record.duration_hours {
                *totals.entry(record.name.clone()).or_insert(0.0) += hours;
            }
        }

        for total in totals.values_mut() {
            *total = round2(*total);
        }

        Statistics { totals }
    }
}
