use chrono::{NaiveDate, NaiveTime};

use crate::core::models::attendance_record::AttendanceRecord;

/// An open session picked for closing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenSession {
    /// Zero-based data row index.
    pub row: usize,
    pub entry_time: NaiveTime,
}

/// Find the session an exit for `name` on `today` should close.
///
/// Rows are scanned in file order and the first open one wins, so when
/// several sessions were left open the earliest is closed first. Having
/// more than one open session per person and day is allowed.
pub fn find_open_session(
    records: &[AttendanceRecord],
    name: &str,
    today: NaiveDate,
) -> Option<OpenSession> {
    records
        .iter()
        .enumerate()
        .find(|(_, r)| r.name == name && r.date == today && r.is_open())
        .map(|(row, r)| OpenSession {
            row,
            entry_time: r.entry_time,
        })
}
