use chrono::{NaiveDate, NaiveTime};
use tracing::{debug, warn};

use crate::core::errors::{AttendanceError, Result};
use crate::core::models::attendance_record::{AttendanceRecord, truncate_to_seconds};
use crate::core::models::report::{Report, Statistics};
use crate::core::services::duration::{DurationPolicy, duration_hours};
use crate::core::services::report_service::ReportService;
use crate::core::services::session_matcher::find_open_session;
use crate::core::traits::store::AttendanceStore;

/// Result of a clock-out request.
#[derive(Debug, Clone, PartialEq)]
pub enum ExitOutcome {
    /// The earliest open session was closed; `record` is its new state.
    Closed {
        record: AttendanceRecord,
        /// The exit is earlier than the entry, whatever the rounded duration.
        negative: bool,
    },
    /// Nothing open for this person today; the table is unchanged.
    NoOpenEntry,
}

/// Clock-in, clock-out and reporting on top of an `AttendanceStore`.
pub struct AttendanceService<S: AttendanceStore> {
    pub store: S,
    pub policy: DurationPolicy,
}

impl<S: AttendanceStore> AttendanceService<S> {
    pub fn new(store: S, policy: DurationPolicy) -> Self {
        Self { store, policy }
    }

    /// Append an open session for `name` starting at `time` on `date`.
    pub fn register_entry(
        &self,
        name: &str,
        date: NaiveDate,
        time: NaiveTime,
    ) -> Result<AttendanceRecord> {
        let name = normalize_name(name)?;
        let record = AttendanceRecord::open(name, date, time);

        self.store.append_record(&record)?;
        debug!(person = name, %date, entry = %record.entry_time, "entry registered");

        Ok(record)
    }

    /// Close the earliest open session `name` has on `date`.
    pub fn register_exit(
        &self,
        name: &str,
        date: NaiveDate,
        time: NaiveTime,
    ) -> Result<ExitOutcome> {
        let name = normalize_name(name)?;
        let exit = truncate_to_seconds(time);
        let records = self.store.load_all()?;

        let Some(session) = find_open_session(&records, name, date) else {
            debug!(person = name, %date, "no open session to close");
            return Ok(ExitOutcome::NoOpenEntry);
        };

        self.policy.validate(name, session.entry_time, exit)?;

        let hours = duration_hours(session.entry_time, exit);
        let negative = exit < session.entry_time;
        if negative {
            warn!(
                person = name,
                entry = %session.entry_time,
                %exit,
                hours,
                "storing negative duration"
            );
        }

        self.store.update_exit_fields(session.row, exit, hours)?;
        debug!(person = name, row = session.row, hours, "exit registered");

        let record = AttendanceRecord {
            exit_time: Some(exit),
            duration_hours: Some(hours),
            ..records[session.row].clone()
        };

        Ok(ExitOutcome::Closed { record, negative })
    }

    /// Every row for `name` with their summed hours.
    pub fn individual_report(&self, name: &str) -> Result<Report> {
        let name = normalize_name(name)?;
        let records = self.store.load_all()?;
        Ok(ReportService.individual(&records, name))
    }

    /// Total hours per person over closed sessions.
    pub fn statistics(&self) -> Result<Statistics> {
        let records = self.store.load_all()?;
        Ok(ReportService.statistics(&records))
    }
}

fn normalize_name(name: &str) -> Result<&str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(AttendanceError::InvalidName);
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::store::memory_store::MemoryStore;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 4, 20).unwrap()
    }

    fn t(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    fn service() -> AttendanceService<MemoryStore> {
        AttendanceService::new(MemoryStore::default(), DurationPolicy::Permissive)
    }

    #[test]
    fn entry_appends_open_record() {
        let svc = service();

        let record = svc.register_entry("  Alice ", today(), t(9, 0, 0)).unwrap();

        assert_eq!(record.name, "Alice");
        let rows = svc.store.load_all().unwrap();
        assert_eq!(rows, vec![record]);
        assert!(rows[0].is_open());
    }

    #[test]
    fn blank_name_is_rejected() {
        let svc = service();
        let err = svc.register_entry("   ", today(), t(9, 0, 0)).unwrap_err();
        assert!(matches!(err, AttendanceError::InvalidName));
        assert!(svc.store.load_all().unwrap().is_empty());
    }

    #[test]
    fn exit_closes_session_with_duration() {
        let svc = service();
        svc.register_entry("Alice", today(), t(9, 0, 0)).unwrap();

        let outcome = svc.register_exit("Alice", today(), t(17, 30, 0)).unwrap();

        let ExitOutcome::Closed { record, negative } = outcome else {
            panic!("expected a closed session");
        };
        assert!(!negative);
        assert_eq!(record.exit_time, Some(t(17, 30, 0)));
        assert_eq!(record.duration_hours, Some(8.5));
        assert_eq!(svc.store.load_all().unwrap()[0], record);
    }

    #[test]
    fn exit_closes_earliest_open_session_first() {
        let svc = service();
        svc.register_entry("Alice", today(), t(8, 0, 0)).unwrap();
        svc.register_entry("Alice", today(), t(13, 0, 0)).unwrap();

        svc.register_exit("Alice", today(), t(14, 0, 0)).unwrap();

        let rows = svc.store.load_all().unwrap();
        assert_eq!(rows[0].duration_hours, Some(6.0));
        assert!(rows[1].is_open());
    }

    #[test]
    fn exit_without_entry_reports_no_open_entry() {
        let svc = service();
        svc.register_entry("Bob", today(), t(9, 0, 0)).unwrap();

        let outcome = svc.register_exit("Alice", today(), t(17, 0, 0)).unwrap();

        assert_eq!(outcome, ExitOutcome::NoOpenEntry);
        assert!(svc.store.load_all().unwrap()[0].is_open());
    }

    #[test]
    fn exit_ignores_yesterdays_open_session() {
        let svc = service();
        let yesterday = today().pred_opt().unwrap();
        svc.register_entry("Alice", yesterday, t(9, 0, 0)).unwrap();

        let outcome = svc.register_exit("Alice", today(), t(17, 0, 0)).unwrap();

        assert_eq!(outcome, ExitOutcome::NoOpenEntry);
    }

    #[test]
    fn permissive_policy_stores_negative_duration() {
        let svc = service();
        svc.register_entry("Alice", today(), t(23, 50, 0)).unwrap();

        let outcome = svc.register_exit("Alice", today(), t(0, 10, 0)).unwrap();

        let ExitOutcome::Closed { negative, record, .. } = outcome else {
            panic!("expected a closed session");
        };
        assert!(negative);
        assert_eq!(record.duration_hours, Some(-23.67));
    }

    #[test]
    fn exit_seconds_before_entry_is_flagged_negative() {
        let svc = service();
        svc.register_entry("Alice", today(), t(9, 0, 20)).unwrap();

        let outcome = svc.register_exit("Alice", today(), t(9, 0, 10)).unwrap();

        let ExitOutcome::Closed { negative, record, .. } = outcome else {
            panic!("expected a closed session");
        };
        assert!(negative);
        let hours = record.duration_hours.unwrap();
        assert_eq!(hours, 0.0);
        assert!(hours.is_sign_positive());
    }

    #[test]
    fn same_day_only_policy_leaves_session_open() {
        let svc = AttendanceService::new(MemoryStore::default(), DurationPolicy::SameDayOnly);
        svc.register_entry("Alice", today(), t(23, 50, 0)).unwrap();

        let err = svc.register_exit("Alice", today(), t(0, 10, 0)).unwrap_err();

        assert!(matches!(err, AttendanceError::InvalidDuration { .. }));
        assert!(svc.store.load_all().unwrap()[0].is_open());
    }

    #[test]
    fn report_and_statistics_read_through_the_store() {
        let svc = service();
        svc.register_entry("Alice", today(), t(9, 0, 0)).unwrap();
        svc.register_exit("Alice", today(), t(12, 0, 0)).unwrap();
        svc.register_entry("Bob", today(), t(10, 0, 0)).unwrap();

        let report = svc.individual_report("Alice").unwrap();
        assert_eq!(report.records.len(), 1);
        assert_eq!(report.total_hours, 3.0);

        let stats = svc.statistics().unwrap();
        assert_eq!(stats.totals.len(), 1);
        assert_eq!(stats.totals["Alice"], 3.0);
    }
}
