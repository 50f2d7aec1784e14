use std::cell::RefCell;

use chrono::NaiveTime;

use crate::core::errors::{AttendanceError, Result};
use crate::core::models::attendance_record::AttendanceRecord;
use crate::core::traits::store::AttendanceStore;

/// In-memory table for exercising services without touching disk.
#[derive(Default)]
pub struct MemoryStore {
    rows: RefCell<Vec<AttendanceRecord>>,
}

impl AttendanceStore for MemoryStore {
    fn ensure_initialized(&self) -> Result<()> {
        Ok(())
    }

    fn append_record(&self, record: &AttendanceRecord) -> Result<()> {
        self.rows.borrow_mut().push(record.clone());
        Ok(())
    }

    fn load_all(&self) -> Result<Vec<AttendanceRecord>> {
        Ok(self.rows.borrow().clone())
    }

    fn update_exit_fields(
        &self,
        row: usize,
        exit_time: NaiveTime,
        duration_hours: f64,
    ) -> Result<()> {
        let mut rows = self.rows.borrow_mut();
        let len = rows.len();
        let record = rows
            .get_mut(row)
            .ok_or(AttendanceError::RowOutOfRange { index: row, len })?;
        record.exit_time = Some(exit_time);
        record.duration_hours = Some(duration_hours);
        Ok(())
    }
}
