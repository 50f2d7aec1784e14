use chrono::NaiveTime;

use crate::core::errors::Result;
use crate::core::models::attendance_record::AttendanceRecord;

/// Port for the persisted attendance table.
///
/// Every mutation is durable by the time the call returns. Row indices
/// are zero-based positions among data rows (the header is not counted).
pub trait AttendanceStore {
    /// Create the table with its header if it does not exist yet.
    /// Never touches an existing table beyond validating its header.
    fn ensure_initialized(&self) -> Result<()>;

    /// Append one row at the end of the table.
    fn append_record(&self, record: &AttendanceRecord) -> Result<()>;

    /// Every row, in file order.
    fn load_all(&self) -> Result<Vec<AttendanceRecord>>;

    /// Fill in the exit fields of an existing row.
    fn update_exit_fields(
        &self,
        row: usize,
        exit_time: NaiveTime,
        duration_hours: f64,
    ) -> Result<()>;
}
