use std::fs::{self, File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveTime;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::core::errors::{AttendanceError, Result};
use crate::core::models::attendance_record::{AttendanceRecord, HEADERS};
use crate::core::traits::store::AttendanceStore;

/// Attendance table persisted as a CSV file.
///
/// The first line is the header, every following line one session:
/// ```text
/// Nombre,Fecha,Hora Entrada,Hora Salida,Duración (horas)
/// Alice,2026-03-02,09:00:00,17:30:00,8.5
/// Bob,2026-03-02,10:15:00,,
/// ```
/// Appends go straight to the end of the file. Updating a row rewrites
/// the table into a temp file next to it and renames it into place.
#[derive(Debug, Clone)]
pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Return the file path this store reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn open(&self) -> Result<File> {
        File::open(&self.path).map_err(|e| self.unavailable(e))
    }

    fn unavailable(&self, err: impl std::fmt::Display) -> AttendanceError {
        AttendanceError::StoreUnavailable {
            path: self.path.clone(),
            reason: err.to_string(),
        }
    }

    fn decode_error(&self, err: csv::Error) -> AttendanceError {
        if err.is_io_error() {
            return self.unavailable(err);
        }
        AttendanceError::CorruptStore {
            path: self.path.clone(),
            line: err.position().map(|p| p.line()).unwrap_or(0),
            detail: err.to_string(),
        }
    }

    fn check_header(&self, reader: &mut csv::Reader<File>) -> Result<()> {
        let header = reader.headers().map_err(|e| self.decode_error(e))?;
        let found: Vec<&str> = header.iter().map(str::trim).collect();

        if found.is_empty() {
            return Err(AttendanceError::SchemaMismatch {
                path: self.path.clone(),
                detail: "el archivo no tiene fila de encabezado".into(),
            });
        }

        let missing: Vec<&str> = HEADERS
            .iter()
            .copied()
            .filter(|h| !found.contains(h))
            .collect();
        if !missing.is_empty() {
            return Err(AttendanceError::SchemaMismatch {
                path: self.path.clone(),
                detail: format!("faltan columnas: {}", missing.join(", ")),
            });
        }

        if found != HEADERS {
            return Err(AttendanceError::SchemaMismatch {
                path: self.path.clone(),
                detail: format!("columnas en orden incorrecto: {}", found.join(", ")),
            });
        }

        Ok(())
    }

    fn reader(&self) -> Result<csv::Reader<File>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(self.open()?);
        self.check_header(&mut reader)?;
        Ok(reader)
    }

    /// Write header and rows to `writer`, replacing nothing by itself.
    fn write_table<W: Write>(&self, writer: W, rows: &[AttendanceRecord]) -> Result<()> {
        let mut csv = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);
        csv.write_record(HEADERS).map_err(|e| self.unavailable(e))?;
        for row in rows {
            csv.serialize(row).map_err(|e| self.unavailable(e))?;
        }
        csv.flush()?;
        Ok(())
    }

    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        }
    }
}

/// True when the file is empty or its last byte is a newline.
fn ends_with_newline(file: &mut File) -> std::io::Result<bool> {
    if file.metadata()?.len() == 0 {
        return Ok(true);
    }
    file.seek(SeekFrom::End(-1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}

impl AttendanceStore for CsvStore {
    fn ensure_initialized(&self) -> Result<()> {
        if self.path.exists() {
            self.reader()?;
            return Ok(());
        }

        let parent = self.parent_dir();
        if !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| self.unavailable(e))?;
        }

        let file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.path)
            .map_err(|e| self.unavailable(e))?;
        self.write_table(&file, &[])?;
        file.sync_all()?;

        debug!(path = %self.path.display(), "created attendance table");
        Ok(())
    }

    fn append_record(&self, record: &AttendanceRecord) -> Result<()> {
        self.reader()?;

        let mut file = OpenOptions::new()
            .read(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.unavailable(e))?;

        // A hand-edited file may lack the final newline.
        if !ends_with_newline(&mut file)? {
            file.write_all(b"\n")?;
        }

        let mut csv = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(&file);
        csv.serialize(record).map_err(|e| self.unavailable(e))?;
        csv.flush()?;
        drop(csv);
        file.sync_data()?;

        debug!(person = %record.name, date = %record.date, "appended row");
        Ok(())
    }

    fn load_all(&self) -> Result<Vec<AttendanceRecord>> {
        let mut reader = self.reader()?;
        let rows = reader
            .deserialize()
            .collect::<std::result::Result<Vec<AttendanceRecord>, csv::Error>>()
            .map_err(|e| self.decode_error(e))?;

        debug!(path = %self.path.display(), rows = rows.len(), "loaded attendance table");
        Ok(rows)
    }

    fn update_exit_fields(
        &self,
        row: usize,
        exit_time: NaiveTime,
        duration_hours: f64,
    ) -> Result<()> {
        let mut rows = self.load_all()?;
        let len = rows.len();
        let record = rows
            .get_mut(row)
            .ok_or(AttendanceError::RowOutOfRange { index: row, len })?;
        record.exit_time = Some(exit_time);
        record.duration_hours = Some(duration_hours);

        // The temp file starts out 0600; carry the table's mode across the rename.
        let permissions = fs::metadata(&self.path)
            .map_err(|e| self.unavailable(e))?
            .permissions();
        let tmp = NamedTempFile::new_in(self.parent_dir()).map_err(|e| self.unavailable(e))?;
        self.write_table(tmp.as_file(), &rows)?;
        tmp.as_file()
            .set_permissions(permissions)
            .map_err(|e| self.unavailable(e))?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path)
            .map_err(|e| self.unavailable(e.error))?;

        debug!(row, %exit_time, duration_hours, "rewrote attendance table");
        Ok(())
    }
}
