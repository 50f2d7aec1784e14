use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// Column headers of the attendance table, in their fixed order.
pub const HEADERS: [&str; 5] = [
    "Nombre",
    "Fecha",
    "Hora Entrada",
    "Hora Salida",
    "Duración (horas)",
];

/// One row of the attendance table: a single clock-in, optionally closed
/// by a clock-out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    #[serde(rename = "Nombre")]
    pub name: String,
    #[serde(rename = "Fecha", with = "iso_date")]
    pub date: NaiveDate,
    #[serde(rename = "Hora Entrada", with = "hms")]
    pub entry_time: NaiveTime,
    #[serde(rename = "Hora Salida", with = "hms_opt")]
    pub exit_time: Option<NaiveTime>,
    #[serde(rename = "Duración (horas)")]
    pub duration_hours: Option<f64>,
}

impl AttendanceRecord {
    /// Build an open record. The entry time is truncated to whole seconds.
    pub fn open(name: impl Into<String>, date: NaiveDate, entry_time: NaiveTime) -> Self {
        Self {
            name: name.into(),
            date,
            entry_time: truncate_to_seconds(entry_time),
            exit_time: None,
            duration_hours: None,
        }
    }

    /// An open session has no exit time yet.
    pub fn is_open(&self) -> bool {
        self.exit_time.is_none()
    }
}

/// Drop sub-second precision; the table stores `HH:MM:SS`.
pub fn truncate_to_seconds(time: NaiveTime) -> NaiveTime {
    time.with_nanosecond(0).unwrap_or(time)
}

/// Parse an operator-supplied `HH:MM:SS` string.
pub fn parse_time(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), hms::FORMAT).ok()
}

mod iso_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S: Serializer>(date: &NaiveDate, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&date.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(d)?;
        NaiveDate::parse_from_str(raw.trim(), FORMAT)
            .map_err(|e| D::Error::custom(format!("invalid date '{raw}': {e}")))
    }
}

pub(crate) mod hms {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub const FORMAT: &str = "%H:%M:%S";

    pub fn serialize<S: Serializer>(time: &NaiveTime, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(d)?;
        NaiveTime::parse_from_str(raw.trim(), FORMAT)
            .map_err(|e| D::Error::custom(format!("invalid time '{raw}': {e}")))
    }
}

mod hms_opt {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    use super::hms::FORMAT;

    pub fn serialize<S: Serializer>(time: &Option<NaiveTime>, s: S) -> Result<S::Ok, S::Error> {
        match time {
            Some(t) => s.serialize_str(&t.format(FORMAT).to_string()),
            None => s.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveTime>, D::Error> {
        let raw = Option::<String>::deserialize(d)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(value) => NaiveTime::parse_from_str(value, FORMAT)
                .map(Some)
                .map_err(|e| D::Error::custom(format!("invalid time '{value}': {e}"))),
        }
    }
}
