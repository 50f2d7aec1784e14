use std::path::PathBuf;

/// All domain errors for asistencia.
///
/// "No open entry" and "no records" are not errors; services report
/// them through their return values.
#[derive(Debug, thiserror::Error)]
pub enum AttendanceError {
    #[error(
        "No se puede usar el archivo de asistencia {path}: {reason}\n\n  \
         Compruebe que la carpeta existe y tiene permisos de escritura,\n  \
         o indique otro archivo con --file <ruta>."
    )]
    StoreUnavailable { path: PathBuf, reason: String },

    #[error(
        "El archivo de asistencia {path} está dañado en la línea {line}: {detail}\n\n  \
         Formato esperado: fechas YYYY-MM-DD, horas HH:MM:SS, duraciones numéricas."
    )]
    CorruptStore {
        path: PathBuf,
        line: u64,
        detail: String,
    },

    #[error(
        "Encabezado inesperado en {path}: {detail}\n\n  \
         La primera fila debe ser exactamente:\n    \
         Nombre,Fecha,Hora Entrada,Hora Salida,Duración (horas)"
    )]
    SchemaMismatch { path: PathBuf, detail: String },

    #[error("La fila {index} no existe (la tabla tiene {len} filas de datos)")]
    RowOutOfRange { index: usize, len: usize },

    #[error("El nombre no puede estar vacío")]
    InvalidName,

    #[error("Hora no válida '{value}'. Formato esperado HH:MM:SS, p. ej. 17:30:00")]
    InvalidTime { value: String },

    #[error(
        "La salida ({exit}) es anterior a la entrada ({entry}) de {name}\n\n  \
         La validación same_day_only está activa y la sesión sigue abierta.\n  \
         Desactívela con [session] same_day_only = false para guardar el valor tal cual."
    )]
    InvalidDuration {
        name: String,
        entry: chrono::NaiveTime,
        exit: chrono::NaiveTime,
    },

    #[error("Configuración no válida: {detail}")]
    InvalidConfig { detail: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AttendanceError>;
