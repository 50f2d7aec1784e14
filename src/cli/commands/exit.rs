use crate::cli::context::{self, Context};
use crate::cli::output;
use crate::core::errors::Result;
use crate::core::services::attendance_service::ExitOutcome;

/// Execute the `asistencia exit` command.
///
/// Closes the earliest session `name` left open today. Finding none is
/// reported as a warning, not an error.
pub fn execute(ctx: &Context, name: &str, at: Option<&str>) -> Result<()> {
    let (date, time) = context::now(at)?;
    let service = ctx.service()?;

    match service.register_exit(name, date, time)? {
        ExitOutcome::Closed { record, negative } => {
            let hours = record.duration_hours.unwrap_or_default();
            output::success(&format!(
                "Salida registrada para {}. Duración: {hours:.2} horas",
                record.name
            ));
            if negative {
                output::warning(
                    "La salida es anterior a la entrada: se guardó una duración negativa",
                );
            }
        }
        ExitOutcome::NoOpenEntry => {
            output::warning("No se encontró un registro de entrada para hoy.");
        }
    }

    Ok(())
}
