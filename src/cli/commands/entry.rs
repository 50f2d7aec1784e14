use crate::cli::context::{self, Context};
use crate::cli::output;
use crate::core::errors::Result;

/// Execute the `asistencia entry` command.
///
/// Appends an open session for `name` dated today.
pub fn execute(ctx: &Context, name: &str, at: Option<&str>) -> Result<()> {
    let (date, time) = context::now(at)?;
    let service = ctx.service()?;

    let record = service.register_entry(name, date, time)?;

    output::success(&format!(
        "Entrada registrada para {} a las {}",
        record.name,
        record.entry_time.format("%H:%M:%S")
    ));
    Ok(())
}
