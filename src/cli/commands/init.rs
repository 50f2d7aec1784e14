use crate::cli::context::Context;
use crate::cli::output;
use crate::core::errors::Result;

/// Execute the `asistencia init` command.
///
/// Creates the attendance table with its header row. Running it on an
/// existing table only checks the header.
pub fn execute(ctx: &Context) -> Result<()> {
    let existed = ctx.store_path.exists();
    let service = ctx.service()?;
    let path = service.store.path().display();

    if existed {
        output::success(&format!("{path} ya existe; no se modificó"));
    } else {
        output::success(&format!("Creado {path}"));
    }
    Ok(())
}
