use colored::Colorize;

use crate::cli::context::Context;
use crate::cli::output;
use crate::core::errors::Result;
use crate::core::models::attendance_record::AttendanceRecord;
use crate::core::models::report::Report;

/// Execute the `asistencia report` command.
///
/// Lists every session of `name` in file order, followed by the total of
/// recorded hours. Open sessions are listed but count as zero.
pub fn execute(ctx: &Context, name: &str, json: bool) -> Result<()> {
    let report = ctx.service()?.individual_report(name)?;

    if json {
        let json = serde_json::to_string_pretty(&report).map_err(std::io::Error::from)?;
        println!("{json}");
        return Ok(());
    }

    if report.is_empty() {
        output::warning(&format!("No hay registros para {}", report.name));
        return Ok(());
    }

    print_report(&report);
    Ok(())
}

fn print_report(report: &Report) {
    output::header(&format!("Reporte de asistencia para {}:", report.name));
    println!(
        "  {:<10}  {:<8}  {:<8}  {:>7}",
        "Fecha".dimmed(),
        "Entrada".dimmed(),
        "Salida".dimmed(),
        "Horas".dimmed()
    );

    for record in &report.records {
        print_row(record);
    }

    println!();
    println!("  Horas totales: {:.2}", report.total_hours);

    let open = report.open_sessions();
    if open > 0 {
        output::warning(&format!("{open} sesión(es) sin salida registrada"));
    }
}

fn print_row(record: &AttendanceRecord) {
    let exit = record
        .exit_time
        .map(|t| t.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "—".into());
    let hours = record
        .duration_hours
        .map(|h| format!("{h:.2}"))
        .unwrap_or_else(|| "—".into());

    println!(
        "  {:<10}  {:<8}  {:<8}  {:>7}",
        record.date.format("%Y-%m-%d").to_string(),
        record.entry_time.format("%H:%M:%S").to_string(),
        exit,
        hours
    );
}
