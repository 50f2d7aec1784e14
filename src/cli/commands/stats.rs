use std::collections::BTreeMap;

use crate::cli::context::Context;
use crate::cli::output;
use crate::core::errors::Result;
use crate::core::models::bar_chart::BarChart;
use crate::core::traits::chart::ChartRenderer;

/// Execute the `asistencia stats` command.
///
/// Charts total hours per person. Rows still missing a duration are left
/// out; when none has one, nothing is drawn.
pub fn execute(ctx: &Context, json: bool) -> Result<()> {
    let stats = ctx.service()?.statistics()?;

    if json {
        let totals: &BTreeMap<String, f64> = &stats.totals;
        let json = serde_json::to_string_pretty(totals).map_err(std::io::Error::from)?;
        println!("{json}");
        return Ok(());
    }

    if stats.is_empty() {
        output::warning("No hay datos para mostrar estadísticas.");
        return Ok(());
    }

    let chart = BarChart::hours_per_person(&stats);
    println!();
    print!("{}", ctx.chart().render(&chart));
    Ok(())
}
