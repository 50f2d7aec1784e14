use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::models::bar_chart::BarChart;
use crate::core::traits::chart::ChartRenderer;

/// Characters each bar occupies, separator included.
const COLUMN_WIDTH: usize = 4;
const BLOCK: &str = "██";

/// Vertical bar chart drawn with box characters.
///
/// Labels run top to bottom under their bar, one character per line,
/// so long names never push the columns apart.
pub struct TerminalBarChart {
    pub height: usize,
}

impl Default for TerminalBarChart {
    fn default() -> Self {
        Self { height: 10 }
    }
}

impl TerminalBarChart {
    /// Rows a bar fills. Any positive value gets at least one row.
    fn bar_rows(&self, value: f64, max: f64) -> usize {
        if value <= 0.0 || max <= 0.0 {
            return 0;
        }
        let rows = (value / max * self.height as f64).round() as usize;
        rows.clamp(1, self.height)
    }
}

impl ChartRenderer for TerminalBarChart {
    fn render(&self, chart: &BarChart) -> String {
        let max = chart.max_value();
        let top_tick = format!("{max:.2}");
        let axis_width = top_tick.len().max(4);
        let rows: Vec<usize> = chart
            .bars
            .iter()
            .map(|b| self.bar_rows(b.value, max))
            .collect();

        let mut lines = vec![chart.title.clone(), String::new(), chart.y_label.clone()];

        for level in (1..=self.height.max(1)).rev() {
            let tick = if level == self.height.max(1) {
                top_tick.as_str()
            } else {
                ""
            };
            let mut line = format!("{tick:>axis_width$} │");
            for &filled in &rows {
                let cell = if filled >= level { BLOCK } else { "  " };
                line.push(' ');
                line.push_str(cell);
                line.push(' ');
            }
            lines.push(line);
        }

        lines.push(format!(
            "{:>axis_width$} └{}",
            "0.00",
            "─".repeat(chart.bars.len() * COLUMN_WIDTH)
        ));

        // x-tick labels, rotated to read downwards
        let labels: Vec<Vec<(String, usize)>> =
            chart.bars.iter().map(|b| label_cells(&b.label)).collect();
        let depth = labels.iter().map(Vec::len).max().unwrap_or(0);
        for i in 0..depth {
            let mut line = " ".repeat(axis_width + 2);
            for label in &labels {
                let (cell, width) = label.get(i).map_or((" ", 1), |(c, w)| (c.as_str(), *w));
                line.push(' ');
                line.push_str(cell);
                line.push_str(&" ".repeat(COLUMN_WIDTH - 1 - width.min(2)));
            }
            lines.push(line);
        }

        lines.push(format!("{}{}", " ".repeat(axis_width + 3), chart.x_label));
        lines.push(String::new());

        let name_width = chart.bars.iter().map(|b| b.label.width()).max().unwrap_or(0);
        for bar in &chart.bars {
            let pad = name_width - bar.label.width();
            lines.push(format!(
                "{}{} {:>8.2}",
                bar.label,
                " ".repeat(pad),
                bar.value
            ));
        }

        let mut out = lines
            .iter()
            .map(|l| l.trim_end())
            .collect::<Vec<_>>()
            .join("\n");
        out.push('\n');
        out
    }
}

/// Split a label into terminal cells with their display width.
/// Zero-width characters (combining marks) stay with the cell before them.
fn label_cells(label: &str) -> Vec<(String, usize)> {
    let mut cells: Vec<(String, usize)> = Vec::new();
    for c in label.chars() {
        let width = c.width().unwrap_or(0);
        match cells.last_mut() {
            Some((cell, _)) if width == 0 => cell.push(c),
            _ => cells.push((c.to_string(), width)),
        }
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::bar_chart::Bar;

    fn chart(bars: &[(&str, f64)]) -> BarChart {
        BarChart {
            title: "Horas Totales por Persona".into(),
            x_label: "Nombre".into(),
            y_label: "Horas".into(),
            bars: bars
                .iter()
                .map(|(label, value)| Bar {
                    label: label.to_string(),
                    value: *value,
                })
                .collect(),
        }
    }

    #[test]
    fn renders_bars_scaled_to_the_tallest() {
        let renderer = TerminalBarChart { height: 3 };

        let out = renderer.render(&chart(&[("Alice", 5.5), ("Bob", 1.0)]));

        let expected = "\
Horas Totales por Persona

Horas
5.50 │ ██
     │ ██
     │ ██  ██
0.00 └────────
       A   B
       l   o
       i   b
       c
       e
       Nombre

Alice     5.50
Bob       1.00
";
        assert_eq!(out, expected);
    }

    #[test]
    fn small_positive_value_still_shows() {
        let renderer = TerminalBarChart { height: 10 };
        assert_eq!(renderer.bar_rows(0.01, 40.0), 1);
        assert_eq!(renderer.bar_rows(40.0, 40.0), 10);
    }

    #[test]
    fn wide_and_combining_labels_keep_columns_aligned() {
        let renderer = TerminalBarChart { height: 1 };

        let out = renderer.render(&chart(&[("李明", 2.0), ("Jose\u{301}", 1.0)]));

        let lines: Vec<&str> = out.lines().collect();
        let labels_start = lines.iter().position(|l| l.starts_with("0.00")).unwrap() + 1;
        assert_eq!(lines[labels_start], "       李  J");
        assert_eq!(lines[labels_start + 1], "       明  o");
        assert_eq!(lines[labels_start + 3], "           e\u{301}");
        assert!(out.contains("李明     2.00"));
        assert!(out.contains("Jose\u{301}     1.00"));
    }

    #[test]
    fn negative_totals_render_empty_columns() {
        let renderer = TerminalBarChart { height: 2 };

        let out = renderer.render(&chart(&[("Ana", -23.67)]));

        assert!(!out.contains(BLOCK));
        assert!(out.contains("Ana   -23.67"));
    }
}
