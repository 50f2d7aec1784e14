use super::report::Statistics;

/// Data handed to a chart renderer: one bar per label, in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub bars: Vec<Bar>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
}

impl BarChart {
    /// The "hours per person" chart shown by the statistics view.
    pub fn hours_per_person(stats: &Statistics) -> Self {
        Self {
            title: "Horas Totales por Persona".into(),
            x_label: "Nombre".into(),
            y_label: "Horas".into(),
            bars: stats
                .totals
                .iter()
                .map(|(name, hours)| Bar {
                    label: name.clone(),
                    value: *hours,
                })
                .collect(),
        }
    }

    /// Largest bar value, or zero when there is no positive bar.
    pub fn max_value(&self) -> f64 {
        self.bars.iter().map(|b| b.value).fold(0.0, f64::max)
    }
}
