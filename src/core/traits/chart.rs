use crate::core::models::bar_chart::BarChart;

/// Port for turning aggregate totals into something a person can look at.
pub trait ChartRenderer {
    fn render(&self, chart: &BarChart) -> String;
}
