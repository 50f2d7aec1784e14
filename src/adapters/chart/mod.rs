pub mod terminal_bar_chart;
