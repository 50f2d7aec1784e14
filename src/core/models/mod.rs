pub mod attendance_record;
pub mod bar_chart;
pub mod report;
