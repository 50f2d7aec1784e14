pub mod attendance_service;
pub mod duration;
pub mod report_service;
pub mod session_matcher;
