pub mod entry;
pub mod exit;
pub mod init;
pub mod menu;
pub mod report;
pub mod stats;
