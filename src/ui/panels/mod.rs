// ServerLogs - ui/panels/mod.rs

pub mod about;
pub mod log_view;
pub mod warnings;
