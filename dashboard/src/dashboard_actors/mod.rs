pub mod dashboard;
pub mod ui_handler;
