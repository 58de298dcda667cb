pub mod catalog;
pub mod constants;
pub mod indicator;
pub mod logger;
pub mod types;
pub mod utils;
pub mod views;
