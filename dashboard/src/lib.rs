pub mod api;
pub mod config;
pub mod dashboard_actors;
pub mod errors;
pub mod messages;
pub mod render;
pub mod state;
