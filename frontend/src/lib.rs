pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod flows;
pub mod format;
pub mod model;
pub mod pagination;
pub mod pipeline;
pub mod state;

pub use app::{run_app, App};
pub use config::AppConfig;
