pub mod app;
pub mod config;
pub mod controller;
pub mod errors;
pub mod fmt;
pub mod handlers;
pub mod models;
pub mod panel;
pub mod poller;
pub mod render;
pub mod state;
pub mod toggle;
pub mod ui;

pub use app::router;
pub use config::PanelConfig;
pub use controller::ControllerClient;
pub use state::AppState;
