pub mod app;
pub mod config;
pub mod dashboard;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod seed;
pub mod session;
pub mod ui;
pub mod state;

pub use app::router;
pub use config::Config;
pub use dashboard::{DashboardState, TaskSlot};
pub use seed::load_seed;
pub use state::{AppState, SessionLimits};
