use crate::dashboard::DashboardState;
use std::path::Path;
use tokio::fs;
use tracing::{error, info};

/// Loads the template for new sessions. Never fails: problems with the
/// file are logged and the built-in defaults are used instead.
pub async fn load_seed(path: Option<&Path>) -> DashboardState {
    let Some(path) = path else {
        return DashboardState::default();
    };

    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(seed) => {
                info!("loaded dashboard seed from {}", path.display());
                seed
            }
            Err(err) => {
                error!("failed to parse seed file: {err}");
                DashboardState::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => DashboardState::default(),
        Err(err) => {
            error!("failed to read seed file: {err}");
            DashboardState::default()
        }
    }
}
