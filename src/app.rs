use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/sessions", get(handlers::sessions))
        .route("/tasks", get(handlers::tasks))
        .route("/tasks/:task/toggle", post(handlers::toggle_form))
        .route("/api/dashboard", get(handlers::get_dashboard))
        .route("/api/tasks/toggle", post(handlers::toggle))
        .with_state(state)
}
