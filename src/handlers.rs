use crate::dashboard::{DashboardState, TaskSlot};
use crate::errors::AppError;
use crate::models::{DashboardResponse, ToggleQuery, ToggleRequest};
use crate::session::SessionId;
use crate::state::AppState;
use crate::ui::{render_page, Page};
use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, HeaderName},
    response::{Html, IntoResponse, Redirect},
    Json,
};
use tracing::{debug, info};

pub async fn index(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    page(&state, &headers, Page::Home).await
}

pub async fn sessions(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    page(&state, &headers, Page::Sessions).await
}

pub async fn tasks(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    page(&state, &headers, Page::Tasks).await
}

pub async fn get_dashboard(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    let session = session_id(&headers);
    let snapshot = state.snapshot(session).await;
    debug!(session = %session, progress = snapshot.progress_percent(), "dashboard snapshot");
    (session.set_cookie(), Json(DashboardResponse::from(&snapshot)))
}

pub async fn toggle(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<ToggleRequest>,
) -> Result<impl IntoResponse, AppError> {
    let task = TaskSlot::from_number(payload.task)
        .ok_or_else(|| AppError::unknown_task(payload.task))?;
    let session = session_id(&headers);
    let snapshot = apply_toggle(&state, session, task).await;
    Ok((session.set_cookie(), Json(DashboardResponse::from(&snapshot))))
}

pub async fn toggle_form(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(number): Path<u8>,
    Query(query): Query<ToggleQuery>,
) -> Result<impl IntoResponse, AppError> {
    let task = TaskSlot::from_number(number).ok_or_else(|| AppError::unknown_task(number))?;
    let session = session_id(&headers);
    apply_toggle(&state, session, task).await;
    let next = Page::from_next(query.next.as_deref());
    Ok((session.set_cookie(), Redirect::to(next.path())))
}

async fn page(
    state: &AppState,
    headers: &HeaderMap,
    page: Page,
) -> ([(HeaderName, String); 1], Html<String>) {
    let session = session_id(headers);
    let snapshot = state.snapshot(session).await;
    (session.set_cookie(), Html(render_page(page, &snapshot)))
}

async fn apply_toggle(state: &AppState, session: SessionId, task: TaskSlot) -> DashboardState {
    let snapshot = state.update(session, |dashboard| dashboard.toggle_task(task)).await;
    info!(
        session = %session,
        task = task.number(),
        done = snapshot.task_done(task),
        "task toggled"
    );
    snapshot
}

fn session_id(headers: &HeaderMap) -> SessionId {
    SessionId::from_headers(headers).unwrap_or_else(SessionId::generate)
}
