use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/toggle/:control", post(handlers::toggle_form))
        .route("/api/panel", get(handlers::get_panel))
        .route("/api/toggle", post(handlers::toggle))
        .with_state(state)
}
