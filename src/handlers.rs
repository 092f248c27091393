use crate::errors::AppError;
use crate::models::{Control, PanelSnapshot, ToggleRequest, ToggleResponse};
use crate::state::AppState;
use crate::toggle::on_toggle;
use crate::ui::render_index;
use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    Json,
};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let snapshot = state.panel.lock().await.snapshot();
    Html(render_index(&snapshot))
}

pub async fn get_panel(State(state): State<AppState>) -> Json<PanelSnapshot> {
    let snapshot = state.panel.lock().await.snapshot();
    Json(snapshot)
}

pub async fn toggle(
    State(state): State<AppState>,
    Json(payload): Json<ToggleRequest>,
) -> Result<Json<ToggleResponse>, AppError> {
    let control = parse_control(&payload.control)?;
    Ok(Json(on_toggle(&state, control).await))
}

pub async fn toggle_form(
    State(state): State<AppState>,
    Path(control): Path<String>,
) -> Result<Redirect, AppError> {
    let control = parse_control(&control)?;
    on_toggle(&state, control).await;
    Ok(Redirect::to("/"))
}

fn parse_control(id: &str) -> Result<Control, AppError> {
    Control::from_element_id(id.trim())
        .ok_or_else(|| AppError::bad_request(format!("unknown control '{}'", id.trim())))
}
