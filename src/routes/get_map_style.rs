use axum::{extract::State, Json};
use serde_json::Value;

use crate::{services::map_renderer::map_style::style_description, types::app_state::AppState};

pub async fn get_map_style(State(state): State<AppState>) -> Json<Value> {
    Json(style_description(&state.base_style))
}
