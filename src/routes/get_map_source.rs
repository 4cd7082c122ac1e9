use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::{
    services::map_renderer::map_style::SourceId, types::app_state::AppState,
    utils::app_error::AppError,
};

/// Current GeoJSON of one overlay source, as the map should draw it.
pub async fn get_map_source(
    State(state): State<AppState>,
    Path(source_id): Path<String>,
) -> Result<Response, AppError> {
    let source = SourceId::from_name(&source_id)
        .ok_or_else(|| AppError::new(StatusCode::NOT_FOUND, "Unknown map source"))?;

    let data = state
        .screen
        .source(source)
        .ok_or_else(|| AppError::new(StatusCode::NOT_FOUND, "Nothing rendered yet"))?;

    Ok((StatusCode::OK, Json(data)).into_response())
}
