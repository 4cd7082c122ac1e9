use crate::{
    types::app_state::AppState,
    utils::{app_error::AppError, validated_query::ValidatedQuery},
};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
#[cfg(test)]
use axum_macros::debug_handler;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Validate, Deserialize)]
pub struct PostRouteSelectionPayload {
    #[validate(length(min = 1, message = "Must be at least 1 character"))]
    pub route_id: String,
}

#[derive(Serialize, Deserialize)]
pub struct PostRouteSelectionResponseData {
    pub agency_id: String,
    pub route_id: String,
}

#[derive(Serialize, Deserialize)]
pub struct PostRouteSelectionResponse {
    pub data: PostRouteSelectionResponseData,
}

#[cfg_attr(test, debug_handler)]
pub async fn post_route_selection(
    State(state): State<AppState>,
    ValidatedQuery(payload): ValidatedQuery<PostRouteSelectionPayload>,
) -> Result<Response, AppError> {
    // Vehicles and stops render whenever their responses land.
    let fetches = state.controller.select_route(&payload.route_id)?;

    Ok((
        StatusCode::ACCEPTED,
        Json(PostRouteSelectionResponse {
            data: PostRouteSelectionResponseData {
                agency_id: fetches.agency_id,
                route_id: payload.route_id,
            },
        }),
    )
        .into_response())
}
