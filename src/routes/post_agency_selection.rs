use crate::{
    services::selection::selection_controller::AgencySelection,
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
pub struct PostAgencySelectionPayload {
    #[validate(length(min = 1, message = "Must be at least 1 character"))]
    pub agency_id: String,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum AgencySelectionStatus {
    Acknowledged,
    LoadingRoutes,
}

#[derive(Serialize, Deserialize)]
pub struct PostAgencySelectionResponseData {
    pub status: AgencySelectionStatus,
}

#[derive(Serialize, Deserialize)]
pub struct PostAgencySelectionResponse {
    pub data: PostAgencySelectionResponseData,
}

#[cfg_attr(test, debug_handler)]
pub async fn post_agency_selection(
    State(state): State<AppState>,
    ValidatedQuery(payload): ValidatedQuery<PostAgencySelectionPayload>,
) -> Result<Response, AppError> {
    // The route list arrives on its own; nothing waits for it here.
    let status = match state.controller.select_agency(&payload.agency_id)? {
        AgencySelection::Acknowledged => AgencySelectionStatus::Acknowledged,
        AgencySelection::LoadingRoutes(_) => AgencySelectionStatus::LoadingRoutes,
    };

    Ok((
        StatusCode::ACCEPTED,
        Json(PostAgencySelectionResponse {
            data: PostAgencySelectionResponseData { status },
        }),
    )
        .into_response())
}
