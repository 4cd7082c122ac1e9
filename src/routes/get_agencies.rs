use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::types::{app_state::AppState, transit::Agency};

#[derive(Serialize, Deserialize)]
pub struct GetAgenciesResponseData {
    pub agencies: Vec<Agency>,
}

#[derive(Serialize, Deserialize)]
pub struct GetAgenciesResponse {
    pub data: GetAgenciesResponseData,
}

pub async fn get_agencies(State(state): State<AppState>) -> Json<GetAgenciesResponse> {
    Json(GetAgenciesResponse {
        data: GetAgenciesResponseData {
            agencies: state.screen.agency_options(),
        },
    })
}
