use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::{
    services::selection::selection_controller::SelectionPhase,
    types::{app_state::AppState, transit::Route},
};

#[derive(Serialize, Deserialize)]
pub struct GetRoutesResponseData {
    pub agency_id: Option<String>,
    pub routes: Vec<Route>,
}

#[derive(Serialize, Deserialize)]
pub struct GetRoutesResponse {
    pub data: GetRoutesResponseData,
}

pub async fn get_routes(State(state): State<AppState>) -> Json<GetRoutesResponse> {
    let agency_id = match state.controller.phase() {
        SelectionPhase::NoAgencySelected => None,
        SelectionPhase::AgencySelected { agency_id }
        | SelectionPhase::RouteSelected { agency_id, .. } => Some(agency_id),
    };

    Json(GetRoutesResponse {
        data: GetRoutesResponseData {
            agency_id,
            routes: state.screen.route_options(),
        },
    })
}
