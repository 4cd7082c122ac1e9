use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::{services::map_renderer::screen::CameraState, types::app_state::AppState};

#[derive(Serialize, Deserialize)]
pub struct GetCameraResponseData {
    pub camera: Option<CameraState>,
}

#[derive(Serialize, Deserialize)]
pub struct GetCameraResponse {
    pub data: GetCameraResponseData,
}

pub async fn get_camera(State(state): State<AppState>) -> Json<GetCameraResponse> {
    Json(GetCameraResponse {
        data: GetCameraResponseData {
            camera: state.screen.camera(),
        },
    })
}
