use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::{
    services::selection::selection_controller::SelectionPhase, types::app_state::AppState,
};

#[derive(Serialize, Deserialize)]
pub struct GetSelectionResponse {
    pub data: SelectionPhase,
}

pub async fn get_selection(State(state): State<AppState>) -> Json<GetSelectionResponse> {
    Json(GetSelectionResponse {
        data: state.controller.phase(),
    })
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use super::*;
    use crate::app::gen_mock_app;

    #[tokio::test]
    async fn starts_without_agency() {
        let mock_app = gen_mock_app().await;

        let response = mock_app
            .app
            .oneshot(Request::builder().uri("/selection").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["data"]["phase"], "no_agency_selected");

        let body: GetSelectionResponse = serde_json::from_value(body).unwrap();
        assert_eq!(body.data, SelectionPhase::NoAgencySelected);
    }
}
