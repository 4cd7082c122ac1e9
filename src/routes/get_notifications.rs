use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::types::{app_state::AppState, notification::Notification};

#[derive(Serialize, Deserialize)]
pub struct GetNotificationsResponseData {
    pub notifications: Vec<Notification>,
}

#[derive(Serialize, Deserialize)]
pub struct GetNotificationsResponse {
    pub data: GetNotificationsResponseData,
}

/// Hands out pending notifications. Each one is delivered once.
pub async fn get_notifications(State(state): State<AppState>) -> Json<GetNotificationsResponse> {
    Json(GetNotificationsResponse {
        data: GetNotificationsResponseData {
            notifications: state.screen.drain_notifications(),
        },
    })
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::Request,
    };
    use tower::ServiceExt;
    use tracing_test::traced_test;

    use super::*;
    use crate::{app::gen_mock_app, types::notification::NotificationLevel};

    async fn fetch(app: axum::Router) -> GetNotificationsResponse {
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/notifications")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    #[traced_test]
    async fn delivers_failed_agency_load_once() {
        let mut mock_app = gen_mock_app().await;
        let _mock = mock_app
            .restbus_server
            .mock("GET", "/api/agencies")
            .with_status(500)
            .create_async()
            .await;

        mock_app.state.controller.load_agencies().await.unwrap();

        let body = fetch(mock_app.app.clone()).await;
        assert_eq!(body.data.notifications.len(), 1);
        assert_eq!(body.data.notifications[0].level, NotificationLevel::Error);

        let body = fetch(mock_app.app).await;
        assert!(body.data.notifications.is_empty());
    }
}
