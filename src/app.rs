use crate::{routes::apply_routes, types::app_state::AppState};
use axum::Router;
use tower_http::cors::CorsLayer;

#[derive(Clone)]
pub struct AppConfig {
    pub restbus_host: String,
    pub base_style: String,
}

pub fn gen_app(state: AppState) -> Router {
    let cors_middleware = CorsLayer::permissive();

    apply_routes(Router::new())
        .layer(cors_middleware)
        .with_state(state)
}

#[cfg(test)]
pub struct MockApp {
    pub app: Router,
    pub state: AppState,
    pub restbus_server: mockito::ServerGuard,
}

#[cfg(test)]
pub async fn gen_mock_app() -> MockApp {
    let restbus_server = mockito::Server::new_async().await;

    let state = AppState::new(&AppConfig {
        restbus_host: restbus_server.url(),
        base_style: crate::services::map_renderer::map_style::DEFAULT_BASE_STYLE.to_string(),
    });

    MockApp {
        app: gen_app(state.clone()),
        state,
        restbus_server,
    }
}

/// Polls until `done` holds. Selections answer before their fetches finish.
#[cfg(test)]
pub async fn wait_until(done: impl Fn() -> bool) {
    for _ in 0..200 {
        if done() {
            return;
        }
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    }
    panic!("condition not reached in time");
}
