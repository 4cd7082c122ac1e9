mod app;
mod routes;
mod services;
mod types;
mod utils;

use std::{env, error::Error};

use services::{
    map_renderer::map_style::DEFAULT_BASE_STYLE,
    restbus_client::restbus_client::DEFAULT_RESTBUS_HOST,
};
use tracing::info;
use types::app_state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt::init();
    info!("Starting app...");

    // agencies: http://restbus.info/api/agencies
    // routes: http://restbus.info/api/agencies/{agency}/routes
    // stops and paths: http://restbus.info/api/agencies/{agency}/routes/{route}
    // vehicles: http://restbus.info/api/agencies/{agency}/routes/{route}/vehicles
    let config = app::AppConfig {
        restbus_host: env::var("RESTBUS_HOST")
            .unwrap_or_else(|_| DEFAULT_RESTBUS_HOST.to_string()),
        base_style: env::var("MAP_BASE_STYLE")
            .unwrap_or_else(|_| DEFAULT_BASE_STYLE.to_string()),
    };
    let bind_address = env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

    let state = AppState::new(&config);
    state.controller.load_agencies();
    let app = app::gen_app(state);

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!("Listening on {}", bind_address);
    axum::serve(listener, app).await?;

    Ok(())
}
