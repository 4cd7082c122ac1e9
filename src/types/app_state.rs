use crate::{
    app::AppConfig,
    services::{
        map_renderer::screen::Screen, restbus_client::restbus_client::RestBusClient,
        selection::selection_controller::SelectionController,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub controller: SelectionController,
    pub screen: Screen,
    pub base_style: String,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        let screen = Screen::default();

        AppState {
            controller: SelectionController::new(
                RestBusClient::new(config.restbus_host.clone()),
                screen.clone(),
            ),
            screen,
            base_style: config.base_style.clone(),
        }
    }
}
