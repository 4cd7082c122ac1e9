use axum::{
    routing::{get, post},
    Router,
};

use crate::types::app_state::AppState;

mod get_agencies;
mod get_camera;
mod get_map_source;
mod get_map_style;
mod get_notifications;
mod get_routes;
mod get_selection;
mod post_agency_selection;
mod post_route_selection;

pub fn apply_routes(app: Router<AppState>) -> Router<AppState> {
    app.route("/selection", get(get_selection::get_selection))
        .route("/agencies", get(get_agencies::get_agencies))
        .route(
            "/agency-selection",
            post(post_agency_selection::post_agency_selection),
        )
        .route("/routes", get(get_routes::get_routes))
        .route(
            "/route-selection",
            post(post_route_selection::post_route_selection),
        )
        .route(
            "/map-sources/:source_id",
            get(get_map_source::get_map_source),
        )
        .route("/camera", get(get_camera::get_camera))
        .route("/notifications", get(get_notifications::get_notifications))
        .route("/map-style", get(get_map_style::get_map_style))
}
