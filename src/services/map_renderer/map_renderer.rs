use geojson::{Feature, FeatureCollection, GeoJson, Geometry, Value};
use serde_json::json;
use tracing::info;

use super::map_style::{CameraUpdate, MapStyle, SourceId};
use crate::types::transit::{LatLng, LatLngBounds, RouteDetail, Stop, Vehicle};

#[derive(Debug, PartialEq)]
pub enum RenderOutcome {
    Rendered { features: usize, camera_moved: bool },
    /// Nothing to draw. The caller tells the user instead.
    Empty,
}

fn point(pos: LatLng) -> Geometry {
    Geometry::new(Value::Point(vec![pos.lon, pos.lat]))
}

fn feature(geometry: Geometry) -> Feature {
    Feature {
        bbox: None,
        geometry: Some(geometry),
        id: None,
        properties: None,
        foreign_members: None,
    }
}

fn collection(features: Vec<Feature>) -> GeoJson {
    GeoJson::FeatureCollection(FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    })
}

/// Replaces the vehicle source with one point per vehicle.
///
/// An empty list still clears the source so markers from the previous route disappear.
pub fn render_vehicles(style: &impl MapStyle, vehicles: &[Vehicle]) -> RenderOutcome {
    let features: Vec<Feature> = vehicles
        .iter()
        .map(|v| {
            let mut f = feature(point(v.position));
            f.set_property("id", v.id.clone());
            f.set_property("route_id", v.route_id.clone());
            f.set_property("direction_id", json!(v.direction_id));
            f.set_property("predictable", v.predictable);
            f.set_property("heading", json!(v.heading));
            f.set_property("kph", json!(v.kph));
            f.set_property("secs_since_report", json!(v.secs_since_report));
            f.set_property(
                "reported_at",
                json!(v.reported_at.map(|t| t.to_rfc3339())),
            );
            f
        })
        .collect();

    let count = features.len();
    style.set_source(SourceId::Vehicles, collection(features));

    if count == 0 {
        return RenderOutcome::Empty;
    }

    info!("Rendered {} vehicles", count);
    RenderOutcome::Rendered {
        features: count,
        camera_moved: false,
    }
}

/// Stops to draw, in order.
///
/// Restbus sometimes repeats the terminal stop at the end of the list. A trailing stop whose
/// longitude equals the first stop's is dropped so the line does not close on itself.
pub fn route_points(stops: &[Stop]) -> &[Stop] {
    match stops {
        [first, .., last] if first.position.lon == last.position.lon => &stops[..stops.len() - 1],
        _ => stops,
    }
}

fn bbox(bounds: LatLngBounds) -> Vec<f64> {
    vec![
        bounds.south_west.lon,
        bounds.south_west.lat,
        bounds.north_east.lon,
        bounds.north_east.lat,
    ]
}

/// Draws the route line and its stops, then fits the camera to them.
///
/// A line needs two positions. With fewer, the line source is cleared and only the stop
/// is drawn.
pub fn render_route(style: &impl MapStyle, detail: &RouteDetail) -> RenderOutcome {
    if detail.stops.is_empty() {
        return RenderOutcome::Empty;
    }

    let stops = route_points(&detail.stops);
    let positions: Vec<LatLng> = stops.iter().map(|s| s.position).collect();
    let extent = detail.extent().map(bbox);

    if positions.len() > 1 {
        let mut line = feature(Geometry::new(Value::LineString(
            positions.iter().map(|p| vec![p.lon, p.lat]).collect(),
        )));
        line.bbox = extent.clone();
        line.set_property("route_id", detail.id.clone());
        line.set_property("title", detail.title.clone());
        line.set_property("color", json!(detail.color));
        line.set_property("text_color", json!(detail.text_color));
        style.set_source(SourceId::RouteLine, GeoJson::Feature(line));
    } else {
        style.set_source(SourceId::RouteLine, collection(vec![]));
    }

    let stop_features: Vec<Feature> = stops
        .iter()
        .enumerate()
        .map(|(idx, s)| {
            let mut f = feature(point(s.position));
            f.set_property("id", s.id.clone());
            f.set_property("code", json!(s.code));
            f.set_property("title", s.title.clone());
            f.set_property("stop_sequence", idx + 1);
            f
        })
        .collect();
    style.set_source(
        SourceId::RouteStops,
        GeoJson::FeatureCollection(FeatureCollection {
            bbox: extent,
            features: stop_features,
            foreign_members: None,
        }),
    );

    let camera_moved = match LatLngBounds::from_points(&positions) {
        Some(bounds) if positions.len() > 1 => {
            style.animate_camera(CameraUpdate::fit_bounds(bounds));
            true
        }
        _ => false,
    };

    info!("Rendered route {} with {} stops", detail.id, stops.len());
    RenderOutcome::Rendered {
        features: stops.len(),
        camera_moved,
    }
}
