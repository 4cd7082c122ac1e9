use geojson::GeoJson;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::types::transit::LatLngBounds;

pub const DEFAULT_BASE_STYLE: &str = "mapbox://styles/mapbox/streets-v11";
pub const VEHICLE_ICON_ID: &str = "vehicle-icon";

/// Padding around the route when the camera fits it, in pixels.
pub const CAMERA_PADDING: f64 = 65.0;
pub const CAMERA_ANIMATION_MS: u64 = 1400;

/// GeoJSON sources owned by the map style. Each one backs exactly one layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceId {
    Vehicles,
    RouteLine,
    RouteStops,
}

impl SourceId {
    pub const ALL: [SourceId; 3] = [SourceId::Vehicles, SourceId::RouteLine, SourceId::RouteStops];

    pub fn from_name(name: &str) -> Option<Self> {
        SourceId::ALL.into_iter().find(|s| s.as_str() == name)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SourceId::Vehicles => "vehicles",
            SourceId::RouteLine => "route-line",
            SourceId::RouteStops => "route-stops",
        }
    }

    pub fn layer_id(&self) -> &'static str {
        match self {
            SourceId::Vehicles => "vehicle-layer",
            SourceId::RouteLine => "route-line-layer",
            SourceId::RouteStops => "route-stop-layer",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CameraUpdate {
    pub bounds: LatLngBounds,
    pub padding: f64,
    pub duration_ms: u64,
}

impl CameraUpdate {
    pub fn fit_bounds(bounds: LatLngBounds) -> Self {
        CameraUpdate {
            bounds,
            padding: CAMERA_PADDING,
            duration_ms: CAMERA_ANIMATION_MS,
        }
    }
}

/// The rendering engine's side of the overlays.
///
/// Every source update replaces the source's whole data set.
pub trait MapStyle {
    fn set_source(&self, source: SourceId, data: GeoJson);
    fn animate_camera(&self, update: CameraUpdate);
}

/// Sources and layers the overlays render into, bottom to top: route line, stops, vehicles.
pub fn style_description(base_style: &str) -> Value {
    let empty = || {
        json!({
            "type": "geojson",
            "data": { "type": "FeatureCollection", "features": [] }
        })
    };

    json!({
        "base": base_style,
        "sources": {
            "vehicles": empty(),
            "route-line": empty(),
            "route-stops": empty()
        },
        "layers": [
            {
                "id": SourceId::RouteLine.layer_id(),
                "type": "line",
                "source": SourceId::RouteLine.as_str(),
                "paint": { "line-color": "#FF0000", "line-width": 6 }
            },
            {
                "id": SourceId::RouteStops.layer_id(),
                "type": "circle",
                "source": SourceId::RouteStops.as_str(),
                "paint": { "circle-radius": 4, "circle-color": "#000000" }
            },
            {
                "id": SourceId::Vehicles.layer_id(),
                "type": "symbol",
                "source": SourceId::Vehicles.as_str(),
                "layout": {
                    "icon-image": VEHICLE_ICON_ID,
                    "icon-anchor": "bottom",
                    "icon-allow-overlap": true,
                    "icon-ignore-placement": true
                }
            }
        ]
    })
}
