use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Agency {
    pub id: String,
    pub title: String,
    pub region: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub id: String,
    pub title: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Vehicle {
    pub id: String,
    pub route_id: String,
    pub direction_id: Option<String>,
    pub predictable: bool,
    pub position: LatLng,
    pub heading: Option<i32>,
    pub kph: Option<i32>,
    pub secs_since_report: Option<i64>,
    pub reported_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Stop {
    pub id: String,
    pub code: Option<String>,
    pub title: String,
    pub position: LatLng,
}

/// South-west and north-east corners of a region.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatLngBounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl LatLngBounds {
    /// Smallest box containing every point, or `None` for an empty slice.
    pub fn from_points(points: &[LatLng]) -> Option<Self> {
        let first = points.first()?;
        let mut bounds = LatLngBounds {
            south_west: *first,
            north_east: *first,
        };

        for p in &points[1..] {
            bounds.south_west.lat = bounds.south_west.lat.min(p.lat);
            bounds.south_west.lon = bounds.south_west.lon.min(p.lon);
            bounds.north_east.lat = bounds.north_east.lat.max(p.lat);
            bounds.north_east.lon = bounds.north_east.lon.max(p.lon);
        }

        Some(bounds)
    }
}

/// A route's metadata together with its stop sequence and path geometry.
///
/// Stop order defines the direction of travel.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteDetail {
    pub id: String,
    pub title: String,
    pub color: Option<String>,
    pub text_color: Option<String>,
    pub bounds: Option<LatLngBounds>,
    pub stops: Vec<Stop>,
    pub paths: Vec<Vec<LatLng>>,
}

impl RouteDetail {
    /// Area the route covers: the advertised bounds, else the box around its paths.
    pub fn extent(&self) -> Option<LatLngBounds> {
        self.bounds.or_else(|| {
            let points: Vec<LatLng> = self.paths.iter().flatten().copied().collect();
            LatLngBounds::from_points(&points)
        })
    }
}
