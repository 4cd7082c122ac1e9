#![allow(non_snake_case)]
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
pub struct RestBusPoint {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Deserialize, Serialize)]
pub struct RestBusBounds {
    pub sw: RestBusPoint,
    pub ne: RestBusPoint,
}

#[derive(Deserialize, Serialize)]
pub struct RestBusStop {
    pub id: String,
    pub code: Option<String>,
    pub title: String,
    pub lat: f64,
    pub lon: f64,
}

#[derive(Deserialize, Serialize)]
pub struct RestBusPath {
    pub points: Vec<RestBusPoint>,
}

#[derive(Deserialize, Serialize)]
pub struct GetRouteDetailResponse {
    pub id: String,
    pub title: String,
    pub color: Option<String>,
    pub textColor: Option<String>,
    pub bounds: Option<RestBusBounds>,
    #[serde(default)]
    pub stops: Vec<RestBusStop>,
    #[serde(default)]
    pub paths: Vec<RestBusPath>,
}
