#![allow(non_snake_case)]
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
pub struct RestBusVehicle {
    pub id: String,
    pub routeId: String,
    pub directionId: Option<String>,
    pub predictable: Option<bool>,
    pub secsSinceReport: Option<i64>,
    pub kph: Option<i32>,
    pub heading: Option<i32>,
    pub lat: f64,
    pub lon: f64,
}

pub type GetVehiclesResponse = Vec<RestBusVehicle>;
