use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
pub struct RestBusAgencyRoute {
    pub id: String,
    pub title: String,
}

pub type GetRoutesResponse = Vec<RestBusAgencyRoute>;
