use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
pub struct RestBusAgency {
    pub id: String,
    pub title: String,
    pub region: Option<String>,
}

pub type GetAgenciesResponse = Vec<RestBusAgency>;
