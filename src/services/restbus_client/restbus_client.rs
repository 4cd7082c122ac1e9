use chrono::{Duration, Utc};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::error;
use urlencoding::encode;

use super::types::{
    restbus_agency_response::GetAgenciesResponse, restbus_client_error::RestBusClientError,
    restbus_route_detail_response::GetRouteDetailResponse,
    restbus_route_response::GetRoutesResponse, restbus_vehicle_response::GetVehiclesResponse,
};
use crate::types::transit::{Agency, LatLng, LatLngBounds, Route, RouteDetail, Stop, Vehicle};

pub const DEFAULT_RESTBUS_HOST: &str = "http://restbus.info";

/// Client for Restbus, a RESTful JSON API over the NextBus XML feed.
///
/// More info at http://restbus.info/
#[derive(Clone)]
pub struct RestBusClient {
    host: String,
    client: reqwest::Client,
}

impl RestBusClient {
    pub fn new(host: String) -> Self {
        RestBusClient {
            host: host.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub async fn get_agencies(&self) -> Result<Vec<Agency>, RestBusClientError> {
        let body = self.fetch::<GetAgenciesResponse>("/api/agencies").await?;

        Ok(body
            .into_iter()
            .map(|a| Agency {
                id: a.id,
                title: a.title,
                region: a.region,
            })
            .collect())
    }

    pub async fn get_routes(&self, agency_id: &str) -> Result<Vec<Route>, RestBusClientError> {
        let path = format!("/api/agencies/{}/routes", encode(agency_id));
        let body = self.fetch::<GetRoutesResponse>(&path).await?;

        Ok(body
            .into_iter()
            .map(|r| Route {
                id: r.id,
                title: r.title,
            })
            .collect())
    }

    pub async fn get_vehicles(
        &self,
        agency_id: &str,
        route_id: &str,
    ) -> Result<Vec<Vehicle>, RestBusClientError> {
        let path = format!(
            "/api/agencies/{}/routes/{}/vehicles",
            encode(agency_id),
            encode(route_id)
        );
        let body = self.fetch::<GetVehiclesResponse>(&path).await?;
        let fetched_at = Utc::now();

        Ok(body
            .into_iter()
            .map(|v| Vehicle {
                id: v.id,
                route_id: v.routeId,
                direction_id: v.directionId,
                predictable: v.predictable.unwrap_or(false),
                position: LatLng {
                    lat: v.lat,
                    lon: v.lon,
                },
                heading: v.heading,
                kph: v.kph,
                secs_since_report: v.secsSinceReport,
                reported_at: v
                    .secsSinceReport
                    .and_then(Duration::try_seconds)
                    .and_then(|staleness| fetched_at.checked_sub_signed(staleness)),
            })
            .collect())
    }

    pub async fn get_route_detail(
        &self,
        agency_id: &str,
        route_id: &str,
    ) -> Result<RouteDetail, RestBusClientError> {
        let path = format!(
            "/api/agencies/{}/routes/{}",
            encode(agency_id),
            encode(route_id)
        );
        let body = self.fetch::<GetRouteDetailResponse>(&path).await?;

        Ok(RouteDetail {
            id: body.id,
            title: body.title,
            color: body.color,
            text_color: body.textColor,
            bounds: body.bounds.map(|b| LatLngBounds {
                south_west: LatLng {
                    lat: b.sw.lat,
                    lon: b.sw.lon,
                },
                north_east: LatLng {
                    lat: b.ne.lat,
                    lon: b.ne.lon,
                },
            }),
            stops: body
                .stops
                .into_iter()
                .map(|s| Stop {
                    id: s.id,
                    code: s.code,
                    title: s.title,
                    position: LatLng {
                        lat: s.lat,
                        lon: s.lon,
                    },
                })
                .collect(),
            paths: body
                .paths
                .into_iter()
                .map(|p| {
                    p.points
                        .into_iter()
                        .map(|pt| LatLng {
                            lat: pt.lat,
                            lon: pt.lon,
                        })
                        .collect()
                })
                .collect(),
        })
    }

    async fn fetch<T: DeserializeOwned>(&self, path: &str) -> Result<T, RestBusClientError> {
        let url = format!("{}{}", self.host, path);

        let resp = self.client.get(&url).send().await.map_err(|e| {
            error!("Failed to send request to {}: {}", url, e);
            RestBusClientError::Request(e)
        })?;

        match resp.status() {
            StatusCode::NOT_FOUND => return Err(RestBusClientError::ResourceNotFound),
            status if !status.is_success() => {
                error!("Unexpected status {} from {}", status, url);
                return Err(RestBusClientError::UnexpectedStatus(status.as_u16()));
            }
            _ => {}
        }

        let body = resp.bytes().await?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Err(RestBusClientError::EmptyBody);
        }

        // Restbus answers `null` for some unknown resources.
        serde_json::from_slice::<Option<T>>(&body)
            .map_err(|e| {
                error!("Failed to decode response from {}: {}", url, e);
                RestBusClientError::Decode(e)
            })?
            .ok_or(RestBusClientError::EmptyBody)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use tracing_test::traced_test;

    use super::*;
    use crate::services::restbus_client::types::{
        restbus_agency_response::RestBusAgency,
        restbus_route_detail_response::{RestBusBounds, RestBusPath, RestBusPoint, RestBusStop},
        restbus_vehicle_response::RestBusVehicle,
    };

    #[tokio::test]
    async fn get_agencies() {
        let mut mock_server = mockito::Server::new_async().await;
        let client = RestBusClient::new(mock_server.url());

        let mock_response = vec![
            RestBusAgency {
                id: "sf-muni".to_string(),
                title: "San Francisco Muni".to_string(),
                region: Some("California-Northern".to_string()),
            },
            RestBusAgency {
                id: "actransit".to_string(),
                title: "AC Transit".to_string(),
                region: None,
            },
        ];

        let mock = mock_server
            .mock("GET", "/api/agencies")
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(&mock_response).unwrap())
            .create_async()
            .await;

        let agencies = client.get_agencies().await.unwrap();

        mock.assert_async().await;
        assert_eq!(agencies.len(), 2);
        assert_eq!(agencies[0].id, "sf-muni");
        assert_eq!(agencies[0].region.as_deref(), Some("California-Northern"));
        assert_eq!(agencies[1].title, "AC Transit");
    }

    #[tokio::test]
    async fn get_routes_encodes_agency() {
        let mut mock_server = mockito::Server::new_async().await;
        let client = RestBusClient::new(mock_server.url());

        let mock = mock_server
            .mock("GET", "/api/agencies/ac%20transit/routes")
            .with_header("content-type", "application/json")
            .with_body(
                json!([
                    { "id": "51B", "title": "51B", "_links": {} },
                    { "id": "NL", "title": "NL - Oakland" }
                ])
                .to_string(),
            )
            .create_async()
            .await;

        let routes = client.get_routes("ac transit").await.unwrap();

        mock.assert_async().await;
        assert_eq!(
            routes,
            vec![
                Route {
                    id: "51B".to_string(),
                    title: "51B".to_string()
                },
                Route {
                    id: "NL".to_string(),
                    title: "NL - Oakland".to_string()
                },
            ]
        );
    }

    #[tokio::test]
    async fn get_vehicles_derives_report_time() {
        let mut mock_server = mockito::Server::new_async().await;
        let client = RestBusClient::new(mock_server.url());

        let mock_response = vec![RestBusVehicle {
            id: "1404".to_string(),
            routeId: "N".to_string(),
            directionId: Some("N____O_F00".to_string()),
            predictable: Some(true),
            secsSinceReport: Some(30),
            kph: Some(24),
            heading: Some(270),
            lat: 37.7699,
            lon: -122.4469,
        }];

        let _mock = mock_server
            .mock("GET", "/api/agencies/sf-muni/routes/N/vehicles")
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(&mock_response).unwrap())
            .create_async()
            .await;

        let before = Utc::now();
        let vehicles = client.get_vehicles("sf-muni", "N").await.unwrap();
        let after = Utc::now();

        assert_eq!(vehicles.len(), 1);
        let vehicle = &vehicles[0];
        assert_eq!(vehicle.route_id, "N");
        assert!(vehicle.predictable);
        assert_eq!(vehicle.position.lon, -122.4469);

        let reported_at = vehicle.reported_at.unwrap();
        assert!(reported_at >= before - Duration::seconds(30));
        assert!(reported_at <= after - Duration::seconds(30));
    }

    #[tokio::test]
    async fn huge_staleness_leaves_report_time_unknown() {
        let mut mock_server = mockito::Server::new_async().await;
        let client = RestBusClient::new(mock_server.url());

        let _mock = mock_server
            .mock("GET", "/api/agencies/sf-muni/routes/N/vehicles")
            .with_header("content-type", "application/json")
            .with_body(
                json!([{
                    "id": "1404",
                    "routeId": "N",
                    "secsSinceReport": 9_000_000_000_000_000_i64,
                    "lat": 37.7699,
                    "lon": -122.4469
                }])
                .to_string(),
            )
            .create_async()
            .await;

        let vehicles = client.get_vehicles("sf-muni", "N").await.unwrap();

        assert_eq!(vehicles.len(), 1);
        assert_eq!(vehicles[0].secs_since_report, Some(9_000_000_000_000_000));
        assert_eq!(vehicles[0].reported_at, None);
    }

    #[tokio::test]
    async fn get_route_detail() {
        let mut mock_server = mockito::Server::new_async().await;
        let client = RestBusClient::new(mock_server.url());

        let mock_response = GetRouteDetailResponse {
            id: "N".to_string(),
            title: "N-Judah".to_string(),
            color: Some("003399".to_string()),
            textColor: Some("ffffff".to_string()),
            bounds: Some(RestBusBounds {
                sw: RestBusPoint {
                    lat: 37.76,
                    lon: -122.51,
                },
                ne: RestBusPoint {
                    lat: 37.79,
                    lon: -122.38,
                },
            }),
            stops: vec![
                RestBusStop {
                    id: "5240".to_string(),
                    code: Some("15240".to_string()),
                    title: "King St & 4th St".to_string(),
                    lat: 37.7765,
                    lon: -122.3942,
                },
                RestBusStop {
                    id: "7318".to_string(),
                    code: None,
                    title: "Judah St & La Playa St".to_string(),
                    lat: 37.7604,
                    lon: -122.5090,
                },
            ],
            paths: vec![RestBusPath {
                points: vec![
                    RestBusPoint {
                        lat: 37.7765,
                        lon: -122.3942,
                    },
                    RestBusPoint {
                        lat: 37.7604,
                        lon: -122.5090,
                    },
                ],
            }],
        };

        let _mock = mock_server
            .mock("GET", "/api/agencies/sf-muni/routes/N")
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(&mock_response).unwrap())
            .create_async()
            .await;

        let detail = client.get_route_detail("sf-muni", "N").await.unwrap();

        assert_eq!(detail.title, "N-Judah");
        assert_eq!(detail.text_color.as_deref(), Some("ffffff"));
        assert_eq!(detail.stops.len(), 2);
        assert_eq!(detail.stops[1].code, None);
        assert_eq!(detail.paths[0].len(), 2);
        assert_eq!(detail.bounds.unwrap().north_east.lon, -122.38);
    }

    #[tokio::test]
    #[traced_test]
    async fn not_found() {
        let mut mock_server = mockito::Server::new_async().await;
        let client = RestBusClient::new(mock_server.url());

        let _mock = mock_server
            .mock("GET", "/api/agencies/nope/routes")
            .with_status(404)
            .create_async()
            .await;

        let err = client.get_routes("nope").await.unwrap_err();
        assert!(matches!(err, RestBusClientError::ResourceNotFound));
    }

    #[tokio::test]
    #[traced_test]
    async fn server_error() {
        let mut mock_server = mockito::Server::new_async().await;
        let client = RestBusClient::new(mock_server.url());

        let _mock = mock_server
            .mock("GET", "/api/agencies")
            .with_status(503)
            .create_async()
            .await;

        let err = client.get_agencies().await.unwrap_err();
        assert!(matches!(err, RestBusClientError::UnexpectedStatus(503)));
        assert!(logs_contain("Unexpected status"));
    }

    #[tokio::test]
    async fn empty_and_null_bodies() {
        let mut mock_server = mockito::Server::new_async().await;
        let client = RestBusClient::new(mock_server.url());

        let _mock = mock_server
            .mock("GET", "/api/agencies")
            .with_body("")
            .create_async()
            .await;
        let _mock = mock_server
            .mock("GET", "/api/agencies/sf-muni/routes/X")
            .with_header("content-type", "application/json")
            .with_body("null")
            .create_async()
            .await;

        assert!(matches!(
            client.get_agencies().await.unwrap_err(),
            RestBusClientError::EmptyBody
        ));
        assert!(matches!(
            client.get_route_detail("sf-muni", "X").await.unwrap_err(),
            RestBusClientError::EmptyBody
        ));
    }

    #[tokio::test]
    async fn unreachable_host() {
        let client = RestBusClient::new("http://127.0.0.1:1".to_string());

        let err = client.get_agencies().await.unwrap_err();
        assert!(matches!(err, RestBusClientError::Request(_)));
    }
}
