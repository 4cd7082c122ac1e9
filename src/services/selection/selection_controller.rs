use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use crate::{
    services::{
        map_renderer::{
            map_renderer::{render_route, render_vehicles, RenderOutcome},
            screen::Screen,
        },
        restbus_client::restbus_client::RestBusClient,
    },
    types::{
        notification::Notification,
        transit::{Agency, Route},
    },
};

const COULD_NOT_LOAD_AGENCIES: &str = "Could not load the list of agencies";
const SELECT_AGENCY: &str = "Select an agency to see its routes";
const NO_ROUTES: &str = "This agency has no routes";
const COULD_NOT_LOAD_ROUTES: &str = "Could not load routes for this agency";
const NO_VEHICLES: &str = "No vehicles are currently reporting on this route";
const COULD_NOT_LOAD_VEHICLES: &str = "Could not load vehicle positions";
const COULD_NOT_DRAW_ROUTE: &str = "Could not draw the route";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum SelectionPhase {
    NoAgencySelected,
    AgencySelected { agency_id: String },
    RouteSelected { agency_id: String, route_id: String },
}

#[derive(Debug, Error)]
pub enum SelectionError {
    #[error("unknown agency {0}")]
    UnknownAgency(String),
    #[error("no agency selected")]
    NoAgencySelected,
    #[error("unknown route {0}")]
    UnknownRoute(String),
}

pub enum AgencySelection {
    /// The selector's first callback after being populated. Nothing is fetched.
    Acknowledged,
    LoadingRoutes(JoinHandle<()>),
}

/// The two requests issued for a route. They run independently and finish in any order.
pub struct RouteFetches {
    pub agency_id: String,
    pub vehicles: JoinHandle<()>,
    pub route: JoinHandle<()>,
}

struct SelectionState {
    phase: SelectionPhase,
    agencies: Vec<Agency>,
    routes: Vec<Route>,
    // Populating a selector fires one callback before the user touches it.
    awaiting_initial_agency_callback: bool,
}

/// Drives the agency → route cascade and kicks off the fetches behind each selection.
///
/// In-flight requests are never cancelled, so a slow response for an earlier selection can
/// still land after a newer one has rendered.
#[derive(Clone)]
pub struct SelectionController {
    client: RestBusClient,
    screen: Screen,
    state: Arc<Mutex<SelectionState>>,
}

impl SelectionController {
    pub fn new(client: RestBusClient, screen: Screen) -> Self {
        SelectionController {
            client,
            screen,
            state: Arc::new(Mutex::new(SelectionState {
                phase: SelectionPhase::NoAgencySelected,
                agencies: Vec::new(),
                routes: Vec::new(),
                awaiting_initial_agency_callback: false,
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, SelectionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn phase(&self) -> SelectionPhase {
        self.lock().phase.clone()
    }

    pub fn load_agencies(&self) -> JoinHandle<()> {
        let controller = self.clone();

        tokio::spawn(async move {
            match controller.client.get_agencies().await {
                Ok(agencies) if !agencies.is_empty() => {
                    info!("Loaded {} agencies", agencies.len());
                    {
                        let mut state = controller.lock();
                        state.agencies = agencies.clone();
                        state.awaiting_initial_agency_callback = true;
                    }
                    controller.screen.set_agency_options(agencies);
                }
                Ok(_) => {
                    warn!("Agency list was empty");
                    controller
                        .screen
                        .notify(Notification::error(COULD_NOT_LOAD_AGENCIES));
                }
                Err(e) => {
                    error!("Failed to fetch agencies: {}", e);
                    controller
                        .screen
                        .notify(Notification::error(COULD_NOT_LOAD_AGENCIES));
                }
            }
        })
    }

    pub fn select_agency(&self, agency_id: &str) -> Result<AgencySelection, SelectionError> {
        {
            let mut state = self.lock();

            if !state.agencies.iter().any(|a| a.id == agency_id) {
                return Err(SelectionError::UnknownAgency(agency_id.to_string()));
            }

            if state.awaiting_initial_agency_callback {
                state.awaiting_initial_agency_callback = false;
                drop(state);
                self.screen.notify(Notification::info(SELECT_AGENCY));
                return Ok(AgencySelection::Acknowledged);
            }

            state.phase = SelectionPhase::AgencySelected {
                agency_id: agency_id.to_string(),
            };
            state.routes.clear();
        }
        self.screen.set_route_options(Vec::new());

        info!("Agency {} selected", agency_id);
        let controller = self.clone();
        let agency_id = agency_id.to_string();

        Ok(AgencySelection::LoadingRoutes(tokio::spawn(async move {
            match controller.client.get_routes(&agency_id).await {
                Ok(routes) if !routes.is_empty() => {
                    info!("Loaded {} routes for {}", routes.len(), agency_id);
                    controller.lock().routes = routes.clone();
                    controller.screen.set_route_options(routes);
                }
                Ok(_) => controller.screen.notify(Notification::info(NO_ROUTES)),
                Err(e) => {
                    error!("Failed to fetch routes for {}: {}", agency_id, e);
                    controller
                        .screen
                        .notify(Notification::error(COULD_NOT_LOAD_ROUTES));
                }
            }
        })))
    }

    pub fn select_route(&self, route_id: &str) -> Result<RouteFetches, SelectionError> {
        let agency_id = {
            let mut state = self.lock();

            let agency_id = match &state.phase {
                SelectionPhase::NoAgencySelected => return Err(SelectionError::NoAgencySelected),
                SelectionPhase::AgencySelected { agency_id }
                | SelectionPhase::RouteSelected { agency_id, .. } => agency_id.clone(),
            };

            if !state.routes.iter().any(|r| r.id == route_id) {
                return Err(SelectionError::UnknownRoute(route_id.to_string()));
            }

            state.phase = SelectionPhase::RouteSelected {
                agency_id: agency_id.clone(),
                route_id: route_id.to_string(),
            };
            agency_id
        };

        info!("Route {} of {} selected", route_id, agency_id);

        Ok(RouteFetches {
            vehicles: self.spawn_vehicle_fetch(agency_id.clone(), route_id.to_string()),
            route: self.spawn_route_fetch(agency_id.clone(), route_id.to_string()),
            agency_id,
        })
    }

    fn spawn_vehicle_fetch(&self, agency_id: String, route_id: String) -> JoinHandle<()> {
        let client = self.client.clone();
        let screen = self.screen.clone();

        tokio::spawn(async move {
            match client.get_vehicles(&agency_id, &route_id).await {
                Ok(vehicles) => {
                    if render_vehicles(&screen, &vehicles) == RenderOutcome::Empty {
                        screen.notify(Notification::info(NO_VEHICLES));
                    }
                }
                Err(e) => {
                    error!("Failed to fetch vehicles for {}/{}: {}", agency_id, route_id, e);
                    screen.notify(Notification::error(COULD_NOT_LOAD_VEHICLES));
                }
            }
        })
    }

    fn spawn_route_fetch(&self, agency_id: String, route_id: String) -> JoinHandle<()> {
        let client = self.client.clone();
        let screen = self.screen.clone();

        tokio::spawn(async move {
            match client.get_route_detail(&agency_id, &route_id).await {
                Ok(detail) => {
                    if render_route(&screen, &detail) == RenderOutcome::Empty {
                        screen.notify(Notification::info(COULD_NOT_DRAW_ROUTE));
                    }
                }
                Err(e) => {
                    error!("Failed to fetch stops for {}/{}: {}", agency_id, route_id, e);
                    screen.notify(Notification::error(COULD_NOT_DRAW_ROUTE));
                }
            }
        })
    }
}
