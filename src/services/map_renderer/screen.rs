use std::{
    collections::{HashMap, VecDeque},
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use geojson::GeoJson;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use super::map_style::{CameraUpdate, MapStyle, SourceId};
use crate::types::{
    notification::{Notification, NotificationLevel},
    transit::{Agency, Route},
};

pub const MAX_PENDING_NOTIFICATIONS: usize = 32;

/// Latest camera command. `revision` increases on every command, so a poller can tell a
/// fresh animation from the one it already played.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CameraState {
    pub revision: u64,
    pub update: CameraUpdate,
}

#[derive(Default)]
struct ScreenInner {
    sources: HashMap<SourceId, GeoJson>,
    camera: Option<CameraState>,
    camera_revision: u64,
    notifications: VecDeque<Notification>,
    agency_options: Vec<Agency>,
    route_options: Vec<Route>,
}

/// What the user sees: overlay sources, camera, selector options and pending messages.
#[derive(Clone, Default)]
pub struct Screen {
    inner: Arc<Mutex<ScreenInner>>,
}

impl Screen {
    fn lock(&self) -> MutexGuard<'_, ScreenInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn source(&self, source: SourceId) -> Option<GeoJson> {
        self.lock().sources.get(&source).cloned()
    }

    pub fn camera(&self) -> Option<CameraState> {
        self.lock().camera
    }

    pub fn set_agency_options(&self, agencies: Vec<Agency>) {
        self.lock().agency_options = agencies;
    }

    pub fn agency_options(&self) -> Vec<Agency> {
        self.lock().agency_options.clone()
    }

    pub fn set_route_options(&self, routes: Vec<Route>) {
        self.lock().route_options = routes;
    }

    pub fn route_options(&self) -> Vec<Route> {
        self.lock().route_options.clone()
    }

    pub fn notify(&self, notification: Notification) {
        match notification.level {
            NotificationLevel::Info => info!("Notify: {}", notification.message),
            NotificationLevel::Error => error!("Notify: {}", notification.message),
        }

        let mut inner = self.lock();
        if inner.notifications.len() == MAX_PENDING_NOTIFICATIONS {
            inner.notifications.pop_front();
        }
        inner.notifications.push_back(notification);
    }

    pub fn drain_notifications(&self) -> Vec<Notification> {
        self.lock().notifications.drain(..).collect()
    }
}

impl MapStyle for Screen {
    fn set_source(&self, source: SourceId, data: GeoJson) {
        self.lock().sources.insert(source, data);
    }

    fn animate_camera(&self, update: CameraUpdate) {
        let mut inner = self.lock();
        inner.camera_revision += 1;
        let revision = inner.camera_revision;
        inner.camera = Some(CameraState { revision, update });
    }
}
