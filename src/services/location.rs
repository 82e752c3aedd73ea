use async_trait::async_trait;

use crate::models::{Coordinates, MapRegion};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Granted,
    Denied,
}

/// Device geolocation.
#[async_trait]
pub trait LocationProvider: Send + Sync {
    async fn request_permission(&self) -> anyhow::Result<Permission>;

    async fn current_position(&self) -> anyhow::Result<Coordinates>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum MapView {
    Locating,
    Ready(MapRegion),
}

impl MapView {
    /// Asks for permission and centers the map on the device. Stays `Locating` otherwise.
    pub async fn load(provider: &dyn LocationProvider) -> Self {
        match provider.request_permission().await {
            Ok(Permission::Granted) => {}
            Ok(Permission::Denied) => {
                tracing::warn!("permission to access location was denied");
                return MapView::Locating;
            }
            Err(e) => {
                tracing::error!(error = %e, "location permission request failed");
                return MapView::Locating;
            }
        }

        match provider.current_position().await {
            Ok(origin) => MapView::Ready(MapRegion::centered_on(origin)),
            Err(e) => {
                tracing::error!(error = %e, "failed to read current position");
                MapView::Locating
            }
        }
    }
}
