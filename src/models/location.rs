use serde::{Deserialize, Serialize};

const REGION_SPAN_DEGREES: f64 = 0.05;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapMarker {
    pub coordinate: Coordinates,
    pub title: String,
}

/// Visible map area centered on the device with a single "You are here" marker.
#[derive(Debug, Clone, PartialEq)]
pub struct MapRegion {
    pub center: Coordinates,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
    pub marker: MapMarker,
}

impl MapRegion {
    pub fn centered_on(origin: Coordinates) -> Self {
        Self {
            center: origin,
            latitude_delta: REGION_SPAN_DEGREES,
            longitude_delta: REGION_SPAN_DEGREES,
            marker: MapMarker {
                coordinate: origin,
                title: "You are here".to_string(),
            },
        }
    }
}
