//! Geofencing primitives.

use serde::{Deserialize, Serialize};

/// A WGS84 coordinate pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Circular geofence around a caregiver-chosen center.
///
/// At most one zone is persisted per install; the radius is validated
/// against [`crate::zone::ZoneLimits`] before it is saved.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SafeZone {
    pub center: GeoPoint,
    #[serde(rename = "radius")]
    pub radius_m: f64,
}

impl SafeZone {
    pub fn new(center: GeoPoint, radius_m: f64) -> Self {
        Self { center, radius_m }
    }
}
