//! Zone persistence and position classification.
//!
//! # Responsibility
//! - Own the three safe-zone store keys: zone definition, last position,
//!   safe-outing flag.
//! - Classify positions as inside or outside the active zone.
//!
//! # Invariants
//! - Radius is validated against [`ZoneLimits`] before a zone is saved.
//! - Reads fail closed to "no zone" / "no position"; failures are logged.
//! - Distance exactly equal to the radius classifies as inside.

use crate::model::geo::{GeoPoint, SafeZone};
use crate::model::record::ValidationError;
use crate::store::{KvStore, StoreError};
use log::{info, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

pub const SAFE_ZONE_KEY: &str = "safeZone";
pub const PATIENT_POSITION_KEY: &str = "patientPosition";
pub const SAFE_OUTING_KEY: &str = "safeOuting";

/// Meters per degree of latitude, also applied to longitude.
///
/// Equirectangular shortcut: accurate to a few percent at short range near
/// the equator, increasingly wrong at high latitudes and large radii.
pub const METERS_PER_DEGREE: f64 = 111_000.0;

pub type ZoneResult<T> = Result<T, ZoneError>;

#[derive(Debug)]
pub enum ZoneError {
    Validation(ValidationError),
    Store(StoreError),
    Encode(serde_json::Error),
}

impl Display for ZoneError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode zone state: {err}"),
        }
    }
}

impl Error for ZoneError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Store(err) => Some(err),
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<ValidationError> for ZoneError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for ZoneError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<serde_json::Error> for ZoneError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}

/// Classification of one position sample against a zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneStatus {
    Inside,
    Outside,
}

/// Bounds the zone editor may choose a radius from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneLimits {
    pub min_radius_m: f64,
    pub max_radius_m: f64,
    /// Editor slider step; informational, not enforced on saved values.
    pub step_m: f64,
}

impl Default for ZoneLimits {
    fn default() -> Self {
        Self {
            min_radius_m: 10.0,
            max_radius_m: 100.0,
            step_m: 10.0,
        }
    }
}

/// Planar distance in meters between two coordinates.
pub fn distance_meters(a: GeoPoint, b: GeoPoint) -> f64 {
    ((a.latitude - b.latitude) * METERS_PER_DEGREE)
        .hypot((a.longitude - b.longitude) * METERS_PER_DEGREE)
}

/// Classifies `position` against `zone`. The boundary counts as inside.
pub fn classify(position: GeoPoint, zone: &SafeZone) -> ZoneStatus {
    if distance_meters(position, zone.center) <= zone.radius_m {
        ZoneStatus::Inside
    } else {
        ZoneStatus::Outside
    }
}

/// Durable safe-zone state over a key-value store.
pub struct SafeZoneMonitor<S: KvStore> {
    store: Arc<S>,
    limits: ZoneLimits,
}

impl<S: KvStore> SafeZoneMonitor<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self::with_limits(store, ZoneLimits::default())
    }

    pub fn with_limits(store: Arc<S>, limits: ZoneLimits) -> Self {
        Self { store, limits }
    }

    pub fn limits(&self) -> ZoneLimits {
        self.limits
    }

    /// Validates and persists the zone, returning the saved definition.
    pub fn set_zone(&self, center: GeoPoint, radius_m: f64) -> ZoneResult<SafeZone> {
        if !radius_m.is_finite()
            || radius_m < self.limits.min_radius_m
            || radius_m > self.limits.max_radius_m
        {
            return Err(ValidationError::RadiusOutOfRange {
                radius_m,
                min_m: self.limits.min_radius_m,
                max_m: self.limits.max_radius_m,
            }
            .into());
        }

        let zone = SafeZone::new(center, radius_m);
        self.write(SAFE_ZONE_KEY, &zone)?;
        info!(
            "event=zone_saved module=zone status=ok radius_m={}",
            radius_m
        );
        Ok(zone)
    }

    /// Returns the active zone, or `None` when unset or unreadable.
    pub fn zone(&self) -> Option<SafeZone> {
        self.read(SAFE_ZONE_KEY)
    }

    /// Removes the zone and the cached last position. Idempotent.
    pub fn clear_zone(&self) -> ZoneResult<()> {
        self.store.remove(SAFE_ZONE_KEY)?;
        self.store.remove(PATIENT_POSITION_KEY)?;
        info!("event=zone_cleared module=zone status=ok");
        Ok(())
    }

    /// Overwrites the ephemeral last-known patient position.
    pub fn record_position(&self, position: GeoPoint) -> ZoneResult<()> {
        self.write(PATIENT_POSITION_KEY, &position)
    }

    pub fn last_position(&self) -> Option<GeoPoint> {
        self.read(PATIENT_POSITION_KEY)
    }

    /// Persists the safe-outing flag that suppresses exit alerting.
    pub fn set_safe_outing(&self, enabled: bool) -> ZoneResult<()> {
        self.write(SAFE_OUTING_KEY, &enabled)?;
        info!(
            "event=safe_outing module=zone status=ok enabled={}",
            enabled
        );
        Ok(())
    }

    /// Whether safe outing is active. Unset or unreadable reads as off.
    pub fn safe_outing(&self) -> bool {
        self.read(SAFE_OUTING_KEY).unwrap_or(false)
    }

    /// Classifies `position` against the active zone, if one exists.
    pub fn status(&self, position: GeoPoint) -> Option<ZoneStatus> {
        self.zone().map(|zone| classify(position, &zone))
    }

    fn write<T: Serialize>(&self, key: &str, value: &T) -> ZoneResult<()> {
        let raw = serde_json::to_string(value)?;
        self.store.set(key, &raw)?;
        Ok(())
    }

    fn read<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        match self.store.get(key) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(value) => Some(value),
                Err(err) => {
                    warn!(
                        "event=zone_load module=zone status=corrupt key={} error={}",
                        key, err
                    );
                    None
                }
            },
            Ok(None) => None,
            Err(err) => {
                warn!(
                    "event=zone_load module=zone status=read_error key={} error={}",
                    key, err
                );
                None
            }
        }
    }
}
