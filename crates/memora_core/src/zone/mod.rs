//! Safe-zone geofencing.
//!
//! # Responsibility
//! - Persist the zone definition, the last patient position and the
//!   safe-outing flag.
//! - Classify position samples against the zone and track exit/return
//!   transitions.
//! - Sample positions periodically from a pluggable provider.
//!
//! # Invariants
//! - At most one zone is persisted per install.
//! - The distance model is a short-range equirectangular approximation;
//!   it is not general geodesy.

mod monitor;
mod provider;
mod sampler;
mod tracker;

pub use monitor::{
    classify, distance_meters, SafeZoneMonitor, ZoneError, ZoneLimits, ZoneResult, ZoneStatus,
    METERS_PER_DEGREE, PATIENT_POSITION_KEY, SAFE_OUTING_KEY, SAFE_ZONE_KEY,
};
pub use provider::{PositionProvider, ScriptedPositions, SyntheticWander};
pub use sampler::{start_sampler, SampleOutcome, SamplerHandle, DEFAULT_SAMPLE_INTERVAL};
pub use tracker::{ZoneTracker, ZoneTransition};
