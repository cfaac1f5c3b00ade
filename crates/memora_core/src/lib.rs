//! Core domain logic for Memora, a caregiver companion app.
//! This crate is the single source of truth for record persistence and
//! safe-zone geofencing; UI shells stay thin on top of it.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;
pub mod zone;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::entries::{card_author, Appointment, CareLogEntry, JournalNote, Memory, MemoryCard};
pub use model::geo::{GeoPoint, SafeZone};
pub use model::record::{non_empty, Record, ValidationError};
pub use repo::care_repos::CareRepositories;
pub use repo::collection::{Collection, CollectionError, CollectionResult, KeyLocks};
pub use service::agenda_service::AgendaService;
pub use service::card_service::CardService;
pub use service::care_log_service::CareLogService;
pub use service::confirm::{AlwaysConfirm, Confirmation};
pub use service::journal_service::JournalService;
pub use service::memory_service::MemoryService;
pub use service::zone_service::ZoneService;
pub use service::{ServiceError, ServiceResult};
pub use store::{open_store, open_store_in_memory, KvStore, SqliteKvStore, StoreError, StoreResult};
pub use zone::{
    classify, distance_meters, start_sampler, PositionProvider, SafeZoneMonitor, SampleOutcome,
    SamplerHandle, ScriptedPositions, SyntheticWander, ZoneError, ZoneLimits, ZoneResult,
    ZoneStatus, ZoneTracker, ZoneTransition, DEFAULT_SAMPLE_INTERVAL,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
