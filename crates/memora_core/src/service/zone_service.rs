//! Safe-zone editor use-cases.
//!
//! Thin confirmation-gated wrapper over [`SafeZoneMonitor`]: choosing a
//! center in the editor touches nothing durable; only saving does.

use crate::model::geo::{GeoPoint, SafeZone};
use crate::service::confirm::Confirmation;
use crate::store::KvStore;
use crate::zone::{SafeZoneMonitor, ZoneResult};
use std::sync::Arc;

pub struct ZoneService<S: KvStore, C: Confirmation> {
    monitor: Arc<SafeZoneMonitor<S>>,
    confirm: C,
}

impl<S: KvStore, C: Confirmation> ZoneService<S, C> {
    pub fn new(monitor: Arc<SafeZoneMonitor<S>>, confirm: C) -> Self {
        Self { monitor, confirm }
    }

    /// Validates and persists the zone chosen in the editor.
    pub fn save(&self, center: GeoPoint, radius_m: f64) -> ZoneResult<SafeZone> {
        self.monitor.set_zone(center, radius_m)
    }

    pub fn zone(&self) -> Option<SafeZone> {
        self.monitor.zone()
    }

    /// Deletes the zone (and the cached position) after confirmation.
    ///
    /// Returns `false` when the user declines; nothing changed in that
    /// case.
    pub fn delete(&self) -> ZoneResult<bool> {
        if !self
            .confirm
            .confirm("Delete safe zone", "Do you want to delete the safe zone?")
        {
            return Ok(false);
        }
        self.monitor.clear_zone()?;
        Ok(true)
    }

    /// Toggles safe outing, which suppresses exit alerting while active.
    pub fn set_safe_outing(&self, enabled: bool) -> ZoneResult<()> {
        self.monitor.set_safe_outing(enabled)
    }

    pub fn safe_outing(&self) -> bool {
        self.monitor.safe_outing()
    }
}
