//! Exit/return transition tracking.

use crate::zone::monitor::ZoneStatus;

/// Transition produced when the patient crosses the zone boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneTransition {
    /// The patient left the safe zone.
    Exited,
    /// The patient came back inside after an exit.
    Returned,
}

/// Edge detector over successive classifications.
///
/// Emits exactly one `Exited` per excursion and one `Returned` when the
/// patient is back inside. While safe outing is active, observations are
/// ignored entirely and the pending alert state is frozen.
#[derive(Debug, Default)]
pub struct ZoneTracker {
    alert_active: bool,
}

impl ZoneTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an exit alert is currently outstanding.
    pub fn alert_active(&self) -> bool {
        self.alert_active
    }

    /// Feeds one classification; returns a transition on state change.
    pub fn observe(&mut self, status: ZoneStatus, safe_outing: bool) -> Option<ZoneTransition> {
        if safe_outing {
            return None;
        }
        match (status, self.alert_active) {
            (ZoneStatus::Outside, false) => {
                self.alert_active = true;
                Some(ZoneTransition::Exited)
            }
            (ZoneStatus::Inside, true) => {
                self.alert_active = false;
                Some(ZoneTransition::Returned)
            }
            _ => None,
        }
    }
}
