//! Periodic position sampling.
//!
//! # Responsibility
//! - Pull a position from the provider on a fixed interval.
//! - Persist each sample, classify it and feed the transition tracker.
//! - Guarantee prompt cancellation when the owning view tears down.
//!
//! # Invariants
//! - Exactly one background thread per handle.
//! - `stop()` (and drop) signals the thread and joins it; no recurring
//!   task outlives the handle.

use crate::model::geo::GeoPoint;
use crate::store::KvStore;
use crate::zone::monitor::{SafeZoneMonitor, ZoneStatus};
use crate::zone::provider::PositionProvider;
use crate::zone::tracker::{ZoneTracker, ZoneTransition};
use log::{error, info};
use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// The interval the reference app samples at.
pub const DEFAULT_SAMPLE_INTERVAL: Duration = Duration::from_secs(5);

/// What one sampler tick produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleOutcome {
    pub position: GeoPoint,
    /// `None` when no zone is currently defined.
    pub status: Option<ZoneStatus>,
    pub transition: Option<ZoneTransition>,
}

struct StopSignal {
    stopped: Mutex<bool>,
    condvar: Condvar,
}

/// Owner handle for the sampling thread.
///
/// Dropping the handle cancels and joins the thread.
pub struct SamplerHandle {
    signal: Arc<StopSignal>,
    join: Option<JoinHandle<()>>,
}

impl SamplerHandle {
    /// Signals the thread to stop and waits for it to finish. Idempotent.
    pub fn stop(&mut self) {
        {
            let mut stopped = self
                .signal
                .stopped
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            *stopped = true;
        }
        self.signal.condvar.notify_all();
        if let Some(join) = self.join.take() {
            let _ = join.join();
            info!("event=sampler_stop module=zone status=ok");
        }
    }
}

impl Drop for SamplerHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Starts sampling: one immediate tick, then one per `interval`.
///
/// Each tick persists the position, classifies it against the current zone
/// and invokes `observer` with the outcome. The tick runs even while no
/// zone is defined so the last-known position stays fresh.
pub fn start_sampler<S, P, F>(
    monitor: Arc<SafeZoneMonitor<S>>,
    mut provider: P,
    interval: Duration,
    mut observer: F,
) -> SamplerHandle
where
    S: KvStore + Send + Sync + 'static,
    P: PositionProvider + Send + 'static,
    F: FnMut(SampleOutcome) + Send + 'static,
{
    let signal = Arc::new(StopSignal {
        stopped: Mutex::new(false),
        condvar: Condvar::new(),
    });
    let thread_signal = Arc::clone(&signal);

    info!(
        "event=sampler_start module=zone status=ok interval_ms={}",
        interval.as_millis()
    );

    let join = thread::spawn(move || {
        let mut tracker = ZoneTracker::new();
        loop {
            let position = provider.next_position();
            if let Err(err) = monitor.record_position(position) {
                error!(
                    "event=sampler_tick module=zone status=write_error error={}",
                    err
                );
            }
            let status = monitor.status(position);
            let transition = match status {
                Some(status) => tracker.observe(status, monitor.safe_outing()),
                None => None,
            };
            observer(SampleOutcome {
                position,
                status,
                transition,
            });

            let stopped = thread_signal
                .stopped
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            let (stopped, _timed_out) = thread_signal
                .condvar
                .wait_timeout_while(stopped, interval, |stopped| !*stopped)
                .unwrap_or_else(PoisonError::into_inner);
            if *stopped {
                break;
            }
        }
    });

    SamplerHandle {
        signal,
        join: Some(join),
    }
}
