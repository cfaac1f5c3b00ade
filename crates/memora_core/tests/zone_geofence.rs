use memora_core::{
    classify, open_store_in_memory, start_sampler, GeoPoint, KvStore, PositionProvider, SafeZone,
    SafeZoneMonitor, ScriptedPositions, SyntheticWander, ZoneError, ZoneLimits, ZoneStatus,
    ZoneTransition,
};
use std::sync::mpsc;
use std::sync::Arc;
use std::time::Duration;

fn monitor() -> (
    Arc<memora_core::SqliteKvStore>,
    SafeZoneMonitor<memora_core::SqliteKvStore>,
) {
    let store = Arc::new(open_store_in_memory().unwrap());
    let monitor = SafeZoneMonitor::new(Arc::clone(&store));
    (store, monitor)
}

#[test]
fn classify_treats_boundary_distance_as_inside() {
    let zone = SafeZone::new(GeoPoint::new(0.0, 0.0), 200.0);

    // 0.0018 degrees of latitude is about 200m with the fixed
    // meters-per-degree factor.
    assert_eq!(
        classify(GeoPoint::new(0.0018, 0.0), &zone),
        ZoneStatus::Inside
    );
    assert_eq!(
        classify(GeoPoint::new(0.0025, 0.0), &zone),
        ZoneStatus::Outside
    );
}

#[test]
fn set_zone_persists_and_reloads_across_monitor_instances() {
    let (store, monitor) = monitor();
    let center = GeoPoint::new(-33.45694, -70.64827);

    monitor.set_zone(center, 80.0).unwrap();

    let reloaded = SafeZoneMonitor::new(store).zone().unwrap();
    assert_eq!(reloaded.center, center);
    assert_eq!(reloaded.radius_m, 80.0);
}

#[test]
fn set_zone_rejects_radius_outside_limits() {
    let (_store, monitor) = monitor();
    let center = GeoPoint::new(0.0, 0.0);

    let err = monitor.set_zone(center, 5.0).unwrap_err();
    assert!(matches!(err, ZoneError::Validation(_)));
    let err = monitor.set_zone(center, 500.0).unwrap_err();
    assert!(matches!(err, ZoneError::Validation(_)));
    assert!(monitor.zone().is_none());
}

#[test]
fn custom_limits_widen_the_allowed_radius() {
    let store = Arc::new(open_store_in_memory().unwrap());
    let monitor = SafeZoneMonitor::with_limits(
        store,
        ZoneLimits {
            min_radius_m: 10.0,
            max_radius_m: 500.0,
            step_m: 10.0,
        },
    );

    let zone = monitor.set_zone(GeoPoint::new(0.0, 0.0), 200.0).unwrap();
    assert_eq!(zone.radius_m, 200.0);
}

#[test]
fn clear_zone_removes_zone_and_cached_position() {
    let (_store, monitor) = monitor();
    monitor.set_zone(GeoPoint::new(0.0, 0.0), 50.0).unwrap();
    monitor.record_position(GeoPoint::new(0.0001, 0.0)).unwrap();

    monitor.clear_zone().unwrap();

    assert!(monitor.zone().is_none());
    assert!(monitor.last_position().is_none());

    // Clearing again is not an error.
    monitor.clear_zone().unwrap();
}

#[test]
fn corrupt_zone_blob_reads_as_no_zone() {
    let (store, monitor) = monitor();
    store.set("safeZone", "###").unwrap();
    assert!(monitor.zone().is_none());
}

#[test]
fn safe_outing_flag_round_trips_and_defaults_off() {
    let (_store, monitor) = monitor();
    assert!(!monitor.safe_outing());

    monitor.set_safe_outing(true).unwrap();
    assert!(monitor.safe_outing());

    monitor.set_safe_outing(false).unwrap();
    assert!(!monitor.safe_outing());
}

#[test]
fn synthetic_wander_samples_classify_inside_a_generous_zone() {
    let center = GeoPoint::new(-33.45694, -70.64827);
    let store = Arc::new(open_store_in_memory().unwrap());
    let monitor = SafeZoneMonitor::with_limits(
        Arc::clone(&store),
        ZoneLimits {
            min_radius_m: 10.0,
            max_radius_m: 1000.0,
            step_m: 10.0,
        },
    );
    // The wander spread is about 111m per axis, so 300m contains it.
    let zone = monitor.set_zone(center, 300.0).unwrap();

    let mut provider = SyntheticWander::with_seed(center, 42);
    for _ in 0..50 {
        let position = provider.next_position();
        assert_eq!(classify(position, &zone), ZoneStatus::Inside);
    }
}

#[test]
fn sampler_persists_positions_and_reports_transitions() {
    let center = GeoPoint::new(0.0, 0.0);
    let store = Arc::new(open_store_in_memory().unwrap());
    let monitor = Arc::new(SafeZoneMonitor::new(Arc::clone(&store)));
    monitor.set_zone(center, 100.0).unwrap();

    // Inside, then ~222m out, then back inside.
    let route = ScriptedPositions::new(vec![
        GeoPoint::new(0.0, 0.0),
        GeoPoint::new(0.002, 0.0),
        GeoPoint::new(0.0, 0.0),
    ]);

    let (sender, receiver) = mpsc::channel();
    let mut handle = start_sampler(
        Arc::clone(&monitor),
        route,
        Duration::from_millis(10),
        move |outcome| {
            let _ = sender.send(outcome);
        },
    );

    let first = receiver.recv_timeout(Duration::from_secs(2)).unwrap();
    assert_eq!(first.status, Some(ZoneStatus::Inside));
    assert_eq!(first.transition, None);

    let second = receiver.recv_timeout(Duration::from_secs(2)).unwrap();
    assert_eq!(second.status, Some(ZoneStatus::Outside));
    assert_eq!(second.transition, Some(ZoneTransition::Exited));

    let third = receiver.recv_timeout(Duration::from_secs(2)).unwrap();
    assert_eq!(third.status, Some(ZoneStatus::Inside));
    assert_eq!(third.transition, Some(ZoneTransition::Returned));

    assert!(monitor.last_position().is_some());

    handle.stop();
    // The sampler thread owns the sender; once stop() joins, the channel
    // drains to disconnection instead of producing fresh samples forever.
    while receiver.recv_timeout(Duration::from_millis(50)).is_ok() {}
    assert!(receiver.recv_timeout(Duration::from_millis(50)).is_err());
}

#[test]
fn zone_delete_requires_confirmation() {
    struct Decline;
    impl memora_core::Confirmation for Decline {
        fn confirm(&self, _title: &str, _message: &str) -> bool {
            false
        }
    }

    let store = Arc::new(open_store_in_memory().unwrap());
    let monitor = Arc::new(SafeZoneMonitor::new(store));
    monitor.set_zone(GeoPoint::new(0.0, 0.0), 50.0).unwrap();

    let declined = memora_core::ZoneService::new(Arc::clone(&monitor), Decline);
    assert!(!declined.delete().unwrap());
    assert!(monitor.zone().is_some());

    let approving = memora_core::ZoneService::new(Arc::clone(&monitor), memora_core::AlwaysConfirm);
    assert!(approving.delete().unwrap());
    assert!(monitor.zone().is_none());
}

#[test]
fn sampler_stop_is_idempotent_and_drop_is_safe() {
    let store = Arc::new(open_store_in_memory().unwrap());
    let monitor = Arc::new(SafeZoneMonitor::new(store));

    let route = ScriptedPositions::new(vec![GeoPoint::new(0.0, 0.0)]);
    let mut handle = start_sampler(monitor, route, Duration::from_millis(10), |_outcome| {});

    handle.stop();
    handle.stop();
    drop(handle);
}
