//! Position provider capability.
//!
//! # Responsibility
//! - Define the substitution point for a live device location service.
//! - Ship a synthetic reference provider and a deterministic test provider.

use crate::model::geo::GeoPoint;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Capability yielding position samples on demand.
///
/// The sampler pulls one sample per tick; a real device integration would
/// implement this over the platform location service.
pub trait PositionProvider {
    fn next_position(&mut self) -> GeoPoint;
}

/// Degrees of full wander span per axis, roughly ±111 m at the equator.
const DEFAULT_SPREAD_DEG: f64 = 0.002;

/// Synthetic provider wandering uniformly around a fixed center.
///
/// Stand-in for the real location capability during development and demos.
pub struct SyntheticWander {
    center: GeoPoint,
    spread_deg: f64,
    rng: StdRng,
}

impl SyntheticWander {
    pub fn new(center: GeoPoint) -> Self {
        Self {
            center,
            spread_deg: DEFAULT_SPREAD_DEG,
            rng: StdRng::from_entropy(),
        }
    }

    /// Seeded variant for reproducible runs.
    pub fn with_seed(center: GeoPoint, seed: u64) -> Self {
        Self {
            center,
            spread_deg: DEFAULT_SPREAD_DEG,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl PositionProvider for SyntheticWander {
    fn next_position(&mut self) -> GeoPoint {
        let lat_offset = (self.rng.gen::<f64>() - 0.5) * self.spread_deg;
        let lon_offset = (self.rng.gen::<f64>() - 0.5) * self.spread_deg;
        GeoPoint::new(
            self.center.latitude + lat_offset,
            self.center.longitude + lon_offset,
        )
    }
}

/// Deterministic provider cycling through a fixed route.
pub struct ScriptedPositions {
    route: Vec<GeoPoint>,
    cursor: usize,
}

impl ScriptedPositions {
    /// `route` must be non-empty.
    pub fn new(route: Vec<GeoPoint>) -> Self {
        assert!(!route.is_empty(), "scripted route must not be empty");
        Self { route, cursor: 0 }
    }
}

impl PositionProvider for ScriptedPositions {
    fn next_position(&mut self) -> GeoPoint {
        let position = self.route[self.cursor % self.route.len()];
        self.cursor += 1;
        position
    }
}

#[cfg(test)]
mod tests {
    use super::{PositionProvider, ScriptedPositions, SyntheticWander};
    use crate::model::geo::GeoPoint;

    #[test]
    fn synthetic_wander_stays_within_spread() {
        let center = GeoPoint::new(-33.45694, -70.64827);
        let mut provider = SyntheticWander::with_seed(center, 7);
        for _ in 0..100 {
            let p = provider.next_position();
            assert!((p.latitude - center.latitude).abs() <= 0.001);
            assert!((p.longitude - center.longitude).abs() <= 0.001);
        }
    }

    #[test]
    fn scripted_positions_cycle_in_order() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(1.0, 1.0);
        let mut provider = ScriptedPositions::new(vec![a, b]);
        assert_eq!(provider.next_position(), a);
        assert_eq!(provider.next_position(), b);
        assert_eq!(provider.next_position(), a);
    }
}
