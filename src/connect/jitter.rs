use rand::rngs::StdRng;
use rand::{Rng as _, SeedableRng as _};

use crate::foundation::core::Vec2;
use crate::params::model::Jitter;

/// Source of control-point displacement.
///
/// One draw per axis per control point, uniform in `[-amplitude/2, amplitude/2)`.
pub struct JitterSource {
    rng: Option<StdRng>,
}

impl JitterSource {
    pub fn new(mode: Jitter) -> Self {
        let rng = match mode {
            Jitter::Off => None,
            Jitter::Seeded(seed) => Some(StdRng::seed_from_u64(seed)),
            Jitter::Entropy => Some(StdRng::from_os_rng()),
        };
        Self { rng }
    }

    pub fn off() -> Self {
        Self { rng: None }
    }

    pub fn is_active(&self) -> bool {
        self.rng.is_some()
    }

    pub fn offset(&mut self, amplitude: f64) -> Vec2 {
        match self.rng.as_mut() {
            None => Vec2::ZERO,
            Some(rng) => {
                let dx = rng.random::<f64>() - 0.5;
                let dy = rng.random::<f64>() - 0.5;
                Vec2::new(dx * amplitude, dy * amplitude)
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/connect/jitter.rs"]
mod tests;
