//! RandomSource adapters backed by `rand`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

use crate::ports::RandomSource;

/// Draws from the thread-local generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandomSource;

impl ThreadRandomSource {
    pub fn new() -> Self {
        Self
    }
}

impl RandomSource for ThreadRandomSource {
    fn unit(&self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }

    fn between(&self, low: u64, high: u64) -> u64 {
        rand::thread_rng().gen_range(low..=high)
    }
}

/// Reproducible generator for demos and soak runs.
#[derive(Debug)]
pub struct SeededRandomSource {
    rng: Mutex<StdRng>,
}

impl SeededRandomSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    fn with_rng<R>(&self, draw: impl FnOnce(&mut StdRng) -> R) -> R {
        // A poisoned lock still holds a usable generator.
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        draw(&mut rng)
    }
}

impl RandomSource for SeededRandomSource {
    fn unit(&self) -> f64 {
        self.with_rng(|rng| rng.gen::<f64>())
    }

    fn between(&self, low: u64, high: u64) -> u64 {
        self.with_rng(|rng| rng.gen_range(low..=high))
    }
}
