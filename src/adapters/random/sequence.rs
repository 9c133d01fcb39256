//! Scripted RandomSource for deterministic tests and demos.

use std::sync::Mutex;

use crate::ports::RandomSource;

/// Replays fixed draws, cycling when a script runs out.
///
/// `unit()` replays the unit script (default `[0.0]`, i.e. every chance
/// succeeds). `between()` replays the amount script clamped into the
/// requested range (default: always `low`).
///
/// # Example
///
/// ```
/// use jobboard::adapters::random::SequenceRandomSource;
/// use jobboard::ports::RandomSource;
///
/// let source = SequenceRandomSource::new()
///     .with_units(vec![0.95, 0.1])
///     .with_amounts(vec![15]);
///
/// assert!(!source.chance(0.9));
/// assert!(source.chance(0.9));
/// assert_eq!(source.between(10, 50), 15);
/// ```
#[derive(Debug, Default)]
pub struct SequenceRandomSource {
    units: Script<f64>,
    amounts: Script<u64>,
}

impl SequenceRandomSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_units(mut self, units: Vec<f64>) -> Self {
        self.units = Script::new(units);
        self
    }

    pub fn with_amounts(mut self, amounts: Vec<u64>) -> Self {
        self.amounts = Script::new(amounts);
        self
    }

    /// Script that makes every chance succeed.
    pub fn always_succeed() -> Self {
        Self::new().with_units(vec![0.0])
    }

    /// Script that makes every chance below 1.0 fail.
    pub fn always_fail() -> Self {
        Self::new().with_units(vec![0.999_999])
    }
}

impl RandomSource for SequenceRandomSource {
    fn unit(&self) -> f64 {
        self.units.next().unwrap_or(0.0)
    }

    fn between(&self, low: u64, high: u64) -> u64 {
        self.amounts.next().unwrap_or(low).clamp(low, high)
    }
}

#[derive(Debug)]
struct Script<T> {
    values: Vec<T>,
    cursor: Mutex<usize>,
}

impl<T: Copy> Script<T> {
    fn new(values: Vec<T>) -> Self {
        Self {
            values,
            cursor: Mutex::new(0),
        }
    }

    fn next(&self) -> Option<T> {
        if self.values.is_empty() {
            return None;
        }
        let mut cursor = self.cursor.lock().unwrap_or_else(|e| e.into_inner());
        let value = self.values[*cursor % self.values.len()];
        *cursor += 1;
        Some(value)
    }
}

impl<T> Default for Script<T> {
    fn default() -> Self {
        Self {
            values: Vec::new(),
            cursor: Mutex::new(0),
        }
    }
}
