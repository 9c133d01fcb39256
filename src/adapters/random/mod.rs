//! RandomSource adapters.

mod sequence;
mod std_rng;

pub use sequence::SequenceRandomSource;
pub use std_rng::{SeededRandomSource, ThreadRandomSource};
