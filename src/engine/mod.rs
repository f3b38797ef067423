//! Deterministic execution support.
//!
//! Randomness is the only nondeterminism in the system: array
//! generation and quick sort's pivot choice. Both draw from a single
//! seeded [`VizRng`], so a run is fully replayable from its seed.

pub mod rng;

pub use rng::VizRng;
