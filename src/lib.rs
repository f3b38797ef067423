//! # sortviz
//!
//! Animated visualization of classic sorting algorithms.
//!
//! Seven algorithms — bubble, insertion, selection, merge, quick,
//! heap, counting — run once each against a freshly generated random
//! array. Every meaningful mutation triggers a bar-chart redraw, paced
//! to the algorithm's step granularity under an outer frame-rate cap.
//!
//! The core is backend-free: rendering, events, and timing are
//! collaborator traits ([`render::RenderSurface`],
//! [`render::EventSource`], [`render::FrameClock`]) bound into an
//! explicit context at startup. The `tui` feature provides a
//! ratatui/crossterm backend in the binary.
//!
//! ## Example
//!
//! ```rust
//! use sortviz::prelude::*;
//!
//! let mut rng = VizRng::new(42);
//! let mut arr = rng.random_array(16, 10, 500);
//! sortviz::sort::run(Algorithm::Quick, &mut arr, &mut rng, |_| {}).unwrap();
//! assert!(arr.windows(2).all(|w| w[0] <= w[1]));
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::missing_const_for_fn,  // Many functions can't be const in stable Rust
    clippy::needless_range_loop,   // Sometimes range loops are clearer
)]

pub mod config;
pub mod engine;
pub mod error;
pub mod playback;
pub mod render;
pub mod sort;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::PlaybackConfig;
    pub use crate::engine::VizRng;
    pub use crate::error::{VizError, VizResult};
    pub use crate::playback::PlaybackDriver;
    pub use crate::render::{Bar, EventSource, FrameClock, RenderSurface, Rgb};
    pub use crate::sort::Algorithm;
}

/// Re-export for public API
pub use error::{VizError, VizResult};
