//! Playback driver: the outer demonstration loop.
//!
//! Owns the rendering context (surface, events, clock), the RNG, and
//! the rotation state. One outer iteration caps the frame rate,
//! generates a fresh random array, checks for quit, runs the current
//! algorithm with the redraw callback bound, draws a defensive final
//! frame, and advances the rotation.
//!
//! Cancellation is cooperative: quit is polled once per outer
//! iteration, so a running algorithm always completes before the quit
//! takes effect. The rotation has no wraparound; after the last
//! algorithm the loop ends and [`PlaybackDriver::run`] returns.

use crate::config::PlaybackConfig;
use crate::engine::VizRng;
use crate::error::VizResult;
use crate::render::{draw_frame, EventSource, FrameClock, RenderSurface};
use crate::sort::{self, Algorithm};

/// Drives the algorithm rotation against a rendering context.
pub struct PlaybackDriver<S, E, C> {
    surface: S,
    events: E,
    clock: C,
    rng: VizRng,
    config: PlaybackConfig,
    current: Option<Algorithm>,
}

impl<S, E, C> PlaybackDriver<S, E, C>
where
    S: RenderSurface,
    E: EventSource,
    C: FrameClock,
{
    /// Create a driver positioned at the start of the rotation.
    #[must_use]
    pub fn new(surface: S, events: E, clock: C, config: PlaybackConfig) -> Self {
        let rng = config.seed.map_or_else(VizRng::from_entropy, VizRng::new);
        Self {
            surface,
            events,
            clock,
            rng,
            config,
            current: Some(Algorithm::first()),
        }
    }

    /// The seed this run draws from; report it to make the run
    /// replayable.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.rng.master_seed()
    }

    /// Algorithm the next iteration will run, if any.
    #[must_use]
    pub const fn current(&self) -> Option<Algorithm> {
        self.current
    }

    /// Get reference to the render surface.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Get reference to the event source.
    #[must_use]
    pub fn events(&self) -> &E {
        &self.events
    }

    /// Get reference to the frame clock.
    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Run the rotation to completion or until quit is requested.
    ///
    /// Returns `Ok(())` both on normal completion (rotation exhausted)
    /// and on user quit.
    ///
    /// # Errors
    ///
    /// Propagates surface and event-source failures; these are fatal,
    /// there is nothing to retry.
    pub fn run(&mut self) -> VizResult<()> {
        while let Some(algorithm) = self.current {
            self.clock.cap_frame_rate(self.config.fps);

            let mut arr = self.rng.random_array(
                self.config.array_len,
                self.config.min_value,
                self.config.max_value,
            );

            if self.events.poll_quit()? {
                break;
            }

            self.events.set_title(algorithm.title())?;
            self.run_algorithm(algorithm, &mut arr)?;

            // Defensive final frame after the run completes.
            draw_frame(&mut self.surface, &arr)?;

            self.current = algorithm.next();
        }
        Ok(())
    }

    /// Execute one algorithm with the redraw-and-pace callback bound.
    fn run_algorithm(&mut self, algorithm: Algorithm, arr: &mut [u32]) -> VizResult<()> {
        let delay = algorithm.step_delay();
        let surface = &mut self.surface;
        let clock = &mut self.clock;

        // The step callback cannot return a Result, so a present
        // failure is parked and surfaced after the run.
        let mut deferred = None;
        let notify = |values: &[u32]| {
            if deferred.is_some() {
                return;
            }
            match draw_frame(&mut *surface, values) {
                Ok(()) => clock.sleep(delay),
                Err(e) => deferred = Some(e),
            }
        };

        sort::run(algorithm, arr, &mut self.rng, notify)?;

        match deferred {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
