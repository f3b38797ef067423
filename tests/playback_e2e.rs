//! End-to-end playback tests over mock collaborators.
//!
//! These tests drive the full rotation the way the binary does, with
//! recording implementations of the surface, event source, and clock,
//! and verify:
//! - The rotation runs in the fixed order and then terminates
//! - Every frame is well-formed (clear, bars, present)
//! - Pacing follows the per-algorithm step delays
//! - Quit is honored at iteration boundaries only

use std::time::Duration;

use sortviz::config::PlaybackConfig;
use sortviz::playback::PlaybackDriver;
use sortviz::render::{Bar, EventSource, FrameClock, RenderSurface, Rgb};
use sortviz::sort::Algorithm;
use sortviz::VizResult;

// =============================================================================
// Mock collaborators
// =============================================================================

/// A frame as the surface observed it.
#[derive(Debug, Clone)]
struct FrameRecord {
    background: Rgb,
    bars: Vec<(Bar, Rgb)>,
}

#[derive(Default)]
struct RecordingSurface {
    pending_background: Option<Rgb>,
    pending_bars: Vec<(Bar, Rgb)>,
    frames: Vec<FrameRecord>,
}

impl RenderSurface for RecordingSurface {
    fn size(&self) -> (u32, u32) {
        (800, 600)
    }

    fn clear(&mut self, color: Rgb) {
        self.pending_background = Some(color);
        self.pending_bars.clear();
    }

    fn draw_bar(&mut self, bar: Bar, color: Rgb) {
        self.pending_bars.push((bar, color));
    }

    fn present(&mut self) -> VizResult<()> {
        self.frames.push(FrameRecord {
            background: self.pending_background.unwrap_or(Rgb::BLACK),
            bars: std::mem::take(&mut self.pending_bars),
        });
        Ok(())
    }
}

#[derive(Default)]
struct ScriptedEvents {
    titles: Vec<String>,
    quit_after_polls: Option<usize>,
    polls: usize,
}

impl EventSource for ScriptedEvents {
    fn poll_quit(&mut self) -> VizResult<bool> {
        self.polls += 1;
        Ok(self
            .quit_after_polls
            .is_some_and(|after| self.polls > after))
    }

    fn set_title(&mut self, title: &str) -> VizResult<()> {
        self.titles.push(title.to_string());
        Ok(())
    }
}

#[derive(Default)]
struct RecordingClock {
    sleeps: Vec<Duration>,
    caps: Vec<u32>,
}

impl FrameClock for RecordingClock {
    fn sleep(&mut self, duration: Duration) {
        self.sleeps.push(duration);
    }

    fn cap_frame_rate(&mut self, hz: u32) {
        self.caps.push(hz);
    }
}

fn test_config() -> PlaybackConfig {
    PlaybackConfig {
        array_len: 12,
        min_value: 10,
        max_value: 500,
        fps: 144,
        seed: Some(2024),
    }
}

fn run_full(
    config: PlaybackConfig,
) -> PlaybackDriver<RecordingSurface, ScriptedEvents, RecordingClock> {
    let mut driver = PlaybackDriver::new(
        RecordingSurface::default(),
        ScriptedEvents::default(),
        RecordingClock::default(),
        config,
    );
    driver.run().expect("playback should succeed");
    driver
}

// =============================================================================
// E2E: rotation
// =============================================================================

#[test]
fn e2e_rotation_runs_all_seven_in_order() {
    let driver = run_full(test_config());
    let expected: Vec<&str> = Algorithm::ROTATION.iter().map(|a| a.title()).collect();
    assert_eq!(driver.events().titles, expected);
}

#[test]
fn e2e_rotation_terminates_after_counting() {
    let driver = run_full(test_config());
    assert_eq!(driver.current(), None);
    // Quit was polled exactly once per outer iteration.
    assert_eq!(driver.events().polls, 7);
}

#[test]
fn e2e_frame_cap_applied_per_iteration() {
    let driver = run_full(test_config());
    assert_eq!(driver.clock().caps, vec![144; 7]);
}

// =============================================================================
// E2E: frames
// =============================================================================

#[test]
fn e2e_every_frame_is_well_formed() {
    let config = test_config();
    let len = config.array_len;
    let driver = run_full(config);
    let frames = &driver.surface().frames;
    assert!(!frames.is_empty());
    for frame in frames {
        assert_eq!(frame.background, Rgb::WHITE);
        assert_eq!(frame.bars.len(), len);
        assert!(frame.bars.iter().all(|&(_, c)| c == Rgb::BLUE));
        assert!(frame.bars.iter().all(|&(b, _)| b.height <= 600));
    }
}

#[test]
fn e2e_final_frame_per_run_shows_sorted_bars() {
    let driver = run_full(test_config());
    // The last recorded frame is the defensive redraw after counting
    // sort; bar heights must be ascending.
    let last = driver
        .surface()
        .frames
        .last()
        .expect("at least one frame");
    let heights: Vec<u32> = last.bars.iter().map(|&(b, _)| b.height).collect();
    assert!(heights.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn e2e_presents_equal_notifies_plus_defensive_frames() {
    let driver = run_full(test_config());
    let presents = driver.surface().frames.len();
    let sleeps = driver.clock().sleeps.len();
    assert_eq!(presents, sleeps + 7);
}

// =============================================================================
// E2E: pacing
// =============================================================================

#[test]
fn e2e_step_delays_partition_by_algorithm() {
    let driver = run_full(test_config());
    let known: [Duration; 4] = [
        Duration::from_millis(1),
        Duration::from_millis(10),
        Duration::from_millis(50),
        Duration::from_millis(100),
    ];
    for sleep in &driver.clock().sleeps {
        assert!(known.contains(sleep), "unexpected delay {sleep:?}");
    }
    // Bubble's fine-grained 1ms steps dominate: n*(n-1)/2 of them.
    let n = 12u64;
    let ones = driver
        .clock()
        .sleeps
        .iter()
        .filter(|&&d| d == Duration::from_millis(1))
        .count() as u64;
    assert_eq!(ones, n * (n - 1) / 2);
}

// =============================================================================
// E2E: quit
// =============================================================================

#[test]
fn e2e_quit_before_anything_draws_nothing() {
    let mut driver = PlaybackDriver::new(
        RecordingSurface::default(),
        ScriptedEvents {
            quit_after_polls: Some(0),
            ..Default::default()
        },
        RecordingClock::default(),
        test_config(),
    );
    driver.run().unwrap();
    assert!(driver.surface().frames.is_empty());
    assert!(driver.events().titles.is_empty());
}

#[test]
fn e2e_quit_mid_rotation_finishes_current_algorithm() {
    let mut driver = PlaybackDriver::new(
        RecordingSurface::default(),
        ScriptedEvents {
            quit_after_polls: Some(3),
            ..Default::default()
        },
        RecordingClock::default(),
        test_config(),
    );
    driver.run().unwrap();
    // Three algorithms ran to completion, the fourth never started.
    assert_eq!(driver.events().titles.len(), 3);
    let last = driver.surface().frames.last().unwrap();
    let heights: Vec<u32> = last.bars.iter().map(|&(b, _)| b.height).collect();
    assert!(heights.windows(2).all(|w| w[0] <= w[1]));
}

// =============================================================================
// E2E: reproducibility
// =============================================================================

#[test]
fn e2e_same_seed_same_frame_sequence() {
    let a = run_full(test_config());
    let b = run_full(test_config());
    assert_eq!(a.surface().frames.len(), b.surface().frames.len());
    for (fa, fb) in a.surface().frames.iter().zip(&b.surface().frames) {
        assert_eq!(fa.bars, fb.bars);
    }
}
