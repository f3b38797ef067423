//! Rendering abstraction and bar-chart geometry.
//!
//! The core never talks to a concrete windowing or terminal system.
//! Three collaborator traits — [`RenderSurface`], [`EventSource`],
//! [`FrameClock`] — are bound at startup into an explicit context owned
//! by the playback driver, never reached through ambient globals. The
//! binary provides terminal-backed implementations; tests provide
//! recording mocks.

use std::time::Duration;

use crate::error::VizResult;

/// A 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Background fill.
    pub const WHITE: Self = Self::new(255, 255, 255);
    /// Foreground text.
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// Bar fill.
    pub const BLUE: Self = Self::new(0, 0, 255);

    /// Create a color from channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// One bar of the chart, in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bar {
    /// Left edge.
    pub x: u32,
    /// Horizontal extent.
    pub width: u32,
    /// Vertical extent, measured up from the bottom edge.
    pub height: u32,
}

/// Drawing target: a pixel-addressable surface of known size.
pub trait RenderSurface {
    /// Current surface dimensions as (width, height).
    fn size(&self) -> (u32, u32);

    /// Fill the whole surface with `color`.
    fn clear(&mut self, color: Rgb);

    /// Draw a filled bar anchored to the bottom edge.
    fn draw_bar(&mut self, bar: Bar, color: Rgb);

    /// Make everything drawn since the last `present` visible.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the backend fails to flush the frame.
    fn present(&mut self) -> VizResult<()>;
}

/// Window/event collaborator: quit detection and the caption line.
pub trait EventSource {
    /// Poll for a pending quit request without blocking.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if event polling fails.
    fn poll_quit(&mut self) -> VizResult<bool>;

    /// Update the window/frame caption.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the backend rejects the caption.
    fn set_title(&mut self, title: &str) -> VizResult<()>;
}

/// Wall-clock collaborator: timed waits and the outer frame cap.
pub trait FrameClock {
    /// Block for the given duration.
    fn sleep(&mut self, duration: Duration);

    /// Block until at least `1/hz` seconds have passed since the last
    /// call, then mark the new frame boundary.
    fn cap_frame_rate(&mut self, hz: u32);
}

/// Compute the bar rectangles for `values` on a surface of the given
/// size.
///
/// The value-to-height mapping is monotonic: `height = value * surface_height / max`.
/// Empty input yields no bars, so the maximum is never zero here and
/// the division is safe. Values are positive by construction (the
/// generator's range starts above zero), so every bar is visible.
#[must_use]
pub fn bar_layout(values: &[u32], surface_width: u32, surface_height: u32) -> Vec<Bar> {
    let Some(&max) = values.iter().max() else {
        return Vec::new();
    };
    if max == 0 {
        return Vec::new();
    }

    let len = values.len() as u32;
    let bar_width = surface_width / len;
    values
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let height = (u64::from(value) * u64::from(surface_height) / u64::from(max)) as u32;
            Bar {
                x: i as u32 * bar_width,
                width: bar_width,
                height,
            }
        })
        .collect()
}

/// Draw one complete frame: white background, blue bars, present.
///
/// # Errors
///
/// Propagates the surface's `present` failure.
pub fn draw_frame<S: RenderSurface>(surface: &mut S, values: &[u32]) -> VizResult<()> {
    let (width, height) = surface.size();
    surface.clear(Rgb::WHITE);
    for bar in bar_layout(values, width, height) {
        surface.draw_bar(bar, Rgb::BLUE);
    }
    surface.present()
}
