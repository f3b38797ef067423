//! Instrumented sorting algorithms.
//!
//! Every algorithm sorts ascending, in place, and reports progress
//! through a step callback: `FnMut(&[u32])` invoked with a read-only
//! view of the array after each meaningfully visible mutation. The
//! callback granularity differs per algorithm (see each function) so
//! that fine-grained algorithms animate smoothly and coarse-grained
//! ones remain legible.
//!
//! The callback is synchronous: an algorithm does not resume until it
//! returns. Pacing lives in the callback, not here.

pub mod basic;
pub mod counting;
pub mod heap;
pub mod merge;
pub mod quick;

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::engine::VizRng;
use crate::error::VizResult;

pub use basic::{bubble_sort, insertion_sort, selection_sort};
pub use counting::counting_sort;
pub use heap::heap_sort;
pub use merge::merge_sort;
pub use quick::quick_sort;

/// The demonstration rotation.
///
/// A tagged variant per algorithm with an explicit successor function;
/// [`Algorithm::next`] returns `None` after [`Algorithm::Counting`],
/// which the playback driver treats as the terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Adjacent-swap double loop, O(n²).
    Bubble,
    /// Shift-based insertion.
    Insertion,
    /// Find-minimum-then-swap.
    Selection,
    /// Iterative bottom-up merge.
    Merge,
    /// Iterative quick sort with random pivot.
    Quick,
    /// Max-heap build plus extraction.
    Heap,
    /// Frequency-table reconstruction.
    Counting,
}

impl Algorithm {
    /// The full rotation in demonstration order.
    pub const ROTATION: [Self; 7] = [
        Self::Bubble,
        Self::Insertion,
        Self::Selection,
        Self::Merge,
        Self::Quick,
        Self::Heap,
        Self::Counting,
    ];

    /// First algorithm in the rotation.
    #[must_use]
    pub const fn first() -> Self {
        Self::Bubble
    }

    /// Successor in the rotation. `None` after the last algorithm.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Bubble => Some(Self::Insertion),
            Self::Insertion => Some(Self::Selection),
            Self::Selection => Some(Self::Merge),
            Self::Merge => Some(Self::Quick),
            Self::Quick => Some(Self::Heap),
            Self::Heap => Some(Self::Counting),
            Self::Counting => None,
        }
    }

    /// Display title for the window/frame caption.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Bubble => "Bubble Sort",
            Self::Insertion => "Insertion Sort",
            Self::Selection => "Selection Sort",
            Self::Merge => "Merge Sort",
            Self::Quick => "Quick Sort",
            Self::Heap => "Heap Sort",
            Self::Counting => "Counting Sort",
        }
    }

    /// Per-step wait applied by the playback driver after each redraw.
    ///
    /// Scaled to the algorithm's step granularity: bubble sort emits
    /// O(n²) fine-grained steps and gets 1ms, coarse per-pass
    /// algorithms get 100ms, heap operations 50ms, counting buckets
    /// 10ms.
    #[must_use]
    pub const fn step_delay(self) -> Duration {
        match self {
            Self::Bubble => Duration::from_millis(1),
            Self::Insertion | Self::Selection | Self::Merge | Self::Quick => {
                Duration::from_millis(100)
            }
            Self::Heap => Duration::from_millis(50),
            Self::Counting => Duration::from_millis(10),
        }
    }
}

/// Run one algorithm to completion on `arr`.
///
/// `rng` is consulted only by quick sort (pivot selection); it is
/// threaded through uniformly so the dispatch stays total.
///
/// # Errors
///
/// Only counting sort can fail: `VizError::InvalidInput` on an empty
/// array. Every other algorithm treats empty input as a no-op.
pub fn run<F>(
    algorithm: Algorithm,
    arr: &mut [u32],
    rng: &mut VizRng,
    notify: F,
) -> VizResult<()>
where
    F: FnMut(&[u32]),
{
    match algorithm {
        Algorithm::Bubble => {
            bubble_sort(arr, notify);
            Ok(())
        }
        Algorithm::Insertion => {
            insertion_sort(arr, notify);
            Ok(())
        }
        Algorithm::Selection => {
            selection_sort(arr, notify);
            Ok(())
        }
        Algorithm::Merge => {
            merge_sort(arr, notify);
            Ok(())
        }
        Algorithm::Quick => {
            quick_sort(arr, rng, notify);
            Ok(())
        }
        Algorithm::Heap => {
            heap_sort(arr, notify);
            Ok(())
        }
        Algorithm::Counting => counting_sort(arr, notify),
    }
}
