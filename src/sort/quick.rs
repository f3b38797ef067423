//! Iterative quick sort with an explicit work stack.

use crate::engine::VizRng;

/// Quick sort: explicit stack of inclusive `(low, high)` ranges in
/// place of recursion, so call depth is bounded regardless of pivot
/// luck. The pivot index is chosen uniformly at random from the range
/// and swapped to the end before a Lomuto-style partition.
///
/// Notifies once per stack pop that does real work, i.e. once per
/// partition operation.
pub fn quick_sort<F>(arr: &mut [u32], rng: &mut VizRng, mut notify: F)
where
    F: FnMut(&[u32]),
{
    if arr.len() < 2 {
        return;
    }
    let mut stack: Vec<(usize, usize)> = vec![(0, arr.len() - 1)];
    while let Some((low, high)) = stack.pop() {
        if low >= high {
            continue;
        }
        let p = partition(arr, low, high, rng);
        // Sub-ranges are pushed only when non-empty; index arithmetic
        // stays in bounds for p == low and p == high.
        if p + 1 < high {
            stack.push((p + 1, high));
        }
        if p > low + 1 {
            stack.push((low, p - 1));
        }
        notify(arr);
    }
}

/// Lomuto partition of `arr[low..=high]` around a randomly chosen
/// pivot. Returns the pivot's final index.
fn partition(arr: &mut [u32], low: usize, high: usize, rng: &mut VizRng) -> usize {
    let pivot_index = rng.gen_index(low, high);
    arr.swap(pivot_index, high);
    let pivot = arr[high];

    let mut i = low;
    for j in low..high {
        if arr[j] <= pivot {
            arr.swap(i, j);
            i += 1;
        }
    }
    arr.swap(i, high);
    i
}
