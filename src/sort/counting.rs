//! Counting sort over a bounded non-negative integer domain.

use crate::error::{VizError, VizResult};

/// Counting sort: build a frequency table sized `max + 1`, then
/// rewrite the array ascending by emitting each value `frequency`
/// times.
///
/// Notifies once per count bucket, empty buckets included: exactly
/// `max + 1` calls.
///
/// # Errors
///
/// Returns `VizError::InvalidInput` on an empty array (no maximum to
/// size the table by). The playback driver never produces empty
/// arrays, so reaching this is a caller bug.
pub fn counting_sort<F>(arr: &mut [u32], mut notify: F) -> VizResult<()>
where
    F: FnMut(&[u32]),
{
    let max = *arr
        .iter()
        .max()
        .ok_or_else(|| VizError::invalid_input("counting sort requires a non-empty array"))?;

    let mut counts = vec![0usize; max as usize + 1];
    for &v in arr.iter() {
        counts[v as usize] += 1;
    }

    let mut i = 0;
    for (value, &count) in counts.iter().enumerate() {
        for _ in 0..count {
            arr[i] = value as u32;
            i += 1;
        }
        notify(arr);
    }
    Ok(())
}
