//! Iterative bottom-up merge sort.

/// Merge sort: bottom-up, block size doubling from 1.
///
/// Notifies once per merge operation (not per element copied). A final
/// left block with no right-hand partner is carried forward untouched,
/// so lengths that are not powers of two are handled correctly.
pub fn merge_sort<F>(arr: &mut [u32], mut notify: F)
where
    F: FnMut(&[u32]),
{
    let n = arr.len();
    let mut width = 1;
    while width < n {
        let mut start = 0;
        // A merge only happens when a right block exists, i.e. while
        // start + width < n; a lone trailing block is already sorted.
        while start + width < n {
            let mid = start + width;
            let end = usize::min(start + 2 * width, n);
            merge(arr, start, mid, end);
            notify(arr);
            start += 2 * width;
        }
        width *= 2;
    }
}

/// Merge the sorted runs `arr[start..mid]` and `arr[mid..end]` in place,
/// via auxiliary buffers sized to the two runs.
fn merge(arr: &mut [u32], start: usize, mid: usize, end: usize) {
    let left = arr[start..mid].to_vec();
    let right = arr[mid..end].to_vec();

    let mut i = 0;
    let mut j = 0;
    let mut k = start;

    while i < left.len() && j < right.len() {
        if left[i] <= right[j] {
            arr[k] = left[i];
            i += 1;
        } else {
            arr[k] = right[j];
            j += 1;
        }
        k += 1;
    }
    while i < left.len() {
        arr[k] = left[i];
        i += 1;
        k += 1;
    }
    while j < right.len() {
        arr[k] = right[j];
        j += 1;
        k += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorts_basic() {
        let mut arr = vec![38u32, 27, 43, 3, 9, 82, 10];
        merge_sort(&mut arr, |_| {});
        assert_eq!(arr, vec![3, 9, 10, 27, 38, 43, 82]);
    }

    #[test]
    fn test_non_power_of_two_lengths() {
        for n in [3usize, 5, 7, 9, 11, 13, 100, 101] {
            let mut arr: Vec<u32> = (0..n as u32).rev().map(|v| v + 10).collect();
            let mut expected = arr.clone();
            expected.sort_unstable();
            merge_sort(&mut arr, |_| {});
            assert_eq!(arr, expected, "n = {n}");
        }
    }

    #[test]
    fn test_empty_and_single_are_noops() {
        let mut empty: Vec<u32> = Vec::new();
        let mut calls = 0;
        merge_sort(&mut empty, |_| calls += 1);
        assert!(empty.is_empty());
        assert_eq!(calls, 0);

        let mut one = vec![7u32];
        merge_sort(&mut one, |_| calls += 1);
        assert_eq!(one, vec![7]);
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_notify_per_merge_operation() {
        // Length 4: two pair merges at width 1, one merge at width 2.
        let mut arr = vec![4u32, 3, 2, 1];
        let mut calls = 0;
        merge_sort(&mut arr, |_| calls += 1);
        assert_eq!(calls, 3);
        assert_eq!(arr, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_all_equal_terminates() {
        let mut arr = vec![4u32, 4, 4];
        merge_sort(&mut arr, |_| {});
        assert_eq!(arr, vec![4, 4, 4]);
    }

    #[test]
    fn test_merge_helper_partial_right() {
        // Right run shorter than left.
        let mut arr = vec![2u32, 5, 9, 1];
        merge(&mut arr, 0, 3, 4);
        assert_eq!(arr, vec![1, 2, 5, 9]);
    }
}
