//! Heap sort with iterative sift-down.

/// Heap sort: build a max-heap by sifting down from the last parent,
/// then repeatedly swap the root to the end and re-heapify the
/// shrinking prefix.
///
/// Notifies on every sift-down swap and once per extraction swap.
/// Sift-down is an explicit loop, keeping stack depth constant.
pub fn heap_sort<F>(arr: &mut [u32], mut notify: F)
where
    F: FnMut(&[u32]),
{
    let n = arr.len();
    if n < 2 {
        return;
    }

    // Build phase: heapify parents bottom-up.
    for i in (0..n / 2).rev() {
        sift_down(arr, n, i, &mut notify);
    }

    // Extraction phase: root to end, re-heapify the rest.
    for end in (1..n).rev() {
        arr.swap(0, end);
        notify(arr);
        sift_down(arr, end, 0, &mut notify);
    }
}

/// Restore the max-heap property downward from `root` within
/// `arr[..heap_len]`.
fn sift_down<F>(arr: &mut [u32], heap_len: usize, mut root: usize, notify: &mut F)
where
    F: FnMut(&[u32]),
{
    loop {
        let left = 2 * root + 1;
        let right = left + 1;
        let mut largest = root;

        if left < heap_len && arr[left] > arr[largest] {
            largest = left;
        }
        if right < heap_len && arr[right] > arr[largest] {
            largest = right;
        }
        if largest == root {
            return;
        }
        arr.swap(root, largest);
        notify(arr);
        root = largest;
    }
}
