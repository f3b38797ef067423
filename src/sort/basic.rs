//! Quadratic comparison sorts: bubble, insertion, selection.

/// Bubble sort: classic adjacent-swap double loop.
///
/// Notifies after every inner-loop iteration, whether or not a swap
/// occurred: exactly `n * (n - 1) / 2` calls for an array of length
/// `n`. Empty and single-element arrays produce no notifications.
pub fn bubble_sort<F>(arr: &mut [u32], mut notify: F)
where
    F: FnMut(&[u32]),
{
    let n = arr.len();
    if n < 2 {
        return;
    }
    for i in 0..n - 1 {
        for j in 0..n - 1 - i {
            if arr[j] > arr[j + 1] {
                arr.swap(j, j + 1);
            }
            notify(arr);
        }
    }
}

/// Insertion sort: shift-based insertion.
///
/// Notifies once per outer iteration, after the element is placed
/// (not per inner shift): `n - 1` calls for `n >= 1`, none for empty.
pub fn insertion_sort<F>(arr: &mut [u32], mut notify: F)
where
    F: FnMut(&[u32]),
{
    for i in 1..arr.len() {
        let key = arr[i];
        let mut j = i;
        while j > 0 && arr[j - 1] > key {
            arr[j] = arr[j - 1];
            j -= 1;
        }
        arr[j] = key;
        notify(arr);
    }
}

/// Selection sort: find-minimum-then-swap.
///
/// Notifies once per outer iteration: exactly `n` calls. Already-placed
/// elements are not self-swapped, so a sorted input performs zero
/// element exchanges.
pub fn selection_sort<F>(arr: &mut [u32], mut notify: F)
where
    F: FnMut(&[u32]),
{
    let n = arr.len();
    for i in 0..n {
        let mut min_idx = i;
        for j in i + 1..n {
            if arr[j] < arr[min_idx] {
                min_idx = j;
            }
        }
        if min_idx != i {
            arr.swap(i, min_idx);
        }
        notify(arr);
    }
}
