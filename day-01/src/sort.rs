//! Top-down merge sort over an inclusive index range.

pub fn sort<T: Ord + Clone>(values: &mut [T]) {
    if let Some(right) = values.len().checked_sub(1) {
        merge_sort(values, 0, right);
    }
}

/// Sorts `values[left..=right]` in place; the caller guarantees `right < values.len()`.
pub fn merge_sort<T: Ord + Clone>(values: &mut [T], left: usize, right: usize) {
    if left >= right {
        return;
    }
    debug_assert!(right < values.len(), "range end {right} out of bounds");

    let mid = left + (right - left) / 2;
    merge_sort(values, left, mid);
    merge_sort(values, mid + 1, right);
    merge(values, left, mid, right);
}

// ties take the left run, so the merge is stable
pub fn merge<T: Ord + Clone>(values: &mut [T], left: usize, mid: usize, right: usize) {
    let lower = values[left..=mid].to_vec();
    let upper = values[mid + 1..=right].to_vec();

    let (mut i, mut j) = (0, 0);
    let mut k = left;

    while i < lower.len() && j < upper.len() {
        if lower[i] <= upper[j] {
            values[k] = lower[i].clone();
            i += 1;
        } else {
            values[k] = upper[j].clone();
            j += 1;
        }
        k += 1;
    }

    // at most one of these runs has anything left
    for value in lower[i..].iter().chain(&upper[j..]) {
        values[k] = value.clone();
        k += 1;
    }
}
