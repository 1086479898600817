//! Top-down merge sort over inclusive ranges.

use super::Recorder;

pub(super) fn record(rec: &mut Recorder) {
    let right = rec.len() - 1;
    sort_range(rec, 0, right);
}

fn sort_range(rec: &mut Recorder, left: usize, right: usize) {
    if left < right {
        let mid = (left + right) / 2;
        sort_range(rec, left, mid);
        sort_range(rec, mid + 1, right);
        merge(rec, left, mid, right);
    }
}

/// Merge `[left, mid]` and `[mid + 1, right]`. The left run wins ties, so
/// equal values keep their relative order.
fn merge(rec: &mut Recorder, left: usize, mid: usize, right: usize) {
    let lhs = rec.slice(left, mid);
    let rhs = rec.slice(mid + 1, right);
    let (mut i, mut j, mut k) = (0, 0, left);

    while i < lhs.len() && j < rhs.len() {
        rec.compare(left + i, mid + 1 + j);
        if rec.should_swap(lhs[i], rhs[j]) {
            rec.set(k, rhs[j]);
            j += 1;
        } else {
            rec.set(k, lhs[i]);
            i += 1;
        }
        k += 1;
    }
    for &value in &lhs[i..] {
        rec.set(k, value);
        k += 1;
    }
    for &value in &rhs[j..] {
        rec.set(k, value);
        k += 1;
    }
}
