//! Quick sort with a Lomuto partition around the last element.

use super::Recorder;

pub(super) fn record(rec: &mut Recorder) {
    let high = rec.len() - 1;
    sort_range(rec, 0, high);
}

fn sort_range(rec: &mut Recorder, low: usize, high: usize) {
    if low < high {
        let pivot = partition(rec, low, high);
        if pivot > low {
            sort_range(rec, low, pivot - 1);
        }
        sort_range(rec, pivot + 1, high);
    }
}

/// Returns the pivot's final position. `store` is the first slot not yet
/// known to precede the pivot.
fn partition(rec: &mut Recorder, low: usize, high: usize) -> usize {
    let pivot = rec.get(high);
    let mut store = low;
    for j in low..high {
        rec.compare(j, high);
        if rec.should_swap(pivot, rec.get(j)) {
            rec.swap(store, j);
            store += 1;
        }
    }
    rec.swap(store, high);
    store
}
