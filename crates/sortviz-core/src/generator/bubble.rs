//! Bubble sort: full adjacent passes, no early exit.

use super::Recorder;

pub(super) fn record(rec: &mut Recorder) {
    let n = rec.len();
    for i in 0..n - 1 {
        for j in 0..n - i - 1 {
            rec.compare(j, j + 1);
            if rec.should_swap(rec.get(j), rec.get(j + 1)) {
                rec.swap(j, j + 1);
            }
        }
    }
}
