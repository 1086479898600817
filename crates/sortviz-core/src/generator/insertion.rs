//! Insertion sort by shifting.
//!
//! After the first shift the second index of each `Compare` is still the
//! outer loop's `i`, not the slot being compared against. The pairing is kept as
//! is; renderers only use it for highlighting.

use super::Recorder;

pub(super) fn record(rec: &mut Recorder) {
    for i in 1..rec.len() {
        let key = rec.get(i);
        // `hole` is the slot `key` will land in; `hole - 1` is compared next.
        let mut hole = i;
        rec.compare(i, i - 1);
        while hole > 0 && rec.should_swap(rec.get(hole - 1), key) {
            let shifted = rec.get(hole - 1);
            rec.set(hole, shifted);
            hole -= 1;
            if hole > 0 {
                rec.compare(hole - 1, i);
            }
        }
        rec.set(hole, key);
    }
}
