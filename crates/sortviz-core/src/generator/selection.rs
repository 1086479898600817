//! Selection sort: track the best candidate, one swap per position.

use super::Recorder;

pub(super) fn record(rec: &mut Recorder) {
    let n = rec.len();
    for i in 0..n - 1 {
        let mut target = i;
        for j in i + 1..n {
            rec.compare(target, j);
            if rec.should_swap(rec.get(target), rec.get(j)) {
                target = j;
            }
        }
        rec.swap(i, target);
    }
}
