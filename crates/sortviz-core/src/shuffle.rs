//! Fisher-Yates shuffle traces.

use rand::Rng;

use crate::step::{Step, Trace, TraceKind};

/// Record a Fisher-Yates shuffle of a sequence of length `len`.
///
/// Walks from the last position down to 1, pairing each with a uniform pick
/// from `0..=i`. Only swaps between distinct positions are recorded.
pub fn shuffle_trace<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Trace {
    let mut steps = Vec::with_capacity(len.saturating_sub(1));
    for i in (1..len).rev() {
        let j = rng.random_range(0..=i);
        if i != j {
            steps.push(Step::Swap(i, j));
        }
    }
    tracing::debug!(target: "sortviz.trace", len, steps = steps.len(), "shuffle generated");
    Trace::new(TraceKind::Shuffle, steps)
}
