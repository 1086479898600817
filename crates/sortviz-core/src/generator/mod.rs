//! Trace generator.
//!
//! Each algorithm drives a [`Recorder`] that owns a scratch copy of the
//! input. The recorder mutates the copy and appends the matching [`Step`] in
//! one call, so the recorded trace can never drift from the work it
//! describes.
//!
//! # Invariants
//!
//! 1. Replaying the trace against the input yields the sorted output.
//! 2. `Swap` is only recorded between distinct positions.
//! 3. `Set` is recorded for every write, even when the value is unchanged.
//! 4. Generation is deterministic: no randomness, no shared state.

mod bubble;
mod insertion;
mod merge;
mod quick;
mod selection;

use crate::algorithm::Algorithm;
use crate::ordering::Ordering;
use crate::sequence::Sequence;
use crate::step::{Step, Trace, TraceKind};

/// Run `algorithm` over a copy of `input` and return its trace.
///
/// Inputs of length 0 or 1 produce an empty trace. The caller's sequence is
/// never touched.
pub fn generate(algorithm: Algorithm, input: &Sequence, ordering: Ordering) -> Trace {
    let mut rec = Recorder::new(input.values(), ordering);
    if rec.len() > 1 {
        match algorithm {
            Algorithm::Bubble => bubble::record(&mut rec),
            Algorithm::Selection => selection::record(&mut rec),
            Algorithm::Insertion => insertion::record(&mut rec),
            Algorithm::Merge => merge::record(&mut rec),
            Algorithm::Quick => quick::record(&mut rec),
        }
    }
    debug_assert!(ordering.is_sorted(&rec.work), "{algorithm} left input unsorted");

    let trace = Trace::new(
        TraceKind::Sort {
            algorithm,
            ordering,
        },
        rec.steps,
    );
    let counts = trace.counts();
    tracing::debug!(
        target: "sortviz.trace",
        algorithm = %algorithm,
        ordering = %ordering,
        len = input.len(),
        steps = trace.len(),
        compares = counts.compares,
        swaps = counts.swaps,
        sets = counts.sets,
        "trace generated"
    );
    trace
}

/// Working copy plus the steps recorded against it.
pub(crate) struct Recorder {
    work: Vec<f64>,
    ordering: Ordering,
    steps: Vec<Step>,
}

impl Recorder {
    fn new(input: &[f64], ordering: Ordering) -> Self {
        Self {
            work: input.to_vec(),
            ordering,
            steps: Vec::new(),
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.work.len()
    }

    #[inline]
    pub(crate) fn get(&self, index: usize) -> f64 {
        self.work[index]
    }

    /// The shared comparator applied to two values.
    #[inline]
    pub(crate) fn should_swap(&self, a: f64, b: f64) -> bool {
        self.ordering.should_swap(a, b)
    }

    pub(crate) fn compare(&mut self, i: usize, j: usize) {
        self.steps.push(Step::Compare(i, j));
    }

    /// Exchange two positions, recording a step only when they differ.
    pub(crate) fn swap(&mut self, i: usize, j: usize) {
        if i != j {
            self.work.swap(i, j);
            self.steps.push(Step::Swap(i, j));
        }
    }

    /// Overwrite a position. Always recorded.
    pub(crate) fn set(&mut self, index: usize, value: f64) {
        self.work[index] = value;
        self.steps.push(Step::Set { index, value });
    }

    /// Copy of `work[from..=to]`.
    pub(crate) fn slice(&self, from: usize, to: usize) -> Vec<f64> {
        self.work[from..=to].to_vec()
    }
}

#[cfg(test)]
pub(crate) fn run(algorithm: Algorithm, values: &[f64], ordering: Ordering) -> Trace {
    let input = Sequence::new(values.to_vec()).expect("finite test input");
    generate(algorithm, &input, ordering)
}
