//! Atomic trace steps and the trace container.

use crate::algorithm::Algorithm;
use crate::ordering::Ordering;

/// One replayable operation.
///
/// Indices refer to positions in the sequence as it stands when the step is
/// applied; later steps assume every earlier step has been applied in order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    /// Two positions were compared. No mutation.
    Compare(usize, usize),
    /// Exchange the values at two positions.
    Swap(usize, usize),
    /// Overwrite one position.
    Set {
        /// Target position.
        index: usize,
        /// New value.
        value: f64,
    },
}

impl Step {
    /// Apply this step to `values`. `Compare` leaves them untouched.
    ///
    /// # Panics
    ///
    /// Panics if an index is out of bounds.
    #[inline]
    pub fn apply(&self, values: &mut [f64]) {
        match *self {
            Self::Compare(..) => {}
            Self::Swap(i, j) => values.swap(i, j),
            Self::Set { index, value } => values[index] = value,
        }
    }

    /// Positions this step touches, for highlighting.
    pub fn indices(&self) -> impl Iterator<Item = usize> {
        let (a, b) = match *self {
            Self::Compare(i, j) | Self::Swap(i, j) => (i, Some(j)),
            Self::Set { index, .. } => (index, None),
        };
        std::iter::once(a).chain(b)
    }

    /// Largest index this step touches.
    #[inline]
    pub fn max_index(&self) -> usize {
        match *self {
            Self::Compare(i, j) | Self::Swap(i, j) => i.max(j),
            Self::Set { index, .. } => index,
        }
    }

    /// Whether applying this step can change the sequence.
    #[inline]
    pub fn is_mutation(&self) -> bool {
        !matches!(self, Self::Compare(..))
    }
}

/// What produced a trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceKind {
    /// A sort run.
    Sort {
        algorithm: Algorithm,
        ordering: Ordering,
    },
    /// A Fisher-Yates shuffle.
    Shuffle,
}

/// Per-variant step totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepCounts {
    pub compares: usize,
    pub swaps: usize,
    pub sets: usize,
}

/// An immutable, finite, ordered list of steps.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    kind: TraceKind,
    steps: Vec<Step>,
}

impl Trace {
    /// Wrap a finished step list.
    pub fn new(kind: TraceKind, steps: Vec<Step>) -> Self {
        Self { kind, steps }
    }

    #[inline]
    pub fn kind(&self) -> TraceKind {
        self.kind
    }

    #[inline]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }

    /// Count steps by variant.
    pub fn counts(&self) -> StepCounts {
        self.steps
            .iter()
            .fold(StepCounts::default(), |mut acc, step| {
                match step {
                    Step::Compare(..) => acc.compares += 1,
                    Step::Swap(..) => acc.swaps += 1,
                    Step::Set { .. } => acc.sets += 1,
                }
                acc
            })
    }

    /// Apply every step to a copy of `input` and return the result.
    pub fn replay(&self, input: &[f64]) -> Vec<f64> {
        self.replay_prefix(input, self.steps.len())
    }

    /// Apply the first `n` steps (clamped to the trace length) to a copy of
    /// `input`.
    pub fn replay_prefix(&self, input: &[f64], n: usize) -> Vec<f64> {
        let mut out = input.to_vec();
        for step in &self.steps[..n.min(self.steps.len())] {
            step.apply(&mut out);
        }
        out
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
