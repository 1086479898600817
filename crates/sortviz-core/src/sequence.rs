//! Validated value sequences.

use std::ops::RangeInclusive;

use rand::Rng;

use crate::error::SequenceError;
use crate::ordering::Ordering;
use crate::step::Step;

/// An ordered list of finite values, indexed `0..len`.
///
/// Construction rejects NaN and infinities so every comparison the
/// generator makes is total.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sequence {
    values: Vec<f64>,
}

impl Sequence {
    /// Validate and wrap `values`.
    pub fn new(values: Vec<f64>) -> Result<Self, SequenceError> {
        if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(SequenceError::NonFinite { index, value });
        }
        Ok(Self { values })
    }

    /// `size` integral values drawn uniformly from `range`.
    pub fn random<R: Rng + ?Sized>(
        size: usize,
        range: RangeInclusive<u32>,
        rng: &mut R,
    ) -> Result<Self, SequenceError> {
        if range.is_empty() {
            return Err(SequenceError::EmptyRange {
                min: *range.start(),
                max: *range.end(),
            });
        }
        let values = (0..size)
            .map(|_| f64::from(rng.random_range(range.clone())))
            .collect();
        Ok(Self { values })
    }

    /// The current values.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Largest value, or `None` when empty.
    pub fn max_value(&self) -> Option<f64> {
        self.values.iter().copied().reduce(f64::max)
    }

    /// Whether the values are ordered according to `ordering`.
    pub fn is_sorted(&self, ordering: Ordering) -> bool {
        ordering.is_sorted(&self.values)
    }

    /// Apply one step in place.
    ///
    /// # Panics
    ///
    /// Panics if the step addresses an index outside the sequence, or if a
    /// `Set` carries a non-finite value. Both are malformed traces.
    pub fn apply(&mut self, step: &Step) {
        assert!(
            step.max_index() < self.values.len(),
            "step {step:?} out of range for sequence of length {}",
            self.values.len()
        );
        if let Step::Set { value, .. } = step {
            assert!(value.is_finite(), "step {step:?} writes a non-finite value");
        }
        step.apply(&mut self.values);
    }

    /// Unwrap into the owned values.
    pub fn into_vec(self) -> Vec<f64> {
        self.values
    }
}

impl TryFrom<Vec<f64>> for Sequence {
    type Error = SequenceError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        Self::new(values)
    }
}

impl AsRef<[f64]> for Sequence {
    fn as_ref(&self) -> &[f64] {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn rejects_nan_and_infinity() {
        let err = Sequence::new(vec![1.0, f64::NAN]).unwrap_err();
        assert!(matches!(err, SequenceError::NonFinite { index: 1, .. }));
        let err = Sequence::new(vec![f64::NEG_INFINITY]).unwrap_err();
        assert!(matches!(err, SequenceError::NonFinite { index: 0, .. }));
    }

    #[test]
    fn random_stays_in_range_and_is_integral() {
        let mut rng = SmallRng::seed_from_u64(7);
        let seq = Sequence::random(200, 10..=109, &mut rng).unwrap();
        assert_eq!(seq.len(), 200);
        for &v in seq.values() {
            assert!((10.0..=109.0).contains(&v));
            assert_eq!(v.fract(), 0.0);
        }
    }

    #[test]
    fn random_rejects_empty_range() {
        let mut rng = SmallRng::seed_from_u64(7);
        #[allow(clippy::reversed_empty_ranges)]
        let err = Sequence::random(3, 9..=2, &mut rng).unwrap_err();
        assert_eq!(err, SequenceError::EmptyRange { min: 9, max: 2 });
    }

    #[test]
    fn random_is_reproducible_from_seed() {
        let a = Sequence::random(20, 10..=109, &mut SmallRng::seed_from_u64(99)).unwrap();
        let b = Sequence::random(20, 10..=109, &mut SmallRng::seed_from_u64(99)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn apply_swap_and_set() {
        let mut seq = Sequence::new(vec![1.0, 2.0, 3.0]).unwrap();
        seq.apply(&Step::Swap(0, 2));
        assert_eq!(seq.values(), &[3.0, 2.0, 1.0]);
        seq.apply(&Step::Set {
            index: 1,
            value: 9.0,
        });
        assert_eq!(seq.values(), &[3.0, 9.0, 1.0]);
        seq.apply(&Step::Compare(0, 1));
        assert_eq!(seq.values(), &[3.0, 9.0, 1.0]);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn apply_out_of_range_panics() {
        let mut seq = Sequence::new(vec![1.0, 2.0]).unwrap();
        seq.apply(&Step::Swap(0, 5));
    }

    #[test]
    fn max_value_of_empty_is_none() {
        assert_eq!(Sequence::default().max_value(), None);
        let seq = Sequence::new(vec![4.0, 12.0, 7.0]).unwrap();
        assert_eq!(seq.max_value(), Some(12.0));
    }
}
