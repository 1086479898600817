//! Sort direction and the shared comparator.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// Direction of a sort run. Fixed for the lifetime of one trace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Ordering {
    #[default]
    Ascending,
    Descending,
}

impl Ordering {
    /// The comparator every algorithm shares.
    ///
    /// Returns `true` when `a` must come after `b`: `a > b` ascending,
    /// `a < b` descending. Equal values never swap.
    #[inline]
    #[must_use]
    pub fn should_swap(self, a: f64, b: f64) -> bool {
        match self {
            Self::Ascending => a > b,
            Self::Descending => a < b,
        }
    }

    /// The opposite direction.
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Whether `values` is non-decreasing (ascending) or non-increasing
    /// (descending).
    #[must_use]
    pub fn is_sorted(self, values: &[f64]) -> bool {
        values.windows(2).all(|w| !self.should_swap(w[0], w[1]))
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Ascending => "Ascending",
            Self::Descending => "Descending",
        }
    }
}

impl fmt::Display for Ordering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        })
    }
}

impl FromStr for Ordering {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ascending" | "asc" => Ok(Self::Ascending),
            "descending" | "desc" => Ok(Self::Descending),
            _ => Err(ParseError {
                what: "ordering",
                input: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comparator_sense_follows_direction() {
        assert!(Ordering::Ascending.should_swap(2.0, 1.0));
        assert!(!Ordering::Ascending.should_swap(1.0, 2.0));
        assert!(Ordering::Descending.should_swap(1.0, 2.0));
        assert!(!Ordering::Descending.should_swap(2.0, 1.0));
    }

    #[test]
    fn equal_values_never_swap() {
        assert!(!Ordering::Ascending.should_swap(4.0, 4.0));
        assert!(!Ordering::Descending.should_swap(4.0, 4.0));
    }

    #[test]
    fn is_sorted_accepts_ties() {
        assert!(Ordering::Ascending.is_sorted(&[1.0, 1.0, 2.0]));
        assert!(Ordering::Descending.is_sorted(&[3.0, 3.0, 1.0]));
        assert!(!Ordering::Ascending.is_sorted(&[2.0, 1.0]));
        assert!(Ordering::Ascending.is_sorted(&[]));
    }

    #[test]
    fn toggle_round_trips() {
        assert_eq!(Ordering::Ascending.toggle(), Ordering::Descending);
        assert_eq!(Ordering::Ascending.toggle().toggle(), Ordering::Ascending);
    }

    #[test]
    fn parse_accepts_short_forms() {
        assert_eq!("ASC".parse::<Ordering>(), Ok(Ordering::Ascending));
        assert_eq!("descending".parse::<Ordering>(), Ok(Ordering::Descending));
        assert!("sideways".parse::<Ordering>().is_err());
    }
}
