//! The five supported comparison sorts.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// Algorithm selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Algorithm {
    /// Adjacent-pair passes, no early exit.
    #[default]
    Bubble,
    /// Minimum/maximum selection per position.
    Selection,
    /// Shift-based insertion.
    Insertion,
    /// Top-down recursive merge.
    Merge,
    /// Lomuto partition, last element as pivot.
    Quick,
}

impl Algorithm {
    /// Every selector, in menu order.
    pub const ALL: [Self; 5] = [
        Self::Bubble,
        Self::Selection,
        Self::Insertion,
        Self::Merge,
        Self::Quick,
    ];

    /// Stable identifier used by control surfaces and config files.
    pub fn name(self) -> &'static str {
        match self {
            Self::Bubble => "bubble",
            Self::Selection => "selection",
            Self::Insertion => "insertion",
            Self::Merge => "merge",
            Self::Quick => "quick",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Bubble => "Bubble Sort",
            Self::Selection => "Selection Sort",
            Self::Insertion => "Insertion Sort",
            Self::Merge => "Merge Sort",
            Self::Quick => "Quick Sort",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|a| a.name() == needle)
            .ok_or_else(|| ParseError {
                what: "algorithm",
                input: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_from_str() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.name().parse::<Algorithm>(), Ok(algorithm));
            assert_eq!(algorithm.to_string(), algorithm.name());
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(" Quick ".parse::<Algorithm>(), Ok(Algorithm::Quick));
    }

    #[test]
    fn parse_rejects_unknown() {
        let err = "heap".parse::<Algorithm>().unwrap_err();
        assert_eq!(err.input(), "heap");
    }
}
