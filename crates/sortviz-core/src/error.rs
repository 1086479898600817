//! Error types for sequence construction and selector parsing.

use std::fmt;

/// Rejected input for a [`Sequence`](crate::Sequence).
#[derive(Debug, Clone, PartialEq)]
pub enum SequenceError {
    /// A value was NaN or infinite.
    NonFinite {
        /// Position of the offending value.
        index: usize,
        /// The offending value.
        value: f64,
    },
    /// The value range for random generation was empty.
    EmptyRange {
        /// Lower bound.
        min: u32,
        /// Upper bound.
        max: u32,
    },
}

impl fmt::Display for SequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite { index, value } => {
                write!(f, "non-finite value {value} at index {index}")
            }
            Self::EmptyRange { min, max } => {
                write!(f, "empty value range {min}..={max}")
            }
        }
    }
}

impl std::error::Error for SequenceError {}

/// Failed to parse an [`Algorithm`](crate::Algorithm) or [`Ordering`](crate::Ordering)
/// selector from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub(crate) what: &'static str,
    pub(crate) input: String,
}

impl ParseError {
    /// The kind of selector that failed to parse.
    pub fn what(&self) -> &'static str {
        self.what
    }

    /// The rejected input.
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {}: {:?}", self.what, self.input)
    }
}

impl std::error::Error for ParseError {}
