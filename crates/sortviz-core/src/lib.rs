#![forbid(unsafe_code)]

//! Trace generation for animated comparison sorts.
//!
//! Every algorithm runs over a private working copy of the input and records
//! an ordered [`Trace`] of [`Step`]s (compare, swap, set). The trace carries
//! no timing or rendering concerns; replaying it against a copy of the input
//! reproduces the algorithm's sorted output exactly.
//!
//! # Example
//!
//! ```
//! use sortviz_core::{generate, Algorithm, Ordering, Sequence};
//!
//! let input = Sequence::new(vec![5.0, 3.0, 8.0, 1.0]).unwrap();
//! let trace = generate(Algorithm::Bubble, &input, Ordering::Ascending);
//! assert_eq!(trace.replay(input.values()), vec![1.0, 3.0, 5.0, 8.0]);
//! ```

pub mod algorithm;
pub mod error;
pub mod generator;
pub mod ordering;
pub mod sequence;
pub mod shuffle;
pub mod step;

pub use algorithm::Algorithm;
pub use error::{ParseError, SequenceError};
pub use generator::generate;
pub use ordering::Ordering;
pub use sequence::Sequence;
pub use shuffle::shuffle_trace;
pub use step::{Step, StepCounts, Trace, TraceKind};
