//! sentra-complaint
//!
//! Free-text chief-complaint analysis: symptom extraction with negation
//! handling, duration parsing, acuity grading, differential ranking, and
//! follow-up question suggestion.
//!
//! The medical content lives in declarative tables ([`lexicon`],
//! [`differentials`], [`questions`]) consulted by a single matching pass in
//! [`analyzer`]. The whole crate is pure: no I/O, no async, and
//! [`analyze`] never panics regardless of input.

pub mod analyzer;
pub mod differentials;
pub mod duration;
pub mod lexicon;
pub mod questions;

pub use analyzer::analyze;
