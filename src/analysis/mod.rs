//! Analysis result types
//!
//! Output vocabulary of the chord analysis pipeline:
//! - Chord labels
//! - Time-aligned segments
//! - Result metadata

pub mod result;
