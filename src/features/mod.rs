//! Feature extraction modules
//!
//! This module contains the feature pipeline:
//! - Chroma extraction (samples -> pitch-class energy vectors)
//! - Chord classification (chroma -> time-aligned chord segments)

pub mod chords;
pub mod chroma;
