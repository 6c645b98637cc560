//! Chroma feature modules
//!
//! Extract pitch-class distribution (12 semitones) from audio:
//! - STFT-based chroma vector computation
//! - Frame-to-time mapping

pub mod extractor;
pub mod timing;

pub use extractor::extract_chroma;
pub use timing::frames_to_time;

/// Number of pitch classes per octave (C, C#, ..., B)
pub const PITCH_CLASSES: usize = 12;

/// Pitch-class energy vector for one analysis frame
///
/// Index 0 is C, ascending chromatically to index 11 (B). Entries are
/// non-negative energies.
pub type ChromaVector = [f32; PITCH_CLASSES];
