//! Chord classification modules
//!
//! Turn a chroma matrix into a time-aligned chord annotation:
//! - Triad template bank (12 major + 12 minor)
//! - Per-frame template matching
//! - Temporal label smoothing
//! - Segment formation and short-segment merging

pub mod classifier;
pub mod segmentation;
pub mod smoothing;
pub mod templates;

pub use classifier::classify_frames;
pub use segmentation::{merge_segments, segment_labels};
pub use smoothing::smooth_labels;
pub use templates::{ChordTemplates, CHORD_COUNT};
