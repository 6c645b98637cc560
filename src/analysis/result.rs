//! Analysis result types

use serde::{Deserialize, Serialize};

/// Musical chord (major or minor triad)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Chord {
    /// Major triad (0 = C, 1 = C#, ..., 11 = B)
    Major(u32),
    /// Minor triad (0 = Cm, 1 = C#m, ..., 11 = Bm)
    Minor(u32),
}

impl Chord {
    /// Get the chord name in musical notation (e.g., "C", "D#m")
    ///
    /// Returns standard shorthand:
    /// - Major triads: root name only (e.g., "C", "F#")
    /// - Minor triads: root name + "m" (e.g., "Cm", "D#m")
    ///
    /// # Example
    ///
    /// ```
    /// use chordscribe::Chord;
    ///
    /// assert_eq!(Chord::Major(0).name(), "C");
    /// assert_eq!(Chord::Major(6).name(), "F#");
    /// assert_eq!(Chord::Minor(9).name(), "Am");
    /// assert_eq!(Chord::Minor(3).name(), "D#m");
    /// ```
    pub fn name(&self) -> String {
        let note_names = [
            "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
        ];
        match self {
            Chord::Major(i) => note_names[*i as usize % 12].to_string(),
            Chord::Minor(i) => format!("{}m", note_names[*i as usize % 12]),
        }
    }

    /// Get the chord's position in template-bank order
    ///
    /// Bank order is the 12 major triads with roots ascending from C,
    /// followed by the 12 minor triads with roots ascending from C.
    pub fn index(&self) -> usize {
        match self {
            Chord::Major(i) => *i as usize % 12,
            Chord::Minor(i) => 12 + *i as usize % 12,
        }
    }

    /// Get the chord at a template-bank position
    ///
    /// Inverse of [`Chord::index`]. Returns `None` for positions >= 24.
    ///
    /// # Example
    ///
    /// ```
    /// use chordscribe::Chord;
    ///
    /// assert_eq!(Chord::from_index(0), Some(Chord::Major(0)));
    /// assert_eq!(Chord::from_index(12), Some(Chord::Minor(0)));
    /// assert_eq!(Chord::from_index(24), None);
    /// ```
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0..=11 => Some(Chord::Major(index as u32)),
            12..=23 => Some(Chord::Minor((index - 12) as u32)),
            _ => None,
        }
    }
}

/// A maximal contiguous time interval assigned a single chord label
///
/// Segments partition the analyzed time range: each segment's end time
/// equals the next segment's start time. Serialized as
/// `{"label": ..., "startSec": ..., "endSec": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChordSegment {
    /// Chord label (e.g., "C", "D#m")
    pub label: String,

    /// Segment start time in seconds
    pub start_sec: f32,

    /// Segment end time in seconds
    pub end_sec: f32,
}

impl ChordSegment {
    /// Segment duration in seconds
    pub fn duration(&self) -> f32 {
        self.end_sec - self.start_sec
    }
}

/// Complete chord analysis result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChordAnalysis {
    /// Merged, time-aligned chord segments covering the analyzed range
    pub segments: Vec<ChordSegment>,

    /// Analysis metadata
    pub metadata: AnalysisMetadata,
}

/// Analysis metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisMetadata {
    /// Audio duration in seconds
    pub duration_seconds: f32,

    /// Sample rate in Hz
    pub sample_rate: u32,

    /// Number of chroma frames analyzed
    pub frame_count: usize,

    /// Processing time in milliseconds
    pub processing_time_ms: f32,

    /// Algorithm version
    pub algorithm_version: String,
}
