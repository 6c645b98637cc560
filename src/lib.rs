//! # Chordscribe
//!
//! Chroma-based chord recognition: turns an audio recording into a compact,
//! time-aligned sequence of major/minor chord labels (e.g., "C", "D#m").
//!
//! ## Features
//!
//! - **Template matching**: 24 unit-norm triad templates scored per frame by
//!   cosine similarity
//! - **Temporal smoothing**: centered mode filter damping frame-to-frame
//!   label flicker
//! - **Segment merging**: short-segment suppression yielding a clean,
//!   contiguous chord timeline
//!
//! ## Quick Start
//!
//! ```no_run
//! use chordscribe::{analyze_audio, AnalysisConfig};
//!
//! // Load audio samples (mono, f32, normalized)
//! let samples: Vec<f32> = vec![]; // Your audio data
//! let sample_rate = 44100;
//!
//! let analysis = analyze_audio(&samples, sample_rate, AnalysisConfig::default())?;
//! for segment in &analysis.segments {
//!     println!("{:7.2}s - {:7.2}s  {}", segment.start_sec, segment.end_sec, segment.label);
//! }
//! # Ok::<(), chordscribe::AnalysisError>(())
//! ```
//!
//! ## Architecture
//!
//! The analysis pipeline follows this flow:
//!
//! ```text
//! Audio Input → Chroma Extraction → Frame Classification → Smoothing → Segmentation → Merging
//! ```
//!
//! The chroma-to-segments core is pure and sample-rate agnostic: callers
//! with their own chroma front-end can use [`detect_chords`] directly.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod features;

// Re-export main types
pub use analysis::result::{AnalysisMetadata, Chord, ChordAnalysis, ChordSegment};
pub use config::AnalysisConfig;
pub use error::AnalysisError;
pub use features::chroma::ChromaVector;

use features::chords::{
    classify_frames, merge_segments, segment_labels, smooth_labels, ChordTemplates,
};

/// Detect chords from a chroma matrix
///
/// The pure analysis core: no I/O, no shared state, deterministic for a
/// given input. Classifies every frame against the triad template bank,
/// smooths the label sequence, forms contiguous segments from the frame
/// timestamps, and merges segments shorter than the configured minimum
/// duration. The returned segments partition `[times[0], times[T-1]]`.
///
/// # Arguments
///
/// * `chroma_vectors` - One 12-element chroma vector per frame
/// * `times` - Per-frame start times in seconds, same length as the chroma
/// * `config` - Analysis configuration (smoothing window, merge threshold)
///
/// # Returns
///
/// Merged, time-aligned chord segments
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` for an empty chroma matrix, a
/// frame-count mismatch between chroma and timestamps (the input is never
/// truncated or padded), or an invalid configuration.
///
/// # Example
///
/// ```
/// use chordscribe::{detect_chords, AnalysisConfig};
///
/// // Ten frames of an ideal C major chroma (C, E, G energized)
/// let mut frame = [0.0f32; 12];
/// frame[0] = 1.0;
/// frame[4] = 1.0;
/// frame[7] = 1.0;
/// let chroma = vec![frame; 10];
/// let times: Vec<f32> = (0..10).map(|i| i as f32 * 0.1).collect();
///
/// let segments = detect_chords(&chroma, &times, &AnalysisConfig::default())?;
/// assert_eq!(segments.len(), 1);
/// assert_eq!(segments[0].label, "C");
/// # Ok::<(), chordscribe::AnalysisError>(())
/// ```
pub fn detect_chords(
    chroma_vectors: &[ChromaVector],
    times: &[f32],
    config: &AnalysisConfig,
) -> Result<Vec<ChordSegment>, AnalysisError> {
    config.validate()?;

    if chroma_vectors.is_empty() {
        return Err(AnalysisError::InvalidInput(
            "Empty chroma matrix (zero frames)".to_string(),
        ));
    }
    if chroma_vectors.len() != times.len() {
        return Err(AnalysisError::InvalidInput(format!(
            "frame count mismatch: {} chroma frames, {} timestamps",
            chroma_vectors.len(),
            times.len()
        )));
    }

    log::debug!(
        "Detecting chords over {} frames (window={}, min_duration={:.2}s)",
        chroma_vectors.len(),
        config.smoothing_window,
        config.min_segment_duration
    );

    let templates = ChordTemplates::new();
    let raw_labels = classify_frames(chroma_vectors, &templates)?;
    let smoothed = smooth_labels(&raw_labels, config.smoothing_window)?;
    let segments = segment_labels(&smoothed, times)?;
    Ok(merge_segments(segments, config.min_segment_duration))
}

/// Analyze audio samples and return the chord annotation
///
/// Extracts STFT chroma from the samples, derives the frame-to-time
/// mapping from the hop configuration, and runs [`detect_chords`]. The
/// result carries metadata (duration, frame count, processing time).
///
/// # Arguments
///
/// * `samples` - Mono audio samples, normalized to [-1.0, 1.0]
/// * `sample_rate` - Sample rate in Hz (typically 44100 or 48000)
/// * `config` - Analysis configuration parameters
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` for empty samples, a zero sample
/// rate, or an invalid configuration, and `AnalysisError::ProcessingError`
/// when the audio is too short to fill a single analysis frame.
pub fn analyze_audio(
    samples: &[f32],
    sample_rate: u32,
    config: AnalysisConfig,
) -> Result<ChordAnalysis, AnalysisError> {
    use std::time::Instant;
    let start_time = Instant::now();

    log::debug!(
        "Starting chord analysis: {} samples at {} Hz",
        samples.len(),
        sample_rate
    );

    if samples.is_empty() {
        return Err(AnalysisError::InvalidInput(
            "Empty audio samples".to_string(),
        ));
    }
    if sample_rate == 0 {
        return Err(AnalysisError::InvalidInput("Invalid sample rate".to_string()));
    }
    config.validate()?;

    let chroma_vectors = features::chroma::extract_chroma(
        samples,
        sample_rate,
        config.frame_size,
        config.hop_size,
        config.min_frequency,
        config.max_frequency,
    )?;
    let times = features::chroma::frames_to_time(chroma_vectors.len(), sample_rate, config.hop_size);
    let segments = detect_chords(&chroma_vectors, &times, &config)?;

    let processing_time_ms = start_time.elapsed().as_secs_f32() * 1000.0;
    log::debug!(
        "Chord analysis complete: {} segments in {:.2} ms",
        segments.len(),
        processing_time_ms
    );

    Ok(ChordAnalysis {
        segments,
        metadata: AnalysisMetadata {
            duration_seconds: samples.len() as f32 / sample_rate as f32,
            sample_rate,
            frame_count: chroma_vectors.len(),
            processing_time_ms,
            algorithm_version: env!("CARGO_PKG_VERSION").to_string(),
        },
    })
}
