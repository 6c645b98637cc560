//! Segment formation and merging
//!
//! Converts a smoothed per-frame label sequence plus frame timestamps into
//! contiguous labeled intervals, then collapses segments shorter than a
//! minimum duration into their neighbors.

use crate::analysis::result::{Chord, ChordSegment};
use crate::error::AnalysisError;

/// Group consecutive frames with the same label into provisional segments
///
/// A segment opens at frame 0 and closes whenever the label changes; the
/// closing frame's timestamp is both the end of the old segment and the
/// start of the new one, so segments partition the time range with no gaps
/// or overlaps. The final segment ends at the *start* time of the last
/// frame (no end-of-audio time is threaded through). A single-frame input
/// yields one segment with equal start and end times.
///
/// # Arguments
///
/// * `labels` - Smoothed per-frame bank indices (0-23)
/// * `times` - Per-frame start times in seconds, same length as `labels`
///
/// # Returns
///
/// Ordered provisional segments covering `[times[0], times[T-1]]`
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` if the sequences are empty, their
/// lengths differ, or a label is outside the template bank.
pub fn segment_labels(
    labels: &[usize],
    times: &[f32],
) -> Result<Vec<ChordSegment>, AnalysisError> {
    if labels.is_empty() {
        return Err(AnalysisError::InvalidInput(
            "Empty label sequence".to_string(),
        ));
    }
    if labels.len() != times.len() {
        return Err(AnalysisError::InvalidInput(format!(
            "label/time length mismatch: {} labels, {} timestamps",
            labels.len(),
            times.len()
        )));
    }

    let mut segments = Vec::new();
    let mut current_label = labels[0];
    let mut start_time = times[0];

    for i in 1..labels.len() {
        if labels[i] != current_label {
            segments.push(make_segment(current_label, start_time, times[i])?);
            current_label = labels[i];
            start_time = times[i];
        }
    }
    segments.push(make_segment(
        current_label,
        start_time,
        times[labels.len() - 1],
    )?);

    log::debug!(
        "Segmented {} frames into {} provisional segments",
        labels.len(),
        segments.len()
    );

    Ok(segments)
}

/// Collapse short segments into their neighbors
///
/// Single left-to-right pass with an accumulator. A segment is absorbed
/// into the previously accumulated one — extending its end time — when it
/// carries the same label, or when its own duration falls below
/// `min_duration` regardless of label. The duration test always uses the
/// incoming segment's own length, so a chain of short segments collapses
/// into one. Absorbing an off-label blip between two same-label runs makes
/// the runs adjacent, and the same-label rule then merges them too.
///
/// The output still partitions the input time range and never grows.
pub fn merge_segments(segments: Vec<ChordSegment>, min_duration: f32) -> Vec<ChordSegment> {
    let input_len = segments.len();
    let mut merged: Vec<ChordSegment> = Vec::with_capacity(input_len);

    for segment in segments {
        match merged.last_mut() {
            Some(prev) if segment.label == prev.label || segment.duration() < min_duration => {
                prev.end_sec = segment.end_sec;
            }
            _ => merged.push(segment),
        }
    }

    log::debug!(
        "Merged {} provisional segments into {} (min duration {:.2}s)",
        input_len,
        merged.len(),
        min_duration
    );

    merged
}

fn make_segment(label: usize, start_sec: f32, end_sec: f32) -> Result<ChordSegment, AnalysisError> {
    let chord = Chord::from_index(label).ok_or_else(|| {
        AnalysisError::InvalidInput(format!(
            "label index {} out of template bank range",
            label
        ))
    })?;
    Ok(ChordSegment {
        label: chord.name(),
        start_sec,
        end_sec,
    })
}
