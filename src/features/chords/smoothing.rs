//! Temporal label smoothing
//!
//! Replaces each frame's raw chord label with the most frequent label in a
//! centered local window, damping single-frame flicker from transient or
//! noisy chroma without requiring a probabilistic model.

use super::templates::CHORD_COUNT;
use crate::error::AnalysisError;

/// Smooth a raw label sequence with a centered mode filter
///
/// For each index `i` the window is `[max(0, i - w/2), min(T, i + w/2 + 1))`
/// with `w = window` — truncated at the sequence boundaries, never wrapped,
/// so edge windows are shorter. The mode is always taken over the *raw*
/// labels: smoothing is independent per position, not a running filter.
/// A count tie resolves to the smallest bank index present in the window.
///
/// # Arguments
///
/// * `labels` - Raw per-frame bank indices (0-23)
/// * `window` - Window size in frames; must be an odd integer >= 1
///
/// # Returns
///
/// Smoothed label sequence, same length as the input
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` if `labels` is empty, `window` is
/// zero or even, or any label is outside the template bank.
pub fn smooth_labels(labels: &[usize], window: usize) -> Result<Vec<usize>, AnalysisError> {
    if labels.is_empty() {
        return Err(AnalysisError::InvalidInput(
            "Empty label sequence".to_string(),
        ));
    }
    if window == 0 || window % 2 == 0 {
        return Err(AnalysisError::InvalidInput(format!(
            "smoothing window must be an odd integer >= 1, got {}",
            window
        )));
    }
    if let Some(&bad) = labels.iter().find(|&&l| l >= CHORD_COUNT) {
        return Err(AnalysisError::InvalidInput(format!(
            "label index {} out of template bank range",
            bad
        )));
    }

    log::debug!(
        "Smoothing {} labels with window size {}",
        labels.len(),
        window
    );

    let pad = window / 2;
    let mut smoothed = Vec::with_capacity(labels.len());

    for i in 0..labels.len() {
        let start = i.saturating_sub(pad);
        let end = (i + pad + 1).min(labels.len());

        let mut counts = [0usize; CHORD_COUNT];
        for &label in &labels[start..end] {
            counts[label] += 1;
        }

        // First-seen maximum over bank-ordered counts: a tie resolves to
        // the smallest bank index present in the window
        let mut best_label = 0;
        let mut best_count = counts[0];
        for (label, &count) in counts.iter().enumerate().skip(1) {
            if count > best_count {
                best_label = label;
                best_count = count;
            }
        }
        smoothed.push(best_label);
    }

    Ok(smoothed)
}
