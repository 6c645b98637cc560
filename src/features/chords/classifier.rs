//! Per-frame chord classification
//!
//! Scores each chroma frame against the 24 triad templates by cosine
//! similarity and selects the best match.

use super::templates::ChordTemplates;
use crate::error::AnalysisError;
use crate::features::chroma::ChromaVector;

/// Guard against division by zero when normalizing silent frames
const NORM_EPSILON: f32 = 1e-6;

/// Classify each chroma frame against the template bank
///
/// Every frame is L2-normalized (with an epsilon guard, so all-silent
/// frames are valid input) and scored against all 24 templates by dot
/// product. Since the templates are unit-norm this is cosine similarity.
/// The best-scoring template's bank index is emitted per frame; an exact
/// tie resolves to the lowest bank index.
///
/// # Arguments
///
/// * `chroma_vectors` - One 12-element chroma vector per frame
/// * `templates` - Triad template bank
///
/// # Returns
///
/// One bank index (0-23) per input frame, same length and order
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` if `chroma_vectors` is empty.
/// Frame content never fails: an all-zero frame yields near-zero scores
/// and the deterministic tie-broken choice.
pub fn classify_frames(
    chroma_vectors: &[ChromaVector],
    templates: &ChordTemplates,
) -> Result<Vec<usize>, AnalysisError> {
    if chroma_vectors.is_empty() {
        return Err(AnalysisError::InvalidInput(
            "Empty chroma vectors".to_string(),
        ));
    }

    log::debug!("Classifying {} chroma frames", chroma_vectors.len());

    let labels = chroma_vectors
        .iter()
        .map(|frame| classify_frame(frame, templates))
        .collect();
    Ok(labels)
}

/// Classify a single frame, returning the winning bank index
fn classify_frame(frame: &ChromaVector, templates: &ChordTemplates) -> usize {
    let norm = frame.iter().map(|&x| x * x).sum::<f32>().sqrt() + NORM_EPSILON;

    let mut normalized = *frame;
    for x in normalized.iter_mut() {
        *x /= norm;
    }

    // First-seen maximum: ties resolve to the lowest bank index
    let mut best_index = 0;
    let mut best_score = dot_product(&normalized, templates.get(0));
    for (index, template) in templates.vectors().iter().enumerate().skip(1) {
        let score = dot_product(&normalized, template);
        if score > best_score {
            best_index = index;
            best_score = score;
        }
    }
    best_index
}

/// Compute dot product between two chroma vectors
fn dot_product(a: &ChromaVector, b: &ChromaVector) -> f32 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}
