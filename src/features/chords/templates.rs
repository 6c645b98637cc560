//! Triad chord templates
//!
//! Defines reference chroma profiles for 24 chords (12 major + 12 minor
//! triads), one per root pitch class.

use crate::features::chroma::{ChromaVector, PITCH_CLASSES};

/// Total number of chord templates (12 major + 12 minor)
pub const CHORD_COUNT: usize = 24;

/// Major triad intervals in semitones: root, major third, perfect fifth
const MAJOR_TRIAD: [usize; 3] = [0, 4, 7];

/// Minor triad intervals in semitones: root, minor third, perfect fifth
const MINOR_TRIAD: [usize; 3] = [0, 3, 7];

/// Chord templates for all 24 triads
///
/// Bank order matches [`crate::Chord::index`]: major triads with roots
/// ascending from C occupy positions 0-11, minor triads positions 12-23.
/// Each template is a unit-norm chroma vector with the triad's three pitch
/// classes set before normalization.
#[derive(Debug, Clone)]
pub struct ChordTemplates {
    vectors: [ChromaVector; CHORD_COUNT],
}

impl ChordTemplates {
    /// Build the template bank
    ///
    /// Deterministic and infallible: templates are computed once per
    /// instance and never mutated.
    pub fn new() -> Self {
        let mut vectors = [[0.0f32; PITCH_CLASSES]; CHORD_COUNT];

        for root in 0..PITCH_CLASSES {
            vectors[root] = triad_template(root, &MAJOR_TRIAD);
        }
        for root in 0..PITCH_CLASSES {
            vectors[PITCH_CLASSES + root] = triad_template(root, &MINOR_TRIAD);
        }

        Self { vectors }
    }

    /// Get the template at a bank position (0-23)
    pub fn get(&self, index: usize) -> &ChromaVector {
        &self.vectors[index]
    }

    /// All templates in bank order
    pub fn vectors(&self) -> &[ChromaVector; CHORD_COUNT] {
        &self.vectors
    }
}

impl Default for ChordTemplates {
    fn default() -> Self {
        Self::new()
    }
}

/// Build one unit-norm triad template rooted at `root`
///
/// The norm is computed, not hard-coded, so the construction stays correct
/// if the interval sets ever change shape.
fn triad_template(root: usize, intervals: &[usize]) -> ChromaVector {
    let mut template = [0.0f32; PITCH_CLASSES];
    for &offset in intervals {
        template[(root + offset) % PITCH_CLASSES] = 1.0;
    }

    let norm = template.iter().map(|&x| x * x).sum::<f32>().sqrt();
    for x in template.iter_mut() {
        *x /= norm;
    }
    template
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::result::Chord;

    #[test]
    fn test_templates_are_unit_norm() {
        let templates = ChordTemplates::new();
        for (i, template) in templates.vectors().iter().enumerate() {
            let norm = template.iter().map(|&x| x * x).sum::<f32>().sqrt();
            assert!(
                (norm - 1.0).abs() < 1e-6,
                "template {} has norm {}",
                i,
                norm
            );
        }
    }

    #[test]
    fn test_templates_have_three_active_classes() {
        let templates = ChordTemplates::new();
        for (i, template) in templates.vectors().iter().enumerate() {
            let active = template.iter().filter(|&&x| x > 0.0).count();
            assert_eq!(active, 3, "template {} has {} active classes", i, active);
        }
    }

    #[test]
    fn test_c_major_template_pitch_classes() {
        let templates = ChordTemplates::new();
        let c_major = templates.get(Chord::Major(0).index());
        let expected = 1.0 / 3.0f32.sqrt();
        for (pc, &value) in c_major.iter().enumerate() {
            if pc == 0 || pc == 4 || pc == 7 {
                assert!((value - expected).abs() < 1e-6);
            } else {
                assert_eq!(value, 0.0);
            }
        }
    }

    #[test]
    fn test_a_minor_template_pitch_classes() {
        let templates = ChordTemplates::new();
        let a_minor = templates.get(Chord::Minor(9).index());
        // A minor: A (9), C (0), E (4)
        for (pc, &value) in a_minor.iter().enumerate() {
            if pc == 9 || pc == 0 || pc == 4 {
                assert!(value > 0.0);
            } else {
                assert_eq!(value, 0.0);
            }
        }
    }

    #[test]
    fn test_bank_order_roots_ascend() {
        let templates = ChordTemplates::new();
        for root in 0..PITCH_CLASSES {
            assert!(templates.get(root)[root] > 0.0);
            assert!(templates.get(PITCH_CLASSES + root)[root] > 0.0);
        }
    }
}
