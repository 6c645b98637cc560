//! Chroma vector extraction
//!
//! Converts audio samples to 12-element chroma vectors via a Hann-windowed
//! STFT. Each magnitude bin inside the configured frequency band is mapped
//! to its nearest pitch class and accumulated.

use rustfft::{num_complex::Complex, FftPlanner};

use super::{ChromaVector, PITCH_CLASSES};
use crate::error::AnalysisError;

/// Extract chroma vectors from audio samples
///
/// Frames of `frame_size` samples are advanced by `hop_size` and windowed
/// with a Hann window before the forward FFT. Spectral magnitudes between
/// `min_frequency` and `max_frequency` accumulate into the pitch class
/// nearest to their bin frequency.
///
/// # Arguments
///
/// * `samples` - Mono audio samples
/// * `sample_rate` - Sample rate in Hz
/// * `frame_size` - FFT frame size (e.g., 4096)
/// * `hop_size` - Hop size between frames (e.g., 512)
/// * `min_frequency` - Lowest frequency contributing to the chroma
/// * `max_frequency` - Highest frequency contributing to the chroma
///
/// # Returns
///
/// One chroma vector per frame, in time order
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` for a zero sample rate or a
/// degenerate frame/hop configuration, and `AnalysisError::ProcessingError`
/// when the audio is too short to fill a single analysis frame.
pub fn extract_chroma(
    samples: &[f32],
    sample_rate: u32,
    frame_size: usize,
    hop_size: usize,
    min_frequency: f32,
    max_frequency: f32,
) -> Result<Vec<ChromaVector>, AnalysisError> {
    if sample_rate == 0 {
        return Err(AnalysisError::InvalidInput("Invalid sample rate".to_string()));
    }
    if frame_size == 0 || hop_size == 0 {
        return Err(AnalysisError::InvalidInput(format!(
            "frame_size and hop_size must be non-zero, got {} and {}",
            frame_size, hop_size
        )));
    }
    if samples.len() < frame_size {
        return Err(AnalysisError::ProcessingError(format!(
            "audio too short for a single analysis frame: {} samples, frame size {}",
            samples.len(),
            frame_size
        )));
    }

    let frame_count = (samples.len() - frame_size) / hop_size + 1;
    log::debug!(
        "Extracting chroma: {} samples at {} Hz -> {} frames (frame={}, hop={})",
        samples.len(),
        sample_rate,
        frame_count,
        frame_size,
        hop_size
    );

    let window = hann_window(frame_size);
    let bin_classes = bin_pitch_classes(frame_size, sample_rate, min_frequency, max_frequency);

    let mut planner = FftPlanner::<f32>::new();
    let fft = planner.plan_fft_forward(frame_size);
    let mut buffer = vec![Complex { re: 0.0f32, im: 0.0f32 }; frame_size];

    let mut chroma_vectors = Vec::with_capacity(frame_count);
    for frame_idx in 0..frame_count {
        let start = frame_idx * hop_size;
        for (i, slot) in buffer.iter_mut().enumerate() {
            *slot = Complex {
                re: samples[start + i] * window[i],
                im: 0.0,
            };
        }
        fft.process(&mut buffer);

        let mut chroma: ChromaVector = [0.0; PITCH_CLASSES];
        for (bin, class) in bin_classes.iter().enumerate() {
            if let Some(pc) = class {
                chroma[*pc] += buffer[bin].norm();
            }
        }
        chroma_vectors.push(chroma);
    }

    Ok(chroma_vectors)
}

/// Hann window of length `n`
fn hann_window(n: usize) -> Vec<f32> {
    use std::f32::consts::PI;
    (0..n)
        .map(|i| 0.5 - 0.5 * (2.0 * PI * i as f32 / n as f32).cos())
        .collect()
}

/// Precompute the pitch class of every FFT bin up to Nyquist
///
/// Bins outside `[min_frequency, max_frequency]` (including the DC bin) map
/// to `None` and do not contribute. The mapping follows the equal-tempered
/// semitone scale referenced to A4 = 440 Hz.
fn bin_pitch_classes(
    frame_size: usize,
    sample_rate: u32,
    min_frequency: f32,
    max_frequency: f32,
) -> Vec<Option<usize>> {
    let mut classes = vec![None; frame_size / 2 + 1];
    for (bin, class) in classes.iter_mut().enumerate().skip(1) {
        let freq = bin as f32 * sample_rate as f32 / frame_size as f32;
        if freq >= min_frequency && freq <= max_frequency {
            *class = Some(pitch_class_of(freq));
        }
    }
    classes
}

/// Map a frequency to its nearest pitch class (0 = C, ..., 11 = B)
fn pitch_class_of(freq: f32) -> usize {
    let midi = 69.0 + 12.0 * (freq / 440.0).log2();
    (midi.round() as i32).rem_euclid(12) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pitch_class_of_reference_notes() {
        assert_eq!(pitch_class_of(440.0), 9); // A4
        assert_eq!(pitch_class_of(261.63), 0); // C4
        assert_eq!(pitch_class_of(329.63), 4); // E4
        assert_eq!(pitch_class_of(392.00), 7); // G4
        assert_eq!(pitch_class_of(880.0), 9); // A5, octave equivalence
    }

    #[test]
    fn test_extract_chroma_sine_concentrates_energy() {
        // 1 second of A4 at 44.1 kHz
        let sample_rate = 44100;
        let samples: Vec<f32> = (0..sample_rate)
            .map(|i| (2.0 * std::f32::consts::PI * 440.0 * i as f32 / sample_rate as f32).sin())
            .collect();

        let chroma = extract_chroma(&samples, sample_rate as u32, 4096, 512, 65.41, 2093.0)
            .expect("extraction should succeed");
        assert!(!chroma.is_empty());

        // Pitch class A should dominate every frame
        for frame in &chroma {
            let max_class = frame
                .iter()
                .enumerate()
                .max_by(|a, b| a.1.partial_cmp(b.1).unwrap())
                .map(|(i, _)| i)
                .unwrap();
            assert_eq!(max_class, 9, "expected A to dominate, got class {}", max_class);
        }
    }

    #[test]
    fn test_extract_chroma_frame_count() {
        let samples = vec![0.0f32; 4096 + 512 * 9];
        let chroma = extract_chroma(&samples, 44100, 4096, 512, 65.41, 2093.0).unwrap();
        assert_eq!(chroma.len(), 10);
    }

    #[test]
    fn test_extract_chroma_too_short() {
        let samples = vec![0.0f32; 1024];
        let result = extract_chroma(&samples, 44100, 4096, 512, 65.41, 2093.0);
        assert!(matches!(result, Err(AnalysisError::ProcessingError(_))));
    }

    #[test]
    fn test_extract_chroma_zero_sample_rate() {
        let samples = vec![0.0f32; 8192];
        let result = extract_chroma(&samples, 0, 4096, 512, 65.41, 2093.0);
        assert!(matches!(result, Err(AnalysisError::InvalidInput(_))));
    }
}
