//! Configuration parameters for chord analysis

use crate::error::AnalysisError;

/// Chord analysis configuration parameters
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    // Temporal smoothing
    /// Smoothing window size in frames (default: 9)
    /// Must be an odd integer >= 1; each frame's label is replaced by the
    /// most frequent label in a centered window of this many frames
    pub smoothing_window: usize,

    // Segment merging
    /// Minimum segment duration in seconds (default: 0.30)
    /// Segments shorter than this are absorbed into the preceding segment
    pub min_segment_duration: f32,

    // STFT parameters (chroma extraction)
    /// Frame size for STFT (default: 4096)
    pub frame_size: usize,

    /// Hop size for STFT (default: 512)
    pub hop_size: usize,

    // Chroma band limits
    /// Lowest frequency mapped into the chroma vector (default: 65.41 Hz, C2)
    pub min_frequency: f32,

    /// Highest frequency mapped into the chroma vector (default: 2093.0 Hz, C7)
    pub max_frequency: f32,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            smoothing_window: 9,
            min_segment_duration: 0.30,
            frame_size: 4096,
            hop_size: 512,
            min_frequency: 65.41,
            max_frequency: 2093.0,
        }
    }
}

impl AnalysisConfig {
    /// Validate the configuration
    ///
    /// Checks every parameter against its contract and reports the first
    /// violation as `AnalysisError::InvalidInput`. Called by the analysis
    /// entry points before any processing starts.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        if self.smoothing_window == 0 || self.smoothing_window % 2 == 0 {
            return Err(AnalysisError::InvalidInput(format!(
                "smoothing_window must be an odd integer >= 1, got {}",
                self.smoothing_window
            )));
        }

        if !self.min_segment_duration.is_finite() || self.min_segment_duration < 0.0 {
            return Err(AnalysisError::InvalidInput(format!(
                "min_segment_duration must be a finite value >= 0, got {}",
                self.min_segment_duration
            )));
        }

        if self.frame_size == 0 {
            return Err(AnalysisError::InvalidInput(
                "frame_size must be non-zero".to_string(),
            ));
        }

        if self.hop_size == 0 {
            return Err(AnalysisError::InvalidInput(
                "hop_size must be non-zero".to_string(),
            ));
        }

        if !(self.min_frequency > 0.0 && self.min_frequency < self.max_frequency) {
            return Err(AnalysisError::InvalidInput(format!(
                "invalid chroma band: min_frequency={}, max_frequency={}",
                self.min_frequency, self.max_frequency
            )));
        }

        Ok(())
    }
}
