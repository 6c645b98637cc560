//! Error types for the chord analysis engine

use std::fmt;

/// Errors that can occur during chord analysis
#[derive(Debug, Clone)]
pub enum AnalysisError {
    /// Invalid input parameters (caller contract violation)
    InvalidInput(String),

    /// Processing error during analysis
    ProcessingError(String),
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            AnalysisError::ProcessingError(msg) => write!(f, "Processing error: {}", msg),
        }
    }
}

impl std::error::Error for AnalysisError {}
