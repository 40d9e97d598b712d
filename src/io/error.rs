//! Error types for dataset handling and the solver pipeline

use std::fmt;
use std::path::PathBuf;

/// Main error type for all slideshow operations
#[derive(Debug)]
pub enum SlideshowError {
    /// Failed to read a dataset from the filesystem
    DatasetLoad {
        /// Path to the dataset file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// A dataset line does not match the expected record format
    InvalidRecord {
        /// One-based line number of the offending record
        line: usize,
        /// Description of what's wrong with the record
        reason: String,
    },

    /// The declared photo count disagrees with the records present
    PhotoCountMismatch {
        /// Count announced in the dataset header
        declared: usize,
        /// Number of photo records actually parsed
        actual: usize,
    },

    /// The pairing engine found a photo with no remaining partner
    ///
    /// Occurs exactly when the vertical photo count is odd: every photo
    /// before the last one always has at least one candidate.
    PairingExhausted {
        /// Vertical photos still unpaired when the scan gave up
        unpaired: usize,
    },

    /// The assembled slide count breaks the slideshow contract
    ///
    /// The final set must hold one slide per horizontal photo plus one per
    /// vertical photo pair.
    SlideCountMismatch {
        /// Slide count the photo collection implies
        expected: usize,
        /// Slide count actually assembled
        actual: usize,
    },

    /// Solver parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to write the slideshow output to disk
    OutputWrite {
        /// Path where the write was attempted
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for SlideshowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DatasetLoad { path, source } => {
                write!(f, "Failed to load dataset '{}': {source}", path.display())
            }
            Self::InvalidRecord { line, reason } => {
                write!(f, "Invalid record on line {line}: {reason}")
            }
            Self::PhotoCountMismatch { declared, actual } => {
                write!(
                    f,
                    "Expected ({declared}) and actual ({actual}) number of photos do not match"
                )
            }
            Self::PairingExhausted { unpaired } => {
                write!(
                    f,
                    "No pairing partner found with {unpaired} vertical photo(s) remaining"
                )
            }
            Self::SlideCountMismatch { expected, actual } => {
                write!(
                    f,
                    "Assembled {actual} slides where the photo set implies {expected}"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::OutputWrite { path, source } => {
                write!(
                    f,
                    "Failed to write slideshow to '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for SlideshowError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::DatasetLoad { source, .. } | Self::OutputWrite { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SlideshowError {
    fn from(err: std::io::Error) -> Self {
        Self::DatasetLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

/// Convenience type alias for slideshow results
pub type Result<T> = std::result::Result<T, SlideshowError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> SlideshowError {
    SlideshowError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid record error for a dataset line
pub fn invalid_record(line: usize, reason: &impl ToString) -> SlideshowError {
    SlideshowError::InvalidRecord {
        line,
        reason: reason.to_string(),
    }
}
