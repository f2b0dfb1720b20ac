//! Error types for the converter.

use std::fmt;

/// Errors that can occur while assembling a conversion.
///
/// These never escape the public entry points: [`crate::convert_code`]
/// converts them into a structured failed [`crate::Conversion`] carrying the
/// display string.
#[derive(Debug)]
#[non_exhaustive]
pub enum ConvertError {
    /// No conversion template exists for the requested pair.
    UnsupportedPair {
        /// Requested source library token.
        source: String,
        /// Requested target library token.
        target: String,
    },

    /// The source library has no gate pattern table.
    PatternsNotFound(String),

    /// The circuit declaration captured something that is not a qubit count.
    InvalidQubitCount {
        /// The captured text.
        found: String,
    },

    /// A gate pattern matched but did not capture the operands its rewrite
    /// rule needs.
    MissingOperand {
        /// The gate token whose pattern misfired.
        gate: String,
    },
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::UnsupportedPair { source, target } => {
                write!(f, "Conversion from {source} to {target} is not supported")
            }
            ConvertError::PatternsNotFound(lib) => {
                write!(f, "Source library {lib} patterns not found")
            }
            ConvertError::InvalidQubitCount { found } => {
                write!(f, "Invalid qubit count in circuit declaration: {found}")
            }
            ConvertError::MissingOperand { gate } => {
                write!(f, "Gate pattern for '{gate}' did not capture expected operands")
            }
        }
    }
}

impl std::error::Error for ConvertError {}

/// Result type for conversion operations.
pub type ConvertResult<T> = Result<T, ConvertError>;
