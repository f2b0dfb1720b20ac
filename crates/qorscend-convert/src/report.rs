//! Conversion result types.
//!
//! [`Conversion`] is the document callers persist as a conversion-history
//! record; its JSON shape is part of the product contract and is pinned by
//! tests.

use serde::{Deserialize, Serialize};

use crate::error::ConvertError;
use crate::library::Library;

/// Coarse classification of a conversion by rewritten gate count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    /// 5 or fewer gates rewritten.
    Low,
    /// 6 to 10 gates rewritten.
    Medium,
    /// More than 10 gates rewritten.
    High,
}

impl Complexity {
    /// Bucket a rewritten-gate count.
    #[must_use]
    pub fn from_gate_count(count: usize) -> Self {
        if count > 10 {
            Complexity::High
        } else if count > 5 {
            Complexity::Medium
        } else {
            Complexity::Low
        }
    }
}

/// Bookkeeping attached to a successful conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionMetadata {
    /// Number of gate lines successfully rewritten.
    pub gate_count: usize,
    /// Source library token.
    pub source_library: Library,
    /// Target library token.
    pub target_library: Library,
}

/// Outcome of a conversion request.
///
/// Exactly one of `code` and `error` is populated. Failures are values, never
/// panics: unsupported pairs, missing pattern tables, and internal faults all
/// land here with `success == false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversion {
    /// Whether the conversion produced code.
    pub success: bool,
    /// Full converted source text when successful.
    pub code: Option<String>,
    /// Human-readable failure reason otherwise.
    pub error: Option<String>,
    /// Complexity bucket for the rewritten circuit.
    pub complexity: Option<Complexity>,
    /// Conversion bookkeeping.
    pub metadata: Option<ConversionMetadata>,
}

impl Conversion {
    /// A successful conversion.
    #[must_use]
    pub(crate) fn converted(code: String, metadata: ConversionMetadata) -> Self {
        Self {
            success: true,
            code: Some(code),
            error: None,
            complexity: Some(Complexity::from_gate_count(metadata.gate_count)),
            metadata: Some(metadata),
        }
    }

    /// A structured failure.
    #[must_use]
    pub(crate) fn failed(err: &ConvertError) -> Self {
        Self {
            success: false,
            code: None,
            error: Some(err.to_string()),
            complexity: None,
            metadata: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complexity_thresholds() {
        assert_eq!(Complexity::from_gate_count(0), Complexity::Low);
        assert_eq!(Complexity::from_gate_count(3), Complexity::Low);
        assert_eq!(Complexity::from_gate_count(5), Complexity::Low);
        assert_eq!(Complexity::from_gate_count(6), Complexity::Medium);
        assert_eq!(Complexity::from_gate_count(10), Complexity::Medium);
        assert_eq!(Complexity::from_gate_count(11), Complexity::High);
    }

    #[test]
    fn test_complexity_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Complexity::High).unwrap(), "\"high\"");
    }

    #[test]
    fn test_failed_conversion_shape() {
        let err = ConvertError::UnsupportedPair {
            source: "cirq".into(),
            target: "pyquil".into(),
        };
        let conv = Conversion::failed(&err);
        let json = serde_json::to_value(&conv).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["code"], serde_json::Value::Null);
        assert_eq!(
            json["error"],
            "Conversion from cirq to pyquil is not supported"
        );
    }

    #[test]
    fn test_converted_shape() {
        let conv = Conversion::converted(
            "import cirq\n".into(),
            ConversionMetadata {
                gate_count: 7,
                source_library: Library::Qiskit,
                target_library: Library::Cirq,
            },
        );
        let json = serde_json::to_value(&conv).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["complexity"], "medium");
        assert_eq!(json["metadata"]["gate_count"], 7);
        assert_eq!(json["metadata"]["source_library"], "qiskit");
    }
}
