//! Shallow source-code validation.
//!
//! [`validate_code`] is a standalone sanity check, independent of the
//! converter: keyword-presence heuristics only, not a syntax checker. It is
//! total — every input produces a [`Validation`], never a panic.

use serde::{Deserialize, Serialize};

use crate::library::Library;

/// Outcome of a validation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validation {
    /// True when no errors were found.
    pub is_valid: bool,
    /// Blocking findings.
    pub errors: Vec<String>,
    /// Non-blocking findings.
    pub warnings: Vec<String>,
}

/// The substring each library's code is expected to reference, with the
/// message reported when it is absent.
fn required_keyword(library: Library) -> (&'static str, &'static str) {
    match library {
        Library::Qiskit => ("QuantumCircuit", "Qiskit code should reference QuantumCircuit"),
        Library::Cirq => ("cirq.", "Cirq code should reference the cirq. namespace"),
        Library::Braket => ("Circuit", "Braket code should reference Circuit"),
        Library::Pennylane => ("qml.", "PennyLane code should reference the qml. namespace"),
        Library::Pyquil => ("Program", "pyQuil code should reference Program"),
    }
}

/// Heuristically validate source code against a library's expected shape.
///
/// Warns when no `import` appears anywhere; errors when the library's
/// required keyword is absent. Unknown library tokens skip the keyword check
/// (the import heuristic still applies).
///
/// # Example
///
/// ```rust
/// use qorscend_convert::validate_code;
///
/// let report = validate_code("qiskit", "x = 1");
/// assert!(!report.is_valid);
/// assert!(report.errors[0].contains("QuantumCircuit"));
///
/// let report = validate_code("qiskit", "import qiskit\nqc = QuantumCircuit(1)");
/// assert!(report.is_valid);
/// ```
#[must_use]
pub fn validate_code(library: &str, code: &str) -> Validation {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if !code.contains("import") {
        warnings.push("No import statements found".to_string());
    }

    if let Some(library) = Library::from_token(library) {
        let (keyword, message) = required_keyword(library);
        if !code.contains(keyword) {
            errors.push(message.to_string());
        }
    }

    Validation {
        is_valid: errors.is_empty(),
        errors,
        warnings,
    }
}
