//! Quantum SDK identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The quantum SDK dialects QORSCEND knows at the product level.
///
/// Conversion templates exist only for a subset of ordered pairs; see
/// [`crate::template::template_for`]. Resolution from wire tokens is exact and
/// case-sensitive — `"Qiskit"` is not a library, and callers that send it get
/// the structured "not supported" failure rather than a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Library {
    /// IBM Qiskit.
    Qiskit,
    /// Google Cirq.
    Cirq,
    /// AWS Braket.
    Braket,
    /// Xanadu PennyLane.
    Pennylane,
    /// Rigetti pyQuil.
    Pyquil,
}

impl Library {
    /// All libraries, in product-listing order.
    pub const ALL: [Library; 5] = [
        Library::Qiskit,
        Library::Cirq,
        Library::Braket,
        Library::Pennylane,
        Library::Pyquil,
    ];

    /// Resolve a wire token to a library. Exact match only, no trimming,
    /// no case folding.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "qiskit" => Some(Library::Qiskit),
            "cirq" => Some(Library::Cirq),
            "braket" => Some(Library::Braket),
            "pennylane" => Some(Library::Pennylane),
            "pyquil" => Some(Library::Pyquil),
            _ => None,
        }
    }

    /// The wire token for this library.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Library::Qiskit => "qiskit",
            Library::Cirq => "cirq",
            Library::Braket => "braket",
            Library::Pennylane => "pennylane",
            Library::Pyquil => "pyquil",
        }
    }
}

impl fmt::Display for Library {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
