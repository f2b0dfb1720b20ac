//! Pattern-Based Quantum Source-Code Converter
//!
//! This crate is the conversion core of QORSCEND: it rewrites quantum-circuit
//! source code between SDK dialects using per-dialect regex recognizers and
//! per-pair rewrite templates. It is deliberately not a parser or compiler —
//! no AST is built, semantic equivalence is not verified, and constructs
//! outside the fixed pattern tables pass through untranslated.
//!
//! # Supported Conversions
//!
//! | Source | Targets |
//! |--------|---------|
//! | `qiskit` | `cirq`, `braket`, `pennylane` |
//! | `cirq` | `qiskit`, `braket` |
//! | `braket` | `qiskit`, `cirq` |
//!
//! Any other pair (including `pyquil` in either role and identity pairs)
//! yields a structured "not supported" failure, never a panic.
//!
//! # Example: Converting a Bell Circuit
//!
//! ```rust
//! use qorscend_convert::{Complexity, convert_code};
//!
//! let qiskit = "\
//! from qiskit import QuantumCircuit
//!
//! ## Bell state
//! qc = QuantumCircuit(2, 2)
//! qc.h(0)
//! qc.cx(0, 1)
//! qc.measure_all()
//! ";
//!
//! let result = convert_code("qiskit", "cirq", qiskit);
//! assert!(result.success);
//! assert_eq!(result.complexity, Some(Complexity::Low));
//!
//! let code = result.code.unwrap();
//! assert!(code.starts_with("import cirq\n"));
//! assert!(code.contains("# Bell state"));
//! assert!(code.contains("circuit.append(cirq.CNOT(0, 1))"));
//! ```
//!
//! # Example: Structured Failure
//!
//! ```rust
//! use qorscend_convert::convert_code;
//!
//! let result = convert_code("pennylane", "qiskit", "qml.Hadamard(wires=0)");
//! assert!(!result.success);
//! assert_eq!(
//!     result.error.as_deref(),
//!     Some("Conversion from pennylane to qiskit is not supported")
//! );
//! ```
//!
//! # Guarantees
//!
//! - Comments and blank lines are copied verbatim, in order.
//! - Source `import`/`from` lines are dropped; the target's import block is
//!   emitted exactly once, at the top.
//! - At most one gate substitution is applied per line, first table match
//!   wins.
//! - Both entry points are pure, synchronous, and total: every failure is a
//!   returned value.
//!
//! Round trips (`qiskit → cirq → qiskit`) succeed structurally but are NOT
//! guaranteed to reproduce the original text.

pub mod convert;
pub mod error;
pub mod library;
pub mod pattern;
pub mod report;
pub mod template;
pub mod validate;

pub use convert::convert_code;
pub use error::{ConvertError, ConvertResult};
pub use library::Library;
pub use report::{Complexity, Conversion, ConversionMetadata};
pub use template::{ConversionTemplate, SUPPORTED_PAIRS, template_for};
pub use validate::{Validation, validate_code};
