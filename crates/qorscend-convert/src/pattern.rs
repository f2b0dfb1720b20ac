//! Gate pattern store.
//!
//! One [`GatePatterns`] per SOURCE dialect: a circuit-declaration recognizer
//! whose first capture group is the qubit count, and per-gate recognizers
//! capturing qubit-index operands. Patterns are applied to single lines; the
//! only cross-line state the converter keeps is the qubit count extracted
//! once from the declaration.
//!
//! Cirq operand patterns accept both the `q0` name form and the bare-index
//! form (`cirq.H(q0)` and `cirq.H(0)`) so that code emitted by this
//! converter's own `→cirq` direction is recognizable as `cirq→*` input.

use std::sync::LazyLock;

use regex::Regex;
use rustc_hash::FxHashMap;

use crate::library::Library;

/// Textual recognizers for one source dialect.
#[derive(Debug)]
pub struct GatePatterns {
    /// Matches the dialect's circuit/register constructor. Capture group 1,
    /// when present, is the qubit count; Braket's `Circuit()` declares no
    /// width and carries no group.
    pub circuit_decl: Regex,
    gates: FxHashMap<&'static str, Regex>,
}

impl GatePatterns {
    /// The recognizer for a gate token, if the dialect has one.
    #[must_use]
    pub fn gate(&self, token: &str) -> Option<&Regex> {
        self.gates.get(token)
    }

    /// All gate tokens this dialect recognizes.
    pub fn gate_tokens(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.gates.keys().copied()
    }
}

fn rx(pattern: &str) -> Regex {
    Regex::new(pattern).expect("static gate pattern must compile")
}

fn gate_table(entries: &[(&'static str, &str)]) -> FxHashMap<&'static str, Regex> {
    entries
        .iter()
        .map(|(token, pattern)| (*token, rx(pattern)))
        .collect()
}

static PATTERNS: LazyLock<FxHashMap<Library, GatePatterns>> = LazyLock::new(|| {
    let mut store = FxHashMap::default();

    store.insert(
        Library::Qiskit,
        GatePatterns {
            circuit_decl: rx(r"QuantumCircuit\(\s*(\d+)(?:\s*,\s*(\d+))?\s*\)"),
            gates: gate_table(&[
                ("h", r"\.h\(\s*(\d+)\s*\)"),
                ("x", r"\.x\(\s*(\d+)\s*\)"),
                ("y", r"\.y\(\s*(\d+)\s*\)"),
                ("z", r"\.z\(\s*(\d+)\s*\)"),
                ("cx", r"\.cx\(\s*(\d+)\s*,\s*(\d+)\s*\)"),
                ("measure_all", r"\.measure_all\(\s*\)"),
                ("measure", r"\.measure\(\s*(\d+)\s*,\s*(\d+)\s*\)"),
            ]),
        },
    );

    store.insert(
        Library::Cirq,
        GatePatterns {
            circuit_decl: rx(r"cirq\.LineQubit\.range\(\s*(\d+)\s*\)"),
            gates: gate_table(&[
                ("H", r"cirq\.H\(\s*q?(\d+)\s*\)"),
                ("X", r"cirq\.X\(\s*q?(\d+)\s*\)"),
                ("Y", r"cirq\.Y\(\s*q?(\d+)\s*\)"),
                ("Z", r"cirq\.Z\(\s*q?(\d+)\s*\)"),
                ("CNOT", r"cirq\.CNOT\(\s*q?(\d+)\s*,\s*q?(\d+)\s*\)"),
                ("measure", r"cirq\.measure\(\s*q?(\d+)"),
            ]),
        },
    );

    store.insert(
        Library::Braket,
        GatePatterns {
            circuit_decl: rx(r"Circuit\(\s*\)"),
            gates: gate_table(&[
                ("h", r"\.h\(\s*(\d+)\s*\)"),
                ("x", r"\.x\(\s*(\d+)\s*\)"),
                ("y", r"\.y\(\s*(\d+)\s*\)"),
                ("z", r"\.z\(\s*(\d+)\s*\)"),
                ("cnot", r"\.cnot\(\s*(\d+)\s*,\s*(\d+)\s*\)"),
            ]),
        },
    );

    store
});

/// Look up the pattern table for a source dialect.
///
/// PennyLane and pyQuil are product-level targets without recognizers;
/// requesting them returns `None` and surfaces as the "patterns not found"
/// structured failure.
#[must_use]
pub fn patterns_for(library: Library) -> Option<&'static GatePatterns> {
    PATTERNS.get(&library)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_tables_exist_for_source_dialects() {
        assert!(patterns_for(Library::Qiskit).is_some());
        assert!(patterns_for(Library::Cirq).is_some());
        assert!(patterns_for(Library::Braket).is_some());
        assert!(patterns_for(Library::Pennylane).is_none());
        assert!(patterns_for(Library::Pyquil).is_none());
    }

    #[test]
    fn test_qiskit_circuit_decl_captures_qubits() {
        let patterns = patterns_for(Library::Qiskit).unwrap();
        let caps = patterns.circuit_decl.captures("qc = QuantumCircuit(3, 3)").unwrap();
        assert_eq!(&caps[1], "3");
        assert_eq!(&caps[2], "3");

        // Classical register is optional.
        let caps = patterns.circuit_decl.captures("qc = QuantumCircuit(5)").unwrap();
        assert_eq!(&caps[1], "5");
        assert!(caps.get(2).is_none());
    }

    #[test]
    fn test_cirq_circuit_decl_captures_range() {
        let patterns = patterns_for(Library::Cirq).unwrap();
        let caps = patterns
            .circuit_decl
            .captures("q0, q1 = cirq.LineQubit.range(2)")
            .unwrap();
        assert_eq!(&caps[1], "2");
    }

    #[test]
    fn test_braket_circuit_decl_has_no_count() {
        let patterns = patterns_for(Library::Braket).unwrap();
        let caps = patterns.circuit_decl.captures("circuit = Circuit()").unwrap();
        assert!(caps.get(1).is_none());

        // Must not fire on Qiskit's constructor.
        assert!(!patterns.circuit_decl.is_match("qc = QuantumCircuit(2, 2)"));
    }

    #[test]
    fn test_qiskit_gate_operand_capture() {
        let patterns = patterns_for(Library::Qiskit).unwrap();
        let h = patterns.gate("h").unwrap();
        assert_eq!(&h.captures("qc.h(0)").unwrap()[1], "0");

        let cx = patterns.gate("cx").unwrap();
        let caps = cx.captures("qc.cx(0, 1)").unwrap();
        assert_eq!(&caps[1], "0");
        assert_eq!(&caps[2], "1");
    }

    #[test]
    fn test_qiskit_x_does_not_fire_on_cx() {
        let patterns = patterns_for(Library::Qiskit).unwrap();
        let x = patterns.gate("x").unwrap();
        assert!(!x.is_match("qc.cx(0, 1)"));
    }

    #[test]
    fn test_qiskit_measure_does_not_fire_on_measure_all() {
        let patterns = patterns_for(Library::Qiskit).unwrap();
        let measure = patterns.gate("measure").unwrap();
        assert!(!measure.is_match("qc.measure_all()"));
        assert!(measure.is_match("qc.measure(0, 0)"));
    }

    #[test]
    fn test_cirq_operands_accept_named_and_index_forms() {
        let patterns = patterns_for(Library::Cirq).unwrap();
        let h = patterns.gate("H").unwrap();
        assert_eq!(&h.captures("circuit.append(cirq.H(q0))").unwrap()[1], "0");
        assert_eq!(&h.captures("circuit.append(cirq.H(0))").unwrap()[1], "0");

        let cnot = patterns.gate("CNOT").unwrap();
        let caps = cnot.captures("circuit.append(cirq.CNOT(q0, q1))").unwrap();
        assert_eq!(&caps[1], "0");
        assert_eq!(&caps[2], "1");
    }

    #[test]
    fn test_braket_cnot_capture() {
        let patterns = patterns_for(Library::Braket).unwrap();
        let cnot = patterns.gate("cnot").unwrap();
        let caps = cnot.captures("circuit.cnot(1, 2)").unwrap();
        assert_eq!(&caps[1], "1");
        assert_eq!(&caps[2], "2");
    }
}
