//! Conversion template store.
//!
//! One [`ConversionTemplate`] per supported `(source, target)` pair: the
//! target dialect's import block, a circuit-declaration skeleton parameterized
//! by qubit count, an ordered gate rewrite table, and an execution scaffold.
//! Gate-map keys use the SOURCE dialect's own call casing (`h`/`cx` for Qiskit
//! and Braket, `H`/`CNOT` for Cirq) and every key must have a recognizer in
//! the source library's pattern table — a key without one is silently never
//! rewritten.

use regex::Captures;

use crate::error::{ConvertError, ConvertResult};
use crate::library::Library;

/// Qubit count assumed when the source declares no register width
/// (Braket's `Circuit()` never does).
pub const DEFAULT_QUBIT_COUNT: usize = 2;

/// How a target dialect declares its circuit and qubits.
#[derive(Debug, Clone, Copy)]
pub enum CircuitSkeleton {
    /// Literal declaration, no qubit-count parameter.
    Plain(&'static str),
    /// Declaration with `{n}` spliced with the qubit count.
    Counted(&'static str),
    /// Cirq-style named qubit line (shape depends on the count), followed by
    /// a literal body.
    LineQubits {
        /// Lines emitted after the qubit-name line.
        body: &'static str,
    },
}

impl CircuitSkeleton {
    /// Render the declaration snippet for `qubit_count` qubits.
    #[must_use]
    pub fn render(&self, qubit_count: usize) -> String {
        match self {
            CircuitSkeleton::Plain(text) => (*text).to_string(),
            CircuitSkeleton::Counted(text) => text.replace("{n}", &qubit_count.to_string()),
            CircuitSkeleton::LineQubits { body } => {
                let qubit_line = match qubit_count {
                    1 => "q0 = cirq.LineQubit(0)".to_string(),
                    2 => "q0, q1 = cirq.LineQubit.range(2)".to_string(),
                    n => format!(
                        "{} = cirq.LineQubit.range({n})",
                        MeasureArgs::Named.render(n)
                    ),
                };
                format!("{qubit_line}\n{body}")
            }
        }
    }
}

/// Argument style for rebuilt measurement calls.
#[derive(Debug, Clone, Copy)]
pub enum MeasureArgs {
    /// Named qubit variables: `q0, q1`.
    Named,
    /// Bare indices: `0, 1`.
    Index,
}

impl MeasureArgs {
    /// Build the argument list for `qubit_count` qubits.
    #[must_use]
    pub fn render(self, qubit_count: usize) -> String {
        match (self, qubit_count) {
            (MeasureArgs::Named, 1) => "q0".to_string(),
            (MeasureArgs::Named, 2) => "q0, q1".to_string(),
            (MeasureArgs::Named, n) => (0..n)
                .map(|i| format!("q{i}"))
                .collect::<Vec<_>>()
                .join(", "),
            (MeasureArgs::Index, 1) => "0".to_string(),
            (MeasureArgs::Index, 2) => "0, 1".to_string(),
            (MeasureArgs::Index, n) => (0..n)
                .map(|i| i.to_string())
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

/// How one recognized source gate line becomes a target line.
///
/// `call` carries placeholders spliced at render time: `{q}` for the
/// single-qubit operand, `{c}`/`{t}` for control and target, `{qubits}` for
/// the measurement argument list built from the circuit's qubit count.
#[derive(Debug, Clone, Copy)]
pub enum RewriteRule {
    /// Single-qubit gate; one captured operand.
    OneQubit {
        /// Target call with a `{q}` placeholder.
        call: &'static str,
    },
    /// Two-qubit gate; control and target captured.
    TwoQubit {
        /// Target call with `{c}` and `{t}` placeholders.
        call: &'static str,
    },
    /// Measurement; argument list rebuilt from the qubit count, not from
    /// captured operands.
    Measure {
        /// Target call with a `{qubits}` placeholder.
        call: &'static str,
        /// Argument style for the rebuilt list.
        args: MeasureArgs,
    },
}

impl RewriteRule {
    /// Render the target line for a recognized source line.
    pub fn render(
        &self,
        gate: &str,
        caps: &Captures<'_>,
        qubit_count: usize,
    ) -> ConvertResult<String> {
        let operand = |index: usize| {
            caps.get(index)
                .map(|m| m.as_str())
                .ok_or_else(|| ConvertError::MissingOperand { gate: gate.to_string() })
        };

        match self {
            RewriteRule::OneQubit { call } => Ok(call.replace("{q}", operand(1)?)),
            RewriteRule::TwoQubit { call } => Ok(call
                .replace("{c}", operand(1)?)
                .replace("{t}", operand(2)?)),
            RewriteRule::Measure { call, args } => {
                Ok(call.replace("{qubits}", &args.render(qubit_count)))
            }
        }
    }
}

/// Everything needed to assemble output for one `(source, target)` pair.
#[derive(Debug, Clone, Copy)]
pub struct ConversionTemplate {
    /// Target import block, emitted once at the top.
    pub imports: &'static str,
    /// Target circuit declaration skeleton.
    pub circuit: CircuitSkeleton,
    /// Ordered `(source gate token, rewrite rule)` table; slice order is the
    /// first-match priority order.
    pub gates: &'static [(&'static str, RewriteRule)],
    /// Target run-and-print scaffold, emitted once at the bottom.
    pub execution: &'static str,
}

// ---------------------------------------------------------------------------
// Shared target-dialect literals
// ---------------------------------------------------------------------------

const CIRQ_IMPORTS: &str = "import cirq";
const CIRQ_CIRCUIT: CircuitSkeleton = CircuitSkeleton::LineQubits {
    body: "circuit = cirq.Circuit()",
};
const CIRQ_EXECUTION: &str = "simulator = cirq.Simulator()\n\
                              result = simulator.run(circuit, repetitions=1000)\n\
                              print(result)";

const QISKIT_IMPORTS: &str = "from qiskit import QuantumCircuit, Aer, execute";
const QISKIT_CIRCUIT: CircuitSkeleton = CircuitSkeleton::Counted("qc = QuantumCircuit({n}, {n})");
const QISKIT_EXECUTION: &str = "backend = Aer.get_backend(\"qasm_simulator\")\n\
                                job = execute(qc, backend, shots=1000)\n\
                                print(job.result().get_counts())";

const BRAKET_IMPORTS: &str = "from braket.circuits import Circuit\n\
                              from braket.devices import LocalSimulator";
const BRAKET_CIRCUIT: CircuitSkeleton = CircuitSkeleton::Plain("circuit = Circuit()");
const BRAKET_EXECUTION: &str = "device = LocalSimulator()\n\
                                task = device.run(circuit, shots=1000)\n\
                                print(task.result().measurement_counts)";

const PENNYLANE_IMPORTS: &str = "import pennylane as qml";
const PENNYLANE_CIRCUIT: CircuitSkeleton =
    CircuitSkeleton::Counted("dev = qml.device(\"default.qubit\", wires={n})");
const PENNYLANE_EXECUTION: &str = "result = circuit()\nprint(result)";

// ---------------------------------------------------------------------------
// Templates, one per supported pair
// ---------------------------------------------------------------------------

static QISKIT_TO_CIRQ: ConversionTemplate = ConversionTemplate {
    imports: CIRQ_IMPORTS,
    circuit: CIRQ_CIRCUIT,
    gates: &[
        ("h", RewriteRule::OneQubit { call: "circuit.append(cirq.H({q}))" }),
        ("x", RewriteRule::OneQubit { call: "circuit.append(cirq.X({q}))" }),
        ("y", RewriteRule::OneQubit { call: "circuit.append(cirq.Y({q}))" }),
        ("z", RewriteRule::OneQubit { call: "circuit.append(cirq.Z({q}))" }),
        ("cx", RewriteRule::TwoQubit { call: "circuit.append(cirq.CNOT({c}, {t}))" }),
        (
            "measure_all",
            RewriteRule::Measure {
                call: "circuit.append(cirq.measure({qubits}))",
                args: MeasureArgs::Named,
            },
        ),
        (
            "measure",
            RewriteRule::Measure {
                call: "circuit.append(cirq.measure({qubits}))",
                args: MeasureArgs::Named,
            },
        ),
    ],
    execution: CIRQ_EXECUTION,
};

static QISKIT_TO_BRAKET: ConversionTemplate = ConversionTemplate {
    imports: BRAKET_IMPORTS,
    circuit: BRAKET_CIRCUIT,
    gates: &[
        ("h", RewriteRule::OneQubit { call: "circuit.h({q})" }),
        ("x", RewriteRule::OneQubit { call: "circuit.x({q})" }),
        ("y", RewriteRule::OneQubit { call: "circuit.y({q})" }),
        ("z", RewriteRule::OneQubit { call: "circuit.z({q})" }),
        ("cx", RewriteRule::TwoQubit { call: "circuit.cnot({c}, {t})" }),
        (
            "measure_all",
            RewriteRule::Measure {
                call: "circuit.probability(target=[{qubits}])",
                args: MeasureArgs::Index,
            },
        ),
        (
            "measure",
            RewriteRule::Measure {
                call: "circuit.probability(target=[{qubits}])",
                args: MeasureArgs::Index,
            },
        ),
    ],
    execution: BRAKET_EXECUTION,
};

static QISKIT_TO_PENNYLANE: ConversionTemplate = ConversionTemplate {
    imports: PENNYLANE_IMPORTS,
    circuit: PENNYLANE_CIRCUIT,
    gates: &[
        ("h", RewriteRule::OneQubit { call: "qml.Hadamard(wires={q})" }),
        ("x", RewriteRule::OneQubit { call: "qml.PauliX(wires={q})" }),
        ("y", RewriteRule::OneQubit { call: "qml.PauliY(wires={q})" }),
        ("z", RewriteRule::OneQubit { call: "qml.PauliZ(wires={q})" }),
        ("cx", RewriteRule::TwoQubit { call: "qml.CNOT(wires=[{c}, {t}])" }),
        (
            "measure_all",
            RewriteRule::Measure {
                call: "return qml.probs(wires=[{qubits}])",
                args: MeasureArgs::Index,
            },
        ),
        (
            "measure",
            RewriteRule::Measure {
                call: "return qml.probs(wires=[{qubits}])",
                args: MeasureArgs::Index,
            },
        ),
    ],
    execution: PENNYLANE_EXECUTION,
};

static CIRQ_TO_QISKIT: ConversionTemplate = ConversionTemplate {
    imports: QISKIT_IMPORTS,
    circuit: QISKIT_CIRCUIT,
    gates: &[
        ("H", RewriteRule::OneQubit { call: "qc.h({q})" }),
        ("X", RewriteRule::OneQubit { call: "qc.x({q})" }),
        ("Y", RewriteRule::OneQubit { call: "qc.y({q})" }),
        ("Z", RewriteRule::OneQubit { call: "qc.z({q})" }),
        ("CNOT", RewriteRule::TwoQubit { call: "qc.cx({c}, {t})" }),
        (
            "measure",
            RewriteRule::Measure {
                call: "qc.measure_all()",
                args: MeasureArgs::Named,
            },
        ),
    ],
    execution: QISKIT_EXECUTION,
};

static CIRQ_TO_BRAKET: ConversionTemplate = ConversionTemplate {
    imports: BRAKET_IMPORTS,
    circuit: BRAKET_CIRCUIT,
    gates: &[
        ("H", RewriteRule::OneQubit { call: "circuit.h({q})" }),
        ("X", RewriteRule::OneQubit { call: "circuit.x({q})" }),
        ("Y", RewriteRule::OneQubit { call: "circuit.y({q})" }),
        ("Z", RewriteRule::OneQubit { call: "circuit.z({q})" }),
        ("CNOT", RewriteRule::TwoQubit { call: "circuit.cnot({c}, {t})" }),
        (
            "measure",
            RewriteRule::Measure {
                call: "circuit.probability(target=[{qubits}])",
                args: MeasureArgs::Index,
            },
        ),
    ],
    execution: BRAKET_EXECUTION,
};

static BRAKET_TO_QISKIT: ConversionTemplate = ConversionTemplate {
    imports: QISKIT_IMPORTS,
    circuit: QISKIT_CIRCUIT,
    gates: &[
        ("h", RewriteRule::OneQubit { call: "qc.h({q})" }),
        ("x", RewriteRule::OneQubit { call: "qc.x({q})" }),
        ("y", RewriteRule::OneQubit { call: "qc.y({q})" }),
        ("z", RewriteRule::OneQubit { call: "qc.z({q})" }),
        ("cnot", RewriteRule::TwoQubit { call: "qc.cx({c}, {t})" }),
    ],
    execution: QISKIT_EXECUTION,
};

static BRAKET_TO_CIRQ: ConversionTemplate = ConversionTemplate {
    imports: CIRQ_IMPORTS,
    circuit: CIRQ_CIRCUIT,
    gates: &[
        ("h", RewriteRule::OneQubit { call: "circuit.append(cirq.H({q}))" }),
        ("x", RewriteRule::OneQubit { call: "circuit.append(cirq.X({q}))" }),
        ("y", RewriteRule::OneQubit { call: "circuit.append(cirq.Y({q}))" }),
        ("z", RewriteRule::OneQubit { call: "circuit.append(cirq.Z({q}))" }),
        ("cnot", RewriteRule::TwoQubit { call: "circuit.append(cirq.CNOT({c}, {t}))" }),
    ],
    execution: CIRQ_EXECUTION,
};

/// The supported conversion pairs, in listing order.
pub const SUPPORTED_PAIRS: [(Library, Library); 7] = [
    (Library::Qiskit, Library::Cirq),
    (Library::Qiskit, Library::Braket),
    (Library::Qiskit, Library::Pennylane),
    (Library::Cirq, Library::Qiskit),
    (Library::Cirq, Library::Braket),
    (Library::Braket, Library::Qiskit),
    (Library::Braket, Library::Cirq),
];

/// Look up the template for a conversion pair.
///
/// Returns `None` for every pair outside [`SUPPORTED_PAIRS`], including
/// identity pairs — the core takes no position on `source == target` and
/// callers filter it upstream.
#[must_use]
pub fn template_for(source: Library, target: Library) -> Option<&'static ConversionTemplate> {
    match (source, target) {
        (Library::Qiskit, Library::Cirq) => Some(&QISKIT_TO_CIRQ),
        (Library::Qiskit, Library::Braket) => Some(&QISKIT_TO_BRAKET),
        (Library::Qiskit, Library::Pennylane) => Some(&QISKIT_TO_PENNYLANE),
        (Library::Cirq, Library::Qiskit) => Some(&CIRQ_TO_QISKIT),
        (Library::Cirq, Library::Braket) => Some(&CIRQ_TO_BRAKET),
        (Library::Braket, Library::Qiskit) => Some(&BRAKET_TO_QISKIT),
        (Library::Braket, Library::Cirq) => Some(&BRAKET_TO_CIRQ),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_supported_pair_has_a_template() {
        for (source, target) in SUPPORTED_PAIRS {
            assert!(
                template_for(source, target).is_some(),
                "missing template for {source} -> {target}"
            );
        }
    }

    #[test]
    fn test_identity_pairs_have_no_template() {
        for lib in Library::ALL {
            assert!(template_for(lib, lib).is_none());
        }
    }

    #[test]
    fn test_pennylane_and_pyquil_are_never_sources() {
        for target in Library::ALL {
            assert!(template_for(Library::Pennylane, target).is_none());
            assert!(template_for(Library::Pyquil, target).is_none());
        }
    }

    #[test]
    fn test_line_qubit_skeleton_branching() {
        assert_eq!(
            CIRQ_CIRCUIT.render(1),
            "q0 = cirq.LineQubit(0)\ncircuit = cirq.Circuit()"
        );
        assert_eq!(
            CIRQ_CIRCUIT.render(2),
            "q0, q1 = cirq.LineQubit.range(2)\ncircuit = cirq.Circuit()"
        );
        assert_eq!(
            CIRQ_CIRCUIT.render(3),
            "q0, q1, q2 = cirq.LineQubit.range(3)\ncircuit = cirq.Circuit()"
        );
    }

    #[test]
    fn test_counted_skeleton_splices_count() {
        assert_eq!(QISKIT_CIRCUIT.render(4), "qc = QuantumCircuit(4, 4)");
    }

    #[test]
    fn test_measure_args_branching() {
        assert_eq!(MeasureArgs::Named.render(1), "q0");
        assert_eq!(MeasureArgs::Named.render(2), "q0, q1");
        assert_eq!(MeasureArgs::Named.render(4), "q0, q1, q2, q3");
        assert_eq!(MeasureArgs::Index.render(1), "0");
        assert_eq!(MeasureArgs::Index.render(3), "0, 1, 2");
    }

    #[test]
    fn test_rewrite_rule_missing_operand() {
        let re = regex::Regex::new(r"\.measure_all\(\)").unwrap();
        let caps = re.captures("qc.measure_all()").unwrap();
        let rule = RewriteRule::OneQubit { call: "cirq.H({q})" };
        let err = rule.render("h", &caps, 2).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Gate pattern for 'h' did not capture expected operands"
        );
    }
}
