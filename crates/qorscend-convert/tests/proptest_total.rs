//! Property-based tests for converter totality and pass-through guarantees.
//!
//! The converter must be a total function: arbitrary inputs (library tokens
//! included) produce a structured result, never a panic. Comment lines and
//! blank lines must survive every conversion verbatim and in order.

use proptest::prelude::*;
use qorscend_convert::{convert_code, validate_code};

/// A line of "circuit code" drawn from the shapes the rewriter sees in
/// practice: recognized gates, unknown calls, comments, and noise.
fn arb_source_line() -> impl Strategy<Value = String> {
    prop_oneof![
        (0usize..4).prop_map(|q| format!("qc.h({q})")),
        (0usize..4, 0usize..4).prop_map(|(c, t)| format!("qc.cx({c}, {t})")),
        Just("qc.measure_all()".to_string()),
        "[a-z ]{0,24}".prop_map(|s| format!("# {s}")),
        Just(String::new()),
        "[a-z_]{1,12}".prop_map(|s| format!("{s} = compute_{s}()")),
    ]
}

fn arb_source() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_source_line(), 0..40).prop_map(|lines| {
        let mut source = String::from("qc = QuantumCircuit(3, 3)\n");
        for line in lines {
            source.push_str(&line);
            source.push('\n');
        }
        source
    })
}

proptest! {
    /// Arbitrary tokens and arbitrary text never panic the converter.
    #[test]
    fn convert_is_total(source in ".{0,16}", target in ".{0,16}", code in ".{0,400}") {
        let result = convert_code(&source, &target, &code);
        prop_assert!(result.success || result.code.is_none());
        prop_assert_eq!(result.success, result.error.is_none());
    }

    /// The validator is total as well.
    #[test]
    fn validate_is_total(library in ".{0,16}", code in ".{0,400}") {
        let report = validate_code(&library, &code);
        prop_assert_eq!(report.is_valid, report.errors.is_empty());
    }

    /// Unsupported pairs fail structurally for every input.
    #[test]
    fn unsupported_pair_is_structured(code in ".{0,400}") {
        let result = convert_code("qiskit", "qiskit", &code);
        prop_assert!(!result.success);
        prop_assert!(result.code.is_none());
    }

    /// Every comment line in the source appears verbatim, in order, in the
    /// output of a supported conversion.
    #[test]
    fn comments_survive_in_order(source in arb_source()) {
        let result = convert_code("qiskit", "cirq", &source);
        prop_assert!(result.success);
        let code = result.code.unwrap();

        let expected: Vec<&str> =
            source.lines().filter(|l| l.trim().starts_with('#')).collect();
        let emitted: Vec<&str> =
            code.lines().filter(|l| l.trim().starts_with('#')).collect();
        prop_assert_eq!(expected, emitted);
    }

    /// At most one substitution happens per line: the rewritten gate count
    /// never exceeds the number of walked source lines.
    #[test]
    fn at_most_one_substitution_per_line(source in arb_source()) {
        let result = convert_code("qiskit", "braket", &source);
        prop_assert!(result.success);

        let walked = source
            .lines()
            .filter(|l| {
                let t = l.trim();
                !t.is_empty() && !t.starts_with('#')
            })
            .count();
        let gate_count = result.metadata.unwrap().gate_count;
        prop_assert!(gate_count <= walked);
    }

    /// Source import lines never reach the output.
    #[test]
    fn imports_are_suppressed(name in "[a-z]{1,10}") {
        let source = format!(
            "import pkg_{name}\nfrom pkg_{name} import thing\nqc = QuantumCircuit(2, 2)\nqc.h(0)\n"
        );
        let result = convert_code("qiskit", "braket", &source);
        let code = result.code.unwrap();
        let import_line = format!("import pkg_{}", name);
        let from_line = format!("from pkg_{}", name);
        prop_assert!(!code.contains(&import_line));
        prop_assert!(!code.contains(&from_line));
    }
}
