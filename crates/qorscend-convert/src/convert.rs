//! Pattern-based source-to-source conversion.
//!
//! [`convert_code`] is the single conversion entry point. It is a pure
//! function over its three string inputs and the static template/pattern
//! stores: no I/O, no randomness, no shared mutable state, safe to call
//! concurrently from any number of threads.

use tracing::{error, info, warn};

use crate::error::{ConvertError, ConvertResult};
use crate::library::Library;
use crate::pattern::{GatePatterns, patterns_for};
use crate::report::{Conversion, ConversionMetadata};
use crate::template::{ConversionTemplate, DEFAULT_QUBIT_COUNT, template_for};

/// Convert quantum source code between SDK dialects.
///
/// Library tokens are matched exactly (case-sensitive) against the supported
/// set. Every failure — unsupported pair, missing pattern table, internal
/// fault — is returned as a structured [`Conversion`] with `success == false`;
/// this function never panics and never returns an error type.
///
/// Lines the pattern tables do not recognize pass through verbatim. That is
/// intended behavior, not an error: the output remains scaffolding a human
/// can finish by hand.
///
/// # Example
///
/// ```rust
/// use qorscend_convert::convert_code;
///
/// let source = "\
/// from qiskit import QuantumCircuit
/// qc = QuantumCircuit(2, 2)
/// qc.h(0)
/// qc.cx(0, 1)
/// qc.measure_all()
/// ";
///
/// let result = convert_code("qiskit", "cirq", source);
/// assert!(result.success);
///
/// let code = result.code.unwrap();
/// assert!(code.contains("q0, q1 = cirq.LineQubit.range(2)"));
/// assert!(code.contains("circuit.append(cirq.H(0))"));
/// assert!(code.contains("circuit.append(cirq.CNOT(0, 1))"));
/// assert!(code.contains("circuit.append(cirq.measure(q0, q1))"));
/// ```
#[must_use]
pub fn convert_code(source_library: &str, target_library: &str, source_code: &str) -> Conversion {
    info!(
        source = source_library,
        target = target_library,
        "starting conversion"
    );

    match run_conversion(source_library, target_library, source_code) {
        Ok(conversion) => {
            let gate_count = conversion.metadata.as_ref().map_or(0, |m| m.gate_count);
            info!(
                source = source_library,
                target = target_library,
                gate_count,
                "conversion complete"
            );
            conversion
        }
        Err(err) => {
            match err {
                ConvertError::UnsupportedPair { .. } | ConvertError::PatternsNotFound(_) => {
                    warn!(
                        source = source_library,
                        target = target_library,
                        error = %err,
                        "conversion rejected"
                    );
                }
                _ => {
                    error!(
                        source = source_library,
                        target = target_library,
                        error = %err,
                        "conversion failed"
                    );
                }
            }
            Conversion::failed(&err)
        }
    }
}

/// Fallible driver behind [`convert_code`]; only ever returns `Ok` with a
/// successful conversion.
fn run_conversion(
    source_library: &str,
    target_library: &str,
    source_code: &str,
) -> ConvertResult<Conversion> {
    let unsupported = || ConvertError::UnsupportedPair {
        source: source_library.to_string(),
        target: target_library.to_string(),
    };

    // Template lookup first: an unknown token and a known-but-unpaired token
    // report the same way.
    let (source, target) = match (
        Library::from_token(source_library),
        Library::from_token(target_library),
    ) {
        (Some(source), Some(target)) => (source, target),
        _ => return Err(unsupported()),
    };
    let template = template_for(source, target).ok_or_else(unsupported)?;
    let patterns = patterns_for(source)
        .ok_or_else(|| ConvertError::PatternsNotFound(source.as_str().to_string()))?;

    let qubit_count = extract_qubit_count(patterns, source_code)?;

    let mut assembler = Assembler::new();
    assembler.block(template.imports);
    assembler.blank();
    assembler.block(&template.circuit.render(qubit_count));
    assembler.blank();

    let mut gate_count = 0usize;
    for line in source_code.lines() {
        let trimmed = line.trim();

        // Comments and blank lines survive untouched.
        if trimmed.is_empty() || trimmed.starts_with('#') {
            assembler.line(line);
            continue;
        }

        // The target's own imports were already emitted.
        if trimmed.starts_with("import") || trimmed.starts_with("from") {
            continue;
        }

        // The declaration was rewritten into the preamble above.
        if patterns.circuit_decl.is_match(line) {
            continue;
        }

        match rewrite_gate_line(template, patterns, line, qubit_count)? {
            Some(rewritten) => {
                gate_count += 1;
                assembler.line(&rewritten);
            }
            None => assembler.line(line),
        }
    }

    assembler.blank();
    assembler.block(template.execution);

    Ok(Conversion::converted(
        assembler.into_string(),
        ConversionMetadata {
            gate_count,
            source_library: source,
            target_library: target,
        },
    ))
}

/// Extract the qubit count from the source's circuit declaration.
///
/// Falls back to [`DEFAULT_QUBIT_COUNT`] when the declaration is absent or
/// declares no width.
fn extract_qubit_count(patterns: &GatePatterns, source_code: &str) -> ConvertResult<usize> {
    let Some(caps) = patterns.circuit_decl.captures(source_code) else {
        return Ok(DEFAULT_QUBIT_COUNT);
    };

    match caps.get(1) {
        Some(m) => m
            .as_str()
            .parse()
            .map_err(|_| ConvertError::InvalidQubitCount {
                found: m.as_str().to_string(),
            }),
        None => Ok(DEFAULT_QUBIT_COUNT),
    }
}

/// Rewrite a line through the template's gate table.
///
/// Entries are tested in slice order and the first recognizer that fires
/// wins; exactly one substitution is applied per line. `None` means no entry
/// matched and the line passes through verbatim.
fn rewrite_gate_line(
    template: &ConversionTemplate,
    patterns: &GatePatterns,
    line: &str,
    qubit_count: usize,
) -> ConvertResult<Option<String>> {
    for (token, rule) in template.gates {
        // A template key without a recognizer is silently never rewritten.
        let Some(pattern) = patterns.gate(token) else {
            continue;
        };
        if let Some(caps) = pattern.captures(line) {
            return rule.render(token, &caps, qubit_count).map(Some);
        }
    }
    Ok(None)
}

/// Output accumulator.
struct Assembler {
    output: String,
}

impl Assembler {
    fn new() -> Self {
        Self {
            output: String::new(),
        }
    }

    fn line(&mut self, line: &str) {
        self.output.push_str(line);
        self.output.push('\n');
    }

    fn blank(&mut self) {
        self.output.push('\n');
    }

    /// Append a multi-line literal block.
    fn block(&mut self, block: &str) {
        for line in block.lines() {
            self.line(line);
        }
    }

    fn into_string(self) -> String {
        self.output
    }
}
