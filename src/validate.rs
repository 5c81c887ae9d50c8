//! Validation of captured output against expected-output fixtures.
//!
//! Comparison is strict: equal length, exact line match at every index, no
//! fuzzy matching. A mismatch names the first diverging index and both
//! values. Pairing is by pattern name, and a result or expectation left
//! without a partner is reported, never silently skipped. Validation is a
//! pure function of its inputs.

use serde::Serialize;

use crate::models::{ExecutionResult, ExpectedOutput, Outcome};

/// How one execution compared against its expectation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ValidationStatus {
    /// Output matched the expectation line for line
    Pass,
    /// First diverging line, with both values
    LineMismatch { index: usize, actual: String, expected: String },
    /// Lines agreed up to the shorter sequence, but the lengths differ;
    /// the divergence starts at the shorter length
    LengthMismatch { actual_len: usize, expected_len: usize },
    /// The execution faulted instead of producing lines
    Fault(String),
    /// A result arrived with no bundled expectation to compare against
    MissingExpectation,
    /// An expectation is bundled but no execution produced a result for it
    UnexpectedResult,
}

impl ValidationStatus {
    pub fn is_pass(&self) -> bool {
        matches!(self, ValidationStatus::Pass)
    }
}

/// The outcome of validating one demonstration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Name of the demonstration the report is about
    pub name: &'static str,
    pub status: ValidationStatus,
}

impl ValidationReport {
    pub fn is_pass(&self) -> bool {
        self.status.is_pass()
    }
}

/// Compare one execution result against its expected output.
pub fn validate(result: &ExecutionResult, expected: &ExpectedOutput) -> ValidationReport {
    let lines = match &result.outcome {
        Outcome::Lines(lines) => lines,
        Outcome::Fault(message) => {
            return ValidationReport {
                name: result.name,
                status: ValidationStatus::Fault(message.clone()),
            }
        }
    };

    for (index, (actual, expected_line)) in lines.iter().zip(expected.lines.iter()).enumerate() {
        if actual != expected_line {
            return ValidationReport {
                name: result.name,
                status: ValidationStatus::LineMismatch {
                    index,
                    actual: actual.clone(),
                    expected: (*expected_line).to_string(),
                },
            };
        }
    }

    if lines.len() != expected.lines.len() {
        return ValidationReport {
            name: result.name,
            status: ValidationStatus::LengthMismatch {
                actual_len: lines.len(),
                expected_len: expected.lines.len(),
            },
        };
    }

    ValidationReport { name: result.name, status: ValidationStatus::Pass }
}

/// Validate every result against every expectation, pairing by name.
///
/// Reports come back in result order, followed by one `UnexpectedResult`
/// report per expectation that no result matched. All failures are
/// collected; nothing stops at the first one.
pub fn validate_all(
    results: &[ExecutionResult],
    expectations: &[ExpectedOutput],
) -> Vec<ValidationReport> {
    let mut reports = Vec::with_capacity(results.len());

    for result in results {
        match expectations.iter().find(|e| e.name == result.name) {
            Some(expected) => reports.push(validate(result, expected)),
            None => reports.push(ValidationReport {
                name: result.name,
                status: ValidationStatus::MissingExpectation,
            }),
        }
    }

    for expected in expectations {
        if !results.iter().any(|r| r.name == expected.name) {
            reports.push(ValidationReport {
                name: expected.name,
                status: ValidationStatus::UnexpectedResult,
            });
        }
    }

    reports
}

/// Format a report for display, with a diff for failures.
pub fn format_report(report: &ValidationReport) -> String {
    match &report.status {
        ValidationStatus::Pass => format!("{}: ok", report.name),
        ValidationStatus::LineMismatch { index, actual, expected } => {
            let mut output = Vec::new();
            output.push(format!("{}: mismatch at line {}", report.name, index));
            output.push(format!("  expected: {}", expected));
            output.push(format!("  actual:   {}", actual));
            output.join("\n")
        }
        ValidationStatus::LengthMismatch { actual_len, expected_len } => format!(
            "{}: expected {} line(s), got {} (diverges at line {})",
            report.name,
            expected_len,
            actual_len,
            expected_len.min(actual_len)
        ),
        ValidationStatus::Fault(message) => {
            format!("{}: demonstration faulted: {}", report.name, message)
        }
        ValidationStatus::MissingExpectation => {
            format!("{}: no expected output is bundled for this demonstration", report.name)
        }
        ValidationStatus::UnexpectedResult => {
            format!("{}: expected output is bundled but no result was produced", report.name)
        }
    }
}
