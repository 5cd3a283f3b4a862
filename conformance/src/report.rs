//! Conformance report types: results, severity levels, and report aggregation.

use std::fmt;

/// Severity level of a conformance check result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The check passed.
    Pass,
    /// The check found something worth a look that does not block release.
    Warning,
    /// The check failed.
    Failure,
}

impl Severity {
    /// Short label used in printed reports.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Severity::Pass => "PASS",
            Severity::Warning => "WARN",
            Severity::Failure => "FAIL",
        }
    }
}

/// A single conformance check result.
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// Identifier of the validator, e.g. `catalog/integrity`.
    pub validator: &'static str,
    /// Human-readable outcome.
    pub message: String,
    /// Severity of the result.
    pub severity: Severity,
    /// Offending items, one per line.
    pub details: Vec<String>,
}

impl CheckResult {
    fn new(validator: &'static str, message: impl Into<String>, severity: Severity) -> Self {
        Self {
            validator,
            message: message.into(),
            severity,
            details: Vec::new(),
        }
    }

    /// Creates a passing result.
    pub fn pass(validator: &'static str, message: impl Into<String>) -> Self {
        Self::new(validator, message, Severity::Pass)
    }

    /// Creates a warning result.
    pub fn warn(validator: &'static str, message: impl Into<String>) -> Self {
        Self::new(validator, message, Severity::Warning)
    }

    /// Creates a failure result.
    pub fn fail(validator: &'static str, message: impl Into<String>) -> Self {
        Self::new(validator, message, Severity::Failure)
    }

    /// Attaches detail lines.
    #[must_use]
    pub fn with_details(mut self, details: Vec<String>) -> Self {
        self.details = details;
        self
    }

    /// Returns a pass when `problems` is empty, otherwise a result of
    /// `severity` listing them.
    pub fn from_problems(
        validator: &'static str,
        ok_message: impl Into<String>,
        problem_message: impl Into<String>,
        severity: Severity,
        problems: Vec<String>,
    ) -> Self {
        if problems.is_empty() {
            Self::pass(validator, ok_message)
        } else {
            Self::new(validator, problem_message, severity).with_details(problems)
        }
    }

    /// Returns true if this result represents a failure.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        self.severity == Severity::Failure
    }
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity.label(), self.validator, self.message)?;
        for detail in &self.details {
            write!(f, "\n       {detail}")?;
        }
        Ok(())
    }
}

/// Counts of results by severity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Passing checks.
    pub passed: usize,
    /// Warnings.
    pub warned: usize,
    /// Failures.
    pub failed: usize,
}

/// Aggregated conformance report from all validators.
#[derive(Debug, Default)]
pub struct ConformanceReport {
    /// All individual results, in the order validators ran.
    pub results: Vec<CheckResult>,
}

impl ConformanceReport {
    /// Creates a new empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a result.
    pub fn push(&mut self, result: CheckResult) {
        self.results.push(result);
    }

    /// Appends all results of another report.
    pub fn extend(&mut self, other: ConformanceReport) {
        self.results.extend(other.results);
    }

    /// Tallies results by severity.
    #[must_use]
    pub fn summary(&self) -> Summary {
        self.results
            .iter()
            .fold(Summary::default(), |mut s, r| {
                match r.severity {
                    Severity::Pass => s.passed += 1,
                    Severity::Warning => s.warned += 1,
                    Severity::Failure => s.failed += 1,
                }
                s
            })
    }

    /// Returns true if no check failed. Warnings do not count.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        !self.results.iter().any(CheckResult::is_failure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warnings_do_not_fail_the_report() {
        let mut report = ConformanceReport::new();
        report.push(CheckResult::pass("a", "ok"));
        report.push(CheckResult::warn("b", "hmm"));
        assert!(report.all_passed());
        report.push(CheckResult::fail("c", "bad"));
        assert!(!report.all_passed());
        assert_eq!(
            report.summary(),
            Summary {
                passed: 1,
                warned: 1,
                failed: 1
            }
        );
    }

    #[test]
    fn display_lists_details() {
        let result = CheckResult::fail("catalog/integrity", "2 problems")
            .with_details(vec!["x".to_string(), "y".to_string()]);
        assert_eq!(
            result.to_string(),
            "[FAIL] catalog/integrity: 2 problems\n       x\n       y"
        );
    }
}
