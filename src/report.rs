//! Check outcomes and per-notebook reports.
//!
//! Reports serialise to JSON for tooling and render as plain text for people.

use crate::checks::Check;
use crate::error::Violation;
use serde::Serialize;
use std::fmt::Write;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Result of one check against one notebook.
pub struct CheckOutcome {
    /// Which check ran.
    pub check: Check,
    /// Whether it passed.
    pub passed: bool,
    /// Violation code on failure, see [`Violation::kind`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<&'static str>,
    /// Human-readable explanation on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CheckOutcome {
    #[must_use]
    /// Record the result of running `check`.
    pub fn new(check: Check, result: Result<(), Violation>) -> Self {
        match result {
            Ok(()) => Self {
                check,
                passed: true,
                kind: None,
                message: None,
            },
            Err(violation) => Self {
                check,
                passed: false,
                kind: Some(violation.kind()),
                message: Some(violation.to_string()),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
/// Every check outcome for one notebook file.
pub struct NotebookReport {
    /// Notebook location as given on the command line.
    pub path: String,
    /// Outcomes in check order.
    pub outcomes: Vec<CheckOutcome>,
}

impl NotebookReport {
    #[must_use]
    /// Whether every check passed.
    pub fn passed(&self) -> bool {
        self.outcomes.iter().all(|outcome| outcome.passed)
    }

    #[must_use]
    /// Plain-text rendering: the path, then one line per check.
    pub fn render(&self) -> String {
        let mut output = format!("{}\n", self.path);
        for outcome in &self.outcomes {
            let status = if outcome.passed { "ok  " } else { "FAIL" };
            let _ = write!(output, "  {status} {}", outcome.check.name());
            if let Some(message) = &outcome.message {
                let _ = write!(output, ": {message}");
            }
            output.push('\n');
        }
        output
    }
}

#[cfg(test)]
#[path = "tests/report.rs"]
mod tests;
