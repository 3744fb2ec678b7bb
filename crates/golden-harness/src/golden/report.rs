//! Aggregated results for batches of golden checks.

use std::fmt;

use serde::Serialize;

use crate::error::HarnessError;
use crate::golden::compare::{compare_hash, compare_hex, GoldenOutcome};

/// Status of a single golden check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    /// Output matched the golden value.
    Pass,
    /// Output differed from the golden value.
    Mismatch,
    /// The check could not run (missing fixture, malformed golden value).
    Error,
}

/// Entry in a golden report.
#[derive(Debug, Clone, Serialize)]
pub struct GoldenReportEntry {
    /// Name of the check.
    pub name: String,
    /// Outcome of the check.
    pub status: CheckStatus,
    /// Mismatch or error details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl GoldenReportEntry {
    /// Check if this entry passed.
    pub fn passed(&self) -> bool {
        self.status == CheckStatus::Pass
    }
}

/// Report of golden checks across a suite.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GoldenReport {
    /// Individual check entries, in the order they were recorded.
    pub entries: Vec<GoldenReportEntry>,
}

impl GoldenReport {
    /// Create a new empty report.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record the result of a golden comparison.
    pub fn record(&mut self, name: impl Into<String>, result: Result<GoldenOutcome, HarnessError>) {
        let (status, detail) = match result {
            Ok(GoldenOutcome::Match) => (CheckStatus::Pass, None),
            Ok(GoldenOutcome::Mismatch(diff)) => (CheckStatus::Mismatch, Some(diff.to_string())),
            Err(e) => (CheckStatus::Error, Some(e.to_string())),
        };
        self.entries.push(GoldenReportEntry {
            name: name.into(),
            status,
            detail,
        });
    }

    /// Compare against a golden hex literal and record the result.
    pub fn check_hex(&mut self, name: impl Into<String>, expected_hex: &str, actual: &[u8]) {
        self.record(name, compare_hex(expected_hex, actual));
    }

    /// Compare against a golden BLAKE3 hash and record the result.
    pub fn check_hash(&mut self, name: impl Into<String>, expected_hash: &str, actual: &[u8]) {
        self.record(name, compare_hash(expected_hash, actual));
    }

    /// Check if every entry passed.
    pub fn all_passed(&self) -> bool {
        self.entries.iter().all(|e| e.passed())
    }

    /// Get number of passed checks.
    pub fn passed_count(&self) -> usize {
        self.entries.iter().filter(|e| e.passed()).count()
    }

    /// Get number of failed checks (mismatches and errors).
    pub fn failed_count(&self) -> usize {
        self.entries.iter().filter(|e| !e.passed()).count()
    }

    /// Get total number of checks.
    pub fn total_count(&self) -> usize {
        self.entries.len()
    }

    /// Get all failed entries.
    pub fn failures(&self) -> Vec<&GoldenReportEntry> {
        self.entries.iter().filter(|e| !e.passed()).collect()
    }

    /// Serialize the report as pretty JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Panic if any check failed, with a detailed report.
    pub fn assert_all_passed(&self) {
        if !self.all_passed() {
            let mut msg = format!(
                "Golden verification failed!\n\
                 Passed: {}/{}\n\n\
                 Failures:\n",
                self.passed_count(),
                self.total_count()
            );

            for entry in self.failures() {
                msg.push_str(&format!("  - {} ({:?})\n", entry.name, entry.status));
                if let Some(detail) = &entry.detail {
                    for line in detail.lines() {
                        msg.push_str(&format!("    {}\n", line));
                    }
                }
            }

            panic!("{}", msg);
        }
    }
}

impl fmt::Display for GoldenReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Golden Report: {}/{} passed",
            self.passed_count(),
            self.total_count()
        )?;

        for entry in &self.entries {
            let status = match entry.status {
                CheckStatus::Pass => "PASS",
                CheckStatus::Mismatch => "FAIL",
                CheckStatus::Error => "ERROR",
            };
            writeln!(f, "  [{}] {}", status, entry.name)?;

            if let Some(detail) = &entry.detail {
                for line in detail.lines() {
                    writeln!(f, "        {}", line)?;
                }
            }
        }

        Ok(())
    }
}
