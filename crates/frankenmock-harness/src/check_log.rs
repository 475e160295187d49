//! Structured JSONL log of verification outcomes.
//!
//! One JSON object per line, schema = [`CheckRecord`]. Emission and
//! validation are both provided so CI tooling can treat a check log as
//! machine-readable evidence: a log either round-trips cleanly or names
//! the offending line.

use std::io::Write;

use thiserror::Error;

use crate::verify::CheckRecord;

/// Failures while writing or validating a check log.
#[derive(Debug, Error)]
pub enum CheckLogError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialize: {0}")]
    Serialize(serde_json::Error),
    #[error("line {line}: {source}")]
    Malformed {
        line: usize,
        source: serde_json::Error,
    },
    #[error("line {line}: `fake` must not be empty")]
    EmptyFakeName { line: usize },
    #[error("line {line}: failed check is missing its detail message")]
    MissingDetail { line: usize },
}

/// Write `records` as one JSON object per line.
pub fn write_check_log<W: Write>(mut out: W, records: &[CheckRecord]) -> Result<(), CheckLogError> {
    for record in records {
        let line = serde_json::to_string(record).map_err(CheckLogError::Serialize)?;
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Validate a single JSONL line against the check-record schema.
///
/// `line_number` is 1-based and only used for error context.
pub fn validate_check_line(line: &str, line_number: usize) -> Result<CheckRecord, CheckLogError> {
    let record: CheckRecord = serde_json::from_str(line).map_err(|source| {
        CheckLogError::Malformed {
            line: line_number,
            source,
        }
    })?;
    if record.fake.is_empty() {
        return Err(CheckLogError::EmptyFakeName { line: line_number });
    }
    if !record.passed && record.detail.is_none() {
        return Err(CheckLogError::MissingDetail { line: line_number });
    }
    Ok(record)
}

/// Parse and validate an entire JSONL document. Blank lines are skipped.
pub fn read_check_log(input: &str) -> Result<Vec<CheckRecord>, CheckLogError> {
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| validate_check_line(line, i + 1))
        .collect()
}
