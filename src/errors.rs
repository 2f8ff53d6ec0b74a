//! Typed error hierarchy for auditdesk.
//!
//! Two small enums cover the two subsystems that can fail:
//! - `PhaseError` — boundary validation of raw phase values
//! - `RenderError` — card rendering collaborator failures
//!
//! File and config IO paths use `anyhow` with context instead; data-shape
//! violations are caught where external records enter the system and are
//! not allowed to reach the label resolver.

use thiserror::Error;

/// Errors from validating phase values at the record-source boundary.
///
/// The label table itself is total over `AuditPhase`, so a vocabulary
/// member can never lack a label; the only failure left is input from
/// outside the vocabulary.
#[derive(Debug, Error)]
pub enum PhaseError {
    #[error("unrecognized audit phase '{value}' (valid: overview, engagement, planning, execution, completion, reporting)")]
    UnknownPhase { value: String },
}

/// Errors from a card rendering collaborator.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("card renderer does not support the '{variant}' variant")]
    UnsupportedVariant { variant: String },
}
