//! Audit lifecycle vocabulary.
//!
//! This module provides:
//! - `AuditPhase` enum representing the closed set of lifecycle stages
//! - The localized label table, derived from the enum by exhaustive match
//! - Parsing helpers for raw phase strings arriving from record sources
//!
//! The enum is the single source of truth for the vocabulary: labels,
//! wire identifiers, and ordering all live in exhaustive `match` arms,
//! so membership and labels cannot drift independently. The retired
//! `conclusion` spelling is accepted on input as an alias for
//! `completion` and never emitted.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::errors::PhaseError;

/// A stage in the audit lifecycle of a client engagement.
///
/// Variants are ordered by workflow sequence; `ALL` exposes that order
/// for dashboards and progress displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditPhase {
    /// Engagement overview and client intake
    Overview,
    /// Engagement acceptance and continuance assessment
    Engagement,
    /// Audit planning
    Planning,
    /// Fieldwork execution
    Execution,
    /// Completion procedures
    #[serde(alias = "conclusion")]
    Completion,
    /// Reporting and sign-off
    Reporting,
}

impl AuditPhase {
    /// All phases in workflow order.
    pub const ALL: [AuditPhase; 6] = [
        AuditPhase::Overview,
        AuditPhase::Engagement,
        AuditPhase::Planning,
        AuditPhase::Execution,
        AuditPhase::Completion,
        AuditPhase::Reporting,
    ];

    /// Stable lowercase identifier used in JSON records and CLI output.
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditPhase::Overview => "overview",
            AuditPhase::Engagement => "engagement",
            AuditPhase::Planning => "planning",
            AuditPhase::Execution => "execution",
            AuditPhase::Completion => "completion",
            AuditPhase::Reporting => "reporting",
        }
    }

    /// Localized display label.
    ///
    /// Total over the enum: every phase has exactly one non-empty label.
    pub fn label(&self) -> &'static str {
        match self {
            AuditPhase::Overview => "Oversikt",
            AuditPhase::Engagement => "Oppdragsvurdering",
            AuditPhase::Planning => "Planlegging",
            AuditPhase::Execution => "Utførelse",
            AuditPhase::Completion => "Avslutning",
            AuditPhase::Reporting => "Rapportering",
        }
    }

    /// 1-based position in the workflow sequence.
    pub fn position(&self) -> usize {
        AuditPhase::ALL
            .iter()
            .position(|p| p == self)
            .expect("phase is a member of ALL")
            + 1
    }

    /// The next phase in the sequence, or `None` after `Reporting`.
    pub fn next(&self) -> Option<AuditPhase> {
        AuditPhase::ALL.get(self.position()).copied()
    }
}

impl std::fmt::Display for AuditPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AuditPhase {
    type Err = PhaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "overview" => Ok(AuditPhase::Overview),
            "engagement" => Ok(AuditPhase::Engagement),
            "planning" => Ok(AuditPhase::Planning),
            "execution" => Ok(AuditPhase::Execution),
            // Retired spelling still present in older exports.
            "completion" | "conclusion" => Ok(AuditPhase::Completion),
            "reporting" => Ok(AuditPhase::Reporting),
            _ => Err(PhaseError::UnknownPhase {
                value: s.to_string(),
            }),
        }
    }
}

/// Resolve the label for a raw phase string from an upstream record source.
///
/// Fails with [`PhaseError::UnknownPhase`] when the value is outside the
/// vocabulary; callers on a rendering path should prefer [`label_or_raw`].
pub fn resolve_label(raw: &str) -> Result<&'static str, PhaseError> {
    raw.parse::<AuditPhase>().map(|p| p.label())
}

/// Resolve a label with the defined fallback: unrecognized input renders
/// its raw identifier rather than failing the rendering tree.
pub fn label_or_raw(raw: &str) -> Cow<'_, str> {
    match raw.parse::<AuditPhase>() {
        Ok(phase) => Cow::Borrowed(phase.label()),
        Err(_) => Cow::Borrowed(raw),
    }
}
