//! Client records and the JSON record source.
//!
//! This module provides:
//! - `Client` struct, the minimal shape identifying a client and its
//!   current lifecycle stage
//! - `ClientsFile` struct representing the clients.json export format
//!   produced by the backend collaborator
//!
//! Records are created, mutated, and archived by the backend; this side
//! only reads them. Deserialization is the boundary where unrecognized
//! phase strings are rejected, so downstream rendering code always holds
//! a validated `AuditPhase`.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::phase::AuditPhase;

/// A client engagement and its current audit phase.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Client {
    /// Unique identifier assigned by the backend
    pub id: String,
    /// Display name
    pub name: String,
    /// Current lifecycle stage
    pub phase: AuditPhase,
}

impl Client {
    pub fn new(id: &str, name: &str, phase: AuditPhase) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            phase,
        }
    }

    /// Localized label for the client's current phase.
    pub fn phase_label(&self) -> &'static str {
        self.phase.label()
    }
}

/// Represents the full clients.json export format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientsFile {
    /// When the backend produced this export
    pub exported_at: DateTime<Utc>,
    /// List of client records
    pub clients: Vec<Client>,
}

impl ClientsFile {
    pub fn new(clients: Vec<Client>) -> Self {
        Self {
            exported_at: Utc::now(),
            clients,
        }
    }

    /// Load clients from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read clients file: {}", path.display()))?;

        let clients_file: ClientsFile = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse clients JSON: {}", path.display()))?;

        Ok(clients_file)
    }

    /// Save clients to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content =
            serde_json::to_string_pretty(self).context("Failed to serialize clients to JSON")?;

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write clients file: {}", path.display()))?;

        Ok(())
    }

    /// Get a specific client by id.
    pub fn get_client(&self, id: &str) -> Option<&Client> {
        self.clients.iter().find(|c| c.id == id)
    }

    /// Clients currently in the given phase.
    pub fn in_phase(&self, phase: AuditPhase) -> Vec<&Client> {
        self.clients.iter().filter(|c| c.phase == phase).collect()
    }

    /// Client count per phase, in workflow order.
    pub fn count_by_phase(&self) -> BTreeMap<AuditPhase, usize> {
        let mut counts = BTreeMap::new();
        for phase in AuditPhase::ALL {
            counts.insert(phase, 0);
        }
        for client in &self.clients {
            *counts.entry(client.phase).or_insert(0) += 1;
        }
        counts
    }
}
