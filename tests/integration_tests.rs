//! Integration tests for auditdesk
//!
//! These tests verify the CLI surface end-to-end: client listing and
//! status views, the phase vocabulary, boundary validation of exported
//! records, and the harness configuration commands.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to create an auditdesk Command
fn auditdesk() -> Command {
    cargo_bin_cmd!("auditdesk")
}

/// Helper to create a temporary working directory
fn create_temp_dir() -> TempDir {
    TempDir::new().unwrap()
}

/// Helper to write a small clients export into a temp directory
fn write_clients_export(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("clients.json");
    fs::write(
        &path,
        r#"{
            "exported_at": "2026-07-01T09:00:00Z",
            "clients": [
                { "id": "c-001", "name": "Fjordvik Bygg AS", "phase": "engagement" },
                { "id": "c-002", "name": "Nordlys Regnskap AS", "phase": "planning" },
                { "id": "c-003", "name": "Breivik Transport AS", "phase": "reporting" }
            ]
        }"#,
    )
    .unwrap();
    path
}

// =============================================================================
// Basic CLI Tests
// =============================================================================

mod cli_basics {
    use super::*;

    #[test]
    fn test_auditdesk_help() {
        auditdesk().arg("--help").assert().success();
    }

    #[test]
    fn test_auditdesk_version() {
        auditdesk().arg("--version").assert().success();
    }
}

// =============================================================================
// Phase Vocabulary Tests
// =============================================================================

mod phases {
    use super::*;

    #[test]
    fn test_phases_lists_every_label() {
        let mut assert = auditdesk().arg("phases").assert().success();

        for label in [
            "Oversikt",
            "Oppdragsvurdering",
            "Planlegging",
            "Utførelse",
            "Avslutning",
            "Rapportering",
        ] {
            assert = assert.stdout(predicate::str::contains(label));
        }
    }

    #[test]
    fn test_phases_shows_workflow_positions() {
        auditdesk()
            .arg("phases")
            .assert()
            .success()
            .stdout(predicate::str::contains("engagement"))
            .stdout(predicate::str::contains("reporting"));
    }
}

// =============================================================================
// Client Listing and Status Tests
// =============================================================================

mod clients {
    use super::*;

    #[test]
    fn test_list_shows_clients_with_labels() {
        let dir = create_temp_dir();
        let path = write_clients_export(&dir);

        auditdesk()
            .arg("--clients")
            .arg(&path)
            .arg("list")
            .assert()
            .success()
            .stdout(predicate::str::contains("Fjordvik Bygg AS"))
            .stdout(predicate::str::contains("Oppdragsvurdering"))
            .stdout(predicate::str::contains("3 clients"));
    }

    #[test]
    fn test_list_without_export_gives_guidance() {
        let dir = create_temp_dir();

        auditdesk()
            .arg("--clients")
            .arg(dir.path().join("clients.json"))
            .arg("list")
            .assert()
            .success()
            .stdout(predicate::str::contains("No clients found"));
    }

    #[test]
    fn test_status_for_client_shows_phase_and_announcement() {
        let dir = create_temp_dir();
        let path = write_clients_export(&dir);

        auditdesk()
            .arg("--clients")
            .arg(&path)
            .arg("status")
            .arg("c-002")
            .assert()
            .success()
            .stdout(predicate::str::contains("Nordlys Regnskap AS"))
            .stdout(predicate::str::contains("Planlegging (planning), step 3 of 6"))
            .stdout(predicate::str::contains("Phase updated to Planlegging"));
    }

    #[test]
    fn test_status_for_final_phase_has_no_next() {
        let dir = create_temp_dir();
        let path = write_clients_export(&dir);

        auditdesk()
            .arg("--clients")
            .arg(&path)
            .arg("status")
            .arg("c-003")
            .assert()
            .success()
            .stdout(predicate::str::contains("final phase"));
    }

    #[test]
    fn test_status_unknown_client_fails() {
        let dir = create_temp_dir();
        let path = write_clients_export(&dir);

        auditdesk()
            .arg("--clients")
            .arg(&path)
            .arg("status")
            .arg("c-999")
            .assert()
            .failure()
            .stderr(predicate::str::contains("c-999"));
    }

    #[test]
    fn test_portfolio_status_renders_dashboard_card() {
        let dir = create_temp_dir();
        let path = write_clients_export(&dir);

        auditdesk()
            .arg("--clients")
            .arg(&path)
            .arg("status")
            .assert()
            .success()
            .stdout(predicate::str::contains("Audit dashboard"))
            .stdout(predicate::str::contains("3 active clients"));
    }
}

// =============================================================================
// Record Boundary Tests
// =============================================================================

mod record_boundary {
    use super::*;

    #[test]
    fn test_unknown_phase_in_export_is_rejected_at_load() {
        let dir = create_temp_dir();
        let path = dir.path().join("clients.json");
        fs::write(
            &path,
            r#"{
                "exported_at": "2026-07-01T09:00:00Z",
                "clients": [
                    { "id": "c-009", "name": "Ugyldig AS", "phase": "archived" }
                ]
            }"#,
        )
        .unwrap();

        auditdesk()
            .arg("--clients")
            .arg(&path)
            .arg("list")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Failed to parse clients JSON"));
    }

    #[test]
    fn test_legacy_conclusion_spelling_maps_to_completion_label() {
        let dir = create_temp_dir();
        let path = dir.path().join("clients.json");
        fs::write(
            &path,
            r#"{
                "exported_at": "2026-07-01T09:00:00Z",
                "clients": [
                    { "id": "c-004", "name": "Eldre Eksport AS", "phase": "conclusion" }
                ]
            }"#,
        )
        .unwrap();

        auditdesk()
            .arg("--clients")
            .arg(&path)
            .arg("list")
            .assert()
            .success()
            .stdout(predicate::str::contains("Avslutning"));
    }
}

// =============================================================================
// Harness Config Tests
// =============================================================================

mod harness_config {
    use super::*;

    #[test]
    fn test_config_show_defaults_without_file() {
        let dir = create_temp_dir();

        auditdesk()
            .arg("config")
            .arg("--config")
            .arg(dir.path().join("harness.toml"))
            .arg("show")
            .assert()
            .success()
            .stdout(predicate::str::contains("http://localhost:5173"))
            .stdout(predicate::str::contains("1280x800"))
            .stdout(predicate::str::contains("cypress/e2e/**/*.cy.ts"));
    }

    #[test]
    fn test_config_init_then_validate() {
        let dir = create_temp_dir();
        let path = dir.path().join("harness.toml");

        auditdesk()
            .arg("config")
            .arg("--config")
            .arg(&path)
            .arg("init")
            .assert()
            .success();
        assert!(path.exists());

        auditdesk()
            .arg("config")
            .arg("--config")
            .arg(&path)
            .arg("validate")
            .assert()
            .success();
    }

    #[test]
    fn test_config_init_refuses_overwrite() {
        let dir = create_temp_dir();
        let path = dir.path().join("harness.toml");
        fs::write(&path, "video = true\n").unwrap();

        auditdesk()
            .arg("config")
            .arg("--config")
            .arg(&path)
            .arg("init")
            .assert()
            .failure()
            .stderr(predicate::str::contains("already exists"));
    }

    #[test]
    fn test_config_validate_reports_problems() {
        let dir = create_temp_dir();
        let path = dir.path().join("harness.toml");
        fs::write(
            &path,
            "base_url = \"localhost:5173\"\n\n[viewport]\nwidth = 0\nheight = 800\n",
        )
        .unwrap();

        auditdesk()
            .arg("config")
            .arg("--config")
            .arg(&path)
            .arg("validate")
            .assert()
            .failure()
            .stdout(predicate::str::contains("base_url"))
            .stdout(predicate::str::contains("viewport"));
    }
}
