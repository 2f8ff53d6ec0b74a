//! End-to-end harness configuration.
//!
//! This module provides the declarative configuration for the browser
//! test runner that exercises the dashboard: where the app under test is
//! served, the fixed viewport, capture behavior, and the test discovery
//! pattern. It reads from `harness.toml` with sensible defaults for
//! every field.
//!
//! # Configuration File Format
//!
//! ```toml
//! base_url = "http://localhost:5173"
//! video = false
//! screenshot_on_failure = true
//! spec_pattern = "cypress/e2e/**/*.cy.ts"
//!
//! [viewport]
//! width = 1280
//! height = 800
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Fixed browser viewport for deterministic rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewportConfig {
    #[serde(default = "default_viewport_width")]
    pub width: u32,
    #[serde(default = "default_viewport_height")]
    pub height: u32,
}

fn default_viewport_width() -> u32 {
    1280
}

fn default_viewport_height() -> u32 {
    800
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: default_viewport_width(),
            height: default_viewport_height(),
        }
    }
}

/// End-to-end test runner configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HarnessConfig {
    /// Base URL the app under test is served from
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Browser viewport
    #[serde(default)]
    pub viewport: ViewportConfig,
    /// Whether to record video of test runs
    #[serde(default = "default_video")]
    pub video: bool,
    /// Whether to capture a screenshot when a test fails
    #[serde(default = "default_screenshot_on_failure")]
    pub screenshot_on_failure: bool,
    /// Glob pattern for test file discovery
    #[serde(default = "default_spec_pattern")]
    pub spec_pattern: String,
}

fn default_base_url() -> String {
    "http://localhost:5173".to_string()
}

fn default_video() -> bool {
    false
}

fn default_screenshot_on_failure() -> bool {
    true
}

fn default_spec_pattern() -> String {
    "cypress/e2e/**/*.cy.ts".to_string()
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            viewport: ViewportConfig::default(),
            video: default_video(),
            screenshot_on_failure: default_screenshot_on_failure(),
            spec_pattern: default_spec_pattern(),
        }
    }
}

impl HarnessConfig {
    /// Load configuration from a TOML file, or defaults when the file
    /// does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read harness config: {}", path.display()))?;

        let config: HarnessConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse harness config: {}", path.display()))?;

        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content =
            toml::to_string_pretty(self).context("Failed to serialize harness config")?;

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write harness config: {}", path.display()))?;

        Ok(())
    }

    /// Validate field values, collecting every problem found.
    pub fn validate(&self) -> Vec<String> {
        let mut problems = Vec::new();

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            problems.push(format!(
                "base_url '{}' must start with http:// or https://",
                self.base_url
            ));
        }

        if self.viewport.width == 0 || self.viewport.height == 0 {
            problems.push(format!(
                "viewport {}x{} must be non-zero in both dimensions",
                self.viewport.width, self.viewport.height
            ));
        }

        if let Err(e) = glob::Pattern::new(&self.spec_pattern) {
            problems.push(format!(
                "spec_pattern '{}' is not a valid glob: {}",
                self.spec_pattern, e
            ));
        }

        problems
    }
}
