//! Harness configuration commands.

use anyhow::Result;
use std::path::Path;

use auditdesk::harness::HarnessConfig;
use auditdesk::ui::icons::{CHECK, CROSS};

use super::super::ConfigCommands;

pub fn cmd_config(config_path: &Path, command: Option<ConfigCommands>) -> Result<()> {
    match command.unwrap_or(ConfigCommands::Show) {
        ConfigCommands::Show => {
            let config = HarnessConfig::load(config_path)?;
            println!();
            if config_path.exists() {
                println!("Harness config loaded from: {}", config_path.display());
            } else {
                println!("No config file at {}; showing defaults", config_path.display());
            }
            println!();
            println!("Base URL:              {}", config.base_url);
            println!(
                "Viewport:              {}x{}",
                config.viewport.width, config.viewport.height
            );
            println!("Video:                 {}", config.video);
            println!("Screenshot on failure: {}", config.screenshot_on_failure);
            println!("Spec pattern:          {}", config.spec_pattern);
            println!();
        }
        ConfigCommands::Validate => {
            let config = HarnessConfig::load(config_path)?;
            let problems = config.validate();
            println!();
            if problems.is_empty() {
                println!("{}Harness config is valid", CHECK);
            } else {
                for problem in &problems {
                    println!("{}{}", CROSS, problem);
                }
                println!();
                anyhow::bail!("{} problem(s) in harness config", problems.len());
            }
            println!();
        }
        ConfigCommands::Init => {
            if config_path.exists() {
                anyhow::bail!(
                    "Config file already exists at {}",
                    config_path.display()
                );
            }
            HarnessConfig::default().save(config_path)?;
            println!("Initialized harness config at {}", config_path.display());
        }
    }
    Ok(())
}
