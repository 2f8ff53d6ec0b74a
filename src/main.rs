use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod cmd;

#[derive(Parser)]
#[command(name = "auditdesk")]
#[command(version, about = "Client audit-phase tracking and dashboard views")]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the clients export produced by the backend
    #[arg(long, default_value = "clients.json", global = true)]
    pub clients: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all clients and their current audit phase
    List,
    /// Show the portfolio dashboard, or one client's status
    Status {
        /// Client id (omit for the portfolio view)
        client_id: Option<String>,
    },
    /// List the audit lifecycle vocabulary
    Phases,
    /// View or validate the e2e harness configuration
    Config {
        /// Path to the harness config file
        #[arg(long, default_value = "harness.toml")]
        config: PathBuf,

        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
}

#[derive(Subcommand, Clone)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Validate configuration and show any problems
    Validate,
    /// Initialize a default harness.toml file
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match &cli.command {
        Commands::List => cmd::cmd_list(&cli.clients)?,
        Commands::Status { client_id } => cmd::cmd_status(&cli.clients, client_id.as_deref())?,
        Commands::Phases => cmd::cmd_phases()?,
        Commands::Config { config, command } => cmd::cmd_config(config, command.clone())?,
    }

    Ok(())
}
