//! promptctl CLI
//!
//! Main entry point for the promptctl command-line tool.
//! Organizes, versions and shares prompt files through a Git-backed registry.

mod commands;
mod editor;
mod git;
mod interact;

use clap::{Parser, Subcommand};
use commands::{
    DeleteCommand, EditCommand, InitCommand, ListCommand, NewCommand, PullCommand, PushCommand,
    ShowCommand, StatusCommand, SyncCommand,
};
use promptctl_core::{config::AppConfig, logging, AppResult};
use std::path::PathBuf;
use std::process::ExitCode;

/// promptctl - versioned prompt registry
#[derive(Parser, Debug)]
#[command(name = "promptctl")]
#[command(about = "Organize, version and share AI prompt files", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the prompt registry (default: ~/.promptctl/registry)
    #[arg(short, long, global = true, env = "PROMPTCTL_REGISTRY")]
    registry: Option<PathBuf>,

    /// Path to config file (default: ~/.promptctl/config.yaml)
    #[arg(long, global = true, env = "PROMPTCTL_CONFIG")]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, env = "RUST_LOG")]
    log_level: Option<String>,

    /// Enable verbose output (sets log level to debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create the registry directory and its git repository
    Init(InitCommand),

    /// Create a new prompt
    New(NewCommand),

    /// List prompts
    List(ListCommand),

    /// Show one prompt
    Show(ShowCommand),

    /// Edit a prompt, creating a new version by default
    Edit(EditCommand),

    /// Delete a prompt version
    Delete(DeleteCommand),

    /// Validate, commit and push prompts
    Push(PushCommand),

    /// Pull prompts from the remote
    Pull(PullCommand),

    /// Pull, then push
    Sync(SyncCommand),

    /// Show registry status
    Status(StatusCommand),
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Commands::Init(_) => "init",
            Commands::New(_) => "new",
            Commands::List(_) => "list",
            Commands::Show(_) => "show",
            Commands::Edit(_) => "edit",
            Commands::Delete(_) => "delete",
            Commands::Push(_) => "push",
            Commands::Pull(_) => "pull",
            Commands::Sync(_) => "sync",
            Commands::Status(_) => "status",
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(cli: Cli) -> AppResult<()> {
    // Load base configuration from the config file and environment
    let config = AppConfig::load(cli.config)?;

    // Apply CLI overrides
    let config = config.with_overrides(cli.registry, cli.log_level, cli.verbose, cli.no_color);

    // Initialize logging with final configuration
    logging::init_logging(config.log_level.as_deref(), config.no_color)?;

    tracing::debug!("Registry: {:?}", config.registry);
    tracing::debug!("Config file: {:?}", config.config_file);

    let _span = tracing::info_span!("command", name = cli.command.name()).entered();

    // Route to command handlers
    let result = match cli.command {
        Commands::Init(cmd) => cmd.execute(&config),
        Commands::New(cmd) => cmd.execute(&config),
        Commands::List(cmd) => cmd.execute(&config),
        Commands::Show(cmd) => cmd.execute(&config),
        Commands::Edit(cmd) => cmd.execute(&config),
        Commands::Delete(cmd) => cmd.execute(&config),
        Commands::Push(cmd) => cmd.execute(&config),
        Commands::Pull(cmd) => cmd.execute(&config),
        Commands::Sync(cmd) => cmd.execute(&config),
        Commands::Status(cmd) => cmd.execute(&config),
    };

    match &result {
        Ok(_) => tracing::info!("Command completed successfully"),
        Err(e) => tracing::error!("Command failed: {}", e),
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_edit_with_bump() {
        let cli = Cli::try_parse_from(["promptctl", "edit", "web/foo", "--bump", "minor"]).unwrap();
        assert_eq!(cli.command.name(), "edit");
    }

    #[test]
    fn test_rejects_bad_bump_kind() {
        let result = Cli::try_parse_from(["promptctl", "edit", "web/foo", "--bump", "huge"]);
        assert!(result.is_err());
    }
}
