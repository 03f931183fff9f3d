//! shed CLI
//!
//! Registers projects, injects env blocks, wires shell profiles, and
//! keeps git repositories configured the same way everywhere.

mod cli;
mod commands;
mod context;
mod error;
mod templates;

use clap::{CommandFactory, Parser};
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands, EnvAction, FavAction, ProjectAction, RepoAction, ShellAction};
use context::Context;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    // Execute command
    match cli.command {
        Some(cmd) => execute_command(cmd),
        None => {
            // No command provided - show help hint
            println!(
                "{} personal project and environment manager",
                "shed".green().bold()
            );
            println!();
            println!("Run {} for available commands.", "shed --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Project { action } => cmd_project(action),
        Commands::Env { action } => cmd_env(action),
        Commands::Shell { action } => cmd_shell(action),
        Commands::Repo { action } => cmd_repo(action),
        Commands::Activate { shell } => cmd_activate(shell),
        Commands::Completions { shell } => cmd_completions(shell),
    }
}

fn cmd_project(action: ProjectAction) -> Result<()> {
    let ctx = Context::from_env()?;
    match action {
        ProjectAction::Add => commands::run_project_add(&ctx),
        ProjectAction::Ls => commands::run_project_ls(&ctx),
        ProjectAction::Sync => commands::run_project_sync(&ctx),
    }
}

fn cmd_env(action: EnvAction) -> Result<()> {
    let ctx = Context::from_env()?;
    match action {
        EnvAction::Add { key, save } => commands::run_env_add(&ctx, &key, save),
    }
}

fn cmd_shell(action: ShellAction) -> Result<()> {
    let ctx = Context::from_env()?;
    match action {
        ShellAction::Setup { shell } => commands::run_shell_setup(&ctx, &shell),
    }
}

fn cmd_repo(action: RepoAction) -> Result<()> {
    let ctx = Context::from_env()?;
    match action {
        RepoAction::Setup { user } => commands::run_repo_setup(&ctx, user.as_deref()),
        RepoAction::Fav { action: None } => commands::run_fav_ls(&ctx),
        RepoAction::Fav {
            action: Some(FavAction::Add),
        } => commands::run_fav_add(&ctx),
        RepoAction::Ls => commands::run_repo_ls(&ctx),
    }
}

fn cmd_activate(shell: cli::ActivateShell) -> Result<()> {
    let ctx = Context::from_env()?;
    commands::run_activate(&ctx, shell)
}

fn cmd_completions(shell: clap_complete::Shell) -> Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
    Ok(())
}
