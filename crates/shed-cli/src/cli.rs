//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// shed - personal project and environment manager
#[derive(Parser, Debug)]
#[command(name = "shed")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Manage registered projects
    #[command(alias = "p")]
    Project {
        /// Project action to perform
        #[command(subcommand)]
        action: ProjectAction,
    },

    /// Manage environment variables
    Env {
        /// Env action to perform
        #[command(subcommand)]
        action: EnvAction,
    },

    /// Configure shell profiles
    Shell {
        /// Shell action to perform
        #[command(subcommand)]
        action: ShellAction,
    },

    /// Work with git repositories
    #[command(alias = "r")]
    Repo {
        /// Repository action to perform
        #[command(subcommand)]
        action: RepoAction,
    },

    /// Print the shell function wrapping the installed binary
    ///
    /// Meant to be evaluated by the shell, not read:
    ///
    /// Examples:
    ///   eval "$(shed activate zsh)"
    ///   echo 'eval "$(shed activate bash)"' >> ~/.bashrc
    Activate {
        /// Shell the wrapper is evaluated by
        #[arg(value_enum)]
        shell: ActivateShell,
    },

    /// Generate shell completions
    ///
    /// Outputs completion script for your shell.
    ///
    /// Examples:
    ///   shed completions bash > ~/.local/share/bash-completion/completions/shed
    ///   shed completions zsh > ~/.zfunc/_shed
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Project management actions
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ProjectAction {
    /// Register the current directory as a project
    Add,

    /// List registered projects, newest first
    Ls,

    /// Re-apply managed configuration to every registered project
    ///
    /// Mirrors the cursor templates, refreshes the git exclude block,
    /// re-applies the stored git identity and env keys. Projects that
    /// fail are reported and skipped.
    Sync,
}

/// Environment variable actions
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum EnvAction {
    /// Inject a saved key into ./.env
    ///
    /// Reads the content stored at ~/.shed/env/<KEY> and writes it as a
    /// managed block into the .env file of the current directory.
    Add {
        /// Key to inject
        key: String,

        /// Also record the key on the registered project for later sync
        #[arg(long)]
        save: bool,
    },
}

/// Shell profile actions
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ShellAction {
    /// Patch the login profile for the given shell
    ///
    /// Accepts a bare name or a full path (zsh, /bin/zsh).
    Setup {
        /// Shell to configure (bash or zsh)
        shell: String,
    },
}

/// Repository actions
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum RepoAction {
    /// Configure the repository in the current directory
    ///
    /// Writes the exclude block into .git/info/exclude and mirrors the
    /// cursor templates. With --user also sets the local git identity
    /// and rewrites the origin remote.
    Setup {
        /// Git user set as identity and origin owner
        #[arg(long)]
        user: Option<String>,
    },

    /// Show favorite repositories, or add one
    Fav {
        /// Favorite action to perform (none lists favorites)
        #[command(subcommand)]
        action: Option<FavAction>,
    },

    /// List repositories under ~/gits
    Ls,
}

/// Favorite repository actions
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum FavAction {
    /// Add the current repository to favorites
    Add,
}

/// Shells the activate wrapper supports
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivateShell {
    Bash,
    Zsh,
}
