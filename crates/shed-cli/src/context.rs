//! Well-known path resolution
//!
//! Every command works from a `Context` resolved once at startup: the home
//! directory and the current directory. Library crates only ever see
//! concrete paths derived here, so tests never have to mock the process
//! environment; pointing `SHED_HOME` at a scratch directory relocates the
//! whole state tree.

use std::path::{Path, PathBuf};

use crate::error::{CliError, Result};

/// Environment variable that overrides the home directory
pub const HOME_ENV: &str = "SHED_HOME";

/// Resolved base directories for one command invocation
#[derive(Debug, Clone)]
pub struct Context {
    home: PathBuf,
    cwd: PathBuf,
}

impl Context {
    /// Resolve from the process environment
    ///
    /// Honors `SHED_HOME` when set, otherwise asks the OS for the home
    /// directory. The current directory is taken as-is.
    pub fn from_env() -> Result<Self> {
        let home = match std::env::var_os(HOME_ENV) {
            Some(dir) => PathBuf::from(dir),
            None => dirs::home_dir()
                .ok_or_else(|| CliError::user("could not determine the home directory"))?,
        };
        let cwd = std::env::current_dir()?;
        Ok(Self { home, cwd })
    }

    /// Build from explicit paths
    pub fn new(home: impl Into<PathBuf>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            home: home.into(),
            cwd: cwd.into(),
        }
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// `~/.shed/projects.yml` - the project registry
    pub fn registry_file(&self) -> PathBuf {
        self.home.join(".shed").join("projects.yml")
    }

    /// `~/.shed/env/<KEY>` - source of truth for one environment key
    pub fn env_source(&self, key: &str) -> PathBuf {
        self.home.join(".shed").join("env").join(key)
    }

    /// `~/.shed/cursor` - editor config templates mirrored into projects
    pub fn cursor_templates(&self) -> PathBuf {
        self.home.join(".shed").join("cursor")
    }

    /// `~/.local/state/shed/favorites.json` - the favorites list
    pub fn favorites_file(&self) -> PathBuf {
        self.home
            .join(".local")
            .join("state")
            .join("shed")
            .join("favorites.json")
    }

    /// `~/.local/bin/shed` - where `activate` expects the installed binary
    pub fn installed_binary(&self) -> PathBuf {
        self.home.join(".local").join("bin").join("shed")
    }

    /// `~/gits` - conventional clone root listed by `repo ls`
    pub fn gits_dir(&self) -> PathBuf {
        self.home.join("gits")
    }

    /// `~/.zprofile` - zsh login profile
    pub fn zsh_profile(&self) -> PathBuf {
        self.home.join(".zprofile")
    }

    /// `~/.bash_profile` - bash login profile
    pub fn bash_profile(&self) -> PathBuf {
        self.home.join(".bash_profile")
    }
}
