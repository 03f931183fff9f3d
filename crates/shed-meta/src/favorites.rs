//! Favorite repositories persisted as JSON.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Favorite repository paths, stored at
/// `~/.local/state/shed/favorites.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Favorites {
    pub repositories: Vec<String>,
}

impl Favorites {
    /// Load favorites from `path`. A missing file is an empty list.
    pub fn load(path: &Path) -> Result<Self> {
        let Some(raw) = shed_fs::read_text_if_exists(path)? else {
            return Ok(Self::default());
        };

        serde_json::from_str(&raw).map_err(|e| Error::InvalidConfig {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Save favorites to `path` atomically, creating parent directories
    /// as needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        shed_fs::config::save(path, self)?;
        Ok(())
    }

    /// Add a repository path, rejecting duplicates.
    pub fn add(&mut self, path: impl Into<String>) -> Result<()> {
        let path = path.into();
        if self.repositories.contains(&path) {
            return Err(Error::FavoriteExists { path });
        }
        self.repositories.push(path);
        Ok(())
    }

    /// Favorites that still point at a git repository (the path exists
    /// and contains a `.git` entry). Stale entries are skipped, not
    /// removed.
    pub fn valid_repositories(&self) -> Vec<&str> {
        self.repositories
            .iter()
            .filter(|repo| Path::new(repo).join(".git").exists())
            .map(String::as_str)
            .collect()
    }
}
