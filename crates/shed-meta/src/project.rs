//! Project registry persisted as a YAML sequence.
//!
//! The on-disk format is a plain list of [`Project`] entries. Registries
//! written before project metadata existed hold a bare sequence of path
//! strings; those still load, each path becoming a project named after
//! its final component.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Error, Result};

/// One registered project directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Display name, defaulting to the directory's final component.
    pub name: String,
    /// Absolute path of the project directory.
    pub path: PathBuf,
    /// Git user applied by sync when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub git_user: Option<String>,
    /// Environment keys re-injected into the project `.env` by sync.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub env_keys: Vec<String>,
    /// Registration time.
    pub created_at: DateTime<Utc>,
}

impl Project {
    fn from_path(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        Self {
            name,
            path,
            git_user: None,
            env_keys: Vec::new(),
            created_at: Utc::now(),
        }
    }
}

/// In-memory view of the registry file.
#[derive(Debug, Clone, Default)]
pub struct ProjectRegistry {
    projects: Vec<Project>,
}

impl ProjectRegistry {
    /// Load the registry from `path`. A missing file is an empty
    /// registry, not an error.
    pub fn load(path: &Path) -> Result<Self> {
        let Some(raw) = shed_fs::read_text_if_exists(path)? else {
            return Ok(Self::default());
        };

        Ok(Self {
            projects: parse_registry(path, &raw)?,
        })
    }

    /// Save the registry to `path` atomically, creating parent
    /// directories as needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        shed_fs::config::save(path, &self.projects)?;
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Register a directory. The project name defaults to the final path
    /// component.
    ///
    /// Fails with [`Error::ProjectExists`] when the path is already
    /// registered.
    pub fn add(&mut self, path: impl Into<PathBuf>) -> Result<&Project> {
        let path = path.into();
        if self.find_by_path(&path).is_some() {
            return Err(Error::ProjectExists { path });
        }

        debug!(path = %path.display(), "registering project");
        self.projects.push(Project::from_path(path));
        Ok(self.projects.last().expect("just pushed"))
    }

    pub fn find_by_path(&self, path: &Path) -> Option<&Project> {
        self.projects.iter().find(|p| p.path == path)
    }

    /// Record `key` on the project registered at `path`, keeping keys
    /// unique. Recording an already-present key is a no-op.
    pub fn add_env_key(&mut self, path: &Path, key: &str) -> Result<()> {
        let project = self
            .projects
            .iter_mut()
            .find(|p| p.path == path)
            .ok_or_else(|| Error::ProjectNotRegistered {
                path: path.to_path_buf(),
            })?;

        if !project.env_keys.iter().any(|k| k == key) {
            project.env_keys.push(key.to_string());
        }
        Ok(())
    }

    /// Projects ordered newest registration first.
    pub fn sorted_newest_first(&self) -> Vec<&Project> {
        let mut sorted: Vec<&Project> = self.projects.iter().collect();
        sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        sorted
    }
}

fn parse_registry(path: &Path, raw: &str) -> Result<Vec<Project>> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }

    // Legacy registries are a bare sequence of path strings
    if let Ok(paths) = serde_yaml::from_str::<Vec<String>>(raw)
        && !paths.is_empty()
    {
        debug!(count = paths.len(), "migrating legacy registry entries");
        return Ok(paths
            .into_iter()
            .map(|p| Project::from_path(PathBuf::from(p)))
            .collect());
    }

    serde_yaml::from_str(raw).map_err(|e| Error::InvalidConfig {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
