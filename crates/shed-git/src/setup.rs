//! Repository setup operations.

use std::fs;
use std::path::{Path, PathBuf};

use git2::Repository;
use tracing::debug;

use crate::{Error, Result};

/// Open the repository rooted at `path`.
///
/// Unlike `Repository::discover`, this does not walk up parent
/// directories; setup only ever targets the directory it was pointed at.
pub fn open_repo(path: &Path) -> Result<Repository> {
    Repository::open(path).map_err(|_| Error::NotARepository {
        path: path.to_path_buf(),
    })
}

/// Path of `info/exclude` under the repository's git dir, with the
/// `info/` directory created when missing.
pub fn exclude_file(repo: &Repository) -> Result<PathBuf> {
    let info_dir = repo.path().join("info");
    fs::create_dir_all(&info_dir).map_err(|e| shed_fs::Error::io(&info_dir, e))?;
    Ok(info_dir.join("exclude"))
}

/// The SSH origin URL convention: one host alias per GitHub user.
pub fn origin_url(user: &str, repo_name: &str) -> String {
    format!("git@{user}.github.com:{user}/{repo_name}.git")
}

/// The repository directory's final component, used as the remote
/// repository name.
pub fn repo_dir_name(repo: &Repository) -> Result<String> {
    let workdir = repo.workdir().ok_or_else(|| Error::BareRepository {
        path: repo.path().to_path_buf(),
    })?;
    Ok(workdir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default())
}

/// Point the repository at its owner: set local `user.name` and
/// `user.email` (the `<user>@gmail.com` convention) and replace the
/// `origin` remote with the owner's SSH alias URL. A missing `origin`
/// is not an error; an existing one is removed first.
pub fn configure_owner(repo: &Repository, user: &str) -> Result<()> {
    let mut config = repo.config()?;
    config.set_str("user.name", user)?;
    config.set_str("user.email", &format!("{user}@gmail.com"))?;

    if repo.find_remote("origin").is_ok() {
        repo.remote_delete("origin")?;
    }

    let url = origin_url(user, &repo_dir_name(repo)?);
    debug!(%url, "setting origin remote");
    repo.remote("origin", &url)?;

    Ok(())
}
