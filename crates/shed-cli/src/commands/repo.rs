//! Repository commands: setup, favorites, listing

use std::path::PathBuf;

use colored::Colorize;
use tracing::debug;

use shed_blocks::BlockManager;
use shed_meta::Favorites;

use crate::context::Context;
use crate::error::{CliError, Result};
use crate::templates;

/// Run the repo setup command
///
/// Writes the exclude block into the repository's `info/exclude`, mirrors
/// the cursor templates into `.cursor/`, and with `user` set configures
/// the local git identity and origin remote.
pub fn run_repo_setup(ctx: &Context, user: Option<&str>) -> Result<()> {
    let repo = shed_git::open_repo(ctx.cwd())?;

    let exclude = shed_git::exclude_file(&repo)?;
    BlockManager::new(templates::EXCLUDE_LABEL, templates::EXCLUDE_BODY).update_file(&exclude)?;
    println!("{} Updated {}", "OK".green().bold(), exclude.display());

    let cursor_source = ctx.cursor_templates();
    if cursor_source.is_dir() {
        shed_fs::mirror_dir(&cursor_source, &ctx.cwd().join(".cursor"))?;
        println!("{} Mirrored cursor templates", "OK".green().bold());
    } else {
        debug!(path = %cursor_source.display(), "no cursor templates to mirror");
    }

    if let Some(user) = user {
        shed_git::configure_owner(&repo, user)?;
        println!(
            "{} Configured git identity and origin for {}",
            "OK".green().bold(),
            user.cyan()
        );
    }

    Ok(())
}

/// Run the repo fav command: print favorites that still are repositories
///
/// Output is plain paths, one per line, for consumption by shell helpers.
pub fn run_fav_ls(ctx: &Context) -> Result<()> {
    let favorites = Favorites::load(&ctx.favorites_file())?;
    for repo in favorites.valid_repositories() {
        println!("{}", repo);
    }
    Ok(())
}

/// Run the repo fav add command
pub fn run_fav_add(ctx: &Context) -> Result<()> {
    if !ctx.cwd().join(".git").exists() {
        return Err(CliError::user(format!(
            "{} is not a git repository",
            ctx.cwd().display()
        )));
    }

    let favorites_path = ctx.favorites_file();
    let mut favorites = Favorites::load(&favorites_path)?;
    favorites.add(ctx.cwd().to_string_lossy())?;
    favorites.save(&favorites_path)?;

    println!(
        "{} Added {} to favorites",
        "OK".green().bold(),
        ctx.cwd().display()
    );
    Ok(())
}

/// Run the repo ls command: immediate subdirectories of `~/gits`
pub fn run_repo_ls(ctx: &Context) -> Result<()> {
    let gits = ctx.gits_dir();
    let entries = std::fs::read_dir(&gits)
        .map_err(|e| CliError::user(format!("could not read {}: {}", gits.display(), e)))?;

    let mut repos: Vec<PathBuf> = Vec::new();
    for entry in entries {
        let entry = entry.map_err(CliError::Io)?;
        if entry.path().is_dir() {
            repos.push(entry.path());
        }
    }
    repos.sort();

    for repo in repos {
        println!("{}", repo.display());
    }
    Ok(())
}
