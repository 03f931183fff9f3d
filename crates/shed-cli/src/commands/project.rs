//! Project commands: add, ls, sync

use std::path::Path;

use colored::Colorize;

use shed_blocks::BlockManager;
use shed_meta::{Project, ProjectRegistry};

use crate::context::Context;
use crate::error::{CliError, Result};
use crate::templates;

/// Run the project add command
pub fn run_project_add(ctx: &Context) -> Result<()> {
    let registry_path = ctx.registry_file();
    let mut registry = ProjectRegistry::load(&registry_path)?;
    registry.add(ctx.cwd())?;
    registry.save(&registry_path)?;

    println!(
        "{} Registered {}",
        "OK".green().bold(),
        ctx.cwd().display()
    );
    Ok(())
}

/// Run the project ls command: registered projects, newest first
pub fn run_project_ls(ctx: &Context) -> Result<()> {
    let registry = ProjectRegistry::load(&ctx.registry_file())?;
    if registry.is_empty() {
        println!(
            "No projects registered. Run {} inside a project first.",
            "shed project add".cyan()
        );
        return Ok(());
    }

    for (i, project) in registry.sorted_newest_first().iter().enumerate() {
        println!("{}: {} ({})", i + 1, project.name, project.path.display());
    }
    Ok(())
}

/// Run the project sync command
///
/// Re-applies the managed state to every registered project: cursor
/// templates, the git exclude block, the stored git identity, and the
/// recorded env keys. A failing project is reported and skipped so the
/// rest still sync.
pub fn run_project_sync(ctx: &Context) -> Result<()> {
    let registry = ProjectRegistry::load(&ctx.registry_file())?;
    if registry.is_empty() {
        return Err(CliError::user("no projects registered"));
    }

    let cursor_source = ctx.cursor_templates();
    if !cursor_source.is_dir() {
        return Err(CliError::user(format!(
            "cursor templates not found at {}",
            cursor_source.display()
        )));
    }

    println!(
        "{} Syncing {} project(s)...",
        "=>".blue().bold(),
        registry.len()
    );

    for project in registry.projects() {
        println!("{} {}", "=>".blue().bold(), project.name);
        if let Err(e) = sync_project(ctx, project, &cursor_source) {
            println!("   {} {}", "!".red(), e);
        }
    }

    println!("{} All projects synced.", "OK".green().bold());
    Ok(())
}

fn sync_project(ctx: &Context, project: &Project, cursor_source: &Path) -> Result<()> {
    shed_fs::mirror_dir(cursor_source, &project.path.join(".cursor"))?;

    if !project.path.join(".git").exists() {
        println!(
            "   {} not a git repository, skipping repository config",
            "-".yellow()
        );
        return Ok(());
    }

    let repo = shed_git::open_repo(&project.path)?;
    let exclude = shed_git::exclude_file(&repo)?;
    BlockManager::new(templates::EXCLUDE_LABEL, templates::EXCLUDE_BODY).update_file(&exclude)?;

    if let Some(user) = &project.git_user {
        shed_git::configure_owner(&repo, user)?;
        println!("   {} git identity set to {}", "+".green(), user);
    }

    for key in &project.env_keys {
        let source = ctx.env_source(key);
        match shed_fs::read_text_if_exists(&source)? {
            Some(content) => {
                BlockManager::new(key, content).update_file(&project.path.join(".env"))?;
                println!("   {} {} block refreshed", "+".green(), key);
            }
            None => {
                println!(
                    "   {} env source missing: {}",
                    "!".yellow(),
                    source.display()
                );
            }
        }
    }

    Ok(())
}
