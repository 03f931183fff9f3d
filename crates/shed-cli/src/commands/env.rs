//! Env injection command
//!
//! `env add KEY` copies the content stored at `~/.shed/env/KEY` into the
//! current directory's `.env` as a managed block labeled with the key, so
//! re-running after the stored value changed updates the block in place.

use colored::Colorize;

use shed_blocks::BlockManager;
use shed_meta::ProjectRegistry;

use crate::context::Context;
use crate::error::{CliError, Result};

/// Run the env add command
///
/// With `save` the key is also recorded on the project registered at the
/// current directory, so `project sync` keeps re-applying it.
pub fn run_env_add(ctx: &Context, key: &str, save: bool) -> Result<()> {
    let source = ctx.env_source(key);
    let content = shed_fs::read_text_if_exists(&source)?.ok_or_else(|| {
        CliError::user(format!(
            "no stored value for {}: {} does not exist",
            key,
            source.display()
        ))
    })?;

    let env_file = ctx.cwd().join(".env");
    BlockManager::new(key, content).update_file(&env_file)?;
    println!(
        "{} Updated {} with the {} block",
        "OK".green().bold(),
        env_file.display(),
        key.cyan()
    );

    if save {
        let registry_path = ctx.registry_file();
        let mut registry = ProjectRegistry::load(&registry_path)?;
        if registry.is_empty() {
            return Err(CliError::user("no projects registered"));
        }
        registry.add_env_key(ctx.cwd(), key)?;
        registry.save(&registry_path)?;
        println!(
            "{} Recorded {} on the project for future syncs",
            "OK".green().bold(),
            key.cyan()
        );
    }

    Ok(())
}
