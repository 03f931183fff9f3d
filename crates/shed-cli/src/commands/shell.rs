//! Shell profile setup command

use std::path::{Path, PathBuf};

use colored::Colorize;

use shed_blocks::BlockManager;

use crate::context::Context;
use crate::error::{CliError, Result};
use crate::templates;

/// Run the shell setup command
///
/// Injects the profile block (PATH entry plus the activate hook) into the
/// login profile of the given shell and prints the reload hint.
pub fn run_shell_setup(ctx: &Context, shell: &str) -> Result<()> {
    let shell = normalize_shell(shell);
    let profile = profile_for(ctx, &shell)?;

    let snippet = templates::profile_snippet(ctx.home(), &shell);
    BlockManager::new(templates::PROFILE_LABEL, snippet).update_file(&profile)?;

    println!("{} Updated {}", "OK".green().bold(), profile.display());
    println!(
        "Reload it with {}",
        format!(". {}", profile.display()).cyan()
    );
    Ok(())
}

/// Accepts both bare names and full paths like `/bin/zsh`
fn normalize_shell(shell: &str) -> String {
    Path::new(shell)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(shell)
        .to_string()
}

fn profile_for(ctx: &Context, shell: &str) -> Result<PathBuf> {
    match shell {
        "zsh" => Ok(ctx.zsh_profile()),
        "bash" => Ok(ctx.bash_profile()),
        other => Err(CliError::user(format!(
            "unsupported shell: {} (supported: bash, zsh)",
            other
        ))),
    }
}
