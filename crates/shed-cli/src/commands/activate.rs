//! Activate command
//!
//! Prints the wrapper function that `shell setup` arranges to eval on
//! login. The output goes to stdout unstyled: it is shell source, not a
//! report for a human.

use tracing::debug;

use crate::cli::ActivateShell;
use crate::context::Context;
use crate::error::{CliError, Result};
use crate::templates;

/// Run the activate command
///
/// The wrapper is the same for every supported shell; the argument only
/// selects which shell asked for it.
pub fn run_activate(ctx: &Context, shell: ActivateShell) -> Result<()> {
    let binary = ctx.installed_binary();
    if !binary.exists() {
        return Err(CliError::user(format!(
            "shed not found at {}: finish the install before activating",
            binary.display()
        )));
    }

    debug!(?shell, "emitting activate wrapper");
    print!("{}", templates::activate_function(ctx.home()));
    Ok(())
}
