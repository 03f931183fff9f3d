//! Rendered block bodies
//!
//! Everything shed writes into a managed block is rendered here with plain
//! `format!`. Block labels are fixed per feature area so repeated runs keep
//! updating the same span.

use std::path::Path;

/// Label of the shell profile block
pub const PROFILE_LABEL: &str = "custom";

/// Label of the git exclude block
pub const EXCLUDE_LABEL: &str = "shed";

/// Body of the `.git/info/exclude` block: the files shed itself drops into
/// a project and which should never be committed.
pub const EXCLUDE_BODY: &str = ".cursor/\n.env";

/// Profile snippet injected by `shell setup`: puts `~/.local/bin` on PATH
/// and evals the activate wrapper on login.
pub fn profile_snippet(home: &Path, shell: &str) -> String {
    let bin_dir = home.join(".local").join("bin");
    format!(
        "export PATH=\"{}:$PATH\"\neval \"$({} activate {})\"",
        bin_dir.display(),
        bin_dir.join("shed").display(),
        shell
    )
}

/// Shell function printed by `activate`, wrapping the installed binary so
/// the caller's shell always resolves the same copy.
pub fn activate_function(home: &Path) -> String {
    format!(
        "shed() {{\n  \"{}\" \"$@\"\n}}\n",
        home.join(".local").join("bin").join("shed").display()
    )
}
