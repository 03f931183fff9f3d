//! [`TestHome`] builder for shed test scenarios.
//!
//! A `TestHome` is a temporary directory standing in for the user's home;
//! point `SHED_HOME` at [`TestHome::root`] to keep CLI runs hermetic.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary home directory with helper methods for seeding shed state
/// and asserting on the files commands leave behind.
///
/// # Example
///
/// ```rust,no_run
/// use shed_test_utils::TestHome;
///
/// let home = TestHome::new();
/// home.seed_env_source("API_KEY", "export API_KEY=secret\n");
/// home.assert_file_exists(".shed/env/API_KEY");
/// ```
pub struct TestHome {
    temp_dir: TempDir,
}

impl Default for TestHome {
    fn default() -> Self {
        Self::new()
    }
}

impl TestHome {
    /// Create an empty temporary home.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the root path (the value to hand to `SHED_HOME`).
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// The `~/.shed` config directory, created on first use.
    pub fn shed_dir(&self) -> PathBuf {
        let dir = self.root().join(".shed");
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    /// Write the source-of-truth content for an env key at
    /// `.shed/env/<key>`.
    pub fn seed_env_source(&self, key: &str, content: &str) {
        let env_dir = self.shed_dir().join("env");
        fs::create_dir_all(&env_dir).unwrap();
        fs::write(env_dir.join(key), content).unwrap();
    }

    /// Write one file of the cursor template tree at
    /// `.shed/cursor/<relative>`.
    pub fn seed_cursor_template(&self, relative: &str, content: &str) {
        let path = self.shed_dir().join("cursor").join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    /// Write the raw registry file at `.shed/projects.yml`.
    pub fn seed_registry(&self, yaml: &str) {
        fs::write(self.shed_dir().join("projects.yml"), yaml).unwrap();
    }

    /// Drop a placeholder installed binary at `.local/bin/shed` so
    /// activate's existence check passes.
    pub fn install_binary(&self) {
        let bin_dir = self.root().join(".local/bin");
        fs::create_dir_all(&bin_dir).unwrap();
        fs::write(bin_dir.join("shed"), "#!/bin/sh\n").unwrap();
    }

    /// Create a project directory at `gits/<name>` under the home.
    pub fn create_project(&self, name: &str) -> PathBuf {
        let dir = self.root().join("gits").join(name);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    /// Assert that `path` (relative to the home root) exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, path: &str) {
        let full_path = self.root().join(path);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }

    /// Assert that `path` (relative to the home root) does **not** exist.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path exists.
    pub fn assert_file_not_exists(&self, path: &str) {
        let full_path = self.root().join(path);
        assert!(
            !full_path.exists(),
            "Expected file NOT to exist: {}",
            full_path.display()
        );
    }

    /// Assert that the file at `path` (relative to root) contains
    /// `content`.
    ///
    /// # Panics
    /// Panics if the file cannot be read or does not contain `content`.
    pub fn assert_file_contains(&self, path: &str, content: &str) {
        let full_path = self.root().join(path);
        let file_content = fs::read_to_string(&full_path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", full_path.display()));
        assert!(
            file_content.contains(content),
            "File {} does not contain expected content.\nExpected: {}\nActual: {}",
            full_path.display(),
            content,
            file_content
        );
    }
}
