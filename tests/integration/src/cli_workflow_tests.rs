//! Full-workflow tests driving the `shed` binary end to end.
//!
//! Each test points `SHED_HOME` at an isolated [`TestHome`] and walks a
//! realistic command sequence, asserting on the files the commands leave
//! behind rather than on any single command in isolation.

use assert_cmd::Command;
use predicates::prelude::*;
use shed_test_utils::TestHome;
use shed_test_utils::git::real_git_repo;
use std::fs;
use std::path::Path;

#[allow(deprecated)]
fn shed_cmd(home: &TestHome, cwd: &Path) -> Command {
    let mut cmd = Command::cargo_bin("shed").unwrap();
    cmd.env("SHED_HOME", home.root()).current_dir(cwd);
    cmd
}

// =============================================================================
// Fresh machine bootstrap
// =============================================================================

#[test]
fn test_bootstrap_new_machine_then_sync() {
    let home = TestHome::new();
    home.install_binary();
    home.seed_env_source("API_KEY", "export API_KEY=secret\n");
    home.seed_cursor_template("rules/style.md", "Prefer small commits.\n");
    let widget = home.create_project("widget");
    real_git_repo(&widget);

    shed_cmd(&home, &widget)
        .args(["shell", "setup", "zsh"])
        .assert()
        .success();
    home.assert_file_contains(".zprofile", "# BEGIN:custom");

    shed_cmd(&home, &widget)
        .args(["project", "add"])
        .assert()
        .success();
    shed_cmd(&home, &widget)
        .args(["env", "add", "API_KEY", "--save"])
        .assert()
        .success();
    home.assert_file_contains("gits/widget/.env", "export API_KEY=secret");

    shed_cmd(&home, &widget)
        .args(["project", "sync"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All projects synced"));

    assert_eq!(
        fs::read_to_string(widget.join(".cursor/rules/style.md")).unwrap(),
        "Prefer small commits.\n"
    );
    home.assert_file_contains("gits/widget/.git/info/exclude", "# BEGIN:shed");
}

#[test]
fn test_project_ls_shows_registered_projects() {
    let home = TestHome::new();
    let widget = home.create_project("widget");
    let gadget = home.create_project("gadget");

    shed_cmd(&home, &widget)
        .args(["project", "add"])
        .assert()
        .success();
    shed_cmd(&home, &gadget)
        .args(["project", "add"])
        .assert()
        .success();

    shed_cmd(&home, &widget)
        .args(["project", "ls"])
        .assert()
        .success()
        .stdout(predicate::str::contains("widget").and(predicate::str::contains("gadget")));
}

// =============================================================================
// Sync keeps projects current
// =============================================================================

#[test]
fn test_sync_refreshes_rotated_env_value() {
    let home = TestHome::new();
    home.seed_cursor_template("rules/base.md", "Base rules.\n");
    home.seed_env_source("TOKEN", "export TOKEN=old\n");
    let widget = home.create_project("widget");
    real_git_repo(&widget);

    shed_cmd(&home, &widget)
        .args(["project", "add"])
        .assert()
        .success();
    shed_cmd(&home, &widget)
        .args(["env", "add", "TOKEN", "--save"])
        .assert()
        .success();

    // Rotate the stored value, then sync it out
    home.seed_env_source("TOKEN", "export TOKEN=rotated\n");
    shed_cmd(&home, &widget)
        .args(["project", "sync"])
        .assert()
        .success();

    let text = fs::read_to_string(widget.join(".env")).unwrap();
    assert!(text.contains("export TOKEN=rotated"));
    assert!(!text.contains("export TOKEN=old"));
    assert_eq!(text.matches("# BEGIN:TOKEN").count(), 1);
}

// =============================================================================
// Repository setup and favorites
// =============================================================================

#[test]
fn test_repo_setup_then_favorite() {
    let home = TestHome::new();
    let tool = home.create_project("tool");
    real_git_repo(&tool);

    shed_cmd(&home, &tool)
        .args(["repo", "setup", "--user", "alice"])
        .assert()
        .success();

    let repo = git2::Repository::open(&tool).unwrap();
    let config = repo.config().unwrap().snapshot().unwrap();
    assert_eq!(config.get_str("user.name").unwrap(), "alice");
    assert_eq!(
        repo.find_remote("origin").unwrap().url(),
        Some("git@alice.github.com:alice/tool.git")
    );

    shed_cmd(&home, &tool)
        .args(["repo", "fav", "add"])
        .assert()
        .success();
    shed_cmd(&home, &tool)
        .args(["repo", "fav"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tool"));
    shed_cmd(&home, &tool)
        .args(["repo", "ls"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tool"));
}
