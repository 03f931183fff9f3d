//! End-to-end workflow tests across the shed crates.
//!
//! These compose the library crates directly, walking the same flows the
//! CLI drives: registering projects, wiring env blocks into project files,
//! and pushing owner settings into git repositories.

use pretty_assertions::assert_eq;
use shed_blocks::BlockManager;
use shed_fs::{mirror_dir, read_text_if_exists};
use shed_git::{configure_owner, exclude_file, open_repo};
use shed_meta::{Favorites, ProjectRegistry};
use shed_test_utils::TestHome;
use shed_test_utils::git::{fake_git_dir, real_git_repo};
use std::fs;

// =============================================================================
// Registry round trips
// =============================================================================

#[test]
fn test_registry_round_trip_records_env_keys() {
    let home = TestHome::new();
    let registry_file = home.shed_dir().join("projects.yml");
    let widget = home.create_project("widget");
    let gadget = home.create_project("gadget");

    let mut registry = ProjectRegistry::load(&registry_file).unwrap();
    assert!(registry.is_empty());
    registry.add(&widget).unwrap();
    registry.add(&gadget).unwrap();
    registry.save(&registry_file).unwrap();

    let mut registry = ProjectRegistry::load(&registry_file).unwrap();
    assert_eq!(registry.len(), 2);
    registry.add_env_key(&widget, "API_KEY").unwrap();
    // Recording the same key twice keeps it unique
    registry.add_env_key(&widget, "API_KEY").unwrap();
    registry.save(&registry_file).unwrap();

    let registry = ProjectRegistry::load(&registry_file).unwrap();
    let project = registry.find_by_path(&widget).unwrap();
    assert_eq!(project.env_keys, vec!["API_KEY"]);
    assert!(registry.find_by_path(&gadget).unwrap().env_keys.is_empty());
}

#[test]
fn test_registry_rejects_duplicates_and_unknown_paths() {
    let home = TestHome::new();
    let widget = home.create_project("widget");

    let mut registry = ProjectRegistry::default();
    let err = registry.add_env_key(&widget, "API_KEY").unwrap_err();
    assert!(matches!(err, shed_meta::Error::ProjectNotRegistered { .. }));

    registry.add(&widget).unwrap();
    let err = registry.add(&widget).unwrap_err();
    assert!(matches!(err, shed_meta::Error::ProjectExists { .. }));
}

// =============================================================================
// Env blocks in project files
// =============================================================================

#[test]
fn test_env_block_reaches_project_env_file() {
    let home = TestHome::new();
    home.seed_env_source("API_KEY", "export API_KEY=secret\n");
    let widget = home.create_project("widget");
    let env_file = widget.join(".env");

    let source = home.shed_dir().join("env").join("API_KEY");
    let value = read_text_if_exists(&source).unwrap().unwrap();
    BlockManager::new("API_KEY", value)
        .update_file(&env_file)
        .unwrap();

    assert_eq!(
        fs::read_to_string(&env_file).unwrap(),
        "# BEGIN:API_KEY\nexport API_KEY=secret\n# END:API_KEY\n"
    );
}

#[test]
fn test_rotated_value_replaces_block_in_place() {
    let home = TestHome::new();
    let widget = home.create_project("widget");
    let env_file = widget.join(".env");
    fs::write(&env_file, "# hand-written\nexport EDITOR=vim\n").unwrap();

    BlockManager::new("TOKEN", "export TOKEN=old\n")
        .update_file(&env_file)
        .unwrap();

    // Hand edits after the block must survive the next refresh
    let with_tail = format!("{}export LANG=C\n", fs::read_to_string(&env_file).unwrap());
    fs::write(&env_file, &with_tail).unwrap();

    BlockManager::new("TOKEN", "export TOKEN=rotated\n")
        .update_file(&env_file)
        .unwrap();

    assert_eq!(
        fs::read_to_string(&env_file).unwrap(),
        "# hand-written\nexport EDITOR=vim\n\n\
         # BEGIN:TOKEN\nexport TOKEN=rotated\n# END:TOKEN\nexport LANG=C\n"
    );
}

// =============================================================================
// Repository setup composition
// =============================================================================

#[test]
fn test_full_setup_flow_for_registered_project() {
    let home = TestHome::new();
    home.seed_env_source("API_KEY", "export API_KEY=secret\n");
    home.seed_cursor_template("rules/style.md", "Prefer small commits.\n");
    let widget = home.create_project("widget");
    let repo = real_git_repo(&widget);

    let registry_file = home.shed_dir().join("projects.yml");
    let mut registry = ProjectRegistry::load(&registry_file).unwrap();
    registry.add(&widget).unwrap();
    registry.add_env_key(&widget, "API_KEY").unwrap();
    registry.save(&registry_file).unwrap();

    // Each step sync performs for a project, composed by hand
    mirror_dir(&home.shed_dir().join("cursor"), &widget.join(".cursor")).unwrap();

    let exclude = exclude_file(&repo).unwrap();
    BlockManager::new("shed", ".cursor/\n.env")
        .update_file(&exclude)
        .unwrap();
    configure_owner(&repo, "alice").unwrap();

    let registry = ProjectRegistry::load(&registry_file).unwrap();
    for key in &registry.find_by_path(&widget).unwrap().env_keys {
        let value = read_text_if_exists(&home.shed_dir().join("env").join(key))
            .unwrap()
            .unwrap();
        BlockManager::new(key, value)
            .update_file(&widget.join(".env"))
            .unwrap();
    }

    assert_eq!(
        fs::read_to_string(widget.join(".cursor/rules/style.md")).unwrap(),
        "Prefer small commits.\n"
    );

    let exclude_text = fs::read_to_string(&exclude).unwrap();
    assert!(exclude_text.contains("# BEGIN:shed"));
    assert!(exclude_text.contains(".cursor/"));
    assert!(exclude_text.contains("# END:shed"));

    assert_eq!(
        fs::read_to_string(widget.join(".env")).unwrap(),
        "# BEGIN:API_KEY\nexport API_KEY=secret\n# END:API_KEY\n"
    );

    let reopened = open_repo(&widget).unwrap();
    let config = reopened.config().unwrap().snapshot().unwrap();
    assert_eq!(config.get_str("user.name").unwrap(), "alice");
    assert_eq!(config.get_str("user.email").unwrap(), "alice@gmail.com");
    assert_eq!(
        reopened.find_remote("origin").unwrap().url(),
        Some("git@alice.github.com:alice/widget.git")
    );
}

// =============================================================================
// Favorites
// =============================================================================

#[test]
fn test_favorites_skip_stale_entries_on_listing() {
    let home = TestHome::new();
    let favorites_file = home.root().join(".local/state/shed/favorites.json");
    let live = home.create_project("live");
    fake_git_dir(&live);
    let gone = home.create_project("gone"); // exists but has no .git

    let mut favorites = Favorites::load(&favorites_file).unwrap();
    assert!(favorites.repositories.is_empty());
    favorites.add(live.to_string_lossy().into_owned()).unwrap();
    favorites.add(gone.to_string_lossy().into_owned()).unwrap();
    favorites.save(&favorites_file).unwrap();

    let mut favorites = Favorites::load(&favorites_file).unwrap();
    assert_eq!(favorites.repositories.len(), 2);
    assert_eq!(favorites.valid_repositories(), vec![live.to_str().unwrap()]);

    let err = favorites.add(live.to_string_lossy().into_owned()).unwrap_err();
    assert!(matches!(err, shed_meta::Error::FavoriteExists { .. }));
}
