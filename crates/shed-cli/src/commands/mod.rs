//! Command implementations for shed

pub mod activate;
pub mod env;
pub mod project;
pub mod repo;
pub mod shell;

pub use activate::run_activate;
pub use env::run_env_add;
pub use project::{run_project_add, run_project_ls, run_project_sync};
pub use repo::{run_fav_add, run_fav_ls, run_repo_ls, run_repo_setup};
pub use shell::run_shell_setup;
