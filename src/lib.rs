pub mod actions;
pub mod cli;
pub mod config;
pub mod errors;
pub mod git;
pub mod message;
pub mod prompt;
pub mod utils;
pub mod workflow;

/// Name of the metadata directory that marks the root of a Git repository
/// or submodule.
pub const GIT_DIR: &str = ".git";
