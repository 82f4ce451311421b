use thiserror::Error;

/// Main error type for the ocommit application
#[derive(Error, Debug)]
pub enum OcommitError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Git error: {0}")]
    Git(#[from] GitError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Operation cancelled by user")]
    UserCancelled,

    #[error("A commit workflow is already in progress")]
    WorkflowBusy,

    #[error("Prompt error: {0}")]
    Prompt(inquire::InquireError),
}

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error while accessing config: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration file not found at expected location")]
    ConfigNotFound,

    #[error("Configuration file already exists - use 'ocommit set-mode' to modify")]
    ConfigAlreadyExists,

    #[error("Invalid configuration format - please check your config.toml syntax")]
    InvalidConfig,

    #[error("Could not determine home directory - please set HOME environment variable")]
    HomeDirNotFound,
}

/// Git-related errors
#[derive(Error, Debug)]
pub enum GitError {
    #[error("IO error during git operation: {0}")]
    IoError(#[from] std::io::Error),

    #[error("No git repositories found under {root}")]
    NoRepositoriesFound { root: String },

    #[error("Git command failed: {command}\nOutput: {output}")]
    CommandFailed { command: String, output: String },
}

/// Type alias for Result using `OcommitError`
pub type Result<T> = std::result::Result<T, OcommitError>;
