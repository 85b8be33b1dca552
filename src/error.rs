use thiserror::Error;

/// Unified error type for git-semantic operations
#[derive(Error, Debug)]
pub enum GitSemanticError {
    #[error("Repository access failed: {0}")]
    RepositoryAccess(#[from] git2::Error),

    #[error("Not a git repository: {0}")]
    NotARepository(String),

    #[error("Empty repository: {0}")]
    EmptyRepository(String),

    #[error("Invalid version: {0}")]
    InvalidVersion(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Remote operation failed: {0}")]
    Remote(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in git-semantic
pub type Result<T> = std::result::Result<T, GitSemanticError>;

impl GitSemanticError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        GitSemanticError::Config(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        GitSemanticError::InvalidVersion(msg.into())
    }

    /// Create a remote error with context
    pub fn remote(msg: impl Into<String>) -> Self {
        GitSemanticError::Remote(msg.into())
    }

    /// Create an empty-repository error with context
    pub fn empty_repository(msg: impl Into<String>) -> Self {
        GitSemanticError::EmptyRepository(msg.into())
    }
}
