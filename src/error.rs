use thiserror::Error;

/// Unified error type for changelog-relay operations.
///
/// Every variant is terminal: the pipeline never retries internally, each
/// failure aborts the run and is reported verbatim. Per-commit parse failures
/// are deliberately absent here; they are recovered locally (see
/// [crate::conventional]) and only logged.
#[derive(Error, Debug)]
pub enum ChangelogError {
    #[error("Ambiguous range input: provide either --tag or both --from-tag and --to-tag")]
    AmbiguousRangeInput,

    #[error("Tag mismatch: '{given}' is not the most recent tag (latest is '{latest}')")]
    TagMismatch { given: String, latest: String },

    #[error("No tags exist in the repository")]
    NoLatestTag,

    #[error("No previous tag exists before '{latest}'")]
    NoPreviousTag { latest: String },

    #[error("No commits found between '{previous}' and '{latest}'")]
    NoCommitsInRange { previous: String, latest: String },

    #[error("Delivery to '{destination}' failed: {body}")]
    Delivery { destination: String, body: String },

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in changelog-relay
pub type Result<T> = std::result::Result<T, ChangelogError>;

impl ChangelogError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ChangelogError::Config(msg.into())
    }

    /// Create a delivery error carrying the response body
    pub fn delivery(destination: impl Into<String>, body: impl Into<String>) -> Self {
        ChangelogError::Delivery {
            destination: destination.into(),
            body: body.into(),
        }
    }
}
