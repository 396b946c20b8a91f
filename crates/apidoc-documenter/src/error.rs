//! Error types for page generation.

use std::path::PathBuf;

/// Error reported by a [`PageSink`](crate::PageSink).
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    /// Filesystem operation failed.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// Path being read, written or deleted.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Sink refused the page for a reason of its own.
    #[error("Page sink error: {0}")]
    Other(String),
}

/// Error during documentation generation.
#[derive(Debug, thiserror::Error)]
pub enum DocumenterError {
    /// Reference node created with an empty name.
    #[error("Reference node name cannot be empty")]
    EmptyName,
    /// Parentless node created when the tree already has a root.
    #[error("Reference tree already has a root node `{existing}`")]
    SecondRoot {
        /// Name of the existing root.
        existing: String,
    },
    /// Two API items resolve to the same page id.
    #[error("Page id `{id}` is produced by more than one API item")]
    IdentityConflict {
        /// Conflicting page id.
        id: String,
    },
    /// Page sink failed.
    #[error(transparent)]
    Sink(#[from] SinkError),
}
