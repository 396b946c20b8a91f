//! CLI error types.

use apidoc_config::ConfigError;
use apidoc_documenter::DocumenterError;
use apidoc_model::LoadError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Load(#[from] LoadError),

    #[error("{0}")]
    Documenter(#[from] DocumenterError),

    #[error("{0}")]
    Validation(String),
}
