//! CLI command implementations.

pub(crate) mod markdown;

pub(crate) use markdown::MarkdownArgs;
