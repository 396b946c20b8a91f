//! Page generation and cross-reference engine for apidoc.
//!
//! This crate provides:
//! - [`ReferenceTree`]: arena of reference nodes with stable page ids
//! - [`build_breadcrumb`]: navigation trail for a node
//! - [`Documenter`]: walks loaded API descriptions and writes one page per
//!   package, class, interface, function, enum, property and method
//! - [`PageSink`]: destination for finished pages
//! - [`MemorySink`] for testing (behind `mock` feature flag)
//!
//! # Example
//!
//! ```ignore
//! use apidoc_documenter::Documenter;
//!
//! let mut documenter = Documenter::new();
//! documenter.load_api_json_file("input/demo.api.json")?;
//! let summary = documenter.write_docs(&mut sink)?;
//! tracing::info!(pages = summary.pages, "Done");
//! ```

mod breadcrumb;
mod documenter;
mod error;
#[cfg(any(test, feature = "mock"))]
mod mock;
mod pages;
mod reference;
mod sink;

pub use breadcrumb::{HOME_TITLE, HOME_URL, build_breadcrumb};
pub use documenter::{DocsSummary, Documenter};
pub use error::{DocumenterError, SinkError};
#[cfg(any(test, feature = "mock"))]
pub use mock::MemorySink;
pub use pages::{BETA_BADGE, BETA_WARNING};
pub use reference::{NodeId, NodeKind, ReferenceNode, ReferenceTree};
pub use sink::PageSink;
