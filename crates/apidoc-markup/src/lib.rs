//! Abstract markup model for generated API reference pages.
//!
//! This crate provides:
//! - Markup element types ([`MarkupBasicElement`], [`MarkupStructuredElement`],
//!   [`MarkupTable`]) and the [`Page`] they compose into
//! - Builder functions in [`builder`] used by page generators
//! - A generic [`PageRenderer`] driven by a [`RenderBackend`]
//!
//! # Example
//!
//! ```
//! use apidoc_markup::builder::{create_heading1, create_page, create_text_elements};
//! use apidoc_markup::{MarkdownBackend, PageRenderer};
//!
//! let mut page = create_page("demo package", "demo");
//! page.extend_basic(create_text_elements("A demo package."));
//! page.push(create_heading1("Classes"));
//!
//! let markdown = PageRenderer::<MarkdownBackend>::new().render(&page);
//! assert!(markdown.starts_with("# demo package"));
//! ```

mod backend;
pub mod builder;
mod element;
mod markdown;
mod renderer;

pub use backend::{InlineContext, RenderBackend};
pub use element::{
    MarkupBasicElement, MarkupStructuredElement, MarkupTable, MarkupTableRow, Page,
};
pub use markdown::{MarkdownBackend, escape_markdown};
pub use renderer::PageRenderer;
