//! In-memory page sink for testing.
//!
//! Provides [`MemorySink`] for unit testing without filesystem access.

use apidoc_markup::Page;

use crate::error::SinkError;
use crate::sink::PageSink;

/// Page sink that keeps pages in memory.
///
/// # Example
///
/// ```ignore
/// use apidoc_documenter::{Documenter, MemorySink};
///
/// let mut sink = MemorySink::new();
/// Documenter::new().write_docs(&mut sink)?;
/// assert_eq!(sink.delete_calls(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MemorySink {
    pages: Vec<Page>,
    delete_calls: usize,
    fail_on: Option<String>,
}

impl MemorySink {
    /// Create an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail when a page with this id is written.
    #[must_use]
    pub fn failing_on(mut self, page_id: impl Into<String>) -> Self {
        self.fail_on = Some(page_id.into());
        self
    }

    /// Pages in the order they were written.
    #[must_use]
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Page with the given id.
    #[must_use]
    pub fn page(&self, id: &str) -> Option<&Page> {
        self.pages.iter().find(|p| p.id == id)
    }

    /// Page ids in the order they were written.
    #[must_use]
    pub fn page_ids(&self) -> Vec<&str> {
        self.pages.iter().map(|p| p.id.as_str()).collect()
    }

    /// Number of [`PageSink::delete_stale_output`] calls.
    #[must_use]
    pub fn delete_calls(&self) -> usize {
        self.delete_calls
    }
}

impl PageSink for MemorySink {
    fn file_extension(&self) -> &str {
        ".mem"
    }

    fn delete_stale_output(&mut self) -> Result<(), SinkError> {
        self.delete_calls += 1;
        self.pages.clear();
        Ok(())
    }

    fn write_page(&mut self, page: Page) -> Result<(), SinkError> {
        if self.fail_on.as_deref() == Some(page.id.as_str()) {
            return Err(SinkError::Other(format!("refused page `{}`", page.id)));
        }
        self.pages.push(page);
        Ok(())
    }
}
