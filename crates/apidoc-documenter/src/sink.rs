//! Page sink abstraction.

use apidoc_markup::Page;

use crate::error::SinkError;

/// Destination for generated pages.
///
/// The documenter calls [`delete_stale_output`](Self::delete_stale_output)
/// once at the start of a run and [`write_page`](Self::write_page) once per
/// page, synchronously, in generation order.
pub trait PageSink {
    /// Extension of the files this sink produces (e.g. ".md").
    fn file_extension(&self) -> &str;

    /// Remove output left over from a previous run.
    fn delete_stale_output(&mut self) -> Result<(), SinkError>;

    /// Accept one finished page.
    fn write_page(&mut self, page: Page) -> Result<(), SinkError>;
}
