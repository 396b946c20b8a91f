//! Documentation generation entry point.

use std::collections::HashSet;
use std::path::Path;

use apidoc_model::{ApiJsonFile, LoadError};

use crate::error::DocumenterError;
use crate::pages::PageWriter;
use crate::sink::PageSink;

/// Counts reported by [`Documenter::write_docs`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DocsSummary {
    /// Packages processed.
    pub packages: usize,
    /// Pages handed to the sink.
    pub pages: usize,
    /// Exports and members skipped for having an unsupported kind.
    pub skipped: usize,
}

/// Reads API descriptions and generates one page per documentable entity.
///
/// # Example
///
/// ```ignore
/// let mut documenter = Documenter::new();
/// documenter.load_api_json_file("input/demo.api.json")?;
/// let summary = documenter.write_docs(&mut sink)?;
/// ```
#[derive(Debug, Default)]
pub struct Documenter {
    api_json_files: Vec<ApiJsonFile>,
}

impl Documenter {
    /// Create a documenter with no descriptions queued.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a description file and queue it for generation.
    pub fn load_api_json_file(&mut self, path: impl AsRef<Path>) -> Result<(), LoadError> {
        let file = ApiJsonFile::load_from_file(path)?;
        self.add_api_json_file(file);
        Ok(())
    }

    /// Queue an already loaded description.
    pub fn add_api_json_file(&mut self, file: ApiJsonFile) {
        self.api_json_files.push(file);
    }

    /// Queued descriptions in load order.
    #[must_use]
    pub fn api_json_files(&self) -> &[ApiJsonFile] {
        &self.api_json_files
    }

    /// Generate pages for every queued description.
    ///
    /// Clears the sink's stale output once, then traverses each package in
    /// load order, handing pages to the sink as they are finished.
    ///
    /// # Errors
    ///
    /// Returns [`DocumenterError::IdentityConflict`] if two entities resolve
    /// to the same page id, and [`DocumenterError::Sink`] if the sink fails.
    pub fn write_docs(&self, sink: &mut dyn PageSink) -> Result<DocsSummary, DocumenterError> {
        tracing::info!(extension = sink.file_extension(), "Deleting old output files");
        sink.delete_stale_output()?;

        let mut summary = DocsSummary::default();
        let mut written_ids = HashSet::new();
        for file in &self.api_json_files {
            PageWriter::new(sink, &mut written_ids, &mut summary).write_package_page(file)?;
            summary.packages += 1;
        }

        tracing::info!(
            packages = summary.packages,
            pages = summary.pages,
            skipped = summary.skipped,
            "Documentation generated"
        );
        Ok(summary)
    }
}
