//! Filesystem page sink for apidoc.
//!
//! This crate provides [`FsPageWriter`], a [`PageSink`] that renders pages
//! with a [`RenderBackend`] and writes one file per page into an output
//! directory. It handles:
//!
//! - Creating the output directory on first use
//! - Deleting stale files with the backend's extension (other files are kept)
//! - Writing `<page id><extension>` files
//!
//! # Example
//!
//! ```ignore
//! use apidoc_documenter::Documenter;
//! use apidoc_markup::MarkdownBackend;
//! use apidoc_output::FsPageWriter;
//!
//! let mut writer = FsPageWriter::<MarkdownBackend>::new("markdown");
//! let summary = documenter.write_docs(&mut writer)?;
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use apidoc_documenter::{PageSink, SinkError};
use apidoc_markup::{Page, PageRenderer, RenderBackend};

/// Create a sink error for a failed filesystem operation.
fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> SinkError {
    let path = path.to_path_buf();
    move |source| SinkError::Io { path, source }
}

/// Page sink writing rendered pages to a directory.
pub struct FsPageWriter<B: RenderBackend> {
    output_dir: PathBuf,
    renderer: PageRenderer<B>,
}

impl<B: RenderBackend> FsPageWriter<B> {
    /// Create a writer for `output_dir`.
    ///
    /// Nothing touches the filesystem until the documenter runs.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            renderer: PageRenderer::new(),
        }
    }

    /// Output directory.
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Path a page with this id is written to.
    #[must_use]
    pub fn page_path(&self, page_id: &str) -> PathBuf {
        self.output_dir
            .join(format!("{page_id}{}", self.renderer.file_extension()))
    }
}

impl<B: RenderBackend> PageSink for FsPageWriter<B> {
    fn file_extension(&self) -> &str {
        self.renderer.file_extension()
    }

    fn delete_stale_output(&mut self) -> Result<(), SinkError> {
        fs::create_dir_all(&self.output_dir).map_err(io_error(&self.output_dir))?;

        let extension = self.renderer.file_extension();
        let mut deleted = 0usize;
        for entry in fs::read_dir(&self.output_dir).map_err(io_error(&self.output_dir))? {
            let entry = entry.map_err(io_error(&self.output_dir))?;
            let is_file = entry.file_type().is_ok_and(|t| t.is_file());
            if !is_file || !entry.file_name().to_string_lossy().ends_with(extension) {
                continue;
            }
            let path = entry.path();
            fs::remove_file(&path).map_err(io_error(&path))?;
            deleted += 1;
        }

        tracing::info!(
            dir = %self.output_dir.display(),
            extension,
            deleted,
            "Deleted stale output files"
        );
        Ok(())
    }

    fn write_page(&mut self, page: Page) -> Result<(), SinkError> {
        let path = self.page_path(&page.id);
        let content = self.renderer.render(&page);
        fs::write(&path, content).map_err(io_error(&path))?;
        tracing::debug!(path = %path.display(), "Wrote page");
        Ok(())
    }
}
