//! Render backend trait for format-specific output.

/// Where inline content is being written.
///
/// Table cells cannot contain raw newlines in most text formats, so
/// backends pick different separators there.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InlineContext {
    /// Page body or breadcrumb.
    Block,
    /// Inside a table cell.
    TableCell,
}

/// Backend trait for page rendering.
///
/// [`PageRenderer`](crate::PageRenderer) walks the page structure and
/// delegates every format-specific decision to the backend.
pub trait RenderBackend {
    /// File extension for rendered pages, including the leading dot.
    const FILE_EXTENSION: &'static str;

    /// Write a text run.
    fn text(text: &str, bold: bool, italics: bool, ctx: InlineContext, out: &mut String);

    /// Write an inline code span.
    fn code_span(code: &str, ctx: InlineContext, out: &mut String);

    /// Write a link with already-rendered label.
    fn link(label: &str, href: &str, out: &mut String);

    /// Link target for a page id.
    fn page_href(page_id: &str) -> String;

    /// Write a paragraph separator.
    fn paragraph(ctx: InlineContext, out: &mut String);

    /// Write a line break.
    fn line_break(ctx: InlineContext, out: &mut String);

    /// Write a heading. Level 1 is reserved for the page title.
    fn heading(level: u8, text: &str, out: &mut String);

    /// Write a verbatim code block.
    fn code_block(lang: Option<&str>, content: &str, out: &mut String);

    /// Write a callout with already-rendered content.
    fn note_box(content: &str, out: &mut String);

    /// Write a table from already-rendered cells.
    fn table(header: &[String], rows: &[Vec<String>], out: &mut String);
}
