//! Generic page renderer with pluggable backend.

use std::marker::PhantomData;

use crate::backend::{InlineContext, RenderBackend};
use crate::element::{MarkupBasicElement, MarkupStructuredElement, MarkupTable, Page};

/// Renders a [`Page`] to text using a [`RenderBackend`].
///
/// Layout: breadcrumb line, page title as a level 1 heading, then the body.
/// Body headings are shifted down one level below the title.
pub struct PageRenderer<B: RenderBackend> {
    _backend: PhantomData<B>,
}

impl<B: RenderBackend> Default for PageRenderer<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: RenderBackend> PageRenderer<B> {
    /// Create a new renderer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            _backend: PhantomData,
        }
    }

    /// File extension of rendered pages.
    #[must_use]
    pub fn file_extension(&self) -> &'static str {
        B::FILE_EXTENSION
    }

    /// Render a complete page.
    #[must_use]
    pub fn render(&self, page: &Page) -> String {
        let mut out = String::with_capacity(4096);

        if !page.breadcrumb.is_empty() {
            render_inline::<B>(&page.breadcrumb, InlineContext::Block, &mut out);
            ensure_blank_line(&mut out);
        }

        B::heading(1, &page.title, &mut out);

        for element in &page.elements {
            render_structured::<B>(element, &mut out);
        }

        let trimmed = out.trim_end().len();
        out.truncate(trimmed);
        out.push('\n');
        out
    }
}

fn render_structured<B: RenderBackend>(element: &MarkupStructuredElement, out: &mut String) {
    match element {
        MarkupStructuredElement::Basic(basic) => {
            render_basic::<B>(basic, InlineContext::Block, out);
        }
        MarkupStructuredElement::Heading1 { text } => {
            ensure_blank_line(out);
            B::heading(2, text, out);
        }
        MarkupStructuredElement::NoteBox { elements } => {
            ensure_blank_line(out);
            let mut content = String::new();
            render_inline::<B>(elements, InlineContext::Block, &mut content);
            B::note_box(&content, out);
        }
        MarkupStructuredElement::CodeBox { text, highlighter } => {
            ensure_blank_line(out);
            B::code_block(highlighter.as_deref(), text, out);
        }
        MarkupStructuredElement::Table(table) => {
            ensure_blank_line(out);
            render_table::<B>(table, out);
        }
    }
}

fn render_table<B: RenderBackend>(table: &MarkupTable, out: &mut String) {
    let render_cells = |cells: &[Vec<MarkupBasicElement>]| -> Vec<String> {
        cells
            .iter()
            .map(|cell| {
                let mut rendered = String::new();
                render_inline::<B>(cell, InlineContext::TableCell, &mut rendered);
                rendered.trim().to_owned()
            })
            .collect()
    };

    let header = render_cells(&table.header.cells);
    let rows: Vec<Vec<String>> = table.rows.iter().map(|r| render_cells(&r.cells)).collect();
    B::table(&header, &rows, out);
}

fn render_inline<B: RenderBackend>(
    elements: &[MarkupBasicElement],
    ctx: InlineContext,
    out: &mut String,
) {
    for element in elements {
        render_basic::<B>(element, ctx, out);
    }
}

fn render_basic<B: RenderBackend>(element: &MarkupBasicElement, ctx: InlineContext, out: &mut String) {
    match element {
        MarkupBasicElement::Text { text, bold, italics } => B::text(text, *bold, *italics, ctx, out),
        MarkupBasicElement::Code { code, .. } => B::code_span(code, ctx, out),
        MarkupBasicElement::ApiLink { elements, target } => {
            let mut label = String::new();
            render_inline::<B>(elements, ctx, &mut label);
            B::link(&label, &B::page_href(target), out);
        }
        MarkupBasicElement::WebLink {
            elements,
            target_url,
        } => {
            let mut label = String::new();
            render_inline::<B>(elements, ctx, &mut label);
            B::link(&label, target_url, out);
        }
        MarkupBasicElement::Paragraph => B::paragraph(ctx, out),
        MarkupBasicElement::Break => B::line_break(ctx, out),
    }
}

/// Make sure the output ends with an empty line, unless it is empty.
fn ensure_blank_line(out: &mut String) {
    if out.is_empty() || out.ends_with("\n\n") {
        return;
    }
    if out.ends_with('\n') {
        out.push('\n');
    } else {
        out.push_str("\n\n");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_blank_line_on_empty_is_noop() {
        let mut out = String::new();
        ensure_blank_line(&mut out);
        assert_eq!(out, "");
    }

    #[test]
    fn test_ensure_blank_line_after_text() {
        let mut out = "text".to_owned();
        ensure_blank_line(&mut out);
        assert_eq!(out, "text\n\n");
    }

    #[test]
    fn test_ensure_blank_line_after_single_newline() {
        let mut out = "text\n".to_owned();
        ensure_blank_line(&mut out);
        assert_eq!(out, "text\n\n");
    }

    #[test]
    fn test_ensure_blank_line_already_blank() {
        let mut out = "text\n\n".to_owned();
        ensure_blank_line(&mut out);
        assert_eq!(out, "text\n\n");
    }
}
