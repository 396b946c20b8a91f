//! Constructors for markup elements.
//!
//! Generators build pages exclusively through these functions, so the
//! element shapes stay consistent across page kinds.

use crate::element::{
    MarkupBasicElement, MarkupStructuredElement, MarkupTable, MarkupTableRow, Page,
};

/// Paragraph separator element.
pub const PARAGRAPH: MarkupBasicElement = MarkupBasicElement::Paragraph;

/// Highlighter hint used for code spans and blocks.
pub const DEFAULT_HIGHLIGHTER: &str = "javascript";

/// Text styling options.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextStyle {
    /// Render in bold.
    pub bold: bool,
    /// Render in italics.
    pub italics: bool,
}

impl TextStyle {
    /// Bold text.
    pub const BOLD: Self = Self {
        bold: true,
        italics: false,
    };

    /// Bold italic text.
    pub const BOLD_ITALICS: Self = Self {
        bold: true,
        italics: true,
    };
}

/// Create an empty page shell.
#[must_use]
pub fn create_page(title: impl Into<String>, id: impl Into<String>) -> Page {
    Page {
        title: title.into(),
        id: id.into(),
        breadcrumb: Vec::new(),
        elements: Vec::new(),
    }
}

/// Create plain text runs.
///
/// Newlines split the text into runs separated by [`MarkupBasicElement::Break`].
/// Empty input yields no elements.
#[must_use]
pub fn create_text_elements(text: &str) -> Vec<MarkupBasicElement> {
    create_styled_text_elements(text, TextStyle::default())
}

/// Create styled text runs.
#[must_use]
pub fn create_styled_text_elements(text: &str, style: TextStyle) -> Vec<MarkupBasicElement> {
    let mut elements = Vec::new();
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            elements.push(MarkupBasicElement::Break);
        }
        if !line.is_empty() {
            elements.push(MarkupBasicElement::Text {
                text: line.to_owned(),
                bold: style.bold,
                italics: style.italics,
            });
        }
    }
    elements
}

/// Create an inline code span.
#[must_use]
pub fn create_code(code: impl Into<String>) -> MarkupBasicElement {
    MarkupBasicElement::Code {
        code: code.into(),
        highlighter: None,
    }
}

/// Create an inline code span with a highlighter hint.
#[must_use]
pub fn create_highlighted_code(code: impl Into<String>, highlighter: &str) -> MarkupBasicElement {
    MarkupBasicElement::Code {
        code: code.into(),
        highlighter: Some(highlighter.to_owned()),
    }
}

/// Create a cross-reference link with arbitrary visible content.
#[must_use]
pub fn create_api_link(
    elements: Vec<MarkupBasicElement>,
    target: impl Into<String>,
) -> MarkupBasicElement {
    MarkupBasicElement::ApiLink {
        elements,
        target: target.into(),
    }
}

/// Create a cross-reference link whose visible content is plain text.
#[must_use]
pub fn create_api_link_from_text(text: &str, target: impl Into<String>) -> MarkupBasicElement {
    create_api_link(create_text_elements(text), target)
}

/// Create a web link whose visible content is plain text.
#[must_use]
pub fn create_web_link_from_text(text: &str, target_url: impl Into<String>) -> MarkupBasicElement {
    MarkupBasicElement::WebLink {
        elements: create_text_elements(text),
        target_url: target_url.into(),
    }
}

/// Create a top-level heading.
#[must_use]
pub fn create_heading1(text: impl Into<String>) -> MarkupStructuredElement {
    MarkupStructuredElement::Heading1 { text: text.into() }
}

/// Create a callout box containing plain text.
#[must_use]
pub fn create_note_box_from_text(text: &str) -> MarkupStructuredElement {
    MarkupStructuredElement::NoteBox {
        elements: create_text_elements(text),
    }
}

/// Create a verbatim code block.
#[must_use]
pub fn create_code_box(text: impl Into<String>, highlighter: &str) -> MarkupStructuredElement {
    MarkupStructuredElement::CodeBox {
        text: text.into(),
        highlighter: Some(highlighter.to_owned()),
    }
}

/// Create an empty table with the given column headers.
#[must_use]
pub fn create_table(headers: &[&str]) -> MarkupTable {
    MarkupTable {
        header: MarkupTableRow {
            cells: headers.iter().map(|h| create_text_elements(h)).collect(),
        },
        rows: Vec::new(),
    }
}

/// Create a table row from cells.
#[must_use]
pub fn create_table_row(cells: Vec<Vec<MarkupBasicElement>>) -> MarkupTableRow {
    MarkupTableRow { cells }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_create_text_elements_empty() {
        assert!(create_text_elements("").is_empty());
    }

    #[test]
    fn test_create_text_elements_splits_lines() {
        let elements = create_text_elements("first\nsecond");

        assert_eq!(
            elements,
            vec![
                MarkupBasicElement::Text {
                    text: "first".to_owned(),
                    bold: false,
                    italics: false,
                },
                MarkupBasicElement::Break,
                MarkupBasicElement::Text {
                    text: "second".to_owned(),
                    bold: false,
                    italics: false,
                },
            ]
        );
    }

    #[test]
    fn test_create_styled_text_elements_applies_style() {
        let elements = create_styled_text_elements("(BETA)", TextStyle::BOLD_ITALICS);

        assert_eq!(
            elements,
            vec![MarkupBasicElement::Text {
                text: "(BETA)".to_owned(),
                bold: true,
                italics: true,
            }]
        );
    }

    #[test]
    fn test_create_api_link_from_text() {
        let link = create_api_link_from_text("Widget", "demo.widget");

        assert!(link.is_link());
        assert_eq!(link.plain_text(), "Widget");
    }

    #[test]
    fn test_create_table_headers() {
        let table = create_table(&["Parameter", "Type", "Description"]);

        assert_eq!(table.column_count(), 3);
        assert!(table.is_empty());
        assert_eq!(table.header.cells[1][0].plain_text(), "Type");
    }

    #[test]
    fn test_create_page_is_empty_shell() {
        let page = create_page("demo package", "demo");

        assert_eq!(page.title, "demo package");
        assert_eq!(page.id, "demo");
        assert!(page.breadcrumb.is_empty());
        assert!(page.elements.is_empty());
    }
}
