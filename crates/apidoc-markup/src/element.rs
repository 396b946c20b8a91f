//! Markup element types.
//!
//! Elements come in two layers:
//! - [`MarkupBasicElement`]: inline content that may appear inside paragraphs,
//!   table cells and links. Rich-text blocks in an API description deserialize
//!   directly into this type.
//! - [`MarkupStructuredElement`]: block-level content that makes up a page body.

use serde::{Deserialize, Serialize};

/// Inline markup element.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum MarkupBasicElement {
    /// A run of plain or styled text.
    Text {
        /// Text content (never contains newlines).
        text: String,
        /// Render in bold.
        #[serde(default, skip_serializing_if = "is_false")]
        bold: bool,
        /// Render in italics.
        #[serde(default, skip_serializing_if = "is_false")]
        italics: bool,
    },
    /// Inline code span.
    Code {
        /// Source text.
        code: String,
        /// Syntax highlighter hint (e.g. "javascript").
        #[serde(default, skip_serializing_if = "Option::is_none")]
        highlighter: Option<String>,
    },
    /// Cross-reference to another generated page.
    ApiLink {
        /// Visible link content.
        elements: Vec<MarkupBasicElement>,
        /// Stable page id of the link target.
        target: String,
    },
    /// Hyperlink to an arbitrary URL.
    WebLink {
        /// Visible link content.
        elements: Vec<MarkupBasicElement>,
        /// Target URL.
        #[serde(rename = "targetUrl")]
        target_url: String,
    },
    /// Paragraph separator.
    Paragraph,
    /// Line break.
    Break,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_false(value: &bool) -> bool {
    !*value
}

impl MarkupBasicElement {
    /// Returns true for link elements (api or web).
    #[must_use]
    pub fn is_link(&self) -> bool {
        matches!(self, Self::ApiLink { .. } | Self::WebLink { .. })
    }

    /// Concatenated visible text of this element, without styling.
    #[must_use]
    pub fn plain_text(&self) -> String {
        match self {
            Self::Text { text, .. } => text.clone(),
            Self::Code { code, .. } => code.clone(),
            Self::ApiLink { elements, .. } | Self::WebLink { elements, .. } => {
                elements.iter().map(Self::plain_text).collect()
            }
            Self::Paragraph | Self::Break => String::new(),
        }
    }
}

/// A table row: an ordered list of cells, each cell a sequence of inline elements.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MarkupTableRow {
    /// Row cells.
    pub cells: Vec<Vec<MarkupBasicElement>>,
}

/// A table with a header row and zero or more body rows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarkupTable {
    /// Column headers.
    pub header: MarkupTableRow,
    /// Body rows in insertion order.
    pub rows: Vec<MarkupTableRow>,
}

impl MarkupTable {
    /// Append a body row.
    pub fn push_row(&mut self, row: MarkupTableRow) {
        self.rows.push(row);
    }

    /// True if the table has no body rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of columns, taken from the header.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.header.cells.len()
    }
}

/// Block-level markup element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MarkupStructuredElement {
    /// Inline content placed directly in the body.
    Basic(MarkupBasicElement),
    /// Top-level section heading.
    Heading1 {
        /// Heading text.
        text: String,
    },
    /// Callout box.
    NoteBox {
        /// Callout content.
        elements: Vec<MarkupBasicElement>,
    },
    /// Verbatim code block.
    CodeBox {
        /// Source text.
        text: String,
        /// Syntax highlighter hint.
        highlighter: Option<String>,
    },
    /// Table.
    Table(MarkupTable),
}

impl From<MarkupBasicElement> for MarkupStructuredElement {
    fn from(element: MarkupBasicElement) -> Self {
        Self::Basic(element)
    }
}

impl From<MarkupTable> for MarkupStructuredElement {
    fn from(table: MarkupTable) -> Self {
        Self::Table(table)
    }
}

/// One generated documentation page.
///
/// The breadcrumb and body only hold resolved page ids, so a page is
/// self-contained once built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page {
    /// Page title (e.g. "Widget class").
    pub title: String,
    /// Stable page id.
    pub id: String,
    /// Navigation trail: links separated by text elements.
    pub breadcrumb: Vec<MarkupBasicElement>,
    /// Page body.
    pub elements: Vec<MarkupStructuredElement>,
}

impl Page {
    /// Link elements of the breadcrumb, skipping separators.
    pub fn breadcrumb_links(&self) -> impl Iterator<Item = &MarkupBasicElement> {
        self.breadcrumb.iter().filter(|e| e.is_link())
    }

    /// Append inline elements to the body.
    pub fn extend_basic(&mut self, elements: impl IntoIterator<Item = MarkupBasicElement>) {
        self.elements
            .extend(elements.into_iter().map(MarkupStructuredElement::Basic));
    }

    /// Append a single body element.
    pub fn push(&mut self, element: impl Into<MarkupStructuredElement>) {
        self.elements.push(element.into());
    }

    /// Headings in the body, in order.
    pub fn headings(&self) -> impl Iterator<Item = &str> {
        self.elements.iter().filter_map(|e| match e {
            MarkupStructuredElement::Heading1 { text } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Tables in the body, in order.
    pub fn tables(&self) -> impl Iterator<Item = &MarkupTable> {
        self.elements.iter().filter_map(|e| match e {
            MarkupStructuredElement::Table(table) => Some(table),
            _ => None,
        })
    }
}
