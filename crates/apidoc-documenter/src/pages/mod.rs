//! Per-kind page generators.
//!
//! Every generator builds one page for its entity, hands it to the sink and
//! returns the summary row the parent page lists it with. Listing tables are
//! owned by the parent generator's frame; children never touch them.

mod callable;
mod container;
mod enumeration;
mod package;
mod property;

use std::collections::HashSet;

use apidoc_markup::builder::{
    DEFAULT_HIGHLIGHTER, PARAGRAPH, TextStyle, create_api_link, create_code_box, create_heading1,
    create_highlighted_code, create_note_box_from_text, create_page, create_styled_text_elements,
    create_table, create_table_row, create_text_elements,
};
use apidoc_markup::{MarkupBasicElement, MarkupTable, MarkupTableRow, Page};
use apidoc_model::{ApiDocs, ApiParameter, OrderedMap};

use crate::DocsSummary;
use crate::breadcrumb::build_breadcrumb;
use crate::error::DocumenterError;
use crate::reference::{NodeId, NodeKind, ReferenceTree};
use crate::sink::PageSink;

/// Warning shown at the top of every beta entity's page.
pub const BETA_WARNING: &str = "This API is provided as a preview for developers and may change \
     based on feedback that we receive.  Do not use this API in a production environment.";

/// Marker prefixed to the listing description of beta exports.
pub const BETA_BADGE: &str = "(BETA)";

/// Generation state for one package traversal.
pub(crate) struct PageWriter<'a> {
    tree: ReferenceTree,
    sink: &'a mut dyn PageSink,
    written_ids: &'a mut HashSet<String>,
    summary: &'a mut DocsSummary,
}

impl<'a> PageWriter<'a> {
    pub(crate) fn new(
        sink: &'a mut dyn PageSink,
        written_ids: &'a mut HashSet<String>,
        summary: &'a mut DocsSummary,
    ) -> Self {
        Self {
            tree: ReferenceTree::new(),
            sink,
            written_ids,
            summary,
        }
    }

    /// Page shell with title, id and breadcrumb for `node`.
    fn new_page(&self, title: String, node: NodeId) -> Page {
        let mut page = create_page(title, self.tree.get_reference(node));
        page.breadcrumb = build_breadcrumb(&self.tree, node);
        page
    }

    fn create_node(
        &mut self,
        kind: NodeKind,
        name: &str,
        parent: NodeId,
    ) -> Result<NodeId, DocumenterError> {
        self.tree.create_node(kind, name, Some(parent))
    }

    /// Name qualified by the owner's name, e.g. "Widget.render".
    fn qualified_name(&self, node: NodeId) -> String {
        let name = self.tree.name(node);
        match self.tree.parent(node) {
            Some(owner) => format!("{}.{name}", self.tree.name(owner)),
            None => name.to_owned(),
        }
    }

    /// Hand a finished page to the sink.
    fn emit(&mut self, page: Page) -> Result<(), DocumenterError> {
        if !self.written_ids.insert(page.id.clone()) {
            return Err(DocumenterError::IdentityConflict { id: page.id });
        }
        tracing::debug!(id = %page.id, title = %page.title, "Writing page");
        self.sink.write_page(page)?;
        self.summary.pages += 1;
        Ok(())
    }

    /// Record an entry that produces neither a page nor a row.
    fn skip(&mut self, parent: NodeId, name: &str, kind: &str) {
        tracing::debug!(
            parent = %self.tree.get_reference(parent),
            name,
            kind,
            "Skipping entry with unsupported kind"
        );
        self.summary.skipped += 1;
    }
}

/// Listing table that only exists once it has a row.
struct ListingTable {
    heading: &'static str,
    columns: &'static [&'static str],
    table: Option<MarkupTable>,
}

impl ListingTable {
    fn new(heading: &'static str, columns: &'static [&'static str]) -> Self {
        Self {
            heading,
            columns,
            table: None,
        }
    }

    fn push(&mut self, row: MarkupTableRow) {
        self.table
            .get_or_insert_with(|| create_table(self.columns))
            .push_row(row);
    }

    /// Append heading and table to the page if any row was added.
    fn write_to(self, page: &mut Page) {
        if let Some(table) = self.table {
            page.push(create_heading1(self.heading));
            page.push(table);
        }
    }
}

fn write_beta_warning(page: &mut Page, docs: &ApiDocs) {
    if docs.is_beta {
        page.push(create_note_box_from_text(BETA_WARNING));
    }
}

fn write_remarks(page: &mut Page, docs: &ApiDocs) {
    if docs.has_remarks() {
        page.push(create_heading1("Remarks"));
        page.extend_basic(docs.remarks.iter().cloned());
    }
}

/// "Signature:" label followed by a verbatim code block.
fn write_signature(page: &mut Page, signature: String) {
    page.extend_basic([PARAGRAPH]);
    page.extend_basic(create_styled_text_elements("Signature:", TextStyle::BOLD));
    page.push(create_code_box(signature, DEFAULT_HIGHLIGHTER));
}

/// Code span with the default highlighter.
fn code(text: impl Into<String>) -> MarkupBasicElement {
    create_highlighted_code(text, DEFAULT_HIGHLIGHTER)
}

/// Cell with a code span, or an empty cell.
fn code_cell(text: Option<&str>) -> Vec<MarkupBasicElement> {
    text.map(|t| vec![code(t)]).unwrap_or_default()
}

/// Cell linking to a page, with the visible text as code.
fn link_cell(text: impl Into<String>, target: &str) -> Vec<MarkupBasicElement> {
    vec![create_api_link(vec![code(text)], target)]
}

/// Listing description for an export, prefixed with the beta badge if flagged.
fn export_description(docs: &ApiDocs) -> Vec<MarkupBasicElement> {
    let mut description = Vec::new();
    if docs.is_beta {
        description.extend(create_styled_text_elements(
            BETA_BADGE,
            TextStyle::BOLD_ITALICS,
        ));
        description.extend(create_text_elements(" "));
    }
    description.extend(docs.summary.iter().cloned());
    description
}

/// Parameters section, omitted when there are no parameters.
fn write_parameters(page: &mut Page, parameters: &OrderedMap<ApiParameter>) {
    let mut table = ListingTable::new("Parameters", &["Parameter", "Type", "Description"]);
    for (name, parameter) in parameters.iter() {
        table.push(create_table_row(vec![
            vec![code(name)],
            code_cell(parameter.type_name.as_deref()),
            parameter.description.clone(),
        ]));
    }
    table.write_to(page);
}

#[cfg(test)]
mod tests {
    use super::*;
    use apidoc_markup::MarkupStructuredElement;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_listing_table_without_rows_writes_nothing() {
        let mut page = create_page("T", "t");

        ListingTable::new("Classes", &["Class", "Description"]).write_to(&mut page);

        assert!(page.elements.is_empty());
    }

    #[test]
    fn test_listing_table_writes_heading_then_table() {
        let mut page = create_page("T", "t");
        let mut table = ListingTable::new("Classes", &["Class", "Description"]);
        table.push(create_table_row(vec![Vec::new(), Vec::new()]));

        table.write_to(&mut page);

        assert_eq!(page.headings().collect::<Vec<_>>(), vec!["Classes"]);
        let tables: Vec<_> = page.tables().collect();
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].rows.len(), 1);
        assert_eq!(tables[0].column_count(), 2);
    }

    #[test]
    fn test_export_description_beta_badge() {
        let docs = ApiDocs {
            summary: create_text_elements("A widget."),
            is_beta: true,
            ..ApiDocs::default()
        };

        let description = export_description(&docs);

        assert_eq!(
            description,
            vec![
                MarkupBasicElement::Text {
                    text: "(BETA)".to_owned(),
                    bold: true,
                    italics: true,
                },
                MarkupBasicElement::Text {
                    text: " ".to_owned(),
                    bold: false,
                    italics: false,
                },
                MarkupBasicElement::Text {
                    text: "A widget.".to_owned(),
                    bold: false,
                    italics: false,
                },
            ]
        );
    }

    #[test]
    fn test_write_parameters_blank_type_cell() {
        let parameters: OrderedMap<ApiParameter> = [(
            "x",
            ApiParameter {
                type_name: None,
                description: create_text_elements("The x."),
            },
        )]
        .into_iter()
        .collect();
        let mut page = create_page("T", "t");

        write_parameters(&mut page, &parameters);

        let table = page.tables().next().unwrap();
        assert!(table.rows[0].cells[1].is_empty());
        assert_eq!(table.rows[0].cells[2], create_text_elements("The x."));
    }

    #[test]
    fn test_write_beta_warning_only_when_flagged() {
        let mut page = create_page("T", "t");
        write_beta_warning(&mut page, &ApiDocs::default());
        assert!(page.elements.is_empty());

        let beta = ApiDocs {
            is_beta: true,
            ..ApiDocs::default()
        };
        write_beta_warning(&mut page, &beta);
        assert_eq!(
            page.elements,
            vec![MarkupStructuredElement::NoteBox {
                elements: create_text_elements(BETA_WARNING),
            }]
        );
    }
}
