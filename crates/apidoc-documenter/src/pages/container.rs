//! Class and interface pages.

use apidoc_markup::MarkupTableRow;
use apidoc_markup::builder::{create_code, create_heading1, create_table_row, create_text_elements};
use apidoc_model::{ApiDocs, ApiItem, OrderedMap};

use super::{
    ListingTable, PageWriter, export_description, link_cell, write_beta_warning, write_remarks,
};
use crate::error::DocumenterError;
use crate::reference::{NodeId, NodeKind};

/// Entity kind that owns properties and methods.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ContainerKind {
    Class,
    Interface,
}

impl ContainerKind {
    fn node_kind(self) -> NodeKind {
        match self {
            Self::Class => NodeKind::Class,
            Self::Interface => NodeKind::Interface,
        }
    }

    /// Member rows carry an access modifier column.
    pub(super) fn has_access_modifier(self) -> bool {
        self == Self::Class
    }

    fn property_columns(self) -> &'static [&'static str] {
        match self {
            Self::Class => &["Property", "Access Modifier", "Type", "Description"],
            Self::Interface => &["Property", "Type", "Description"],
        }
    }

    fn method_columns(self) -> &'static [&'static str] {
        match self {
            Self::Class => &["Method", "Access Modifier", "Returns", "Description"],
            Self::Interface => &["Method", "Returns", "Description"],
        }
    }
}

impl PageWriter<'_> {
    /// Write a class or interface page and its member pages.
    pub(super) fn write_container_page(
        &mut self,
        kind: ContainerKind,
        docs: &ApiDocs,
        members: &OrderedMap<ApiItem>,
        node: NodeId,
    ) -> Result<MarkupTableRow, DocumenterError> {
        let name = self.tree.name(node).to_owned();
        let mut page = self.new_page(format!("{name} {}", kind.node_kind()), node);

        write_beta_warning(&mut page, docs);
        page.extend_basic(docs.summary.iter().cloned());

        if kind == ContainerKind::Class {
            page.push(create_heading1("Constructor"));
            page.extend_basic(create_text_elements("Constructs a new instance of the "));
            page.extend_basic([create_code(name.as_str())]);
            page.extend_basic(create_text_elements(" class"));
        }

        let mut properties = ListingTable::new("Properties", kind.property_columns());
        let mut methods = ListingTable::new("Methods", kind.method_columns());

        for (member_name, member) in members.iter() {
            match member {
                ApiItem::Property(property) => {
                    let child = self.create_node(NodeKind::Property, member_name, node)?;
                    properties.push(self.write_property_page(property, child, kind)?);
                }
                ApiItem::Method(method) => {
                    let child = self.create_node(NodeKind::Method, member_name, node)?;
                    methods.push(self.write_method_page(method, child, kind)?);
                }
                _ => self.skip(node, member_name, member.kind()),
            }
        }

        properties.write_to(&mut page);
        methods.write_to(&mut page);
        write_remarks(&mut page, docs);

        let row = create_table_row(vec![link_cell(name, &page.id), export_description(docs)]);
        self.emit(page)?;
        Ok(row)
    }
}
