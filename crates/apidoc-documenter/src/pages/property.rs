//! Property page.

use apidoc_markup::MarkupTableRow;
use apidoc_markup::builder::create_table_row;
use apidoc_model::ApiProperty;

use super::container::ContainerKind;
use super::{
    PageWriter, code, code_cell, link_cell, write_beta_warning, write_remarks, write_signature,
};
use crate::error::DocumenterError;
use crate::reference::NodeId;

impl PageWriter<'_> {
    pub(super) fn write_property_page(
        &mut self,
        property: &ApiProperty,
        node: NodeId,
        owner: ContainerKind,
    ) -> Result<MarkupTableRow, DocumenterError> {
        let name = self.tree.name(node).to_owned();
        let mut page = self.new_page(format!("{} property", self.qualified_name(node)), node);

        write_beta_warning(&mut page, &property.docs);
        page.extend_basic(property.docs.summary.iter().cloned());
        write_signature(&mut page, format!("{name}: {}", property.type_name));
        write_remarks(&mut page, &property.docs);

        let mut cells = vec![link_cell(name, &page.id)];
        if owner.has_access_modifier() {
            cells.push(code_cell(property.access_modifier.as_deref()));
        }
        cells.push(vec![code(property.type_name.as_str())]);
        cells.push(property.docs.summary.clone());

        self.emit(page)?;
        Ok(create_table_row(cells))
    }
}
