//! Enumeration page.

use apidoc_markup::MarkupTableRow;
use apidoc_markup::builder::{create_code, create_table, create_table_row, create_text_elements};
use apidoc_model::ApiEnum;

use super::{PageWriter, export_description, link_cell, write_beta_warning, write_remarks};
use crate::error::DocumenterError;
use crate::reference::NodeId;

impl PageWriter<'_> {
    pub(super) fn write_enum_page(
        &mut self,
        api_enum: &ApiEnum,
        node: NodeId,
    ) -> Result<MarkupTableRow, DocumenterError> {
        let name = self.tree.name(node).to_owned();
        let mut page = self.new_page(format!("{name} enumeration"), node);

        write_beta_warning(&mut page, &api_enum.docs);
        page.extend_basic(api_enum.docs.summary.iter().cloned());

        if !api_enum.values.is_empty() {
            let mut members = create_table(&["Member", "Value", "Description"]);
            for (member_name, member) in api_enum.values.iter() {
                // Present values are shown even when zero or empty.
                let value = member
                    .value
                    .as_ref()
                    .map(|v| vec![create_code(format!("= {v}"))])
                    .unwrap_or_default();
                members.push_row(create_table_row(vec![
                    create_text_elements(member_name),
                    value,
                    member.summary.clone(),
                ]));
            }
            page.push(members);
        }

        write_remarks(&mut page, &api_enum.docs);

        let row = create_table_row(vec![
            link_cell(name, &page.id),
            export_description(&api_enum.docs),
        ]);
        self.emit(page)?;
        Ok(row)
    }
}
