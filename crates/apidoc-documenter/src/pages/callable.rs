//! Function and method pages.

use apidoc_markup::builder::{
    PARAGRAPH, TextStyle, create_styled_text_elements, create_table_row, create_text_elements,
};
use apidoc_markup::{MarkupTableRow, Page};
use apidoc_model::{
    ApiDocs, ApiFunction, ApiMethod, ApiParameter, ApiReturnValue, OrderedMap, concise_signature,
};

use super::container::ContainerKind;
use super::{
    PageWriter, code, code_cell, export_description, link_cell, write_beta_warning,
    write_parameters, write_remarks, write_signature,
};
use crate::error::DocumenterError;
use crate::reference::NodeId;

impl PageWriter<'_> {
    pub(super) fn write_function_page(
        &mut self,
        function: &ApiFunction,
        node: NodeId,
    ) -> Result<MarkupTableRow, DocumenterError> {
        let name = self.tree.name(node).to_owned();
        let mut page = self.new_page(format!("{name} function"), node);

        write_callable_body(
            &mut page,
            &function.docs,
            &function.signature,
            function.return_value.as_ref(),
            &function.parameters,
        );

        let row = create_table_row(vec![
            link_cell(name, &page.id),
            code_cell(return_type(function.return_value.as_ref())),
            export_description(&function.docs),
        ]);
        self.emit(page)?;
        Ok(row)
    }

    pub(super) fn write_method_page(
        &mut self,
        method: &ApiMethod,
        node: NodeId,
        owner: ContainerKind,
    ) -> Result<MarkupTableRow, DocumenterError> {
        let title = concise_signature(self.tree.name(node), &method.parameters);
        let mut page = self.new_page(format!("{} method", self.qualified_name(node)), node);

        write_callable_body(
            &mut page,
            &method.docs,
            &method.signature,
            method.return_value.as_ref(),
            &method.parameters,
        );

        let mut cells = vec![link_cell(title, &page.id)];
        if owner.has_access_modifier() {
            cells.push(code_cell(method.access_modifier.as_deref()));
        }
        cells.push(code_cell(return_type(method.return_value.as_ref())));
        cells.push(method.docs.summary.clone());

        self.emit(page)?;
        Ok(create_table_row(cells))
    }
}

fn return_type(return_value: Option<&ApiReturnValue>) -> Option<&str> {
    return_value.map(|r| r.type_name.as_str())
}

fn write_callable_body(
    page: &mut Page,
    docs: &ApiDocs,
    signature: &str,
    return_value: Option<&ApiReturnValue>,
    parameters: &OrderedMap<ApiParameter>,
) {
    write_beta_warning(page, docs);
    page.extend_basic(docs.summary.iter().cloned());
    write_signature(page, signature.to_owned());

    if let Some(return_value) = return_value {
        page.extend_basic(create_styled_text_elements("Returns:", TextStyle::BOLD));
        page.extend_basic(create_text_elements(" "));
        page.extend_basic([code(return_value.type_name.as_str()), PARAGRAPH]);
        page.extend_basic(return_value.description.iter().cloned());
    }

    write_remarks(page, docs);
    write_parameters(page, parameters);
}
