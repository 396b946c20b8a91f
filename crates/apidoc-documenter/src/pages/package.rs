//! Package page.

use apidoc_model::{ApiItem, ApiJsonFile, unscoped_package_name};

use super::{ListingTable, PageWriter, write_remarks};
use crate::error::DocumenterError;
use crate::pages::container::ContainerKind;
use crate::reference::NodeKind;

impl PageWriter<'_> {
    /// Write the package page and, recursively, a page for every export.
    pub(crate) fn write_package_page(&mut self, file: &ApiJsonFile) -> Result<(), DocumenterError> {
        tracing::info!(package = %file.package_name, "Writing package");

        let package = &file.doc_package;
        let name = unscoped_package_name(&file.package_name);
        let node = self.tree.create_node(NodeKind::Package, name, None)?;

        let mut page = self.new_page(format!("{name} package"), node);
        page.extend_basic(package.docs.summary.iter().cloned());

        let mut classes = ListingTable::new("Classes", &["Class", "Description"]);
        let mut interfaces = ListingTable::new("Interfaces", &["Interface", "Description"]);
        let mut functions = ListingTable::new("Functions", &["Function", "Returns", "Description"]);
        let mut enumerations = ListingTable::new("Enumerations", &["Enumeration", "Description"]);

        for (export_name, item) in package.exports.iter() {
            match item {
                ApiItem::Class(class) => {
                    let child = self.create_node(NodeKind::Class, export_name, node)?;
                    classes.push(self.write_container_page(
                        ContainerKind::Class,
                        &class.docs,
                        &class.members,
                        child,
                    )?);
                }
                ApiItem::Interface(interface) => {
                    let child = self.create_node(NodeKind::Interface, export_name, node)?;
                    interfaces.push(self.write_container_page(
                        ContainerKind::Interface,
                        &interface.docs,
                        &interface.members,
                        child,
                    )?);
                }
                ApiItem::Function(function) => {
                    let child = self.create_node(NodeKind::Function, export_name, node)?;
                    functions.push(self.write_function_page(function, child)?);
                }
                ApiItem::Enum(api_enum) => {
                    let child = self.create_node(NodeKind::Enum, export_name, node)?;
                    enumerations.push(self.write_enum_page(api_enum, child)?);
                }
                ApiItem::Package(_) | ApiItem::Property(_) | ApiItem::Method(_) | ApiItem::Unknown => {
                    self.skip(node, export_name, item.kind());
                }
            }
        }

        write_remarks(&mut page, &package.docs);
        classes.write_to(&mut page);
        interfaces.write_to(&mut page);
        functions.write_to(&mut page);
        enumerations.write_to(&mut page);

        self.emit(page)
    }
}
