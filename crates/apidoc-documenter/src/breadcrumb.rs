//! Breadcrumb construction.

use apidoc_markup::MarkupBasicElement;
use apidoc_markup::builder::{
    create_api_link_from_text, create_text_elements, create_web_link_from_text,
};

use crate::reference::{NodeId, ReferenceTree};

/// Visible text of the first breadcrumb link.
pub const HOME_TITLE: &str = "Home";

/// Target of the first breadcrumb link.
pub const HOME_URL: &str = "./index";

const SEPARATOR: &str = " > ";

/// Build the navigation trail for a node.
///
/// Home link first, then one link per ancestor from the root down, each
/// preceded by a `" > "` separator. The node itself is not included.
#[must_use]
pub fn build_breadcrumb(tree: &ReferenceTree, node: NodeId) -> Vec<MarkupBasicElement> {
    let mut breadcrumb = vec![create_web_link_from_text(HOME_TITLE, HOME_URL)];
    for ancestor in tree.ancestors(node) {
        breadcrumb.extend(create_text_elements(SEPARATOR));
        breadcrumb.push(create_api_link_from_text(
            tree.name(ancestor),
            tree.get_reference(ancestor),
        ));
    }
    breadcrumb
}
