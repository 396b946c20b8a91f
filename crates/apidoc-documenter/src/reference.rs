//! Reference nodes and stable page ids.
//!
//! Nodes live in a flat arena and point at their parent by index. A node's
//! page id is derived from its own name and its ancestors' names only, so two
//! passes over the same description always produce the same ids.

use std::collections::HashSet;
use std::fmt;

use crate::error::DocumenterError;

/// Separator between name segments of a page id.
const ID_SEPARATOR: char = '.';

/// Handle to a node in a [`ReferenceTree`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// Kind of API entity a node documents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    /// Package root.
    Package,
    /// Class.
    Class,
    /// Interface.
    Interface,
    /// Function.
    Function,
    /// Enumeration.
    Enum,
    /// Property of a class or interface.
    Property,
    /// Method of a class or interface.
    Method,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Package => "package",
            Self::Class => "class",
            Self::Interface => "interface",
            Self::Function => "function",
            Self::Enum => "enumeration",
            Self::Property => "property",
            Self::Method => "method",
        };
        f.write_str(name)
    }
}

/// A documentable entity's position in the navigation tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReferenceNode {
    /// Display name.
    pub name: String,
    /// Entity kind.
    pub kind: NodeKind,
    /// Stable page id.
    pub page_id: String,
    /// Parent node, `None` for the root.
    pub parent: Option<NodeId>,
}

/// Arena of reference nodes for one package.
#[derive(Debug, Default)]
pub struct ReferenceTree {
    nodes: Vec<ReferenceNode>,
    page_ids: HashSet<String>,
}

impl ReferenceTree {
    /// Create an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node under `parent`, or as the root when `parent` is `None`.
    ///
    /// # Errors
    ///
    /// - [`DocumenterError::EmptyName`] if `name` is empty
    /// - [`DocumenterError::SecondRoot`] if `parent` is `None` and a root exists
    /// - [`DocumenterError::IdentityConflict`] if the page id is already taken
    pub fn create_node(
        &mut self,
        kind: NodeKind,
        name: &str,
        parent: Option<NodeId>,
    ) -> Result<NodeId, DocumenterError> {
        if name.is_empty() {
            return Err(DocumenterError::EmptyName);
        }

        let page_id = match parent {
            Some(parent) => format!(
                "{}{ID_SEPARATOR}{}",
                self.get_reference(parent),
                name.to_lowercase()
            ),
            None => {
                if let Some(root) = self.nodes.first() {
                    return Err(DocumenterError::SecondRoot {
                        existing: root.name.clone(),
                    });
                }
                name.to_lowercase()
            }
        };

        if !self.page_ids.insert(page_id.clone()) {
            return Err(DocumenterError::IdentityConflict { id: page_id });
        }

        let id = NodeId(self.nodes.len());
        self.nodes.push(ReferenceNode {
            name: name.to_owned(),
            kind,
            page_id,
            parent,
        });
        Ok(id)
    }

    /// Node by handle.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &ReferenceNode {
        &self.nodes[id.0]
    }

    /// Stable identifier used as the node's page id and as link target.
    #[must_use]
    pub fn get_reference(&self, id: NodeId) -> &str {
        &self.nodes[id.0].page_id
    }

    /// Display name of a node.
    #[must_use]
    pub fn name(&self, id: NodeId) -> &str {
        &self.nodes[id.0].name
    }

    /// Parent of a node.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    /// Ancestors of a node, root first, excluding the node itself.
    #[must_use]
    pub fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        let mut ancestors = Vec::new();
        let mut current = self.parent(id);
        while let Some(node) = current {
            ancestors.push(node);
            current = self.parent(node);
        }
        ancestors.reverse();
        ancestors
    }

    /// Depth of a node; the root has depth 0.
    #[must_use]
    pub fn depth(&self, id: NodeId) -> usize {
        self.ancestors(id).len()
    }

    /// Number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if the tree has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
