use crate::EdgeKind;
use crate::spec::NodeTypeId;

/// Accumulates the declaration of a single node type before it is handed to
/// [`SpecificationBuilder::add_node`](crate::spec::SpecificationBuilder::add_node).
///
/// Node-typed fields name their target by its snake_case name; targets are
/// resolved when the specification is built, so a field may refer to a node
/// type declared later.
#[derive(Clone, Debug)]
pub struct NodeBuilder {
    pub(super) doc: String,
    pub(super) fields: Vec<FieldDecl>,
    pub(super) is_error_marker: bool,
    pub(super) name: String,
    pub(super) order: Option<Vec<String>>,
    pub(super) parent: Option<NodeTypeId>,
}
impl NodeBuilder {
    pub fn new(name: &str, doc: &str) -> Self {
        Self {
            doc: doc.to_string(),
            fields: vec![],
            is_error_marker: false,
            name: name.to_string(),
            order: None,
            parent: None,
        }
    }

    /// Makes this node type inherit the fields of `parent`.
    pub fn derive_from(mut self, parent: NodeTypeId) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Marks this node type as a placeholder for a recovered parse error.
    pub fn mark_error(mut self) -> Self {
        self.is_error_marker = true;
        self
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn with_child(
        mut self,
        edge: EdgeKind,
        node_name: &str,
        field_name: &str,
        doc: &str,
    ) -> Self {
        self.fields.push(FieldDecl {
            doc: doc.to_string(),
            kind: FieldDeclKind::Node {
                edge,
                target_name: node_name.to_string(),
            },
            name: field_name.to_string(),
        });
        self
    }

    /// Overrides the order of the fields in constructors and dumps.
    pub fn with_order(mut self, order: Vec<String>) -> Self {
        self.order = Some(order);
        self
    }

    pub fn with_prim(
        mut self,
        type_path: &str,
        field_name: &str,
        doc: &str,
        edge: Option<EdgeKind>,
    ) -> Self {
        self.fields.push(FieldDecl {
            doc: doc.to_string(),
            kind: FieldDeclKind::Primitive {
                edge,
                type_path: type_path.to_string(),
            },
            name: field_name.to_string(),
        });
        self
    }
}

#[derive(Clone, Debug)]
pub(super) struct FieldDecl {
    pub(super) doc: String,
    pub(super) kind: FieldDeclKind,
    pub(super) name: String,
}

#[derive(Clone, Debug)]
pub(super) enum FieldDeclKind {
    Node {
        edge: EdgeKind,
        target_name: String,
    },
    Primitive {
        edge: Option<EdgeKind>,
        type_path: String,
    },
}
