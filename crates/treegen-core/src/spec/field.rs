use crate::EdgeKind;
use crate::spec::NodeTypeId;
use crate::spec::Specification;
use crate::spec::NodeType;
use serde::Deserialize;
use serde::Serialize;

/// A single field of a [`NodeType`](crate::spec::NodeType).
///
/// Node-typed fields refer to their target by [`NodeTypeId`]; the
/// [`Specification`] owns every node type definition.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Field {
    pub(crate) doc: String,
    pub(crate) kind: FieldKind,
    pub(crate) name: String,
}
impl Field {
    pub fn doc(&self) -> &str {
        self.doc.as_str()
    }

    /// The effective edge kind of this field.
    ///
    /// Primitive fields declared with a cardinality report that cardinality;
    /// a bare primitive has none.
    pub fn ext_type(&self) -> Option<EdgeKind> {
        match &self.kind {
            FieldKind::Node { edge, .. } => Some(*edge),
            FieldKind::Primitive { edge, .. } => *edge,
        }
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self.kind, FieldKind::Primitive { .. })
    }

    pub fn kind(&self) -> &FieldKind {
        &self.kind
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn node_type<'spec>(
        &self,
        spec: &'spec Specification,
    ) -> Option<&'spec NodeType> {
        match &self.kind {
            FieldKind::Node { target, .. } => Some(spec.node(*target)),
            FieldKind::Primitive { .. } => None,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum FieldKind {
    Node {
        edge: EdgeKind,
        target: NodeTypeId,
    },
    Primitive {
        edge: Option<EdgeKind>,
        type_path: String,
    },
}
