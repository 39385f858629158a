use crate::spec::Field;
use crate::spec::SpecBuildError;
use crate::spec::Specification;
use serde::Deserialize;
use serde::Serialize;

type Result<T> = std::result::Result<T, SpecBuildError>;

/// Stable index of a [`NodeType`] within the [`Specification`] that owns it.
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
pub struct NodeTypeId(pub(crate) usize);
impl NodeTypeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// A node type of the generated tree.
///
/// Node types form a single-inheritance hierarchy: a node type inherits
/// every field of its ancestors. Only leaf node types (those with no derived
/// types) can be instantiated at runtime; the others exist to share fields
/// and to serve as dispatch targets for edges, visitors and deserialization.
///
/// A node type marked as an error marker stands in for a recovered parse
/// error. Instances of it never pass completeness checking.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct NodeType {
    pub(crate) derived: Vec<NodeTypeId>,
    pub(crate) doc: String,
    pub(crate) fields: Vec<Field>,
    pub(crate) id: NodeTypeId,
    pub(crate) is_error_marker: bool,
    pub(crate) order: Option<Vec<String>>,
    pub(crate) parent: Option<NodeTypeId>,
    pub(crate) snake_case_name: String,
    pub(crate) title_case_name: String,
}
impl NodeType {
    /// Every field of this node type: the fields of the root-most ancestor
    /// first, this type's own fields last, and then reordered by the
    /// explicit field order if one was declared.
    ///
    /// Fields named in the explicit order come first, in that order; the
    /// remaining fields keep their relative position after them.
    pub fn all_fields<'spec>(
        &'spec self,
        spec: &'spec Specification,
    ) -> Result<Vec<&'spec Field>> {
        let mut fields: Vec<&Field> = self.ancestors(spec)
            .into_iter()
            .flat_map(|ancestor| ancestor.fields.iter())
            .chain(self.fields.iter())
            .collect();

        let Some(order) = &self.order else {
            return Ok(fields);
        };

        let mut reordered = Vec::with_capacity(fields.len());
        for field_name in order {
            let Some(pos) = fields.iter().position(|f| f.name == *field_name) else {
                return Err(SpecBuildError::UnknownFieldInOrder {
                    node_name: self.snake_case_name.to_string(),
                    field_name: field_name.to_string(),
                });
            };
            reordered.push(fields.remove(pos));
        }
        reordered.append(&mut fields);
        Ok(reordered)
    }

    /// Ancestors of this node type, root-most first. Does not include
    /// `self`.
    pub fn ancestors<'spec>(
        &self,
        spec: &'spec Specification,
    ) -> Vec<&'spec NodeType> {
        let mut ancestors = vec![];
        let mut next = self.parent;
        while let Some(parent_id) = next {
            let parent = spec.node(parent_id);
            ancestors.push(parent);
            next = parent.parent;
        }
        ancestors.reverse();
        ancestors
    }

    pub fn derived(&self) -> &[NodeTypeId] {
        self.derived.as_slice()
    }

    pub fn doc(&self) -> &str {
        self.doc.as_str()
    }

    /// Fields declared directly on this node type.
    pub fn fields(&self) -> &[Field] {
        self.fields.as_slice()
    }

    pub fn id(&self) -> NodeTypeId {
        self.id
    }

    pub fn is_error_marker(&self) -> bool {
        self.is_error_marker
    }

    /// True if `self` is `other` or derives from it.
    pub fn is_a(&self, other: NodeTypeId, spec: &Specification) -> bool {
        self.id == other
            || self.ancestors(spec).iter().any(|a| a.id == other)
    }

    pub fn is_leaf(&self) -> bool {
        self.derived.is_empty()
    }

    /// The instantiable node types this node type stands for: itself if it
    /// is a leaf, else every leaf below it in declaration order.
    pub fn leaf_descendants<'spec>(
        &'spec self,
        spec: &'spec Specification,
    ) -> Vec<&'spec NodeType> {
        if self.is_leaf() {
            return vec![self];
        }
        self.derived
            .iter()
            .flat_map(|id| spec.node(*id).leaf_descendants(spec))
            .collect()
    }

    pub fn order(&self) -> Option<&[String]> {
        self.order.as_deref()
    }

    pub fn parent<'spec>(
        &self,
        spec: &'spec Specification,
    ) -> Option<&'spec NodeType> {
        self.parent.map(|id| spec.node(id))
    }

    pub fn snake_case_name(&self) -> &str {
        self.snake_case_name.as_str()
    }

    pub fn title_case_name(&self) -> &str {
        self.title_case_name.as_str()
    }
}
