use crate::EdgeKind;
use crate::spec::Field;
use crate::spec::FieldKind;
use crate::spec::NodeType;
use crate::spec::Specification;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FieldRole {
    /// A primitive value, optionally with a cardinality.
    Primitive(Option<EdgeKind>),
    Owned(EdgeKind),
    Linked(EdgeKind),
}

/// What completeness checking demands of a field.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CompletenessRule {
    /// Not checked at all (primitives that always hold a value).
    None,
    /// May be empty; populated children are checked recursively.
    Optional,
    /// Must be populated; the child is checked recursively.
    Required,
    /// Must hold at least one element; child nodes are checked recursively.
    NonEmpty,
    /// May be empty; a populated target must be reachable.
    OptionalLink,
    /// Must be populated and the target must be reachable.
    RequiredLink,
}

/// How a field is duplicated by a deep clone.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CloneMode {
    Value,
    Deep,
    /// The clone points at the same target as the original.
    ShareLink,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EqualityMode {
    Value,
    Structural,
    LinkTarget,
}

#[derive(Clone, Debug)]
pub struct FieldPlan<'spec> {
    field: &'spec Field,
    owner: &'spec NodeType,
    role: FieldRole,
    target: Option<&'spec NodeType>,
}
impl<'spec> FieldPlan<'spec> {
    pub(crate) fn new(
        spec: &'spec Specification,
        owner: &'spec NodeType,
        field: &'spec Field,
    ) -> Self {
        let role = match field.kind() {
            FieldKind::Primitive { edge, .. } => FieldRole::Primitive(*edge),
            FieldKind::Node { edge, .. } if edge.is_link() => FieldRole::Linked(*edge),
            FieldKind::Node { edge, .. } => FieldRole::Owned(*edge),
        };
        Self {
            field,
            owner,
            role,
            target: field.node_type(spec),
        }
    }

    pub fn clone_mode(&self) -> CloneMode {
        match self.role {
            FieldRole::Primitive(_) => CloneMode::Value,
            FieldRole::Owned(_) => CloneMode::Deep,
            FieldRole::Linked(_) => CloneMode::ShareLink,
        }
    }

    pub fn completeness(&self) -> CompletenessRule {
        match self.role {
            FieldRole::Primitive(Some(EdgeKind::Many)) => CompletenessRule::NonEmpty,
            FieldRole::Primitive(_) => CompletenessRule::None,
            FieldRole::Owned(EdgeKind::One) => CompletenessRule::Required,
            FieldRole::Owned(EdgeKind::Many) => CompletenessRule::NonEmpty,
            FieldRole::Owned(_) => CompletenessRule::Optional,
            FieldRole::Linked(EdgeKind::Link) => CompletenessRule::RequiredLink,
            FieldRole::Linked(_) => CompletenessRule::OptionalLink,
        }
    }

    /// What the dumper prints for a field that holds nothing.
    pub fn dump_empty_marker(&self) -> Option<&'static str> {
        match self.edge()? {
            EdgeKind::One | EdgeKind::Many | EdgeKind::Link => Some("!MISSING"),
            EdgeKind::Maybe | EdgeKind::OptLink => Some("-"),
            EdgeKind::Any => Some("[]"),
        }
    }

    /// Links are drawn with an arrow; everything else with a colon.
    pub fn dump_separator(&self) -> &'static str {
        match self.role {
            FieldRole::Linked(_) => " --> ",
            _ => ": ",
        }
    }

    pub fn edge(&self) -> Option<EdgeKind> {
        self.field.ext_type()
    }

    pub fn equality_mode(&self) -> EqualityMode {
        match self.role {
            FieldRole::Primitive(_) => EqualityMode::Value,
            FieldRole::Owned(_) => EqualityMode::Structural,
            FieldRole::Linked(_) => EqualityMode::LinkTarget,
        }
    }

    pub fn field(&self) -> &'spec Field {
        self.field
    }

    /// Whether the field is followed when collecting reachable nodes.
    pub fn is_traversed(&self) -> bool {
        matches!(self.role, FieldRole::Owned(_))
    }

    pub fn name(&self) -> &'spec str {
        self.field.name()
    }

    /// The node type that declares this field; an ancestor of the node the
    /// plan belongs to for inherited fields.
    pub fn owner(&self) -> &'spec NodeType {
        self.owner
    }

    pub fn role(&self) -> FieldRole {
        self.role
    }

    pub fn target(&self) -> Option<&'spec NodeType> {
        self.target
    }

    /// The `@T` tag written into the field's submap, if the field is a node
    /// edge.
    pub fn wire_tag(&self) -> Option<&'static str> {
        match self.role {
            FieldRole::Primitive(_) => None,
            FieldRole::Owned(edge) | FieldRole::Linked(edge) => Some(edge.wire_tag()),
        }
    }
}
