use crate::spec::NodeTypeId;

/// The broad class a [`SpecBuildError`] belongs to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SpecBuildErrorCategory {
    ConfigurationError,
    DuplicateDefinition,
    UnresolvedReference,
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum SpecBuildError {
    #[error("duplicate {setting} declaration")]
    DuplicateConfiguration {
        setting: &'static str,
    },

    #[error("duplicate field `{field_name}` in node `{node_name}`")]
    DuplicateFieldDefinition {
        node_name: String,
        field_name: String,
    },

    #[error("duplicate node name {node_name}")]
    DuplicateNodeDefinition {
        node_name: String,
    },

    #[error("initialization function not specified")]
    MissingInitializeFunction,

    #[error(
        "primitive field `{field_name}` of node `{node_name}` cannot be \
        declared as a {edge}"
    )]
    PrimitiveLink {
        node_name: String,
        field_name: String,
        edge: crate::EdgeKind,
    },

    #[error("use of undefined node {target_name}")]
    UndefinedNodeType {
        node_name: String,
        field_name: String,
        target_name: String,
    },

    #[error("Unknown field in field order: {field_name}")]
    UnknownFieldInOrder {
        node_name: String,
        field_name: String,
    },

    #[error("node `{node_name}` derives from unknown node type #{}", parent.index())]
    UnknownParentNode {
        node_name: String,
        parent: NodeTypeId,
    },
}
impl SpecBuildError {
    pub fn category(&self) -> SpecBuildErrorCategory {
        match self {
            SpecBuildError::DuplicateFieldDefinition { .. }
            | SpecBuildError::DuplicateNodeDefinition { .. }
                => SpecBuildErrorCategory::DuplicateDefinition,

            SpecBuildError::UndefinedNodeType { .. }
            | SpecBuildError::UnknownFieldInOrder { .. }
            | SpecBuildError::UnknownParentNode { .. }
                => SpecBuildErrorCategory::UnresolvedReference,

            SpecBuildError::DuplicateConfiguration { .. }
            | SpecBuildError::MissingInitializeFunction
            | SpecBuildError::PrimitiveLink { .. }
                => SpecBuildErrorCategory::ConfigurationError,
        }
    }
}
