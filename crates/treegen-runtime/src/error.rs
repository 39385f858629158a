use crate::annotations::AnnotationError;

/// A runtime tree violates one of the well-formedness invariants.
///
/// Checking never modifies the tree, so this is always recoverable.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct NotWellFormed {
    message: String,
}
impl NotWellFormed {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}

/// A serialized tree does not match the shape the generated code expects.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum SchemaValidationError {
    #[error("Schema validation failed: duplicate sequence number {seq}")]
    DuplicateSequenceNumber {
        seq: u64,
    },

    #[error(
        "Schema validation failed: link target #{seq} is a {found} node \
        but the link expects {expected}"
    )]
    LinkTargetKind {
        seq: u64,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Schema validation failed: missing `{key}` key")]
    MissingKey {
        key: String,
    },

    #[error("Schema validation failed: unexpected edge tag `{found}` (expected `{expected}`)")]
    UnexpectedEdgeTag {
        expected: &'static str,
        found: String,
    },

    #[error("Schema validation failed: unexpected node type {found} (expected {expected})")]
    UnexpectedNodeType {
        expected: &'static str,
        found: String,
    },

    #[error("Schema validation failed: link to unknown sequence number {seq}")]
    UnknownLinkTarget {
        seq: u64,
    },

    #[error("Schema validation failed: `{key}` is not a {expected}")]
    WrongValueKind {
        key: String,
        expected: &'static str,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    #[error(transparent)]
    Annotation(#[from] AnnotationError),

    #[error("CBOR decoding failed: {0}")]
    Decode(String),

    #[error("CBOR encoding failed: {0}")]
    Encode(String),

    #[error("index {index} is out of range for a list of {len} nodes")]
    IndexOutOfRange {
        index: isize,
        len: usize,
    },

    #[error("a {found} node cannot be stored in an edge to {expected}")]
    KindMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error(
        "cannot check the kind of a node for an edge to {expected} while the \
        node is mutably borrowed"
    )]
    NodeBorrowed {
        expected: &'static str,
    },

    #[error(transparent)]
    NotWellFormed(#[from] NotWellFormed),

    #[error(transparent)]
    SchemaValidation(#[from] SchemaValidationError),
}
