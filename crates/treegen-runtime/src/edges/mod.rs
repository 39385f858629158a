//! Containers for the six edge kinds.
//!
//! | container    | holds                  | complete when             |
//! |--------------|------------------------|---------------------------|
//! | [`Maybe`]    | zero or one owned node | always                    |
//! | [`One`]      | one owned node         | populated                 |
//! | [`Any`]      | owned nodes, ordered   | always                    |
//! | [`Many`]     | owned nodes, ordered   | at least one node         |
//! | [`OptLink`]  | zero or one reference  | the target is reachable   |
//! | [`Link`]     | one reference          | set, target is reachable  |
//!
//! Nothing is checked when an edge is assigned, apart from the node kind.
//! The tree invariants are only enforced by well-formedness checking.

pub(crate) mod any;
mod link;
mod many;
mod maybe;
mod one;
mod opt_link;

pub use any::Any;
pub(crate) use link::LinkSlot;
pub use link::Link;
pub use many::Many;
pub use maybe::Maybe;
pub use one::One;
pub use opt_link::OptLink;

use crate::Dumper;
use crate::EqualityContext;
use crate::IdentifierMap;
use crate::MapReader;
use crate::NodeRef;
use crate::NotWellFormed;
use crate::PointerMap;
use crate::SchemaValidationError;
use crate::SerializableNode;
use crate::TreeError;
use crate::TreeNode;
use crate::Kind;
use ciborium::Value;

/// Operations generated node types perform on each of their edge fields.
pub trait Edge: Sized {
    type Node: TreeNode;

    /// The `@T` tag of the field's submap.
    const WIRE_TAG: &'static str;

    fn check_complete(&self, field: &str, map: &PointerMap) -> Result<(), NotWellFormed>;

    /// Owned children, in order. Empty for links.
    fn children(&self) -> Vec<NodeRef<Self::Node>>;

    fn deep_clone(&self) -> Self;

    fn deserialize_field(
        map: &MapReader<'_>,
        ids: &mut IdentifierMap<Self::Node>,
    ) -> Result<Self, TreeError>
    where
        Self::Node: SerializableNode;

    fn dump_field(&self, name: &str, dumper: &mut Dumper<'_>) -> std::fmt::Result;

    fn equals(&self, other: &Self, ctx: &EqualityContext) -> bool;

    fn find_reachable(&self, map: &mut PointerMap) -> Result<(), NotWellFormed>;

    fn serialize_field(&self, ids: &PointerMap) -> Result<Value, TreeError>
    where
        Self::Node: SerializableNode;
}

/// Fails instead of panicking when the node is mutably borrowed, which
/// happens when linking to a node from inside an edit of that node.
fn check_kind<K: Kind>(node: &NodeRef<K::Node>) -> Result<(), TreeError> {
    let Some(inner) = node.try_borrow() else {
        return Err(TreeError::NodeBorrowed { expected: K::NAME });
    };
    if K::accepts(&inner) {
        Ok(())
    } else {
        Err(TreeError::KindMismatch {
            expected: K::NAME,
            found: inner.type_tag(),
        })
    }
}

fn check_wire_tag(map: &MapReader<'_>, expected: &'static str) -> Result<(), SchemaValidationError> {
    let found = map.text("@T")?;
    if found == expected {
        Ok(())
    } else {
        Err(SchemaValidationError::UnexpectedEdgeTag {
            expected,
            found: found.to_string(),
        })
    }
}

