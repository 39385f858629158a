use crate::Dumper;
use crate::EqualityContext;
use crate::IdentifierMap;
use crate::Kind;
use crate::MapReader;
use crate::NodeRef;
use crate::NotWellFormed;
use crate::PointerMap;
use crate::SerializableNode;
use crate::TreeError;
use crate::TreeNode;
use crate::WeakNodeRef;
use crate::edges::Edge;
use crate::edges::OptLink;
use ciborium::Value;
use std::cell::RefCell;
use std::rc::Rc;

/// Storage of a link's target.
///
/// Shared between a link read from a serialized tree and the pending patch
/// that sets its target once every node exists.
pub(crate) struct LinkSlot<N>(Rc<RefCell<Option<WeakNodeRef<N>>>>);
impl<N: TreeNode> LinkSlot<N> {
    pub(crate) fn new(target: Option<WeakNodeRef<N>>) -> Self {
        Self(Rc::new(RefCell::new(target)))
    }

    pub(crate) fn clear(&self) {
        *self.0.borrow_mut() = None;
    }

    /// A slot of its own pointing at the same target.
    pub(crate) fn detach(&self) -> Self {
        Self::new(self.0.borrow().clone())
    }

    pub(crate) fn set(&self, target: &NodeRef<N>) {
        *self.0.borrow_mut() = Some(target.downgrade());
    }

    pub(crate) fn state(&self) -> LinkState<N> {
        match &*self.0.borrow() {
            None => LinkState::Unset,
            Some(weak) => match weak.upgrade() {
                Some(target) => LinkState::Target(target),
                None => LinkState::Dangling,
            },
        }
    }
}
impl<N> Clone for LinkSlot<N> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

pub(crate) enum LinkState<N> {
    Unset,
    /// The target has been dropped.
    Dangling,
    Target(NodeRef<N>),
}

/// A reference to a node of kind `T` owned elsewhere in the same tree.
///
/// Assigning a target does not check that it belongs to the tree; a link
/// to a node outside the tree, or to one that has since been dropped, is
/// reported by well-formedness checking.
pub struct Link<T: Kind>(OptLink<T>);
impl<T: Kind> Link<T> {
    pub fn new() -> Self {
        Self(OptLink::new())
    }

    pub fn to(target: &NodeRef<T::Node>) -> Result<Self, TreeError> {
        OptLink::to(target).map(Self)
    }
}
impl<T: Kind> Clone for Link<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}
impl<T: Kind> Default for Link<T> {
    fn default() -> Self {
        Self::new()
    }
}
impl<T: Kind> std::fmt::Debug for Link<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Link").field(&self.0.get()).finish()
    }
}
impl<T: Kind> std::ops::Deref for Link<T> {
    type Target = OptLink<T>;

    fn deref(&self) -> &OptLink<T> {
        &self.0
    }
}
impl<T: Kind> std::ops::DerefMut for Link<T> {
    fn deref_mut(&mut self) -> &mut OptLink<T> {
        &mut self.0
    }
}
impl<T: Kind> Edge for Link<T> {
    type Node = T::Node;

    const WIRE_TAG: &'static str = "$";

    fn check_complete(&self, field: &str, map: &PointerMap) -> Result<(), NotWellFormed> {
        if self.0.is_empty() {
            return Err(NotWellFormed::new(format!("{field} is required but not set")));
        }
        self.0.check_complete(field, map)
    }

    fn children(&self) -> Vec<NodeRef<T::Node>> {
        vec![]
    }

    fn deep_clone(&self) -> Self {
        self.clone()
    }

    fn deserialize_field(
        map: &MapReader<'_>,
        ids: &mut IdentifierMap<T::Node>,
    ) -> Result<Self, TreeError>
    where
        T::Node: SerializableNode,
    {
        OptLink::deserialize_with_tag(map, ids, Self::WIRE_TAG).map(Self)
    }

    fn dump_field(&self, name: &str, dumper: &mut Dumper<'_>) -> std::fmt::Result {
        self.0.dump_with_marker(name, "!MISSING", dumper)
    }

    fn equals(&self, other: &Self, ctx: &EqualityContext) -> bool {
        self.0.equals(&other.0, ctx)
    }

    fn find_reachable(&self, _map: &mut PointerMap) -> Result<(), NotWellFormed> {
        Ok(())
    }

    fn serialize_field(&self, ids: &PointerMap) -> Result<Value, TreeError>
    where
        T::Node: SerializableNode,
    {
        self.0.serialize_with_tag(ids, Self::WIRE_TAG)
    }
}
