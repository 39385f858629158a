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
use crate::edges::Any;
use crate::edges::Edge;
use ciborium::Value;

/// One or more owned nodes of kind `T`, in insertion order.
///
/// Behaves like [`Any`] except that completeness checking requires at least
/// one node.
pub struct Many<T: Kind>(Any<T>);
impl<T: Kind> Many<T> {
    pub fn new() -> Self {
        Self(Any::new())
    }
}
impl<T: Kind> Clone for Many<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}
impl<T: Kind> Default for Many<T> {
    fn default() -> Self {
        Self::new()
    }
}
impl<T: Kind> std::fmt::Debug for Many<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
impl<T: Kind> std::ops::Deref for Many<T> {
    type Target = Any<T>;

    fn deref(&self) -> &Any<T> {
        &self.0
    }
}
impl<T: Kind> std::ops::DerefMut for Many<T> {
    fn deref_mut(&mut self) -> &mut Any<T> {
        &mut self.0
    }
}
impl<T: Kind> Edge for Many<T> {
    type Node = T::Node;

    const WIRE_TAG: &'static str = "+";

    fn check_complete(&self, field: &str, map: &PointerMap) -> Result<(), NotWellFormed> {
        if self.0.is_empty() {
            return Err(NotWellFormed::new(format!(
                "{field} needs at least one node but has zero",
            )));
        }
        self.0.check_children(map)
    }

    fn children(&self) -> Vec<NodeRef<T::Node>> {
        self.0.children()
    }

    fn deep_clone(&self) -> Self {
        Self(self.0.deep_clone())
    }

    fn deserialize_field(
        map: &MapReader<'_>,
        ids: &mut IdentifierMap<T::Node>,
    ) -> Result<Self, TreeError>
    where
        T::Node: SerializableNode,
    {
        Any::deserialize_with_tag(map, ids, Self::WIRE_TAG).map(Self)
    }

    fn dump_field(&self, name: &str, dumper: &mut Dumper<'_>) -> std::fmt::Result {
        self.0.dump_with_marker(name, "!MISSING", dumper)
    }

    fn equals(&self, other: &Self, ctx: &EqualityContext) -> bool {
        self.0.equals(&other.0, ctx)
    }

    fn find_reachable(&self, map: &mut PointerMap) -> Result<(), NotWellFormed> {
        self.0.find_reachable(map)
    }

    fn serialize_field(&self, ids: &PointerMap) -> Result<Value, TreeError>
    where
        T::Node: SerializableNode,
    {
        self.0.serialize_with_tag(ids, Self::WIRE_TAG)
    }
}
impl<'a, T: Kind> IntoIterator for &'a Many<T> {
    type Item = &'a NodeRef<T::Node>;
    type IntoIter = std::slice::Iter<'a, NodeRef<T::Node>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
