use crate::Dumper;
use crate::EqualityContext;
use crate::IdentifierMap;
use crate::IsA;
use crate::Kind;
use crate::MapReader;
use crate::NodeRef;
use crate::NotWellFormed;
use crate::PointerMap;
use crate::SerializableNode;
use crate::TreeError;
use crate::edges::Edge;
use crate::edges::Maybe;
use ciborium::Value;

/// Exactly one owned node of kind `T` once the tree is complete.
///
/// May be empty while the tree is being built; completeness checking
/// reports an empty `One` as a required field that is not set.
pub struct One<T: Kind>(Maybe<T>);
impl<T: Kind> One<T> {
    pub fn new() -> Self {
        Self(Maybe::new())
    }

    pub fn from_node(node: NodeRef<T::Node>) -> Result<Self, TreeError> {
        Maybe::from_node(node).map(Self)
    }

    pub fn with<L>(leaf: L) -> Self
    where
        L: IsA<T> + Kind<Node = T::Node>,
    {
        Self(Maybe::with(leaf))
    }
}
impl<T: Kind> Clone for One<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}
impl<T: Kind> Default for One<T> {
    fn default() -> Self {
        Self::new()
    }
}
impl<T: Kind> std::fmt::Debug for One<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("One").field(&self.0.get()).finish()
    }
}
impl<T: Kind> std::ops::Deref for One<T> {
    type Target = Maybe<T>;

    fn deref(&self) -> &Maybe<T> {
        &self.0
    }
}
impl<T: Kind> std::ops::DerefMut for One<T> {
    fn deref_mut(&mut self) -> &mut Maybe<T> {
        &mut self.0
    }
}
impl<T: Kind> Edge for One<T> {
    type Node = T::Node;

    const WIRE_TAG: &'static str = "1";

    fn check_complete(&self, field: &str, map: &PointerMap) -> Result<(), NotWellFormed> {
        if self.0.is_empty() {
            return Err(NotWellFormed::new(format!("{field} is required but not set")));
        }
        self.0.check_child(map)
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
        Maybe::deserialize_with_tag(map, ids, Self::WIRE_TAG).map(Self)
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
