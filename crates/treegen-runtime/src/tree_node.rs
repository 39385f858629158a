use crate::Dumper;
use crate::EqualityContext;
use crate::IdentifierMap;
use crate::MapReader;
use crate::MapWriter;
use crate::NotWellFormed;
use crate::PointerMap;
use crate::TreeError;
use crate::annotations::Annotations;

/// Implemented by the generated sum type over every leaf node type of a
/// tree.
///
/// The per-node operations recurse into children through the edge
/// containers in [`crate::edges`]; callers normally go through
/// [`NodeRef`](crate::NodeRef) instead of calling these directly.
pub trait TreeNode: Sized + 'static {
    /// TitleCase name of the leaf node type.
    fn type_tag(&self) -> &'static str;

    fn annotations(&self) -> &Annotations;

    fn annotations_mut(&mut self) -> &mut Annotations;

    /// Registers every node reachable through owning edges of this node.
    fn find_reachable(&self, map: &mut PointerMap) -> Result<(), NotWellFormed>;

    /// Checks required edges, list cardinality and link reachability for
    /// this node and, recursively, its owned children.
    fn check_complete(&self, map: &PointerMap) -> Result<(), NotWellFormed>;

    /// Copies owned children recursively. Links keep pointing at the
    /// original targets.
    fn deep_clone(&self) -> Self;

    fn equals(&self, other: &Self, ctx: &EqualityContext) -> bool;

    /// Writes one line per field. The surrounding header and closing line
    /// are written by the [`Dumper`].
    fn dump_fields(&self, dumper: &mut Dumper<'_>) -> std::fmt::Result;

    fn source_location(&self) -> Option<String> {
        None
    }
}

/// Generated for trees whose specification configures serialization hooks.
pub trait SerializableNode: TreeNode {
    fn serialize_fields(
        &self,
        map: &mut MapWriter,
        ids: &PointerMap,
    ) -> Result<(), TreeError>;

    /// Reconstructs the leaf named by `tag` from its node map. Link fields
    /// are registered with `ids` and patched once the whole tree exists.
    fn deserialize_leaf(
        tag: &str,
        map: &MapReader<'_>,
        ids: &mut IdentifierMap<Self>,
    ) -> Result<Self, TreeError>;
}

/// A node type, leaf or abstract, that edges may point to.
pub trait Kind: 'static {
    type Node: TreeNode;

    const NAME: &'static str;

    /// Type tags of every leaf node type this kind stands for.
    const LEAF_TAGS: &'static [&'static str];

    fn accepts(node: &Self::Node) -> bool {
        Self::LEAF_TAGS.contains(&node.type_tag())
    }
}

/// An instantiable node type.
pub trait Leaf: Kind + Sized {
    fn cast(node: &Self::Node) -> Option<&Self>;

    fn cast_mut(node: &mut Self::Node) -> Option<&mut Self>;

    fn into_node(self) -> Self::Node;
}

/// Marks that leaf `Self` may be stored in an edge to `K`.
pub trait IsA<K: Kind>: Leaf {}
