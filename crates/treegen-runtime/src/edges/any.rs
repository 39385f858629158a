use crate::Dumper;
use crate::EqualityContext;
use crate::IdentifierMap;
use crate::IsA;
use crate::Kind;
use crate::MapReader;
use crate::MapWriter;
use crate::NodeRef;
use crate::NotWellFormed;
use crate::PointerMap;
use crate::SerializableNode;
use crate::TreeError;
use crate::edges::Edge;
use crate::edges::check_kind;
use crate::edges::check_wire_tag;
use crate::make;
use crate::serdes;
use ciborium::Value;
use std::marker::PhantomData;

type Result<T> = std::result::Result<T, TreeError>;

/// Zero or more owned nodes of kind `T`, in insertion order.
///
/// Positions passed to [`Any::insert`] and [`Any::remove`] may be negative
/// to count from the end: `-1` is the last element for `remove` and the
/// position after the last element for `insert`.
pub struct Any<T: Kind> {
    nodes: Vec<NodeRef<T::Node>>,
    _kind: PhantomData<fn() -> T>,
}
impl<T: Kind> Any<T> {
    pub fn new() -> Self {
        Self {
            nodes: vec![],
            _kind: PhantomData,
        }
    }

    /// Appends `node`.
    pub fn add(&mut self, node: NodeRef<T::Node>) -> Result<&mut Self> {
        check_kind::<T>(&node)?;
        self.nodes.push(node);
        Ok(self)
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Allocates `leaf` and appends it.
    pub fn emplace<L>(&mut self, leaf: L) -> &mut Self
    where
        L: IsA<T> + Kind<Node = T::Node>,
    {
        self.nodes.push(make(leaf));
        self
    }

    /// Moves every node of `other` to the end of this list.
    pub fn extend(&mut self, other: Any<T>) -> &mut Self {
        self.nodes.extend(other.nodes);
        self
    }

    pub fn get(&self, index: usize) -> Option<&NodeRef<T::Node>> {
        self.nodes.get(index)
    }

    pub fn insert(&mut self, index: isize, node: NodeRef<T::Node>) -> Result<&mut Self> {
        check_kind::<T>(&node)?;
        let pos = insert_position(index, self.nodes.len())?;
        self.nodes.insert(pos, node);
        Ok(self)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NodeRef<T::Node>> {
        self.nodes.iter()
    }

    pub fn last(&self) -> Option<&NodeRef<T::Node>> {
        self.nodes.last()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn pop(&mut self) -> Option<NodeRef<T::Node>> {
        self.nodes.pop()
    }

    pub fn remove(&mut self, index: isize) -> Result<NodeRef<T::Node>> {
        let pos = remove_position(index, self.nodes.len())?;
        Ok(self.nodes.remove(pos))
    }

    pub(crate) fn check_children(&self, map: &PointerMap) -> std::result::Result<(), NotWellFormed> {
        self.nodes.iter().try_for_each(|node| node.check_complete(map))
    }

    pub(crate) fn deserialize_with_tag(
        map: &MapReader<'_>,
        ids: &mut IdentifierMap<T::Node>,
        wire_tag: &'static str,
    ) -> Result<Self>
    where
        T::Node: SerializableNode,
    {
        check_wire_tag(map, wire_tag)?;
        let mut nodes = vec![];
        for (index, value) in map.array("@d")?.iter().enumerate() {
            let child = MapReader::new(value, &format!("@d[{index}]"))?;
            nodes.push(serdes::read_node::<T>(&child, ids)?);
        }
        Ok(Self {
            nodes,
            _kind: PhantomData,
        })
    }

    pub(crate) fn dump_with_marker(
        &self,
        name: &str,
        empty_marker: &str,
        dumper: &mut Dumper<'_>,
    ) -> std::fmt::Result {
        dumper.field(name, ": ")?;
        if self.nodes.is_empty() {
            dumper.marker(empty_marker)
        } else {
            dumper.children(&self.nodes)
        }
    }

    pub(crate) fn serialize_with_tag(
        &self,
        ids: &PointerMap,
        wire_tag: &'static str,
    ) -> Result<Value>
    where
        T::Node: SerializableNode,
    {
        let mut map = MapWriter::new();
        map.append_text("@T", wire_tag);
        let mut children = Vec::with_capacity(self.nodes.len());
        for node in &self.nodes {
            let mut child = MapWriter::new();
            serdes::write_node_into(node, ids, &mut child)?;
            children.push(child.into_value());
        }
        map.append("@d", Value::Array(children));
        Ok(map.into_value())
    }
}
impl<T: Kind> Clone for Any<T> {
    /// Shares the nodes with the copy.
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
            _kind: PhantomData,
        }
    }
}
impl<T: Kind> Default for Any<T> {
    fn default() -> Self {
        Self::new()
    }
}
impl<T: Kind> std::fmt::Debug for Any<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(&self.nodes).finish()
    }
}
impl<T: Kind> Edge for Any<T> {
    type Node = T::Node;

    const WIRE_TAG: &'static str = "*";

    fn check_complete(&self, _field: &str, map: &PointerMap) -> std::result::Result<(), NotWellFormed> {
        self.check_children(map)
    }

    fn children(&self) -> Vec<NodeRef<T::Node>> {
        self.nodes.clone()
    }

    fn deep_clone(&self) -> Self {
        Self {
            nodes: self.nodes.iter().map(NodeRef::deep_clone).collect(),
            _kind: PhantomData,
        }
    }

    fn deserialize_field(
        map: &MapReader<'_>,
        ids: &mut IdentifierMap<T::Node>,
    ) -> Result<Self>
    where
        T::Node: SerializableNode,
    {
        Self::deserialize_with_tag(map, ids, Self::WIRE_TAG)
    }

    fn dump_field(&self, name: &str, dumper: &mut Dumper<'_>) -> std::fmt::Result {
        self.dump_with_marker(name, "[]", dumper)
    }

    fn equals(&self, other: &Self, ctx: &EqualityContext) -> bool {
        self.nodes.len() == other.nodes.len()
            && self.nodes
                .iter()
                .zip(&other.nodes)
                .all(|(lhs, rhs)| ctx.nodes_equal(lhs, rhs))
    }

    fn find_reachable(&self, map: &mut PointerMap) -> std::result::Result<(), NotWellFormed> {
        self.nodes.iter().try_for_each(|node| node.find_reachable(map))
    }

    fn serialize_field(&self, ids: &PointerMap) -> Result<Value>
    where
        T::Node: SerializableNode,
    {
        self.serialize_with_tag(ids, Self::WIRE_TAG)
    }
}
impl<'a, T: Kind> IntoIterator for &'a Any<T> {
    type Item = &'a NodeRef<T::Node>;
    type IntoIter = std::slice::Iter<'a, NodeRef<T::Node>>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

/// Resolves an insertion index against a list of `len` elements. Negative
/// indices count from one past the end.
pub(crate) fn insert_position(index: isize, len: usize) -> Result<usize> {
    let resolved = if index < 0 { index + len as isize + 1 } else { index };
    if (0..=len as isize).contains(&resolved) {
        Ok(resolved as usize)
    } else {
        Err(TreeError::IndexOutOfRange { index, len })
    }
}

/// Resolves the index of an existing element. Negative indices count from
/// the end.
pub(crate) fn remove_position(index: isize, len: usize) -> Result<usize> {
    let resolved = if index < 0 { index + len as isize } else { index };
    if (0..len as isize).contains(&resolved) {
        Ok(resolved as usize)
    } else {
        Err(TreeError::IndexOutOfRange { index, len })
    }
}
