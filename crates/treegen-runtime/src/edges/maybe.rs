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

/// Zero or one owned node of kind `T`.
pub struct Maybe<T: Kind> {
    node: Option<NodeRef<T::Node>>,
    _kind: PhantomData<fn() -> T>,
}
impl<T: Kind> Maybe<T> {
    pub fn new() -> Self {
        Self {
            node: None,
            _kind: PhantomData,
        }
    }

    pub fn clear(&mut self) {
        self.node = None;
    }

    /// Allocates `leaf` and stores it, returning its handle.
    pub fn emplace<L>(&mut self, leaf: L) -> NodeRef<T::Node>
    where
        L: IsA<T> + Kind<Node = T::Node>,
    {
        let node = make(leaf);
        self.node = Some(node.clone());
        node
    }

    pub fn from_node(node: NodeRef<T::Node>) -> Result<Self, TreeError> {
        let mut edge = Self::new();
        edge.set(node)?;
        Ok(edge)
    }

    pub fn get(&self) -> Option<&NodeRef<T::Node>> {
        self.node.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.node.is_none()
    }

    /// Replaces the current node, if any.
    pub fn set(&mut self, node: NodeRef<T::Node>) -> Result<(), TreeError> {
        check_kind::<T>(&node)?;
        self.node = Some(node);
        Ok(())
    }

    pub fn take(&mut self) -> Option<NodeRef<T::Node>> {
        self.node.take()
    }

    pub fn with<L>(leaf: L) -> Self
    where
        L: IsA<T> + Kind<Node = T::Node>,
    {
        let mut edge = Self::new();
        edge.emplace(leaf);
        edge
    }

    pub(crate) fn check_child(&self, map: &PointerMap) -> Result<(), NotWellFormed> {
        match &self.node {
            Some(node) => node.check_complete(map),
            None => Ok(()),
        }
    }

    pub(crate) fn dump_with_marker(
        &self,
        name: &str,
        empty_marker: &str,
        dumper: &mut Dumper<'_>,
    ) -> std::fmt::Result {
        dumper.field(name, ": ")?;
        match &self.node {
            Some(node) => dumper.child(node),
            None => dumper.marker(empty_marker),
        }
    }

    pub(crate) fn deserialize_with_tag(
        map: &MapReader<'_>,
        ids: &mut IdentifierMap<T::Node>,
        wire_tag: &'static str,
    ) -> Result<Self, TreeError>
    where
        T::Node: SerializableNode,
    {
        check_wire_tag(map, wire_tag)?;
        if map.is_null("@t")? {
            return Ok(Self::new());
        }
        let node = serdes::read_node::<T>(map, ids)?;
        Ok(Self {
            node: Some(node),
            _kind: PhantomData,
        })
    }

    pub(crate) fn serialize_with_tag(
        &self,
        ids: &PointerMap,
        wire_tag: &'static str,
    ) -> Result<Value, TreeError>
    where
        T::Node: SerializableNode,
    {
        let mut map = MapWriter::new();
        map.append_text("@T", wire_tag);
        match &self.node {
            Some(node) => serdes::write_node_into(node, ids, &mut map)?,
            None => map.append_null("@t"),
        }
        Ok(map.into_value())
    }
}
impl<T: Kind> Clone for Maybe<T> {
    /// Shares the node with the copy.
    fn clone(&self) -> Self {
        Self {
            node: self.node.clone(),
            _kind: PhantomData,
        }
    }
}
impl<T: Kind> Default for Maybe<T> {
    fn default() -> Self {
        Self::new()
    }
}
impl<T: Kind> std::fmt::Debug for Maybe<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Maybe").field(&self.node).finish()
    }
}
impl<T: Kind> Edge for Maybe<T> {
    type Node = T::Node;

    const WIRE_TAG: &'static str = "?";

    fn check_complete(&self, _field: &str, map: &PointerMap) -> Result<(), NotWellFormed> {
        self.check_child(map)
    }

    fn children(&self) -> Vec<NodeRef<T::Node>> {
        self.node.iter().cloned().collect()
    }

    fn deep_clone(&self) -> Self {
        Self {
            node: self.node.as_ref().map(NodeRef::deep_clone),
            _kind: PhantomData,
        }
    }

    fn deserialize_field(
        map: &MapReader<'_>,
        ids: &mut IdentifierMap<T::Node>,
    ) -> Result<Self, TreeError>
    where
        T::Node: SerializableNode,
    {
        Self::deserialize_with_tag(map, ids, Self::WIRE_TAG)
    }

    fn dump_field(&self, name: &str, dumper: &mut Dumper<'_>) -> std::fmt::Result {
        self.dump_with_marker(name, "-", dumper)
    }

    fn equals(&self, other: &Self, ctx: &EqualityContext) -> bool {
        match (&self.node, &other.node) {
            (None, None) => true,
            (Some(lhs), Some(rhs)) => ctx.nodes_equal(lhs, rhs),
            _ => false,
        }
    }

    fn find_reachable(&self, map: &mut PointerMap) -> Result<(), NotWellFormed> {
        match &self.node {
            Some(node) => node.find_reachable(map),
            None => Ok(()),
        }
    }

    fn serialize_field(&self, ids: &PointerMap) -> Result<Value, TreeError>
    where
        T::Node: SerializableNode,
    {
        self.serialize_with_tag(ids, Self::WIRE_TAG)
    }
}
