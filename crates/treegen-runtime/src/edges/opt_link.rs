use crate::Dumper;
use crate::EqualityContext;
use crate::IdentifierMap;
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
use crate::edges::link::LinkSlot;
use crate::edges::link::LinkState;
use ciborium::Value;
use std::marker::PhantomData;

/// An optional reference to a node of kind `T` owned elsewhere in the same
/// tree.
pub struct OptLink<T: Kind> {
    slot: LinkSlot<T::Node>,
    _kind: PhantomData<fn() -> T>,
}
impl<T: Kind> OptLink<T> {
    pub fn new() -> Self {
        Self {
            slot: LinkSlot::new(None),
            _kind: PhantomData,
        }
    }

    pub fn clear(&mut self) {
        self.slot.clear();
    }

    /// The current target. `None` when unset or when the target has been
    /// dropped.
    pub fn get(&self) -> Option<NodeRef<T::Node>> {
        match self.slot.state() {
            LinkState::Target(target) => Some(target),
            LinkState::Unset | LinkState::Dangling => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.slot.state(), LinkState::Unset)
    }

    pub fn set(&mut self, target: &NodeRef<T::Node>) -> Result<(), TreeError> {
        check_kind::<T>(target)?;
        self.slot.set(target);
        Ok(())
    }

    pub fn to(target: &NodeRef<T::Node>) -> Result<Self, TreeError> {
        let mut link = Self::new();
        link.set(target)?;
        Ok(link)
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
        let link = Self::new();
        if !map.is_null("@l")? {
            ids.register_link::<T>(&link.slot, map.uint("@l")?);
        }
        Ok(link)
    }

    pub(crate) fn dump_with_marker(
        &self,
        name: &str,
        empty_marker: &str,
        dumper: &mut Dumper<'_>,
    ) -> std::fmt::Result {
        dumper.field(name, " --> ")?;
        match self.slot.state() {
            LinkState::Target(target) => dumper.link(T::NAME, &target),
            LinkState::Unset | LinkState::Dangling => dumper.marker(empty_marker),
        }
    }

    pub(crate) fn serialize_with_tag(
        &self,
        ids: &PointerMap,
        wire_tag: &'static str,
    ) -> Result<Value, TreeError> {
        let mut map = MapWriter::new();
        map.append_text("@T", wire_tag);
        match self.get().and_then(|target| ids.get(&target)) {
            Some(seq) => map.append_uint("@l", seq as u64),
            None => map.append_null("@l"),
        }
        Ok(map.into_value())
    }
}
impl<T: Kind> Clone for OptLink<T> {
    /// The copy points at the same target.
    fn clone(&self) -> Self {
        Self {
            slot: self.slot.detach(),
            _kind: PhantomData,
        }
    }
}
impl<T: Kind> Default for OptLink<T> {
    fn default() -> Self {
        Self::new()
    }
}
impl<T: Kind> std::fmt::Debug for OptLink<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("OptLink").field(&self.get()).finish()
    }
}
impl<T: Kind> Edge for OptLink<T> {
    type Node = T::Node;

    const WIRE_TAG: &'static str = "@";

    fn check_complete(&self, field: &str, map: &PointerMap) -> Result<(), NotWellFormed> {
        let reachable = match self.slot.state() {
            LinkState::Unset => true,
            LinkState::Dangling => false,
            LinkState::Target(target) => map.get(&target).is_some(),
        };
        if reachable {
            Ok(())
        } else {
            Err(NotWellFormed::new(format!("{field} links to unreachable node")))
        }
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
        Self::deserialize_with_tag(map, ids, Self::WIRE_TAG)
    }

    fn dump_field(&self, name: &str, dumper: &mut Dumper<'_>) -> std::fmt::Result {
        self.dump_with_marker(name, "-", dumper)
    }

    fn equals(&self, other: &Self, ctx: &EqualityContext) -> bool {
        ctx.link_targets_equal(self.get().as_ref(), other.get().as_ref())
    }

    fn find_reachable(&self, _map: &mut PointerMap) -> Result<(), NotWellFormed> {
        Ok(())
    }

    fn serialize_field(&self, ids: &PointerMap) -> Result<Value, TreeError>
    where
        T::Node: SerializableNode,
    {
        self.serialize_with_tag(ids, Self::WIRE_TAG)
    }
}
