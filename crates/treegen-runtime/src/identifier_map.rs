use crate::Kind;
use crate::NodeRef;
use crate::SchemaValidationError;
use crate::TreeNode;
use crate::edges::LinkSlot;
use std::collections::HashMap;
use std::collections::hash_map::Entry;

type Result<T> = std::result::Result<T, SchemaValidationError>;

struct PendingLink<N> {
    accepts: fn(&N) -> bool,
    expected: &'static str,
    seq: u64,
    slot: LinkSlot<N>,
}

/// Tracks the nodes of a tree being deserialized by their sequence number.
///
/// Link fields may refer to nodes that have not been read yet, so they are
/// recorded as pending and only patched by [`IdentifierMap::restore_links`]
/// once the whole tree has been reconstructed.
pub struct IdentifierMap<N> {
    nodes: HashMap<u64, NodeRef<N>>,
    pending: Vec<PendingLink<N>>,
}
impl<N: TreeNode> IdentifierMap<N> {
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            pending: vec![],
        }
    }

    pub fn register(&mut self, seq: u64, node: &NodeRef<N>) -> Result<()> {
        match self.nodes.entry(seq) {
            Entry::Occupied(_) => Err(SchemaValidationError::DuplicateSequenceNumber { seq }),
            Entry::Vacant(entry) => {
                entry.insert(node.clone());
                Ok(())
            },
        }
    }

    pub(crate) fn register_link<K: Kind<Node = N>>(&mut self, slot: &LinkSlot<N>, seq: u64) {
        self.pending.push(PendingLink {
            accepts: K::accepts,
            expected: K::NAME,
            seq,
            slot: slot.clone(),
        });
    }

    /// Points every pending link at its target.
    pub fn restore_links(self) -> Result<()> {
        log::trace!(
            "restoring {} links across {} nodes",
            self.pending.len(),
            self.nodes.len(),
        );
        for link in self.pending {
            let Some(target) = self.nodes.get(&link.seq) else {
                return Err(SchemaValidationError::UnknownLinkTarget { seq: link.seq });
            };
            if !(link.accepts)(&target.borrow()) {
                return Err(SchemaValidationError::LinkTargetKind {
                    seq: link.seq,
                    expected: link.expected,
                    found: target.type_tag(),
                });
            }
            link.slot.set(target);
        }
        Ok(())
    }
}
impl<N: TreeNode> Default for IdentifierMap<N> {
    fn default() -> Self {
        Self::new()
    }
}
