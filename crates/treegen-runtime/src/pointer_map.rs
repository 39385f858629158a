use crate::NodeRef;
use crate::NotWellFormed;
use crate::TreeNode;
use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// Assigns sequence numbers to the nodes of a tree in the order they are
/// reached, starting at zero for the root.
///
/// A strict map rejects a node that is added twice. A lenient map ignores
/// the repeat, which lets dumps and equality work on trees that are not
/// well-formed.
#[derive(Debug)]
pub struct PointerMap {
    ids: HashMap<usize, usize>,
    strict: bool,
}
impl PointerMap {
    pub fn lenient() -> Self {
        Self {
            ids: HashMap::new(),
            strict: false,
        }
    }

    pub fn strict() -> Self {
        Self {
            ids: HashMap::new(),
            strict: true,
        }
    }

    /// Registers `node`. Returns whether it was new.
    pub fn add<N: TreeNode>(&mut self, node: &NodeRef<N>) -> Result<bool, NotWellFormed> {
        let next = self.ids.len();
        match self.ids.entry(node.addr()) {
            Entry::Vacant(entry) => {
                entry.insert(next);
                Ok(true)
            },
            Entry::Occupied(_) if self.strict => Err(NotWellFormed::new(format!(
                "{} node occurs more than once in tree",
                node.type_tag(),
            ))),
            Entry::Occupied(_) => Ok(false),
        }
    }

    pub fn get<N: TreeNode>(&self, node: &NodeRef<N>) -> Option<usize> {
        self.get_addr(node.addr())
    }

    pub(crate) fn get_addr(&self, addr: usize) -> Option<usize> {
        self.ids.get(&addr).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }
}
