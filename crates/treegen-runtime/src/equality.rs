use crate::NodeRef;
use crate::PointerMap;
use crate::TreeNode;

/// State shared by a structural comparison of two trees.
///
/// Link targets compare equal when they are the same node, or when they
/// hold the same sequence number in their respective trees. The latter
/// makes a tree equal to its deserialized copy.
pub struct EqualityContext {
    lhs: Option<PointerMap>,
    rhs: Option<PointerMap>,
}
impl EqualityContext {
    pub fn between<N: TreeNode>(lhs: &NodeRef<N>, rhs: &NodeRef<N>) -> Self {
        Self {
            lhs: Some(number_nodes(lhs)),
            rhs: Some(number_nodes(rhs)),
        }
    }

    /// Link targets only compare equal when they are the same node.
    pub fn identity() -> Self {
        Self {
            lhs: None,
            rhs: None,
        }
    }

    pub fn link_targets_equal<N: TreeNode>(
        &self,
        lhs: Option<&NodeRef<N>>,
        rhs: Option<&NodeRef<N>>,
    ) -> bool {
        match (lhs, rhs) {
            (None, None) => true,
            (Some(lhs), Some(rhs)) if lhs.ptr_eq(rhs) => true,
            (Some(lhs), Some(rhs)) => match (&self.lhs, &self.rhs) {
                (Some(lhs_ids), Some(rhs_ids)) => {
                    let lhs_seq = lhs_ids.get(lhs);
                    lhs_seq.is_some() && lhs_seq == rhs_ids.get(rhs)
                },
                _ => false,
            },
            _ => false,
        }
    }

    pub fn nodes_equal<N: TreeNode>(&self, lhs: &NodeRef<N>, rhs: &NodeRef<N>) -> bool {
        lhs.ptr_eq(rhs) || lhs.borrow().equals(&rhs.borrow(), self)
    }
}

fn number_nodes<N: TreeNode>(root: &NodeRef<N>) -> PointerMap {
    let mut ids = PointerMap::lenient();
    if let Err(err) = root.find_reachable(&mut ids) {
        log::trace!("numbering nodes for comparison: {err}");
    }
    ids
}
