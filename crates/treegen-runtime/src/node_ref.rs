use crate::Dumper;
use crate::EqualityContext;
use crate::Kind;
use crate::Leaf;
use crate::NotWellFormed;
use crate::PointerMap;
use crate::TreeNode;
use std::cell::Ref;
use std::cell::RefCell;
use std::cell::RefMut;
use std::rc::Rc;
use std::rc::Weak;

/// A shared handle to a node of a tree.
///
/// The identity of a node is its allocation: two handles refer to the same
/// node exactly when [`NodeRef::ptr_eq`] holds. `==` compares by value, see
/// [`NodeRef::equals`].
pub struct NodeRef<N>(Rc<RefCell<N>>);
impl<N: TreeNode> NodeRef<N> {
    pub fn new(node: N) -> Self {
        Self(Rc::new(RefCell::new(node)))
    }

    /// Stable address of the node, used as its identity.
    pub(crate) fn addr(&self) -> usize {
        Rc::as_ptr(&self.0).cast::<()>() as usize
    }

    pub fn borrow(&self) -> Ref<'_, N> {
        self.0.borrow()
    }

    pub fn borrow_as<L: Leaf<Node = N>>(&self) -> Option<Ref<'_, L>> {
        Ref::filter_map(self.0.borrow(), L::cast).ok()
    }

    pub fn borrow_as_mut<L: Leaf<Node = N>>(&self) -> Option<RefMut<'_, L>> {
        RefMut::filter_map(self.0.borrow_mut(), L::cast_mut).ok()
    }

    pub fn borrow_mut(&self) -> RefMut<'_, N> {
        self.0.borrow_mut()
    }

    /// `None` while the node is mutably borrowed.
    pub fn try_borrow(&self) -> Option<Ref<'_, N>> {
        self.0.try_borrow().ok()
    }

    pub fn check_complete(&self, map: &PointerMap) -> Result<(), NotWellFormed> {
        self.borrow().check_complete(map)
    }

    /// Checks that the tree rooted at this node is well-formed: no node is
    /// owned twice, every required edge is populated and every link points
    /// into the tree. Reports the first violation found.
    pub fn check_well_formed(&self) -> Result<(), NotWellFormed> {
        self.well_formed_ids().map(|_| ())
    }

    /// Deep copy. Owned children are copied recursively; links in the copy
    /// still point at the nodes of this tree.
    pub fn deep_clone(&self) -> Self {
        Self::new(self.borrow().deep_clone())
    }

    pub fn downgrade(&self) -> WeakNodeRef<N> {
        WeakNodeRef(Rc::downgrade(&self.0))
    }

    /// Renders the tree rooted at this node for debugging.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = Dumper::new(&mut out, None).node(self);
        out
    }

    /// Like [`NodeRef::dump`], but every node is suffixed with its sequence
    /// number and links print the sequence number of their target instead
    /// of its contents. Also works for trees that are not well-formed: a
    /// node owned more than once is expanded at its first occurrence only.
    pub fn dump_seq(&self) -> String {
        let mut ids = PointerMap::lenient();
        if let Err(err) = self.find_reachable(&mut ids) {
            log::trace!("numbering nodes for dump: {err}");
        }
        let mut out = String::new();
        let _ = Dumper::new(&mut out, Some(&ids)).node(self);
        out
    }

    /// Structural equality. Owned children and primitives are compared by
    /// value and annotations are ignored. Links are equal when they point
    /// at the same node, or at nodes with the same position in their
    /// respective trees.
    pub fn equals(&self, other: &Self) -> bool {
        EqualityContext::between(self, other).nodes_equal(self, other)
    }

    pub fn find_reachable(&self, map: &mut PointerMap) -> Result<(), NotWellFormed> {
        if map.add(self)? {
            self.borrow().find_reachable(map)?;
        }
        Ok(())
    }

    /// Whether the node is an instance of (a leaf below) `K`.
    pub fn is<K: Kind<Node = N>>(&self) -> bool {
        K::accepts(&self.borrow())
    }

    pub fn is_well_formed(&self) -> bool {
        self.check_well_formed().is_ok()
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// A copy of this node that shares its owned children with the
    /// original. The two trees together are not well-formed until one of
    /// them is dropped or the shared children are replaced.
    pub fn shallow_copy(&self) -> Self
    where
        N: Clone,
    {
        Self::new(self.borrow().clone())
    }

    pub fn type_tag(&self) -> &'static str {
        self.borrow().type_tag()
    }

    pub(crate) fn well_formed_ids(&self) -> Result<PointerMap, NotWellFormed> {
        let mut ids = PointerMap::strict();
        self.find_reachable(&mut ids)?;
        log::trace!("{} nodes reachable from {}", ids.len(), self.type_tag());
        self.check_complete(&ids)?;
        Ok(ids)
    }
}
impl<N> Clone for NodeRef<N> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}
impl<N: TreeNode> std::fmt::Debug for NodeRef<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "NodeRef({}@{:#x})", self.type_tag(), self.addr())
    }
}
impl<N: TreeNode> std::fmt::Display for NodeRef<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Dumper::new(f, None).node(self)
    }
}
impl<N: TreeNode> PartialEq for NodeRef<N> {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

/// Allocates a new node for `leaf`.
pub fn make<L: Leaf>(leaf: L) -> NodeRef<L::Node> {
    NodeRef::new(leaf.into_node())
}

/// A non-owning handle, held by link edges.
pub struct WeakNodeRef<N>(Weak<RefCell<N>>);
impl<N: TreeNode> WeakNodeRef<N> {
    pub fn upgrade(&self) -> Option<NodeRef<N>> {
        self.0.upgrade().map(NodeRef)
    }
}
impl<N> Clone for WeakNodeRef<N> {
    fn clone(&self) -> Self {
        Self(Weak::clone(&self.0))
    }
}
