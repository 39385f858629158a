use crate::plan::FieldPlan;
use crate::spec::NodeType;
use crate::spec::SpecBuildError;
use crate::spec::Specification;

/// Where a visitor method for a node type defers to when not overridden.
#[derive(Clone, Copy, Debug)]
pub enum VisitFallback<'spec> {
    /// The generic visit of any node.
    Node,
    Parent(&'spec NodeType),
}

#[derive(Clone, Debug)]
pub struct NodePlan<'spec> {
    ancestors: Vec<&'spec NodeType>,
    fields: Vec<FieldPlan<'spec>>,
    leaves: Vec<&'spec NodeType>,
    node: &'spec NodeType,
}
impl<'spec> NodePlan<'spec> {
    pub(crate) fn new(
        spec: &'spec Specification,
        node: &'spec NodeType,
    ) -> Result<Self, SpecBuildError> {
        let ancestors = node.ancestors(spec);
        let fields = node.all_fields(spec)?
            .into_iter()
            .map(|field| {
                let owner = ancestors.iter()
                    .copied()
                    .chain(std::iter::once(node))
                    .find(|n| n.fields().iter().any(|f| std::ptr::eq(f, field)))
                    .unwrap_or(node);
                FieldPlan::new(spec, owner, field)
            })
            .collect();
        Ok(Self {
            ancestors,
            fields,
            leaves: node.leaf_descendants(spec),
            node,
        })
    }

    /// Root-most first, not including the node itself.
    pub fn ancestors(&self) -> &[&'spec NodeType] {
        self.ancestors.as_slice()
    }

    /// Every field in `all_fields` order.
    pub fn fields(&self) -> &[FieldPlan<'spec>] {
        self.fields.as_slice()
    }

    pub fn is_leaf(&self) -> bool {
        self.node.is_leaf()
    }

    /// Type tags a deserializer for this node type accepts.
    pub fn leaf_tags(&self) -> Vec<&'spec str> {
        self.leaves.iter().map(|leaf| leaf.title_case_name()).collect()
    }

    pub fn leaves(&self) -> &[&'spec NodeType] {
        self.leaves.as_slice()
    }

    pub fn node(&self) -> &'spec NodeType {
        self.node
    }

    /// Fields followed by reachability collection and recursive visitors.
    pub fn traversed_fields(&self) -> impl Iterator<Item = &FieldPlan<'spec>> {
        self.fields.iter().filter(|field| field.is_traversed())
    }

    pub fn visit_fallback(&self) -> VisitFallback<'spec> {
        match self.ancestors.last() {
            Some(parent) => VisitFallback::Parent(parent),
            None => VisitFallback::Node,
        }
    }
}
