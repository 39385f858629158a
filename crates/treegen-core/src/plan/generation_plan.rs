use crate::plan::NodePlan;
use crate::spec::NodeType;
use crate::spec::NodeTypeId;
use crate::spec::SpecBuildError;
use crate::spec::Specification;
use std::collections::HashSet;

type Result<T> = std::result::Result<T, SpecBuildError>;

/// Everything a backend needs, in the order it should be generated.
#[derive(Clone, Debug)]
pub struct GenerationPlan<'spec> {
    leaves: Vec<&'spec NodeType>,
    nodes: Vec<NodePlan<'spec>>,
    spec: &'spec Specification,
}
impl<'spec> GenerationPlan<'spec> {
    pub fn new(spec: &'spec Specification) -> Result<Self> {
        let mut visited = HashSet::new();
        let mut order = vec![];
        for node in spec.nodes() {
            visit_ancestors_first(spec, node.id(), &mut visited, &mut order);
        }

        let nodes = order.into_iter()
            .map(|id| NodePlan::new(spec, spec.node(id)))
            .collect::<Result<Vec<_>>>()?;
        let leaves = spec.nodes().filter(|node| node.is_leaf()).collect();
        log::debug!("planned generation of {} node types", nodes.len());

        Ok(Self {
            leaves,
            nodes,
            spec,
        })
    }

    /// Instantiable node types in declaration order.
    pub fn leaves(&self) -> &[&'spec NodeType] {
        self.leaves.as_slice()
    }

    /// Node plans with every ancestor before its descendants.
    pub fn nodes(&self) -> &[NodePlan<'spec>] {
        self.nodes.as_slice()
    }

    pub fn plan_for(&self, id: NodeTypeId) -> Option<&NodePlan<'spec>> {
        self.nodes.iter().find(|plan| plan.node().id() == id)
    }

    pub fn spec(&self) -> &'spec Specification {
        self.spec
    }
}

fn visit_ancestors_first(
    spec: &Specification,
    id: NodeTypeId,
    visited: &mut HashSet<NodeTypeId>,
    order: &mut Vec<NodeTypeId>,
) {
    if visited.contains(&id) {
        return;
    }
    if let Some(parent) = spec.node(id).parent(spec) {
        visit_ancestors_first(spec, parent.id(), visited, order);
    }
    visited.insert(id);
    order.push(id);
}
