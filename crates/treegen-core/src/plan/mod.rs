//! Backend-neutral decisions derived from a [`Specification`].
//!
//! Every backend must agree on field order, completeness rules, copy and
//! equality behavior, dump layout and wire tags. These are computed here,
//! once, so that backends only decide how to spell them.
//!
//! [`Specification`]: crate::spec::Specification

mod field_plan;
mod generation_plan;
mod hierarchy_graph;
mod node_plan;

pub use field_plan::CloneMode;
pub use field_plan::CompletenessRule;
pub use field_plan::EqualityMode;
pub use field_plan::FieldPlan;
pub use field_plan::FieldRole;
pub use generation_plan::GenerationPlan;
pub use hierarchy_graph::hierarchy_graph;
pub use node_plan::NodePlan;
pub use node_plan::VisitFallback;
