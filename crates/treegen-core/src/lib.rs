pub mod codegen;
mod edge_kind;
mod naming;
pub mod plan;
pub mod spec;

pub use edge_kind::EdgeKind;
pub use naming::title_case;
pub use spec::Specification;
pub use spec::SpecificationBuilder;
pub use spec::SpecBuildError;
