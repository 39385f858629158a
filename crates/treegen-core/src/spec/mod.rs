mod field;
mod node_builder;
mod node_type;
mod spec_build_error;
#[allow(clippy::module_inception)]
mod specification;
mod specification_builder;
mod support_hooks;

pub use field::Field;
pub use field::FieldKind;
pub use node_builder::NodeBuilder;
pub use node_type::NodeType;
pub use node_type::NodeTypeId;
pub use spec_build_error::SpecBuildError;
pub use spec_build_error::SpecBuildErrorCategory;
pub use specification::Namespace;
pub use specification::Specification;
pub use specification_builder::SpecificationBuilder;
pub use support_hooks::SerDesFunctions;
pub use support_hooks::SupportHooks;

#[cfg(test)]
pub(crate) mod tests;
