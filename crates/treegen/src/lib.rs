//! Generates typed tree data structures from a node/edge specification.
//!
//! A [`Specification`] is assembled with a [`SpecificationBuilder`], planned
//! once into a [`plan::GenerationPlan`] and handed to one or more
//! [`codegen::Backend`]s. Generated Rust code links against
//! [`runtime`].
//!
//! ```
//! use treegen::EdgeKind;
//! use treegen::SpecificationBuilder;
//! use treegen::codegen::RustBackend;
//! use treegen::codegen::generate_all;
//! use treegen::spec::NodeBuilder;
//!
//! let mut builder = SpecificationBuilder::new();
//! builder.set_initialize_function("treegen::runtime::primitives::initialize")?;
//! builder.set_support_namespace("treegen::runtime")?;
//! builder.add_node(
//!     NodeBuilder::new("list", "A list of numbers.")
//!         .with_child(EdgeKind::Many, "number", "items", "The items."),
//! )?;
//! builder.add_node(
//!     NodeBuilder::new("number", "A number.")
//!         .with_prim("i64", "value", "The value.", None),
//! )?;
//! let spec = builder.build()?;
//!
//! let files = generate_all(&spec, &[&RustBackend::new()])?;
//! assert_eq!(files.len(), 1);
//! assert!(files[0].contents.contains("pub struct List"));
//! # Ok::<(), treegen::codegen::CodegenError>(())
//! ```

pub use treegen_core::*;

/// Support library the generated trees are built on.
pub mod runtime {
    pub use treegen_runtime::*;
}
