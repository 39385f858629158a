//! Code generation backends.
//!
//! A backend turns a [`GenerationPlan`](crate::plan::GenerationPlan) into
//! source files. Backends never make their own decisions about field order,
//! completeness or wire tags; they spell out what the plan says.

mod backend;
mod codegen_error;
mod generated_file;
mod rust_backend;

pub use backend::Backend;
pub use backend::generate_all;
pub use codegen_error::CodegenError;
pub use generated_file::GeneratedFile;
pub use rust_backend::RustBackend;
