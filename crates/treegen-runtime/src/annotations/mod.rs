//! Out-of-band data attached to tree nodes.
//!
//! Every node carries an [`Annotations`] side-table holding at most one
//! value per Rust type. Annotation types registered with the
//! [`SerDesRegistry`] are written to and read back from the serialized form
//! of a tree; all others are silently left out.

#[allow(clippy::module_inception)]
mod annotations;
mod annotation_error;
mod registry;

pub use annotation_error::AnnotationError;
pub use annotations::AnnotationValue;
pub use annotations::Annotations;
pub use registry::SerDesRegistry;
pub use registry::register_annotation;
pub use registry::serdes_registry;
