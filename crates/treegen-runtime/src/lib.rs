//! Runtime support for trees generated by `treegen`.
//!
//! Generated code defines one `Node` sum type per specification and
//! implements [`TreeNode`] for it. Everything else (edge containers,
//! well-formedness checking, copying, equality, dumping and the CBOR
//! serialization format) lives here and is shared by every generated tree.

pub mod annotations;
mod cbor;
mod dumper;
pub mod edges;
mod equality;
mod error;
mod identifier_map;
mod node_ref;
mod pointer_map;
pub mod primitives;
mod serdes;
mod tree_node;

pub use cbor::MapReader;
pub use cbor::MapWriter;
pub use ciborium::Value as CborValue;
pub use dumper::Dumper;
pub use equality::EqualityContext;
pub use error::NotWellFormed;
pub use error::SchemaValidationError;
pub use error::TreeError;
pub use identifier_map::IdentifierMap;
pub use node_ref::NodeRef;
pub use node_ref::WeakNodeRef;
pub use node_ref::make;
pub use pointer_map::PointerMap;
pub use serdes::deserialize;
pub use serdes::read_node;
pub use serdes::serialize;
pub use tree_node::IsA;
pub use tree_node::Kind;
pub use tree_node::Leaf;
pub use tree_node::SerializableNode;
pub use tree_node::TreeNode;
