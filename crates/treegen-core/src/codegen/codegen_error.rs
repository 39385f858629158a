use crate::spec::SpecBuildError;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CodegenError {
    #[error("`{name}` cannot be used as a Rust identifier: {message}")]
    InvalidIdentifier {
        name: String,
        message: String,
    },

    #[error("`{path}` is not a valid Rust path: {message}")]
    InvalidPath {
        path: String,
        message: String,
    },

    #[error("field `{field}` has type `{type_path}`, which is not a valid Rust type: {message}")]
    InvalidType {
        field: String,
        type_path: String,
        message: String,
    },

    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("generated code for {file} does not parse: {message}")]
    MalformedOutput {
        file: String,
        message: String,
    },

    #[error("`{name}` clashes with an item of the generated code")]
    ReservedName {
        name: String,
    },

    #[error(transparent)]
    Spec(#[from] SpecBuildError),
}
