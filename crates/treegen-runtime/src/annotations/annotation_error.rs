#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum AnnotationError {
    #[error("annotation `{name}` could not be decoded")]
    Decode {
        name: String,
    },

    #[error("object does not have an annotation of type {type_name}")]
    Missing {
        type_name: &'static str,
    },
}
