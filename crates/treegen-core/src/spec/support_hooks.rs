use serde::Deserialize;
use serde::Serialize;

pub(crate) const DEFAULT_SUPPORT_NAMESPACE: &str = "treegen_runtime";

/// Paths of the functions generated code calls to (de)serialize primitive
/// field values.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SerDesFunctions {
    pub deserialize: String,
    pub serialize: String,
}

/// Generator-wide configuration carried by a
/// [`Specification`](crate::spec::Specification).
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SupportHooks {
    pub(crate) initialize_function: String,
    pub(crate) serdes_functions: Option<SerDesFunctions>,
    pub(crate) source_location: Option<String>,
    pub(crate) support_namespace: String,
    pub(crate) tree_namespace: String,
}
impl SupportHooks {
    /// Path of the function that produces the initial value of every
    /// primitive field.
    pub fn initialize_function(&self) -> &str {
        self.initialize_function.as_str()
    }

    /// Serialization code is only generated when these are configured.
    pub fn serdes_functions(&self) -> Option<&SerDesFunctions> {
        self.serdes_functions.as_ref()
    }

    /// Annotation type used to print source locations in dumps.
    pub fn source_location(&self) -> Option<&str> {
        self.source_location.as_deref()
    }

    pub fn support_namespace(&self) -> &str {
        self.support_namespace.as_str()
    }

    pub fn tree_namespace(&self) -> &str {
        self.tree_namespace.as_str()
    }
}
