use crate::annotations::AnnotationError;
use crate::annotations::AnnotationValue;
use ciborium::Value;
use std::any::Any;
use std::any::TypeId;
use std::collections::HashMap;
use std::sync::OnceLock;
use std::sync::PoisonError;
use std::sync::RwLock;

type SerializeFn = Box<dyn Fn(&dyn Any) -> Option<Value> + Send + Sync>;
type DeserializeFn = Box<dyn Fn(&Value) -> Option<Box<dyn AnnotationValue>> + Send + Sync>;

/// Maps annotation types to the functions that encode and decode them.
///
/// Annotations are keyed in the serialized form by their registered name.
#[derive(Default)]
pub struct SerDesRegistry {
    deserializers: HashMap<String, (TypeId, DeserializeFn)>,
    serializers: HashMap<TypeId, (String, SerializeFn)>,
}
impl SerDesRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn deserialize(
        &self,
        name: &str,
        value: &Value,
    ) -> Option<Result<Box<dyn AnnotationValue>, AnnotationError>> {
        let (_, deserialize) = self.deserializers.get(name)?;
        Some(deserialize(value).ok_or_else(|| AnnotationError::Decode {
            name: name.to_string(),
        }))
    }

    pub fn is_registered<A: Any>(&self) -> bool {
        self.serializers.contains_key(&TypeId::of::<A>())
    }

    /// Registers the codec for annotation type `A`. Without an explicit
    /// name the type's [`std::any::type_name`] is used. Registering a type
    /// again replaces its codec, and a previous name stops decoding to it.
    pub fn register<A: Any + Clone>(
        &mut self,
        name: Option<&str>,
        serialize: fn(&A) -> Value,
        deserialize: fn(&Value) -> Option<A>,
    ) {
        let name = name.unwrap_or(std::any::type_name::<A>()).to_string();
        log::debug!("registering annotation codec `{name}`");
        let type_id = TypeId::of::<A>();
        let previous = self.serializers.insert(type_id, (
            name.to_string(),
            Box::new(move |value: &dyn Any| value.downcast_ref::<A>().map(serialize)),
        ));
        if let Some((previous, _)) = previous
            && previous != name
            && self.deserializers.get(&previous).is_some_and(|(owner, _)| *owner == type_id)
        {
            self.deserializers.remove(&previous);
        }
        self.deserializers.insert(name, (type_id, Box::new(move |value: &Value| {
            deserialize(value).map(|a| Box::new(a) as Box<dyn AnnotationValue>)
        })));
    }

    pub(crate) fn serialize(&self, value: &dyn AnnotationValue) -> Option<(String, Value)> {
        let (name, serialize) = self.serializers.get(&value.annotation_type_id())?;
        serialize(value.as_any()).map(|encoded| (name.to_string(), encoded))
    }
}

/// The process-wide registry used by serialization.
///
/// Registration is expected to happen during program initialization,
/// before any tree is serialized or deserialized.
pub fn serdes_registry() -> &'static RwLock<SerDesRegistry> {
    static REGISTRY: OnceLock<RwLock<SerDesRegistry>> = OnceLock::new();
    REGISTRY.get_or_init(|| RwLock::new(SerDesRegistry::new()))
}

/// Registers an annotation codec with the process-wide registry.
pub fn register_annotation<A: Any + Clone>(
    name: Option<&str>,
    serialize: fn(&A) -> Value,
    deserialize: fn(&Value) -> Option<A>,
) {
    serdes_registry()
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .register(name, serialize, deserialize);
}
