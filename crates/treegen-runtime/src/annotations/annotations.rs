use crate::MapReader;
use crate::MapWriter;
use crate::annotations::AnnotationError;
use crate::annotations::serdes_registry;
use std::any::Any;
use std::any::TypeId;
use std::collections::HashMap;
use std::sync::PoisonError;

/// A value that can be stored in an [`Annotations`] table.
pub trait AnnotationValue: Any {
    fn annotation_type_id(&self) -> TypeId;

    fn annotation_type_name(&self) -> &'static str;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn clone_box(&self) -> Box<dyn AnnotationValue>;
}
impl<T: Any + Clone> AnnotationValue for T {
    fn annotation_type_id(&self) -> TypeId {
        TypeId::of::<T>()
    }

    fn annotation_type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn clone_box(&self) -> Box<dyn AnnotationValue> {
        Box::new(self.clone())
    }
}

/// Type-keyed side-table of annotations.
///
/// Not part of a node's value: structural equality ignores annotations.
#[derive(Default)]
pub struct Annotations {
    values: HashMap<TypeId, Box<dyn AnnotationValue>>,
}
impl Annotations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies every annotation of `other` into this table, overwriting
    /// annotations of the same type.
    pub fn copy_from(&mut self, other: &Annotations) {
        for (type_id, value) in &other.values {
            self.values.insert(*type_id, value.as_ref().clone_box());
        }
    }

    /// Removes the annotation of type `A`. Returns whether there was one.
    pub fn erase<A: Any>(&mut self) -> bool {
        self.values.remove(&TypeId::of::<A>()).is_some()
    }

    pub fn get<A: Any>(&self) -> Option<&A> {
        self.values
            .get(&TypeId::of::<A>())
            .and_then(|value| value.as_ref().as_any().downcast_ref::<A>())
    }

    pub fn get_mut<A: Any>(&mut self) -> Option<&mut A> {
        self.values
            .get_mut(&TypeId::of::<A>())
            .and_then(|value| value.as_mut().as_any_mut().downcast_mut::<A>())
    }

    /// Like [`Annotations::get`], for callers that treat absence as an
    /// error.
    pub fn get_required<A: Any>(&self) -> Result<&A, AnnotationError> {
        self.get::<A>().ok_or(AnnotationError::Missing {
            type_name: std::any::type_name::<A>(),
        })
    }

    pub fn has<A: Any>(&self) -> bool {
        self.values.contains_key(&TypeId::of::<A>())
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Stores `value`, replacing any annotation of the same type.
    pub fn set<A: Any + Clone>(&mut self, value: A) {
        self.values.insert(TypeId::of::<A>(), Box::new(value));
    }

    /// Reads every `{name}` entry of a node map whose name is registered.
    pub(crate) fn read_from(&mut self, map: &MapReader<'_>) -> Result<(), AnnotationError> {
        let registry = serdes_registry()
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        for (key, value) in map.iter() {
            let Some(name) = key.strip_prefix('{').and_then(|k| k.strip_suffix('}')) else {
                continue;
            };
            match registry.deserialize(name, value) {
                Some(decoded) => {
                    let decoded = decoded?;
                    self.values.insert(decoded.as_ref().annotation_type_id(), decoded);
                },
                None => log::trace!("skipping unregistered annotation `{name}`"),
            }
        }
        Ok(())
    }

    /// Appends a `{name}` entry for every annotation with a registered
    /// codec, ordered by name.
    pub(crate) fn write_into(&self, map: &mut MapWriter) {
        let registry = serdes_registry()
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        let mut entries: Vec<(String, ciborium::Value)> = self.values
            .values()
            .filter_map(|value| registry.serialize(value.as_ref()))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        for (name, value) in entries {
            map.append(&format!("{{{name}}}"), value);
        }
    }
}
impl Clone for Annotations {
    fn clone(&self) -> Self {
        let mut copy = Self::new();
        copy.copy_from(self);
        copy
    }
}
impl std::fmt::Debug for Annotations {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<&str> = self.values
            .values()
            .map(|value| value.as_ref().annotation_type_name())
            .collect();
        names.sort_unstable();
        f.debug_set().entries(names).finish()
    }
}
