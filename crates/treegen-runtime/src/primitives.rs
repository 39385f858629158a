//! Default hooks for primitive field values.
//!
//! A specification names the functions generated code calls to initialize,
//! serialize and deserialize primitive fields. The functions here work for
//! every type implementing [`Primitive`] and store the encoded value under
//! the `x` key of the field's submap.

use crate::MapReader;
use crate::MapWriter;
use crate::SchemaValidationError;
use crate::TreeError;
use ciborium::Value;

const VALUE_KEY: &str = "x";

pub trait Primitive: Sized {
    /// The value a freshly constructed node holds.
    fn initialize() -> Self;

    fn from_cbor(value: &Value) -> Option<Self>;

    fn to_cbor(&self) -> Value;
}

pub fn initialize<T: Primitive>() -> T {
    T::initialize()
}

pub fn serialize<T: Primitive>(value: &T, map: &mut MapWriter) -> Result<(), TreeError> {
    map.append(VALUE_KEY, value.to_cbor());
    Ok(())
}

pub fn deserialize<T: Primitive>(map: &MapReader<'_>) -> Result<T, TreeError> {
    let value = map.require(VALUE_KEY)?;
    T::from_cbor(value).ok_or_else(|| {
        SchemaValidationError::WrongValueKind {
            key: VALUE_KEY.to_string(),
            expected: std::any::type_name::<T>(),
        }.into()
    })
}

impl Primitive for bool {
    fn initialize() -> Self {
        false
    }

    fn from_cbor(value: &Value) -> Option<Self> {
        value.as_bool()
    }

    fn to_cbor(&self) -> Value {
        Value::Bool(*self)
    }
}

impl Primitive for char {
    fn initialize() -> Self {
        '\0'
    }

    fn from_cbor(value: &Value) -> Option<Self> {
        let mut chars = value.as_text()?.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    }

    fn to_cbor(&self) -> Value {
        Value::Text(self.to_string())
    }
}

impl Primitive for f64 {
    fn initialize() -> Self {
        0.0
    }

    fn from_cbor(value: &Value) -> Option<Self> {
        value.as_float()
    }

    fn to_cbor(&self) -> Value {
        Value::Float(*self)
    }
}

impl Primitive for i64 {
    fn initialize() -> Self {
        0
    }

    fn from_cbor(value: &Value) -> Option<Self> {
        value.as_integer().and_then(|i| i64::try_from(i).ok())
    }

    fn to_cbor(&self) -> Value {
        Value::Integer((*self).into())
    }
}

impl Primitive for u64 {
    fn initialize() -> Self {
        0
    }

    fn from_cbor(value: &Value) -> Option<Self> {
        value.as_integer().and_then(|i| u64::try_from(i).ok())
    }

    fn to_cbor(&self) -> Value {
        Value::Integer((*self).into())
    }
}

impl Primitive for String {
    fn initialize() -> Self {
        String::new()
    }

    fn from_cbor(value: &Value) -> Option<Self> {
        value.as_text().map(str::to_string)
    }

    fn to_cbor(&self) -> Value {
        Value::Text(self.clone())
    }
}

impl<T: Primitive> Primitive for Option<T> {
    fn initialize() -> Self {
        None
    }

    fn from_cbor(value: &Value) -> Option<Self> {
        if value.is_null() {
            Some(None)
        } else {
            T::from_cbor(value).map(Some)
        }
    }

    fn to_cbor(&self) -> Value {
        match self {
            Some(value) => value.to_cbor(),
            None => Value::Null,
        }
    }
}

impl<T: Primitive> Primitive for Vec<T> {
    fn initialize() -> Self {
        vec![]
    }

    fn from_cbor(value: &Value) -> Option<Self> {
        value.as_array()?.iter().map(T::from_cbor).collect()
    }

    fn to_cbor(&self) -> Value {
        Value::Array(self.iter().map(Primitive::to_cbor).collect())
    }
}
