use crate::SchemaValidationError;
use crate::TreeError;
use ciborium::Value;

type Result<T> = std::result::Result<T, SchemaValidationError>;

/// Builds a CBOR map with text keys, preserving insertion order.
#[derive(Debug, Default)]
pub struct MapWriter {
    entries: Vec<(Value, Value)>,
}
impl MapWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, key: &str, value: Value) {
        self.entries.push((Value::Text(key.to_string()), value));
    }

    pub fn append_null(&mut self, key: &str) {
        self.append(key, Value::Null);
    }

    pub fn append_text(&mut self, key: &str, value: &str) {
        self.append(key, Value::Text(value.to_string()));
    }

    pub fn append_uint(&mut self, key: &str, value: u64) {
        self.append(key, Value::Integer(value.into()));
    }

    /// Moves every entry of `other` into this map.
    pub fn extend(&mut self, other: MapWriter) {
        self.entries.extend(other.entries);
    }

    pub fn into_value(self) -> Value {
        Value::Map(self.entries)
    }
}

/// Read access to a CBOR map with text keys.
#[derive(Clone, Copy, Debug)]
pub struct MapReader<'a> {
    entries: &'a [(Value, Value)],
}
impl<'a> MapReader<'a> {
    /// `name` identifies the value in error messages.
    pub fn new(value: &'a Value, name: &str) -> Result<Self> {
        match value.as_map() {
            Some(entries) => Ok(Self { entries }),
            None => Err(SchemaValidationError::WrongValueKind {
                key: name.to_string(),
                expected: "map",
            }),
        }
    }

    pub fn array(&self, key: &str) -> Result<&'a [Value]> {
        self.require(key)?
            .as_array()
            .map(Vec::as_slice)
            .ok_or_else(|| wrong_kind(key, "array"))
    }

    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.entries
            .iter()
            .find(|(k, _)| k.as_text() == Some(key))
            .map(|(_, v)| v)
    }

    pub fn is_null(&self, key: &str) -> Result<bool> {
        Ok(self.require(key)?.is_null())
    }

    /// Every entry with a text key, in encoded order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a Value)> + 'a {
        self.entries
            .iter()
            .filter_map(|(k, v)| k.as_text().map(|k| (k, v)))
    }

    pub fn map(&self, key: &str) -> Result<MapReader<'a>> {
        MapReader::new(self.require(key)?, key)
    }

    pub fn require(&self, key: &str) -> Result<&'a Value> {
        self.get(key).ok_or_else(|| SchemaValidationError::MissingKey {
            key: key.to_string(),
        })
    }

    pub fn text(&self, key: &str) -> Result<&'a str> {
        self.require(key)?
            .as_text()
            .ok_or_else(|| wrong_kind(key, "string"))
    }

    pub fn uint(&self, key: &str) -> Result<u64> {
        self.require(key)?
            .as_integer()
            .and_then(|i| u64::try_from(i).ok())
            .ok_or_else(|| wrong_kind(key, "unsigned integer"))
    }
}

fn wrong_kind(key: &str, expected: &'static str) -> SchemaValidationError {
    SchemaValidationError::WrongValueKind {
        key: key.to_string(),
        expected,
    }
}

/// Nesting is bounded by the stack only. Every tree level takes about three
/// CBOR levels, so ciborium's default limit would reject trees that
/// `encode` happily writes.
pub(crate) fn decode(bytes: &[u8]) -> std::result::Result<Value, TreeError> {
    ciborium::de::from_reader_with_recursion_limit(bytes, usize::MAX)
        .map_err(|err| TreeError::Decode(format!("{err:?}")))
}

pub(crate) fn encode(value: &Value) -> std::result::Result<Vec<u8>, TreeError> {
    let mut bytes = vec![];
    ciborium::ser::into_writer(value, &mut bytes)
        .map_err(|err| TreeError::Encode(format!("{err:?}")))?;
    Ok(bytes)
}
