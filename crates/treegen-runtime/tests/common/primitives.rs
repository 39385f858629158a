use treegen_runtime::CborValue;
use treegen_runtime::primitives::Primitive;

/// Drive letter; new drives are `A:`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Letter(pub char);
impl Primitive for Letter {
    fn initialize() -> Self {
        Letter('A')
    }

    fn from_cbor(value: &CborValue) -> Option<Self> {
        char::from_cbor(value).map(Letter)
    }

    fn to_cbor(&self) -> CborValue {
        self.0.to_cbor()
    }
}

/// Source location annotation.
#[derive(Clone, Debug, PartialEq)]
pub struct Location {
    pub file: String,
    pub line: u64,
}
impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

pub fn register_location() {
    treegen_runtime::annotations::register_annotation::<Location>(
        Some("Location"),
        |loc| CborValue::Array(vec![
            CborValue::Text(loc.file.clone()),
            CborValue::Integer(loc.line.into()),
        ]),
        |value| {
            let [file, line] = value.as_array()?.as_slice() else {
                return None;
            };
            Some(Location {
                file: file.as_text()?.to_string(),
                line: line.as_integer().and_then(|i| u64::try_from(i).ok())?,
            })
        },
    );
}
