//! Record codec shared by every wire model
//!
//! A decoded payload is either fully typed or kept as the raw JSON object it
//! arrived as. The downgrade to raw is how the codec stays forward compatible:
//! an enum value added server-side, or a nested object that no longer fits its
//! typed shape, never turns into an error for the caller.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::DecodeError;

pub mod datetime;
pub mod number;
mod required;

pub use required::{RequiredField, WireKind, json_kind};

/// A typed wire model.
///
/// Implementors are plain serde structs whose strict `Deserialize` fails on any
/// value the typed shape cannot hold (including unknown enum values), and whose
/// unrecognised keys land in a flattened `additional_properties` map.
pub trait WireModel: Serialize + DeserializeOwned {
    /// Model name used in logs and by the CLI.
    const NAME: &'static str;

    /// Fields that must be present and non-null for decoding to proceed at all.
    const REQUIRED: &'static [RequiredField] = &[];

    /// Keys received on the wire that have no named field.
    fn additional_properties(&self) -> &Map<String, Value>;
}

/// A model in either its typed or its raw form.
#[derive(Debug, Clone, PartialEq)]
pub enum Record<T> {
    /// Every key fit the typed shape.
    Typed(T),
    /// The payload could not be typed; it is carried verbatim.
    Raw(Map<String, Value>),
}

impl<T: WireModel> Record<T> {
    /// Decode a record from an already-parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self, DecodeError> {
        let value = match value {
            Value::Object(map) => {
                required::check(T::REQUIRED, &map)?;
                Value::Object(map)
            }
            other => return Err(DecodeError::NotAnObject(json_kind(&other))),
        };

        let err = match T::deserialize(&value) {
            Ok(model) => {
                log::trace!("{} decoded into typed form", T::NAME);
                return Ok(Record::Typed(model));
            }
            Err(err) => err,
        };

        log::debug!("{} kept in raw form: {}", T::NAME, err);
        match value {
            Value::Object(map) => Ok(Record::Raw(map)),
            other => Err(DecodeError::NotAnObject(json_kind(&other))),
        }
    }

    /// Render the record as a JSON value.
    ///
    /// Named fields come first in declaration order, then additional
    /// properties. An additional property sharing a key with a named field
    /// replaces that field's value in place.
    pub fn to_value(&self) -> serde_json::Result<Value> {
        match self {
            Record::Typed(model) => serde_json::to_value(model),
            Record::Raw(map) => Ok(Value::Object(map.clone())),
        }
    }

    /// Wire keys this record would emit, in output order.
    pub fn present_keys(&self) -> Vec<String> {
        match self {
            Record::Raw(map) => map.keys().cloned().collect(),
            Record::Typed(_) => match self.to_value() {
                Ok(Value::Object(map)) => map.keys().cloned().collect(),
                _ => Vec::new(),
            },
        }
    }
}

impl<T> Record<T> {
    pub fn is_typed(&self) -> bool {
        matches!(self, Record::Typed(_))
    }

    pub fn is_raw(&self) -> bool {
        matches!(self, Record::Raw(_))
    }

    /// The typed model, or `None` once the record has fallen back to raw.
    pub fn typed(&self) -> Option<&T> {
        match self {
            Record::Typed(model) => Some(model),
            Record::Raw(_) => None,
        }
    }

    pub fn typed_mut(&mut self) -> Option<&mut T> {
        match self {
            Record::Typed(model) => Some(model),
            Record::Raw(_) => None,
        }
    }

    pub fn into_typed(self) -> Option<T> {
        match self {
            Record::Typed(model) => Some(model),
            Record::Raw(_) => None,
        }
    }

    /// The raw object, when decoding fell back.
    pub fn raw(&self) -> Option<&Map<String, Value>> {
        match self {
            Record::Typed(_) => None,
            Record::Raw(map) => Some(map),
        }
    }
}

impl<T> From<T> for Record<T> {
    fn from(model: T) -> Self {
        Record::Typed(model)
    }
}

impl<T: WireModel> Serialize for Record<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value()
            .map_err(serde::ser::Error::custom)?
            .serialize(serializer)
    }
}

impl<'de, T: WireModel> Deserialize<'de> for Record<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Record::from_value(value).map_err(serde::de::Error::custom)
    }
}

/// Decode a record from JSON bytes.
pub fn decode<T: WireModel>(bytes: &[u8]) -> Result<Record<T>, DecodeError> {
    let value: Value = serde_json::from_slice(bytes)?;
    Record::from_value(value)
}

/// Decode a record from a JSON string.
pub fn decode_str<T: WireModel>(input: &str) -> Result<Record<T>, DecodeError> {
    decode(input.as_bytes())
}

/// Encode a record to JSON bytes.
pub fn encode<T: WireModel>(record: &Record<T>) -> serde_json::Result<Vec<u8>> {
    serde_json::to_vec(&record.to_value()?)
}

/// Encode a record to a JSON string, optionally pretty-printed.
pub fn encode_string<T: WireModel>(record: &Record<T>, pretty: bool) -> serde_json::Result<String> {
    let value = record.to_value()?;
    if pretty {
        serde_json::to_string_pretty(&value)
    } else {
        serde_json::to_string(&value)
    }
}
