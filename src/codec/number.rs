//! Float fields that write whole numbers as integers
//!
//! Counts and usage figures are floats in the schema but usually arrive as
//! integers. A finite, integral value inside the `i64` range is written back
//! without a fractional part, so `12` stays `12` rather than becoming `12.0`.

use serde::Serializer;

fn serialize_f64<S: Serializer>(value: f64, serializer: S) -> Result<S::Ok, S::Error> {
    // i64::MAX as f64 rounds up to 2^63, hence the strict upper bound
    if value.is_finite()
        && value.fract() == 0.0
        && value >= i64::MIN as f64
        && value < i64::MAX as f64
    {
        serializer.serialize_i64(value as i64)
    } else {
        serializer.serialize_f64(value)
    }
}

/// Serde helpers for `Option<f64>` fields
pub mod option {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(v) => super::serialize_f64(*v, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<f64>::deserialize(deserializer)
    }
}

/// Serde helpers for `Nullable<f64>` fields
pub mod nullable {
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::nullable::Nullable;

    pub fn serialize<S>(value: &Nullable<f64>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Nullable::Value(v) => super::serialize_f64(*v, serializer),
            Nullable::Absent | Nullable::Null => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Nullable<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Nullable::<f64>::deserialize(deserializer)
    }
}
