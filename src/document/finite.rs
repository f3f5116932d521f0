// src/document/finite.rs

//! `#[serde(with = "finite")]` for `f64` fields.
//!
//! `serde_json` writes `NaN` and infinities as `null`, which would turn a bad
//! in-memory value into a different, well-formed document. Both directions
//! reject non-finite numbers instead.

use serde::{de, ser, Deserialize, Deserializer, Serializer};

pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if !value.is_finite() {
        return Err(ser::Error::custom(format!(
            "non-finite number {} cannot be encoded",
            value
        )));
    }
    serializer.serialize_f64(*value)
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    if !value.is_finite() {
        return Err(de::Error::custom(format!(
            "malformed number {}: expected a finite value",
            value
        )));
    }
    Ok(value)
}
