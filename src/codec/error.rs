// src/codec/error.rs

use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeErrorKind {
    /// Input is not well-formed JSON/YAML.
    Syntax,
    /// A required field is absent.
    MissingField,
    /// Wrong type, malformed number or out-of-range month.
    InvalidValue,
}

impl fmt::Display for DecodeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DecodeErrorKind::Syntax => "syntax error",
            DecodeErrorKind::MissingField => "missing field",
            DecodeErrorKind::InvalidValue => "invalid value",
        })
    }
}

/// Input text does not match the document shape.
///
/// `path` is the dotted field path, e.g. `basic_info.title` or
/// `wholesale_cost.price_chart.data_points[0].month`; `.` is the document root.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at `{path}`: {message}")]
pub struct DecodeError {
    pub path: String,
    pub kind: DecodeErrorKind,
    pub message: String,
}

impl DecodeError {
    pub(crate) fn new(path: String, kind: DecodeErrorKind, message: String) -> Self {
        // Missing fields are reported by the enclosing struct; point at the field itself.
        let path = match (kind, missing_field_name(&message)) {
            (DecodeErrorKind::MissingField, Some(field)) if path == "." => field.to_string(),
            (DecodeErrorKind::MissingField, Some(field)) => format!("{}.{}", path, field),
            _ => path,
        };
        Self {
            path,
            kind,
            message,
        }
    }
}

/// A value in the tree cannot be written out (e.g. a `NaN` percentage).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot encode `{path}`: {message}")]
pub struct EncodeError {
    pub path: String,
    pub message: String,
}

/// Pulls `title` out of serde's "missing field `title`" message.
pub(crate) fn missing_field_name(message: &str) -> Option<&str> {
    let (_, rest) = message.split_once("missing field `")?;
    rest.split_once('`').map(|(field, _)| field)
}
