//! Decode/encode `CostDocument` as JSON or YAML.
//!
//! Errors carry the dotted path of the offending field, tracked through serde
//! with `serde_path_to_error`. Decoding is all-or-nothing.

pub mod error;
pub mod file;

use serde::de::IgnoredAny;
use serde_json::error::Category;
use std::path::Path;
use tracing::{debug, instrument, warn};

use crate::document::CostDocument;

pub use error::{DecodeError, DecodeErrorKind, EncodeError};
pub use file::{read_document, write_document};

use error::missing_field_name;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    /// `json`, `yaml` or `yml`, any case.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension().and_then(|s| s.to_str())?;
        if ext.eq_ignore_ascii_case("json") {
            Some(Format::Json)
        } else if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") {
            Some(Format::Yaml)
        } else {
            None
        }
    }
}

pub fn decode(text: &str, format: Format) -> Result<CostDocument, DecodeError> {
    match format {
        Format::Json => from_json_str(text),
        Format::Yaml => from_yaml_str(text),
    }
}

pub fn encode(doc: &CostDocument, format: Format) -> Result<String, EncodeError> {
    match format {
        Format::Json => to_json_string(doc),
        Format::Yaml => to_yaml_string(doc),
    }
}

#[instrument(level = "debug", skip(text), fields(len = text.len()))]
pub fn from_json_str(text: &str) -> Result<CostDocument, DecodeError> {
    let mut de = serde_json::Deserializer::from_str(text);
    let doc: CostDocument =
        serde_path_to_error::deserialize(&mut de).map_err(|e| json_error(with_path(e)))?;
    // trailing garbage after the document
    de.end().map_err(|e| json_error((".".into(), e)))?;
    log_decoded(&doc);
    Ok(doc)
}

#[instrument(level = "debug", skip(bytes), fields(len = bytes.len()))]
pub fn from_json_slice(bytes: &[u8]) -> Result<CostDocument, DecodeError> {
    let mut de = serde_json::Deserializer::from_slice(bytes);
    let doc: CostDocument =
        serde_path_to_error::deserialize(&mut de).map_err(|e| json_error(with_path(e)))?;
    de.end().map_err(|e| json_error((".".into(), e)))?;
    log_decoded(&doc);
    Ok(doc)
}

#[instrument(level = "debug", skip(text), fields(len = text.len()))]
pub fn from_yaml_str(text: &str) -> Result<CostDocument, DecodeError> {
    // serde_yaml scans lazily, so a scanner error can surface mid-tree with a
    // bogus path. Walk the whole document once first.
    if let Err(e) = serde_yaml::from_str::<IgnoredAny>(text) {
        let err = DecodeError::new(".".into(), DecodeErrorKind::Syntax, e.to_string());
        warn!(path = %err.path, kind = %err.kind, "YAML decode failed");
        return Err(err);
    }
    let de = serde_yaml::Deserializer::from_str(text);
    let doc: CostDocument = serde_path_to_error::deserialize(de).map_err(yaml_error)?;
    log_decoded(&doc);
    Ok(doc)
}

/// Pretty-printed, with a trailing newline.
#[instrument(level = "debug", skip_all)]
pub fn to_json_string(doc: &CostDocument) -> Result<String, EncodeError> {
    let mut buf = Vec::new();
    {
        let mut ser = serde_json::Serializer::pretty(&mut buf);
        serde_path_to_error::serialize(doc, &mut ser).map_err(encode_error)?;
    }
    buf.push(b'\n');
    let text = String::from_utf8(buf).map_err(|e| EncodeError {
        path: ".".into(),
        message: e.to_string(),
    })?;
    debug!(bytes = text.len(), "encoded document as JSON");
    Ok(text)
}

#[instrument(level = "debug", skip_all)]
pub fn to_yaml_string(doc: &CostDocument) -> Result<String, EncodeError> {
    let mut buf = Vec::new();
    {
        let mut ser = serde_yaml::Serializer::new(&mut buf);
        serde_path_to_error::serialize(doc, &mut ser).map_err(encode_error)?;
    }
    let text = String::from_utf8(buf).map_err(|e| EncodeError {
        path: ".".into(),
        message: e.to_string(),
    })?;
    debug!(bytes = text.len(), "encoded document as YAML");
    Ok(text)
}

fn log_decoded(doc: &CostDocument) {
    debug!(
        title = %doc.basic_info.title,
        components = doc.cost_components.len(),
        price_points = doc.wholesale_cost.price_chart.data_points.len(),
        levies = doc.government_charges.len(),
        "decoded document"
    );
}

fn with_path<E>(err: serde_path_to_error::Error<E>) -> (String, E) {
    (err.path().to_string(), err.into_inner())
}

fn json_error((path, inner): (String, serde_json::Error)) -> DecodeError {
    let message = inner.to_string();
    let kind = match inner.classify() {
        Category::Data if missing_field_name(&message).is_some() => DecodeErrorKind::MissingField,
        Category::Data => DecodeErrorKind::InvalidValue,
        Category::Syntax | Category::Eof | Category::Io => DecodeErrorKind::Syntax,
    };
    let err = DecodeError::new(path, kind, message);
    warn!(path = %err.path, kind = %err.kind, "JSON decode failed");
    err
}

/// Only called on well-formed YAML, so every error here is about the data.
fn yaml_error(err: serde_path_to_error::Error<serde_yaml::Error>) -> DecodeError {
    let (path, inner) = with_path(err);
    let message = inner.to_string();
    let kind = if missing_field_name(&message).is_some() {
        DecodeErrorKind::MissingField
    } else {
        DecodeErrorKind::InvalidValue
    };
    let err = DecodeError::new(path, kind, message);
    warn!(path = %err.path, kind = %err.kind, "YAML decode failed");
    err
}

fn encode_error<E: std::fmt::Display>(err: serde_path_to_error::Error<E>) -> EncodeError {
    let err = EncodeError {
        path: err.path().to_string(),
        message: err.inner().to_string(),
    };
    warn!(path = %err.path, "encode failed");
    err
}
