//! Schema for a UK household electricity-cost explainer: article metadata,
//! the top-level cost breakdown, wholesale price history, network charges
//! (TNUoS, DUoS and the rest) and government levies.
//!
//! The types in [`document`] are plain data. [`codec`] moves them to and
//! from JSON or YAML and reports decode failures with the field path.

pub mod codec;
pub mod document;

pub use codec::{
    decode, encode, read_document, write_document, DecodeError, DecodeErrorKind, EncodeError,
    Format,
};
pub use document::CostDocument;
