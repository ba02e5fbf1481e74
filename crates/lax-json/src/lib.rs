//! # lax-json
//!
//! A small, lenient JSON decoder. One call turns a JSON document into an
//! owned, dynamically-typed [`Value`] tree, or returns a single descriptive
//! [`ParseError`] — no streaming, no callbacks, no partial results.
//!
//! "Lenient" is a contract, not an accident: separators between object
//! members and array elements are optional (missing and trailing commas both
//! parse), while the number and escape grammars are narrower than RFC 8259
//! (no negative numbers, no exponents, no `\u` escapes) and the document
//! root must be an object or an array. See [`decoder`] for the pinned
//! dialect.
//!
//! ## Quick start
//!
//! ```rust
//! use lax_json::{decode, Value};
//!
//! let doc = decode(r#"{"name":"Alice","scores":[95,87,92],"ratio":0.75,}"#).unwrap();
//! assert_eq!(doc.get("name").and_then(Value::as_str), Some("Alice"));
//! assert_eq!(doc.get("ratio"), Some(&Value::Float(0.75)));
//! // Note the tolerated trailing comma.
//! ```
//!
//! ## Modules
//!
//! - [`decoder`] — JSON text → [`Value`] tree (`decode`, `decode_with_options`)
//! - [`error`] — [`ParseError`] taxonomy for decode failures
//! - [`types`] — the [`Value`] sum type, accessors, serde_json interop

pub mod decoder;
pub mod error;
pub mod types;

pub use decoder::{decode, decode_with_options, DecodeOptions, DEFAULT_MAX_DEPTH};
pub use error::ParseError;
pub use types::Value;
