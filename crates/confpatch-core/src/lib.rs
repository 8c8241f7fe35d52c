//! # confpatch-core
//!
//! Path-addressed mutation of JSON documents.
//!
//! Given a document as text, a path such as `servers[0].port`, and a new value
//! as free text, [`mutate_document`] finds the addressed position, infers the
//! type of the new value, stores it, and returns the whole document
//! re-serialized in canonical pretty-printed form. The engine does no I/O:
//! callers read the document before the call and persist the returned text
//! after it.
//!
//! ## Quick start
//!
//! ```rust
//! use confpatch_core::mutate_document;
//!
//! let doc = r#"{"server":{"host":"localhost","port":80}}"#;
//! let out = mutate_document(doc, "server.port", "8080").unwrap();
//! assert_eq!(out, "{\n  \"server\": {\n    \"host\": \"localhost\",\n    \"port\": 8080\n  }\n}");
//! ```
//!
//! ## Modules
//!
//! - [`path`] — path text → [`PathExpr`]
//! - [`document`] — document parsing and canonical serialization
//! - [`navigate`] — locate the container a path's final segment applies to
//! - [`coerce`](mod@coerce) — free text → typed value
//! - [`mutate`] — apply a value to a located target; the full pipeline
//! - [`error`] — [`PatchError`] and its [`ErrorKind`] tags

pub mod coerce;
pub mod document;
pub mod error;
pub mod mutate;
pub mod navigate;
pub mod path;

pub use coerce::coerce;
pub use document::{canonicalize, parse_document, serialize, validate};
pub use error::{ErrorKind, PatchError};
pub use mutate::{apply, mutate_document};
pub use navigate::{resolve, Target};
pub use path::{parse_path, PathExpr, Segment};
