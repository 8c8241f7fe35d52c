//! Error types for document mutation.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Errors that can occur while patching a JSON document.
///
/// Path-related variants carry the original path text and the zero-based
/// position of the segment that failed, so callers can point at it.
#[derive(Error, Debug)]
pub enum PatchError {
    /// The input document was not valid JSON.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The path text is malformed, or its final segment cannot be applied to
    /// the container it resolved to.
    #[error("invalid path '{path}': {reason}")]
    InvalidPath {
        path: String,
        segment: Option<usize>,
        reason: String,
    },

    /// An intermediate (or indexed final) segment names a property that does
    /// not exist.
    #[error("path segment '{name}' not found in '{path}'")]
    PathNotFound {
        path: String,
        segment: usize,
        name: String,
    },

    /// A segment expected an object or array but found another kind of value.
    #[error("type mismatch at segment {segment} of '{path}': expected {expected}, found {found}")]
    TypeMismatch {
        path: String,
        segment: usize,
        expected: &'static str,
        found: &'static str,
    },

    /// An array index is not below the current array length.
    #[error("index {index} out of range (len: {len}) at segment {segment} of '{path}'")]
    IndexOutOfRange {
        path: String,
        segment: usize,
        index: usize,
        len: usize,
    },

    /// The mutated tree could not be rendered back to text.
    #[error("JSON serialization error: {0}")]
    Serialize(serde_json::Error),
}

/// Tag identifying which class of [`PatchError`] occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Parse,
    InvalidPath,
    PathNotFound,
    TypeMismatch,
    IndexOutOfRange,
    Serialize,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Parse => "parse",
            ErrorKind::InvalidPath => "invalid_path",
            ErrorKind::PathNotFound => "path_not_found",
            ErrorKind::TypeMismatch => "type_mismatch",
            ErrorKind::IndexOutOfRange => "index_out_of_range",
            ErrorKind::Serialize => "serialize",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PatchError {
    /// The class of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            PatchError::Parse(_) => ErrorKind::Parse,
            PatchError::InvalidPath { .. } => ErrorKind::InvalidPath,
            PatchError::PathNotFound { .. } => ErrorKind::PathNotFound,
            PatchError::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            PatchError::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
            PatchError::Serialize(_) => ErrorKind::Serialize,
        }
    }

    /// The path text the error refers to, if the error concerns a path.
    pub fn path(&self) -> Option<&str> {
        match self {
            PatchError::InvalidPath { path, .. }
            | PatchError::PathNotFound { path, .. }
            | PatchError::TypeMismatch { path, .. }
            | PatchError::IndexOutOfRange { path, .. } => Some(path),
            PatchError::Parse(_) | PatchError::Serialize(_) => None,
        }
    }

    /// Zero-based position of the failing segment, where determinable.
    pub fn segment(&self) -> Option<usize> {
        match self {
            PatchError::InvalidPath { segment, .. } => *segment,
            PatchError::PathNotFound { segment, .. }
            | PatchError::TypeMismatch { segment, .. }
            | PatchError::IndexOutOfRange { segment, .. } => Some(*segment),
            PatchError::Parse(_) | PatchError::Serialize(_) => None,
        }
    }
}

/// Convenience alias used throughout confpatch-core.
pub type Result<T> = std::result::Result<T, PatchError>;
