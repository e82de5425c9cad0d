use thiserror::Error;

use crate::json::path::CodingPath;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, DecodeError>;

/// Errors produced while parsing, decoding, and querying JSON value trees.
///
/// The four decode kinds each carry the coding path captured at the exact
/// point of detection; they propagate unchanged through every container and
/// engine frame.
#[derive(Debug, Error)]
pub enum DecodeError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Keyed lookup found no entry for the requested key.
	#[error("key not found at {path}: no entry for {key:?}")]
	KeyNotFound {
		/// Path at the point of lookup, excluding the missing key.
		path: CodingPath,
		/// Requested key.
		key: Box<str>,
	},
	/// Entry exists but is semantically absent: JSON null where a non-null
	/// value was required, or a sequential container exhausted.
	#[error("value not found at {path}: expected {expected}")]
	ValueNotFound {
		/// Path at the point of detection.
		path: CodingPath,
		/// Requested shape or type label.
		expected: &'static str,
	},
	/// Entry exists and is non-null but its node kind is wrong for the
	/// requested shape.
	#[error("type mismatch at {path}: expected {expected}, got {actual}")]
	TypeMismatch {
		/// Path at the point of detection.
		path: CodingPath,
		/// Requested shape or type label.
		expected: &'static str,
		/// Actual node kind label.
		actual: &'static str,
	},
	/// Right shape, unconvertible value: numeric overflow, malformed base64,
	/// malformed date or identifier text, or a rejected raw input.
	#[error("data corrupted at {path}: {detail}")]
	DataCorrupted {
		/// Path at the point of detection.
		path: CodingPath,
		/// Human-readable failure description.
		detail: String,
	},
	/// Field path query expression syntax is invalid.
	#[error("invalid field path: {path}")]
	InvalidFieldPath {
		/// Original user-provided path expression.
		path: String,
	},
}

impl DecodeError {
	/// Coding path carried by the decode kinds; empty for plumbing errors.
	pub fn coding_path(&self) -> CodingPath {
		match self {
			DecodeError::KeyNotFound { path, .. }
			| DecodeError::ValueNotFound { path, .. }
			| DecodeError::TypeMismatch { path, .. }
			| DecodeError::DataCorrupted { path, .. } => path.clone(),
			DecodeError::Io(_) | DecodeError::InvalidFieldPath { .. } => CodingPath::root(),
		}
	}
}
