use std::fmt;

use crate::json::{DecodeError, Node, Result};

/// One segment of a decoding location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
	/// String key into an object member.
	Key(Box<str>),
	/// Zero-based index into an array element.
	Index(usize),
}

impl PathSegment {
	/// Key segment from borrowed text.
	pub fn key(name: &str) -> Self {
		PathSegment::Key(name.into())
	}
}

impl fmt::Display for PathSegment {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			PathSegment::Key(name) => write!(f, "{name}"),
			PathSegment::Index(idx) => write!(f, "Index {idx}"),
		}
	}
}

/// Ordered segment list identifying a decode location. Diagnostics only: the
/// path never influences decoding decisions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodingPath(Vec<PathSegment>);

impl CodingPath {
	/// Empty path at the document root.
	pub fn root() -> Self {
		Self(Vec::new())
	}

	/// Segments in root-to-leaf order.
	pub fn segments(&self) -> &[PathSegment] {
		&self.0
	}

	pub(crate) fn from_segments(segments: Vec<PathSegment>) -> Self {
		Self(segments)
	}
}

impl fmt::Display for CodingPath {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.0.is_empty() {
			return write!(f, "<root>");
		}
		for (idx, segment) in self.0.iter().enumerate() {
			if idx > 0 {
				write!(f, ".")?;
			}
			write!(f, "{segment}")?;
		}
		Ok(())
	}
}

/// One parsed operation in a field path expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathStep {
	/// Select a named object member.
	Field(String),
	/// Select an array element by zero-based index.
	Index(usize),
}

/// Parsed field path expression.
#[derive(Debug, Clone)]
pub struct FieldPath {
	/// Ordered sequence of path steps.
	pub steps: Vec<PathStep>,
}

impl FieldPath {
	/// Parse dotted member syntax with optional `[index]` selectors.
	pub fn parse(input: &str) -> Result<Self> {
		if input.is_empty() {
			return Err(DecodeError::InvalidFieldPath { path: input.to_owned() });
		}

		let bytes = input.as_bytes();
		let mut idx = 0_usize;
		let mut steps = Vec::new();

		while idx < bytes.len() {
			let start = idx;
			while idx < bytes.len() {
				let byte = bytes[idx];
				if byte.is_ascii_alphanumeric() || byte == b'_' {
					idx += 1;
				} else {
					break;
				}
			}

			if idx == start {
				return Err(DecodeError::InvalidFieldPath { path: input.to_owned() });
			}

			steps.push(PathStep::Field(input[start..idx].to_owned()));

			while idx < bytes.len() && bytes[idx] == b'[' {
				idx += 1;
				let n_start = idx;
				while idx < bytes.len() && bytes[idx].is_ascii_digit() {
					idx += 1;
				}
				if idx == n_start || idx >= bytes.len() || bytes[idx] != b']' {
					return Err(DecodeError::InvalidFieldPath { path: input.to_owned() });
				}

				let number = input[n_start..idx]
					.parse::<usize>()
					.map_err(|_| DecodeError::InvalidFieldPath { path: input.to_owned() })?;
				steps.push(PathStep::Index(number));
				idx += 1;
			}

			if idx < bytes.len() {
				if bytes[idx] != b'.' {
					return Err(DecodeError::InvalidFieldPath { path: input.to_owned() });
				}
				idx += 1;
				if idx >= bytes.len() {
					return Err(DecodeError::InvalidFieldPath { path: input.to_owned() });
				}
			}
		}

		Ok(Self { steps })
	}

	/// Walk `root` following the parsed steps, reporting failures with the
	/// coding path accumulated up to the failing step.
	pub fn resolve<'a>(&self, root: &'a Node) -> Result<&'a Node> {
		let mut current = root;
		let mut trail: Vec<PathSegment> = Vec::new();

		for step in &self.steps {
			match step {
				PathStep::Field(name) => {
					if !matches!(current, Node::Object(_)) {
						return Err(DecodeError::TypeMismatch {
							path: CodingPath::from_segments(trail),
							expected: "object",
							actual: current.kind().name(),
						});
					}
					current = current.get(name).ok_or_else(|| DecodeError::KeyNotFound {
						path: CodingPath::from_segments(trail.clone()),
						key: name.as_str().into(),
					})?;
					trail.push(PathSegment::key(name));
				}
				PathStep::Index(idx) => {
					let Node::Array(items) = current else {
						return Err(DecodeError::TypeMismatch {
							path: CodingPath::from_segments(trail),
							expected: "array",
							actual: current.kind().name(),
						});
					};
					current = items.get(*idx).ok_or_else(|| DecodeError::ValueNotFound {
						path: CodingPath::from_segments(trail.clone()),
						expected: "element",
					})?;
					trail.push(PathSegment::Index(*idx));
				}
			}
		}

		Ok(current)
	}
}
