use crate::json::keyed::KeyedContainer;
use crate::json::number::{self, NumberError, NumberKind};
use crate::json::options::{DecodeOptions, UserInfo};
use crate::json::path::{CodingPath, PathSegment};
use crate::json::seq::SeqContainer;
use crate::json::single::SingleValue;
use crate::json::value::{Kind, Node};
use crate::json::{DecodeError, Result};

static NULL_NODE: Node = Node::Null;

/// Construction logic for one decodable type.
///
/// Implementations pull field and element values exclusively through the
/// container views handed out by the decoder.
pub trait Decode: Sized {
	/// Build a value from the decoder's current node.
	fn decode(decoder: &mut Decoder<'_>) -> Result<Self>;
}

/// Decoding engine for one top-level decode call: the stack of active nodes,
/// the coding path, and the immutable option snapshot.
///
/// The node stack and coding path move in lockstep: descending into a child
/// pushes one node and one path segment, returning pops both, on success and
/// failure alike. A `Decoder` is not reused across top-level calls.
#[derive(Debug)]
pub struct Decoder<'de> {
	stack: Vec<&'de Node>,
	path: Vec<PathSegment>,
	options: DecodeOptions,
}

impl<'de> Decoder<'de> {
	/// Engine rooted at `node`. The root push carries no path segment.
	pub fn new(node: &'de Node, options: DecodeOptions) -> Self {
		Self {
			stack: vec![node],
			path: Vec::new(),
			options,
		}
	}

	/// Option snapshot for the whole decode.
	pub fn options(&self) -> &DecodeOptions {
		&self.options
	}

	/// Caller metadata bag from the options.
	pub fn user_info(&self) -> &UserInfo {
		&self.options.user_info
	}

	/// Coding path at the current position.
	pub fn coding_path(&self) -> CodingPath {
		CodingPath::from_segments(self.path.clone())
	}

	/// Node currently being decoded.
	pub fn node(&self) -> &'de Node {
		self.stack.last().copied().unwrap_or(&NULL_NODE)
	}

	/// Keyed (object) view over the current node.
	pub fn keyed(&mut self) -> Result<KeyedContainer<'_, 'de>> {
		match self.node() {
			Node::Object(entries) => Ok(KeyedContainer::new(self, entries)),
			Node::Null => Err(self.value_not_found("keyed container")),
			other => Err(self.type_mismatch("keyed container", other.kind())),
		}
	}

	/// Sequential (array) view over the current node.
	pub fn seq(&mut self) -> Result<SeqContainer<'_, 'de>> {
		match self.node() {
			Node::Array(items) => Ok(SeqContainer::new(self, items)),
			Node::Null => Err(self.value_not_found("unkeyed container")),
			other => Err(self.type_mismatch("unkeyed container", other.kind())),
		}
	}

	/// Single-value view over the current node.
	pub fn single_value(&mut self) -> SingleValue<'_, 'de> {
		SingleValue::new(self)
	}

	/// Push `node` and its path segment, run `f`, pop both. The pop runs on
	/// every exit path so errors carry the full path while siblings decoded
	/// afterwards see the caller's original path.
	pub(crate) fn with_child<T>(&mut self, node: &'de Node, segment: PathSegment, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
		self.stack.push(node);
		self.path.push(segment);
		let out = f(self);
		self.path.pop();
		self.stack.pop();
		out
	}

	/// Fresh engine over `node` retaining the accumulated path plus one
	/// segment, sharing the option snapshot. Backs the super-decoder views.
	pub(crate) fn rescope(&self, node: &'de Node, segment: PathSegment) -> Decoder<'de> {
		let mut path = self.path.clone();
		path.push(segment);
		Decoder {
			stack: vec![node],
			path,
			options: self.options.clone(),
		}
	}

	pub(crate) fn key_not_found(&self, key: &str) -> DecodeError {
		DecodeError::KeyNotFound {
			path: self.coding_path(),
			key: key.into(),
		}
	}

	pub(crate) fn value_not_found(&self, expected: &'static str) -> DecodeError {
		DecodeError::ValueNotFound {
			path: self.coding_path(),
			expected,
		}
	}

	pub(crate) fn type_mismatch(&self, expected: &'static str, actual: Kind) -> DecodeError {
		DecodeError::TypeMismatch {
			path: self.coding_path(),
			expected,
			actual: actual.name(),
		}
	}

	pub(crate) fn data_corrupted(&self, detail: String) -> DecodeError {
		DecodeError::DataCorrupted {
			path: self.coding_path(),
			detail,
		}
	}

	pub(crate) fn is_null(&self) -> bool {
		self.node().is_null()
	}

	pub(crate) fn unbox_bool(&self) -> Result<bool> {
		match self.node() {
			Node::Null => Err(self.value_not_found("bool")),
			Node::Bool(value) => Ok(*value),
			other => Err(self.type_mismatch("bool", other.kind())),
		}
	}

	pub(crate) fn unbox_str(&self) -> Result<&'de str> {
		match self.node() {
			Node::Null => Err(self.value_not_found("string")),
			Node::String(value) => Ok(value),
			other => Err(self.type_mismatch("string", other.kind())),
		}
	}

	pub(crate) fn unbox_int(&self, kind: NumberKind) -> Result<i64> {
		match number::coerce_int(self.node(), kind) {
			Ok(Some(value)) => Ok(value),
			Ok(None) => Err(self.value_not_found(kind.name())),
			Err(NumberError::Mismatch { actual }) => Err(self.type_mismatch(kind.name(), actual)),
			Err(NumberError::OutOfRange { value }) => {
				Err(self.data_corrupted(format!("parsed number {value} does not fit in {}", kind.name())))
			}
			Err(NumberError::Overflow { value }) => Err(self.data_corrupted(format!("parsed number {value} overflows {}", kind.name()))),
		}
	}

	pub(crate) fn unbox_float(&self, kind: NumberKind) -> Result<f64> {
		match number::coerce_float(self.node(), kind, &self.options.float_policy) {
			Ok(Some(value)) => Ok(value),
			Ok(None) => Err(self.value_not_found(kind.name())),
			Err(NumberError::Mismatch { actual }) => Err(self.type_mismatch(kind.name(), actual)),
			Err(NumberError::OutOfRange { value }) => {
				Err(self.data_corrupted(format!("parsed number {value} does not fit in {}", kind.name())))
			}
			Err(NumberError::Overflow { value }) => Err(self.data_corrupted(format!("parsed number {value} overflows {}", kind.name()))),
		}
	}
}

/// Decode `T` from raw JSON bytes with default options.
pub fn from_slice<T: Decode>(bytes: &[u8]) -> Result<T> {
	DecodeOptions::default().decode_slice(bytes)
}

/// Decode `T` from an already-parsed node with default options.
pub fn from_node<T: Decode>(node: &Node) -> Result<T> {
	DecodeOptions::default().decode_node(node)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn path_unwinds_after_failed_child() {
		let tree = Node::Object(vec![("bad".into(), Node::String("x".into())), ("good".into(), Node::Int(7))]);
		let mut decoder = Decoder::new(&tree, DecodeOptions::default());

		let mut keyed = decoder.keyed().expect("object view");
		let err = keyed.decode::<i64>("bad").unwrap_err();
		assert_eq!(err.coding_path().to_string(), "bad");

		// A sibling decoded after the failure sees the original path.
		let value = keyed.decode::<i64>("good").expect("sibling decodes");
		assert_eq!(value, 7);
		assert!(decoder.coding_path().segments().is_empty());
	}

	#[test]
	fn container_over_wrong_kind_is_type_mismatch() {
		let tree = Node::Array(vec![Node::Int(1)]);
		let mut decoder = Decoder::new(&tree, DecodeOptions::default());
		match decoder.keyed().unwrap_err() {
			DecodeError::TypeMismatch { expected, actual, .. } => {
				assert_eq!(expected, "keyed container");
				assert_eq!(actual, "array");
			}
			other => panic!("expected TypeMismatch, got {other:?}"),
		}

		let tree = Node::Object(vec![]);
		let mut decoder = Decoder::new(&tree, DecodeOptions::default());
		match decoder.seq().unwrap_err() {
			DecodeError::TypeMismatch { expected, actual, .. } => {
				assert_eq!(expected, "unkeyed container");
				assert_eq!(actual, "object");
			}
			other => panic!("expected TypeMismatch, got {other:?}"),
		}
	}

	#[test]
	fn null_root_container_is_value_not_found() {
		let tree = Node::Null;
		let mut decoder = Decoder::new(&tree, DecodeOptions::default());
		assert!(matches!(decoder.keyed().unwrap_err(), DecodeError::ValueNotFound { .. }));
		assert!(matches!(decoder.seq().unwrap_err(), DecodeError::ValueNotFound { .. }));
	}
}
