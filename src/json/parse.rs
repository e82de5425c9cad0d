use crate::json::path::CodingPath;
use crate::json::value::Node;
use crate::json::{DecodeError, Result};

/// Allocation behavior of the tree conversion pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AllocationStrategy {
	/// Pre-reserve converted containers at their exact final length.
	Single,
	/// Grow converted containers incrementally.
	#[default]
	Dynamic,
}

/// Owned parse result holding the root of the immutable value tree.
#[derive(Debug, Clone)]
pub struct Document {
	root: Node,
}

impl Document {
	/// Root node of the parsed input.
	pub fn root(&self) -> &Node {
		&self.root
	}
}

/// Parse raw JSON bytes into an immutable value tree.
///
/// Tokenizing and parsing are delegated to `serde_json`; a parse failure is
/// reported as `DataCorrupted` at the root coding path.
pub fn parse(bytes: &[u8], allocation: AllocationStrategy) -> Result<Document> {
	let raw: serde_json::Value = serde_json::from_slice(bytes).map_err(|err| DecodeError::DataCorrupted {
		path: CodingPath::root(),
		detail: format!("invalid JSON input: {err}"),
	})?;

	Ok(Document {
		root: convert(raw, allocation),
	})
}

// Numbers representable as i64 become Integer nodes; everything else the
// parser accepts (floats, u64 above i64::MAX) becomes Double.
fn convert(raw: serde_json::Value, allocation: AllocationStrategy) -> Node {
	match raw {
		serde_json::Value::Null => Node::Null,
		serde_json::Value::Bool(value) => Node::Bool(value),
		serde_json::Value::Number(number) => match number.as_i64() {
			Some(value) => Node::Int(value),
			None => number.as_f64().map_or(Node::Null, Node::Double),
		},
		serde_json::Value::String(value) => Node::String(value.into_boxed_str()),
		serde_json::Value::Array(items) => {
			let mut out = match allocation {
				AllocationStrategy::Single => Vec::with_capacity(items.len()),
				AllocationStrategy::Dynamic => Vec::new(),
			};
			for item in items {
				out.push(convert(item, allocation));
			}
			Node::Array(out)
		}
		serde_json::Value::Object(map) => {
			let mut entries = match allocation {
				AllocationStrategy::Single => Vec::with_capacity(map.len()),
				AllocationStrategy::Dynamic => Vec::new(),
			};
			for (key, value) in map {
				entries.push((key.into_boxed_str(), convert(value, allocation)));
			}
			entries.sort_unstable_by(|left, right| left.0.cmp(&right.0));
			Node::Object(entries)
		}
	}
}
