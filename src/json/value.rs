/// Discriminant kind of a parsed tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
	/// JSON `null`.
	Null,
	/// JSON `true` / `false`.
	Bool,
	/// Whole number representable as `i64`.
	Integer,
	/// Any other JSON number.
	Double,
	/// UTF-8 string.
	String,
	/// Ordered element sequence.
	Array,
	/// Keyed member mapping.
	Object,
}

impl Kind {
	/// Stable label used in diagnostics.
	pub fn name(self) -> &'static str {
		match self {
			Kind::Null => "null",
			Kind::Bool => "bool",
			Kind::Integer => "integer",
			Kind::Double => "double",
			Kind::String => "string",
			Kind::Array => "array",
			Kind::Object => "object",
		}
	}
}

/// One immutable node of the parsed value tree, exactly one payload per kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
	/// JSON `null`.
	Null,
	/// JSON boolean.
	Bool(bool),
	/// Whole number stored as a 64-bit signed integer.
	Int(i64),
	/// Floating-point number.
	Double(f64),
	/// UTF-8 string payload.
	String(Box<str>),
	/// Ordered child nodes.
	Array(Vec<Node>),
	/// Members sorted by key, keys unique.
	Object(Vec<(Box<str>, Node)>),
}

impl Node {
	/// Discriminant of this node.
	pub fn kind(&self) -> Kind {
		match self {
			Node::Null => Kind::Null,
			Node::Bool(_) => Kind::Bool,
			Node::Int(_) => Kind::Integer,
			Node::Double(_) => Kind::Double,
			Node::String(_) => Kind::String,
			Node::Array(_) => Kind::Array,
			Node::Object(_) => Kind::Object,
		}
	}

	/// Whether this node is JSON `null`.
	pub fn is_null(&self) -> bool {
		matches!(self, Node::Null)
	}

	/// Look up an object member by key; `None` for absent keys or non-objects.
	pub fn get(&self, key: &str) -> Option<&Node> {
		let Node::Object(entries) = self else {
			return None;
		};
		entries
			.binary_search_by(|(name, _)| name.as_ref().cmp(key))
			.ok()
			.map(|idx| &entries[idx].1)
	}

	/// Convert into a `serde_json` value for display plumbing.
	pub fn to_json(&self) -> serde_json::Value {
		match self {
			Node::Null => serde_json::Value::Null,
			Node::Bool(value) => serde_json::Value::Bool(*value),
			Node::Int(value) => serde_json::Value::from(*value),
			Node::Double(value) => serde_json::Value::from(*value),
			Node::String(value) => serde_json::Value::String(value.to_string()),
			Node::Array(items) => serde_json::Value::Array(items.iter().map(Node::to_json).collect()),
			Node::Object(entries) => {
				let mut map = serde_json::Map::with_capacity(entries.len());
				for (key, value) in entries {
					map.insert(key.to_string(), value.to_json());
				}
				serde_json::Value::Object(map)
			}
		}
	}
}
