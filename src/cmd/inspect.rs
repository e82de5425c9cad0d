use std::fs;
use std::path::PathBuf;

use treedec::json::{AllocationStrategy, Node, Result, parse};

/// Per-kind node counts and nesting depth for one document.
#[derive(Debug, Default, serde::Serialize)]
struct Census {
	nulls: u64,
	bools: u64,
	integers: u64,
	doubles: u64,
	strings: u64,
	arrays: u64,
	objects: u64,
	max_depth: usize,
}

/// Print a node census for a JSON file.
pub fn run(file: PathBuf, json: bool) -> Result<()> {
	let bytes = fs::read(&file)?;
	let document = parse(&bytes, AllocationStrategy::Single)?;

	let mut census = Census::default();
	walk(document.root(), 1, &mut census);

	if json {
		println!("{}", serde_json::json!(census));
		return Ok(());
	}

	println!("path: {}", file.display());
	println!("root: {}", document.root().kind().name());
	println!("max_depth: {}", census.max_depth);
	println!("nulls: {}", census.nulls);
	println!("bools: {}", census.bools);
	println!("integers: {}", census.integers);
	println!("doubles: {}", census.doubles);
	println!("strings: {}", census.strings);
	println!("arrays: {}", census.arrays);
	println!("objects: {}", census.objects);
	Ok(())
}

fn walk(node: &Node, depth: usize, census: &mut Census) {
	census.max_depth = census.max_depth.max(depth);
	match node {
		Node::Null => census.nulls += 1,
		Node::Bool(_) => census.bools += 1,
		Node::Int(_) => census.integers += 1,
		Node::Double(_) => census.doubles += 1,
		Node::String(_) => census.strings += 1,
		Node::Array(items) => {
			census.arrays += 1;
			for item in items {
				walk(item, depth + 1, census);
			}
		}
		Node::Object(entries) => {
			census.objects += 1;
			for (_, value) in entries {
				walk(value, depth + 1, census);
			}
		}
	}
}
