use std::fs;
use std::path::PathBuf;

use treedec::json::{AllocationStrategy, FieldPath, Result, parse};

/// Resolve a field path expression in a JSON file and print the value.
pub fn run(file: PathBuf, expr: String) -> Result<()> {
	let bytes = fs::read(&file)?;
	let document = parse(&bytes, AllocationStrategy::Dynamic)?;

	let path = FieldPath::parse(&expr)?;
	let node = path.resolve(document.root())?;

	println!("{:#}", node.to_json());
	Ok(())
}
