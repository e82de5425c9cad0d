use std::fs;
use std::path::PathBuf;

use treedec::json::{AllocationStrategy, Result, parse};

/// Parse a JSON file and report the root node kind.
pub fn run(file: PathBuf) -> Result<()> {
	let bytes = fs::read(&file)?;
	let document = parse(&bytes, AllocationStrategy::Dynamic)?;

	println!("path: {}", file.display());
	println!("bytes: {}", bytes.len());
	println!("root: {}", document.root().kind().name());
	Ok(())
}
