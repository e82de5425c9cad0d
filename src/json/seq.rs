use crate::json::Result;
use crate::json::decoder::{Decode, Decoder};
use crate::json::keyed::KeyedContainer;
use crate::json::path::PathSegment;
use crate::json::value::Node;

/// Ordered cursor-style view over an array node.
///
/// The cursor starts at zero and advances by exactly one per successful
/// decode; a failed decode leaves it in place so the caller can recover.
#[derive(Debug)]
pub struct SeqContainer<'a, 'de> {
	decoder: &'a mut Decoder<'de>,
	items: &'de [Node],
	cursor: usize,
}

impl<'a, 'de> SeqContainer<'a, 'de> {
	pub(crate) fn new(decoder: &'a mut Decoder<'de>, items: &'de [Node]) -> Self {
		Self {
			decoder,
			items,
			cursor: 0,
		}
	}

	/// Total number of elements.
	pub fn count(&self) -> usize {
		self.items.len()
	}

	/// Elements consumed so far.
	pub fn cursor(&self) -> usize {
		self.cursor
	}

	/// Whether the cursor has consumed every element.
	pub fn is_at_end(&self) -> bool {
		self.cursor >= self.items.len()
	}

	fn peek(&self, expected: &'static str) -> Result<&'de Node> {
		self.items.get(self.cursor).ok_or_else(|| self.decoder.value_not_found(expected))
	}

	/// Decode the next element as `T`, advancing the cursor only on success.
	pub fn decode_next<T: Decode>(&mut self) -> Result<T> {
		let node = self.peek("element")?;
		let value = self.decoder.with_child(node, PathSegment::Index(self.cursor), T::decode)?;
		self.cursor += 1;
		Ok(value)
	}

	/// Consume the next element when it is null; never advances otherwise.
	pub fn decode_nil_next(&mut self) -> Result<bool> {
		if self.peek("element")?.is_null() {
			self.cursor += 1;
			Ok(true)
		} else {
			Ok(false)
		}
	}

	/// Run `f` over a keyed view of the element at the cursor, advancing on
	/// success.
	pub fn nested_keyed<T>(&mut self, f: impl FnOnce(&mut KeyedContainer<'_, 'de>) -> Result<T>) -> Result<T> {
		let node = self.peek("keyed container")?;
		let value = self.decoder.with_child(node, PathSegment::Index(self.cursor), |decoder| {
			let mut inner = decoder.keyed()?;
			f(&mut inner)
		})?;
		self.cursor += 1;
		Ok(value)
	}

	/// Run `f` over a sequential view of the element at the cursor, advancing
	/// on success.
	pub fn nested_seq<T>(&mut self, f: impl FnOnce(&mut SeqContainer<'_, 'de>) -> Result<T>) -> Result<T> {
		let node = self.peek("unkeyed container")?;
		let value = self.decoder.with_child(node, PathSegment::Index(self.cursor), |decoder| {
			let mut inner = decoder.seq()?;
			f(&mut inner)
		})?;
		self.cursor += 1;
		Ok(value)
	}

	/// Fresh decoder over the element at the cursor, retaining the
	/// accumulated coding path. Consumes the element unconditionally.
	pub fn super_decoder(&mut self) -> Result<Decoder<'de>> {
		let node = self.peek("element")?;
		let decoder = self.decoder.rescope(node, PathSegment::Index(self.cursor));
		self.cursor += 1;
		Ok(decoder)
	}
}
