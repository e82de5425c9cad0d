use crate::json::Result;
use crate::json::decoder::{Decode, Decoder};
use crate::json::path::PathSegment;
use crate::json::seq::SeqContainer;
use crate::json::value::Node;

/// Reserved key consumed by [`KeyedContainer::super_decoder`].
pub const SUPER_KEY: &str = "super";

/// Map-style view over an object node.
///
/// Every lookup miss fails with `KeyNotFound` before any value inspection;
/// a present-but-null member only fails later through the value path.
#[derive(Debug)]
pub struct KeyedContainer<'a, 'de> {
	decoder: &'a mut Decoder<'de>,
	entries: &'de [(Box<str>, Node)],
}

impl<'a, 'de> KeyedContainer<'a, 'de> {
	pub(crate) fn new(decoder: &'a mut Decoder<'de>, entries: &'de [(Box<str>, Node)]) -> Self {
		Self { decoder, entries }
	}

	/// Keys present in this container. Order is not contractual.
	pub fn all_keys(&self) -> Vec<&'de str> {
		self.entries.iter().map(|(key, _)| key.as_ref()).collect()
	}

	/// Whether an entry exists for `key`.
	pub fn contains(&self, key: &str) -> bool {
		self.lookup(key).is_some()
	}

	fn lookup(&self, key: &str) -> Option<&'de Node> {
		self.entries
			.binary_search_by(|(name, _)| name.as_ref().cmp(key))
			.ok()
			.map(|idx| &self.entries[idx].1)
	}

	fn require(&self, key: &str) -> Result<&'de Node> {
		self.lookup(key).ok_or_else(|| self.decoder.key_not_found(key))
	}

	/// Decode the member at `key` as `T`.
	pub fn decode<T: Decode>(&mut self, key: &str) -> Result<T> {
		let node = self.require(key)?;
		self.decoder.with_child(node, PathSegment::key(key), T::decode)
	}

	/// Decode the member at `key` as `T`, mapping an absent key or a null
	/// member to `None`.
	pub fn decode_opt<T: Decode>(&mut self, key: &str) -> Result<Option<T>> {
		if !self.contains(key) {
			return Ok(None);
		}
		self.decode::<Option<T>>(key)
	}

	/// Whether the member at `key` is null. Fails only when the key is absent.
	pub fn decode_nil(&mut self, key: &str) -> Result<bool> {
		Ok(self.require(key)?.is_null())
	}

	/// Run `f` over a keyed view of the object member at `key`.
	pub fn nested_keyed<T>(&mut self, key: &str, f: impl FnOnce(&mut KeyedContainer<'_, 'de>) -> Result<T>) -> Result<T> {
		let node = self.require(key)?;
		self.decoder.with_child(node, PathSegment::key(key), |decoder| {
			let mut inner = decoder.keyed()?;
			f(&mut inner)
		})
	}

	/// Run `f` over a sequential view of the array member at `key`.
	pub fn nested_seq<T>(&mut self, key: &str, f: impl FnOnce(&mut SeqContainer<'_, 'de>) -> Result<T>) -> Result<T> {
		let node = self.require(key)?;
		self.decoder.with_child(node, PathSegment::key(key), |decoder| {
			let mut inner = decoder.seq()?;
			f(&mut inner)
		})
	}

	/// Fresh decoder over the member at the reserved `super` key, retaining
	/// the accumulated coding path.
	pub fn super_decoder(&mut self) -> Result<Decoder<'de>> {
		self.super_decoder_for_key(SUPER_KEY)
	}

	/// Fresh decoder over the member at `key`, retaining the accumulated
	/// coding path.
	pub fn super_decoder_for_key(&mut self, key: &str) -> Result<Decoder<'de>> {
		let node = self.require(key)?;
		Ok(self.decoder.rescope(node, PathSegment::key(key)))
	}
}
