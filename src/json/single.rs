use crate::json::Result;
use crate::json::decoder::{Decode, Decoder};
use crate::json::number::NumberKind;

/// Scalar view over exactly one node: no cursor, no keys.
///
/// Every primitive decode checks for null first and reports it as
/// `ValueNotFound` naming the expected type, then hands the node to the
/// numeric or string coercion layer.
pub struct SingleValue<'a, 'de> {
	decoder: &'a mut Decoder<'de>,
}

impl<'a, 'de> SingleValue<'a, 'de> {
	pub(crate) fn new(decoder: &'a mut Decoder<'de>) -> Self {
		Self { decoder }
	}

	/// Whether the node is null.
	pub fn decode_nil(&self) -> bool {
		self.decoder.is_null()
	}

	/// Decode the node as a boolean.
	pub fn decode_bool(&self) -> Result<bool> {
		self.decoder.unbox_bool()
	}

	/// Decode the node as an owned string.
	pub fn decode_string(&self) -> Result<String> {
		self.decoder.unbox_str().map(str::to_owned)
	}

	/// Decode the node as `i8`.
	pub fn decode_i8(&self) -> Result<i8> {
		self.decoder.unbox_int(NumberKind::I8).map(|value| value as i8)
	}

	/// Decode the node as `i16`.
	pub fn decode_i16(&self) -> Result<i16> {
		self.decoder.unbox_int(NumberKind::I16).map(|value| value as i16)
	}

	/// Decode the node as `i32`.
	pub fn decode_i32(&self) -> Result<i32> {
		self.decoder.unbox_int(NumberKind::I32).map(|value| value as i32)
	}

	/// Decode the node as `i64`.
	pub fn decode_i64(&self) -> Result<i64> {
		self.decoder.unbox_int(NumberKind::I64)
	}

	/// Decode the node as `isize`.
	pub fn decode_isize(&self) -> Result<isize> {
		self.decoder.unbox_int(NumberKind::Isize).map(|value| value as isize)
	}

	/// Decode the node as `u8`.
	pub fn decode_u8(&self) -> Result<u8> {
		self.decoder.unbox_int(NumberKind::U8).map(|value| value as u8)
	}

	/// Decode the node as `u16`.
	pub fn decode_u16(&self) -> Result<u16> {
		self.decoder.unbox_int(NumberKind::U16).map(|value| value as u16)
	}

	/// Decode the node as `u32`.
	pub fn decode_u32(&self) -> Result<u32> {
		self.decoder.unbox_int(NumberKind::U32).map(|value| value as u32)
	}

	/// Decode the node as `u64`.
	pub fn decode_u64(&self) -> Result<u64> {
		self.decoder.unbox_int(NumberKind::U64).map(|value| value as u64)
	}

	/// Decode the node as `usize`.
	pub fn decode_usize(&self) -> Result<usize> {
		self.decoder.unbox_int(NumberKind::Usize).map(|value| value as usize)
	}

	/// Decode the node as `f32`.
	pub fn decode_f32(&self) -> Result<f32> {
		self.decoder.unbox_float(NumberKind::F32).map(|value| value as f32)
	}

	/// Decode the node as `f64`.
	pub fn decode_f64(&self) -> Result<f64> {
		self.decoder.unbox_float(NumberKind::F64)
	}

	/// Decode the node as a composite `T` without descending.
	pub fn decode<T: Decode>(&mut self) -> Result<T> {
		T::decode(self.decoder)
	}
}
