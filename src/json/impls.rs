use std::collections::HashMap;

use uuid::Uuid;

use crate::json::Result;
use crate::json::decoder::{Decode, Decoder};

impl Decode for bool {
	fn decode(decoder: &mut Decoder<'_>) -> Result<Self> {
		decoder.single_value().decode_bool()
	}
}

impl Decode for String {
	fn decode(decoder: &mut Decoder<'_>) -> Result<Self> {
		decoder.single_value().decode_string()
	}
}

macro_rules! decode_via_single_value {
	($($ty:ty => $method:ident),* $(,)?) => {
		$(
			impl Decode for $ty {
				fn decode(decoder: &mut Decoder<'_>) -> Result<Self> {
					decoder.single_value().$method()
				}
			}
		)*
	};
}

decode_via_single_value! {
	i8 => decode_i8,
	i16 => decode_i16,
	i32 => decode_i32,
	i64 => decode_i64,
	isize => decode_isize,
	u8 => decode_u8,
	u16 => decode_u16,
	u32 => decode_u32,
	u64 => decode_u64,
	usize => decode_usize,
	f32 => decode_f32,
	f64 => decode_f64,
}

impl<T: Decode> Decode for Option<T> {
	fn decode(decoder: &mut Decoder<'_>) -> Result<Self> {
		if decoder.single_value().decode_nil() {
			Ok(None)
		} else {
			T::decode(decoder).map(Some)
		}
	}
}

impl<T: Decode> Decode for Vec<T> {
	fn decode(decoder: &mut Decoder<'_>) -> Result<Self> {
		let mut seq = decoder.seq()?;
		let mut out = Vec::with_capacity(seq.count());
		while !seq.is_at_end() {
			out.push(seq.decode_next()?);
		}
		Ok(out)
	}
}

impl<T: Decode> Decode for HashMap<String, T> {
	fn decode(decoder: &mut Decoder<'_>) -> Result<Self> {
		let mut keyed = decoder.keyed()?;
		let keys = keyed.all_keys();
		let mut out = HashMap::with_capacity(keys.len());
		for key in keys {
			out.insert(key.to_owned(), keyed.decode(key)?);
		}
		Ok(out)
	}
}

impl Decode for Uuid {
	fn decode(decoder: &mut Decoder<'_>) -> Result<Self> {
		let text = decoder.unbox_str()?;
		// Canonical 36-character hyphenated grammar only.
		if text.len() != 36 {
			return Err(decoder.data_corrupted(format!("malformed UUID string {text:?}")));
		}
		Uuid::try_parse(text).map_err(|_| decoder.data_corrupted(format!("malformed UUID string {text:?}")))
	}
}
