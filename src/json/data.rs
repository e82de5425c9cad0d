use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::json::Result;
use crate::json::decoder::{Decode, Decoder};
use crate::json::options::DataStrategy;

/// Binary blob decoded through the configured data strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bytes(pub Vec<u8>);

impl Bytes {
	/// Underlying bytes.
	pub fn into_inner(self) -> Vec<u8> {
		self.0
	}
}

impl Decode for Bytes {
	fn decode(decoder: &mut Decoder<'_>) -> Result<Self> {
		let strategy = decoder.options().data_strategy.clone();
		match strategy {
			DataStrategy::Deferred => decode_byte_seq(decoder).map(Bytes),
			DataStrategy::Base64 => {
				let text = decoder.unbox_str()?;
				STANDARD
					.decode(text)
					.map(Bytes)
					.map_err(|err| decoder.data_corrupted(format!("invalid base64 payload: {err}")))
			}
			DataStrategy::Custom(decode) => decode(decoder).map(Bytes),
		}
	}
}

// Native layout: a sequence of byte-sized integers, pre-sized from the
// container's known element count.
fn decode_byte_seq(decoder: &mut Decoder<'_>) -> Result<Vec<u8>> {
	let mut seq = decoder.seq()?;
	let mut out = Vec::with_capacity(seq.count());
	while !seq.is_at_end() {
		out.push(seq.decode_next::<u8>()?);
	}
	Ok(out)
}
