use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::json::Result;
use crate::json::decoder::{Decode, Decoder};
use crate::json::number::NumberKind;
use crate::json::options::DateStrategy;

impl Decode for OffsetDateTime {
	fn decode(decoder: &mut Decoder<'_>) -> Result<Self> {
		let strategy = decoder.options().date_strategy.clone();
		match strategy {
			// The native layout of a timestamp is f64 seconds since the
			// Unix epoch, so Deferred and SecondsSinceEpoch coincide.
			DateStrategy::Deferred | DateStrategy::SecondsSinceEpoch => {
				let seconds = decoder.unbox_float(NumberKind::F64)?;
				from_epoch_seconds(decoder, seconds)
			}
			DateStrategy::MillisecondsSinceEpoch => {
				let millis = decoder.unbox_float(NumberKind::F64)?;
				from_epoch_seconds(decoder, millis / 1000.0)
			}
			DateStrategy::Iso8601 => {
				let text = decoder.unbox_str()?;
				OffsetDateTime::parse(text, &Rfc3339)
					.map_err(|err| decoder.data_corrupted(format!("invalid RFC 3339 date {text:?}: {err}")))
			}
			DateStrategy::Formatted(format) => {
				let text = decoder.unbox_str()?;
				OffsetDateTime::parse(text, &format)
					.map_err(|err| decoder.data_corrupted(format!("date {text:?} does not match the configured format: {err}")))
			}
			DateStrategy::Custom(decode) => decode(decoder),
		}
	}
}

fn from_epoch_seconds(decoder: &Decoder<'_>, seconds: f64) -> Result<OffsetDateTime> {
	if !seconds.is_finite() {
		return Err(decoder.data_corrupted(format!("non-finite timestamp {seconds}")));
	}
	let nanos = (seconds * 1_000_000_000.0) as i128;
	OffsetDateTime::from_unix_timestamp_nanos(nanos)
		.map_err(|_| decoder.data_corrupted(format!("timestamp {seconds} is out of range")))
}
