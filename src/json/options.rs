use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use time::OffsetDateTime;
use time::format_description::OwnedFormatItem;

use crate::json::Result;
use crate::json::decoder::{Decode, Decoder};
use crate::json::parse::{AllocationStrategy, parse};
use crate::json::value::Node;

/// Caller-supplied decode callback used by the custom strategies.
pub type DecodeFn<T> = Arc<dyn Fn(&mut Decoder<'_>) -> Result<T> + Send + Sync>;

/// Opaque caller metadata threaded unmodified through every nested decode.
pub type UserInfo = HashMap<Box<str>, Arc<dyn Any + Send + Sync>>;

/// Timestamp wire-representation policy, selected once per top-level decode.
#[derive(Clone, Default)]
pub enum DateStrategy {
	/// Decode the timestamp's native layout: f64 seconds since the Unix epoch.
	#[default]
	Deferred,
	/// Numeric seconds since the Unix epoch.
	SecondsSinceEpoch,
	/// Numeric milliseconds since the Unix epoch.
	MillisecondsSinceEpoch,
	/// RFC 3339 internet date-time text.
	Iso8601,
	/// Text parsed with a caller-supplied format description.
	Formatted(OwnedFormatItem),
	/// Caller-supplied decode callback; its errors propagate unchanged.
	Custom(DecodeFn<OffsetDateTime>),
}

impl fmt::Debug for DateStrategy {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			DateStrategy::Deferred => write!(f, "Deferred"),
			DateStrategy::SecondsSinceEpoch => write!(f, "SecondsSinceEpoch"),
			DateStrategy::MillisecondsSinceEpoch => write!(f, "MillisecondsSinceEpoch"),
			DateStrategy::Iso8601 => write!(f, "Iso8601"),
			DateStrategy::Formatted(_) => write!(f, "Formatted(..)"),
			DateStrategy::Custom(_) => write!(f, "Custom(..)"),
		}
	}
}

/// Binary-blob wire-representation policy.
#[derive(Clone, Default)]
pub enum DataStrategy {
	/// Decode the blob's native layout: a sequence of byte-sized integers.
	Deferred,
	/// Strict base64 text.
	#[default]
	Base64,
	/// Caller-supplied decode callback; its errors propagate unchanged.
	Custom(DecodeFn<Vec<u8>>),
}

impl fmt::Debug for DataStrategy {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			DataStrategy::Deferred => write!(f, "Deferred"),
			DataStrategy::Base64 => write!(f, "Base64"),
			DataStrategy::Custom(_) => write!(f, "Custom(..)"),
		}
	}
}

/// Handling of non-finite float text on float-target decodes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FloatPolicy {
	/// Strings never satisfy a float target.
	#[default]
	Reject,
	/// Substitute configured sentinel strings for the non-finite values.
	ConvertFromString {
		/// Sentinel for positive infinity.
		pos_inf: Box<str>,
		/// Sentinel for negative infinity.
		neg_inf: Box<str>,
		/// Sentinel for NaN.
		nan: Box<str>,
	},
}

/// Per-decode configuration, immutable for the whole top-level call.
#[derive(Clone, Default)]
pub struct DecodeOptions {
	/// Allocation behavior of the tree conversion pass.
	pub allocation: AllocationStrategy,
	/// Timestamp representation policy.
	pub date_strategy: DateStrategy,
	/// Binary-blob representation policy.
	pub data_strategy: DataStrategy,
	/// Non-finite float text policy.
	pub float_policy: FloatPolicy,
	/// Opaque caller metadata visible to every nested decode.
	pub user_info: UserInfo,
}

impl fmt::Debug for DecodeOptions {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("DecodeOptions")
			.field("allocation", &self.allocation)
			.field("date_strategy", &self.date_strategy)
			.field("data_strategy", &self.data_strategy)
			.field("float_policy", &self.float_policy)
			.field("user_info_keys", &self.user_info.keys().collect::<Vec<_>>())
			.finish()
	}
}

impl DecodeOptions {
	/// Parse `bytes` with the external parser and decode `T` from the root.
	pub fn decode_slice<T: Decode>(&self, bytes: &[u8]) -> Result<T> {
		let document = parse(bytes, self.allocation)?;
		self.decode_node(document.root())
	}

	/// Decode `T` from an already-parsed node using these options.
	pub fn decode_node<T: Decode>(&self, node: &Node) -> Result<T> {
		let mut decoder = Decoder::new(node, self.clone());
		T::decode(&mut decoder)
	}
}
