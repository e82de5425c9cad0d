use crate::json::options::FloatPolicy;
use crate::json::value::{Kind, Node};

/// Closed universe of numeric decode targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberKind {
	/// 8-bit signed integer.
	I8,
	/// 16-bit signed integer.
	I16,
	/// 32-bit signed integer.
	I32,
	/// 64-bit signed integer.
	I64,
	/// Platform-width signed integer.
	Isize,
	/// 8-bit unsigned integer.
	U8,
	/// 16-bit unsigned integer.
	U16,
	/// 32-bit unsigned integer.
	U32,
	/// 64-bit unsigned integer.
	U64,
	/// Platform-width unsigned integer.
	Usize,
	/// 32-bit float.
	F32,
	/// 64-bit float.
	F64,
}

impl NumberKind {
	/// Target type label used in diagnostics.
	pub fn name(self) -> &'static str {
		match self {
			NumberKind::I8 => "i8",
			NumberKind::I16 => "i16",
			NumberKind::I32 => "i32",
			NumberKind::I64 => "i64",
			NumberKind::Isize => "isize",
			NumberKind::U8 => "u8",
			NumberKind::U16 => "u16",
			NumberKind::U32 => "u32",
			NumberKind::U64 => "u64",
			NumberKind::Usize => "usize",
			NumberKind::F32 => "f32",
			NumberKind::F64 => "f64",
		}
	}

	/// i64-domain bounds for integer targets; `None` for the float targets.
	fn bounds(self) -> Option<(i128, i128)> {
		match self {
			NumberKind::I8 => Some((i128::from(i8::MIN), i128::from(i8::MAX))),
			NumberKind::I16 => Some((i128::from(i16::MIN), i128::from(i16::MAX))),
			NumberKind::I32 => Some((i128::from(i32::MIN), i128::from(i32::MAX))),
			NumberKind::I64 => Some((i128::from(i64::MIN), i128::from(i64::MAX))),
			NumberKind::Isize => Some((isize::MIN as i128, isize::MAX as i128)),
			NumberKind::U8 => Some((0, i128::from(u8::MAX))),
			NumberKind::U16 => Some((0, i128::from(u16::MAX))),
			NumberKind::U32 => Some((0, i128::from(u32::MAX))),
			NumberKind::U64 => Some((0, u64::MAX as i128)),
			NumberKind::Usize => Some((0, usize::MAX as i128)),
			NumberKind::F32 | NumberKind::F64 => None,
		}
	}

	/// Exact range check of a stored integer against this target's domain.
	pub fn fits_int(self, value: i64) -> bool {
		match self.bounds() {
			Some((min, max)) => {
				let wide = i128::from(value);
				wide >= min && wide <= max
			}
			None => true,
		}
	}
}

/// Path-free failure modes of the pure coercion layer.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum NumberError {
	/// Node kind cannot satisfy the target at all.
	Mismatch {
		/// Actual node kind.
		actual: Kind,
	},
	/// Integer payload outside the target's domain.
	OutOfRange {
		/// Parsed integer value.
		value: i64,
	},
	/// Double payload overflows the narrower float width.
	Overflow {
		/// Parsed double value.
		value: f64,
	},
}

/// Coerce a node against an integer target. `Ok(None)` means the node is
/// null and the caller decides how absence surfaces.
pub(crate) fn coerce_int(node: &Node, kind: NumberKind) -> Result<Option<i64>, NumberError> {
	match node {
		Node::Null => Ok(None),
		Node::Int(value) => {
			if kind.fits_int(*value) {
				Ok(Some(*value))
			} else {
				Err(NumberError::OutOfRange { value: *value })
			}
		}
		other => Err(NumberError::Mismatch { actual: other.kind() }),
	}
}

/// Coerce a node against a float target. Integers always widen; doubles pass
/// through for f64 and narrow with a finite-overflow check for f32; strings
/// are consulted against the non-conforming-float policy.
pub(crate) fn coerce_float(node: &Node, kind: NumberKind, policy: &FloatPolicy) -> Result<Option<f64>, NumberError> {
	match node {
		Node::Null => Ok(None),
		Node::Int(value) => Ok(Some(*value as f64)),
		Node::Double(value) => match kind {
			NumberKind::F32 => {
				let narrowed = *value as f32;
				if narrowed.is_infinite() && value.is_finite() {
					Err(NumberError::Overflow { value: *value })
				} else {
					Ok(Some(f64::from(narrowed)))
				}
			}
			_ => Ok(Some(*value)),
		},
		Node::String(text) => match policy {
			FloatPolicy::ConvertFromString { pos_inf, neg_inf, nan } => {
				if text == pos_inf {
					Ok(Some(f64::INFINITY))
				} else if text == neg_inf {
					Ok(Some(f64::NEG_INFINITY))
				} else if text == nan {
					Ok(Some(f64::NAN))
				} else {
					Err(NumberError::Mismatch { actual: Kind::String })
				}
			}
			FloatPolicy::Reject => Err(NumberError::Mismatch { actual: Kind::String }),
		},
		other => Err(NumberError::Mismatch { actual: other.kind() }),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn integer_domains_are_exact() {
		assert!(NumberKind::I8.fits_int(127));
		assert!(!NumberKind::I8.fits_int(128));
		assert!(NumberKind::I8.fits_int(-128));
		assert!(!NumberKind::I8.fits_int(-129));
		assert!(NumberKind::U8.fits_int(255));
		assert!(!NumberKind::U8.fits_int(256));
		assert!(!NumberKind::U64.fits_int(-1));
		assert!(NumberKind::U64.fits_int(i64::MAX));
		assert!(NumberKind::I64.fits_int(i64::MIN));
	}

	#[test]
	fn integer_target_rejects_other_kinds() {
		let err = coerce_int(&Node::Double(1.5), NumberKind::I32).unwrap_err();
		assert_eq!(err, NumberError::Mismatch { actual: Kind::Double });

		let err = coerce_int(&Node::Bool(true), NumberKind::U8).unwrap_err();
		assert_eq!(err, NumberError::Mismatch { actual: Kind::Bool });
	}

	#[test]
	fn null_is_absent_not_error() {
		assert_eq!(coerce_int(&Node::Null, NumberKind::I64), Ok(None));
		assert_eq!(coerce_float(&Node::Null, NumberKind::F64, &FloatPolicy::Reject), Ok(None));
	}

	#[test]
	fn f32_narrowing_checks_finite_overflow() {
		let out = coerce_float(&Node::Double(1.0e40), NumberKind::F32, &FloatPolicy::Reject).unwrap_err();
		assert_eq!(out, NumberError::Overflow { value: 1.0e40 });

		// Precision loss is tolerated under the permissive design point.
		let out = coerce_float(&Node::Double(0.1), NumberKind::F32, &FloatPolicy::Reject)
			.expect("narrows")
			.expect("present");
		assert_eq!(out, f64::from(0.1_f32));
	}

	#[test]
	fn integers_always_widen_to_float() {
		let out = coerce_float(&Node::Int(1_000_000_000), NumberKind::F32, &FloatPolicy::Reject)
			.expect("widens")
			.expect("present");
		assert_eq!(out, f64::from(1.0e9_f32));
	}

	#[test]
	fn float_policy_substitutes_sentinels() {
		let policy = FloatPolicy::ConvertFromString {
			pos_inf: "+Infinity".into(),
			neg_inf: "-Infinity".into(),
			nan: "NaN".into(),
		};

		let plus = coerce_float(&Node::String("+Infinity".into()), NumberKind::F64, &policy)
			.expect("substitutes")
			.expect("present");
		assert_eq!(plus, f64::INFINITY);

		let not_a_number = coerce_float(&Node::String("NaN".into()), NumberKind::F64, &policy)
			.expect("substitutes")
			.expect("present");
		assert!(not_a_number.is_nan());

		let err = coerce_float(&Node::String("1.5".into()), NumberKind::F64, &policy).unwrap_err();
		assert_eq!(err, NumberError::Mismatch { actual: Kind::String });

		let err = coerce_float(&Node::String("NaN".into()), NumberKind::F64, &FloatPolicy::Reject).unwrap_err();
		assert_eq!(err, NumberError::Mismatch { actual: Kind::String });
	}
}
