#![allow(missing_docs)]

use treedec::json::{AllocationStrategy, Decode, DecodeError, DecodeOptions, Decoder, PathSegment, Result, from_slice, parse};

#[derive(Debug, PartialEq)]
struct Point {
	x: i64,
	y: i64,
}

impl Decode for Point {
	fn decode(decoder: &mut Decoder<'_>) -> Result<Self> {
		let mut keyed = decoder.keyed()?;
		Ok(Self {
			x: keyed.decode("x")?,
			y: keyed.decode("y")?,
		})
	}
}

#[test]
fn decodes_struct_fields_by_key() {
	let point: Point = from_slice(br#"{"y": -2, "x": 11}"#).expect("point decodes");
	assert_eq!(point, Point { x: 11, y: -2 });
}

#[test]
fn missing_key_fails_before_value_inspection() {
	let err = from_slice::<Point>(br#"{"x": 1}"#).unwrap_err();
	match err {
		DecodeError::KeyNotFound { path, key } => {
			// The path stops at the lookup point and excludes the key itself.
			assert!(path.segments().is_empty());
			assert_eq!(key.as_ref(), "y");
		}
		other => panic!("expected KeyNotFound, got {other:?}"),
	}
}

#[test]
fn present_null_fails_through_the_value_path() {
	let document = parse(br#"{"data":{"name":null}}"#, AllocationStrategy::Dynamic).expect("parses");
	let mut decoder = Decoder::new(document.root(), DecodeOptions::default());
	let mut keyed = decoder.keyed().expect("object view");

	let err = keyed.nested_keyed("data", |data| data.decode::<String>("name")).unwrap_err();
	match err {
		DecodeError::ValueNotFound { path, expected } => {
			assert_eq!(path.segments(), &[PathSegment::key("data"), PathSegment::key("name")]);
			assert_eq!(expected, "string");
		}
		other => panic!("expected ValueNotFound, got {other:?}"),
	}
}

#[test]
fn contains_and_decode_nil_distinguish_absence_from_null() {
	let document = parse(br#"{"a": null, "b": 1}"#, AllocationStrategy::Dynamic).expect("parses");
	let mut decoder = Decoder::new(document.root(), DecodeOptions::default());
	let mut keyed = decoder.keyed().expect("object view");

	assert!(keyed.contains("a"));
	assert!(!keyed.contains("missing"));
	assert!(keyed.decode_nil("a").expect("a present"));
	assert!(!keyed.decode_nil("b").expect("b present"));
	assert!(matches!(keyed.decode_nil("missing").unwrap_err(), DecodeError::KeyNotFound { .. }));
}

#[test]
fn decode_opt_maps_absent_and_null_to_none() {
	let document = parse(br#"{"a": null, "b": 7}"#, AllocationStrategy::Dynamic).expect("parses");
	let mut decoder = Decoder::new(document.root(), DecodeOptions::default());
	let mut keyed = decoder.keyed().expect("object view");

	assert_eq!(keyed.decode_opt::<i64>("a").expect("null maps"), None);
	assert_eq!(keyed.decode_opt::<i64>("b").expect("value maps"), Some(7));
	assert_eq!(keyed.decode_opt::<i64>("missing").expect("absent maps"), None);
}

#[test]
fn all_keys_lists_every_member() {
	let document = parse(br#"{"zeta": 1, "alpha": 2}"#, AllocationStrategy::Dynamic).expect("parses");
	let mut decoder = Decoder::new(document.root(), DecodeOptions::default());
	let keyed = decoder.keyed().expect("object view");

	let mut keys = keyed.all_keys();
	keys.sort_unstable();
	assert_eq!(keys, vec!["alpha", "zeta"]);
}

#[derive(Debug, PartialEq)]
struct Named {
	name: String,
}

impl Decode for Named {
	fn decode(decoder: &mut Decoder<'_>) -> Result<Self> {
		let mut keyed = decoder.keyed()?;
		Ok(Self { name: keyed.decode("name")? })
	}
}

#[derive(Debug, PartialEq)]
struct Labeled {
	base: Named,
	label: String,
}

impl Decode for Labeled {
	fn decode(decoder: &mut Decoder<'_>) -> Result<Self> {
		let mut keyed = decoder.keyed()?;
		let mut parent = keyed.super_decoder()?;
		Ok(Self {
			base: Named::decode(&mut parent)?,
			label: keyed.decode("label")?,
		})
	}
}

#[test]
fn super_decoder_uses_reserved_key_and_retains_path() {
	let labeled: Labeled = from_slice(br#"{"super": {"name": "root"}, "label": "a"}"#).expect("decodes");
	assert_eq!(
		labeled,
		Labeled {
			base: Named { name: "root".to_owned() },
			label: "a".to_owned(),
		}
	);

	// A failure below the super decoder carries the full accumulated path.
	let err = from_slice::<Labeled>(br#"{"super": {"name": 3}, "label": "a"}"#).unwrap_err();
	assert_eq!(err.coding_path().segments(), &[PathSegment::key("super"), PathSegment::key("name")]);
}

#[test]
fn super_decoder_for_missing_key_is_key_not_found() {
	let err = from_slice::<Labeled>(br#"{"label": "a"}"#).unwrap_err();
	assert!(matches!(err, DecodeError::KeyNotFound { .. }));
}

#[test]
fn keyed_view_over_array_is_type_mismatch() {
	let err = from_slice::<Point>(b"[1, 2]").unwrap_err();
	match err {
		DecodeError::TypeMismatch { expected, actual, .. } => {
			assert_eq!(expected, "keyed container");
			assert_eq!(actual, "array");
		}
		other => panic!("expected TypeMismatch, got {other:?}"),
	}
}

#[test]
fn hashmap_decodes_over_all_keys() {
	use std::collections::HashMap;

	let map: HashMap<String, i64> = from_slice(br#"{"one": 1, "two": 2}"#).expect("map decodes");
	assert_eq!(map.len(), 2);
	assert_eq!(map["one"], 1);
	assert_eq!(map["two"], 2);
}
