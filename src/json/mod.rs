mod data;
mod date;
mod decoder;
mod error;
mod impls;
mod keyed;
mod number;
mod options;
mod parse;
mod path;
mod seq;
mod single;
mod value;

/// Binary blob newtype decoded through the data strategy.
pub use data::Bytes;
/// Decoding engine, decodable trait, and default-option entry points.
pub use decoder::{Decode, Decoder, from_node, from_slice};
/// Error and result aliases.
pub use error::{DecodeError, Result};
/// Keyed container view and the reserved super key.
pub use keyed::{KeyedContainer, SUPER_KEY};
/// Closed universe of numeric decode targets.
pub use number::NumberKind;
/// Per-decode configuration and strategy selection.
pub use options::{DataStrategy, DateStrategy, DecodeFn, DecodeOptions, FloatPolicy, UserInfo};
/// Parse boundary entry point and types.
pub use parse::{AllocationStrategy, Document, parse};
/// Coding-path diagnostics and the field path query grammar.
pub use path::{CodingPath, FieldPath, PathSegment, PathStep};
/// Sequential container view.
pub use seq::SeqContainer;
/// Single-value container view.
pub use single::SingleValue;
/// Parsed tree node and its discriminant.
pub use value::{Kind, Node};
