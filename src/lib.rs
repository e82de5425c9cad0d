//! Typed value decoding over parsed JSON trees.

/// Tree parsing boundary, container views, coercion, and decode strategies.
pub mod json;
