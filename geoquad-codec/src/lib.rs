// Copyright 2026 the geoquad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compact binary wire format for quadtrees and country code tables.
//!
//! A tree is serialized as a preorder stream of tagged nodes: leaves carry
//! a varint country id, internal nodes carry a presence byte naming which
//! of their (up to) four children follow. The stream doesn't include the
//! tree's bounds or precision — callers store those separately and pass
//! them back in on decode. [`compress`]/[`decompress`] wrap the stream in
//! zlib for on-disk storage.

mod country_table;
mod error;
mod tree;
mod varint;

pub use country_table::{deserialize_country_table, serialize_country_table};
pub use error::{Error, Result};
pub use tree::{compress, decompress, deserialize_tree, serialize_tree, TAG_INTERNAL, TAG_LEAF};
pub use varint::{decode_varint, encode_varint};
