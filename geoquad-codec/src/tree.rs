// Copyright 2026 the geoquad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::io::{Read, Write};

use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use geoquad_geom::{ChildIndex, Rectangle};
use geoquad_tree::{Node, QuadTree};

use crate::error::{Error, Result};
use crate::varint::{decode_varint, encode_varint};

/// Tag byte for an internal node.
pub const TAG_INTERNAL: u8 = 0x00;
/// Tag byte for a leaf node, followed by a varint country id.
pub const TAG_LEAF: u8 = 0x01;

/// Serialize a tree's nodes in preorder, uncompressed.
///
/// The tree's bounds and precision aren't part of this stream; callers
/// store them alongside the bytes and pass them back to
/// [`deserialize_tree`].
#[must_use]
pub fn serialize_tree(tree: &QuadTree) -> Vec<u8> {
    let mut buf = Vec::new();
    serialize_node(tree.root(), &mut buf);
    buf
}

fn serialize_node(node: &Node, buf: &mut Vec<u8>) {
    match node {
        Node::Leaf { country_id } => {
            buf.push(TAG_LEAF);
            encode_varint(*country_id, buf);
        }
        Node::Internal { children } => {
            buf.push(TAG_INTERNAL);
            let mut presence = 0u8;
            for idx in ChildIndex::ALL {
                if children[idx.as_usize()].is_some() {
                    presence |= idx.bit();
                }
            }
            buf.push(presence);
            for child in children.iter().flatten() {
                serialize_node(child, buf);
            }
        }
    }
}

/// Decode a preorder node stream built by [`serialize_tree`] back into a
/// tree, given the bounds and precision it was built over.
///
/// # Errors
///
/// Returns an error if the stream is truncated, contains an oversized
/// varint, sets a reserved presence bit, or leaves trailing bytes after a
/// complete tree has been read.
pub fn deserialize_tree(data: &[u8], bounds: Rectangle, precision: u32) -> Result<QuadTree> {
    let mut pos = 0;
    let root = deserialize_node(data, &mut pos)?;
    if pos != data.len() {
        return Err(Error::TrailingBytes(data.len() - pos));
    }
    Ok(QuadTree::new(root, bounds, precision))
}

fn deserialize_node(data: &[u8], pos: &mut usize) -> Result<Node> {
    let tag = *data.get(*pos).ok_or(Error::UnexpectedEof { offset: *pos })?;
    *pos += 1;

    if tag == TAG_INTERNAL {
        let presence = *data.get(*pos).ok_or(Error::UnexpectedEof { offset: *pos })?;
        *pos += 1;
        if presence & !0x0f != 0 {
            return Err(Error::ReservedPresenceBits(presence));
        }
        let mut children: [Option<Box<Node>>; 4] = [None, None, None, None];
        for idx in ChildIndex::ALL {
            if presence & idx.bit() != 0 {
                children[idx.as_usize()] = Some(Box::new(deserialize_node(data, pos)?));
            }
        }
        Ok(Node::internal(children))
    } else {
        let start = *pos - 1;
        if tag != TAG_LEAF {
            return Err(Error::UnknownTag(tag, start));
        }
        let country_id = decode_varint(data, pos)?;
        Ok(Node::leaf(country_id))
    }
}

/// Compress a serialized node stream with zlib at the maximum compression
/// level.
///
/// # Errors
///
/// Returns [`Error::Compression`] if the underlying zlib writer fails.
pub fn compress(data: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::new(9));
    encoder.write_all(data)?;
    Ok(encoder.finish()?)
}

/// Decompress a stream produced by [`compress`].
///
/// # Errors
///
/// Returns [`Error::Compression`] if the stream isn't valid zlib data.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    let mut decoder = ZlibDecoder::new(data);
    let mut out = Vec::new();
    decoder.read_to_end(&mut out)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialize_leaf() {
        let tree = QuadTree::new(Node::leaf(5), Rectangle::new(0, 100, 0, 100), 2);
        let data = serialize_tree(&tree);
        assert_eq!(data, vec![0x01, 5]);
    }

    #[test]
    fn serialize_internal_all_children_present() {
        let root = Node::internal([
            Some(Box::new(Node::leaf(1))),
            Some(Box::new(Node::leaf(2))),
            Some(Box::new(Node::leaf(3))),
            Some(Box::new(Node::leaf(4))),
        ]);
        let tree = QuadTree::new(root, Rectangle::new(0, 100, 0, 100), 2);
        let data = serialize_tree(&tree);
        assert_eq!(data[0], TAG_INTERNAL);
        assert_eq!(data[1], 0x0f);
        assert_eq!(
            data,
            vec![0x00, 0x0f, 0x01, 1, 0x01, 2, 0x01, 3, 0x01, 4]
        );
    }

    #[test]
    fn serialize_internal_with_missing_children() {
        let root = Node::internal([
            Some(Box::new(Node::leaf(1))),
            None,
            Some(Box::new(Node::leaf(3))),
            None,
        ]);
        let tree = QuadTree::new(root, Rectangle::new(0, 100, 0, 100), 2);
        let data = serialize_tree(&tree);
        assert_eq!(data[0], TAG_INTERNAL);
        assert_eq!(data[1], 0x05);
    }

    #[test]
    fn round_trip_leaf() {
        let tree = QuadTree::new(Node::leaf(42), Rectangle::new(0, 100, 0, 100), 2);
        let data = serialize_tree(&tree);
        let restored = deserialize_tree(&data, *tree.bounds(), tree.precision()).unwrap();
        assert_eq!(restored.lookup_indices(50, 50).unwrap(), 42);
    }

    #[test]
    fn round_trip_internal_routes_every_quadrant() {
        let root = Node::internal([
            Some(Box::new(Node::leaf(1))), // NW
            Some(Box::new(Node::leaf(2))), // NE
            Some(Box::new(Node::leaf(3))), // SW
            Some(Box::new(Node::leaf(4))), // SE
        ]);
        let bounds = Rectangle::new(0, 100, 0, 100);
        let tree = QuadTree::new(root, bounds, 2);
        let data = serialize_tree(&tree);
        let restored = deserialize_tree(&data, bounds, 2).unwrap();
        assert_eq!(restored.lookup_indices(75, 25).unwrap(), 1);
        assert_eq!(restored.lookup_indices(75, 75).unwrap(), 2);
        assert_eq!(restored.lookup_indices(25, 25).unwrap(), 3);
        assert_eq!(restored.lookup_indices(25, 75).unwrap(), 4);
    }

    #[test]
    fn round_trip_with_compression() {
        let root = Node::internal([
            Some(Box::new(Node::leaf(10))),
            Some(Box::new(Node::leaf(20))),
            Some(Box::new(Node::leaf(30))),
            Some(Box::new(Node::leaf(40))),
        ]);
        let bounds = Rectangle::new(0, 100, 0, 100);
        let tree = QuadTree::new(root, bounds, 2);
        let compressed = compress(&serialize_tree(&tree)).unwrap();
        let data = decompress(&compressed).unwrap();
        let restored = deserialize_tree(&data, bounds, 2).unwrap();
        assert_eq!(restored.lookup_indices(75, 25).unwrap(), 10);
        assert_eq!(restored.lookup_indices(25, 75).unwrap(), 40);
    }

    #[test]
    fn truncated_stream_is_rejected() {
        let err = deserialize_node(&[TAG_INTERNAL], &mut 0).unwrap_err();
        assert!(matches!(err, Error::UnexpectedEof { .. }));
    }

    #[test]
    fn reserved_presence_bits_are_rejected() {
        let data = [TAG_INTERNAL, 0xf0];
        let err = deserialize_node(&data, &mut 0).unwrap_err();
        assert!(matches!(err, Error::ReservedPresenceBits(0xf0)));
    }

    #[test]
    fn trailing_bytes_are_rejected() {
        let tree = QuadTree::new(Node::leaf(5), Rectangle::new(0, 100, 0, 100), 2);
        let mut data = serialize_tree(&tree);
        data.push(0xff);
        let err = deserialize_tree(&data, Rectangle::new(0, 100, 0, 100), 2).unwrap_err();
        assert!(matches!(err, Error::TrailingBytes(1)));
    }
}
