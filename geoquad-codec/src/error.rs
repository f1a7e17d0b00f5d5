// Copyright 2026 the geoquad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Errors raised while encoding or decoding the wire format.
#[derive(Debug, Error)]
pub enum Error {
    /// The stream ended before a complete node, varint, or table entry
    /// could be read.
    #[error("unexpected end of data at offset {offset}")]
    UnexpectedEof {
        /// Byte offset at which the read failed.
        offset: usize,
    },

    /// A varint continued for more bytes than any value this format
    /// encodes (country ids and entry counts are `u32`) could ever need.
    #[error("varint at offset {offset} exceeds 32 bits")]
    VarintTooLong {
        /// Byte offset where the varint started.
        offset: usize,
    },

    /// An internal node's presence byte set a bit outside the low 4 bits.
    #[error("presence byte {0:#04x} sets reserved bits")]
    ReservedPresenceBits(u8),

    /// A node tag byte was neither [`crate::TAG_INTERNAL`] nor
    /// [`crate::TAG_LEAF`].
    #[error("unknown node tag {0:#04x} at offset {1}")]
    UnknownTag(u8, usize),

    /// The stream had extra bytes after a complete tree was decoded.
    #[error("{0} trailing byte(s) after the decoded tree")]
    TrailingBytes(usize),

    /// `serialize_country_table`/`deserialize_country_table` was asked for
    /// an ISO code length other than 2 or 3.
    #[error("country code length must be 2 or 3, got {0}")]
    InvalidCodeLength(u8),

    /// A country code wasn't valid ASCII, so it can't be stored in the
    /// fixed-width table.
    #[error("country code {0:?} is not ASCII")]
    NonAsciiCode(String),

    /// zlib (de)compression failed.
    #[error("compression error: {0}")]
    Compression(#[from] std::io::Error),
}

/// Convenience alias for results from this crate.
pub type Result<T> = std::result::Result<T, Error>;
