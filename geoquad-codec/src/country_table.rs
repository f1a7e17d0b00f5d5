// Copyright 2026 the geoquad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::collections::HashMap;

use crate::error::{Error, Result};

/// Serialize a country id -> ISO code mapping to a fixed-width table.
///
/// Layout: one byte holding `code_length` (2 or 3), then a little-endian
/// `u16` entry count, then that many `(u16 country_id, code_length bytes
/// of ASCII)` entries sorted by ascending id. Codes shorter than
/// `code_length` are right-padded with spaces; longer codes are
/// truncated.
///
/// # Errors
///
/// Returns [`Error::InvalidCodeLength`] if `code_length` isn't 2 or 3, or
/// [`Error::NonAsciiCode`] if a code contains non-ASCII characters.
pub fn serialize_country_table(codes: &HashMap<u32, String>, code_length: u8) -> Result<Vec<u8>> {
    if code_length != 2 && code_length != 3 {
        return Err(Error::InvalidCodeLength(code_length));
    }
    let len = code_length as usize;

    let mut ids: Vec<u32> = codes.keys().copied().collect();
    ids.sort_unstable();

    let mut buf = Vec::with_capacity(3 + ids.len() * (2 + len));
    buf.push(code_length);
    buf.extend_from_slice(&(ids.len() as u16).to_le_bytes());

    for id in ids {
        let code = &codes[&id];
        if !code.is_ascii() {
            return Err(Error::NonAsciiCode(code.clone()));
        }
        let id_u16 = u16::try_from(id).unwrap_or(u16::MAX);
        buf.extend_from_slice(&id_u16.to_le_bytes());
        let mut padded: Vec<u8> = code.bytes().take(len).collect();
        padded.resize(len, b' ');
        buf.extend_from_slice(&padded);
    }

    Ok(buf)
}

/// Decode a table written by [`serialize_country_table`].
///
/// # Errors
///
/// Returns [`Error::UnexpectedEof`] if the stream is truncated, or
/// [`Error::InvalidCodeLength`] if the header names a length other than 2
/// or 3.
pub fn deserialize_country_table(data: &[u8]) -> Result<HashMap<u32, String>> {
    let mut pos = 0usize;
    let code_length = *data.get(pos).ok_or(Error::UnexpectedEof { offset: pos })?;
    pos += 1;
    if code_length != 2 && code_length != 3 {
        return Err(Error::InvalidCodeLength(code_length));
    }
    let len = code_length as usize;

    let count_bytes: [u8; 2] = data
        .get(pos..pos + 2)
        .ok_or(Error::UnexpectedEof { offset: pos })?
        .try_into()
        .expect("slice of length 2");
    let count = u16::from_le_bytes(count_bytes) as usize;
    pos += 2;

    let mut result = HashMap::with_capacity(count);
    for _ in 0..count {
        let id_bytes: [u8; 2] = data
            .get(pos..pos + 2)
            .ok_or(Error::UnexpectedEof { offset: pos })?
            .try_into()
            .expect("slice of length 2");
        let id = u32::from(u16::from_le_bytes(id_bytes));
        pos += 2;

        let code_bytes = data.get(pos..pos + len).ok_or(Error::UnexpectedEof { offset: pos })?;
        pos += len;
        let code = String::from_utf8_lossy(code_bytes).trim_end().to_string();
        result.insert(id, code);
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_a_small_table() {
        let codes = HashMap::from([
            (0, "OC".to_string()),
            (1, "US".to_string()),
            (2, "BR".to_string()),
        ]);
        let data = serialize_country_table(&codes, 2).unwrap();
        let restored = deserialize_country_table(&data).unwrap();
        assert_eq!(restored, codes);
    }

    #[test]
    fn entries_are_sorted_by_id() {
        let codes = HashMap::from([(5, "EU".to_string()), (1, "US".to_string())]);
        let data = serialize_country_table(&codes, 2).unwrap();
        // header: length byte + 2-byte count = 3 bytes, then entries of 4 bytes each
        let first_id = u16::from_le_bytes([data[3], data[4]]);
        assert_eq!(first_id, 1);
    }

    #[test]
    fn pads_short_codes_with_spaces() {
        let codes = HashMap::from([(1, "A".to_string())]);
        let data = serialize_country_table(&codes, 3).unwrap();
        assert_eq!(&data[3..6], b"A  ");
    }

    #[test]
    fn rejects_bad_code_length() {
        let codes = HashMap::new();
        assert!(matches!(
            serialize_country_table(&codes, 4),
            Err(Error::InvalidCodeLength(4))
        ));
    }

    #[test]
    fn rejects_non_ascii_codes() {
        let codes = HashMap::from([(1, "\u{00e9}\u{00e9}".to_string())]);
        assert!(matches!(
            serialize_country_table(&codes, 2),
            Err(Error::NonAsciiCode(_))
        ));
    }

    #[test]
    fn truncated_table_is_rejected() {
        assert!(matches!(
            deserialize_country_table(&[2, 1, 0]),
            Err(Error::UnexpectedEof { .. })
        ));
    }
}
