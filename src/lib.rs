//! Base58Check encoding and decoding.
//!
//! Renders byte sequences (addresses, keys, serialized payloads) as short
//! strings that are safe to transcribe by hand: the alphabet omits the
//! visually confusable characters `0`, `O`, `I` and `l`, and the checksummed
//! form embeds a 4-byte sha256d tag so typos can be caught locally, without
//! consulting any external source of truth.
//!
//! Every operation is a pure function over its arguments; nothing here holds
//! state, so all of it may be called concurrently.

mod alphabet;
mod checksum;
mod convert;
mod error;

pub use checksum::{checksum, CHECKSUM_LEN};
pub use error::Error;

use log::debug;

/// Encode bytes as a base58 string with no checksum.
///
/// Leading zero bytes are preserved as leading `'1'` characters; the empty
/// input encodes to the empty string.
pub fn encode_plain(data: &[u8]) -> String {
    let zeros = data.iter().take_while(|&&b| b == 0).count();
    let digits = convert::to_digits(data);
    let mut encoded = String::with_capacity(zeros + digits.len());
    for _ in 0..zeros {
        encoded.push(alphabet::ZERO);
    }
    for digit in digits {
        encoded.push(alphabet::char_of(digit));
    }
    encoded
}

/// Decode a base58 string with no checksum.
///
/// Leading `'1'` characters come back as zero bytes. Fails with
/// [`Error::InvalidCharacter`] on the first character outside the alphabet.
pub fn decode_plain(encoded: &str) -> Result<Vec<u8>, Error> {
    if encoded.is_empty() {
        return Ok(Vec::new());
    }
    let zeros = encoded
        .chars()
        .take_while(|&ch| ch == alphabet::ZERO)
        .count();
    let mut digits = Vec::with_capacity(encoded.len());
    for (position, character) in encoded.chars().enumerate() {
        match alphabet::digit_of(character) {
            Some(digit) => digits.push(digit),
            None => return Err(Error::InvalidCharacter {
                character,
                position,
            }),
        }
    }
    // Leading zero digits contribute nothing to the magnitude, so the
    // restored zero bytes never double-count.
    let magnitude = convert::to_bytes(&digits);
    let mut decoded = vec![0u8; zeros];
    decoded.extend_from_slice(&magnitude);
    Ok(decoded)
}

/// Encode bytes as a base58 string with a trailing 4-byte checksum.
///
/// Fails only if the digest backend is unavailable; the bundled SHA-256
/// implementation always is, so every input currently encodes successfully.
pub fn encode(data: &[u8]) -> Result<String, Error> {
    let tag = checksum(data);
    let mut payload = Vec::with_capacity(data.len() + CHECKSUM_LEN);
    payload.extend_from_slice(data);
    payload.extend_from_slice(&tag);
    Ok(encode_plain(&payload))
}

/// Decode a base58 string, verify its trailing checksum and strip it.
///
/// Fails with [`Error::InvalidCharacter`] exactly as [`decode_plain`] does,
/// with [`Error::PayloadTooShort`] when fewer than 4 raw bytes decode, and
/// with [`Error::ChecksumMismatch`] when the tag disagrees with the checksum
/// recomputed over the payload.
pub fn decode(encoded: &str) -> Result<Vec<u8>, Error> {
    let mut raw = decode_plain(encoded)?;
    if raw.len() < CHECKSUM_LEN {
        return Err(Error::PayloadTooShort(raw.len()));
    }
    let split = raw.len() - CHECKSUM_LEN;
    let expected = checksum(&raw[..split]);
    if raw[split..] != expected {
        debug!("rejecting {} payload bytes: checksum tag does not match", split);
        return Err(Error::ChecksumMismatch);
    }
    raw.truncate(split);
    Ok(raw)
}
