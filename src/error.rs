use thiserror::Error;

/// Failure modes of the decoding operations.
///
/// `InvalidCharacter`, `PayloadTooShort` and `ChecksumMismatch` mean the
/// input string is corrupted or mistyped; `HashUnavailable` is a
/// configuration fault, not a data fault.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A character outside the base58 alphabet, with its character index.
    #[error("invalid base58 character `{character}` at position {position}")]
    InvalidCharacter { character: char, position: usize },
    /// A checksummed decode produced fewer raw bytes than the tag itself.
    #[error("payload of {0} bytes is too short to carry a 4-byte checksum")]
    PayloadTooShort(usize),
    /// The trailing tag disagrees with the checksum recomputed over the
    /// payload bytes.
    #[error("base58 checksum is invalid")]
    ChecksumMismatch,
    /// The digest backend could not be acquired.
    #[error("hash primitive unavailable")]
    HashUnavailable,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        let err = Error::InvalidCharacter {
            character: '0',
            position: 2,
        };
        assert_eq!(err.to_string(), "invalid base58 character `0` at position 2");
        assert_eq!(
            Error::PayloadTooShort(1).to_string(),
            "payload of 1 bytes is too short to carry a 4-byte checksum"
        );
    }
}
