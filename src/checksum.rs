use sha2::{Digest, Sha256};

/// Width of the integrity tag appended by [`encode`](crate::encode).
pub const CHECKSUM_LEN: usize = 4;

/// Integrity tag over `data`: the first four bytes of sha256d, the double
/// application of SHA-256.
///
/// This is a corruption and typo detector, not a security mechanism.
pub fn checksum(data: &[u8]) -> [u8; CHECKSUM_LEN] {
    let first = Sha256::digest(data);
    let second = Sha256::digest(first);
    let mut tag = [0u8; CHECKSUM_LEN];
    tag.copy_from_slice(&second[..CHECKSUM_LEN]);
    tag
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checksum_of_empty_input_matches_sha256d() {
        // sha256d("") = 5df6e0e2...
        assert_eq!(checksum(&[]), [0x5d, 0xf6, 0xe0, 0xe2]);
    }

    #[test]
    fn checksum_is_deterministic() {
        assert_eq!(checksum(b"rust-base58"), checksum(b"rust-base58"));
    }

    #[test]
    fn checksum_depends_on_every_byte() {
        assert_ne!(checksum(b"rust-base58"), checksum(b"rust-base59"));
    }
}
