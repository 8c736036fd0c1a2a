use num_bigint::BigUint;
use num_traits::Zero;

/// Digits of `bytes` interpreted as an unsigned big-endian integer, written
/// in base 58 most significant first. An empty or all-zero input yields no
/// digits; leading zero bytes are the caller's concern.
pub(crate) fn to_digits(bytes: &[u8]) -> Vec<u8> {
    let base = BigUint::from(58u32);
    let mut n = BigUint::from_bytes_be(bytes);
    let mut digits = Vec::new();
    while !n.is_zero() {
        let rem = &n % &base;
        n /= &base;
        // rem < 58, so it fits in the first (and only) u32 limb
        digits.push(rem.to_u32_digits().first().copied().unwrap_or(0) as u8);
    }
    digits.reverse();
    digits
}

/// Minimal unsigned big-endian bytes of a base-58 digit sequence given most
/// significant first. A zero value maps to the empty sequence.
pub(crate) fn to_bytes(digits: &[u8]) -> Vec<u8> {
    let base = BigUint::from(58u32);
    let mut n = BigUint::zero();
    for &digit in digits {
        n *= &base;
        n += u32::from(digit);
    }
    // BigUint renders zero as [0], not as no bytes
    if n.is_zero() {
        Vec::new()
    } else {
        n.to_bytes_be()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_byte_to_digits() {
        // 0x61 = 1 * 58 + 39
        assert_eq!(to_digits(&[0x61]), vec![1, 39]);
    }

    #[test]
    fn empty_and_zero_inputs_yield_no_digits() {
        assert_eq!(to_digits(&[]), Vec::<u8>::new());
        assert_eq!(to_digits(&[0x00]), Vec::<u8>::new());
        assert_eq!(to_digits(&[0x00, 0x00]), Vec::<u8>::new());
    }

    #[test]
    fn leading_zero_bytes_do_not_affect_digits() {
        assert_eq!(to_digits(&[0x00, 0x00, 0x61]), to_digits(&[0x61]));
    }

    #[test]
    fn zero_digits_map_to_empty_bytes() {
        assert_eq!(to_bytes(&[]), Vec::<u8>::new());
        assert_eq!(to_bytes(&[0, 0, 0]), Vec::<u8>::new());
    }

    #[test]
    fn byte_output_is_minimal() {
        let bytes = to_bytes(&to_digits(&[0x61]));
        assert_eq!(bytes, vec![0x61]);
    }

    #[test]
    fn round_trips_values_wider_than_any_machine_word() {
        let bytes = [0xffu8; 48];
        assert_eq!(to_bytes(&to_digits(&bytes)), bytes.to_vec());
    }
}
