/// The 58-character table shared by Bitcoin-style encoders. Ordered, and
/// deliberately missing the visually confusable `0`, `O`, `I` and `l`.
pub(crate) const ALPHABET: &[u8; 58] =
    b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// The character standing in for a leading zero byte.
pub(crate) const ZERO: char = '1';

const INVALID: u8 = 0xff;

// Inverse lookup from ASCII byte to digit value, built at compile time.
static DIGITS: [u8; 128] = {
    let mut table = [INVALID; 128];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
};

/// Digit value of `ch`, or `None` when it is outside the alphabet.
pub(crate) fn digit_of(ch: char) -> Option<u8> {
    let idx = ch as usize;
    if idx < DIGITS.len() && DIGITS[idx] != INVALID {
        Some(DIGITS[idx])
    } else {
        None
    }
}

/// Character for digit value `digit`. Callers guarantee `digit < 58`.
pub(crate) fn char_of(digit: u8) -> char {
    ALPHABET[digit as usize] as char
}
