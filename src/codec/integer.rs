//! Big-endian bytes to and from unsigned integers.
//!
//! Every address fits into a `u128`, so the native 128-bit type is used as
//! the exact integer representation. Values that do not fit the requested
//! width are rejected instead of being truncated.

/// Interprets `N` bytes as a big-endian unsigned integer.
///
/// `N` is checked at compile time to be at most 16.
pub fn be_bytes_to_integer<const N: usize>(bytes: &[u8; N]) -> u128 {
    const { assert!(N <= 16, "at most 16 bytes fit into a u128") };

    bytes.iter().fold(0u128, |acc, &b| (acc << 8) | b as u128)
}

/// Renders `value` as all 16 big-endian bytes of a `u128`.
pub fn integer_to_full_be_bytes(value: u128) -> [u8; 16] {
    value.to_be_bytes()
}

/// Renders `value` as `N` big-endian bytes, zero-padded on the left.
///
/// Returns `None` when `value` needs more than `N` bytes.
pub fn integer_to_be_bytes<const N: usize>(value: u128) -> Option<[u8; N]> {
    let full = integer_to_full_be_bytes(value);

    if N > full.len() {
        let mut out = [0u8; N];
        out[N - full.len()..].copy_from_slice(&full);
        return Some(out);
    }

    let (high, low) = full.split_at(full.len() - N);

    if high.iter().any(|&b| b != 0) {
        return None;
    }

    let mut out = [0u8; N];
    out.copy_from_slice(low);

    Some(out)
}

/// Parses a strictly decimal unsigned integer.
///
/// Only ASCII digits are accepted: no sign, no whitespace, no separators.
/// Returns `None` on malformed input or when the value exceeds `u128::MAX`.
pub fn parse_decimal(text: &str) -> Option<u128> {
    if text.is_empty() {
        return None;
    }

    text.bytes().try_fold(0u128, |acc, b| {
        if !b.is_ascii_digit() {
            return None;
        }

        acc.checked_mul(10)?.checked_add((b - b'0') as u128)
    })
}
