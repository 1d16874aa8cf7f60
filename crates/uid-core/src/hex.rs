//! Shared hex/byte helpers.

/// The 16 uppercase hex digits, in value order.
pub const HEX_DIGITS: [char; 16] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F',
];

/// Format a byte slice as uppercase hex.
pub fn to_hex_upper(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        out.push_str(&format!("{b:02X}"));
    }
    out
}

/// Big-endian encoding of the low `width` bytes of `value`.
///
/// `width` must be 1..=8; values wider than `width` bytes are masked
/// (high bytes dropped), which is the documented behavior of date-derived
/// fields.
pub fn to_be_bytes(value: u64, width: usize) -> Vec<u8> {
    debug_assert!((1..=8).contains(&width));
    let all = value.to_be_bytes();
    all[8 - width..].to_vec()
}

/// Whether `c` is one of the 16 hex digits, either case.
pub fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}
