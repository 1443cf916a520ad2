//! Render integers and byte slices as binary or hexadecimal strings.
//!
//! Integers are rendered most significant digit first and zero-padded to the full width of
//! their type. Negative values are rendered as their two's complement. Grouping counts from the
//! least significant end, so only the leftmost group can be shorter than requested.

/// An integer that can be rendered digit by digit.
pub trait Integer: Copy {
    /// Width of the type in bits.
    const BITS: u32;

    /// The value's two's complement bit pattern, zero-extended.
    fn to_u128(self) -> u128;
}

macro_rules! impl_integer {
    ($($t:ty => $u:ty),* $(,)?) => {
        $(
            impl Integer for $t {
                const BITS: u32 = <$t>::BITS;

                #[inline]
                fn to_u128(self) -> u128 {
                    self as $u as u128
                }
            }
        )*
    };
}

impl_integer!(
    u8 => u8,
    u16 => u16,
    u32 => u32,
    u64 => u64,
    u128 => u128,
    usize => usize,
    i8 => u8,
    i16 => u16,
    i32 => u32,
    i64 => u64,
    i128 => u128,
    isize => usize,
);

/// Insert `sep` every `count` characters of `digits`, counting from the right.
fn group(digits: &str, count: usize, sep: char) -> String {
    if count == 0 {
        return digits.to_string();
    }
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / count);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (len - i) % count == 0 {
            grouped.push(sep);
        }
        grouped.push(digit);
    }
    grouped
}

/// Render `value` in binary.
pub fn to_bin<T: Integer>(value: T) -> String {
    format!("{:0width$b}", value.to_u128(), width = T::BITS as usize)
}

/// Render `value` in binary with `sep` between groups of `count` bits.
///
/// A `count` of zero disables grouping.
pub fn to_bin_sep<T: Integer>(value: T, count: usize, sep: char) -> String {
    group(&to_bin(value), count, sep)
}

/// Render `value` in uppercase hexadecimal.
pub fn to_hex<T: Integer>(value: T) -> String {
    format!("{:0width$X}", value.to_u128(), width = (T::BITS / 4) as usize)
}

/// Render `value` in uppercase hexadecimal with `sep` between groups of `count` bytes.
///
/// A `count` of zero disables grouping.
pub fn to_hex_sep<T: Integer>(value: T, count: usize, sep: char) -> String {
    group(&to_hex(value), count.saturating_mul(2), sep)
}

/// Join bytes as uppercase hexadecimal pairs, optionally separated by `sep`.
fn join<'a>(bytes: impl Iterator<Item = &'a u8>, sep: Option<char>) -> String {
    let mut hex = String::new();
    for (i, byte) in bytes.enumerate() {
        if let (true, Some(sep)) = (i > 0, sep) {
            hex.push(sep);
        }
        hex.push_str(&format!("{:02X}", byte));
    }
    hex
}

/// Lay bytes out in rows of `columns`, separated by `sep` within a row.
fn table<'a>(bytes: impl Iterator<Item = &'a u8>, columns: usize, sep: char) -> String {
    let columns = if columns == 0 { usize::MAX } else { columns };
    let mut hex = String::new();
    for (i, byte) in bytes.enumerate() {
        if i > 0 {
            hex.push(if i % columns == 0 { '\n' } else { sep });
        }
        hex.push_str(&format!("{:02X}", byte));
    }
    hex
}

/// Converts bytes to an uppercase hexadecimal string.
pub fn hex(bytes: &[u8]) -> String {
    join(bytes.iter(), None)
}

/// Converts bytes to an uppercase hexadecimal string, last byte first.
pub fn hex_reverse(bytes: &[u8]) -> String {
    join(bytes.iter().rev(), None)
}

/// Converts bytes to uppercase hexadecimal pairs separated by `sep`.
pub fn hex_sep(bytes: &[u8], sep: char) -> String {
    join(bytes.iter(), Some(sep))
}

/// Converts bytes to uppercase hexadecimal pairs separated by `sep`, last byte first.
pub fn hex_sep_reverse(bytes: &[u8], sep: char) -> String {
    join(bytes.iter().rev(), Some(sep))
}

/// Converts bytes to a hexadecimal dump with `columns` bytes per line.
///
/// A `columns` of zero puts every byte on one line.
pub fn hex_table(bytes: &[u8], columns: usize, sep: char) -> String {
    table(bytes.iter(), columns, sep)
}

/// Converts bytes to a hexadecimal dump with `columns` bytes per line, last byte first.
pub fn hex_table_reverse(bytes: &[u8], columns: usize, sep: char) -> String {
    table(bytes.iter().rev(), columns, sep)
}

fn nibble(digit: u8) -> Option<u8> {
    match digit {
        b'0'..=b'9' => Some(digit - b'0'),
        b'a'..=b'f' => Some(digit - b'a' + 10),
        b'A'..=b'F' => Some(digit - b'A' + 10),
        _ => None,
    }
}

/// Converts a hexadecimal string (either case) to bytes.
pub fn from_hex(hex: &str) -> Option<Vec<u8>> {
    let digits = hex.as_bytes();
    if digits.len() % 2 != 0 {
        return None;
    }
    digits
        .chunks_exact(2)
        .map(|pair| Some((nibble(pair[0])? << 4) | nibble(pair[1])?))
        .collect()
}

/// Converts a hexadecimal string to bytes, stripping whitespace and/or a `0x` prefix. Commonly used
/// in testing to encode external test vectors without modification.
pub fn from_hex_formatted(hex: &str) -> Option<Vec<u8>> {
    let hex = hex.replace(['\t', '\n', '\r', ' '], "");
    let res = hex.strip_prefix("0x").unwrap_or(&hex);
    from_hex(res)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_to_bin() {
        assert_eq!(to_bin(5u8), "00000101");
        assert_eq!(to_bin(0u16), "0000000000000000");
        assert_eq!(to_bin(-1i8), "11111111");
        assert_eq!(to_bin(u32::MAX).len(), 32);
        assert_eq!(to_bin(1u128).len(), 128);
    }

    #[test]
    fn test_to_bin_sep() {
        assert_eq!(to_bin_sep(0xA5u8, 4, ' '), "1010 0101");
        assert_eq!(to_bin_sep(0x0102u16, 8, ' '), "00000001 00000010");
        assert_eq!(to_bin_sep(0x0102u16, 0, ' '), "0000000100000010");

        // Leading group is shorter
        assert_eq!(to_bin_sep(0xFFu8, 3, '_'), "11_111_111");

        // Group as wide as (or wider than) the value
        assert_eq!(to_bin_sep(0x80u8, 8, ' '), "10000000");
        assert_eq!(to_bin_sep(0x80u8, 16, ' '), "10000000");
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(to_hex(0xABu8), "AB");
        assert_eq!(to_hex(0x1u32), "00000001");
        assert_eq!(to_hex(-2i16), "FFFE");
        assert_eq!(to_hex(0xDEAD_BEEFu64), "00000000DEADBEEF");
    }

    #[test_case(1, ' ', "01 02 03 04"; "single bytes")]
    #[test_case(2, ':', "0102:0304"; "pairs")]
    #[test_case(4, ' ', "01020304"; "whole value")]
    #[test_case(8, ' ', "01020304"; "wider than value")]
    #[test_case(0, ' ', "01020304"; "no grouping")]
    fn test_to_hex_sep(count: usize, sep: char, expected: &str) {
        assert_eq!(to_hex_sep(0x0102_0304u32, count, sep), expected);
    }

    #[test]
    fn test_to_hex_sep_short_leading_group() {
        assert_eq!(
            to_hex_sep(0x0001_0203_0405_0607u64, 3, ' '),
            "0001 020304 050607"
        );
    }

    #[test]
    fn test_hex() {
        // Test case 0: empty bytes
        let b = &[];
        let h = hex(b);
        assert_eq!(h, "");
        assert_eq!(from_hex(&h).unwrap(), b.to_vec());

        // Test case 1: single byte
        let b = &[0x01];
        let h = hex(b);
        assert_eq!(h, "01");
        assert_eq!(from_hex(&h).unwrap(), b.to_vec());

        // Test case 2: multiple bytes
        let b = &[0x01, 0xAB, 0xFF];
        let h = hex(b);
        assert_eq!(h, "01ABFF");
        assert_eq!(from_hex(&h).unwrap(), b.to_vec());
        assert_eq!(from_hex("01abff").unwrap(), b.to_vec());

        // Test case 3: odd number of digits
        let h = "0102030";
        assert!(from_hex(h).is_none());

        // Test case 4: invalid hexadecimal character
        let h = "01g3";
        assert!(from_hex(h).is_none());

        // Test case 5: sign characters are not digits
        assert!(from_hex("+1").is_none());

        // Test case 6: multi-byte characters
        assert!(from_hex("aéb").is_none());
    }

    #[test]
    fn test_from_hex_formatted() {
        let b = vec![0x01, 0x02, 0x03];

        // Test case 0: whitespace
        assert_eq!(from_hex_formatted("01 02 03").unwrap(), b);

        // Test case 1: 0x prefix
        assert_eq!(from_hex_formatted("0x010203").unwrap(), b);

        // Test case 2: 0x prefix + different whitespace chars
        let h = "    \n\n0x\r\n01
                            02\t03\n";
        assert_eq!(from_hex_formatted(h).unwrap(), b);

        // Test case 3: invalid after stripping
        assert!(from_hex_formatted("0x0102 0").is_none());
    }

    #[test]
    fn test_hex_reverse() {
        let b = [0x01, 0x02, 0x03];
        assert_eq!(hex_reverse(&b), "030201");
        assert_eq!(hex_sep(&b, ' '), "01 02 03");
        assert_eq!(hex_sep_reverse(&b, ' '), "03 02 01");
        assert_eq!(hex_sep(&[], ' '), "");
        assert_eq!(hex_sep(&[0xFF], ' '), "FF");
    }

    #[test]
    fn test_hex_table() {
        let b: Vec<u8> = (0..10).collect();
        assert_eq!(
            hex_table(&b, 4, ' '),
            "00 01 02 03\n04 05 06 07\n08 09"
        );
        assert_eq!(
            hex_table_reverse(&b, 4, ' '),
            "09 08 07 06\n05 04 03 02\n01 00"
        );
        assert_eq!(hex_table(&b[..4], 4, ' '), "00 01 02 03");
        assert_eq!(hex_table(&b[..3], 0, ','), "00,01,02");
        assert_eq!(hex_table(&[], 8, ' '), "");
    }
}
