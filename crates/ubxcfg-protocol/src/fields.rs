//! Wire-level field types and token packing.
//!
//! Every payload field is one of the [`FieldType`] variants below, encoded
//! little-endian. Packing is permissive by design: a missing token encodes
//! the default value (zero for numerics, empty string for [`FieldType::Str32`])
//! so trailing optional arguments can simply be left off, and an unparsable
//! numeric token also encodes as zero.

use bytes::BufMut;

/// Byte width of a [`FieldType::Str32`] field.
pub const STR32_SIZE: usize = 32;

/// Binary encoding of a single payload field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// Unsigned 8-bit integer.
    U8,
    /// Unsigned 16-bit integer, little-endian.
    U16,
    /// Unsigned 32-bit integer, little-endian.
    U32,
    /// Unsigned 64-bit integer, little-endian.
    U64,
    /// Signed 8-bit integer, two's complement.
    I8,
    /// Signed 16-bit integer, two's complement, little-endian.
    I16,
    /// Signed 32-bit integer, two's complement, little-endian.
    I32,
    /// IEEE-754 single-precision float, raw little-endian bits.
    F32,
    /// IEEE-754 double-precision float, raw little-endian bits.
    F64,
    /// Fixed 32-byte string, left-justified, space-padded or truncated.
    /// No terminator is guaranteed.
    Str32,
}

impl FieldType {
    /// Encoded width in bytes.
    pub fn width(&self) -> usize {
        match self {
            FieldType::U8 | FieldType::I8 => 1,
            FieldType::U16 | FieldType::I16 => 2,
            FieldType::U32 | FieldType::I32 | FieldType::F32 => 4,
            FieldType::U64 | FieldType::F64 => 8,
            FieldType::Str32 => STR32_SIZE,
        }
    }

    /// Pack one token into `buf`, consuming exactly [`width`](Self::width)
    /// bytes. `None` encodes the field's default value.
    pub fn pack(&self, token: Option<&str>, buf: &mut Vec<u8>) {
        match self {
            FieldType::U8 => buf.put_u8(parse_int(token) as u8),
            FieldType::U16 => buf.put_u16_le(parse_int(token) as u16),
            FieldType::U32 => buf.put_u32_le(parse_int(token) as u32),
            FieldType::U64 => buf.put_u64_le(parse_int(token) as u64),
            FieldType::I8 => buf.put_i8(parse_int(token) as i8),
            FieldType::I16 => buf.put_i16_le(parse_int(token) as i16),
            FieldType::I32 => buf.put_i32_le(parse_int(token) as i32),
            FieldType::F32 => buf.put_f32_le(parse_float(token) as f32),
            FieldType::F64 => buf.put_f64_le(parse_float(token)),
            FieldType::Str32 => {
                let bytes = token.unwrap_or("").as_bytes();
                let len = bytes.len().min(STR32_SIZE);
                buf.put_slice(&bytes[..len]);
                buf.put_bytes(b' ', STR32_SIZE - len);
            }
        }
    }
}

/// Parse an integer token: `0x`-prefixed hexadecimal or decimal.
/// Unparsable or missing tokens yield 0. Out-of-range values wrap to the
/// target width when packed, matching device-side expectations for raw
/// bit patterns given as negative numbers.
fn parse_int(token: Option<&str>) -> i64 {
    let Some(token) = token else { return 0 };
    if let Some(hex) = token.strip_prefix("0x") {
        u64::from_str_radix(hex, 16).map(|v| v as i64).unwrap_or(0)
    } else {
        token.parse::<i64>().unwrap_or(0)
    }
}

/// Parse a float token as a decimal or scientific literal. Unparsable or
/// missing tokens yield 0.0.
fn parse_float(token: Option<&str>) -> f64 {
    token.and_then(|t| t.parse::<f64>().ok()).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn packed(ty: FieldType, token: Option<&str>) -> Vec<u8> {
        let mut buf = Vec::new();
        ty.pack(token, &mut buf);
        assert_eq!(buf.len(), ty.width());
        buf
    }

    #[test]
    fn test_hex_and_decimal_encode_identically() {
        assert_eq!(packed(FieldType::U8, Some("0x1A")), packed(FieldType::U8, Some("26")));
        assert_eq!(packed(FieldType::U32, Some("0xDEADBEEF")), vec![0xEF, 0xBE, 0xAD, 0xDE]);
    }

    #[test]
    fn test_signed_twos_complement() {
        assert_eq!(packed(FieldType::I32, Some("-100")), vec![0x9C, 0xFF, 0xFF, 0xFF]);
        assert_eq!(packed(FieldType::I8, Some("-1")), vec![0xFF]);
        assert_eq!(packed(FieldType::I16, Some("-2")), vec![0xFE, 0xFF]);
    }

    #[test]
    fn test_negative_input_wraps_into_unsigned_field() {
        // Matches the reference behavior of casting a parsed int to the
        // unsigned field width.
        assert_eq!(packed(FieldType::U16, Some("-1")), vec![0xFF, 0xFF]);
    }

    #[test]
    fn test_missing_and_unparsable_tokens_default_to_zero() {
        assert_eq!(packed(FieldType::U32, None), vec![0; 4]);
        assert_eq!(packed(FieldType::U32, Some("bogus")), vec![0; 4]);
        assert_eq!(packed(FieldType::F64, Some("not-a-float")), vec![0; 8]);
        assert_eq!(packed(FieldType::U8, Some("0xZZ")), vec![0]);
    }

    #[test]
    fn test_float_raw_bits() {
        assert_eq!(packed(FieldType::F32, Some("1.0")), 1.0f32.to_le_bytes().to_vec());
        assert_eq!(packed(FieldType::F64, Some("-2.5e3")), (-2.5e3f64).to_le_bytes().to_vec());
    }

    #[test]
    fn test_str32_padding_and_truncation() {
        let short = packed(FieldType::Str32, Some("ublox"));
        assert_eq!(&short[..5], b"ublox");
        assert!(short[5..].iter().all(|&b| b == b' '));

        let long_input = "x".repeat(40);
        let long = packed(FieldType::Str32, Some(&long_input));
        assert_eq!(long, vec![b'x'; 32]);

        let empty = packed(FieldType::Str32, None);
        assert_eq!(empty, vec![b' '; 32]);
    }

    #[test]
    fn test_u64_full_width() {
        assert_eq!(
            packed(FieldType::U64, Some("0x0102030405060708")),
            vec![0x08, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01]
        );
    }
}
