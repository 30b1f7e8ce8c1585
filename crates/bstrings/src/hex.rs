//! ASCII hexadecimal digit classification and raw-byte conversion.
use crate::{buffer::ByteBuffer, error::Error};

const LOWER_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// How the encoder treats one input byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Class {
    /// `0-9`, `A-F` or `a-f`.
    Digit,
    /// Newline and NUL are skipped without being reported.
    Ignored,
    /// Anything else is skipped and counted.
    Invalid,
}

static CLASSES: [Class; 256] = {
    let mut table = [Class::Invalid; 256];
    let mut b = 0;
    while b < 256 {
        table[b] = match b as u8 {
            b'0'..=b'9' | b'A'..=b'F' | b'a'..=b'f' => Class::Digit,
            b'\n' | 0 => Class::Ignored,
            _ => Class::Invalid,
        };
        b += 1;
    }
    table
};

/// Looks up the class of `byte`.
#[inline]
#[must_use]
pub fn classify(byte: u8) -> Class {
    CLASSES[byte as usize]
}

/// Whether `byte` is one of the 22 ASCII hexadecimal digits.
#[inline]
#[must_use]
pub fn is_hex_digit(byte: u8) -> bool {
    classify(byte) == Class::Digit
}

/// Renders every byte of `bytes` as two lowercase hexadecimal digits.
///
/// # Errors
///
/// Propagates [`ByteBuffer::push`] failures.
pub fn to_hex_digits(bytes: impl IntoIterator<Item = u8>) -> Result<ByteBuffer, Error> {
    let mut out = ByteBuffer::new();
    for byte in bytes {
        out.push(LOWER_DIGITS[usize::from(byte >> 4)])?;
        out.push(LOWER_DIGITS[usize::from(byte & 0x0f)])?;
    }
    Ok(out)
}
