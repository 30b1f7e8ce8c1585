//! The canned bad-character fixture: every byte value from `0x01` to `0xff`.
//!
//! Exploit payloads are routinely mangled by the target (a NUL terminating a
//! `strcpy`, a newline ending a `gets`). Sending this sequence and diffing
//! what arrives shows which byte values are unusable.
use crate::{buffer::ByteBuffer, error::Error, hex::to_hex_digits};

/// Length in hex digits of the generated sequence.
pub const BADCHAR_HEX_LEN: usize = 510;

/// Builds the 510 lowercase hex digits for `0x01..=0xff`, in ascending order.
///
/// # Errors
///
/// Only fails if the allocator refuses the fixed-size buffer.
pub fn generate() -> Result<ByteBuffer, Error> {
    let seq = to_hex_digits(1..=u8::MAX)?;
    debug_assert_eq!(seq.len(), BADCHAR_HEX_LEN);
    Ok(seq)
}
