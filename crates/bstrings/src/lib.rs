//! Binary String Toolkit: turn hexadecimal text into escaped binary string
//! literals for C, Python and PowerShell source, or generate the canonical
//! bad-character sequence.
//!
//! ```rust
//! use bstrings::{EncoderOptions, Syntax, badchar, encode_to_string};
//!
//! let options = EncoderOptions {
//!     syntax: Syntax::C,
//!     width: 4,
//!     var_name: Some("buf".into()),
//!     declare: true,
//!     ..Default::default()
//! };
//! let literal = encode_to_string(b"deadbeefcafe", &options).unwrap();
//! assert_eq!(
//!     literal,
//!     "unsigned char buf[] =\n    \"\\xde\\xad\\xbe\\xef\"\n    \"\\xca\\xfe\";\n"
//! );
//!
//! let seq = badchar::generate().unwrap();
//! assert_eq!(seq.len(), 510);
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod badchar;
mod buffer;
mod encoder;
mod error;
pub mod hex;
mod options;
mod syntax;

#[cfg(test)]
mod tests;

pub use buffer::{ByteBuffer, UNBATCHED_LEN};
pub use encoder::{HexEscape, InputSummary, encode, encode_to_string};
pub use error::Error;
pub use options::{DEFAULT_VAR_NAME, EncoderOptions, UnpairedDigitMode};
pub use syntax::{Declaration, Syntax, SyntaxProfile};
