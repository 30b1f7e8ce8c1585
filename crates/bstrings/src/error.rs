use alloc::string::String;

use thiserror::Error;

/// Failures raised while accumulating or encoding a binary string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A size-tracking counter would exceed the maximum allocation size.
    #[error("size overflow while growing a buffer of {len} byte(s)")]
    Overflow {
        /// Logical length of the buffer when growth was attempted.
        len: usize,
    },
    /// The allocator refused to grow a buffer.
    #[error("{requested} byte(s) memory allocation error")]
    Allocation {
        /// Capacity in bytes that could not be allocated.
        requested: usize,
    },
    /// The requested output syntax is not supported.
    #[error("unknown syntax '{0}'")]
    UnknownLanguage(String),
    /// The input holds an odd number of hexadecimal digits.
    #[error("odd number of hexadecimal digits ({digits}) in input")]
    UnpairedDigit {
        /// Total count of valid hexadecimal digits seen.
        digits: usize,
    },
}
