//! Growable byte storage for input of unknown length.
//!
//! Overview
//! - `ByteBuffer` wraps a `Vec<u8>` but drives its capacity by hand instead
//!   of relying on `Vec`'s doubling. The first [`UNBATCHED_LEN`] appends grow
//!   the allocation one byte at a time; after that, growth happens in batches
//!   whose size follows a running counter, so a stream of `n` bytes costs
//!   `O(log n)` reallocations.
//! - Every size computation is checked. A counter that would pass
//!   `isize::MAX` yields [`Error::Overflow`]; a refused allocation yields
//!   [`Error::Allocation`] with the requested capacity. Neither leaves the
//!   buffer in a modified state.
//!
//! Invariants
//! - `len() <= capacity()` at all times.
//! - Capacity only grows. The buffer is never shrunk while in use.
use alloc::vec::Vec;
use core::fmt;

use bstr::BStr;

use crate::error::Error;

/// Appends below this length reallocate on every call.
pub const UNBATCHED_LEN: usize = 8;

/// Largest capacity the allocator can be asked for.
const MAX_CAPACITY: usize = isize::MAX as usize;

/// An owned, growable sequence of bytes with a batched growth curve.
#[derive(Clone)]
pub struct ByteBuffer {
    data: Vec<u8>,
    /// Running allocation-size counter; the next batched reallocation happens
    /// when the write index reaches it.
    alloc_size: usize,
    reallocations: usize,
}

impl ByteBuffer {
    /// Creates an empty buffer with room for one byte.
    #[must_use]
    pub fn new() -> Self {
        Self {
            data: Vec::with_capacity(1),
            alloc_size: UNBATCHED_LEN,
            reallocations: 0,
        }
    }

    /// Appends one byte, growing the allocation according to the batch
    /// policy.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Overflow`] if the next capacity cannot be represented
    /// and [`Error::Allocation`] if the allocator refuses it.
    pub fn push(&mut self, byte: u8) -> Result<(), Error> {
        let index = self.data.len();
        let (target, alloc_size) = self.target_capacity(index)?;
        if target > self.data.capacity() {
            self.grow_to(target)?;
        }
        self.alloc_size = alloc_size;
        self.data.push(byte);
        Ok(())
    }

    /// Appends every byte of `bytes` in order.
    ///
    /// # Errors
    ///
    /// Stops at the first failing [`ByteBuffer::push`]; bytes appended
    /// before the failure stay in the buffer.
    pub fn extend_from_slice(&mut self, bytes: &[u8]) -> Result<(), Error> {
        bytes.iter().try_for_each(|&b| self.push(b))
    }

    /// Capacity the buffer must hold before writing at `index`, paired with
    /// the allocation counter to keep once the write succeeds.
    fn target_capacity(&self, index: usize) -> Result<(usize, usize), Error> {
        let overflow = || Error::Overflow { len: index };
        if index < UNBATCHED_LEN {
            let target = index.checked_add(1).ok_or_else(overflow)?;
            return Ok((target, self.alloc_size));
        }
        if index % self.alloc_size != 0 {
            let target = self.data.capacity().max(index.saturating_add(1));
            return Ok((target, self.alloc_size));
        }
        let batch = (index / UNBATCHED_LEN) * UNBATCHED_LEN;
        let next = self.alloc_size.checked_add(batch).ok_or_else(overflow)?;
        let target = next.checked_add(1).ok_or_else(overflow)?;
        if target > MAX_CAPACITY {
            return Err(overflow());
        }
        Ok((target, next))
    }

    fn grow_to(&mut self, target: usize) -> Result<(), Error> {
        let old = self.data.capacity();
        self.data
            .try_reserve_exact(target - self.data.len())
            .map_err(|_| Error::Allocation { requested: target })?;
        self.reallocations += 1;
        tracing::trace!(old, new = self.data.capacity(), "byte buffer reallocated");
        Ok(())
    }

    /// Read-only view of the valid bytes.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Number of valid bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether no byte has been appended yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Bytes currently allocated, always at least [`ByteBuffer::len`].
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// How many times the allocation was grown since construction.
    #[must_use]
    pub fn reallocations(&self) -> usize {
        self.reallocations
    }
}

impl Default for ByteBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<[u8]> for ByteBuffer {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl fmt::Debug for ByteBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByteBuffer")
            .field("data", &BStr::new(&self.data))
            .field("capacity", &self.data.capacity())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use alloc::{format, vec::Vec};

    use super::{ByteBuffer, MAX_CAPACITY, UNBATCHED_LEN};
    use crate::Error;

    #[test]
    fn new_buffer_is_empty_with_room_for_one_byte() {
        let buf = ByteBuffer::new();
        assert!(buf.is_empty());
        assert!(buf.capacity() >= 1);
        assert_eq!(buf.reallocations(), 0);
    }

    #[test]
    fn push_keeps_bytes_in_order() {
        let mut buf = ByteBuffer::new();
        buf.extend_from_slice(b"deadbeef\n").unwrap();
        assert_eq!(buf.as_slice(), b"deadbeef\n");
        assert_eq!(buf.len(), 9);
    }

    #[test]
    fn small_buffers_grow_on_every_append() {
        let mut buf = ByteBuffer::new();
        for b in 0..UNBATCHED_LEN as u8 {
            buf.push(b).unwrap();
            assert!(buf.capacity() >= buf.len());
        }
        // The first byte fits the initial allocation.
        assert_eq!(buf.reallocations(), UNBATCHED_LEN - 1);
    }

    #[test]
    fn large_buffers_grow_in_batches() {
        let mut buf = ByteBuffer::new();
        let input: Vec<u8> = (0..64 * 1024).map(|i| (i % 251) as u8).collect();
        buf.extend_from_slice(&input).unwrap();
        assert_eq!(buf.as_slice(), &input[..]);
        // 7 unbatched reallocations, then one per batch boundary (8, 16, 32..)
        assert!(
            buf.reallocations() <= UNBATCHED_LEN + 16,
            "too many reallocations: {}",
            buf.reallocations()
        );
    }

    #[test]
    fn capacity_never_drops_below_len() {
        let mut buf = ByteBuffer::new();
        let mut last_capacity = buf.capacity();
        for i in 0..2048u32 {
            buf.push((i & 0xff) as u8).unwrap();
            assert!(buf.capacity() >= buf.len());
            assert!(buf.capacity() >= last_capacity);
            last_capacity = buf.capacity();
        }
    }

    #[test]
    fn counter_overflow_is_reported() {
        let index = usize::MAX - 7;
        let buf = ByteBuffer {
            alloc_size: index,
            ..ByteBuffer::new()
        };
        assert_eq!(
            buf.target_capacity(index),
            Err(Error::Overflow { len: index })
        );
    }

    #[test]
    fn capacity_past_isize_max_is_reported() {
        let index = (MAX_CAPACITY / 8) * 8;
        let buf = ByteBuffer {
            alloc_size: index,
            ..ByteBuffer::new()
        };
        assert_eq!(
            buf.target_capacity(index),
            Err(Error::Overflow { len: index })
        );
    }

    #[test]
    fn batch_boundary_extends_counter() {
        let buf = ByteBuffer::new();
        assert_eq!(buf.target_capacity(UNBATCHED_LEN), Ok((17, 16)));
    }

    #[test]
    fn debug_shows_bytes_as_text() {
        let mut buf = ByteBuffer::new();
        buf.extend_from_slice(b"41\xff").unwrap();
        let shown = format!("{buf:?}");
        assert!(shown.contains(r#"data: "41\xff""#), "{shown}");
    }
}
