//! stream/buffer.rs
//! Borrowed input cursor and zero-copy content views.
//!
//! `InputBuffer` plays the role of a position/limit byte buffer without any
//! mutable limit juggling: carving content out of it only moves `position`.
//! `ContentView` is a (backing, offset, len) triple over the caller's bytes.
//! It is valid for as long as the caller keeps that storage untouched.

use std::fmt;
use std::ops::Deref;

use bytes::{Buf, Bytes};

use crate::types::BufferError;
use crate::utils::fmt_bytes;

/// Readable window `[position, limit)` over caller-owned bytes.
#[derive(Clone, Copy)]
pub struct InputBuffer<'a> {
    bytes: &'a [u8],
    position: usize,
    limit: usize,
}

impl<'a> InputBuffer<'a> {
    /// Whole slice readable.
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, position: 0, limit: bytes.len() }
    }

    /// Explicit window. Fails if `position <= limit <= bytes.len()` does not hold.
    pub fn with_bounds(bytes: &'a [u8], position: usize, limit: usize) -> Result<Self, BufferError> {
        if limit > bytes.len() {
            return Err(BufferError::LimitOutOfBounds { limit, len: bytes.len() });
        }
        if position > limit {
            return Err(BufferError::PositionPastLimit { position, limit });
        }
        Ok(Self { bytes, position, limit })
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    #[inline]
    pub fn limit(&self) -> usize {
        self.limit
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.limit - self.position
    }

    #[inline]
    pub fn has_remaining(&self) -> bool {
        self.position < self.limit
    }

    /// The unread bytes.
    #[inline]
    pub fn as_slice(&self) -> &'a [u8] {
        &self.bytes[self.position..self.limit]
    }

    /// Carve the next `len` readable bytes into a view and move past them.
    ///
    /// `len` is clamped to `remaining()`.
    pub fn take_view(&mut self, len: usize) -> ContentView<'a> {
        let len = len.min(self.remaining());
        let view = ContentView { backing: self.bytes, offset: self.position, len };
        self.position += len;
        view
    }
}

impl<'a> Buf for InputBuffer<'a> {
    fn remaining(&self) -> usize {
        InputBuffer::remaining(self)
    }

    fn chunk(&self) -> &[u8] {
        self.as_slice()
    }

    fn advance(&mut self, cnt: usize) {
        assert!(
            cnt <= InputBuffer::remaining(self),
            "cannot advance past limit: {} > {}",
            cnt,
            InputBuffer::remaining(self)
        );
        self.position += cnt;
    }
}

impl fmt::Debug for InputBuffer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputBuffer")
            .field("position", &self.position)
            .field("limit", &self.limit)
            .field("capacity", &self.bytes.len())
            .finish()
    }
}

/// Zero-copy slice of record content.
#[derive(Clone, Copy)]
pub struct ContentView<'a> {
    backing: &'a [u8],
    offset: usize,
    len: usize,
}

impl<'a> ContentView<'a> {
    /// Offset of the first byte within the caller's backing storage.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn as_bytes(&self) -> &'a [u8] {
        &self.backing[self.offset..self.offset + self.len]
    }

    /// Owned copy, for listeners that keep content past the callback.
    pub fn to_bytes(&self) -> Bytes {
        Bytes::copy_from_slice(self.as_bytes())
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }
}

impl Deref for ContentView<'_> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl AsRef<[u8]> for ContentView<'_> {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl PartialEq<[u8]> for ContentView<'_> {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl fmt::Debug for ContentView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentView")
            .field("offset", &self.offset)
            .field("len", &self.len)
            .field("bytes", &format_args!("{}", fmt_bytes(self.as_bytes(), 32)))
            .finish()
    }
}
