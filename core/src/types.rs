//! types.rs
//! Crate-wide error types.
//!
//! - `ListenerError` is what listener implementations return.
//! - `ListenerFault` is what the decoder observes at its isolation boundary.
//! - `BufferError` / `HeaderError` cover construction of the input-side types.

use std::fmt;
use std::io;

use thiserror::Error;

use crate::headers::RecordType;

/// Error returned by a `StreamListener` callback.
#[derive(Debug, Error)]
pub enum ListenerError {
    /// The listener refused the content (application level).
    #[error("listener rejected content: {0}")]
    Rejected(String),

    /// The listener's downstream is already closed.
    #[error("listener closed")]
    Closed,

    /// Internal listener lock was poisoned by an earlier panic.
    #[error("listener state poisoned")]
    Poisoned,

    #[error("listener I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Which listener callback a fault came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Callback {
    Content,
    End,
}

impl fmt::Display for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Callback::Content => f.write_str("on_content"),
            Callback::End => f.write_str("on_end"),
        }
    }
}

/// A listener failure caught at the decoder's isolation boundary.
///
/// Never propagated out of the decoder; only reported.
#[derive(Debug, Error)]
pub enum ListenerFault {
    #[error("{callback} returned an error: {source}")]
    Returned {
        callback: Callback,
        #[source]
        source: ListenerError,
    },

    #[error("{callback} panicked: {message}")]
    Panicked {
        callback: Callback,
        message: String,
    },
}

impl ListenerFault {
    pub fn callback(&self) -> Callback {
        match self {
            ListenerFault::Returned { callback, .. } => *callback,
            ListenerFault::Panicked { callback, .. } => *callback,
        }
    }
}

/// Invalid bounds for an `InputBuffer`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BufferError {
    #[error("limit {limit} exceeds backing length {len}")]
    LimitOutOfBounds { limit: usize, len: usize },

    #[error("position {position} exceeds limit {limit}")]
    PositionPastLimit { position: usize, limit: usize },
}

/// Record type registry errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HeaderError {
    #[error("unknown record type: 0x{0:02x}")]
    UnknownRecordType(u8),

    #[error("record type {0:?} is not a stream record")]
    NotAStreamRecord(RecordType),
}
