//! headers/types.rs
//! Record type registry and the per-record header value.
//!
//! Notes:
//! - Ids follow the FastCGI 1.0 record type table.
//! - `RecordHeader` is produced by the header decoder; this crate only
//!   consumes it and never parses it from bytes.

use std::fmt;

use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};

use crate::constants::{record_ids, FCGI_HEADER_LEN, MAX_CONTENT_LENGTH, MAX_PADDING_LENGTH, NULL_REQUEST_ID};
use crate::types::HeaderError;

/// Every record type defined by FastCGI 1.0.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
pub enum RecordType {
    BeginRequest    = record_ids::BEGIN_REQUEST,
    AbortRequest    = record_ids::ABORT_REQUEST,
    EndRequest      = record_ids::END_REQUEST,
    Params          = record_ids::PARAMS,
    StdIn           = record_ids::STDIN,
    StdOut          = record_ids::STDOUT,
    StdErr          = record_ids::STDERR,
    Data            = record_ids::DATA,
    GetValues       = record_ids::GET_VALUES,
    GetValuesResult = record_ids::GET_VALUES_RESULT,
    UnknownType     = record_ids::UNKNOWN_TYPE,
}

impl RecordType {
    #[inline]
    pub fn try_from_u8(v: u8) -> Result<Self, HeaderError> {
        Self::try_from_primitive(v).map_err(|e| HeaderError::UnknownRecordType(e.number))
    }

    /// The stream this record feeds, if it is a stream record.
    #[inline]
    pub const fn stream_type(self) -> Option<StreamType> {
        match self {
            RecordType::StdIn  => Some(StreamType::StdIn),
            RecordType::StdOut => Some(StreamType::StdOut),
            RecordType::StdErr => Some(StreamType::StdErr),
            RecordType::Data   => Some(StreamType::Data),
            _ => None,
        }
    }
}

/// The four stream record types.
///
/// Fixed per decoder. Decides whether a zero-length record means
/// end-of-stream.
#[repr(u8)]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
    TryFromPrimitive, IntoPrimitive, Serialize, Deserialize,
)]
pub enum StreamType {
    StdIn  = record_ids::STDIN,
    StdOut = record_ids::STDOUT,
    StdErr = record_ids::STDERR,
    Data   = record_ids::DATA,
}

impl StreamType {
    pub const ALL: [StreamType; 4] = [
        StreamType::StdIn,
        StreamType::StdOut,
        StreamType::StdErr,
        StreamType::Data,
    ];

    /// Only the primary input stream is closed by an empty record.
    #[inline]
    pub const fn ends_on_empty_record(self) -> bool {
        matches!(self, StreamType::StdIn)
    }

    #[inline]
    pub const fn record_type(self) -> RecordType {
        match self {
            StreamType::StdIn  => RecordType::StdIn,
            StreamType::StdOut => RecordType::StdOut,
            StreamType::StdErr => RecordType::StdErr,
            StreamType::Data   => RecordType::Data,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StreamType::StdIn  => "stdin",
            StreamType::StdOut => "stdout",
            StreamType::StdErr => "stderr",
            StreamType::Data   => "data",
        }
    }
}

impl TryFrom<RecordType> for StreamType {
    type Error = HeaderError;

    fn try_from(rt: RecordType) -> Result<Self, Self::Error> {
        rt.stream_type().ok_or(HeaderError::NotAStreamRecord(rt))
    }
}

impl fmt::Display for StreamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opaque request identity. Passed through to listeners untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct RequestId(pub u16);

impl RequestId {
    pub const NULL: RequestId = RequestId(NULL_REQUEST_ID);

    /// Management records (GET_VALUES etc.) travel on the null request id.
    #[inline]
    pub const fn is_management(self) -> bool {
        self.0 == NULL_REQUEST_ID
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Header fields of the record currently being framed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordHeader {
    pub record_type: RecordType,
    pub request_id: RequestId,
    pub content_length: u16,
    pub padding_length: u8,
}

impl RecordHeader {
    /// Largest record the wire format can carry.
    pub const MAX_WIRE_LEN: usize = FCGI_HEADER_LEN + MAX_CONTENT_LENGTH + MAX_PADDING_LENGTH;

    pub fn new(record_type: RecordType, request_id: RequestId, content_length: u16) -> Self {
        Self { record_type, request_id, content_length, padding_length: 0 }
    }

    /// Header for a stream record with no padding.
    pub fn stream(stream_type: StreamType, request_id: RequestId, content_length: u16) -> Self {
        Self::new(stream_type.record_type(), request_id, content_length)
    }

    pub fn with_padding(mut self, padding_length: u8) -> Self {
        self.padding_length = padding_length;
        self
    }

    /// Zero declared content: the dispatcher routes these to
    /// `handle_empty_record` instead of `decode`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.content_length == 0
    }

    #[inline]
    pub fn stream_type(&self) -> Result<StreamType, HeaderError> {
        StreamType::try_from(self.record_type)
    }

    /// Header + content + padding, i.e. the record's full wire size.
    #[inline]
    pub fn wire_len(&self) -> usize {
        FCGI_HEADER_LEN + self.content_length as usize + self.padding_length as usize
    }
}
