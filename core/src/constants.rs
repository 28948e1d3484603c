//! constants.rs
//! FastCGI wire constants shared by the record-level types.

/// Fixed record header size in bytes.
pub const FCGI_HEADER_LEN: usize = 8;

/// Largest content length a single record can declare (u16 field).
pub const MAX_CONTENT_LENGTH: usize = u16::MAX as usize;

/// Largest padding length a single record can declare (u8 field).
pub const MAX_PADDING_LENGTH: usize = u8::MAX as usize;

/// Record type identifiers (mirrored in `headers::RecordType`).
pub mod record_ids {
    pub const BEGIN_REQUEST: u8     = 1;
    pub const ABORT_REQUEST: u8     = 2;
    pub const END_REQUEST: u8       = 3;
    pub const PARAMS: u8            = 4;
    pub const STDIN: u8             = 5;
    pub const STDOUT: u8            = 6;
    pub const STDERR: u8            = 7;
    pub const DATA: u8              = 8;
    pub const GET_VALUES: u8        = 9;
    pub const GET_VALUES_RESULT: u8 = 10;
    pub const UNKNOWN_TYPE: u8      = 11;
}

/// Request id reserved for management records.
pub const NULL_REQUEST_ID: u16 = 0;
