//! headers/mod.rs
//! Record-level header types and the collaborator interface content
//! decoders read them through.
//!
//! Notes:
//! - Header bytes are decoded upstream; this module starts from the
//!   already-parsed fields.
//! - Stream record types (stdin, stdout, stderr, data) get their own enum so
//!   a content decoder cannot be built for a non-stream record.

pub mod types;
pub mod source;

pub use types::*;
pub use source::*;
