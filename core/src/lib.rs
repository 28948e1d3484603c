//! fcgi-core
//!
//! FastCGI stream record content decoding.
//! Zero-copy, synchronous, no I/O.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod utils;

pub mod headers;
pub mod telemetry;

// Record content layer
pub mod stream;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::headers::{CurrentRecord, HeaderSource, RecordHeader, RecordType, RequestId, StreamType};
    pub use crate::stream::{
        ContentCollector, ContentView, DecoderConfig, DecoderState, InputBuffer, NoopListener,
        StreamContentDecoder, StreamListener,
    };
    pub use crate::types::{ListenerError, ListenerFault};
}
