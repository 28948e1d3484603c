//! Stream record content decoding.
//!
//! Responsibilities:
//! - Track how much content of the current record is still owed
//! - Slice content out of caller buffers without copying
//! - Deliver slices to a listener, isolating listener failures
//!
//! Non-responsibilities:
//! - Header parsing
//! - Routing bytes between record decoders
//! - IO

pub mod types;
pub mod buffer;
pub mod listener;
pub mod isolate;
pub mod decode;

pub use types::{DecoderConfig, DecoderState};
pub use buffer::{ContentView, InputBuffer};
pub use listener::{ContentCollector, NoopListener, StreamListener};
pub use decode::StreamContentDecoder;
