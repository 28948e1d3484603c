//! stream/decode.rs
//! Content decoder for stream records (stdin, stdout, stderr, data).
//!
//! The dispatcher calls `decode` with whatever bytes follow a stream record
//! header, or `handle_empty_record` when that header declared no content.
//! `decode` finishes at most one record per call and leaves the remaining
//! bytes for the dispatcher, which parses the next header itself.

use crate::constants::MAX_CONTENT_LENGTH;
use crate::headers::{HeaderSource, RequestId, StreamType};
use crate::stream::buffer::{ContentView, InputBuffer};
use crate::stream::isolate::invoke_listener;
use crate::stream::listener::StreamListener;
use crate::stream::types::{DecoderConfig, DecoderState};
use crate::telemetry::{DecoderCounters, DecoderSnapshot};
use crate::types::{Callback, ListenerFault};

macro_rules! trace {
    ($($arg:tt)*) => {
        #[cfg(debug_assertions)]
        println!("[STREAM-DECODER] {}", format_args!($($arg)*));
    };
}

/// Two-state content decoder bound to one stream type and one listener.
///
/// Driven sequentially by one dispatcher for the lifetime of its connection.
#[derive(Debug)]
pub struct StreamContentDecoder<H, L> {
    header: H,
    stream_type: StreamType,
    listener: L,
    config: DecoderConfig,
    state: DecoderState,
    remaining: usize,
    counters: DecoderCounters,
    last_fault: Option<ListenerFault>,
}

impl<H, L> StreamContentDecoder<H, L>
where
    H: HeaderSource,
    L: StreamListener,
{
    pub fn new(header: H, stream_type: StreamType, listener: L) -> Self {
        Self::with_config(header, stream_type, listener, DecoderConfig::default())
    }

    pub fn with_config(header: H, stream_type: StreamType, listener: L, config: DecoderConfig) -> Self {
        Self {
            header,
            stream_type,
            listener,
            config,
            state: DecoderState::AwaitingLength,
            remaining: 0,
            counters: DecoderCounters::default(),
            last_fault: None,
        }
    }

    /// Consume content bytes of the current record from `buffer`.
    ///
    /// Returns `true` when this call delivered the record's last byte; the
    /// decoder is then back in `AwaitingLength` and any bytes left in
    /// `buffer` belong to the next record. Returns `false` when the buffer
    /// ran out first (including an empty buffer); the next call resumes
    /// where this one stopped.
    pub fn decode(&mut self, buffer: &mut InputBuffer<'_>) -> bool {
        while buffer.has_remaining() {
            match self.state {
                DecoderState::AwaitingLength => {
                    self.remaining = self.header.declared_content_length();
                    debug_assert!(self.remaining <= MAX_CONTENT_LENGTH);
                    self.state = DecoderState::ConsumingContent;
                }
                DecoderState::ConsumingContent => {
                    let before = buffer.position();
                    let take = self.remaining.min(buffer.remaining());
                    let chunk = buffer.take_view(take);
                    debug_assert_eq!(chunk.len(), take);
                    debug_assert_eq!(buffer.position(), before + take);

                    // Commit framing progress before any listener code runs.
                    self.remaining -= take;
                    let complete = self.remaining == 0;
                    if complete {
                        self.state = DecoderState::AwaitingLength;
                        self.counters.add_record();
                    }

                    // A zero-length record completes here without an empty on_content.
                    if !chunk.is_empty() {
                        self.deliver(chunk);
                    }

                    if complete {
                        return true;
                    }
                }
            }
        }
        false
    }

    /// The current record declared zero content bytes.
    ///
    /// Closes the stream on stdin; a no-op for every other stream type.
    /// Leaves the state machine untouched.
    pub fn handle_empty_record(&mut self) {
        let ends = self.stream_type.ends_on_empty_record();
        self.counters.add_empty_record(ends);
        if !ends {
            return;
        }

        let request = self.header.current_request();
        let listener = &self.listener;
        let result = invoke_listener(&self.config, Callback::End, || listener.on_end(request));
        if let Err(fault) = result {
            self.report(request, fault);
        }
    }

    fn deliver(&mut self, chunk: ContentView<'_>) {
        self.counters.add_chunk(chunk.len());

        let request = self.header.current_request();
        let stream_type = self.stream_type;
        let listener = &self.listener;
        let result = invoke_listener(&self.config, Callback::Content, || {
            listener.on_content(request, stream_type, chunk)
        });
        if let Err(fault) = result {
            self.report(request, fault);
        }
    }

    fn report(&mut self, request: RequestId, fault: ListenerFault) {
        self.counters.add_fault();
        if self.config.trace_faults {
            trace!("{} request {}: listener fault ignored: {}", self.stream_type, request, fault);
        }
        self.last_fault = Some(fault);
    }

    #[inline]
    pub fn state(&self) -> DecoderState {
        self.state
    }

    /// Content bytes of the current record not yet delivered.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    #[inline]
    pub fn stream_type(&self) -> StreamType {
        self.stream_type
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    pub fn counters(&self) -> &DecoderCounters {
        &self.counters
    }

    pub fn snapshot(&self) -> DecoderSnapshot {
        DecoderSnapshot::from(self.stream_type, self.state, self.remaining, &self.counters)
    }

    /// Most recent caught listener fault, cleared on read.
    pub fn take_last_fault(&mut self) -> Option<ListenerFault> {
        self.last_fault.take()
    }

    pub fn header(&self) -> &H {
        &self.header
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn into_listener(self) -> L {
        self.listener
    }
}
