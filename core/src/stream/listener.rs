//! stream/listener.rs
//! Listener capability receiving decoded stream content.

use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;
use std::sync::{Arc, Mutex, MutexGuard};

use bytes::{Bytes, BytesMut};

use crate::headers::{RequestId, StreamType};
use crate::stream::buffer::ContentView;
use crate::types::ListenerError;

/// Sink for stream record content.
///
/// Both callbacks are best-effort notifications; the decoder catches and
/// reports whatever they return. `chunk` borrows the caller's input and is
/// only valid for the duration of the call.
pub trait StreamListener {
    fn on_content(
        &self,
        request: RequestId,
        stream_type: StreamType,
        chunk: ContentView<'_>,
    ) -> Result<(), ListenerError> {
        let _ = (request, stream_type, chunk);
        Ok(())
    }

    fn on_end(&self, request: RequestId) -> Result<(), ListenerError> {
        let _ = request;
        Ok(())
    }
}

/// Ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopListener;

impl StreamListener for NoopListener {}

impl<T: StreamListener + ?Sized> StreamListener for &T {
    fn on_content(&self, request: RequestId, stream_type: StreamType, chunk: ContentView<'_>) -> Result<(), ListenerError> {
        (**self).on_content(request, stream_type, chunk)
    }
    fn on_end(&self, request: RequestId) -> Result<(), ListenerError> {
        (**self).on_end(request)
    }
}

impl<T: StreamListener + ?Sized> StreamListener for Box<T> {
    fn on_content(&self, request: RequestId, stream_type: StreamType, chunk: ContentView<'_>) -> Result<(), ListenerError> {
        (**self).on_content(request, stream_type, chunk)
    }
    fn on_end(&self, request: RequestId) -> Result<(), ListenerError> {
        (**self).on_end(request)
    }
}

impl<T: StreamListener + ?Sized> StreamListener for Rc<T> {
    fn on_content(&self, request: RequestId, stream_type: StreamType, chunk: ContentView<'_>) -> Result<(), ListenerError> {
        (**self).on_content(request, stream_type, chunk)
    }
    fn on_end(&self, request: RequestId) -> Result<(), ListenerError> {
        (**self).on_end(request)
    }
}

impl<T: StreamListener + ?Sized> StreamListener for Arc<T> {
    fn on_content(&self, request: RequestId, stream_type: StreamType, chunk: ContentView<'_>) -> Result<(), ListenerError> {
        (**self).on_content(request, stream_type, chunk)
    }
    fn on_end(&self, request: RequestId) -> Result<(), ListenerError> {
        (**self).on_end(request)
    }
}

#[derive(Debug, Default)]
struct Collected {
    streams: BTreeMap<(RequestId, StreamType), BytesMut>,
    chunks: usize,
    ended: BTreeSet<RequestId>,
    end_calls: usize,
}

/// Copies every chunk into per-(request, stream) buffers and remembers
/// which requests saw end-of-stream.
///
/// Shareable across the decoders of one connection by reference or `Arc`.
#[derive(Debug, Default)]
pub struct ContentCollector {
    inner: Mutex<Collected>,
}

impl ContentCollector {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Collected>, ListenerError> {
        self.inner.lock().map_err(|_| ListenerError::Poisoned)
    }

    /// Content collected so far for one stream of one request.
    pub fn content(&self, request: RequestId, stream_type: StreamType) -> Option<Bytes> {
        let guard = self.lock().ok()?;
        guard
            .streams
            .get(&(request, stream_type))
            .map(|b| Bytes::copy_from_slice(b))
    }

    pub fn is_ended(&self, request: RequestId) -> bool {
        self.lock().map(|g| g.ended.contains(&request)).unwrap_or(false)
    }

    /// Number of `on_content` calls received.
    pub fn chunk_count(&self) -> usize {
        self.lock().map(|g| g.chunks).unwrap_or(0)
    }

    /// Number of `on_end` calls received.
    pub fn end_count(&self) -> usize {
        self.lock().map(|g| g.end_calls).unwrap_or(0)
    }

    /// Take and clear everything collected for `request`.
    pub fn drain_request(&self, request: RequestId) -> Result<Vec<(StreamType, Bytes)>, ListenerError> {
        let mut guard = self.lock()?;
        let keys: Vec<_> = guard
            .streams
            .keys()
            .filter(|(r, _)| *r == request)
            .copied()
            .collect();

        let mut out = Vec::with_capacity(keys.len());
        for key in keys {
            if let Some(buf) = guard.streams.remove(&key) {
                out.push((key.1, buf.freeze()));
            }
        }
        guard.ended.remove(&request);
        Ok(out)
    }
}

impl StreamListener for ContentCollector {
    fn on_content(&self, request: RequestId, stream_type: StreamType, chunk: ContentView<'_>) -> Result<(), ListenerError> {
        let mut guard = self.lock()?;
        guard
            .streams
            .entry((request, stream_type))
            .or_default()
            .extend_from_slice(chunk.as_bytes());
        guard.chunks += 1;
        Ok(())
    }

    fn on_end(&self, request: RequestId) -> Result<(), ListenerError> {
        let mut guard = self.lock()?;
        guard.ended.insert(request);
        guard.end_calls += 1;
        Ok(())
    }
}
