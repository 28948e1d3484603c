//! telemetry/snapshot.rs
//! Immutable, serializable view of a decoder's counters and position.

use serde::{Deserialize, Serialize};

use crate::headers::StreamType;
use crate::stream::DecoderState;
use crate::telemetry::counters::DecoderCounters;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecoderSnapshot {
    pub stream_type: StreamType,
    pub state: DecoderState,
    /// Bytes of the current record still owed to the listener.
    pub remaining: usize,
    pub records_completed: u64,
    pub empty_records: u64,
    pub end_signals: u64,
    pub chunks_delivered: u64,
    pub bytes_delivered: u64,
    pub listener_faults: u64,
    pub mean_chunk_len: f64,
}

impl DecoderSnapshot {
    pub fn from(
        stream_type: StreamType,
        state: DecoderState,
        remaining: usize,
        counters: &DecoderCounters,
    ) -> Self {
        Self {
            stream_type,
            state,
            remaining,
            records_completed: counters.records_completed,
            empty_records: counters.empty_records,
            end_signals: counters.end_signals,
            chunks_delivered: counters.chunks_delivered,
            bytes_delivered: counters.bytes_delivered,
            listener_faults: counters.listener_faults,
            mean_chunk_len: counters.mean_chunk_len(),
        }
    }

    /// True when the decoder sits between records.
    pub fn is_idle(&self) -> bool {
        self.state == DecoderState::AwaitingLength && self.remaining == 0
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
