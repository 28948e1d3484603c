//! telemetry/counters.rs
//! Mutable counters kept by each content decoder.
//!
//! Summary: record, chunk and byte counts plus caught listener faults.
//! Converted into an immutable `DecoderSnapshot` on demand.
use bincode::{Decode, Encode};
use std::ops::AddAssign;

/// Deterministic counters collected while decoding stream content.
#[derive(Default, Clone, Debug, Encode, Decode, PartialEq, Eq)]
pub struct DecoderCounters {
    pub records_completed: u64,
    pub empty_records: u64,
    pub end_signals: u64,
    pub chunks_delivered: u64,
    pub bytes_delivered: u64,
    pub listener_faults: u64,
}

impl DecoderCounters {
    /// Record one content chunk handed to the listener.
    pub fn add_chunk(&mut self, len: usize) {
        self.chunks_delivered += 1;
        self.bytes_delivered += len as u64;
    }

    pub fn add_record(&mut self) {
        self.records_completed += 1;
    }

    /// Record a zero-length record; `signalled_end` when it closed the stream.
    pub fn add_empty_record(&mut self, signalled_end: bool) {
        self.empty_records += 1;
        if signalled_end {
            self.end_signals += 1;
        }
    }

    pub fn add_fault(&mut self) {
        self.listener_faults += 1;
    }

    /// Mean delivered chunk size, 0 when nothing was delivered.
    pub fn mean_chunk_len(&self) -> f64 {
        if self.chunks_delivered == 0 {
            0.0
        } else {
            self.bytes_delivered as f64 / self.chunks_delivered as f64
        }
    }

    // Per-decoder counters are merged at the connection level.
    pub fn merge(&mut self, other: &DecoderCounters) {
        self.records_completed += other.records_completed;
        self.empty_records += other.empty_records;
        self.end_signals += other.end_signals;
        self.chunks_delivered += other.chunks_delivered;
        self.bytes_delivered += other.bytes_delivered;
        self.listener_faults += other.listener_faults;
    }
}

impl AddAssign for DecoderCounters {
    fn add_assign(&mut self, rhs: Self) {
        self.merge(&rhs);
    }
}
