//! telemetry/mod.rs
//! Decoder counters and immutable snapshots.
//!
//! Notes:
//! - Counters are plain `u64`s owned by one decoder; merge them to get
//!   connection totals.
//! - Snapshots are serde-serializable for export.

pub mod counters;
pub mod snapshot;

pub use counters::*;
pub use snapshot::*;
