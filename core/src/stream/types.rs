use std::fmt;

use serde::{Deserialize, Serialize};

/// Content decoder state. Cycles once per record; there is no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DecoderState {
    /// Next step reads the declared length of the record in flight.
    #[default]
    AwaitingLength,
    /// Delivering the rest of the current record's content.
    ConsumingContent,
}

impl fmt::Display for DecoderState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecoderState::AwaitingLength => f.write_str("awaiting-length"),
            DecoderState::ConsumingContent => f.write_str("consuming-content"),
        }
    }
}

/// Construction-time decoder options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecoderConfig {
    /// Catch listener panics with `catch_unwind`, in addition to returned
    /// errors. Has no effect when the binary is built with `panic = "abort"`.
    pub isolate_panics: bool,
    /// Emit a debug trace line for every caught listener fault.
    pub trace_faults: bool,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            isolate_panics: true,
            trace_faults: true,
        }
    }
}

impl DecoderConfig {
    /// Listener panics propagate to the caller.
    pub fn without_panic_isolation(mut self) -> Self {
        self.isolate_panics = false;
        self
    }

    pub fn quiet(mut self) -> Self {
        self.trace_faults = false;
        self
    }
}
