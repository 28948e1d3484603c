//! stream/isolate.rs
//! The single point where control crosses into listener code.
//!
//! Callers must have committed their own state before calling in here, so a
//! failing listener cannot roll back framing progress.

use std::panic::{self, AssertUnwindSafe};

use crate::stream::types::DecoderConfig;
use crate::types::{Callback, ListenerError, ListenerFault};
use crate::utils::panic_message;

/// Run one listener callback and capture any failure as a `ListenerFault`.
pub fn invoke_listener<F>(config: &DecoderConfig, callback: Callback, f: F) -> Result<(), ListenerFault>
where
    F: FnOnce() -> Result<(), ListenerError>,
{
    let outcome = if config.isolate_panics {
        // The decoder does not read listener state after a panic.
        match panic::catch_unwind(AssertUnwindSafe(f)) {
            Ok(res) => res,
            Err(payload) => {
                return Err(ListenerFault::Panicked {
                    callback,
                    message: panic_message(&*payload),
                })
            }
        }
    } else {
        f()
    };

    outcome.map_err(|source| ListenerFault::Returned { callback, source })
}
