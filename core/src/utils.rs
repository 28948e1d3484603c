use std::any::Any;

/// Printable preview of a byte run: quoted text when it is plain ASCII,
/// hex otherwise. Truncated to `max` bytes.
pub fn fmt_bytes(b: &[u8], max: usize) -> String {
    let (shown, cut) = if b.len() > max { (&b[..max], true) } else { (b, false) };
    let body = if shown.iter().all(|&c| c.is_ascii_graphic() || c == b' ') {
        format!("b\"{}\"", String::from_utf8_lossy(shown))
    } else {
        format!("0x{}", hex::encode(shown))
    };
    if cut {
        format!("{}..(+{})", body, b.len() - max)
    } else {
        body
    }
}

/// Best-effort text of a panic payload.
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&'static str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

// Flatten delivered chunks into one blob
pub fn chunks_to_bytes(chunks: &[impl AsRef<[u8]>]) -> Vec<u8> {
    chunks.iter()
        .flat_map(|c| c.as_ref())
        .copied()
        .collect()
}
