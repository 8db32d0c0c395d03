use serde_json::Value;

use crate::render::Payload;

/// Classifies a raw request body: blank means no payload, `null` is a value.
pub fn classify_body(bytes: &[u8]) -> Result<Payload<Value>, String> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Payload::Absent);
    }

    serde_json::from_slice(bytes)
        .map(Payload::Present)
        .map_err(|err| format!("invalid JSON body: {err}"))
}
