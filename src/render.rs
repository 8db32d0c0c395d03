//! JSON response writing on top of a [`ResponseSink`].

use std::io;

use axum::http::{header, HeaderValue, StatusCode};
use serde::{Deserialize, Serialize};

use crate::sink::ResponseSink;

pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Body sent when a value cannot be encoded after the status is already out.
pub const FALLBACK_BODY: &[u8] = br#"{"error":"failed to encode response"}"#;

/// Response body to render. `Absent` means no body at all, unlike
/// `Present(Value::Null)` which renders `null`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload<T> {
    Present(T),
    Absent,
}

impl<T> Payload<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Payload::Absent)
    }
}

impl<T> From<Option<T>> for Payload<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Payload::Present(value),
            None => Payload::Absent,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: String,
}

impl ErrorEnvelope {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum RenderError {
    #[error("failed to encode response: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("failed to write response body: {0}")]
    Write(#[from] io::Error),
}

/// Writes `payload` as a JSON response with the given status.
///
/// The content type is set first, then the status is committed. If the value
/// cannot be encoded or the body write fails, one attempt is made to write
/// [`FALLBACK_BODY`]; the status cannot change at that point and a failure of
/// that attempt is dropped.
pub fn write_json<S, T>(sink: &mut S, status: StatusCode, payload: Payload<T>)
where
    S: ResponseSink + ?Sized,
    T: Serialize,
{
    sink.set_header(
        header::CONTENT_TYPE,
        HeaderValue::from_static(CONTENT_TYPE_JSON),
    );
    sink.write_status(status);

    let Payload::Present(value) = payload else {
        return;
    };

    if encode_body(sink, &value).is_err() {
        let _ = sink.write_body(FALLBACK_BODY);
    }
}

/// Writes `{"error": message}` with the given status.
pub fn write_error<S>(sink: &mut S, status: StatusCode, message: impl Into<String>)
where
    S: ResponseSink + ?Sized,
{
    write_json(sink, status, Payload::Present(ErrorEnvelope::new(message)));
}

// Encodes fully before writing so a failed encode leaves the body empty.
fn encode_body<S, T>(sink: &mut S, value: &T) -> Result<(), RenderError>
where
    S: ResponseSink + ?Sized,
    T: Serialize,
{
    let bytes = serde_json::to_vec(value)?;
    sink.write_body(&bytes)?;
    Ok(())
}
