use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::{
    render::{write_json, Payload},
    sink::ResponseBuffer,
};

/// Handler return type that renders through [`write_json`].
#[derive(Debug)]
pub struct JsonReply<T> {
    status: StatusCode,
    payload: Payload<T>,
}

impl<T: Serialize> JsonReply<T> {
    pub fn new(status: StatusCode, payload: Payload<T>) -> Self {
        Self { status, payload }
    }

    pub fn ok(value: T) -> Self {
        Self::new(StatusCode::OK, Payload::Present(value))
    }

    pub fn empty(status: StatusCode) -> Self {
        Self::new(status, Payload::Absent)
    }
}

impl<T: Serialize> IntoResponse for JsonReply<T> {
    fn into_response(self) -> Response {
        let mut buffer = ResponseBuffer::new();
        write_json(&mut buffer, self.status, self.payload);
        buffer.into_response()
    }
}
