use std::io::{self, Write};

use axum::{
    body::Body,
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use bytes::BytesMut;

/// Output side of an HTTP response: headers, a single status, then body bytes.
///
/// Implementations follow the usual response-writer rules. Header changes made
/// after the status is committed are ignored, only the first status counts, and
/// writing body bytes before any status commits `200 OK`.
pub trait ResponseSink {
    fn set_header(&mut self, name: HeaderName, value: HeaderValue);

    fn write_status(&mut self, status: StatusCode);

    fn write_body(&mut self, bytes: &[u8]) -> io::Result<()>;
}

/// In-memory sink that turns into an axum [`Response`].
#[derive(Debug, Default)]
pub struct ResponseBuffer {
    status: Option<StatusCode>,
    headers: HeaderMap,
    body: BytesMut,
}

impl ResponseBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Committed status, or `200 OK` if nothing has been written yet.
    pub fn status(&self) -> StatusCode {
        self.status.unwrap_or(StatusCode::OK)
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub fn is_committed(&self) -> bool {
        self.status.is_some()
    }
}

impl ResponseSink for ResponseBuffer {
    fn set_header(&mut self, name: HeaderName, value: HeaderValue) {
        if self.is_committed() {
            return;
        }
        self.headers.insert(name, value);
    }

    fn write_status(&mut self, status: StatusCode) {
        if self.is_committed() {
            return;
        }
        self.status = Some(status);
    }

    fn write_body(&mut self, bytes: &[u8]) -> io::Result<()> {
        if !self.is_committed() {
            self.write_status(StatusCode::OK);
        }
        self.body.extend_from_slice(bytes);
        Ok(())
    }
}

impl IntoResponse for ResponseBuffer {
    fn into_response(self) -> Response {
        let status = self.status();
        let mut response = Response::new(Body::from(self.body.freeze()));
        *response.status_mut() = status;
        *response.headers_mut() = self.headers;
        response
    }
}

/// Sink writing an HTTP/1.1 response directly onto a byte stream.
///
/// Headers are held back until the status line goes out. The body is not
/// length-delimited, so the peer reads until the stream closes.
pub struct StreamSink<W> {
    inner: W,
    headers: HeaderMap,
    committed: bool,
    broken: bool,
}

impl<W: Write> StreamSink<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            headers: HeaderMap::new(),
            committed: false,
            broken: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }

    fn write_head(&mut self, status: StatusCode) -> io::Result<()> {
        let mut head = Vec::with_capacity(128);
        write!(
            head,
            "HTTP/1.1 {} {}\r\n",
            status.as_u16(),
            status.canonical_reason().unwrap_or("")
        )?;
        for (name, value) in &self.headers {
            head.extend_from_slice(name.as_str().as_bytes());
            head.extend_from_slice(b": ");
            head.extend_from_slice(value.as_bytes());
            head.extend_from_slice(b"\r\n");
        }
        head.extend_from_slice(b"\r\n");
        self.inner.write_all(&head)?;
        self.inner.flush()
    }
}

impl<W: Write> ResponseSink for StreamSink<W> {
    fn set_header(&mut self, name: HeaderName, value: HeaderValue) {
        if self.committed {
            return;
        }
        self.headers.insert(name, value);
    }

    fn write_status(&mut self, status: StatusCode) {
        if self.committed {
            return;
        }
        self.committed = true;
        if self.write_head(status).is_err() {
            self.broken = true;
        }
    }

    fn write_body(&mut self, bytes: &[u8]) -> io::Result<()> {
        if !self.committed {
            self.write_status(StatusCode::OK);
        }
        if self.broken {
            return Err(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "response head was not written",
            ));
        }
        self.inner.write_all(bytes)
    }
}
