//! Encode an HTTP response on the server.

use futures_lite::io::AsyncReadExt;
use log::trace;

use crate::{Body, Error, Headers, Result, CONTENT_LENGTH};

/// An HTTP response under construction.
///
/// Built by the connection handler, consumed exactly once by [`encode`].
#[derive(Debug)]
pub struct Response {
    protocol: String,
    status: String,
    headers: Headers,
    body: Option<Body>,
}

impl Response {
    /// Create a response with the given protocol version string and status
    /// line text, e.g. `Response::new("HTTP/1.1", "200 OK")`.
    pub fn new(protocol: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            protocol: protocol.into(),
            status: status.into(),
            headers: Headers::new(),
            body: None,
        }
    }

    /// The protocol version string.
    pub fn protocol(&self) -> &str {
        &self.protocol
    }

    /// The status line text, e.g. `200 OK`.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// The response headers.
    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    /// Append a header value, keeping any values already present.
    pub fn append_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.headers.append(name, value);
    }

    /// Set the response body.
    pub fn set_body(&mut self, body: impl Into<Body>) {
        self.body = Some(body.into());
    }
}

/// Encode an HTTP response into the exact bytes to write back.
///
/// Emits the status line, one line per header value, then the body framed
/// by a `Content-Length` computed from the bytes actually drained out of
/// the body source. A stored `Content-Length` header is never echoed; with
/// no body, none is emitted at all and the head ends with a single blank
/// line. Fails only with [`Error::BodyRead`] when the body source errors.
pub async fn encode(res: Response) -> Result<Vec<u8>> {
    let Response {
        protocol,
        status,
        headers,
        body,
    } = res;

    let mut buf = Vec::with_capacity(1024);
    buf.extend_from_slice(protocol.as_bytes());
    buf.push(b' ');
    buf.extend_from_slice(status.as_bytes());
    buf.extend_from_slice(b"\r\n");

    for (name, values) in headers.iter() {
        // the emitted length is computed below, never taken on faith from
        // whoever built the response
        if name == CONTENT_LENGTH {
            continue;
        }
        for value in values {
            buf.extend_from_slice(name.as_bytes());
            buf.extend_from_slice(b": ");
            buf.extend_from_slice(value.as_bytes());
            buf.extend_from_slice(b"\r\n");
        }
    }

    match body {
        Some(mut body) => {
            let mut bytes = Vec::new();
            body.read_to_end(&mut bytes).await.map_err(Error::BodyRead)?;
            buf.extend_from_slice(format!("{}: {}\r\n", CONTENT_LENGTH, bytes.len()).as_bytes());
            buf.extend_from_slice(b"\r\n");
            buf.extend_from_slice(&bytes);
        }
        None => buf.extend_from_slice(b"\r\n"),
    }

    trace!("< {} {}", protocol, status);
    Ok(buf)
}
