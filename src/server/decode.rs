//! Decode an HTTP request on the server.

use std::fmt;
use std::io;

use futures_lite::io::{AsyncBufReadExt, AsyncRead, AsyncReadExt, BufReader};
use log::trace;

use crate::server::BodyReader;
use crate::{Error, Headers, Result, CONTENT_LENGTH};

/// Decode an HTTP request from a connection's byte stream.
///
/// Reads exactly one request head, line by line: the request line, then
/// header lines until a blank line. If a `Content-Length` header is present
/// the remaining stream is exposed as a [`BodyReader`] limited to exactly
/// that many bytes; without one the request has no body, whatever else the
/// stream may hold.
///
/// Returns `Ok(None)` when the peer closes the connection before sending
/// any bytes. A connection that closes mid-request surfaces
/// [`Error::StreamRead`] instead; no partial request is ever returned.
pub async fn decode<R>(reader: R) -> Result<Option<Request<R>>>
where
    R: AsyncRead + Unpin,
{
    let mut reader = BufReader::new(reader);
    let mut line = String::new();

    let bytes_read = reader
        .read_line(&mut line)
        .await
        .map_err(Error::StreamRead)?;
    if bytes_read == 0 {
        return Ok(None);
    }

    let request_line = trim_line(&line)?;
    let mut tokens = request_line.split(' ');
    let (method, path, protocol) = match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(method), Some(path), Some(protocol)) => {
            (method.to_owned(), path.to_owned(), protocol.to_owned())
        }
        // tokens past the third are ignored, but fewer than three is fatal
        _ => return Err(Error::MalformedRequestLine(request_line.to_owned())),
    };

    let mut headers = Headers::new();
    loop {
        line.clear();
        let bytes_read = reader
            .read_line(&mut line)
            .await
            .map_err(Error::StreamRead)?;
        if bytes_read == 0 {
            // closed before the blank line terminating the header block
            return Err(Error::StreamRead(io::ErrorKind::UnexpectedEof.into()));
        }

        let header_line = trim_line(&line)?;
        if header_line.is_empty() {
            break;
        }

        let mut parts = header_line.split(": ");
        match (parts.next(), parts.next(), parts.next()) {
            (Some(name), Some(value), None) => headers.append(name, value),
            _ => return Err(Error::MalformedHeaderLine(header_line.to_owned())),
        }
    }

    let body = match headers.get(CONTENT_LENGTH).and_then(|values| values.first()) {
        Some(value) => {
            let len = value
                .parse::<u64>()
                .map_err(|_| Error::InvalidContentLength(value.clone()))?;
            Some(BodyReader::new(reader.take(len), len))
        }
        None => None,
    };

    trace!("> {} {} {}", method, path, protocol);

    Ok(Some(Request {
        method,
        path,
        protocol,
        headers,
        body,
    }))
}

/// Strip the line terminator, or fail if the stream ended before one.
fn trim_line(line: &str) -> Result<&str> {
    // read_line only comes back without a trailing b'\n' at EOF
    match line.strip_suffix('\n') {
        Some(line) => Ok(line.strip_suffix('\r').unwrap_or(line)),
        None => Err(Error::StreamRead(io::ErrorKind::UnexpectedEof.into())),
    }
}

/// A parsed HTTP request.
///
/// Built once per connection by [`decode`] and immutable apart from its
/// body stream, which is consumed by reading.
pub struct Request<R: AsyncRead + Unpin> {
    method: String,
    path: String,
    protocol: String,
    headers: Headers,
    body: Option<BodyReader<R>>,
}

impl<R: AsyncRead + Unpin> Request<R> {
    /// The request method token, e.g. `GET`.
    pub fn method(&self) -> &str {
        &self.method
    }

    /// The request path, raw and unescaped.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The protocol version string, e.g. `HTTP/1.1`.
    pub fn protocol(&self) -> &str {
        &self.protocol
    }

    /// The request headers.
    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    /// The body stream, present only when the request declared a valid
    /// `Content-Length`.
    pub fn body_mut(&mut self) -> Option<&mut BodyReader<R>> {
        self.body.as_mut()
    }

    /// Take ownership of the body stream, leaving the request without one.
    pub fn take_body(&mut self) -> Option<BodyReader<R>> {
        self.body.take()
    }

    /// Drain the body into a string. An absent body reads as empty.
    pub async fn body_string(&mut self) -> Result<String> {
        let mut string = String::new();
        if let Some(body) = self.body.as_mut() {
            body.read_to_string(&mut string)
                .await
                .map_err(Error::StreamRead)?;
        }
        Ok(string)
    }
}

impl<R: AsyncRead + Unpin> fmt::Debug for Request<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Request")
            .field("method", &self.method)
            .field("path", &self.path)
            .field("protocol", &self.protocol)
            .field("headers", &self.headers)
            .field("body", &self.body)
            .finish()
    }
}
