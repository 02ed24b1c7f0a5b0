use std::fmt;
use std::io;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures_lite::io::{AsyncRead, Cursor};

/// A response body: an async byte source drained in full during encoding.
///
/// The producer bounds the body; the serializer reads it to the end and
/// computes `Content-Length` from the bytes actually drained. A request's
/// bounded body reader is itself a valid source, so echoing a request body
/// back cannot over-read the connection.
pub struct Body {
    reader: Box<dyn AsyncRead + Send + Sync + Unpin + 'static>,
}

impl Body {
    /// Create a body from an async reader.
    pub fn from_reader(reader: impl AsyncRead + Send + Sync + Unpin + 'static) -> Self {
        Self {
            reader: Box::new(reader),
        }
    }

    /// Create a body from an in-memory buffer.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self::from_reader(Cursor::new(bytes))
    }

    /// Create a body from a string.
    pub fn from_string(string: String) -> Self {
        Self::from_bytes(string.into_bytes())
    }
}

impl fmt::Debug for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Body").finish()
    }
}

impl AsyncRead for Body {
    fn poll_read(
        mut self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &mut [u8],
    ) -> Poll<io::Result<usize>> {
        Pin::new(&mut self.reader).poll_read(cx, buf)
    }
}

impl From<Vec<u8>> for Body {
    fn from(bytes: Vec<u8>) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<&[u8]> for Body {
    fn from(bytes: &[u8]) -> Self {
        Self::from_bytes(bytes.to_vec())
    }
}

impl From<String> for Body {
    fn from(string: String) -> Self {
        Self::from_string(string)
    }
}

impl From<&str> for Body {
    fn from(string: &str) -> Self {
        Self::from_string(string.to_owned())
    }
}
