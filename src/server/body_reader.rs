use std::fmt::{self, Debug};
use std::io;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures_lite::io::{AsyncRead, BufReader, Take};

/// A request body, limited to the declared `Content-Length`.
///
/// Reading never consumes past the declared byte count; whatever trails the
/// body is left unread on the underlying stream. A peer that declared more
/// than it sends leaves the reader blocked on the transport, not erroring.
pub struct BodyReader<R: AsyncRead + Unpin> {
    reader: Take<BufReader<R>>,
    len: u64,
}

impl<R: AsyncRead + Unpin> BodyReader<R> {
    pub(crate) fn new(reader: Take<BufReader<R>>, len: u64) -> Self {
        Self { reader, len }
    }

    /// The declared body length in bytes.
    pub fn len(&self) -> u64 {
        self.len
    }

    /// Whether the declared length is zero.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Bytes of the declared length not yet read.
    pub fn remaining(&self) -> u64 {
        self.reader.limit()
    }

    /// Unwind into the buffered stream, abandoning any unread body bytes.
    pub fn into_inner(self) -> BufReader<R> {
        self.reader.into_inner()
    }
}

impl<R: AsyncRead + Unpin> Debug for BodyReader<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BodyReader")
            .field("len", &self.len)
            .field("remaining", &self.reader.limit())
            .finish()
    }
}

impl<R: AsyncRead + Unpin> AsyncRead for BodyReader<R> {
    fn poll_read(
        mut self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &mut [u8],
    ) -> Poll<io::Result<usize>> {
        Pin::new(&mut self.reader).poll_read(cx, buf)
    }
}
