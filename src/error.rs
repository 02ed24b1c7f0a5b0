use std::error;
use std::fmt;
use std::io;

/// A specialized `Result` type for framing operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors when parsing a request or serializing a response.
///
/// Every variant is terminal for the current connection: the handler is
/// expected to close the connection and abandon processing. Reporting the
/// error is the caller's responsibility.
#[derive(Debug)]
pub enum Error {
    /// The request line did not contain at least three space-separated
    /// tokens. Carries the offending line.
    MalformedRequestLine(String),
    /// A header line did not split into exactly two parts on `": "`.
    /// Carries the offending line.
    MalformedHeaderLine(String),
    /// The first `Content-Length` value was not a non-negative integer.
    /// Carries the offending value.
    InvalidContentLength(String),
    /// An I/O failure while reading the request line, headers, or body.
    StreamRead(io::Error),
    /// An I/O failure while draining a response body.
    BodyRead(io::Error),
    /// An I/O failure while writing the serialized response.
    StreamWrite(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MalformedRequestLine(line) => {
                write!(f, "malformed request line: {:?}", line)
            }
            Error::MalformedHeaderLine(line) => {
                write!(f, "malformed header line: {:?}", line)
            }
            Error::InvalidContentLength(value) => {
                write!(f, "invalid content-length value: {:?}", value)
            }
            Error::StreamRead(err) => write!(f, "error reading request stream: {}", err),
            Error::BodyRead(err) => write!(f, "error reading response body: {}", err),
            Error::StreamWrite(err) => write!(f, "error writing response stream: {}", err),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::StreamRead(err) | Error::BodyRead(err) | Error::StreamWrite(err) => Some(err),
            _ => None,
        }
    }
}
