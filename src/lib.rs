//! One-shot async HTTP 1.1 framing.
//!
//! HTTP is a protocol where a client and server communicate by encoding and
//! decoding messages between them. This crate implements the server half of
//! that exchange for exactly one round trip per connection:
//!
//! ```txt
//!        -> request  ->
//! client                server::decode
//!        <- response <-
//!                       server::encode
//! ```
//!
//! [`server::decode`] consumes a connection's byte stream and produces a
//! parsed [`server::Request`]; [`server::encode`] turns a
//! [`server::Response`] into the exact bytes to write back. Bodies are
//! delimited by `Content-Length` only: no keep-alive, no chunked transfer
//! encoding, no pipelining. [`server::accept`] ties the two together into a
//! single request/response exchange over a connection.
//!
//! See also [`async-std`](https://docs.rs/async-std).

#![forbid(unsafe_code, future_incompatible, rust_2018_idioms)]
#![deny(missing_debug_implementations, nonstandard_style)]
#![warn(missing_docs, unreachable_pub)]

pub use body::Body;
pub use error::{Error, Result};
pub use headers::Headers;

mod body;
mod error;
mod headers;

pub mod server;

/// The header that delimits a message body. Lookups are exact-case.
pub(crate) const CONTENT_LENGTH: &str = "Content-Length";
