//! Process a single HTTP exchange on the server.

use std::future::Future;

use futures_lite::io::{AsyncRead, AsyncWrite, AsyncWriteExt};
use log::trace;

use crate::{Error, Result};

mod body_reader;
mod decode;
mod encode;

pub use body_reader::BodyReader;
pub use decode::{decode, Request};
pub use encode::{encode, Response};

/// Handle one request/response exchange on an incoming connection.
///
/// Decodes a single request from `reader`, passes it to `endpoint`, encodes
/// the returned [`Response`] and writes it to `writer` in a single call.
/// The writer is closed on every exit path, parse and endpoint failures
/// included, and the error still propagates to the caller afterwards.
///
/// A connection that closes before sending any bytes completes with
/// `Ok(())` without invoking the endpoint.
///
/// No timeouts are applied anywhere: a peer that stalls mid-request, or
/// declares a `Content-Length` larger than it sends, blocks this call until
/// the transport itself gives up. Timeouts belong to the dispatcher that
/// owns the connection.
pub async fn accept<R, W, F, Fut>(reader: R, mut writer: W, endpoint: F) -> Result<()>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
    F: Fn(Request<R>) -> Fut,
    Fut: Future<Output = Result<Response>>,
{
    let result = respond(reader, &mut writer, endpoint).await;

    // Release the connection no matter how the exchange went.
    match writer.close().await {
        Ok(()) => result,
        Err(err) => result.and(Err(Error::StreamWrite(err))),
    }
}

async fn respond<R, W, F, Fut>(reader: R, writer: &mut W, endpoint: F) -> Result<()>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
    F: Fn(Request<R>) -> Fut,
    Fut: Future<Output = Result<Response>>,
{
    let req = match decode(reader).await? {
        Some(req) => req,
        None => {
            trace!("connection closed before a request arrived");
            return Ok(());
        }
    };

    let res = endpoint(req).await?;
    let bytes = encode(res).await?;

    writer.write_all(&bytes).await.map_err(Error::StreamWrite)?;
    writer.flush().await.map_err(Error::StreamWrite)?;
    Ok(())
}
