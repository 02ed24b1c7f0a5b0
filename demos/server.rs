use async_std::net::{TcpListener, TcpStream};
use async_std::prelude::*;
use async_std::task;
use oneshot_h1::server::{accept, Response};

fn main() -> std::io::Result<()> {
    task::block_on(async {
        let listener = TcpListener::bind(("127.0.0.1", 8080)).await?;
        println!("listening on {}", listener.local_addr()?);
        let mut incoming = listener.incoming();

        while let Some(stream) = incoming.next().await {
            let stream = stream?;
            task::spawn(async move {
                if let Err(err) = handle(stream).await {
                    eprintln!("connection error: {}", err);
                }
            });
        }
        Ok(())
    })
}

async fn handle(stream: TcpStream) -> oneshot_h1::Result<()> {
    let (reader, writer) = (&stream, &stream);
    accept(reader, writer, |mut req| async move {
        let body = req.body_string().await?;
        let mut res = Response::new(req.protocol(), "200 OK");
        res.append_header("Content-Type", "text/plain");
        res.set_body(format!("hello, you sent {} body bytes\n", body.len()));
        Ok(res)
    })
    .await
}
