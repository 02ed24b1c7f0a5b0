mod server_decode {
    use futures_lite::io::{AsyncReadExt, Cursor};
    use oneshot_h1::server::{decode, Request};
    use oneshot_h1::{Error, Result};
    use pretty_assertions::assert_eq;

    async fn decode_str(s: &str) -> Result<Option<Request<Cursor<Vec<u8>>>>> {
        decode(Cursor::new(s.replace('\n', "\r\n").into_bytes())).await
    }

    #[async_std::test]
    async fn post_with_body() -> Result<()> {
        let mut request = decode_str(
            "POST /api/v1/users HTTP/1.1\n\
             Host: example.com\n\
             Content-Length: 2\n\
             \n\
             hi",
        )
        .await?
        .unwrap();

        assert_eq!(request.method(), "POST");
        assert_eq!(request.path(), "/api/v1/users");
        assert_eq!(request.protocol(), "HTTP/1.1");
        assert_eq!(request.headers().len(), 2);
        assert_eq!(
            request.headers().get("Host"),
            Some(&["example.com".to_string()][..])
        );
        assert_eq!(
            request.headers().get("Content-Length"),
            Some(&["2".to_string()][..])
        );
        assert_eq!(request.body_string().await?, "hi");

        Ok(())
    }

    #[async_std::test]
    async fn repeated_headers_keep_their_arrival_order() -> Result<()> {
        let request = decode_str(
            "GET / HTTP/1.1\n\
             Another-Header: header value\n\
             Host: localhost:8080\n\
             Another-Header: other header value\n\
             \n",
        )
        .await?
        .unwrap();

        let values = request.headers().get("Another-Header").unwrap();
        assert_eq!(values.len(), 2);
        assert_eq!(values[0], "header value");
        assert_eq!(values[1], "other header value");

        Ok(())
    }

    #[async_std::test]
    async fn body_reads_exactly_the_declared_length() -> Result<()> {
        let mut request = decode_str(
            "POST /upload HTTP/1.1\n\
             Content-Length: 5\n\
             \n\
             helloTRAILING BYTES",
        )
        .await?
        .unwrap();

        let mut body = request.take_body().unwrap();
        assert_eq!(body.len(), 5);

        let mut contents = String::new();
        body.read_to_string(&mut contents).await.unwrap();
        assert_eq!(contents, "hello");
        assert_eq!(body.remaining(), 0);

        // whatever trails the declared length stays on the stream
        let mut rest = String::new();
        body.into_inner().read_to_string(&mut rest).await.unwrap();
        assert_eq!(rest, "TRAILING BYTES");

        Ok(())
    }

    #[async_std::test]
    async fn zero_content_length_is_a_present_empty_body() -> Result<()> {
        let mut request = decode_str(
            "POST / HTTP/1.1\n\
             Content-Length: 0\n\
             \n\
             leftover",
        )
        .await?
        .unwrap();

        let body = request.body_mut().unwrap();
        assert!(body.is_empty());
        assert_eq!(request.body_string().await?, "");

        Ok(())
    }

    #[async_std::test]
    async fn no_content_length_means_no_body() -> Result<()> {
        let mut request = decode_str(
            "GET / HTTP/1.1\n\
             Host: example.com\n\
             \n\
             these bytes are not a body",
        )
        .await?
        .unwrap();

        assert!(request.body_mut().is_none());
        assert_eq!(request.body_string().await?, "");

        Ok(())
    }

    #[async_std::test]
    async fn short_request_line_is_malformed() {
        let err = decode_str("GET /\n\n").await.unwrap_err();
        match err {
            Error::MalformedRequestLine(line) => assert_eq!(line, "GET /"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[async_std::test]
    async fn header_line_without_separator_is_malformed() {
        let err = decode_str(
            "GET / HTTP/1.1\n\
             Host example.com\n\
             \n",
        )
        .await
        .unwrap_err();
        match err {
            Error::MalformedHeaderLine(line) => assert_eq!(line, "Host example.com"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[async_std::test]
    async fn header_line_with_two_separators_is_malformed() {
        let err = decode_str(
            "GET / HTTP/1.1\n\
             X-Odd: a: b\n\
             \n",
        )
        .await
        .unwrap_err();
        assert!(matches!(err, Error::MalformedHeaderLine(_)));
    }

    #[async_std::test]
    async fn non_integer_content_length_is_invalid() {
        let err = decode_str(
            "POST / HTTP/1.1\n\
             Content-Length: five\n\
             \n",
        )
        .await
        .unwrap_err();
        match err {
            Error::InvalidContentLength(value) => assert_eq!(value, "five"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[async_std::test]
    async fn negative_content_length_is_invalid() {
        let err = decode_str(
            "POST / HTTP/1.1\n\
             Content-Length: -1\n\
             \n",
        )
        .await
        .unwrap_err();
        assert!(matches!(err, Error::InvalidContentLength(_)));
    }

    #[async_std::test]
    async fn first_content_length_value_wins() -> Result<()> {
        let mut request = decode_str(
            "POST / HTTP/1.1\n\
             Content-Length: 2\n\
             Content-Length: 9\n\
             \n\
             hi and then some",
        )
        .await?
        .unwrap();

        assert_eq!(request.body_string().await?, "hi");

        Ok(())
    }

    #[async_std::test]
    async fn immediately_closed_connection_is_no_request() -> Result<()> {
        assert!(decode_str("").await?.is_none());
        Ok(())
    }

    #[async_std::test]
    async fn eof_before_the_blank_line_is_a_stream_error() {
        let err = decode_str(
            "GET / HTTP/1.1\n\
             Host: example.com\n",
        )
        .await
        .unwrap_err();
        match err {
            Error::StreamRead(err) => {
                assert_eq!(err.kind(), std::io::ErrorKind::UnexpectedEof)
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
