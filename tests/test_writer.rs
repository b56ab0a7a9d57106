use depot::http::encoding;
use depot::http::response::Response;
use depot::http::writer::serialize_response;

#[test]
fn test_serialize_plain_text_response() {
    let response = Response::plain_text("test");
    let bytes = serialize_response(&response);

    let want = b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 4\r\n\r\ntest";
    assert_eq!(bytes, want.to_vec());
}

#[test]
fn test_serialize_octet_stream_response() {
    let response = Response::octet_stream(b"test app".to_vec());
    let bytes = serialize_response(&response);

    let want =
        b"HTTP/1.1 200 OK\r\nContent-Type: application/octet-stream\r\nContent-Length: 8\r\n\r\ntest app";
    assert_eq!(bytes, want.to_vec());
}

#[test]
fn test_serialize_gzip_response() {
    let compressed = encoding::compress(b"test encode").unwrap();
    let response = Response::gzip_text(compressed.clone());
    let bytes = serialize_response(&response);

    let mut want = format!(
        "HTTP/1.1 200 OK\r\nContent-Encoding: gzip\r\nContent-Type: text/plain\r\nContent-Length: {}\r\n\r\n",
        compressed.len()
    )
    .into_bytes();
    want.extend_from_slice(&compressed);

    assert_eq!(bytes, want);
}

#[test]
fn test_serialize_created_response() {
    let response = Response::created(
        "application/octet-stream",
        "/files/test.txt",
        b"this is test".to_vec(),
    );
    let bytes = serialize_response(&response);

    let want = b"HTTP/1.1 201 Created\r\nContent-Type: application/octet-stream\r\nLocation: /files/test.txt\r\n\r\nthis is test";
    assert_eq!(bytes, want.to_vec());
}

#[test]
fn test_serialize_not_found_response() {
    let response = Response::not_found();
    let bytes = serialize_response(&response);

    assert_eq!(bytes, b"HTTP/1.1 404 Not Found\r\n\r\n".to_vec());
}

#[test]
fn test_serialize_method_not_allowed_response() {
    let response = Response::method_not_allowed();
    let bytes = serialize_response(&response);

    assert_eq!(
        bytes,
        b"HTTP/1.1 405 Method Not Allowed\r\nAllow: GET, POST\r\n\r\n".to_vec()
    );
}

#[test]
fn test_serialize_internal_error_response() {
    let response = Response::internal_error();
    let bytes = serialize_response(&response);

    assert_eq!(bytes, b"HTTP/1.1 500 Internal Server Error\r\n\r\n".to_vec());
}

#[tokio::test]
async fn test_response_writer_sends_full_response() {
    use tokio::io::AsyncReadExt;
    use tokio::net::{TcpListener, TcpStream};

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let response = Response::plain_text("hello");
        let mut writer = depot::http::writer::ResponseWriter::new(&response);
        writer.write_to_stream(&mut socket).await.unwrap();
    });

    let mut client = TcpStream::connect(addr).await.unwrap();
    let mut received = Vec::new();
    client.read_to_end(&mut received).await.unwrap();
    server.await.unwrap();

    let want = b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 5\r\n\r\nhello";
    assert_eq!(received, want.to_vec());
}
