use bytes::BytesMut;
use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;

use crate::http::parser::{ParseError, parse_request};
use crate::http::request::Request;
use crate::http::writer::ResponseWriter;
use crate::router;

/// Upper bound on one buffered request (request line + headers + body).
const MAX_REQUEST_BYTES: usize = 64 * 1024;

pub struct Connection {
    stream: TcpStream,
    buffer: BytesMut,
    directory: String,
}

impl Connection {
    pub fn new(stream: TcpStream, directory: String) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(1024),
            directory,
        }
    }

    /// Serves exactly one request: read until a full request parses, dispatch
    /// it, write the response. The stream is dropped (closed) when the caller
    /// finishes with this connection, on success and on error alike.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        let request = match self.read_request().await? {
            Some(request) => request,
            // Peer closed before a complete request arrived
            None => return Ok(()),
        };

        let response = router::dispatch(&request, &self.directory).await;

        tracing::debug!(
            method = ?request.method,
            path = %request.path,
            status = response.status.as_u16(),
            "Handled request"
        );

        let mut writer = ResponseWriter::new(&response);
        writer.write_to_stream(&mut self.stream).await?;

        Ok(())
    }

    pub async fn read_request(&mut self) -> anyhow::Result<Option<Request>> {
        loop {
            // Try parsing whatever we already have
            match parse_request(&self.buffer) {
                Ok((request, _)) => {
                    return Ok(Some(request));
                }

                Err(ParseError::Incomplete) => {
                    // Need more data → fall through to read
                }

                Err(e) => {
                    // Malformed request → protocol error
                    return Err(anyhow::anyhow!("HTTP parse error: {e}"));
                }
            }

            if self.buffer.len() > MAX_REQUEST_BYTES {
                return Err(anyhow::anyhow!("request exceeds {MAX_REQUEST_BYTES} bytes"));
            }

            // Read more data
            let n = self.stream.read_buf(&mut self.buffer).await?;

            if n == 0 {
                // Client closed the connection
                return Ok(None);
            }
        }
    }
}
