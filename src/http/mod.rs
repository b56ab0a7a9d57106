//! HTTP protocol implementation.
//!
//! This module implements the HTTP/1.1 subset this server speaks: one
//! request per connection, no keep-alive, no chunked transfer.
//!
//! # Architecture
//!
//! The HTTP layer is organized into several submodules:
//!
//! - **`connection`**: Per-connection handler driving the read/dispatch/write flow
//! - **`parser`**: Parses incoming HTTP requests from byte buffers
//! - **`request`**: HTTP request representation and header accessors
//! - **`response`**: HTTP response representation with builder pattern
//! - **`encoding`**: Gzip compression for negotiated response bodies
//! - **`writer`**: Serializes and writes HTTP responses to the client
//!
//! # Connection Lifecycle
//!
//! Each client connection is handled by exactly one task and closed exactly
//! once, whichever way the flow ends:
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Accumulate bytes until a full request parses
//!        └──────┬──────┘
//!               │ Request received
//!               ▼
//!        ┌──────────────────┐
//!        │   Dispatching    │ ← Route to a handler, build the response
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │     Writing      │ ← Send response to client
//!        └──────┬───────────┘
//!               │
//!               ▼
//!             Closed (always; responses with no Content-Length are
//!             delimited by this close)
//! ```
//!
//! # Example
//!
//! ```ignore
//! use depot::http::connection::Connection;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let listener = TcpListener::bind("0.0.0.0:4221").await?;
//!
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         tokio::spawn(async move {
//!             let mut conn = Connection::new(socket, String::new());
//!             if let Err(e) = conn.run().await {
//!                 eprintln!("Connection error: {}", e);
//!             }
//!         });
//!     }
//! }
//! ```

pub mod connection;
pub mod encoding;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
