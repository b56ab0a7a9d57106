use crate::http::request::{Method, Request};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The buffer does not yet hold a complete request; read more bytes.
    Incomplete,
    /// The header block is not valid UTF-8.
    InvalidUtf8,
    /// The request line is missing its method or path token.
    MalformedRequestLine,
    /// The method token is not a known HTTP verb.
    UnknownMethod,
    /// A header line has no `name: value` separator.
    MalformedHeader,
    /// The Content-Length value is not a decimal byte count.
    InvalidContentLength,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::Incomplete => write!(f, "incomplete request"),
            ParseError::InvalidUtf8 => write!(f, "header block is not valid UTF-8"),
            ParseError::MalformedRequestLine => write!(f, "malformed request line"),
            ParseError::UnknownMethod => write!(f, "unknown request method"),
            ParseError::MalformedHeader => write!(f, "malformed header line"),
            ParseError::InvalidContentLength => write!(f, "invalid Content-Length value"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Parses one HTTP request out of `buf`, returning the request and the number
/// of bytes it consumed. `ParseError::Incomplete` means the buffer ends
/// before the header block or the announced body does.
pub fn parse_request(buf: &[u8]) -> Result<(Request, usize), ParseError> {
    // Look for the header/body separator
    let headers_end = find_headers_end(buf).ok_or(ParseError::Incomplete)?;
    let header_bytes = &buf[..headers_end];
    let body_bytes = &buf[headers_end + 4..];

    let headers_str = std::str::from_utf8(header_bytes).map_err(|_| ParseError::InvalidUtf8)?;

    let mut lines = headers_str.split("\r\n");

    // Request line: the first two whitespace-delimited tokens are the method
    // and the path. Anything after them (the protocol version) is ignored.
    let request_line = lines.next().ok_or(ParseError::MalformedRequestLine)?;
    let mut parts = request_line.split_whitespace();

    let method_str = parts.next().ok_or(ParseError::MalformedRequestLine)?;
    let path = parts.next().ok_or(ParseError::MalformedRequestLine)?;

    let method = Method::from_str(method_str).ok_or(ParseError::UnknownMethod)?;

    // Headers, keyed by lower-cased name
    let mut headers = HashMap::new();

    for line in lines {
        if line.is_empty() {
            continue;
        }

        let (key, value) = line.split_once(':').ok_or(ParseError::MalformedHeader)?;

        headers.insert(
            key.trim().to_ascii_lowercase(),
            value.trim().to_string(),
        );
    }

    // Body: exactly Content-Length bytes after the separator
    let content_length = headers
        .get("content-length")
        .map(|v| v.parse::<usize>().map_err(|_| ParseError::InvalidContentLength))
        .transpose()?
        .unwrap_or(0);

    if body_bytes.len() < content_length {
        return Err(ParseError::Incomplete);
    }

    let body = body_bytes[..content_length].to_vec();

    let request = Request {
        method,
        path: path.to_string(),
        headers,
        body,
    };

    let total_consumed = headers_end + 4 + content_length;
    Ok((request, total_consumed))
}

fn find_headers_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n")
}
