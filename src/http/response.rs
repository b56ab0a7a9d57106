/// HTTP status codes emitted by the server.
///
/// The route handlers produce exactly these five:
/// - `Ok` (200): Request successful
/// - `Created` (201): File stored successfully
/// - `NotFound` (404): No matching route or file
/// - `MethodNotAllowed` (405): HTTP method not supported on the route
/// - `InternalServerError` (500): File could not be written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 201 Created
    Created,
    /// 404 Not Found
    NotFound,
    /// 405 Method Not Allowed
    MethodNotAllowed,
    /// 500 Internal Server Error
    InternalServerError,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use depot::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::Created => 201,
            StatusCode::NotFound => 404,
            StatusCode::MethodNotAllowed => 405,
            StatusCode::InternalServerError => 500,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use depot::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    /// assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
    /// ```
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::Created => "Created",
            StatusCode::NotFound => "Not Found",
            StatusCode::MethodNotAllowed => "Method Not Allowed",
            StatusCode::InternalServerError => "Internal Server Error",
        }
    }
}

/// Represents a complete HTTP response ready to be serialized.
///
/// Headers are kept in insertion order; the serializer writes them exactly
/// as listed, so each response shape controls its own wire layout.
#[derive(Debug)]
pub struct Response {
    /// The HTTP status code
    pub status: StatusCode,
    /// HTTP headers in the order they will be written
    pub headers: Vec<(String, String)>,
    /// Response body as bytes
    pub body: Vec<u8>,
}

/// Builder for constructing HTTP responses in a fluent style.
///
/// # Example
///
/// ```
/// # use depot::http::response::{ResponseBuilder, StatusCode};
/// let response = ResponseBuilder::new(StatusCode::Ok)
///     .header("Content-Type", "text/plain")
///     .body(b"hi".to_vec())
///     .build();
/// assert_eq!(response.header("Content-Type"), Some("text/plain"));
/// ```
pub struct ResponseBuilder {
    status: StatusCode,
    headers: Vec<(String, String)>,
    body: Vec<u8>,
}

impl ResponseBuilder {
    /// Creates a new response builder with the specified status code.
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Appends a header. Headers are written in the order they are added;
    /// nothing is injected behind the caller's back, so shapes that omit
    /// Content-Length (201, 404, 405, 500) simply never add it.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((key.into(), value.into()));
        self
    }

    /// Sets the response body.
    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }

    /// Builds the final Response.
    pub fn build(self) -> Response {
        Response {
            status: self.status,
            headers: self.headers,
            body: self.body,
        }
    }
}

impl Response {
    /// Retrieves a header value by name (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// 200 OK with a text/plain body and its byte count as Content-Length.
    pub fn plain_text(body: impl Into<Vec<u8>>) -> Self {
        let body = body.into();
        ResponseBuilder::new(StatusCode::Ok)
            .header("Content-Type", "text/plain")
            .header("Content-Length", body.len().to_string())
            .body(body)
            .build()
    }

    /// 200 OK with an application/octet-stream body (file downloads).
    pub fn octet_stream(body: impl Into<Vec<u8>>) -> Self {
        let body = body.into();
        ResponseBuilder::new(StatusCode::Ok)
            .header("Content-Type", "application/octet-stream")
            .header("Content-Length", body.len().to_string())
            .body(body)
            .build()
    }

    /// 200 OK carrying an already gzip-compressed text body. Content-Length
    /// counts the compressed bytes.
    pub fn gzip_text(compressed: Vec<u8>) -> Self {
        ResponseBuilder::new(StatusCode::Ok)
            .header("Content-Encoding", "gzip")
            .header("Content-Type", "text/plain")
            .header("Content-Length", compressed.len().to_string())
            .body(compressed)
            .build()
    }

    /// 201 Created for a stored file: echoes the request's content type,
    /// names the resolved file path in Location, and carries the stored
    /// bytes as the body. This shape has no Content-Length header; the
    /// closing connection delimits the body.
    pub fn created(content_type: &str, location: &str, body: Vec<u8>) -> Self {
        ResponseBuilder::new(StatusCode::Created)
            .header("Content-Type", content_type)
            .header("Location", location)
            .body(body)
            .build()
    }

    /// 404 Not Found: bare status line, no headers, no body.
    pub fn not_found() -> Self {
        ResponseBuilder::new(StatusCode::NotFound).build()
    }

    /// 405 Method Not Allowed with the Allow header naming the supported
    /// methods on the files route.
    pub fn method_not_allowed() -> Self {
        ResponseBuilder::new(StatusCode::MethodNotAllowed)
            .header("Allow", "GET, POST")
            .build()
    }

    /// 500 Internal Server Error: bare status line, no headers, no body.
    pub fn internal_error() -> Self {
        ResponseBuilder::new(StatusCode::InternalServerError).build()
    }
}
