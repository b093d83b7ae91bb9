/// HTTP status codes the server can produce.
///
/// - `Ok` (200): request successful
/// - `Created` (201): file stored
/// - `BadRequest` (400): malformed request line
/// - `NotFound` (404): file missing or unreadable
/// - `UriTooLong` (414): buffered request exceeded the receive cap
/// - `InternalServerError` (500): POST destination unwritable
/// - `NotImplemented` (501): unsupported method or POST route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 201 Created
    Created,
    /// 400 Bad Request
    BadRequest,
    /// 404 Not Found
    NotFound,
    /// 414 URI Too Long
    UriTooLong,
    /// 500 Internal Server Error
    InternalServerError,
    /// 501 Not Implemented
    NotImplemented,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::Created => 201,
            StatusCode::BadRequest => 400,
            StatusCode::NotFound => 404,
            StatusCode::UriTooLong => 414,
            StatusCode::InternalServerError => 500,
            StatusCode::NotImplemented => 501,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::Created => "Created",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::NotFound => "Not Found",
            StatusCode::UriTooLong => "URI Too Long",
            StatusCode::InternalServerError => "Internal Server Error",
            StatusCode::NotImplemented => "Not Implemented",
        }
    }
}

/// Represents a complete HTTP response ready to be sent to a client.
///
/// Headers are an ordered list so the serialized wire format is
/// deterministic: body-bearing responses carry `Content-Type` then
/// `Content-Length`, in that order. Canned error and ping responses carry no
/// headers at all — status line and blank line only.
#[derive(Debug)]
pub struct Response {
    /// The HTTP status code
    pub status: StatusCode,
    /// HTTP headers in serialization order
    pub headers: Vec<(String, String)>,
    /// Response body as bytes
    pub body: Vec<u8>,
}

/// Builder for constructing HTTP responses in a fluent style.
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

    /// Adds a header, replacing an earlier one of the same name.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();
        match self.headers.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.headers.push((key, value)),
        }
        self
    }

    /// Sets the response body. Content-Length is NOT added implicitly; the
    /// canned error responses must stay header-free.
    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }

    pub fn build(self) -> Response {
        Response {
            status: self.status,
            headers: self.headers,
            body: self.body,
        }
    }
}

impl Response {
    /// Status line and blank line only — the shape of the root ping and of
    /// every error response.
    pub fn empty(status: StatusCode) -> Self {
        ResponseBuilder::new(status).build()
    }

    /// 200 with a text/plain body and its byte length.
    pub fn plain_text(body: impl Into<Vec<u8>>) -> Self {
        let body = body.into();
        ResponseBuilder::new(StatusCode::Ok)
            .header("Content-Type", "text/plain")
            .header("Content-Length", body.len().to_string())
            .body(body)
            .build()
    }

    /// 200 carrying file contents under the given content type.
    pub fn file(body: Vec<u8>, content_type: &str) -> Self {
        let length = body.len().to_string();
        ResponseBuilder::new(StatusCode::Ok)
            .header("Content-Type", content_type)
            .header("Content-Length", length)
            .body(body)
            .build()
    }

    /// Retrieves a header value by name.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}
