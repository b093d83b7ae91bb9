use std::collections::HashMap;
use std::fmt;

/// HTTP request methods.
///
/// Only GET and POST are served. Any other token on the request line is kept
/// verbatim and answered 501 by the dispatcher (HEAD included) — an unknown
/// method is a routing outcome, not a parse error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    Get,
    /// POST - Store a file
    Post,
    /// Anything else, kept as received
    Other(String),
}

impl Method {
    pub fn parse(s: &str) -> Self {
        match s {
            "GET" => Method::Get,
            "POST" => Method::Post,
            other => Method::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => f.write_str("GET"),
            Method::Post => f.write_str("POST"),
            Method::Other(s) => f.write_str(s),
        }
    }
}

/// Represents a parsed HTTP request from a client.
///
/// The path is stored without its leading slash: `""` for `/`, `"echo/abc"`
/// for `/echo/abc`. Immutable once parsed; discarded when the connection
/// closes.
#[derive(Debug, Clone)]
pub struct Request {
    /// The HTTP method (GET, POST, or anything else)
    pub method: Method,
    /// The request target with the leading slash stripped
    pub path: String,
    /// Request headers as key-value pairs (only User-Agent is consulted)
    pub headers: HashMap<String, String>,
    /// Request body for POST requests
    pub body: Vec<u8>,
}

impl Request {
    /// Retrieves a header value by name.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key).map(|v| v.as_str())
    }

    /// The User-Agent header value, or `""` when the header is absent.
    pub fn user_agent(&self) -> &str {
        self.header("User-Agent").unwrap_or("")
    }
}
