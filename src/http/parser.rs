use crate::http::request::{Method, Request};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The header block has not fully arrived yet; the caller should read more.
    Incomplete,
    /// The request line is malformed beyond recovery (no space, no `/` target).
    /// The connection answers this with 400.
    BadRequest,
}

/// Parses a single HTTP/1.1 request from `buf`.
///
/// Every marker search is an explicit success/failure: a missing `\r\n\r\n`
/// separator is `Incomplete`, a request line without a space-slash target is
/// `BadRequest`. Nothing indexes past the buffer.
pub fn parse_request(buf: &[u8]) -> Result<Request, ParseError> {
    // Look for header/body separator
    let headers_end = find_headers_end(buf).ok_or(ParseError::Incomplete)?;
    let header_bytes = &buf[..headers_end];
    let body_bytes = &buf[headers_end + 4..];

    let headers_str = std::str::from_utf8(header_bytes)
        .map_err(|_| ParseError::BadRequest)?;

    let mut lines = headers_str.split("\r\n");

    let request_line = lines.next().ok_or(ParseError::BadRequest)?;
    let (method, path) = split_request_line(request_line)?;

    // Header lines that are not `Name: value` pairs are skipped, not
    // rejected; only User-Agent is consulted downstream.
    let mut headers = HashMap::new();
    for line in lines {
        if line.is_empty() {
            continue;
        }
        if let Some((key, value)) = line.split_once(':') {
            headers.insert(key.trim().to_string(), value.trim().to_string());
        }
    }

    // With Content-Length, wait for the full body; without it, the body is
    // whatever already follows the blank line.
    let content_length = headers
        .get("Content-Length")
        .and_then(|v| v.parse::<usize>().ok());

    let body = match content_length {
        Some(len) => {
            if body_bytes.len() < len {
                return Err(ParseError::Incomplete);
            }
            body_bytes[..len].to_vec()
        }
        None => body_bytes.to_vec(),
    };

    Ok(Request {
        method: Method::parse(method),
        path: path.to_string(),
        headers,
        body,
    })
}

/// Splits the request line into its method token and slash-stripped target.
///
/// `"GET /echo/abc HTTP/1.1"` → `("GET", "echo/abc")`; the HTTP version is
/// not inspected. The target is assumed to contain no spaces.
fn split_request_line(line: &str) -> Result<(&str, &str), ParseError> {
    let (method, rest) = line.split_once(' ').ok_or(ParseError::BadRequest)?;
    let target = rest.strip_prefix('/').ok_or(ParseError::BadRequest)?;
    let path = match target.split_once(' ') {
        Some((path, _version)) => path,
        None => target,
    };
    Ok((method, path))
}

fn find_headers_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4)
        .position(|w| w == b"\r\n\r\n")
}
