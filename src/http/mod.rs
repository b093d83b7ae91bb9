//! HTTP protocol implementation.
//!
//! A narrow HTTP/1.1 subset: one request per connection, no keep-alive,
//! no chunked transfer.
//!
//! # Architecture
//!
//! - **`connection`**: per-connection handler (receive, parse, dispatch, respond, close)
//! - **`parser`**: parses an incoming request from a byte buffer
//! - **`request`**: HTTP request representation
//! - **`response`**: HTTP response representation with builder pattern
//! - **`writer`**: serializes and writes responses to the client
//! - **`mime`**: content-type resolution from file extensions
//!
//! # Connection flow
//!
//! ```text
//! raw bytes → parser → Request → routes::dispatch → Response → writer → close
//! ```
//!
//! Requests that never reach dispatch (oversized, malformed request line) are
//! answered directly by the connection layer with 414 or 400.

pub mod request;
pub mod response;
pub mod parser;
pub mod connection;
pub mod writer;
pub mod mime;
