use bytes::BytesMut;
use std::sync::Arc;
use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;

use crate::config::Config;
use crate::http::parser::{parse_request, ParseError};
use crate::http::request::Request;
use crate::http::response::{Response, StatusCode};
use crate::http::writer::ResponseWriter;
use crate::routes;

/// Cap on the buffered request. A request still incomplete at this size is
/// answered 414 and never reaches dispatch.
const MAX_REQUEST_BYTES: usize = 8192;

pub struct Connection {
    stream: TcpStream,
    buffer: BytesMut,
    cfg: Arc<Config>,
}

enum ReadOutcome {
    /// A full request was parsed.
    Request(Request),
    /// Parsing failed or the cap was hit; answer with this status and close.
    Reject(StatusCode),
    /// Client went away before sending a full request.
    Closed,
}

impl Connection {
    pub fn new(stream: TcpStream, cfg: Arc<Config>) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(4096),
            cfg,
        }
    }

    /// Runs the connection to completion: one request, one response, close.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        let response = match self.read_request().await? {
            ReadOutcome::Request(req) => routes::dispatch(&req, &self.cfg).await,
            ReadOutcome::Reject(status) => Response::empty(status),
            ReadOutcome::Closed => return Ok(()),
        };

        let mut writer = ResponseWriter::new(&response);
        writer.write_to_stream(&mut self.stream).await?;

        Ok(())
    }

    async fn read_request(&mut self) -> anyhow::Result<ReadOutcome> {
        loop {
            // Try parsing whatever we already have
            match parse_request(&self.buffer) {
                Ok(request) => return Ok(ReadOutcome::Request(request)),

                Err(ParseError::Incomplete) => {
                    // Need more data → fall through to read
                }

                Err(ParseError::BadRequest) => {
                    return Ok(ReadOutcome::Reject(StatusCode::BadRequest));
                }
            }

            if self.buffer.len() >= MAX_REQUEST_BYTES {
                tracing::warn!("request exceeded {} bytes, rejecting", MAX_REQUEST_BYTES);
                return Ok(ReadOutcome::Reject(StatusCode::UriTooLong));
            }

            let n = self.stream.read_buf(&mut self.buffer).await?;

            if n == 0 {
                // Client closed connection
                return Ok(ReadOutcome::Closed);
            }
        }
    }
}
