use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::response::Response;

const HTTP_VERSION: &str = "HTTP/1.0";

/// How much of the response the writer puts on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Framing {
    /// Status line, headers, blank line and body
    Full,
    /// Status line, headers and blank line; the body follows separately
    Head,
    /// Status line and headers only; someone else finishes the head
    Preamble,
}

fn serialize_response(resp: &Response, framing: Framing) -> Vec<u8> {
    let mut buf = Vec::new();

    // Status line
    let status_line = format!(
        "{} {} {}\r\n",
        HTTP_VERSION,
        resp.status.as_u16(),
        resp.status.reason_phrase()
    );
    buf.extend_from_slice(status_line.as_bytes());

    // Headers
    for (k, v) in &resp.headers {
        buf.extend_from_slice(k.as_bytes());
        buf.extend_from_slice(b": ");
        buf.extend_from_slice(v.as_bytes());
        buf.extend_from_slice(b"\r\n");
    }

    if framing == Framing::Preamble {
        return buf;
    }

    // Header/body separator
    buf.extend_from_slice(b"\r\n");

    if framing == Framing::Full {
        buf.extend_from_slice(&resp.body);
    }

    buf
}

/// A response serialized up front and written out in one pass.
pub struct ResponseWriter {
    buffer: Vec<u8>,
    written: usize,
}

impl ResponseWriter {
    pub fn new(response: &Response) -> Self {
        Self::with_framing(response, Framing::Full)
    }

    pub fn with_framing(response: &Response, framing: Framing) -> Self {
        Self {
            buffer: serialize_response(response, framing),
            written: 0,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    pub async fn write_to_stream<W>(&mut self, stream: &mut W) -> anyhow::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        while self.written < self.buffer.len() {
            let n = stream.write(&self.buffer[self.written..]).await?;

            if n == 0 {
                return Err(anyhow::anyhow!("connection closed while writing"));
            }

            self.written += n;
        }

        stream.flush().await?;
        Ok(())
    }
}
