use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use anyhow::Context;
use bytes::{Buf, BytesMut};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite};
use tokio::time::timeout;
use tracing::{debug, info};

use crate::config::Config;
use crate::content::{serve_dynamic, serve_static};
use crate::http::error::ClientError;
use crate::http::parser::{ParseError, parse_http_request, request_method};
use crate::http::request::{Method, Request};
use crate::http::uri::{ContentKind, classify};
use crate::http::writer::ResponseWriter;

/// Owner read permission bit
const S_IRUSR: u32 = 0o400;
/// Owner execute permission bit
const S_IXUSR: u32 = 0o100;

/// One HTTP transaction over an accepted stream.
///
/// Reads a single request head, then answers it with a file, CGI output or
/// an error page. The stream is never reused for a second request.
pub struct Connection<'a, S> {
    stream: &'a mut S,
    buffer: BytesMut,
    config: &'a Config,
}

/// Outcome of reading the request head.
pub enum RequestHead {
    Complete(Request),
    /// The head is unusable and is answered with an error page
    Rejected(ClientError),
    /// The client hung up before finishing the head
    Closed,
}

/// What a request resolved to after classification and the file checks.
#[derive(Debug, PartialEq, Eq)]
pub enum Dispatch {
    Static { path: PathBuf, size: u64 },
    Dynamic { path: PathBuf, args: String },
    Error(ClientError),
}

impl<'a, S> Connection<'a, S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: &'a mut S, config: &'a Config) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(4096),
            config,
        }
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        let request = match self.read_request().await? {
            RequestHead::Complete(request) => request,
            RequestHead::Rejected(err) => return self.send_error(err).await,
            RequestHead::Closed => {
                debug!("Client closed the connection before the end of the request head");
                return Ok(());
            }
        };

        info!(
            method = request.method.as_str(),
            uri = %request.uri,
            version = %request.version,
            "Request received"
        );
        debug!(headers = ?request.headers, "Request headers");

        match route(&request, &self.config.doc_root).await? {
            Dispatch::Static { path, size } => {
                info!(path = %path.display(), size, "Serving static content");
                serve_static(&mut *self.stream, &path, size).await
            }
            Dispatch::Dynamic { path, args } => {
                info!(path = %path.display(), args = %args, "Serving dynamic content");
                serve_dynamic(&mut *self.stream, &path, &args).await
            }
            Dispatch::Error(err) => self.send_error(err).await,
        }
    }

    /// Reads until the blank line that ends the request head.
    pub async fn read_request(&mut self) -> anyhow::Result<RequestHead> {
        let limits = self.config.limits;

        loop {
            // Try parsing whatever we already have
            match parse_http_request(&self.buffer, limits.max_header_lines) {
                Ok((request, consumed)) => {
                    self.buffer.advance(consumed);
                    return Ok(RequestHead::Complete(request));
                }

                Err(ParseError::Incomplete) => {
                    // Need more data
                }

                Err(e) => return Ok(self.reject(e)),
            }

            if self.buffer.len() >= limits.max_head_bytes {
                return Ok(self.reject(ParseError::HeadTooLarge));
            }

            let n = timeout(limits.read_timeout, self.stream.read_buf(&mut self.buffer))
                .await
                .context("Timed out reading request head")??;

            if n == 0 {
                return Ok(RequestHead::Closed);
            }
        }
    }

    /// An unsupported method outranks an over-limit head: it is 501 no
    /// matter what follows the request line.
    fn reject(&self, err: ParseError) -> RequestHead {
        let client_error = match request_method(&self.buffer) {
            Some(Method::Other(method)) => ClientError::not_implemented(&method),
            _ => ClientError::bad_request(err.to_string()),
        };
        RequestHead::Rejected(client_error)
    }

    async fn send_error(&mut self, err: ClientError) -> anyhow::Result<()> {
        info!(
            status = err.status.as_u16(),
            cause = %err.cause,
            "Sending error response"
        );

        let response = err.into_response();
        ResponseWriter::new(&response)
            .write_to_stream(&mut *self.stream)
            .await
    }
}

/// Validates the request and decides how to answer it.
///
/// Checks run in a fixed order: method, URI form, existence, containment in
/// the document root, then file type and permission. A missing path is
/// always reported as 404. A URI not in origin form (`/...`) is answered
/// with 400 before any lookup, since appending it to the root would not name
/// a file under it.
pub async fn route(request: &Request, doc_root: &Path) -> anyhow::Result<Dispatch> {
    if request.method != Method::GET {
        return Ok(Dispatch::Error(ClientError::not_implemented(
            request.method.as_str(),
        )));
    }

    if !request.uri.starts_with('/') {
        return Ok(Dispatch::Error(ClientError::bad_request(request.uri.as_str())));
    }

    let target = classify(&request.uri, doc_root);
    let display = target.path.display().to_string();

    let metadata = match tokio::fs::metadata(&target.path).await {
        Ok(metadata) => metadata,
        Err(_) => return Ok(Dispatch::Error(ClientError::not_found(&display))),
    };

    if !inside_root(&target.path, doc_root).await? {
        return Ok(Dispatch::Error(ClientError::forbidden(&display)));
    }

    let mode = metadata.permissions().mode();

    match target.kind {
        ContentKind::Static => {
            if !metadata.is_file() || mode & S_IRUSR == 0 {
                return Ok(Dispatch::Error(ClientError::forbidden(&display)));
            }
            Ok(Dispatch::Static {
                path: target.path,
                size: metadata.len(),
            })
        }
        ContentKind::Dynamic => {
            if !metadata.is_file() || mode & S_IXUSR == 0 {
                return Ok(Dispatch::Error(ClientError::forbidden_cgi(&display)));
            }
            Ok(Dispatch::Dynamic {
                path: target.path,
                args: target.args,
            })
        }
    }
}

/// Whether an existing `path` resolves to somewhere under `doc_root`.
async fn inside_root(path: &Path, doc_root: &Path) -> anyhow::Result<bool> {
    let root = tokio::fs::canonicalize(doc_root)
        .await
        .with_context(|| format!("Failed to resolve document root {}", doc_root.display()))?;

    match tokio::fs::canonicalize(path).await {
        Ok(resolved) => Ok(resolved.starts_with(&root)),
        Err(_) => Ok(false),
    }
}
