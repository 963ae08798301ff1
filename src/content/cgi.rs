//! CGI program invocation
//!
//! A dynamic request runs the resolved program as a child process. The
//! request arguments reach it through `QUERY_STRING`, set on that child's
//! command only; the server's own environment is never touched. Everything
//! the child writes to stdout is relayed to the client.

use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Stdio};

use anyhow::{Context, Result};
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::process::Command;

use crate::http::response::Response;
use crate::http::writer::{Framing, ResponseWriter};

/// Environment variable carrying the argument string to the CGI program.
pub const QUERY_STRING: &str = "QUERY_STRING";

/// One run of a CGI program for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CgiInvocation {
    /// Program to execute
    pub program: PathBuf,
    /// Everything after the first `?` of the request URI
    pub query: String,
}

impl CgiInvocation {
    pub fn new(program: impl Into<PathBuf>, query: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            query: query.into(),
        }
    }

    /// The command to spawn: no arguments, the inherited environment plus
    /// `QUERY_STRING`, stdout piped back to us.
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.env(QUERY_STRING, &self.query)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .kill_on_drop(true);
        cmd
    }

    /// Spawns the program, relays its stdout into `out` and waits for it.
    ///
    /// Returns the number of bytes relayed and the exit status. If relaying
    /// fails the child is killed and reaped before the error is returned.
    pub async fn run<W>(&self, out: &mut W) -> Result<(u64, ExitStatus)>
    where
        W: AsyncWrite + Unpin,
    {
        let mut child = self
            .command()
            .spawn()
            .with_context(|| format!("Failed to spawn {}", self.program.display()))?;

        let mut stdout = child
            .stdout
            .take()
            .context("CGI stdout was not captured")?;

        let relayed = match tokio::io::copy(&mut stdout, out).await {
            Ok(n) => n,
            Err(e) => {
                let _ = child.kill().await;
                return Err(e)
                    .with_context(|| format!("Failed to relay output of {}", self.program.display()));
            }
        };
        out.flush().await?;

        let status = child
            .wait()
            .await
            .with_context(|| format!("Failed to wait for {}", self.program.display()))?;

        Ok((relayed, status))
    }
}

/// Answers a dynamic request with the output of the program at `path`.
///
/// Only the status line and `Server` header come from here; the program is
/// responsible for the remaining headers, the blank line and the body.
pub async fn serve_dynamic<W>(stream: &mut W, path: &Path, args: &str) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    ResponseWriter::with_framing(&Response::cgi_preamble(), Framing::Preamble)
        .write_to_stream(stream)
        .await?;

    let invocation = CgiInvocation::new(path, args);
    let (bytes, status) = invocation.run(stream).await?;

    if status.success() {
        tracing::debug!(program = %path.display(), bytes, "CGI program finished");
    } else {
        tracing::warn!(
            program = %path.display(),
            bytes,
            status = %status,
            "CGI program exited unsuccessfully"
        );
    }

    Ok(())
}
