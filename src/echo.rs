//! Line echo server and client
//!
//! The server side runs on the same iterative accept loop as the web
//! server: one client at a time, every line sent back unchanged until the
//! client closes its end.

use anyhow::Result;
use tokio::io::{
    AsyncBufRead, AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader,
};
use tokio::net::TcpStream;

use crate::server::Handler;

#[derive(Debug, Clone, Copy, Default)]
pub struct EchoHandler;

impl Handler for EchoHandler {
    async fn handle(&self, stream: &mut TcpStream) -> Result<()> {
        echo(stream).await.map(|_| ())
    }
}

/// Writes every line read from `stream` back to it until end of stream.
///
/// Returns the number of bytes echoed.
pub async fn echo<S>(stream: &mut S) -> Result<u64>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let mut reader = BufReader::new(stream);
    let mut line = Vec::new();
    let mut total = 0u64;

    loop {
        line.clear();
        let n = reader.read_until(b'\n', &mut line).await?;
        if n == 0 {
            break;
        }

        tracing::info!(bytes = n, "Server received line");
        reader.get_mut().write_all(&line).await?;
        total += n as u64;
    }

    reader.get_mut().flush().await?;
    Ok(total)
}

/// Sends each line of `input` to the server and copies the echoed line
/// to `output`.
pub async fn relay_lines<I, S, O>(mut input: I, stream: &mut S, output: &mut O) -> Result<()>
where
    I: AsyncBufRead + Unpin,
    S: AsyncRead + AsyncWrite + Unpin,
    O: AsyncWrite + Unpin,
{
    let mut server = BufReader::new(stream);
    let mut line = String::new();
    let mut echoed = Vec::new();

    loop {
        line.clear();
        if input.read_line(&mut line).await? == 0 {
            break;
        }

        server.get_mut().write_all(line.as_bytes()).await?;

        echoed.clear();
        if server.read_until(b'\n', &mut echoed).await? == 0 {
            anyhow::bail!("server closed the connection");
        }

        output.write_all(&echoed).await?;
        output.flush().await?;
    }

    Ok(())
}
