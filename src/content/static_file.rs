//! Static file transfer.

use std::path::Path;

use anyhow::{Context, Result};
use tokio::io::{AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::http::mime::content_type_for;
use crate::http::response::Response;
use crate::http::writer::{Framing, ResponseWriter};

/// Sends `path` with a head announcing `size` bytes.
///
/// `size` comes from the metadata lookup done before dispatch. The body is
/// copied in bounded chunks and stops after exactly `size` bytes, so the
/// framing stays correct if the file grows in the meantime.
pub async fn serve_static<W>(stream: &mut W, path: &Path, size: u64) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    let content_type = content_type_for(path);
    let head = Response::static_head(content_type, size);

    let file = tokio::fs::File::open(path)
        .await
        .with_context(|| format!("Failed to open {}", path.display()))?;

    ResponseWriter::with_framing(&head, Framing::Head)
        .write_to_stream(stream)
        .await?;

    tracing::debug!(
        path = %path.display(),
        content_type,
        size,
        "Response headers sent"
    );

    let sent = tokio::io::copy(&mut file.take(size), stream)
        .await
        .with_context(|| format!("Failed to send {}", path.display()))?;
    stream.flush().await?;

    if sent < size {
        anyhow::bail!(
            "{} shrank while sending: {} of {} bytes",
            path.display(),
            sent,
            size
        );
    }

    Ok(())
}
