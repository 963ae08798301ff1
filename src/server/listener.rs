use std::net::SocketAddr;

use anyhow::Context;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::server::Handler;

/// Binds `addr` and serves connections forever.
pub async fn run<H: Handler>(addr: SocketAddr, handler: H) -> anyhow::Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Listening on {}", addr);

    serve(listener, handler).await
}

/// Accept loop over an already bound listener.
pub async fn serve<H: Handler>(listener: TcpListener, handler: H) -> anyhow::Result<()> {
    loop {
        info!("Waiting for client requests...");
        let (mut socket, peer) = listener.accept().await.context("accept failed")?;
        info!(host = %peer.ip(), port = peer.port(), "Accepted connection");

        if let Err(e) = handler.handle(&mut socket).await {
            error!(host = %peer.ip(), port = peer.port(), "Connection error: {:#}", e);
        }

        // The peer may already be gone
        let _ = socket.shutdown().await;
        drop(socket);
        info!(host = %peer.ip(), port = peer.port(), "Closed connection");
    }
}
