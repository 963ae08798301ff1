//! Connection accept loop and the handlers it drives.
//!
//! The loop in [`listener`] is strictly iterative: a connection is handed to
//! a [`Handler`], awaited to completion, and closed before the next one is
//! accepted.

pub mod listener;

use std::future::Future;

use tokio::net::TcpStream;

use crate::config::Config;
use crate::http::connection::Connection;

/// Serves one accepted connection.
///
/// The accept loop owns the stream and closes it once `handle` returns,
/// whether it succeeded or not.
pub trait Handler {
    fn handle(&self, stream: &mut TcpStream) -> impl Future<Output = anyhow::Result<()>> + Send;
}

/// Runs one HTTP transaction per connection.
#[derive(Debug, Clone)]
pub struct HttpHandler {
    config: Config,
}

impl HttpHandler {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

impl Handler for HttpHandler {
    async fn handle(&self, stream: &mut TcpStream) -> anyhow::Result<()> {
        Connection::new(stream, &self.config).run().await
    }
}
