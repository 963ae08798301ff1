use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

/// Command line of the `tiny` web server.
#[derive(Debug, Clone, Parser)]
#[command(name = "tiny")]
#[command(about = "Iterative HTTP/1.0 server for static and CGI content")]
pub struct Cli {
    /// Port to listen on
    pub port: u16,
}

/// Bounds applied while reading a request head.
#[derive(Debug, Clone, Copy)]
pub struct RequestLimits {
    /// Header lines allowed after the request line
    pub max_header_lines: usize,
    /// Bytes allowed for the request line plus headers
    pub max_head_bytes: usize,
    /// How long a single read may block
    pub read_timeout: Duration,
}

impl Default for RequestLimits {
    fn default() -> Self {
        Self {
            max_header_lines: 100,
            max_head_bytes: 16 * 1024,
            read_timeout: Duration::from_secs(30),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    /// Prefix every resolved path is rooted at
    pub doc_root: PathBuf,
    pub limits: RequestLimits,
}

impl Config {
    pub fn new(port: u16) -> Self {
        Self {
            listen_addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, port)),
            doc_root: PathBuf::from("."),
            limits: RequestLimits::default(),
        }
    }

    pub fn with_doc_root(mut self, doc_root: impl Into<PathBuf>) -> Self {
        self.doc_root = doc_root.into();
        self
    }

    pub fn with_limits(mut self, limits: RequestLimits) -> Self {
        self.limits = limits;
        self
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config::new(cli.port)
    }
}
