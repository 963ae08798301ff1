use clap::Parser;

use tiny::echo::EchoHandler;
use tiny::server::listener;

/// Iterative line echo server.
#[derive(Debug, Parser)]
#[command(name = "echoserver")]
struct Cli {
    /// Port to listen on
    port: u16,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], cli.port));
    listener::run(addr, EchoHandler).await
}
