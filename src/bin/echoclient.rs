use anyhow::Context;
use clap::Parser;
use tokio::io::BufReader;
use tokio::net::TcpStream;

use tiny::echo::relay_lines;

/// Sends standard input to an echo server line by line.
#[derive(Debug, Parser)]
#[command(name = "echoclient")]
struct Cli {
    /// Server host name or address
    host: String,
    /// Server port
    port: u16,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    let mut stream = TcpStream::connect((cli.host.as_str(), cli.port))
        .await
        .with_context(|| format!("Failed to connect to {}:{}", cli.host, cli.port))?;
    tracing::debug!(host = %cli.host, port = cli.port, "Connected");

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();
    relay_lines(stdin, &mut stream, &mut stdout).await
}
