use clap::Parser;

use tiny::config::{Cli, Config};
use tiny::server::{self, HttpHandler};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Config::from(cli);

    tokio::select! {
        res = server::listener::run(cfg.listen_addr, HttpHandler::new(cfg.clone())) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
