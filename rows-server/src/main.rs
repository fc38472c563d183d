use anyhow::Result;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::{info, warn};

use rows_server::{cli::Cli, server::Server, store::RowStore};

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).with_target(false).try_init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let store = if cli.seed {
        info!("starting with demo rows");
        RowStore::seeded()
    } else {
        RowStore::new()
    };

    let listener = TcpListener::bind(cli.listen).await?;
    let server = Server::new(listener, store);
    let addr = server.local_addr()?;
    info!("rows server listening on {}", addr);

    if let Err(err) = server.run_until_ctrl_c().await {
        warn!("rows server exited with error: {err:?}");
        return Err(err);
    }

    Ok(())
}
