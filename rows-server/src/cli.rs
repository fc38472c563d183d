use std::net::SocketAddr;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Serve an in-memory list of rows over a JSON REST API", long_about = None)]
pub struct Cli {
    /// Socket address the server should bind to. Use port 0 for an ephemeral port.
    #[arg(long, default_value = "127.0.0.1:3000")]
    pub listen: SocketAddr,

    /// Start with two demo rows instead of an empty list.
    #[arg(long)]
    pub seed: bool,
}
