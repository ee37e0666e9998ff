use std::net::SocketAddr;
use std::sync::Arc;

use chord_kv::node::engine::DhtNode;
use chord_kv::node::handlers;
use chord_kv::rpc::HttpPeerClient;

fn parse_args(args: &[String]) -> anyhow::Result<(SocketAddr, Vec<String>)> {
    let mut bind_addr: Option<SocketAddr> = None;
    let mut peer_addrs: Vec<String> = vec![];

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" => {
                let value = args
                    .get(i + 1)
                    .ok_or_else(|| anyhow::anyhow!("--bind requires a value"))?;
                bind_addr = Some(value.parse()?);
                i += 2;
            }
            "--peer" => {
                let value = args
                    .get(i + 1)
                    .ok_or_else(|| anyhow::anyhow!("--peer requires a value"))?;
                peer_addrs.push(value.clone());
                i += 2;
            }
            _ => {
                i += 1;
            }
        }
    }

    let bind_addr = bind_addr.ok_or_else(|| anyhow::anyhow!("--bind is required"))?;
    Ok((bind_addr, peer_addrs))
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} --bind <addr:port> [--peer <addr:port>]...", program);
    eprintln!("Example: {} --bind 127.0.0.1:3000", program);
    eprintln!(
        "Example: {} --bind 127.0.0.1:3001 --peer 127.0.0.1:3000",
        program
    );
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let (bind_addr, mut peer_addrs) = match parse_args(&args) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("{}", e);
            print_usage(&args[0]);
            std::process::exit(1);
        }
    };
    let local_addr = bind_addr.to_string();

    let node = Arc::new(DhtNode::new(&local_addr, Arc::new(HttpPeerClient::new())));
    tracing::info!("Node {} at {}", node.local().id, local_addr);

    // Seed an initial ring when peers were given on the command line; the
    // control plane refreshes it later through POST /network.
    if !peer_addrs.is_empty() {
        peer_addrs.push(local_addr.clone());
        node.update_membership(&peer_addrs).await?;
    }

    let app = handlers::router(node);

    tracing::info!("HTTP server listening on {}", bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
