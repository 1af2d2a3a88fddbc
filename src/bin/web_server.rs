use netflow_paths::web::server::{start_server, ServerConfig};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    let defaults = ServerConfig::default();
    let port = match args.get(1) {
        Some(raw) => raw.parse()?,
        None => defaults.port,
    };

    let config = ServerConfig { port, ..defaults };

    log::info!(
        "starting web server: port={} cors={} max_graphs={} max_vertices={}",
        config.port,
        config.enable_cors,
        config.max_graphs,
        config.max_vertices
    );

    start_server(config).await?;

    Ok(())
}
