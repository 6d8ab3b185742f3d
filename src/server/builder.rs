//! Server entry point

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::utils::error::Result;
use tracing::info;

/// Build the server from `config` and serve until shutdown
pub async fn run_server(config: Config) -> Result<()> {
    info!("Starting EZTest access service v{}", env!("CARGO_PKG_VERSION"));

    let server = HttpServer::new(&config).await?;
    info!("Server starting at: http://{}", config.server().address());
    info!("   GET  /health");
    info!("   GET  /api/roles");
    info!("   GET  /api/roles/{{keyword}}/privileges");
    info!("   GET  /api/access/{{module}}/{{action}}");

    server.start().await
}
