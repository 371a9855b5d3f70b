//! Server startup with configuration loading

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::utils::error::Result;
use std::path::Path;
use tracing::{info, warn};

/// Default configuration file location
pub const DEFAULT_CONFIG_PATH: &str = "config/rolegate.yaml";

/// Load configuration from `path`, falling back to defaults when the file is
/// missing. Environment overrides are applied and the result is validated.
pub async fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();
    info!("Loading configuration file: {}", path.display());

    let config = if path.exists() {
        Config::from_file(path).await?
    } else {
        warn!(
            "Configuration file {} not found, using defaults",
            path.display()
        );
        Config::default()
    };

    let config = config.with_env_overrides()?;
    config.validate()?;
    Ok(config)
}

/// Run the server with configuration loaded from `path`
pub async fn run_server<P: AsRef<Path>>(path: P) -> Result<()> {
    let config = load_config(path).await?;
    serve(config).await
}

/// Run the server with an already loaded configuration
pub async fn serve(config: Config) -> Result<()> {
    info!("Starting {} v{}", crate::NAME, crate::VERSION);

    let server = HttpServer::new(&config)?;
    info!("Server starting at: http://{}", config.server().bind_address());
    info!("Routes:");
    info!("   GET  /health");
    info!("   GET  /dashboard/audit-log      OWNER");
    info!("   GET  /dashboard/driver-review  OWNER, STAFF");
    info!("   GET  /dashboard/history        OWNER, STAFF, DRIVER");

    server.start().await
}
