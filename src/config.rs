use clap::Parser;
use tracing::Level;

/// Command-line and environment configuration for the item service.
#[derive(Debug, Parser)]
#[command(name = "item-service")]
#[command(about = "CRUD service for items backed by an in-memory repository", long_about = None)]
pub struct ServiceConfig {
    /// Address to bind the HTTP listener to
    #[arg(long, env = "ITEM_SERVICE_BIND", default_value = "127.0.0.1:5000")]
    pub bind: String,

    /// Maximum log level: trace, debug, info, warn, error
    #[arg(long, env = "ITEM_SERVICE_LOG", default_value = "info")]
    pub log_level: Level,
}
