mod config;

use std::sync::Arc;

use clap::Parser;
use item_repository::{http, InMemoryRepository, Item, LogSink, RecordHandler, ITEM_LABEL};

use crate::config::ServiceConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServiceConfig::parse();

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    // The repository is owned here and shared with the handler; nothing else
    // reaches it.
    let repo = Arc::new(InMemoryRepository::<Item>::new(ITEM_LABEL));
    let handler = RecordHandler::new(repo).with_sink(Arc::new(LogSink::new()));

    tracing::info!(bind = %config.bind, "starting item service");
    http::serve(handler, &config.bind).await?;

    Ok(())
}
