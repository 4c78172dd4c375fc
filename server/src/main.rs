use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use todo_core::SystemClock;
use todo_server::{build_store, telemetry, ServerConfig};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    telemetry::init(&config.log_filter);

    let addr = config.addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    let store = build_store(config.environment, Arc::new(SystemClock));

    info!(%addr, environment = ?config.environment, "listening");
    todo_server::run(listener, store).await.context("server error")
}
