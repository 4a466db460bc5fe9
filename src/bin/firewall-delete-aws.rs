// Copyright (c) 2025 - Cowboy AI, Inc.
//! Firewall Delete Worker (AWS)
//!
//! Listens for `firewall.delete.aws` requests and deletes the named EC2
//! security group, answering on `firewall.delete.aws.done` or
//! `firewall.delete.aws.error`.
//!
//! Run with: cargo run --bin firewall-delete-aws
//!
//! Environment:
//! - `NATS_URI` (or `NATS_URL`): NATS servers, comma separated
//! - `NATS_CLIENT_NAME`: client name reported to the server
//! - `NATS_CONNECT_TIMEOUT_SECS`: connection timeout
//! - `AWS_ENDPOINT_URL`: EC2 endpoint override (LocalStack)
//! - `RUST_LOG`: log filter

use anyhow::{Context, Result};
use firewall_delete_aws::adapters::{Ec2SecurityGroupDeleter, Ec2Settings};
use firewall_delete_aws::{Dispatcher, MessageProcessor, NatsClient, WorkerConfig};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Log filter from `RUST_LOG`, falling back to `info` when unset or invalid
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .init();

    let config = WorkerConfig::from_env().context("Failed to load configuration")?;
    info!("📋 Configuration loaded:");
    info!("  - NATS servers: {:?}", config.nats.servers);
    info!("  - Client name: {}", config.nats.name);
    if let Some(endpoint) = &config.aws_endpoint_url {
        info!("  - EC2 endpoint: {}", endpoint);
    }

    let client = NatsClient::new(&config.nats)
        .await
        .context("Failed to connect to NATS")?;

    let deleter = Ec2SecurityGroupDeleter::new(Ec2Settings {
        endpoint_url: config.aws_endpoint_url.clone(),
    });
    let dispatcher = Arc::new(Dispatcher::new(
        Arc::new(client.clone()),
        Arc::new(deleter),
    ));
    let subject = dispatcher.subjects().request.clone();

    let processor = MessageProcessor::new(client.clone());
    let subscription = processor
        .run_handler(dispatcher)
        .await
        .with_context(|| format!("Failed to subscribe to {subject}"))?;

    info!("listening for {}", subject);

    tokio::select! {
        result = subscription => {
            if let Err(e) = result {
                warn!("Subscription task failed: {}", e);
            }
            warn!("⚠️ Message stream ended unexpectedly");
        }
        signal = tokio::signal::ctrl_c() => {
            signal.context("Failed to listen for shutdown signal")?;
            info!("Shutdown requested");
        }
    }

    client.flush().await.context("Failed to flush NATS connection")?;
    Ok(())
}
