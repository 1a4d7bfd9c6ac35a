// ABOUTME: Server binary for the starter REST API
// ABOUTME: Loads configuration, initializes logging, and serves the HTTP application
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.

//! # Starter API Server Binary
//!
//! Starts the REST API with the user service, the JSONPlaceholder todo
//! client, and structured logging configured from the environment.

use anyhow::Result;
use clap::Parser;
use starter_api::{
    config::environment::ServerConfig,
    context::ServerResources,
    external::{TodoClient, TodoClientConfig},
    logging,
    server::HttpServer,
    services::UserService,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

#[derive(Parser)]
#[command(name = "starter-api")]
#[command(about = "REST API starter - Todo proxying and User CRUD")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration from environment
    let mut config = ServerConfig::from_env()?;

    // Override port if specified
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    // Initialize production logging
    logging::init_from_env()?;

    info!("Starting Starter API");
    info!("{}", config.summary());

    let todo_client = TodoClient::new(TodoClientConfig {
        base_url: config.todo_api.base_url.clone(),
        timeout: Duration::from_secs(config.todo_api.timeout_secs),
    })?;

    let http_port = config.http_port;
    let resources = Arc::new(ServerResources::new(
        Arc::new(UserService::new()),
        Arc::new(todo_client),
        Arc::new(config),
    ));

    HttpServer::new(resources).run(http_port).await
}
