// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::{Context, Result};
use clap::Parser;
use websage::cli::{self, Cli};
use websage::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Initialize tracing subscriber for logging
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    // Missing credentials abort startup; they are never a runtime failure
    let config = Config::from_env().context("loading configuration")?;
    config.validate().context("validating configuration")?;

    let cli = Cli::parse();
    cli::execute(cli, config).await
}
