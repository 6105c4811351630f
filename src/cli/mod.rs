// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod chat;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::pipeline::AnswerPipeline;

/// Websage CLI
#[derive(Parser, Debug)]
#[command(name = "websage")]
#[command(version = "0.1.0")]
#[command(about = "Search-grounded question answering", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Answer a single question and exit
    Ask {
        /// The question to answer
        question: String,
    },

    /// Interactive chat session
    Chat,
}

/// Execute CLI command
pub async fn execute(cli: Cli, config: Config) -> Result<()> {
    let pipeline = AnswerPipeline::from_config(&config);

    match cli.command {
        Commands::Ask { question } => {
            println!("Fetching web results...");
            let answer = pipeline.answer(&question).await;
            println!("{}", answer);
            Ok(())
        }
        Commands::Chat => chat::run(pipeline).await,
    }
}
