// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Interactive chat surface
//!
//! One free-text question in, search results plus one answer out. Only the
//! latest turn is retained; each new question clears the prior exchange.

use std::io::{self, Write};

use anyhow::Result;

use crate::pipeline::{AnswerPipeline, Conversation};

/// Run the interactive chat loop until EOF or an exit command
pub async fn run(pipeline: AnswerPipeline) -> Result<()> {
    println!("Type a question, or \"exit\" to quit.");

    let mut conversation = Conversation::default();
    let stdin = io::stdin();

    loop {
        print!("You: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            break; // EOF
        }

        let query = line.trim();
        if query.is_empty() {
            println!("Please enter a question.");
            continue;
        }
        if query.eq_ignore_ascii_case("exit") || query.eq_ignore_ascii_case("quit") {
            break;
        }

        println!("Fetching web results...");
        conversation = pipeline.answer_turn(conversation, query).await;

        if let Some(turn) = conversation.latest() {
            if !turn.results.is_empty() {
                println!("Here are some relevant search results:");
                for (idx, result) in turn.results.iter().enumerate() {
                    println!("{}. {} ({})", idx + 1, result.title, result.link);
                }
            }
            println!("AI Assistant: {}", turn.answer);
        }
    }

    Ok(())
}
