// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Llama instruction-format prompt construction
//!
//! The Llama instruct model family expects `[INST] ... [/INST]` markers with
//! an optional `<<SYS>> ... <</SYS>>` system block inside the first
//! instruction. Other formats (ChatML, Harmony) are not needed here; the
//! pipeline targets a single model family.

/// Fixed safety/behavior preamble embedded in every prompt
pub const SYSTEM_PREAMBLE: &str = "You are a helpful, respectful, and honest assistant. Always answer as helpfully as possible, while being safe. Your answers should not include any harmful, unethical, racist, sexist, toxic, dangerous, or illegal content. Please ensure that your responses are socially unbiased and positive in nature.\nIf a question does not make any sense, or is not factually coherent, explain why instead of answering something not correct. If you don't know the answer to a question, please don't share false information.";

/// Format the instruction prompt from the context block and the question
///
/// # Arguments
///
/// * `context` - Assembled search-result context block
/// * `query` - The user's question, embedded verbatim
///
/// # Returns
///
/// Formatted prompt string ready for model inference
pub fn build_prompt(context: &str, query: &str) -> String {
    format!(
        "<s>[INST] <<SYS>>\n{}\n<</SYS>>\n\n{}\n\nUser Question: {} [/INST]",
        SYSTEM_PREAMBLE, context, query
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_carries_instruction_markers() {
        let prompt = build_prompt("Search Results:\n", "what is rust?");
        assert!(prompt.starts_with("<s>[INST] <<SYS>>\n"));
        assert!(prompt.ends_with(" [/INST]"));
        assert!(prompt.contains("<</SYS>>"));
    }

    #[test]
    fn test_prompt_embeds_preamble_context_and_question() {
        let context = "Search Results:\nResult 1: a snippet\n";
        let prompt = build_prompt(context, "what is rust?");

        assert!(prompt.contains(SYSTEM_PREAMBLE));
        assert!(prompt.contains(context));
        assert!(prompt.contains("User Question: what is rust?"));
    }

    #[test]
    fn test_system_block_precedes_context() {
        let prompt = build_prompt("the context", "the question");
        let sys_end = prompt.find("<</SYS>>").unwrap();
        let ctx = prompt.find("the context").unwrap();
        assert!(sys_end < ctx);
    }
}
