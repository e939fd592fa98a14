use std::fmt;

use async_trait::async_trait;
use ts_core::{Result, SummarizationModel, SummaryRequest, SummaryResult};

/// Offline extractive backend: keeps the leading sentences of the input.
/// Lengths are counted in whitespace separated words.
pub struct LeadModel;

impl fmt::Debug for LeadModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LeadModel").finish()
    }
}

impl LeadModel {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LeadModel {
    fn default() -> Self {
        Self::new()
    }
}

fn ends_sentence(word: &str) -> bool {
    word.trim_end_matches(|c: char| c == '"' || c == '\'' || c == ')')
        .ends_with(|c: char| c == '.' || c == '!' || c == '?')
}

/// Takes at most `max` words, then cuts back to the last sentence end that
/// still leaves at least `min` words.
fn lead_summary(text: &str, min: usize, max: usize) -> String {
    let words: Vec<&str> = text.split_whitespace().take(max).collect();
    let cut = words
        .iter()
        .enumerate()
        .rev()
        .find(|(i, word)| i + 1 >= min && ends_sentence(word))
        .map(|(i, _)| i + 1)
        .unwrap_or(words.len());

    words[..cut].join(" ")
}

#[async_trait]
impl SummarizationModel for LeadModel {
    fn name(&self) -> &str {
        "Lead"
    }

    async fn summarize(&self, request: &SummaryRequest) -> Result<Vec<SummaryResult>> {
        let params = request.params();
        let summary = lead_summary(
            request.text(),
            params.min_length as usize,
            params.max_length as usize,
        );
        tracing::debug!("Generated lead summary: {}", summary);
        Ok(vec![SummaryResult::new(summary)])
    }
}
