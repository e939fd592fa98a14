use serde::{Deserialize, Serialize};

use crate::{Error, Result};

pub const DEFAULT_MAX_LENGTH: u32 = 130;
pub const DEFAULT_MIN_LENGTH: u32 = 30;

/// Generation bounds forwarded to the model with every request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryParams {
    pub max_length: u32,
    pub min_length: u32,
    pub deterministic: bool,
}

impl Default for SummaryParams {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
            min_length: DEFAULT_MIN_LENGTH,
            deterministic: true,
        }
    }
}

impl SummaryParams {
    pub fn new(max_length: u32, min_length: u32, deterministic: bool) -> Result<Self> {
        let params = Self {
            max_length,
            min_length,
            deterministic,
        };
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_length == 0 || self.min_length == 0 || self.min_length > self.max_length {
            return Err(Error::InvalidLengths {
                min: self.min_length,
                max: self.max_length,
            });
        }
        Ok(())
    }
}

/// A single summarization call. Text is kept exactly as the user typed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRequest {
    text: String,
    params: SummaryParams,
}

impl SummaryRequest {
    pub fn new(text: impl Into<String>, params: SummaryParams) -> Result<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(Error::EmptyInput);
        }
        params.validate()?;
        Ok(Self { text, params })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn params(&self) -> SummaryParams {
        self.params
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResult {
    pub summary_text: String,
}

impl SummaryResult {
    pub fn new(summary_text: impl Into<String>) -> Self {
        Self {
            summary_text: summary_text.into(),
        }
    }
}
