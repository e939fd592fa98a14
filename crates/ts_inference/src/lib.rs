use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use ts_core::{Error, Result};

pub mod models;

pub use models::{create_model, ModelConfig};
pub use ts_core::SummarizationModel;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Which backend serves summarization requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModelKind {
    #[default]
    HuggingFace,
    Ollama,
    Lead,
}

impl FromStr for ModelKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "huggingface" | "hf" => Ok(ModelKind::HuggingFace),
            "ollama" => Ok(ModelKind::Ollama),
            "lead" => Ok(ModelKind::Lead),
            other => Err(Error::Config(format!(
                "Unknown model '{}'. Available models: huggingface (default), ollama, lead",
                other
            ))),
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ModelKind::HuggingFace => "huggingface",
            ModelKind::Ollama => "ollama",
            ModelKind::Lead => "lead",
        };
        f.write_str(name)
    }
}

#[derive(Clone)]
pub struct InferenceConfig {
    pub model: ModelKind,
    /// Base URL of the model service. Each backend has its own default.
    pub model_url: Option<String>,
    pub model_name: Option<String>,
    pub api_token: Option<String>,
    pub timeout: Duration,
}

impl fmt::Debug for InferenceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InferenceConfig")
            .field("model", &self.model)
            .field("model_url", &self.model_url)
            .field("model_name", &self.model_name)
            .field("api_token", &self.api_token.as_deref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            model: ModelKind::default(),
            model_url: None,
            model_name: None,
            api_token: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

pub mod prelude {
    pub use super::{InferenceConfig, ModelKind};
    pub use super::models::create_model;
    pub use ts_core::{Error, Result, SummaryParams, SummaryRequest, SummaryResult};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_kind_parsing() {
        assert_eq!("huggingface".parse::<ModelKind>().unwrap(), ModelKind::HuggingFace);
        assert_eq!("HF".parse::<ModelKind>().unwrap(), ModelKind::HuggingFace);
        assert_eq!(" ollama ".parse::<ModelKind>().unwrap(), ModelKind::Ollama);
        assert_eq!("lead".parse::<ModelKind>().unwrap(), ModelKind::Lead);

        let err = "gpt".parse::<ModelKind>().unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("gpt"));
    }

    #[test]
    fn test_config_debug_redacts_token() {
        let config = InferenceConfig {
            api_token: Some("hf_secret".to_string()),
            ..Default::default()
        };
        let debug = format!("{:?}", config);
        assert!(!debug.contains("hf_secret"));
        assert!(debug.contains("<redacted>"));
    }
}
