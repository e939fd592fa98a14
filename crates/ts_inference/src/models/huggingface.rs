use std::fmt;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use ts_core::{Error, Result, SummarizationModel, SummaryRequest, SummaryResult};
use url::Url;

use super::ModelConfig;
use crate::InferenceConfig;

pub const DEFAULT_BASE_URL: &str = "https://api-inference.huggingface.co";
pub const DEFAULT_MODEL_NAME: &str = "facebook/bart-large-cnn";

#[derive(Serialize)]
struct SummarizationRequest<'a> {
    inputs: &'a str,
    parameters: SummarizationParameters,
    options: RequestOptions,
}

#[derive(Serialize)]
struct SummarizationParameters {
    max_length: u32,
    min_length: u32,
    do_sample: bool,
}

#[derive(Serialize)]
struct RequestOptions {
    wait_for_model: bool,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Debug, Clone)]
pub struct HuggingFaceConfig {
    endpoint: Url,
    model_name: String,
    api_token: Option<String>,
}

impl ModelConfig for HuggingFaceConfig {
    fn from_inference_config(config: &InferenceConfig) -> Result<Self> {
        let base = config.model_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
        let model_name = config
            .model_name
            .clone()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL_NAME.to_string());

        let endpoint = format!("{}/models/{}", base.trim_end_matches('/'), model_name);
        let endpoint = Url::parse(&endpoint)
            .map_err(|e| Error::Config(format!("Invalid model URL '{}': {}", base, e)))?;

        Ok(Self {
            endpoint,
            model_name,
            api_token: config.api_token.clone(),
        })
    }
}

impl HuggingFaceConfig {
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }
}

/// Summarization through the Hugging Face Inference API, or any server that
/// speaks the same `summary_text` contract.
pub struct HuggingFaceModel {
    client: Client,
    config: HuggingFaceConfig,
}

impl fmt::Debug for HuggingFaceModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HuggingFaceModel")
            .field("client", &"<reqwest::Client>")
            .field("endpoint", &self.config.endpoint.as_str())
            .field("model_name", &self.config.model_name)
            .field("api_token", &self.config.api_token.as_deref().map(|_| "<redacted>"))
            .finish()
    }
}

impl HuggingFaceModel {
    pub fn new(config: &InferenceConfig) -> Result<Self> {
        let model_config = HuggingFaceConfig::from_inference_config(config)?;
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::ModelUnavailable(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            config: model_config,
        })
    }
}

#[async_trait]
impl SummarizationModel for HuggingFaceModel {
    fn name(&self) -> &str {
        "HuggingFace"
    }

    async fn summarize(&self, request: &SummaryRequest) -> Result<Vec<SummaryResult>> {
        let params = request.params();
        let body = SummarizationRequest {
            inputs: request.text(),
            parameters: SummarizationParameters {
                max_length: params.max_length,
                min_length: params.min_length,
                do_sample: !params.deterministic,
            },
            options: RequestOptions {
                wait_for_model: true,
            },
        };

        let mut builder = self.client.post(self.config.endpoint.clone()).json(&body);
        if let Some(token) = &self.config.api_token {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(service_error(status, &body));
        }

        let results = response.json::<Vec<SummaryResult>>().await?;
        tracing::debug!(
            "{} returned {} candidate(s)",
            self.config.model_name,
            results.len()
        );
        Ok(results)
    }
}

fn service_error(status: StatusCode, body: &str) -> Error {
    let message = serde_json::from_str::<ErrorResponse>(body)
        .map(|e| e.error)
        .unwrap_or_else(|_| format!("{} {}", status, body.trim()));

    if status == StatusCode::SERVICE_UNAVAILABLE {
        Error::ModelUnavailable(message)
    } else {
        Error::Inference(message)
    }
}
