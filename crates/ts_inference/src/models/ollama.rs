use std::fmt;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use ts_core::{Error, Result, SummarizationModel, SummaryRequest, SummaryResult};
use url::Url;

use super::ModelConfig;
use crate::InferenceConfig;

const DEFAULT_URL: &str = "http://localhost:11434/gemma3:12b";
const DEFAULT_PORT: u16 = 11434;
const DEFAULT_MODEL_NAME: &str = "gemma3:12b";
const DETERMINISTIC_SEED: u64 = 42;

#[derive(Debug)]
pub struct OllamaModelConfig {
    ollama_host: String,
    ollama_port: u16,
    model_name: String,
}

impl ModelConfig for OllamaModelConfig {
    fn from_inference_config(config: &InferenceConfig) -> Result<Self> {
        let url = config.model_url.as_deref().unwrap_or(DEFAULT_URL);
        let parsed_url = Url::parse(url)
            .map_err(|e| Error::Config(format!("Invalid Ollama URL '{}': {}", url, e)))?;

        // The model name travels in the URL path unless given explicitly.
        let path_model = parsed_url.path().trim_matches('/').to_string();
        let model_name = config
            .model_name
            .clone()
            .filter(|name| !name.trim().is_empty())
            .or_else(|| (!path_model.is_empty()).then_some(path_model))
            .unwrap_or_else(|| DEFAULT_MODEL_NAME.to_string());

        Ok(Self {
            ollama_host: format!(
                "{}://{}",
                parsed_url.scheme(),
                parsed_url.host_str().unwrap_or("localhost")
            ),
            ollama_port: ollama_port(&parsed_url),
            model_name,
        })
    }
}

/// Plain `http` URLs without a port point at Ollama's own port. Any other
/// scheme keeps its well-known default.
fn ollama_port(url: &Url) -> u16 {
    match url.port() {
        Some(port) => port,
        None if url.scheme() == "http" => DEFAULT_PORT,
        None => url.port_or_known_default().unwrap_or(DEFAULT_PORT),
    }
}

impl OllamaModelConfig {
    pub fn get_ollama_host(&self) -> &str {
        &self.ollama_host
    }

    pub fn get_ollama_port(&self) -> u16 {
        self.ollama_port
    }

    pub fn get_model_name(&self) -> &str {
        &self.model_name
    }

    fn generate_url(&self) -> String {
        format!("{}:{}/api/generate", self.ollama_host, self.ollama_port)
    }
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: String,
    stream: bool,
    options: GenerateOptions,
}

#[derive(Serialize)]
struct GenerateOptions {
    num_predict: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    seed: Option<u64>,
}

#[derive(Deserialize)]
struct GenerateResponse {
    response: String,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}

/// Summarization through a local Ollama server.
pub struct OllamaModel {
    client: Client,
    config: OllamaModelConfig,
}

impl fmt::Debug for OllamaModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OllamaModel")
            .field("client", &"<reqwest::Client>")
            .field("config", &self.config)
            .finish()
    }
}

impl OllamaModel {
    pub fn new(config: &InferenceConfig) -> Result<Self> {
        let model_config = OllamaModelConfig::from_inference_config(config)?;
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::ModelUnavailable(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            config: model_config,
        })
    }

    fn build_prompt(request: &SummaryRequest) -> String {
        let params = request.params();
        format!(
            "Summarize the following text in {} to {} words. Reply with the summary only.\n\n{}",
            params.min_length,
            params.max_length,
            request.text()
        )
    }
}

#[async_trait]
impl SummarizationModel for OllamaModel {
    fn name(&self) -> &str {
        "Ollama"
    }

    async fn summarize(&self, request: &SummaryRequest) -> Result<Vec<SummaryResult>> {
        let params = request.params();
        let body = GenerateRequest {
            model: self.config.get_model_name(),
            prompt: Self::build_prompt(request),
            stream: false,
            options: GenerateOptions {
                num_predict: params.max_length,
                temperature: params.deterministic.then_some(0.0),
                seed: params.deterministic.then_some(DETERMINISTIC_SEED),
            },
        };

        let response = self
            .client
            .post(self.config.generate_url())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    Error::ModelUnavailable(format!(
                        "Ollama is not available at {}:{}: {}. Please ensure Ollama is running and the model '{}' is installed.",
                        self.config.get_ollama_host(),
                        self.config.get_ollama_port(),
                        e,
                        self.config.get_model_name()
                    ))
                } else {
                    Error::Http(e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorResponse>(&body)
                .map(|e| e.error)
                .unwrap_or_else(|_| format!("{} {}", status, body.trim()));
            return Err(Error::Inference(message));
        }

        let generated = response.json::<GenerateResponse>().await?;
        Ok(vec![SummaryResult::new(generated.response)])
    }
}
