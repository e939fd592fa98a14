use std::sync::Arc;

use tracing::{debug, info};
use ts_core::{Error, Result, SummarizationModel, SummaryParams, SummaryRequest};

use crate::{InferenceConfig, ModelKind};

pub mod huggingface;
pub mod lead;
pub mod ollama;

pub use huggingface::HuggingFaceModel;
pub use lead::LeadModel;
pub use ollama::OllamaModel;

const WARM_UP_TEXT: &str = "The summarization service is starting up. This short text checks that the model answers.";

/// Backend specific settings derived from the shared inference configuration.
pub trait ModelConfig: Sized {
    fn from_inference_config(config: &InferenceConfig) -> Result<Self>;
}

/// Builds the configured backend and checks that it answers. Call once per
/// process and share the returned handle.
pub async fn create_model(config: &InferenceConfig) -> Result<Arc<dyn SummarizationModel>> {
    let model: Arc<dyn SummarizationModel> = match config.model {
        ModelKind::HuggingFace => Arc::new(HuggingFaceModel::new(config)?),
        ModelKind::Ollama => Arc::new(OllamaModel::new(config)?),
        ModelKind::Lead => Arc::new(LeadModel::new()),
    };

    warm_up(model.as_ref()).await?;
    info!("🧠 Model {} is ready", model.name());
    Ok(model)
}

async fn warm_up(model: &dyn SummarizationModel) -> Result<()> {
    let params = SummaryParams::new(16, 1, true)?;
    let request = SummaryRequest::new(WARM_UP_TEXT, params)?;
    debug!("Warming up {}", model.name());

    match model.summarize(&request).await {
        Ok(results) if !results.is_empty() => Ok(()),
        Ok(_) => Err(Error::ModelUnavailable(format!(
            "{} returned no summary for the warm-up request",
            model.name()
        ))),
        Err(Error::ModelUnavailable(reason)) => Err(Error::ModelUnavailable(reason)),
        Err(e) => Err(Error::ModelUnavailable(format!("{}: {}", model.name(), e))),
    }
}
