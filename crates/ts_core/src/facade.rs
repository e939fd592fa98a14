use std::sync::Arc;

use crate::models::SummarizationModel;
use crate::types::{SummaryParams, SummaryRequest};
use crate::{Error, Result};

pub const EMPTY_INPUT_WARNING: &str = "⚠️ Please enter some text to summarize!";

/// What the interface should show after a submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Summary(String),
    Warning(&'static str),
    Failure(String),
}

/// Thin pass-through to the loaded model with fixed generation parameters.
#[derive(Debug, Clone)]
pub struct Summarizer {
    model: Arc<dyn SummarizationModel>,
    params: SummaryParams,
}

impl Summarizer {
    pub fn new(model: Arc<dyn SummarizationModel>, params: SummaryParams) -> Result<Self> {
        params.validate()?;
        Ok(Self { model, params })
    }

    pub fn with_defaults(model: Arc<dyn SummarizationModel>) -> Self {
        Self {
            model,
            params: SummaryParams::default(),
        }
    }

    pub fn model_name(&self) -> &str {
        self.model.name()
    }

    pub async fn summarize(&self, text: &str) -> Result<String> {
        let request = SummaryRequest::new(text, self.params)?;
        tracing::debug!(
            model = self.model.name(),
            chars = request.text().len(),
            "Summarizing text"
        );

        let candidates = self.model.summarize(&request).await?;
        let summary = candidates
            .into_iter()
            .next()
            .map(|result| result.summary_text)
            .ok_or_else(|| Error::Inference("model returned no summary".to_string()))?;

        if summary.is_empty() {
            return Err(Error::Inference("model returned an empty summary".to_string()));
        }
        Ok(summary)
    }

    pub async fn submit(&self, text: &str) -> Outcome {
        match self.summarize(text).await {
            Ok(summary) => Outcome::Summary(summary),
            Err(Error::EmptyInput) => Outcome::Warning(EMPTY_INPUT_WARNING),
            Err(e) => {
                tracing::error!("Summarization failed: {}", e);
                Outcome::Failure(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SummaryResult;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Debug, Default)]
    struct RecordingModel {
        calls: Mutex<Vec<SummaryRequest>>,
        reply: Option<Vec<SummaryResult>>,
        fail_with: Option<String>,
    }

    impl RecordingModel {
        fn replying(summary: &str) -> Self {
            Self {
                reply: Some(vec![SummaryResult::new(summary)]),
                ..Default::default()
            }
        }

        fn calls(&self) -> Vec<SummaryRequest> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl SummarizationModel for RecordingModel {
        fn name(&self) -> &str {
            "Recording"
        }

        async fn summarize(&self, request: &SummaryRequest) -> Result<Vec<SummaryResult>> {
            self.calls.lock().unwrap().push(request.clone());
            if let Some(message) = &self.fail_with {
                return Err(Error::Inference(message.clone()));
            }
            Ok(self.reply.clone().unwrap_or_default())
        }
    }

    #[tokio::test]
    async fn test_forwards_text_with_default_params() {
        let model = Arc::new(RecordingModel::replying("A fox jumps over a dog."));
        let summarizer = Summarizer::with_defaults(model.clone());

        let text = "The quick brown fox jumps over the lazy dog.";
        let summary = summarizer.summarize(text).await.unwrap();
        assert_eq!(summary, "A fox jumps over a dog.");

        let calls = model.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].text(), text);
        assert_eq!(
            calls[0].params(),
            SummaryParams {
                max_length: 130,
                min_length: 30,
                deterministic: true
            }
        );
    }

    #[tokio::test]
    async fn test_blank_input_never_reaches_model() {
        let model = Arc::new(RecordingModel::replying("unused"));
        let summarizer = Summarizer::with_defaults(model.clone());

        for text in ["", "   ", "\n\n"] {
            assert!(matches!(summarizer.summarize(text).await, Err(Error::EmptyInput)));
            assert_eq!(
                summarizer.submit(text).await,
                Outcome::Warning(EMPTY_INPUT_WARNING)
            );
        }
        assert!(model.calls().is_empty());
    }

    #[tokio::test]
    async fn test_first_candidate_is_returned_verbatim() {
        let model = Arc::new(RecordingModel {
            reply: Some(vec![
                SummaryResult::new("  first, untouched "),
                SummaryResult::new("second"),
            ]),
            ..Default::default()
        });
        let summarizer = Summarizer::with_defaults(model);

        let summary = summarizer.summarize("Some article text.").await.unwrap();
        assert_eq!(summary, "  first, untouched ");
    }

    #[tokio::test]
    async fn test_empty_reply_is_an_inference_error() {
        let model = Arc::new(RecordingModel::default());
        let summarizer = Summarizer::with_defaults(model);
        assert!(matches!(
            summarizer.summarize("Some text.").await,
            Err(Error::Inference(_))
        ));

        let model = Arc::new(RecordingModel::replying(""));
        let summarizer = Summarizer::with_defaults(model);
        assert!(matches!(
            summarizer.summarize("Some text.").await,
            Err(Error::Inference(_))
        ));
    }

    #[tokio::test]
    async fn test_model_failure_becomes_failure_outcome() {
        let model = Arc::new(RecordingModel {
            fail_with: Some("input too long".to_string()),
            ..Default::default()
        });
        let summarizer = Summarizer::with_defaults(model.clone());

        let outcome = summarizer.submit("Some text.").await;
        assert_eq!(
            outcome,
            Outcome::Failure("Inference error: input too long".to_string())
        );

        // still usable afterwards
        let outcome = summarizer.submit("Other text.").await;
        assert!(matches!(outcome, Outcome::Failure(_)));
        assert_eq!(model.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_repeated_calls_send_identical_requests() {
        let model = Arc::new(RecordingModel::replying("Same summary."));
        let summarizer = Summarizer::with_defaults(model.clone());

        let text = "Identical input text for both calls.";
        let first = summarizer.summarize(text).await.unwrap();
        let second = summarizer.summarize(text).await.unwrap();
        assert_eq!(first, second);

        let calls = model.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0], calls[1]);
    }

    #[test]
    fn test_rejects_invalid_params() {
        let model = Arc::new(RecordingModel::default());
        let params = SummaryParams {
            max_length: 30,
            min_length: 130,
            deterministic: true,
        };
        assert!(matches!(
            Summarizer::new(model, params),
            Err(Error::InvalidLengths { min: 130, max: 30 })
        ));
    }
}
