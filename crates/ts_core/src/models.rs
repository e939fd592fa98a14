use std::fmt;

use async_trait::async_trait;

use crate::types::{SummaryRequest, SummaryResult};
use crate::Result;

#[async_trait]
pub trait SummarizationModel: Send + Sync + fmt::Debug {
    /// Short human readable backend name, used in logs and `/health`.
    fn name(&self) -> &str;

    /// Summarize the request text. Services may return several candidates;
    /// callers only ever look at the first one.
    async fn summarize(&self, request: &SummaryRequest) -> Result<Vec<SummaryResult>>;
}
