use std::sync::Arc;

use ts_core::Summarizer;

pub struct AppState {
    pub summarizer: Arc<Summarizer>,
}

impl AppState {
    pub fn new(summarizer: Summarizer) -> Self {
        Self {
            summarizer: Arc::new(summarizer),
        }
    }
}
