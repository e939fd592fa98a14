pub mod error;
pub mod facade;
pub mod models;
pub mod types;

pub use error::{Error, Result};
pub use facade::{Outcome, Summarizer, EMPTY_INPUT_WARNING};
pub use models::SummarizationModel;
pub use types::{SummaryParams, SummaryRequest, SummaryResult};

pub mod prelude {
    pub use crate::{
        Error, Outcome, Result, SummarizationModel, Summarizer, SummaryParams, SummaryRequest,
        SummaryResult,
    };
}
