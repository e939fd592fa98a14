use std::sync::Arc;

use axum::{
    extract::{rejection::FormRejection, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form, Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use ts_core::{Error, Outcome, EMPTY_INPUT_WARNING};

use crate::page;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct SummarizeForm {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct SummarizeBody {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct SummarizeResponse {
    pub summary_text: String,
}

/// JSON API error wrapper around the core error.
pub struct ApiError(Error);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            Error::EmptyInput => (StatusCode::UNPROCESSABLE_ENTITY, EMPTY_INPUT_WARNING.to_string()),
            Error::InvalidLengths { .. } => (StatusCode::UNPROCESSABLE_ENTITY, self.0.to_string()),
            e => (StatusCode::BAD_GATEWAY, e.to_string()),
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<Error> for ApiError {
    fn from(error: Error) -> Self {
        Self(error)
    }
}

pub async fn index() -> Html<String> {
    Html(page::render("", None))
}

pub async fn submit(
    State(state): State<Arc<AppState>>,
    form: std::result::Result<Form<SummarizeForm>, FormRejection>,
) -> Html<String> {
    let Form(form) = match form {
        Ok(form) => form,
        Err(rejection) => {
            tracing::warn!("Rejected form submission: {}", rejection);
            let outcome = Outcome::Failure(rejection.body_text());
            return Html(page::render("", Some(&outcome)));
        }
    };
    let outcome = state.summarizer.submit(&form.text).await;
    Html(page::render(&form.text, Some(&outcome)))
}

pub async fn api_summarize(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SummarizeBody>,
) -> Result<Json<SummarizeResponse>, ApiError> {
    let summary_text = state.summarizer.summarize(&body.text).await.map_err(|e| {
        if !e.is_user_error() {
            tracing::error!("Summarization failed: {}", e);
        }
        ApiError::from(e)
    })?;
    Ok(Json(SummarizeResponse { summary_text }))
}

pub async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "model": state.summarizer.model_name(),
    }))
}
