use std::net::{IpAddr, SocketAddr};
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use tokio::io::AsyncReadExt;
use tracing::{error, info};
use ts_core::types::{DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH};
use ts_core::{Outcome, Result, Summarizer, SummaryParams};
use ts_inference::{InferenceConfig, ModelKind};
use ts_web::AppState;

mod logging;

const WARNING_EXIT_CODE: u8 = 2;

/// How a run ended when no fatal error occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunStatus {
    Done,
    Warned,
    Failed,
}

impl From<RunStatus> for ExitCode {
    fn from(status: RunStatus) -> Self {
        match status {
            RunStatus::Done => ExitCode::SUCCESS,
            RunStatus::Warned => ExitCode::from(WARNING_EXIT_CODE),
            RunStatus::Failed => ExitCode::FAILURE,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Summarize free-form text with a pre-trained model", long_about = None)]
pub struct Cli {
    #[arg(long, env = "TS_MODEL", default_value = "huggingface", help = "Model backend. Available models: huggingface (default), ollama, lead")]
    model: String,
    /// Base URL of the model service
    #[arg(long, env = "TS_MODEL_URL")]
    model_url: Option<String>,
    /// Model identifier, e.g. facebook/bart-large-cnn
    #[arg(long, env = "TS_MODEL_NAME")]
    model_name: Option<String>,
    #[arg(long, env = "HF_TOKEN", hide_env_values = true)]
    api_token: Option<String>,
    /// Request timeout in seconds
    #[arg(long, default_value_t = 120)]
    timeout: u64,
    #[arg(long, default_value_t = DEFAULT_MAX_LENGTH)]
    max_length: u32,
    #[arg(long, default_value_t = DEFAULT_MIN_LENGTH)]
    min_length: u32,
    /// Enable sampling instead of deterministic decoding
    #[arg(long)]
    sample: bool,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Serve the summarizer page
    Serve {
        #[arg(long, default_value = "127.0.0.1")]
        host: IpAddr,
        #[arg(long, default_value_t = 8501)]
        port: u16,
    },
    /// Summarize TEXT, or standard input when TEXT is omitted
    Summarize { text: Option<String> },
}

impl Cli {
    fn inference_config(&self) -> Result<InferenceConfig> {
        Ok(InferenceConfig {
            model: self.model.parse::<ModelKind>()?,
            model_url: self.model_url.clone(),
            model_name: self.model_name.clone(),
            api_token: self.api_token.clone(),
            timeout: Duration::from_secs(self.timeout),
        })
    }

    fn summary_params(&self) -> Result<SummaryParams> {
        SummaryParams::new(self.max_length, self.min_length, !self.sample)
    }
}

async fn read_stdin() -> Result<String> {
    let mut text = String::new();
    tokio::io::stdin().read_to_string(&mut text).await?;
    Ok(text)
}

async fn run(cli: Cli) -> Result<RunStatus> {
    let params = cli.summary_params()?;
    let inference_config = cli.inference_config()?;

    info!("🧠 Loading {} model...", inference_config.model);
    let model = ts_inference::create_model(&inference_config).await?;
    let summarizer = Summarizer::new(model, params)?;
    info!(
        "✨ Summarizer ready (model: {}, max_length: {}, min_length: {}, deterministic: {})",
        summarizer.model_name(),
        params.max_length,
        params.min_length,
        params.deterministic
    );

    match cli.command {
        Commands::Serve { host, port } => {
            ts_web::serve(SocketAddr::new(host, port), AppState::new(summarizer)).await?;
            Ok(RunStatus::Done)
        }
        Commands::Summarize { text } => {
            let text = match text {
                Some(text) => text,
                None => read_stdin().await?,
            };
            match summarizer.submit(&text).await {
                Outcome::Summary(summary) => {
                    println!("{}", summary);
                    Ok(RunStatus::Done)
                }
                Outcome::Warning(message) => {
                    eprintln!("{}", message);
                    Ok(RunStatus::Warned)
                }
                Outcome::Failure(message) => {
                    eprintln!("{}", message);
                    Ok(RunStatus::Failed)
                }
            }
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    match run(cli).await {
        Ok(status) => status.into(),
        Err(e) => {
            error!("❌ {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ts_core::Error;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["ts", "summarize", "Some text"]).unwrap();
        let params = cli.summary_params().unwrap();
        assert_eq!(params, SummaryParams::default());

        let config = cli.inference_config().unwrap();
        assert_eq!(config.model, ModelKind::HuggingFace);
        assert_eq!(config.timeout, Duration::from_secs(120));
        assert!(matches!(cli.command, Commands::Summarize { text: Some(ref t) } if t == "Some text"));
    }

    #[test]
    fn test_serve_args() {
        let cli = Cli::try_parse_from([
            "ts", "--model", "lead", "-vv", "serve", "--host", "0.0.0.0", "--port", "9000",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.inference_config().unwrap().model, ModelKind::Lead);
        match cli.command {
            Commands::Serve { host, port } => {
                assert_eq!(host.to_string(), "0.0.0.0");
                assert_eq!(port, 9000);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_inverted_lengths_rejected() {
        let cli = Cli::try_parse_from([
            "ts", "--max-length", "20", "--min-length", "40", "summarize",
        ])
        .unwrap();
        assert!(matches!(
            cli.summary_params(),
            Err(Error::InvalidLengths { min: 40, max: 20 })
        ));
    }

    #[test]
    fn test_sample_disables_determinism() {
        let cli = Cli::try_parse_from(["ts", "--sample", "summarize"]).unwrap();
        assert!(!cli.summary_params().unwrap().deterministic);
    }

    #[test]
    fn test_unknown_model_is_config_error() {
        let cli = Cli::try_parse_from(["ts", "--model", "gpt", "summarize"]).unwrap();
        assert!(matches!(cli.inference_config(), Err(Error::Config(_))));
    }

    #[tokio::test]
    async fn test_unreachable_model_is_fatal() {
        let cli = Cli::try_parse_from([
            "ts",
            "--model-url",
            "http://127.0.0.1:9",
            "--timeout",
            "2",
            "summarize",
            "The quick brown fox jumps over the lazy dog.",
        ])
        .unwrap();
        let err = run(cli).await.unwrap_err();
        assert!(matches!(err, Error::ModelUnavailable(_)));
    }

    #[tokio::test]
    async fn test_summarize_with_lead_model() {
        let cli = Cli::try_parse_from([
            "ts",
            "--model",
            "lead",
            "summarize",
            "The quick brown fox jumps over the lazy dog.",
        ])
        .unwrap();
        assert_eq!(run(cli).await.unwrap(), RunStatus::Done);

        let cli = Cli::try_parse_from(["ts", "--model", "lead", "summarize", "   "]).unwrap();
        assert_eq!(run(cli).await.unwrap(), RunStatus::Warned);
    }
}
