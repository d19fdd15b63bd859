//! Sprint Pilot binary.
//!
//! Runs one sync from a JSON request file:
//! ```bash
//! sprint-pilot --request request.json
//! ```

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use sprint_pilot::services::analyzer::TicketAnalyzer;
use sprint_pilot::{
    BatchAnalyzer, ConfigService, SyncError, SyncPipeline, SyncRequest, TaskSourceClient,
    WebhookDeliverer,
};
use sprint_pilot_llm::OpenAIProvider;

/// Sprint Pilot - sync tracker tickets into a prioritized sprint report
#[derive(Parser, Debug)]
#[command(name = "sprint-pilot")]
#[command(about = "Fetch tickets, analyze them with an LLM, deliver a sprint report")]
struct Args {
    /// Path to the sync request JSON ({ listId?, codebaseMap, webhookUrl, webhookSecret? })
    #[arg(short, long)]
    request: PathBuf,

    /// Path to a config file (default: ~/.sprint-pilot/config.json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Verbose logging (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = match args.verbose {
        0 => "sprint_pilot=info",
        1 => "sprint_pilot=debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config_service = match args.config {
        Some(path) => ConfigService::with_path(path)?,
        None => ConfigService::new()?,
    };
    let config = config_service.get_config().clone();

    let api_token = config
        .api_token
        .clone()
        .ok_or_else(|| SyncError::config("api_token is not set in config.json"))?;

    let request_json = std::fs::read_to_string(&args.request)?;
    let request: SyncRequest = serde_json::from_str(&request_json)?;

    let source = TaskSourceClient::new(
        api_token,
        config.api_base_url.clone(),
        config.default_list_id.clone(),
        Duration::from_secs(config.fetch_timeout_secs),
    );
    let provider = Arc::new(OpenAIProvider::new(config.provider_config()));
    let batch = BatchAnalyzer::new(TicketAnalyzer::new(provider), config.concurrency);
    let deliverer = WebhookDeliverer::new(config.max_delivery_attempts);

    let pipeline = SyncPipeline::new(source, batch, deliverer);
    let result = pipeline.run(&request).await;

    println!("{}", serde_json::to_string_pretty(&result)?);

    if result.success {
        Ok(())
    } else {
        std::process::exit(1);
    }
}
