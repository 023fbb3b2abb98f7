use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;
use uuid::Uuid;

use replygen::{
    CompletionClient, CompletionParams, ConversationHistory, GenerateResponseUseCase,
    GenerationRequest, MockCompletion, OpenAiClient,
};

#[derive(Parser)]
#[command(name = "replygen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// The user message to respond to.
    message: String,

    #[arg(short, long)]
    verbose: bool,

    /// Instruction text establishing assistant behavior.
    #[arg(long, default_value = "You are a helpful assistant.")]
    system_prompt: String,

    /// Correlation id for logging; a random one is generated when omitted.
    #[arg(long)]
    client_id: Option<String>,

    /// Model to request; defaults to OPENAI_MODEL or gpt-3.5-turbo.
    #[arg(long)]
    model: Option<String>,

    /// Path to a JSON file with prior turns:
    /// [{"role": "user", "content": "Hello"}, ...]
    #[arg(long)]
    history: Option<PathBuf>,

    /// Use the offline echo adapter instead of the hosted completion service.
    #[arg(long)]
    mock: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let history = match &cli.history {
        Some(path) => {
            let raw = std::fs::read_to_string(path)?;
            serde_json::from_str::<ConversationHistory>(&raw)?
        }
        None => ConversationHistory::default(),
    };

    let completion_client: Arc<dyn CompletionClient> = if cli.mock {
        info!("Using mock completion client");
        Arc::new(MockCompletion::new())
    } else {
        Arc::new(OpenAiClient::from_env()?)
    };

    let model = cli.model.unwrap_or_else(OpenAiClient::default_model);
    let use_case = GenerateResponseUseCase::new(completion_client, CompletionParams::new(model));

    let client_id = cli
        .client_id
        .unwrap_or_else(|| Uuid::new_v4().to_string());
    let request = GenerationRequest::new(cli.message, cli.system_prompt)
        .with_history(history)
        .with_client_id(client_id);

    let result = use_case.execute(request).await?;
    println!("{}", result.content());

    Ok(())
}
