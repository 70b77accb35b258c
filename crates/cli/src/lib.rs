//! # `rfpdraft-cli` Library Crate
//!
//! The command-line front end: reads pasted text or a PDF/TXT file, makes the
//! single completion call and prints the draft, then saves the raw model
//! output next to it the way the web UI's download button does.

pub mod render;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use rfpdraft::{
    acquire_text,
    constants::{API_KEY_ENV, DEFAULT_API_URL, DOWNLOAD_FILE_NAME},
    providers::ai::OpenAiProvider,
    types::{DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE},
    DraftView, GenerationOptions, ModelChoice, RfpAssistant, RfpInput, Upload,
};
use std::path::PathBuf;
use tracing::{info, warn};

// --- CLI Argument Structs ---

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Draft answers for the questions in an RFP
    Draft(DraftArgs),
}

#[derive(Parser, Debug)]
pub struct DraftArgs {
    /// RFP text (or just its questions). Takes precedence over --file.
    #[arg(long)]
    text: Option<String>,
    /// Path to an RFP as a PDF or plain-text file.
    #[arg(long)]
    file: Option<PathBuf>,
    #[arg(long, default_value_t = ModelChoice::default())]
    model: ModelChoice,
    /// Creativity, between 0 and 1.
    #[arg(long, default_value_t = DEFAULT_TEMPERATURE)]
    temperature: f32,
    /// Upper bound on the length of the answer, between 200 and 2000.
    #[arg(long, default_value_t = DEFAULT_MAX_TOKENS)]
    max_tokens: u32,
    /// Where to save the raw model output.
    #[arg(long, default_value = DOWNLOAD_FILE_NAME)]
    output: PathBuf,
    /// The chat-completions endpoint.
    #[arg(long, env = "OPENAI_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,
    #[arg(long, env = API_KEY_ENV, hide_env_values = true)]
    api_key: Option<String>,
}

// --- Public Entrypoint ---

pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Draft(args) => handle_draft(args).await,
    }
}

// --- Command Handlers ---

async fn handle_draft(args: DraftArgs) -> Result<()> {
    let Some(api_key) = args.api_key.filter(|k| !k.trim().is_empty()) else {
        warn!("No {API_KEY_ENV} found. Pass --api-key or set {API_KEY_ENV}.");
        bail!("missing {API_KEY_ENV}");
    };
    let options = GenerationOptions::new(args.model, args.temperature, args.max_tokens)?;

    let upload = match &args.file {
        Some(path) => {
            let data = tokio::fs::read(path)
                .await
                .with_context(|| format!("Failed to read '{}'", path.display()))?;
            Some(Upload {
                file_name: path.file_name().map(|n| n.to_string_lossy().into_owned()),
                content_type: None,
                data,
            })
        }
        None => None,
    };
    let acquired = acquire_text(RfpInput {
        pasted: args.text,
        upload,
    })
    .await?;
    info!(source = ?acquired.source, model = %options.model(), "Sending RFP to the model.");

    let assistant = RfpAssistant::new(Box::new(OpenAiProvider::new(args.api_url, api_key)?));
    let outcome = assistant.draft(&acquired.text, &options).await?;
    let view = DraftView::from(&outcome.response);

    println!("{}", render::render_draft(&view, acquired.preview.as_deref()));

    tokio::fs::write(&args.output, &view.raw)
        .await
        .with_context(|| format!("Failed to write '{}'", args.output.display()))?;
    println!("Raw output saved to '{}'.", args.output.display());

    Ok(())
}
