//! Plotwright command line interface.
//!
//! Reads story text from a file or stdin, runs it through the provider
//! chain, and prints the result as pretty JSON. Providers are configured
//! through the environment (`GEMINI_API_KEY`, `OPENAI_API_URL`, ...); with
//! nothing configured both commands still answer via the deterministic
//! template fallback.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use plotwright_core::{AnalysisRequest, ExpansionRequest};
use plotwright_runtime::{EngineConfig, StoryEngine};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "plotwright", version, about = "Narrative direction analysis engine")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Analyze a story and propose three narrative directions.
    Analyze {
        /// Story file to analyze; reads stdin when omitted.
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Recent story beats to weight alongside the full context.
        #[arg(long)]
        short_memory: Option<String>,

        /// The paragraph the branching moment follows.
        #[arg(long)]
        last_paragraph: Option<String>,
    },

    /// Expand a chosen direction into a short prose preview.
    Expand {
        /// Name of the chosen path.
        #[arg(short, long)]
        name: String,

        /// One or two sentence description of the chosen path.
        #[arg(short, long)]
        description: String,

        /// Story file providing context; reads stdin when omitted.
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = EngineConfig::from_env().context("invalid engine configuration")?;
    let engine = StoryEngine::from_config(config).context("failed to build provider chain")?;

    match cli.command {
        Command::Analyze {
            file,
            short_memory,
            last_paragraph,
        } => {
            let text = read_story(file)?;
            let request = AnalysisRequest {
                full_context: Some(text),
                short_memory,
                last_paragraph,
            };
            let result = engine.analyze(&request).await;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Command::Expand {
            name,
            description,
            file,
        } => {
            let request = ExpansionRequest {
                story_context: read_story(file)?,
                path_name: name,
                path_description: description,
            };
            let result = engine.expand_path(&request).await;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }

    Ok(())
}

fn read_story(file: Option<PathBuf>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}
