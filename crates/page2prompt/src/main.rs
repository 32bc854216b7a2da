//! Page2Prompt CLI binary.
//!
//! This binary provides command-line access to Page2Prompt's functionality:
//! - Generate a shot list from a script
//! - Extract subjects into the subject table
//! - Write director's notes and image prompts for every shot
//! - Generate random styles

use clap::Parser;
use page2prompt::Page2PromptConfig;
use tracing_subscriber::EnvFilter;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, run_notes, run_prompts, run_shots, run_style_random, run_subjects};

    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize tracing
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter = if cli.verbose {
        EnvFilter::new(default_level)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    // Pick up OPENAI_API_KEY from .env if present
    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!(error = %e, "No .env file loaded");
    }

    let config = match &cli.config {
        Some(path) => Page2PromptConfig::from_file(path)?,
        None => Page2PromptConfig::load()?,
    };
    tracing::debug!(model = %config.gateway.model, data_dir = %config.storage.data_dir.display(), "Configuration loaded");

    // Execute the requested command
    match cli.command {
        Commands::Shots { script, out } => {
            run_shots(&config, &script, &out).await?;
        }

        Commands::Subjects { script, shots } => {
            run_subjects(&config, &script, &shots).await?;
        }

        Commands::Prompts(args) => {
            run_prompts(&config, &args).await?;
        }

        Commands::Notes {
            shots,
            style,
            director,
        } => {
            run_notes(&config, &shots, style.as_deref(), director.as_deref()).await?;
        }

        Commands::StyleRandom => {
            run_style_random(&config).await?;
        }
    }

    Ok(())
}
