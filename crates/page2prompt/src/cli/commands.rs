//! CLI command definitions.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Page2Prompt - screenplay to shot list and image prompts
#[derive(Parser, Debug)]
#[command(name = "page2prompt")]
#[command(about = "Turn a screenplay into a shot list, subjects and image prompts", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file layered over the defaults
    #[arg(long, global = true, env = "PAGE2PROMPT_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a shot list from a script
    Shots {
        /// Path to the script text
        #[arg(long)]
        script: PathBuf,

        /// Where to write the shot list
        #[arg(long, default_value = "shots.csv")]
        out: PathBuf,
    },

    /// Extract subjects from a script and merge them into the registry
    Subjects {
        /// Path to the script text
        #[arg(long)]
        script: PathBuf,

        /// Shot list whose people and places must be covered
        #[arg(long)]
        shots: PathBuf,
    },

    /// Generate concise, normal and detailed prompts for every shot
    Prompts(PromptsArgs),

    /// Write director's notes for every shot, in place
    Notes {
        /// Shot list to annotate
        #[arg(long)]
        shots: PathBuf,

        /// Visual style name
        #[arg(long)]
        style: Option<String>,

        /// Director style name
        #[arg(long)]
        director: Option<String>,
    },

    /// Generate a random style and add it to the style table
    StyleRandom,
}

/// Arguments of the `prompts` command
#[derive(Args, Debug)]
pub struct PromptsArgs {
    /// Shot list to generate prompts for
    #[arg(long)]
    pub shots: PathBuf,

    /// Visual style name
    #[arg(long)]
    pub style: Option<String>,

    /// Director style name
    #[arg(long)]
    pub director: Option<String>,

    /// Text appended to every prompt (e.g. "--ar 16:9")
    #[arg(long, default_value = "")]
    pub end_params: String,

    /// Send script text with every request
    #[arg(long)]
    pub stick_to_script: bool,

    /// Full script, sent with --stick-to-script
    #[arg(long)]
    pub script: Option<PathBuf>,

    /// Save a project snapshot and export the prompts under this name
    #[arg(long)]
    pub project: Option<String>,
}
