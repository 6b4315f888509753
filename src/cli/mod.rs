//! CLI entry point for sonar.

pub mod render;

use clap::{Parser, Subcommand};

/// Perplexity Sonar CLI
#[derive(Parser, Debug)]
#[command(name = "sonar", version, about = "Perplexity Sonar chat-completions CLI")]
pub struct Cli {
    /// Log request and response details
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show available models
    Models,
    /// Send one prompt to a model
    Ask(AskArgs),
    /// Check whether a model appears to perform web search
    Probe(ProbeArgs),
}

/// Arguments for the `ask` subcommand.
#[derive(Parser, Debug)]
pub struct AskArgs {
    /// Model key (1-6) or name (e.g. sonar-pro)
    #[arg(short, long, default_value = "sonar")]
    pub model: String,

    /// System prompt
    #[arg(short, long)]
    pub system: Option<String>,

    /// Temperature, clamped to 0.0 - 1.0
    #[arg(short, long, allow_negative_numbers = true)]
    pub temperature: Option<f64>,

    /// Max tokens, clamped to at least 1
    #[arg(long, allow_negative_numbers = true)]
    pub max_tokens: Option<i64>,

    /// Print the answer as it streams in
    #[arg(long)]
    pub stream: bool,

    /// Probe the model for web search first and confirm on a negative result
    #[arg(long)]
    pub verify_web: bool,

    /// User prompt (positional)
    pub prompt: String,
}

/// Arguments for the `probe` subcommand.
#[derive(Parser, Debug)]
pub struct ProbeArgs {
    /// Model key (1-6) or name
    #[arg(short, long)]
    pub model: String,
}
