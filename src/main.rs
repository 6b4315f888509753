//! sonar CLI binary entry point.

use std::io::Write;

use clap::Parser;
use futures::StreamExt;
use tracing_subscriber::EnvFilter;

use sonar::cli::render::{describe_error, model_menu};
use sonar::cli::{AskArgs, Cli, Commands, ProbeArgs};
use sonar::error::SonarError;
use sonar::generation::{generate_text, probe_web_search, stream_text};
use sonar::models::ModelSelector;
use sonar::provider::CompletionClient;
use sonar::types::{GenerationSettings, StreamFragment, DEFAULT_TEMPERATURE};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Models => {
            print!("{}", model_menu());
            Ok(())
        }
        Commands::Ask(args) => handle_ask(args).await,
        Commands::Probe(args) => handle_probe(args).await,
    };

    if let Err(e) = result {
        match e.downcast_ref::<SonarError>() {
            Some(err) => eprintln!("{}", describe_error(err)),
            None => eprintln!("Error: {e}"),
        }
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    // Logs go to stderr so streamed answers on stdout stay clean.
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to install logger: {e}");
    }
}

async fn handle_ask(args: AskArgs) -> Result<(), Box<dyn std::error::Error>> {
    let model = ModelSelector::resolve(&args.model)?;
    let client = CompletionClient::from_env()?;

    if args.verify_web && !probe_web_search(&client, model.name).await {
        eprintln!("Warning: Model {} may not have web search capability", model.name);
        if !confirm("Continue anyway? (y/n): ")? {
            return Ok(());
        }
    }

    let settings = GenerationSettings {
        system_prompt: args.system,
        temperature: args.temperature.unwrap_or(DEFAULT_TEMPERATURE),
        max_tokens: args.max_tokens,
        stream: args.stream,
    };

    if !args.stream {
        let response = generate_text(&client, model.name, args.prompt, &settings).await?;
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    let mut stream = stream_text(&client, model.name, args.prompt, &settings).await?;
    let mut stdout = std::io::stdout();
    while let Some(fragment) = stream.next().await {
        match fragment? {
            StreamFragment::Delta(text) => {
                print!("{text}");
                stdout.flush()?;
            }
            StreamFragment::Done => {
                println!();
                eprintln!("Stream completed");
            }
        }
    }

    Ok(())
}

async fn handle_probe(args: ProbeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let model = ModelSelector::resolve(&args.model)?;
    let client = CompletionClient::from_env()?;

    eprintln!("Verifying web search capability for {}...", model.name);
    if probe_web_search(&client, model.name).await {
        println!("✓ {} has web search capability", model.name);
    } else {
        println!("✗ {} does not have web search capability", model.name);
    }
    Ok(())
}

fn confirm(prompt: &str) -> std::io::Result<bool> {
    eprint!("{prompt}");
    std::io::stderr().flush()?;
    let mut answer = String::new();
    std::io::stdin().read_line(&mut answer)?;
    Ok(answer.trim().eq_ignore_ascii_case("y"))
}
