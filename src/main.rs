use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use figma_button_tokens::{run, ExtractConfig, RunError, DEFAULT_INPUT, DEFAULT_OUTPUT};
use figma_button_tokens_core::{ComponentMatcher, DEFAULT_SAMPLE_SIZE};
use tracing::error;

#[derive(Parser, Debug)]
#[command(name = "figma_button_tokens", version, about = "Extract Button design tokens from a cached Figma export")]
struct Cli {
    /// Full document export to read
    #[arg(long, default_value = DEFAULT_INPUT)]
    input: PathBuf,
    /// Where to write the sample of matched components
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
    #[arg(long, default_value = "COMPONENT")]
    node_type: String,
    /// Case-sensitive substring the node name must contain
    #[arg(long, default_value = "Button")]
    name_pattern: String,
    #[arg(long, default_value_t = DEFAULT_SAMPLE_SIZE)]
    sample_size: usize,
}
impl From<Cli> for ExtractConfig {
    fn from(cli: Cli) -> Self {
        Self {
            input: cli.input,
            output: cli.output,
            matcher: ComponentMatcher::new(cli.node_type, cli.name_pattern),
            sample_size: cli.sample_size,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = ExtractConfig::from(Cli::parse());
    match run(&config) {
        Ok(_) => {
            println!("\nExtraction complete!");
            ExitCode::SUCCESS
        }
        Err(err @ RunError::InputMissing(_)) => {
            eprintln!("Error: {err}");
            eprintln!("   Download the full file export first");
            ExitCode::FAILURE
        }
        Err(err) => {
            error!("extraction failed");
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
