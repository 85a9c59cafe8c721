use std::path::PathBuf;

use anyhow::Context;
use figma_button_tokens_core::{
    document_root, load_document, persist_sample, report, ComponentMatcher,
    ExtractedComponent, DEFAULT_SAMPLE_SIZE,
};
use thiserror::Error;
use tracing::info;

pub const DEFAULT_INPUT: &str = ".figma/cache/file-full.json";
pub const DEFAULT_OUTPUT: &str = ".figma/cache/button-components.json";

#[derive(Debug, Clone)]
pub struct ExtractConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub matcher: ComponentMatcher,
    pub sample_size: usize,
}
impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            matcher: ComponentMatcher::default(),
            sample_size: DEFAULT_SAMPLE_SIZE,
        }
    }
}

#[derive(Error, Debug)]
pub enum RunError {
    #[error("{} not found", .0.display())]
    InputMissing(PathBuf),
    #[error("{0:#}")]
    Extraction(#[from] anyhow::Error),
}

/// Load, walk, report and persist. Returns every match, not just the sample.
pub fn run(config: &ExtractConfig) -> Result<Vec<ExtractedComponent>, RunError> {
    if !config.input.exists() {
        return Err(RunError::InputMissing(config.input.clone()));
    }
    Ok(extract(config)?)
}

fn extract(config: &ExtractConfig) -> anyhow::Result<Vec<ExtractedComponent>> {
    info!(path = %config.input.display(), "loading document");
    let export = load_document(&config.input)
        .with_context(|| format!("failed to load {}", config.input.display()))?;
    let root = document_root(export)
        .with_context(|| format!("unexpected structure in {}", config.input.display()))?;

    info!(
        node_type = %config.matcher.node_type,
        pattern = %config.matcher.name_pattern,
        "searching components"
    );
    let components = config.matcher.find(&root, "");
    println!("Found {} components", components.len());

    let summary = report(&components);
    println!("\n{summary}");

    let written = persist_sample(&components, &config.output, config.sample_size)
        .with_context(|| format!("failed to write {}", config.output.display()))?;
    println!(
        "\nSaved first {written} components to: {}",
        config.output.display()
    );
    Ok(components)
}
