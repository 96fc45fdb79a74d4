//! glossgen - turn a glossary text file into cross-linked HTML pages.

mod build;
mod cli;
mod config;
mod glossary;
mod logger;
mod render;
mod utils;

use anyhow::Result;
use build::build_glossary;
use clap::Parser;
use cli::{Cli, prompt_stdio};
use config::GlossaryConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let summary = build_glossary(&config)?;
    log!("build"; "done, {} term pages in {}", summary.pages, summary.output.display());
    Ok(())
}

/// Load config, apply CLI overrides, ask for missing paths, then validate.
fn load_config(cli: &Cli) -> Result<GlossaryConfig> {
    let mut config = GlossaryConfig::load(cli)?;
    if let Some(path) = &config.config_path {
        log!("config"; "using {}", path.display());
    }
    config.fill_missing_paths(prompt_stdio)?;
    config.validate()?;
    Ok(config)
}
