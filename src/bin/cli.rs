// src/bin/cli.rs
use llm_catalog::{cli, config::options::AppOptions, log};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    log::init(&AppOptions::from_env().log_level, log::Sink::Stderr);
    cli::run()
}
