use anyhow::Result;
use clap::Parser;
use env_logger::{Builder, Env};
use iosevka_bdf_cli::cli::Cli;

fn main() -> Result<()> {
    Builder::from_env(Env::default().default_filter_or("info")).init();
    Cli::parse().run()
}
