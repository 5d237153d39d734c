//! CLI definitions and command dispatch.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::info;

use iosevka_bdf_core::{
    BuildConfig, FontForge, HttpFetcher, SourceStatus, build_fonts, clean,
    config::{
        CACHE_MARKER, DEFAULT_CACHE_DIR, DEFAULT_OUTPUT_DIR, FONT_BASE, FONT_SIZES, FONT_STYLES,
        FONT_VERSION,
    },
    ensure_sources, prepare_dirs,
};

#[derive(Parser)]
#[command(name = "iosevka-bdf")]
#[command(about = "Download Iosevka and rasterize it into BDF bitmap fonts")]
pub struct Cli {
    /// Defaults to `build` with the built-in configuration.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Clone, Args)]
pub struct BuildArgs {
    #[arg(long, default_value = DEFAULT_CACHE_DIR)]
    pub cache_dir: PathBuf,
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,
    #[arg(long, default_value = FONT_VERSION)]
    pub font_version: String,
    #[arg(long, default_value = FONT_BASE)]
    pub base: String,
    /// Style suffixes; pass an empty string for the regular face.
    #[arg(long, num_args = 1.., default_values_t = FONT_STYLES.iter().map(|s| s.to_string()))]
    pub styles: Vec<String>,
    #[arg(long, num_args = 1.., default_values_t = FONT_SIZES.iter().copied())]
    pub sizes: Vec<u16>,
}

impl Default for BuildArgs {
    fn default() -> Self {
        let config = BuildConfig::default();
        Self {
            cache_dir: config.cache_dir,
            output_dir: config.output_dir,
            font_version: config.version,
            base: config.base,
            styles: config.styles,
            sizes: config.sizes,
        }
    }
}

impl From<BuildArgs> for BuildConfig {
    fn from(args: BuildArgs) -> Self {
        BuildConfig {
            version: args.font_version,
            base: args.base,
            styles: args.styles,
            sizes: args.sizes,
            marker: CACHE_MARKER.to_string(),
            cache_dir: args.cache_dir,
            output_dir: args.output_dir,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch sources if needed and generate every missing BDF file.
    Build {
        #[command(flatten)]
        args: BuildArgs,
    },
    /// Only populate the font cache.
    Download {
        #[arg(long, default_value = DEFAULT_CACHE_DIR)]
        cache_dir: PathBuf,
        #[arg(long, default_value = FONT_VERSION)]
        font_version: String,
    },
    /// Print the font set entries a build would produce.
    List {
        #[command(flatten)]
        args: BuildArgs,
    },
    /// Remove the font cache and generated BDF files.
    Clean {
        #[arg(long, default_value = DEFAULT_CACHE_DIR)]
        cache_dir: PathBuf,
        #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
        output_dir: PathBuf,
        /// Leave the downloaded sources alone.
        #[arg(long)]
        keep_cache: bool,
    },
}

impl Cli {
    pub fn run(self) -> Result<()> {
        self.command.unwrap_or(Commands::Build { args: BuildArgs::default() }).run()
    }
}

impl Commands {
    pub fn run(self) -> Result<()> {
        match self {
            Commands::Build { args } => {
                let config = BuildConfig::from(args);
                let summary = build_fonts(&config, &HttpFetcher, &FontForge::from_env())
                    .context("Font build failed")?;
                info!(
                    "{} planned, {} generated, {} already present, {} missing sources",
                    summary.planned,
                    summary.generated,
                    summary.existing,
                    summary.missing_sources.len()
                );
            }
            Commands::Download { cache_dir, font_version } => {
                let config = BuildConfig { version: font_version, cache_dir, ..Default::default() };
                prepare_dirs(&config)?;
                let dir = config.cache_dir().display();
                match ensure_sources(&config, &HttpFetcher)? {
                    SourceStatus::Cached => println!("Fonts already present in {dir}"),
                    SourceStatus::Downloaded => println!("Fonts ready in {dir}/"),
                }
            }
            Commands::List { args } => {
                for entry in BuildConfig::from(args).font_sets() {
                    println!("{:<32} {:>3}px  {}", entry.name, entry.size, entry.output_file_name());
                }
            }
            Commands::Clean { cache_dir, output_dir, keep_cache } => {
                if keep_cache {
                    clean(&[output_dir.as_path()])?;
                } else {
                    clean(&[cache_dir.as_path(), output_dir.as_path()])?;
                }
            }
        }
        Ok(())
    }
}
