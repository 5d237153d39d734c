//! The font asset builder: prepare directories, fetch sources, rasterize what is missing.

use std::fs::create_dir_all;

use log::{debug, warn};

use crate::{
    config::BuildConfig,
    error::{Error, Result},
    fetch::{ArchiveFetcher, SourceStatus, ensure_sources},
    rasterize::{RasterJob, Rasterizer},
};

/// What a single pass did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSummary {
    pub sources: SourceStatus,
    pub planned: usize,
    pub generated: usize,
    pub existing: usize,
    pub missing_sources: Vec<String>,
    pub launch_failures: usize,
}

/// Create the cache and output directories, parents included.
pub fn prepare_dirs(config: &BuildConfig) -> Result<()> {
    for dir in [config.cache_dir(), config.output_dir()] {
        create_dir_all(dir).map_err(|e| Error::io(dir, e))?;
    }
    Ok(())
}

/// Run one full, re-runnable pass over every font set entry.
///
/// Only directory creation, download and extraction can fail the build. Per-entry
/// problems are reported and skipped; an existing output file is never regenerated.
pub fn build_fonts(
    config: &BuildConfig,
    fetcher: &impl ArchiveFetcher,
    rasterizer: &impl Rasterizer,
) -> Result<BuildSummary> {
    prepare_dirs(config)?;
    let sources = ensure_sources(config, fetcher)?;

    let sets = config.font_sets();
    let mut summary = BuildSummary {
        sources,
        planned: sets.len(),
        generated: 0,
        existing: 0,
        missing_sources: Vec::new(),
        launch_failures: 0,
    };

    println!("Building {} font permutations...", sets.len());
    for entry in &sets {
        let job = RasterJob::new(entry, config.cache_dir(), config.output_dir());

        if !job.source.exists() {
            warn!("Unable to find font file matching {}, skipping...", entry.name);
            summary.missing_sources.push(entry.name.clone());
            continue;
        }

        if job.output.exists() {
            debug!("{} already exists, skipping", job.output.display());
            summary.existing += 1;
            continue;
        }

        println!("Generating {}...", job.output.display());
        match rasterizer.rasterize(&job) {
            Ok(()) => summary.generated += 1,
            Err(e) => {
                warn!("Unable to run rasterizer for {}: {e}", job.output.display());
                summary.launch_failures += 1;
            }
        }
    }

    Ok(summary)
}
