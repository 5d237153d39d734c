//! Source acquisition: download the release archive once and extract it into the cache.

use std::{io::Cursor, path::Path};

use log::{debug, info};
use reqwest::blocking::get;
use zip::ZipArchive;

use crate::{
    config::BuildConfig,
    error::{Error, Result},
};

/// Something that can turn a URL into the bytes behind it.
pub trait ArchiveFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}

/// Plain blocking HTTPS GET.
#[derive(Debug, Default, Clone, Copy)]
pub struct HttpFetcher;

impl ArchiveFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let response = get(url).map_err(|source| Error::Fetch { url: url.to_string(), source })?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::HttpStatus { url: url.to_string(), status });
        }

        let bytes = response
            .bytes()
            .map_err(|source| Error::Fetch { url: url.to_string(), source })?;

        let size_mb = bytes.len() as f64 / 1024.0 / 1024.0;
        info!("Downloaded {url} ({size_mb:.2} MB)");
        Ok(bytes.to_vec())
    }
}

/// Whether [`ensure_sources`] had to go to the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceStatus {
    Cached,
    Downloaded,
}

/// Extract every entry of a ZIP archive into `dir`.
pub fn extract_archive(bytes: &[u8], dir: &Path) -> Result<()> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;
    debug!("Extracting {} entries into {}", archive.len(), dir.display());
    archive.extract(dir)?;
    Ok(())
}

/// Make sure the cache holds the extracted archive.
///
/// Only the marker file is checked; a partial or stale cache is not detected.
/// Any failure here is fatal and leaves whatever was already extracted in place.
pub fn ensure_sources(config: &BuildConfig, fetcher: &impl ArchiveFetcher) -> Result<SourceStatus> {
    let marker = config.marker_path();
    if marker.exists() {
        debug!("Found {}, skipping download", marker.display());
        return Ok(SourceStatus::Cached);
    }

    println!("Fonts not found, downloading");
    let url = config.archive_url();
    let bytes = fetcher.fetch(&url)?;

    println!("Extracting font archive");
    extract_archive(&bytes, config.cache_dir())?;

    Ok(SourceStatus::Downloaded)
}
