//! Configuration constants for the Iosevka bitmap font build.

use std::path::{Path, PathBuf};

/// Iosevka release to fetch.
pub const FONT_VERSION: &str = "33.2.1";

/// Font family every set entry is derived from.
pub const FONT_BASE: &str = "IosevkaFixed-Extended";

/// Style suffixes appended to [`FONT_BASE`]. The empty string is the regular face.
pub const FONT_STYLES: &[&str] = &["", "Bold", "Thin"];

/// Pixel sizes to rasterize each style at.
pub const FONT_SIZES: &[u16] = &[8, 16, 24, 32];

/// File whose presence in the cache means the archive was already extracted.
pub const CACHE_MARKER: &str = "IosevkaFixed-Extended.ttf";

/// Where extracted TTF files live.
pub const DEFAULT_CACHE_DIR: &str = "target/iosevka";

/// Where generated BDF files are written; read by the `iosevka-embedded` crate.
pub const DEFAULT_OUTPUT_DIR: &str = "iosevka-embedded/fonts";

/// Release archive file name for a given version.
pub fn archive_name(version: &str) -> String {
    format!("PkgTTF-IosevkaFixed-{version}.zip")
}

/// Download URL for a given version.
pub fn archive_url(version: &str) -> String {
    format!(
        "https://github.com/be5invis/Iosevka/releases/download/v{version}/{}",
        archive_name(version)
    )
}

/// Everything a build needs to know, with [`Default`] matching the constants above.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    pub version: String,
    pub base: String,
    pub styles: Vec<String>,
    pub sizes: Vec<u16>,
    pub marker: String,
    pub cache_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            version: FONT_VERSION.to_string(),
            base: FONT_BASE.to_string(),
            styles: FONT_STYLES.iter().map(|s| s.to_string()).collect(),
            sizes: FONT_SIZES.to_vec(),
            marker: CACHE_MARKER.to_string(),
            cache_dir: PathBuf::from(DEFAULT_CACHE_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

impl BuildConfig {
    pub fn with_dirs(
        mut self,
        cache_dir: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        self.cache_dir = cache_dir.into();
        self.output_dir = output_dir.into();
        self
    }

    pub fn archive_name(&self) -> String {
        archive_name(&self.version)
    }

    pub fn archive_url(&self) -> String {
        archive_url(&self.version)
    }

    pub fn marker_path(&self) -> PathBuf {
        self.cache_dir.join(&self.marker)
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_archive_url() {
        assert_eq!(
            archive_url("33.2.1"),
            "https://github.com/be5invis/Iosevka/releases/download/v33.2.1/PkgTTF-IosevkaFixed-33.2.1.zip"
        );
    }

    #[test]
    fn test_default_config() {
        let config = BuildConfig::default();
        assert_eq!(config.version, FONT_VERSION);
        assert_eq!(config.styles, vec!["", "Bold", "Thin"]);
        assert_eq!(config.sizes, vec![8, 16, 24, 32]);
        assert_eq!(config.marker_path(), Path::new("target/iosevka/IosevkaFixed-Extended.ttf"));
    }

    #[test]
    fn test_with_dirs() {
        let config = BuildConfig::default().with_dirs("/tmp/cache", "/tmp/out");
        assert_eq!(config.cache_dir(), Path::new("/tmp/cache"));
        assert_eq!(config.output_dir(), Path::new("/tmp/out"));
        assert_eq!(config.archive_name(), "PkgTTF-IosevkaFixed-33.2.1.zip");
    }
}
