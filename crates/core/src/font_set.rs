//! Font set enumeration: every (style, size) permutation to rasterize.

use std::path::{Path, PathBuf};

use crate::config::BuildConfig;

/// One font face at one pixel size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontSetEntry {
    pub name: String,
    pub size: u16,
}

impl FontSetEntry {
    pub fn new(name: impl Into<String>, size: u16) -> Self {
        Self { name: name.into(), size }
    }

    /// Source outline font inside the cache directory.
    pub fn source_path(&self, cache_dir: &Path) -> PathBuf {
        cache_dir.join(format!("{}.ttf", self.name))
    }

    /// FontForge names a BDF strike `{stem}-{pixelsize}.bdf`.
    pub fn output_file_name(&self) -> String {
        format!("{}-{}.bdf", self.name, self.size)
    }

    pub fn output_path(&self, output_dir: &Path) -> PathBuf {
        output_dir.join(self.output_file_name())
    }

    /// Filename prefix handed to FontForge's `Generate`, trailing dot included.
    pub fn output_prefix(&self, output_dir: &Path) -> PathBuf {
        output_dir.join(format!("{}.", self.name))
    }
}

/// Cartesian product of styles and sizes; style is the outer loop.
pub fn font_sets<S: AsRef<str>>(base: &str, styles: &[S], sizes: &[u16]) -> Vec<FontSetEntry> {
    styles
        .iter()
        .map(|style| format!("{base}{}", style.as_ref()))
        .flat_map(|name| sizes.iter().map(move |&size| FontSetEntry::new(name.clone(), size)))
        .collect()
}

impl BuildConfig {
    pub fn font_sets(&self) -> Vec<FontSetEntry> {
        font_sets(&self.base, &self.styles, &self.sizes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FONT_BASE, FONT_SIZES, FONT_STYLES};

    #[test]
    fn test_default_font_sets() {
        let sets = font_sets(FONT_BASE, FONT_STYLES, FONT_SIZES);
        assert_eq!(sets.len(), 12);
        assert_eq!(sets[0], FontSetEntry::new("IosevkaFixed-Extended", 8));
        assert_eq!(sets[3], FontSetEntry::new("IosevkaFixed-Extended", 32));
        assert_eq!(sets[4], FontSetEntry::new("IosevkaFixed-ExtendedBold", 8));
        assert_eq!(sets[11], FontSetEntry::new("IosevkaFixed-ExtendedThin", 32));
    }

    #[test]
    fn test_style_major_order() {
        let sets = font_sets("X", &["", "Bold"], &[8, 16]);
        let pairs: Vec<_> = sets.iter().map(|e| (e.name.as_str(), e.size)).collect();
        assert_eq!(pairs, vec![("X", 8), ("X", 16), ("XBold", 8), ("XBold", 16)]);
    }

    #[test]
    fn test_empty_axes() {
        assert!(font_sets::<&str>("X", &[], &[8]).is_empty());
        assert!(font_sets("X", &["Bold"], &[]).is_empty());
    }

    #[test]
    fn test_entry_paths() {
        let entry = FontSetEntry::new("XBold", 16);
        let cache = Path::new("cache");
        let out = Path::new("fonts");
        assert_eq!(entry.source_path(cache), Path::new("cache/XBold.ttf"));
        assert_eq!(entry.output_path(out), Path::new("fonts/XBold-16.bdf"));
        assert_eq!(entry.output_prefix(out), Path::new("fonts/XBold."));
    }

    #[test]
    fn test_config_font_sets() {
        let config = BuildConfig::default();
        assert_eq!(config.font_sets(), font_sets(FONT_BASE, FONT_STYLES, FONT_SIZES));
    }
}
