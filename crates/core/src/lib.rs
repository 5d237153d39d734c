//! iosevka-bdf core - fetch the Iosevka release and rasterize it into BDF fonts.

pub mod build;
pub mod clean;
pub mod config;
pub mod error;
pub mod fetch;
pub mod font_set;
pub mod rasterize;

pub use build::{BuildSummary, build_fonts, prepare_dirs};
pub use clean::clean;
pub use config::BuildConfig;
pub use error::{Error, Result};
pub use fetch::{ArchiveFetcher, HttpFetcher, SourceStatus, ensure_sources, extract_archive};
pub use font_set::{FontSetEntry, font_sets};
pub use rasterize::{FontForge, RasterJob, Rasterizer};
