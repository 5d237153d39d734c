//! iosevka-bdf CLI library.

pub mod cli;
