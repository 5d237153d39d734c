//! External rasterizer contract.
//!
//! Outline fonts are turned into BDF strikes by FontForge. Paths and sizes are
//! passed as script arguments rather than spliced into the script text, so no
//! shell or quoting is involved.

use std::{
    env,
    ffi::OsString,
    io,
    path::{Path, PathBuf},
    process::Command,
};

use log::debug;

use crate::font_set::FontSetEntry;

/// FontForge native script; `$1` source, `$2` pixel size, `$3` output prefix.
pub const FONTFORGE_SCRIPT: &str =
    r#"Open($1); BitmapsAvail([Strtol($2)]); BitmapsRegen([Strtol($2)]); Generate($3, "bdf")"#;

/// Environment variable naming the FontForge binary.
pub const FONTFORGE_ENV: &str = "FONTFORGE";

/// One rasterization request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterJob {
    pub name: String,
    pub size: u16,
    pub source: PathBuf,
    pub output: PathBuf,
    pub output_prefix: PathBuf,
}

impl RasterJob {
    pub fn new(entry: &FontSetEntry, cache_dir: &Path, output_dir: &Path) -> Self {
        Self {
            name: entry.name.clone(),
            size: entry.size,
            source: entry.source_path(cache_dir),
            output: entry.output_path(output_dir),
            output_prefix: entry.output_prefix(output_dir),
        }
    }
}

pub trait Rasterizer {
    /// Run the tool for `job`.
    ///
    /// `Err` means the tool could not be started. A tool that starts and fails
    /// is not an error; it simply leaves no output behind.
    fn rasterize(&self, job: &RasterJob) -> io::Result<()>;
}

#[derive(Debug, Clone)]
pub struct FontForge {
    program: OsString,
}

impl Default for FontForge {
    fn default() -> Self {
        Self::new("fontforge")
    }
}

impl FontForge {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self { program: program.into() }
    }

    /// Honour `$FONTFORGE`, falling back to `fontforge` on `PATH`.
    pub fn from_env() -> Self {
        env::var_os(FONTFORGE_ENV).map(Self::new).unwrap_or_default()
    }

    pub fn program(&self) -> &OsString {
        &self.program
    }

    pub fn command(&self, job: &RasterJob) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.arg("-lang=ff")
            .arg("-c")
            .arg(FONTFORGE_SCRIPT)
            .arg(&job.source)
            .arg(job.size.to_string())
            .arg(&job.output_prefix);
        cmd
    }
}

impl Rasterizer for FontForge {
    fn rasterize(&self, job: &RasterJob) -> io::Result<()> {
        let output = self.command(job).output()?;
        debug!("{} exited with {} for {}", self.program.to_string_lossy(), output.status, job.name);
        if !output.stdout.is_empty() {
            debug!("stdout: {}", String::from_utf8_lossy(&output.stdout));
        }
        if !output.stderr.is_empty() {
            debug!("stderr: {}", String::from_utf8_lossy(&output.stderr));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::ffi::OsStr;

    use super::*;

    fn job() -> RasterJob {
        RasterJob::new(&FontSetEntry::new("X Bold\"", 16), Path::new("cache"), Path::new("out"))
    }

    #[test]
    fn test_raster_job_paths() {
        let job = job();
        assert_eq!(job.source, Path::new("cache/X Bold\".ttf"));
        assert_eq!(job.output, Path::new("out/X Bold\"-16.bdf"));
        assert_eq!(job.output_prefix, Path::new("out/X Bold\"."));
    }

    #[test]
    fn test_command_uses_argument_list() {
        let cmd = FontForge::default().command(&job());
        assert_eq!(cmd.get_program(), OsStr::new("fontforge"));

        let args: Vec<&OsStr> = cmd.get_args().collect();
        assert_eq!(
            args,
            vec![
                OsStr::new("-lang=ff"),
                OsStr::new("-c"),
                OsStr::new(FONTFORGE_SCRIPT),
                OsStr::new("cache/X Bold\".ttf"),
                OsStr::new("16"),
                OsStr::new("out/X Bold\"."),
            ]
        );
    }

    #[test]
    fn test_custom_program() {
        let ff = FontForge::new("/opt/fontforge/bin/fontforge");
        assert_eq!(ff.command(&job()).get_program(), OsStr::new("/opt/fontforge/bin/fontforge"));
    }

    #[test]
    fn test_missing_program_is_launch_error() {
        let ff = FontForge::new("iosevka-bdf-no-such-rasterizer");
        assert!(ff.rasterize(&job()).is_err());
    }
}
