use crate::errors::{ConfigError, ShiftError, ShiftResult};
use crate::output::derive_output_path;
use crate::subtitles::TimeOffset;
use log::debug;
use std::fs;
use std::path::{self, Path, PathBuf};

/// Everything one shift run needs, resolved up front
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftConfig {
    /// Absolute path of an existing input file
    pub input: PathBuf,
    pub output: PathBuf,
    pub offset: TimeOffset,
    /// Print this many leading lines of input and output around the run
    pub preview: Option<usize>,
}

impl ShiftConfig {
    /// Check the input exists and derive the output path.
    ///
    /// Fails with [`ShiftError::InputNotFound`] naming the absolute input path,
    /// and with [`ShiftError::Config`] when the output would overwrite the input.
    pub fn resolve<P: AsRef<Path>>(
        in_file: P,
        out_file: Option<&Path>,
        suffix: Option<&str>,
        milliseconds: i64,
    ) -> ShiftResult<Self> {
        let requested = path::absolute(in_file.as_ref())?;
        if !requested.exists() {
            return Err(ShiftError::InputNotFound { path: requested });
        }
        let input = fs::canonicalize(&requested)?;

        let out_file = out_file.map(path::absolute).transpose()?;
        let output = derive_output_path(&input, out_file.as_deref(), suffix);

        if output.exists() && fs::canonicalize(&output)? == input {
            return Err(ConfigError::new(format!(
                "output file {} is the input file",
                output.display()
            ))
            .into());
        }

        debug!("Resolved {} -> {}", input.display(), output.display());
        Ok(ShiftConfig {
            input,
            output,
            offset: TimeOffset::from_millis(milliseconds),
            preview: None,
        })
    }

    pub fn with_preview(mut self, lines: Option<usize>) -> Self {
        self.preview = lines;
        self
    }
}
