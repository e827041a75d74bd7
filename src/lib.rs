pub mod subtitles;
pub use subtitles::{ShiftSummary, SubtitleLine, TimeOffset};

pub mod output;
pub use output::derive_output_path;

pub mod config;
pub use config::ShiftConfig;

pub mod errors;
pub use errors::{ConfigError, ShiftError, ShiftResult, TimestampError};

/// Rewrite `config.input` into `config.output` with every timestamp range shifted
pub fn shift_subtitles(config: &ShiftConfig) -> ShiftResult<ShiftSummary> {
    crate::subtitles::rewrite_local_file(&config.input, &config.output, config.offset)
}
