use crate::errors::TimestampError;
use chrono::TimeDelta;
use serde::Serialize;

/// Signed shift, in milliseconds, applied to every timestamp of a file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeOffset(pub i64);

impl TimeOffset {
    pub fn from_millis(ms: i64) -> Self {
        TimeOffset(ms)
    }

    pub fn millis(&self) -> i64 {
        self.0
    }

    /// Convert to a chrono duration, failing for offsets chrono cannot represent
    pub fn as_delta(&self) -> Result<TimeDelta, TimestampError> {
        TimeDelta::try_milliseconds(self.0).ok_or_else(|| {
            TimestampError::new(format!("offset of {} ms is out of range", self.0))
        })
    }
}

/// One input line, classified before it is emitted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubtitleLine<'a> {
    /// `HH:MM:SS,mmm --> HH:MM:SS,mmm`, the only shape that gets rewritten
    TimestampRange {
        start: &'a str,
        end: &'a str,
        /// `"\n"`, `"\r\n"` or empty for a final unterminated line
        terminator: &'a str,
    },
    /// Anything else, terminator included, copied verbatim
    Passthrough(&'a str),
}

/// Counters gathered over one rewrite
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ShiftSummary {
    pub lines: usize,
    pub shifted_ranges: usize,
    pub passthrough_lines: usize,
    /// Timestamps that crossed midnight and wrapped around the clock
    pub day_wraps: usize,
}
