use super::types::SubtitleLine;
use crate::errors::TimestampError;
use chrono::NaiveTime;
use once_cell::sync::Lazy;
use regex::Regex;

static TIMESTAMP_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^([0-9]{2}:[0-9]{2}:[0-9]{2},[0-9]{3}) --> ([0-9]{2}:[0-9]{2}:[0-9]{2},[0-9]{3})$",
    )
    .expect("timestamp range pattern is valid")
});

static TIMESTAMP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{2}):([0-9]{2}):([0-9]{2}),([0-9]{3})$")
        .expect("timestamp pattern is valid")
});

/// Split a line read with `read_line` into its content and terminator
pub(crate) fn split_terminator(line: &str) -> (&str, &str) {
    if let Some(content) = line.strip_suffix("\r\n") {
        (content, &line[content.len()..])
    } else if let Some(content) = line.strip_suffix('\n') {
        (content, &line[content.len()..])
    } else {
        (line, "")
    }
}

/// Classify a raw line (terminator included) as a timestamp range or passthrough.
///
/// Only a line that is a timestamp range from start to end matches; a range
/// embedded in longer text is passthrough.
pub fn classify_line(line: &str) -> SubtitleLine<'_> {
    let (content, terminator) = split_terminator(line);

    match TIMESTAMP_RANGE.captures(content) {
        Some(caps) => {
            let (Some(start), Some(end)) = (caps.get(1), caps.get(2)) else {
                return SubtitleLine::Passthrough(line);
            };
            SubtitleLine::TimestampRange {
                start: start.as_str(),
                end: end.as_str(),
                terminator,
            }
        }
        None => SubtitleLine::Passthrough(line),
    }
}

/// Parse `HH:MM:SS,mmm` into a time of day
pub fn parse_timestamp(value: &str) -> Result<NaiveTime, TimestampError> {
    let caps = TIMESTAMP.captures(value).ok_or_else(|| {
        TimestampError::new(format!("'{}' is not a HH:MM:SS,mmm timestamp", value))
    })?;

    let component = |idx: usize| -> Result<u32, TimestampError> {
        caps[idx]
            .parse::<u32>()
            .map_err(|e| TimestampError::new(format!("'{}' in '{}': {}", &caps[idx], value, e)))
    };

    let (hours, minutes, seconds, millis) =
        (component(1)?, component(2)?, component(3)?, component(4)?);

    NaiveTime::from_hms_milli_opt(hours, minutes, seconds, millis)
        .ok_or_else(|| TimestampError::new(format!("'{}' is not a valid time of day", value)))
}
