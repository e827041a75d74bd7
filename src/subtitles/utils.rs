use super::parser::parse_timestamp;
use super::types::TimeOffset;
use crate::errors::TimestampError;
use chrono::{NaiveTime, Timelike};

/// Format a time of day in SRT format
pub fn format_timestamp(time: NaiveTime) -> String {
    // leap-second nanos (>= 1s) never come out of parse_timestamp
    let millis = (time.nanosecond() / 1_000_000) % 1000;

    format!(
        "{:02}:{:02}:{:02},{:03}",
        time.hour(),
        time.minute(),
        time.second(),
        millis
    )
}

/// Shift a time of day by `offset`, wrapping around midnight.
///
/// Returns the shifted time and whether it crossed a day boundary.
pub fn shift_timestamp(
    time: NaiveTime,
    offset: TimeOffset,
) -> Result<(NaiveTime, bool), TimestampError> {
    let delta = offset.as_delta()?;
    let (shifted, overflow_secs) = time.overflowing_add_signed(delta);
    Ok((shifted, overflow_secs != 0))
}

/// A shifted timestamp range line, without terminator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftedRange {
    pub text: String,
    pub day_wraps: usize,
}

/// Shift both ends of a range independently and render `<start> --> <end>`
pub fn reformat_range(
    start: &str,
    end: &str,
    offset: TimeOffset,
) -> Result<ShiftedRange, TimestampError> {
    let (new_start, start_wrapped) = shift_timestamp(parse_timestamp(start)?, offset)?;
    let (new_end, end_wrapped) = shift_timestamp(parse_timestamp(end)?, offset)?;

    Ok(ShiftedRange {
        text: format!(
            "{} --> {}",
            format_timestamp(new_start),
            format_timestamp(new_end)
        ),
        day_wraps: usize::from(start_wrapped) + usize::from(end_wrapped),
    })
}
