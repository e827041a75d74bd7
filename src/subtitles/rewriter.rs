use super::parser::classify_line;
use super::types::{ShiftSummary, SubtitleLine, TimeOffset};
use super::utils::reformat_range;
use crate::errors::ShiftResult;
use log::{debug, info, warn};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Copy `reader` to `writer` line by line, shifting every timestamp range by `offset`.
///
/// Lines that are not a timestamp range are written byte-for-byte. A rewritten
/// range keeps the input line's terminator, or gets `\n` when it had none.
/// Errors stop the copy where they happen; whatever was written stays written.
pub fn rewrite_lines<R: BufRead, W: Write>(
    mut reader: R,
    mut writer: W,
    offset: TimeOffset,
) -> ShiftResult<ShiftSummary> {
    let mut summary = ShiftSummary::default();
    let mut line = String::new();

    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        summary.lines += 1;

        match classify_line(&line) {
            SubtitleLine::TimestampRange {
                start,
                end,
                terminator,
            } => {
                let shifted = reformat_range(start, end, offset)
                    .map_err(|e| e.at_line(summary.lines))?;
                if shifted.day_wraps > 0 {
                    warn!(
                        "line {}: '{} --> {}' wrapped around midnight",
                        summary.lines, start, end
                    );
                }
                debug!(
                    "line {}: {} --> {} => {}",
                    summary.lines, start, end, shifted.text
                );

                writer.write_all(shifted.text.as_bytes())?;
                writer.write_all(if terminator.is_empty() {
                    b"\n".as_slice()
                } else {
                    terminator.as_bytes()
                })?;

                summary.shifted_ranges += 1;
                summary.day_wraps += shifted.day_wraps;
            }
            SubtitleLine::Passthrough(raw) => {
                writer.write_all(raw.as_bytes())?;
                summary.passthrough_lines += 1;
            }
        }
    }

    writer.flush()?;
    Ok(summary)
}

/// Rewrite the subtitle file at `input` into `output` (created or truncated)
pub fn rewrite_local_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    offset: TimeOffset,
) -> ShiftResult<ShiftSummary> {
    let (input, output) = (input.as_ref(), output.as_ref());
    info!(
        "Shifting {} by {} ms into {}",
        input.display(),
        offset.millis(),
        output.display()
    );

    let reader = BufReader::new(File::open(input)?);
    let writer = BufWriter::new(File::create(output)?);
    let summary = rewrite_lines(reader, writer, offset)?;

    info!(
        "Rewrote {} lines: {} ranges shifted, {} passed through, {} day wraps",
        summary.lines, summary.shifted_ranges, summary.passthrough_lines, summary.day_wraps
    );
    Ok(summary)
}
