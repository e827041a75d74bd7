use crate::errors::ShiftResult;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Non-blank lines among the first `n + 1` lines of a file, terminators trimmed
pub fn preview_local_lines<P: AsRef<Path>>(path: P, n: usize) -> ShiftResult<Vec<String>> {
    let reader = BufReader::new(File::open(path)?);
    let mut lines = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if !line.trim().is_empty() {
            lines.push(line.trim_end_matches('\r').to_string());
        }
        if i >= n {
            break;
        }
    }

    Ok(lines)
}
