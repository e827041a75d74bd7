mod parser;
mod preview;
mod rewriter;
mod types;
mod utils;

pub use parser::{classify_line, parse_timestamp};
pub use preview::preview_local_lines;
pub use rewriter::{rewrite_lines, rewrite_local_file};
pub use types::{ShiftSummary, SubtitleLine, TimeOffset};
pub use utils::{format_timestamp, reformat_range, shift_timestamp, ShiftedRange};
