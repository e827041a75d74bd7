use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// Inserted between the stem and extension when no output path is given
pub const COPY_MARKER: &str = " Copy";

/// Work out where the shifted subtitles are written.
///
/// * `out_file` given: used as is.
/// * otherwise: `<stem> Copy.<ext>` next to `input`.
///
/// A `suffix` then renames the chosen path to `<input stem>.<suffix>.<ext>`,
/// keeping the chosen directory and extension. The stem always comes from
/// `input`, so the " Copy" marker never survives a suffix.
pub fn derive_output_path(input: &Path, out_file: Option<&Path>, suffix: Option<&str>) -> PathBuf {
    let chosen = match out_file {
        Some(path) => path.to_path_buf(),
        None => input.with_file_name(join_name(input, COPY_MARKER, input.extension())),
    };

    match suffix {
        Some(suffix) => {
            // stays in the chosen output's directory, not the input's
            let tag = format!(".{}", suffix);
            chosen.with_file_name(join_name(input, &tag, chosen.extension()))
        }
        None => chosen,
    }
}

/// `<stem of input><insert>[.<extension>]`
fn join_name(input: &Path, insert: &str, extension: Option<&OsStr>) -> OsString {
    let mut name = input.file_stem().map(OsString::from).unwrap_or_default();
    name.push(insert);
    if let Some(ext) = extension {
        name.push(".");
        name.push(ext);
    }
    name
}
