use crate::output::derive_output_path;
use std::path::{Path, PathBuf};

#[test]
fn test_default_output_gets_copy_marker() {
    assert_eq!(
        derive_output_path(Path::new("/subs/movie.srt"), None, None),
        PathBuf::from("/subs/movie Copy.srt")
    );
    assert_eq!(
        derive_output_path(Path::new("/subs/movie.part1.srt"), None, None),
        PathBuf::from("/subs/movie.part1 Copy.srt")
    );
    assert_eq!(
        derive_output_path(Path::new("/subs/movie"), None, None),
        PathBuf::from("/subs/movie Copy")
    );
}

#[test]
fn test_explicit_output_is_kept() {
    assert_eq!(
        derive_output_path(Path::new("/subs/movie.srt"), Some(Path::new("/out/synced.srt")), None),
        PathBuf::from("/out/synced.srt")
    );
}

#[test]
fn test_suffix_replaces_copy_marker() {
    assert_eq!(
        derive_output_path(Path::new("/subs/movie.srt"), None, Some("en")),
        PathBuf::from("/subs/movie.en.srt")
    );
}

#[test]
fn test_suffix_uses_input_stem_with_explicit_output() {
    // directory and extension come from the chosen output, the stem from the input
    assert_eq!(
        derive_output_path(
            Path::new("/subs/movie.srt"),
            Some(Path::new("/out/synced.txt")),
            Some("pt-BR")
        ),
        PathBuf::from("/out/movie.pt-BR.txt")
    );
}
