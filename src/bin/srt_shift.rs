use clap::Parser;
use srtshift::subtitles::preview_local_lines;
use srtshift::{shift_subtitles, ShiftConfig, ShiftResult};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Modify the timestamps on .SRT files.
#[derive(Parser, Debug)]
#[command(name = "srt_shift", version)]
struct Args {
    /// Path to the input .SRT file
    #[arg(long = "inFile", value_name = "PATH")]
    in_file: PathBuf,

    /// Path to the output file (default: "<input> Copy.srt" next to the input)
    #[arg(short = 'o', long = "outFile", value_name = "PATH")]
    out_file: Option<PathBuf>,

    /// Time in milliseconds to change the timestamps by, may be negative
    #[arg(long, allow_negative_numbers = true)]
    milliseconds: i64,

    /// (optional) add a suffix (e.g. 'en') to the file before the .srt extension
    #[arg(short, long)]
    suffix: Option<String>,

    /// Print the first N non-blank lines of the input before and the output after
    #[arg(long, value_name = "N")]
    preview: Option<usize>,

    /// Print a JSON summary of what was rewritten
    #[arg(long)]
    summary: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("srt_shift: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> ShiftResult<()> {
    let config = ShiftConfig::resolve(
        &args.in_file,
        args.out_file.as_deref(),
        args.suffix.as_deref(),
        args.milliseconds,
    )?
    .with_preview(args.preview);

    if let Some(n) = config.preview {
        print_preview("Input", &config.input, n)?;
    }

    let summary = shift_subtitles(&config)?;

    if let Some(n) = config.preview {
        print_preview("Output", &config.output, n)?;
    }
    if args.summary {
        let json = serde_json::to_string_pretty(&summary).map_err(std::io::Error::other)?;
        println!("{}", json);
    }
    Ok(())
}

fn print_preview(label: &str, path: &Path, n: usize) -> ShiftResult<()> {
    println!("{} ({}):", label, path.display());
    for line in preview_local_lines(path, n)? {
        println!("{}", line);
    }
    println!();
    Ok(())
}
