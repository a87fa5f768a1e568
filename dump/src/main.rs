//! A CLI tool for inspecting medical image files
//! by printing their header summary in a human readable format,
//! and optionally writing them back with edited values.
use clap::Parser;
use dcmingest_dump::{ColorMode, DumpOptions};
use dcmingest_parser::{DecodeOptions, EditSpec};
use snafu::prelude::*;
use snafu::{Report, Whatever};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, Level};

/// The stage at which a file failed, which selects the exit code.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Stage {
    Read,
    Print,
    Write,
}

impl Stage {
    fn exit_code(self) -> i32 {
        match self {
            Stage::Read => -2,
            Stage::Print => -3,
            Stage::Write => -4,
        }
    }
}

/// Print the header summaries of medical image files,
/// optionally writing them back with edited values
#[derive(Debug, Parser)]
#[command(version)]
struct App {
    /// Files to decode
    #[arg(required = true)]
    files: Vec<PathBuf>,
    /// Leave out the element lines
    #[arg(long = "summary-only")]
    summary_only: bool,
    /// Believe the declared transfer syntax
    /// instead of checking it against the data
    #[arg(long = "trust-declared")]
    trust_declared: bool,
    /// Write the re-encoded file to this path
    /// (a directory when more than one file is given)
    #[arg(long = "rewrite", value_name = "OUT")]
    rewrite: Option<PathBuf>,
    /// Replace a top level value before rewriting,
    /// as `gggg,eeee=value` or `Alias=value`
    #[arg(long = "edit", value_name = "TAG=VALUE", requires = "rewrite")]
    edits: Vec<EditSpec>,
    /// Print text values whole
    #[arg(long = "no-text-limit")]
    no_text_limit: bool,
    /// Line width for cutting values (the terminal width by default)
    #[arg(short = 'w', long = "width")]
    width: Option<u32>,
    /// When to color the output: auto, never or always
    #[arg(long = "color", default_value = "auto")]
    color: ColorMode,
    /// Stop at the first file that fails
    #[arg(long = "fail-first")]
    fail_first: bool,
    /// Log decoding details
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{}", Report::from_error(e));
        std::process::exit(Stage::Read.exit_code());
    }
}

fn output_path(out: &Path, input: &Path, many: bool) -> PathBuf {
    match (many, input.file_name()) {
        (true, Some(name)) => out.join(name),
        _ => out.to_path_buf(),
    }
}

fn run() -> Result<(), Whatever> {
    let app = App::parse();

    let level = if app.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber)
        .whatever_context::<_, Whatever>("Could not install the log subscriber")
    {
        eprintln!("[ERROR] {}", Report::from_error(e));
    }

    let mut options = DumpOptions::new();
    options
        .no_text_limit(app.no_text_limit)
        .summary_only(app.summary_only)
        .color_mode(app.color);
    if let Some(width) = app.width {
        options.width(width);
    }

    let many = app.files.len() > 1;
    if let (true, Some(out)) = (many, &app.rewrite) {
        std::fs::create_dir_all(out)
            .with_whatever_context(|_| format!("Could not create directory {}", out.display()))?;
    }
    let stop_early = !many || app.fail_first;

    let mut failures = 0;
    for path in &app.files {
        println!("{}: ", path.display());
        if let Err(stage) = process(&app, &options, path, many) {
            if stop_early {
                std::process::exit(stage.exit_code());
            }
            failures += 1;
        }
    }
    std::process::exit(failures);
}

fn process(app: &App, options: &DumpOptions, path: &Path, many: bool) -> Result<(), Stage> {
    let mut summary = DecodeOptions::new()
        .trust_declared_file(app.trust_declared)
        .open_file(path)
        .map_err(|e| {
            debug!("Failure class: {:?}", e.kind());
            eprintln!("{}", Report::from_error(e));
            Stage::Read
        })?;

    let mut outcome = Ok(());
    if let Some(out) = &app.rewrite {
        let target = output_path(out, path, many);
        match summary
            .apply_edits(&app.edits)
            .and_then(|_| summary.write_to_file(&target))
        {
            Ok(()) => debug!("Rewrote {} to {}", path.display(), target.display()),
            Err(e) => {
                eprintln!("[ERROR] {}", Report::from_error(e));
                outcome = Err(Stage::Write);
            }
        }
    }

    match options.dump_summary(&summary) {
        // a closed pipe ends the output quietly
        Err(e) if e.kind() == ErrorKind::BrokenPipe => outcome,
        Err(e) => {
            eprintln!("[ERROR] {}", Report::from_error(e));
            Err(Stage::Print)
        }
        Ok(()) => outcome,
    }
}
