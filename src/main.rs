use std::{io, path::PathBuf, process::ExitCode};

use clap::Parser;
use grd::run_file;
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Extension of grd program files.
const PROGRAM_EXTENSION: &str = "grd";

/// grd runs programs written as graphs of named nodes, starting at `START`
/// and finishing at `END`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the program to run.
    file: PathBuf,

    /// Logs the parsed graph and every execution step to stderr.
    #[arg(short, long)]
    debug: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.debug);

    if args.file.extension().is_none_or(|ext| ext != PROGRAM_EXTENSION) {
        warn!(file = %args.file.display(), "expected a .{PROGRAM_EXTENSION} program file");
    }

    match run_file(&args.file, io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}

/// Installs the log subscriber. `--debug` enables debug output for this
/// crate; otherwise `RUST_LOG` applies, defaulting to warnings only.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("grd=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .with_target(false)
                             .init();
}
