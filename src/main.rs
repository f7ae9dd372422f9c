use std::{fs, io, path::PathBuf, process::ExitCode};

use clap::Parser;
use gscript::{
    config::{ErrorPolicy, RunConfig},
    error::Error,
    is_script_path, run_script_with,
};

/// gscript runs line-based scripts of assignments and print statements.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The script to run; must end in `.gscript` or `.gs`.
    file: PathBuf,

    /// What to do when a line fails: stop the run, or report it and continue.
    #[arg(long, value_enum, default_value_t = ErrorPolicy::Abort)]
    on_error: ErrorPolicy,

    /// Parse blank lines instead of skipping them. A blank line is then a
    /// syntax error.
    #[arg(long)]
    reject_blank_lines: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    if !is_script_path(&args.file) {
        eprintln!("Error: File must end with '.gscript' or '.gs' extension.");
        return ExitCode::FAILURE;
    }

    let Ok(script) = fs::read_to_string(&args.file) else {
        eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                  args.file.display());
        return ExitCode::FAILURE;
    };

    let config = RunConfig { error_policy:     args.on_error,
                             skip_blank_lines: !args.reject_blank_lines, };

    let mut stdout = io::stdout().lock();
    let report = |e: &Error| eprintln!("{e}");
    match run_script_with(&script, &mut stdout, &config, report) {
        Ok(summary) => {
            log::info!("{}: {} statements, {} printed, {} failed",
                       args.file.display(),
                       summary.executed,
                       summary.printed,
                       summary.errors.len());
            if summary.is_success() { ExitCode::SUCCESS } else { ExitCode::FAILURE }
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}
