//! # gscript
//!
//! gscript is a line-based scripting language with variables, integer and
//! real arithmetic, and a `print` statement. Every line is one statement and
//! is lexed, parsed and evaluated on its own; the only state shared between
//! lines is the variable environment.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::{io::Write, path::Path};

use crate::{
    config::{ErrorPolicy, RunConfig},
    error::Error,
    interpreter::{
        evaluator::core::{Environment, Outcome},
        lexer::lex,
        parser::parse_statement,
    },
};

/// Defines the parsed form of a line.
///
/// This module declares the `Statement` enum produced by the parser and the
/// binary operators understood by the evaluator.
pub mod ast;
/// Run settings.
///
/// Holds the error policy and blank-line handling used by [`run_script`].
pub mod config;
/// Provides unified error types for lexing, parsing, and evaluation.
///
/// Every error carries the line it was raised on, and the crate-level
/// [`Error`] wraps the per-phase errors for callers that run whole scripts.
pub mod error;
/// Orchestrates the lex, parse and evaluate pipeline.
///
/// # Responsibilities
/// - Coordinates the core components: lexer, parser, evaluator, and values.
/// - Provides entry points for tokenizing, parsing and running statements.
pub mod interpreter;
/// General utilities for safe numeric conversion.
pub mod util;

/// File extensions accepted for gscript source files.
pub const SCRIPT_EXTENSIONS: [&str; 2] = ["gscript", "gs"];

/// What happened during a completed run.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Statements that ran successfully.
    pub executed:    usize,
    /// Lines written to the output.
    pub printed:     usize,
    /// Errors from failing lines. Always empty under [`ErrorPolicy::Abort`].
    pub errors:      Vec<Error>,
    /// The variables as they stood after the last line.
    pub environment: Environment,
}

impl RunSummary {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Returns `true` if the path ends in one of [`SCRIPT_EXTENSIONS`].
///
/// # Example
/// ```
/// use std::path::Path;
///
/// use gscript::is_script_path;
///
/// assert!(is_script_path(Path::new("hello.gscript")));
/// assert!(is_script_path(Path::new("dir/hello.gs")));
/// assert!(!is_script_path(Path::new("hello.txt")));
/// assert!(!is_script_path(Path::new("gs")));
/// ```
#[must_use]
pub fn is_script_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SCRIPT_EXTENSIONS.contains(&ext))
}

/// Runs one line of source through the whole pipeline.
///
/// The line is trimmed, tokenized, parsed and evaluated against
/// `environment`. Printed text is returned in the [`Outcome`], not written.
///
/// # Errors
/// Returns the first lexing, parsing or runtime error of the line.
///
/// # Example
/// ```
/// use gscript::{
///     interpreter::evaluator::core::{Environment, Outcome},
///     run_line,
/// };
///
/// let mut env = Environment::new();
/// run_line("a = 10 - 3 - 2", 1, &mut env).unwrap();
///
/// let outcome = run_line("  print(a)  ", 2, &mut env).unwrap();
/// assert_eq!(outcome, Outcome::Printed("5".to_string()));
///
/// assert!(run_line("print(b)", 3, &mut env).is_err());
/// ```
pub fn run_line(source: &str, line: usize, environment: &mut Environment) -> Result<Outcome, Error> {
    let tokens = lex(source.trim(), line)?;
    log::trace!("line {line}: tokens {:?}",
                tokens.iter().map(|l| l.text.as_str()).collect::<Vec<_>>());

    let statement = parse_statement(&tokens, line)?;
    Ok(environment.eval_statement(&statement)?)
}

/// Runs a whole script, writing each printed line to `out`.
///
/// Lines are executed in order against a fresh [`Environment`]. What happens
/// on a failing line depends on [`RunConfig::error_policy`]: under
/// [`ErrorPolicy::Abort`] the error is returned immediately, under
/// [`ErrorPolicy::Continue`] it is recorded in the summary and the run goes
/// on with the next line.
///
/// # Errors
/// The first failing line's error under [`ErrorPolicy::Abort`], or an I/O
/// error if writing to `out` fails.
///
/// # Example
/// ```
/// use gscript::{config::RunConfig, run_script};
///
/// let mut out = Vec::new();
/// let source = "a = 2 + 3 * 4\nprint(\"a is\")\nprint(a)\n";
///
/// let summary = run_script(source, &mut out, &RunConfig::default()).unwrap();
///
/// assert_eq!(String::from_utf8(out).unwrap(), "a is\n14\n");
/// assert_eq!(summary.printed, 2);
/// ```
pub fn run_script<W: Write>(source: &str,
                            out: &mut W,
                            config: &RunConfig)
                            -> Result<RunSummary, Error> {
    run_script_with(source, out, config, |_| {})
}

/// Like [`run_script`], but calls `on_error` for each failing line as soon as
/// it fails under [`ErrorPolicy::Continue`], before any later line runs.
///
/// The errors are still collected in the returned [`RunSummary`].
///
/// # Errors
/// Same as [`run_script`].
///
/// # Example
/// ```
/// use gscript::{
///     config::{ErrorPolicy, RunConfig},
///     run_script_with,
/// };
///
/// let config = RunConfig { error_policy: ErrorPolicy::Continue,
///                          ..RunConfig::default() };
/// let mut failed_lines = Vec::new();
///
/// let summary = run_script_with("print(x)\nprint(1)",
///                               &mut Vec::<u8>::new(),
///                               &config,
///                               |e| failed_lines.push(e.line()))
///                   .unwrap();
///
/// assert_eq!(failed_lines, [Some(1)]);
/// assert_eq!(summary.errors.len(), 1);
/// ```
pub fn run_script_with<W, F>(source: &str,
                             out: &mut W,
                             config: &RunConfig,
                             mut on_error: F)
                             -> Result<RunSummary, Error>
    where W: Write,
          F: FnMut(&Error)
{
    let mut summary = RunSummary::default();

    for (index, text) in source.lines().enumerate() {
        let line = index + 1;

        if config.skip_blank_lines && text.trim().is_empty() {
            continue;
        }

        log::debug!("line {line}: {}", text.trim());
        match run_line(text, line, &mut summary.environment) {
            Ok(Outcome::Printed(output)) => {
                writeln!(out, "{output}")?;
                summary.printed += 1;
                summary.executed += 1;
            },
            Ok(Outcome::Assigned { name, value }) => {
                log::debug!("line {line}: {name} = {value}");
                summary.executed += 1;
            },
            Err(e) => match config.error_policy {
                ErrorPolicy::Abort => return Err(e),
                ErrorPolicy::Continue => {
                    log::warn!("{e}");
                    on_error(&e);
                    summary.errors.push(e);
                },
            },
        }
    }

    out.flush()?;
    Ok(summary)
}
