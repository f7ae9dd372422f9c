use clap::ValueEnum;

/// What the driver does when a line fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ErrorPolicy {
    /// Stop the run at the first failing line.
    #[default]
    Abort,
    /// Report the failure and carry on with the next line.
    Continue,
}

/// Settings for a single script run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunConfig {
    /// How failing lines are handled.
    pub error_policy:     ErrorPolicy,
    /// Whether whitespace-only lines are skipped instead of being parsed.
    /// A blank line that reaches the parser fails with a too-few-tokens error.
    pub skip_blank_lines: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self { error_policy:     ErrorPolicy::Abort,
               skip_blank_lines: true, }
    }
}
