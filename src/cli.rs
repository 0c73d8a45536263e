// Command line surface - two positional paths plus output formatting flags

use std::ffi::OsString;
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::Parser;
use thiserror::Error;

use crate::engine::Config;

/// Shown whenever the arguments cannot be used.
pub const USAGE: &str = "\
This program requires exactly two arguments:
    1) the path to the input file, and
    2) the path to the result file

Please try again!";

/// Sort words alphabetically and integers numerically, keeping each
/// position's type.
///
/// Options go before the two paths; a path may itself start with `-`.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "typesort", version)]
pub struct CliArgs {
    /// Path to the input file
    #[arg(allow_hyphen_values = true)]
    pub input: PathBuf,

    /// Path to the result file
    #[arg(allow_hyphen_values = true)]
    pub output: PathBuf,

    /// Separator placed between output values
    #[arg(long, default_value = " ")]
    pub separator: String,

    /// End the output line with a newline
    #[arg(long)]
    pub trailing_newline: bool,
}

impl CliArgs {
    pub fn config(&self) -> Config {
        Config::default()
            .with_separator(self.separator.clone())
            .with_trailing_newline(self.trailing_newline)
    }
}

/// Arguments that do not describe a run. Handled by printing a message and
/// exiting cleanly.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ArgumentError {
    /// `--help` or `--version` was requested.
    #[error("{0}")]
    Info(String),

    /// Wrong number of arguments or an unknown flag.
    #[error("invalid arguments: {detail}")]
    Usage { detail: String },
}

impl ArgumentError {
    /// Text to print to standard output.
    pub fn message(&self) -> &str {
        match self {
            ArgumentError::Info(text) => text,
            ArgumentError::Usage { .. } => USAGE,
        }
    }
}

/// Parses a full argument list, program name first.
pub fn parse_args<I, T>(args: I) -> Result<CliArgs, ArgumentError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    CliArgs::try_parse_from(args).map_err(|err| match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            ArgumentError::Info(err.render().to_string())
        }
        _ => ArgumentError::Usage {
            detail: err.render().to_string(),
        },
    })
}
