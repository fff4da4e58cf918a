//! Command-line runtime for argspec.
//!
//! This crate provides:
//! - [`RuntimeConfig`] - Output, describe, verbosity, and compiler settings
//! - [`parse_cli_args`] / [`execute`] - The `argspec` binary's behavior
//! - [`logging`] - `tracing` subscriber setup
//! - [`output`] - Human and JSON rendering of match results

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod logging;
pub mod output;

pub use config::{OutputFormat, RuntimeConfig};

use argspec_language::SpecCompiler;
use argspec_language::pretty::{describe, usage};
use argspec_matcher::Matcher;
use thiserror::Error;
use tracing::debug;

/// Help text for the `argspec` binary.
pub const HELP: &str = "argspec - match arguments against a spec

USAGE:
    argspec [OPTIONS] [--] <SPEC> [ARGS...]

ARGUMENTS:
    <SPEC>       Spec text, e.g. \"--size,-s Int10 [--verbose,-v] String+\"
    [ARGS...]    Arguments to match, passed through verbatim

OPTIONS:
    -h, --help        Print help information
    -V, --version     Print version information
    -j, --json        Print the result as JSON
    -d, --describe    Print the compiled spec instead of matching
        --strict      Reject unknown type tags at compile time
        --no-dup      Reject aliases declared by more than one option
    -v, --verbose     Raise the log level (repeatable)

A dash-prefixed token without whitespace is read as an option; put -- before
<SPEC> if it is such a token. Set ARGSPEC_LOG to a tracing filter directive
to override -v.

EXIT STATUS:
    0    success
    1    the spec failed to compile or the arguments failed to match
    2    usage error";

/// Errors from a runtime invocation.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// The spec failed to compile or the arguments failed to match.
    #[error(transparent)]
    Argspec(#[from] argspec_foundation::Error),

    /// The binary's own arguments were malformed.
    #[error("{0}")]
    Usage(String),

    /// The result could not be serialized.
    #[error("cannot serialize result: {0}")]
    Json(#[from] serde_json::Error),
}

impl RuntimeError {
    /// Process exit status for this error.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Usage(_) => 2,
            Self::Argspec(_) | Self::Json(_) => 1,
        }
    }
}

/// What the binary was asked to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Print help.
    Help,
    /// Print the version.
    Version,
    /// Compile a spec and match (or describe) it.
    Run(Invocation),
}

/// A spec, the arguments to match against it, and how to report.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    /// Runtime settings.
    pub config: RuntimeConfig,
    /// Spec text.
    pub spec: String,
    /// Arguments to match.
    pub args: Vec<String>,
}

/// Parses the binary's arguments, excluding the program name.
///
/// Options are read until the first token that is not one; that token is
/// the spec and everything after it is passed through unread.
///
/// # Errors
/// Returns [`RuntimeError::Usage`] for an unknown option or a missing spec.
pub fn parse_cli_args<I, S>(args: I) -> Result<Command, RuntimeError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut config = RuntimeConfig::default();
    let mut args = args.into_iter().map(Into::into);
    let mut spec = None;

    while let Some(arg) = args.next() {
        if arg == "--" {
            spec = args.next();
            break;
        }
        if !is_runtime_option(&arg) {
            spec = Some(arg);
            break;
        }
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "-V" | "--version" => return Ok(Command::Version),
            "-j" | "--json" => config.format = OutputFormat::Json,
            "-d" | "--describe" => config.describe = true,
            "--strict" => config.compiler.strict_types = true,
            "--no-dup" => config.compiler.reject_duplicate_aliases = true,
            "-v" | "--verbose" => config.verbosity = config.verbosity.saturating_add(1),
            other => return Err(RuntimeError::Usage(format!("unknown option: {other}"))),
        }
    }

    let spec = spec.ok_or_else(|| RuntimeError::Usage("missing <SPEC> argument".to_string()))?;
    Ok(Command::Run(Invocation {
        config,
        spec,
        args: args.collect(),
    }))
}

/// Compiles the spec, then matches or describes it.
///
/// # Errors
/// Returns [`RuntimeError::Argspec`] if compiling or matching fails.
pub fn execute(invocation: &Invocation) -> Result<String, RuntimeError> {
    let config = &invocation.config;
    let spec = SpecCompiler::with_config(config.compiler).compile(&invocation.spec)?;

    if config.describe {
        return Ok(format!("{}\n{}", usage(&spec), describe(&spec)));
    }

    let result = Matcher::new(&spec).match_args(&invocation.args)?;
    debug!(format = ?config.format, "rendering result");
    output::render(&result, config.format)
}

/// Parses the arguments and runs the resulting command.
///
/// # Errors
/// Returns a usage error for malformed options, or any error from
/// [`execute`].
pub fn run<I, S>(args: I) -> Result<String, RuntimeError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    match parse_cli_args(args)? {
        Command::Help => Ok(HELP.to_string()),
        Command::Version => Ok(version()),
        Command::Run(invocation) => execute(&invocation),
    }
}

/// Version line printed by `--version`.
#[must_use]
pub fn version() -> String {
    format!("argspec {}", env!("CARGO_PKG_VERSION"))
}

/// Dash-prefixed tokens without whitespace belong to the binary. Every
/// valid spec that starts with a dash contains whitespace.
fn is_runtime_option(arg: &str) -> bool {
    arg.starts_with('-') && !arg.contains(char::is_whitespace)
}
