//! Configuration for the argspec runtime.

use argspec_language::CompilerConfig;

/// How match results are printed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One `name = value` line per option, then one line per positional.
    #[default]
    Human,
    /// A single JSON object with `options` and `rest` members.
    Json,
}

/// Configuration for one runtime invocation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Output format for match results.
    pub format: OutputFormat,

    /// Print the compiled spec instead of matching arguments.
    pub describe: bool,

    /// Log verbosity, raised once per `-v`.
    pub verbosity: u8,

    /// Compiler settings.
    pub compiler: CompilerConfig,
}

impl RuntimeConfig {
    /// Creates a configuration that prints results as JSON.
    #[must_use]
    pub fn json() -> Self {
        Self {
            format: OutputFormat::Json,
            ..Self::default()
        }
    }

    /// Creates a configuration with every compile-time check turned on.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            compiler: CompilerConfig::strict(),
            ..Self::default()
        }
    }

    /// Builder method to set the output format.
    #[must_use]
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Builder method to enable/disable describe mode.
    #[must_use]
    pub fn with_describe(mut self, describe: bool) -> Self {
        self.describe = describe;
        self
    }

    /// Builder method to set log verbosity.
    #[must_use]
    pub fn with_verbosity(mut self, verbosity: u8) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Builder method to set the compiler configuration.
    #[must_use]
    pub fn with_compiler(mut self, compiler: CompilerConfig) -> Self {
        self.compiler = compiler;
        self
    }

    /// Returns the log filter used when `ARGSPEC_LOG` is unset.
    #[must_use]
    pub fn default_log_filter(&self) -> &'static str {
        match self.verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
