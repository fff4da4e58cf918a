//! Error types for argspec.
//!
//! Uses `thiserror` for ergonomic error definition. Every failure the
//! compiler, matcher, or coercer can produce is a distinct [`ErrorKind`].

use std::fmt;

use thiserror::Error;

use crate::types::TypeTag;

/// The main error type for argspec operations.
#[derive(Clone, Debug, PartialEq)]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Where the error occurred, if known.
    pub location: Option<Location>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub const fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            location: None,
        }
    }

    /// Attaches a location to this error.
    #[must_use]
    pub fn at(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    /// Attaches a location only if none is set yet.
    #[must_use]
    pub fn or_at(self, location: Location) -> Self {
        if self.location.is_some() {
            self
        } else {
            self.at(location)
        }
    }

    /// Creates a spec syntax error.
    #[must_use]
    pub fn spec_syntax(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::SpecSyntax(message.into()))
    }

    /// Creates an unknown option error.
    #[must_use]
    pub fn unknown_option(token: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownOption(token.into()))
    }

    /// Creates a missing argument error for an option.
    #[must_use]
    pub fn missing_argument(canonical: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingArgument(canonical.into()))
    }

    /// Creates a missing required option error.
    #[must_use]
    pub fn missing_required_option(canonical: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingRequiredOption(canonical.into()))
    }

    /// Creates a coercion error.
    #[must_use]
    pub fn type_coercion(tag: &TypeTag, raw: impl Into<String>, reason: CoercionFailure) -> Self {
        Self::new(ErrorKind::TypeCoercion {
            tag: tag.to_string(),
            raw: raw.into(),
            reason,
        })
    }

    /// Creates an insufficient rest arguments error.
    #[must_use]
    pub fn insufficient_rest_arguments(tag: &TypeTag) -> Self {
        Self::new(ErrorKind::InsufficientRestArguments {
            tag: tag.to_string(),
        })
    }

    /// Creates a too many arguments error naming the first surplus token.
    #[must_use]
    pub fn too_many_arguments(first_extra: impl Into<String>) -> Self {
        Self::new(ErrorKind::TooManyArguments(first_extra.into()))
    }
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if let Some(location) = &self.location {
            write!(f, " ({location})")?;
        }
        Ok(())
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// The DSL text could not be compiled.
    #[error("spec syntax error: {0}")]
    SpecSyntax(String),

    /// A `-`-prefixed token did not name any declared option.
    #[error("unknown option: {0}")]
    UnknownOption(String),

    /// An option that takes an argument was not followed by one.
    #[error("option {0} requires an argument")]
    MissingArgument(String),

    /// A required option never appeared.
    #[error("{0} is a mandatory option")]
    MissingRequiredOption(String),

    /// A raw token could not be converted to its declared type.
    #[error("cannot read {raw:?} as {tag}: {reason}")]
    TypeCoercion {
        /// The declared type tag.
        tag: String,
        /// The raw token.
        raw: String,
        /// Why the conversion failed.
        reason: CoercionFailure,
    },

    /// Fewer positional arguments than the spec demands.
    #[error("missing positional argument of type {tag}")]
    InsufficientRestArguments {
        /// Type tag of the first unsatisfied slot.
        tag: String,
    },

    /// Positional arguments remained after every slot was filled.
    #[error("too many arguments, starting at {0:?}")]
    TooManyArguments(String),
}

impl ErrorKind {
    /// Returns true if this error comes from compiling a spec rather than
    /// matching arguments against one.
    #[must_use]
    pub const fn is_compile_error(&self) -> bool {
        matches!(self, Self::SpecSyntax(_))
    }
}

/// Why a coercion failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CoercionFailure {
    /// The tag is not a known type.
    UnknownType,
    /// An integer token contained something other than ASCII digits.
    NotDigits,
    /// The integer radix is outside 2..=36.
    InvalidRadix(u32),
    /// The first digit is not valid in the radix.
    NoValidDigits,
    /// The digits overflow a 64-bit integer.
    OutOfRange,
    /// The token is not a floating-point number.
    InvalidFloat,
}

impl fmt::Display for CoercionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownType => f.write_str("unknown type"),
            Self::NotDigits => f.write_str("expected decimal digits"),
            Self::InvalidRadix(radix) => write!(f, "radix {radix} is not between 2 and 36"),
            Self::NoValidDigits => f.write_str("no digits valid in this radix"),
            Self::OutOfRange => f.write_str("too large for a 64-bit integer"),
            Self::InvalidFloat => f.write_str("not a number"),
        }
    }
}

/// Where an error occurred.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Location {
    /// A position in the DSL text.
    Spec {
        /// Byte offset (0-based).
        offset: usize,
        /// Line number (1-based).
        line: u32,
        /// Column number (1-based).
        column: u32,
    },
    /// An index into the argument vector being matched.
    Argument(usize),
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spec { line, column, .. } => write!(f, "spec {line}:{column}"),
            Self::Argument(index) => write!(f, "argument {index}"),
        }
    }
}
