//! Matching argument vectors against compiled argspec specs.
//!
//! A [`Matcher`] borrows a [`CompiledSpec`] and turns an argument vector
//! into a [`ParseResult`]: supplied options keyed by canonical name, and
//! the coerced positional arguments.
//!
//! # Example
//!
//! ```
//! use argspec_foundation::Value;
//!
//! let result = argspec_matcher::parse(
//!     "--size,-s Int10 [--verbose,-v] String+",
//!     ["-v", "-s", "5", "foo", "bar"],
//! )
//! .unwrap();
//!
//! assert_eq!(result.get("--size"), Some(&Value::Int(5)));
//! assert!(result.is_flag_set("--verbose"));
//! assert_eq!(result.rest.len(), 2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod matcher;
pub mod result;

pub use matcher::Matcher;
pub use result::{OptionsMap, ParseResult, RestList};

use argspec_foundation::Result;
use argspec_language::{CompiledSpec, compile};

/// Matches an argument vector against an already compiled spec.
///
/// # Errors
/// Returns the first matching error; see [`Matcher::match_args`].
pub fn match_args<I, S>(spec: &CompiledSpec, argv: I) -> Result<ParseResult>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Matcher::new(spec).match_args(argv)
}

/// Compiles spec text and matches an argument vector against it.
///
/// Convenient for one-shot use; compile once and reuse the spec when
/// matching many vectors.
///
/// # Errors
/// Returns a spec syntax error if the text is malformed, otherwise the
/// first matching error.
pub fn parse<I, S>(source: &str, argv: I) -> Result<ParseResult>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let spec = compile(source)?;
    match_args(&spec, argv)
}
