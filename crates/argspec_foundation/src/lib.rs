//! Core types, coerced values, and errors for argspec.
//!
//! This crate provides:
//! - [`TypeTag`] - The closed set of argument types a spec can declare
//! - [`Value`] - A raw argument after coercion
//! - [`TypeCoercer`] - Raw token to [`Value`] conversion
//! - [`Error`] - The error taxonomy shared by the compiler and the matcher

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod coerce;
pub mod error;
pub mod types;
pub mod value;

pub use coerce::TypeCoercer;
pub use error::{CoercionFailure, Error, ErrorKind, Location};
pub use types::TypeTag;
pub use value::Value;

/// Result type alias using the argspec [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
