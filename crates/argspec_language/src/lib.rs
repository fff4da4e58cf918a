//! Lexer, compiler, and compiled model for the argspec DSL.
//!
//! A spec string such as
//!
//! ```text
//! --size,-s Int10 [--verbose,-v] [--help,-h [String]] String+
//! ```
//!
//! declares options (required when bare, optional in brackets) followed by
//! positional slots. [`compile`] turns it into a [`CompiledSpec`] that can
//! be matched against any number of argument vectors.
//!
//! # Modules
//!
//! - [`lexer`] / [`token`] / [`span`] - Typed token stream over spec text
//! - [`compiler`] - Recursive-descent compiler
//! - [`spec`] - Option and rest nodes, alias index
//! - [`config`] - Compiler configuration
//! - [`pretty`] - Rendering a spec back to text

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod compiler;
pub mod config;
pub mod lexer;
pub mod pretty;
pub mod span;
pub mod spec;
pub mod token;

pub use compiler::SpecCompiler;
pub use config::CompilerConfig;
pub use lexer::Lexer;
pub use span::Span;
pub use spec::{ArgumentForm, CompiledSpec, OptionNode, Requirement, RestNode};
pub use token::{Quantifier, Token, TokenKind};

use argspec_foundation::Result;

/// Compiles spec text with the default configuration.
///
/// # Errors
/// Returns a spec syntax error if the text is malformed.
pub fn compile(source: &str) -> Result<CompiledSpec> {
    SpecCompiler::new().compile(source)
}
