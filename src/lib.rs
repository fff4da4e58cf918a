//! argspec - a compact DSL for declaring command-line arguments
//!
//! This crate re-exports all layers of the argspec system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: argspec_runtime    - argspec binary, configuration, logging, output
//! Layer 2: argspec_matcher    - Matching argument vectors against a spec
//! Layer 1: argspec_language   - Lexer, compiler, compiled spec model, rendering
//! Layer 0: argspec_foundation - Core types (TypeTag, Value, Error), coercion
//! ```

pub use argspec_foundation as foundation;
pub use argspec_language as language;
pub use argspec_matcher as matcher;
pub use argspec_runtime as runtime;

pub use argspec_foundation::{Error, ErrorKind, Result, TypeTag, Value};
pub use argspec_language::{CompiledSpec, compile};
pub use argspec_matcher::{Matcher, ParseResult, parse};
