//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: TypeTag, Value, Error, and coercion.

mod coercion;
mod errors;
