//! Match results.

use std::collections::BTreeMap;

use argspec_foundation::Value;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Canonical option name to coerced value.
///
/// Options that were not supplied have no entry. A flag supplied without a
/// value maps to [`Value::presence`].
pub type OptionsMap = BTreeMap<String, Value>;

/// Coerced positional arguments, in order.
pub type RestList = Vec<Value>;

/// The outcome of a successful match.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ParseResult {
    /// Supplied options, keyed by canonical name.
    pub options: OptionsMap,
    /// Positional arguments.
    pub rest: RestList,
}

impl ParseResult {
    /// Looks up an option by canonical name.
    #[must_use]
    pub fn get(&self, canonical: &str) -> Option<&Value> {
        self.options.get(canonical)
    }

    /// Returns true if the option was supplied, with or without a value.
    #[must_use]
    pub fn contains(&self, canonical: &str) -> bool {
        self.options.contains_key(canonical)
    }

    /// Returns true if the option was supplied without a value.
    #[must_use]
    pub fn is_flag_set(&self, canonical: &str) -> bool {
        self.get(canonical).is_some_and(Value::is_presence)
    }

    /// Splits the result into its options and positionals.
    #[must_use]
    pub fn into_parts(self) -> (OptionsMap, RestList) {
        (self.options, self.rest)
    }
}
