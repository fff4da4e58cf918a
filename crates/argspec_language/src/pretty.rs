//! Rendering compiled specs back to text.
//!
//! [`usage`] renders the canonical DSL form of a spec; compiling that text
//! again yields the same declarations. [`describe`] lists every alias and
//! positional slot in declaration order, for debugging a spec.
//!
//! # Example
//!
//! ```
//! use argspec_language::{compile, pretty::usage};
//!
//! let spec = compile("[--verbose,-v]   --size,-s Int10 String+").unwrap();
//! assert_eq!(usage(&spec), "[--verbose,-v] --size,-s Int10 String+");
//! ```

use std::collections::HashSet;
use std::fmt::{self, Write};

use crate::spec::{ArgumentForm, CompiledSpec, OptionNode, Requirement, RestNode};

/// Renders the canonical DSL text for a spec.
#[must_use]
pub fn usage(spec: &CompiledSpec) -> String {
    spec.to_string()
}

/// Renders one line per alias, then one line per positional slot.
///
/// Each alias appears once and shows the option it resolves to, so an
/// alias shared by two options shows the later one.
#[must_use]
pub fn describe(spec: &CompiledSpec) -> String {
    let mut out = String::new();
    let mut seen = HashSet::new();

    for node in spec.options() {
        for alias in &node.names {
            if !seen.insert(alias.as_str()) {
                continue;
            }
            let Some(target) = spec.lookup(alias) else {
                continue;
            };
            let _ = write!(out, "{alias} -> {}", target.canonical_name);
            match &target.argument {
                ArgumentForm::None => {}
                ArgumentForm::Mandatory(tag) => {
                    let _ = write!(out, " with argument {tag}");
                }
                ArgumentForm::Optional(tag) => {
                    let _ = write!(out, " with optional argument {tag}");
                }
            }
            if target.requirement == Requirement::Required {
                out.push_str(" (required)");
            }
            out.push('\n');
        }
    }

    for node in spec.rest() {
        let _ = writeln!(out, "rest {node}");
    }

    out
}

impl CompiledSpec {
    /// Renders the canonical DSL text. See [`usage`].
    #[must_use]
    pub fn usage(&self) -> String {
        usage(self)
    }

    /// Renders the alias table and positional slots. See [`describe`].
    #[must_use]
    pub fn describe(&self) -> String {
        describe(self)
    }
}

impl fmt::Display for OptionNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = self.names.join(",");
        match (&self.requirement, &self.argument) {
            (Requirement::Required, ArgumentForm::Mandatory(tag)) => write!(f, "{names} {tag}"),
            (Requirement::Required, _) => f.write_str(&names),
            (Requirement::Optional, ArgumentForm::None) => write!(f, "[{names}]"),
            (Requirement::Optional, ArgumentForm::Mandatory(tag)) => write!(f, "[{names} {tag}]"),
            (Requirement::Optional, ArgumentForm::Optional(tag)) => {
                write!(f, "[{names} [{tag}]]")
            }
        }
    }
}

impl fmt::Display for RestNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.tag, self.quantifier)
    }
}

impl fmt::Display for CompiledSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for option in self.options() {
            if !first {
                f.write_char(' ')?;
            }
            write!(f, "{option}")?;
            first = false;
        }
        for rest in self.rest() {
            if !first {
                f.write_char(' ')?;
            }
            write!(f, "{rest}")?;
            first = false;
        }
        Ok(())
    }
}
