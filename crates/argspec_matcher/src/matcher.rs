//! Argument matching.
//!
//! Matches an argument vector against a [`CompiledSpec`] in three passes:
//! options up front, then the required-option check, then positionals.

use argspec_foundation::{Error, Location, Result, TypeCoercer, TypeTag, Value};
use argspec_language::{ArgumentForm, CompiledSpec, Quantifier};
use tracing::{debug, trace};

use crate::result::{OptionsMap, ParseResult, RestList};

/// Matches argument vectors against a compiled spec.
///
/// Borrows the spec immutably, so any number of matchers may share it.
#[derive(Clone, Copy, Debug)]
pub struct Matcher<'spec> {
    spec: &'spec CompiledSpec,
}

impl<'spec> Matcher<'spec> {
    /// Creates a matcher for the given spec.
    #[must_use]
    pub const fn new(spec: &'spec CompiledSpec) -> Self {
        Self { spec }
    }

    /// Matches an argument vector.
    ///
    /// Options must come before positionals; scanning stops at the first
    /// token that does not begin with `-`.
    ///
    /// # Errors
    /// Returns the first problem found: an unknown option, a missing option
    /// argument, a missing required option, a token that fails coercion, or
    /// too few or too many positionals. Nothing is returned on failure.
    pub fn match_args<I, S>(&self, argv: I) -> Result<ParseResult>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let owned: Vec<S> = argv.into_iter().collect();
        let args: Vec<&str> = owned.iter().map(AsRef::as_ref).collect();

        let mut options = OptionsMap::new();
        let tail_start = self.scan_options(&args, &mut options)?;
        self.check_required(&options)?;
        let rest = self.match_rest(&args, tail_start)?;

        debug!(
            options = options.len(),
            rest = rest.len(),
            "matched arguments"
        );
        Ok(ParseResult { options, rest })
    }

    /// Consumes leading option tokens; returns the index where the tail
    /// begins.
    fn scan_options(&self, args: &[&str], options: &mut OptionsMap) -> Result<usize> {
        let mut i = 0;
        while let Some(&arg) = args.get(i) {
            if !is_option(arg) {
                break;
            }
            let node = self
                .spec
                .lookup(arg)
                .ok_or_else(|| Error::unknown_option(arg).at(Location::Argument(i)))?;
            let next = args.get(i + 1).copied().filter(|next| !is_option(next));

            let (value, consumed) = match (&node.argument, next) {
                (ArgumentForm::Mandatory(tag) | ArgumentForm::Optional(tag), Some(raw)) => {
                    (coerce_at(tag, raw, i + 1)?, 2)
                }
                (ArgumentForm::Mandatory(_), None) => {
                    return Err(
                        Error::missing_argument(&node.canonical_name).at(Location::Argument(i))
                    );
                }
                (ArgumentForm::Optional(_) | ArgumentForm::None, _) => (Value::presence(), 1),
            };

            trace!(option = %node.canonical_name, token = arg, value = %value, "matched option");
            options.insert(node.canonical_name.clone(), value);
            i += consumed;
        }
        Ok(i)
    }

    /// Fails on the first required option (in declaration order) that was
    /// not supplied.
    fn check_required(&self, options: &OptionsMap) -> Result<()> {
        match self
            .spec
            .required_options()
            .find(|node| !options.contains_key(&node.canonical_name))
        {
            Some(node) => Err(Error::missing_required_option(&node.canonical_name)),
            None => Ok(()),
        }
    }

    /// Fills positional slots from the tail.
    fn match_rest(&self, args: &[&str], tail_start: usize) -> Result<RestList> {
        let tail = &args[tail_start..];
        let mut rest = RestList::new();
        let mut j = 0;

        for node in self.spec.rest() {
            let available = j < tail.len();
            if !available && !node.quantifier.allows_empty() {
                return Err(Error::insufficient_rest_arguments(&node.tag)
                    .at(Location::Argument(tail_start + j)));
            }
            match node.quantifier {
                Quantifier::One | Quantifier::ZeroOrOne => {
                    if available {
                        rest.push(coerce_at(&node.tag, tail[j], tail_start + j)?);
                        j += 1;
                    }
                }
                Quantifier::ZeroOrMany | Quantifier::OneOrMany => {
                    while j < tail.len() {
                        rest.push(coerce_at(&node.tag, tail[j], tail_start + j)?);
                        j += 1;
                    }
                }
            }
            trace!(tag = %node.tag, quantifier = %node.quantifier, filled = j, "matched rest slot");
        }

        if let Some(extra) = tail.get(j) {
            return Err(Error::too_many_arguments(*extra).at(Location::Argument(tail_start + j)));
        }
        Ok(rest)
    }
}

/// Returns true if the token is an option (begins with `-`).
fn is_option(token: &str) -> bool {
    token.starts_with('-')
}

/// Coerces a token, pointing any failure at its argument index.
fn coerce_at(tag: &TypeTag, raw: &str, index: usize) -> Result<Value> {
    TypeCoercer::coerce(tag, raw).map_err(|e| e.or_at(Location::Argument(index)))
}
