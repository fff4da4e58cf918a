//! Compiled spec model.
//!
//! These are passive records: the compiler builds them once and the
//! matcher only reads them.

use std::collections::HashMap;

use argspec_foundation::TypeTag;

use crate::span::Span;
use crate::token::Quantifier;

/// Whether an option must appear in the arguments.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Requirement {
    /// Declared bare: `--file,-f String`.
    Required,
    /// Declared in brackets: `[--verbose,-v]`.
    Optional,
}

/// What an option accepts after its name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ArgumentForm {
    /// A flag with no argument.
    None,
    /// An argument that must follow the option.
    Mandatory(TypeTag),
    /// An argument that may follow the option.
    Optional(TypeTag),
}

impl ArgumentForm {
    /// Returns the argument's type tag, if the option takes one.
    #[must_use]
    pub const fn type_tag(&self) -> Option<&TypeTag> {
        match self {
            Self::None => None,
            Self::Mandatory(tag) | Self::Optional(tag) => Some(tag),
        }
    }
}

/// One declared option.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionNode {
    /// Aliases in declaration order; the first is canonical.
    pub names: Vec<String>,
    /// The key this option's value is stored under.
    pub canonical_name: String,
    /// Whether the option must appear.
    pub requirement: Requirement,
    /// What the option accepts after its name.
    pub argument: ArgumentForm,
    /// Where the option was declared.
    pub span: Span,
}

impl OptionNode {
    /// Returns true if this option must appear in the arguments.
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.requirement == Requirement::Required
    }
}

/// One declared positional slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RestNode {
    /// The slot's type.
    pub tag: TypeTag,
    /// How many arguments the slot takes.
    pub quantifier: Quantifier,
    /// Where the slot was declared.
    pub span: Span,
}

/// A compiled spec, ready to match argument vectors.
///
/// Immutable once built; one spec can serve any number of matches,
/// including concurrent ones.
///
/// Specs are only built by the compiler, which guarantees every option has
/// at least one alias and every required option takes an argument:
///
/// ```compile_fail
/// use argspec_language::CompiledSpec;
///
/// let spec = CompiledSpec::new(Vec::new(), Vec::new());
/// ```
///
/// ```
/// let spec = argspec_language::compile("-n Int10").unwrap();
/// assert!(spec.options().iter().all(|node| !node.canonical_name.is_empty()));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompiledSpec {
    options: Vec<OptionNode>,
    rest: Vec<RestNode>,
    aliases: HashMap<String, usize>,
}

impl CompiledSpec {
    /// Builds a spec from its nodes, assigning canonical names and
    /// indexing every alias.
    ///
    /// An alias declared by more than one option maps to the last one.
    #[must_use]
    pub(crate) fn new(mut options: Vec<OptionNode>, rest: Vec<RestNode>) -> Self {
        debug_assert!(options.iter().all(|node| !node.names.is_empty()));
        debug_assert!(
            options
                .iter()
                .all(|node| !node.is_required() || matches!(node.argument, ArgumentForm::Mandatory(_)))
        );
        let mut aliases = HashMap::new();
        for (index, node) in options.iter_mut().enumerate() {
            node.canonical_name = node.names.first().cloned().unwrap_or_default();
            for name in &node.names {
                aliases.insert(name.clone(), index);
            }
        }
        Self {
            options,
            rest,
            aliases,
        }
    }

    /// Option declarations, in order.
    #[must_use]
    pub fn options(&self) -> &[OptionNode] {
        &self.options
    }

    /// Rest declarations, in order.
    #[must_use]
    pub fn rest(&self) -> &[RestNode] {
        &self.rest
    }

    /// Looks up the option an alias refers to.
    #[must_use]
    pub fn lookup(&self, alias: &str) -> Option<&OptionNode> {
        self.aliases.get(alias).map(|&index| &self.options[index])
    }

    /// Iterates required options in declaration order.
    pub fn required_options(&self) -> impl Iterator<Item = &OptionNode> {
        self.options.iter().filter(|node| node.is_required())
    }

    /// Returns the number of distinct aliases in the index.
    #[must_use]
    pub fn alias_count(&self) -> usize {
        self.aliases.len()
    }

    /// Returns true if the spec declares neither options nor positionals.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty() && self.rest.is_empty()
    }
}
