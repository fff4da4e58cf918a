//! Configuration for the spec compiler.

/// Configuration for the spec compiler.
///
/// The default accepts everything the grammar allows: unknown type tags
/// compile (and fail only when a value is coerced against them) and an
/// alias shared by two options resolves to the later declaration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CompilerConfig {
    /// Reject type tags other than `String`, `Float` and `Int<radix>`.
    pub strict_types: bool,

    /// Reject an alias declared by more than one option.
    pub reject_duplicate_aliases: bool,
}

impl CompilerConfig {
    /// Creates a configuration with every check enabled.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            strict_types: true,
            reject_duplicate_aliases: true,
        }
    }

    /// Builder method to set strict type checking.
    #[must_use]
    pub const fn with_strict_types(mut self, strict: bool) -> Self {
        self.strict_types = strict;
        self
    }

    /// Builder method to set duplicate alias rejection.
    #[must_use]
    pub const fn with_reject_duplicate_aliases(mut self, reject: bool) -> Self {
        self.reject_duplicate_aliases = reject;
        self
    }
}
