//! Token types for the spec DSL.
//!
//! Tokens are the output of the lexer and input to the compiler.

use std::fmt;

use crate::span::Span;

/// A token from lexical analysis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// The type and value of this token.
    pub kind: TokenKind,
    /// Source location of this token.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Token types for the spec DSL.
///
/// Whitespace is significant in the grammar (it separates an option's
/// alias list from its argument type), so it is kept as [`TokenKind::Space`]
/// rather than discarded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// A run of whitespace.
    Space,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `,`
    Comma,
    /// An option alias such as `--size` or `-s`.
    Name(String),
    /// Any other bare word, normally a type tag like `Int10`.
    Word(String),
    /// A repetition suffix directly after a word.
    Quantifier(Quantifier),
    /// End of input.
    Eof,
}

impl TokenKind {
    /// Returns a human-readable name for this token kind.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Space => "whitespace",
            Self::LBracket => "'['",
            Self::RBracket => "']'",
            Self::Comma => "','",
            Self::Name(_) => "option name",
            Self::Word(_) => "type",
            Self::Quantifier(_) => "quantifier",
            Self::Eof => "end of spec",
        }
    }
}

/// How many positional arguments a rest declaration accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Quantifier {
    /// Exactly one (no suffix).
    #[default]
    One,
    /// `?`: zero or one.
    ZeroOrOne,
    /// `*`: zero or more.
    ZeroOrMany,
    /// `+`: one or more.
    OneOrMany,
}

impl Quantifier {
    /// Maps a suffix character to its quantifier.
    #[must_use]
    pub const fn from_suffix(c: char) -> Option<Self> {
        match c {
            '?' => Some(Self::ZeroOrOne),
            '*' => Some(Self::ZeroOrMany),
            '+' => Some(Self::OneOrMany),
            _ => None,
        }
    }

    /// The suffix text for this quantifier (empty for `One`).
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::One => "",
            Self::ZeroOrOne => "?",
            Self::ZeroOrMany => "*",
            Self::OneOrMany => "+",
        }
    }

    /// Returns true if a match may consume zero tokens for this slot.
    #[must_use]
    pub const fn allows_empty(self) -> bool {
        matches!(self, Self::ZeroOrOne | Self::ZeroOrMany)
    }
}

impl fmt::Display for Quantifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}
