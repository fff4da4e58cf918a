//! Type tags for declared arguments.

use std::fmt;

/// The type of a declared option argument or positional slot.
///
/// Tags are parsed once when a spec is compiled, so matching never has to
/// re-read the tag text for every token.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeTag {
    /// Text, passed through unchanged.
    String,
    /// 64-bit floating point.
    Float,
    /// Integer written in decimal digits, read in the given radix.
    Int(u32),
    /// A well-formed tag name that is not one of the known types.
    ///
    /// Coercing against this tag always fails.
    Unknown(String),
}

impl TypeTag {
    /// Parses tag text such as `String`, `Float` or `Int16`.
    ///
    /// Never fails: anything unrecognized becomes [`TypeTag::Unknown`].
    #[must_use]
    pub fn parse(text: &str) -> Self {
        match text {
            "String" => Self::String,
            "Float" => Self::Float,
            _ => text
                .strip_prefix("Int")
                .filter(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
                .and_then(|digits| digits.parse::<u32>().ok())
                .map_or_else(|| Self::Unknown(text.to_string()), Self::Int),
        }
    }

    /// Returns true if this tag names a known type.
    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => f.write_str("String"),
            Self::Float => f.write_str("Float"),
            Self::Int(radix) => write!(f, "Int{radix}"),
            Self::Unknown(name) => f.write_str(name),
        }
    }
}
