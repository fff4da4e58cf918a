//! Raw token coercion.
//!
//! Turns a single raw argument token into a [`Value`] according to its
//! declared [`TypeTag`].

use crate::error::{CoercionFailure, Error};
use crate::types::TypeTag;
use crate::value::Value;
use crate::Result;

/// Converts raw tokens into typed values.
pub struct TypeCoercer;

impl TypeCoercer {
    /// Coerces `raw` to the type named by `tag`.
    ///
    /// - `String` passes the token through unchanged.
    /// - `Float` accepts whatever [`f64`]'s parser accepts.
    /// - `Int(radix)` requires the token to be one or more ASCII decimal
    ///   digits, even when the radix is larger than 10, and then reads the
    ///   longest leading run of digits valid in that radix (`"19"` as
    ///   `Int8` is 1). Radix 0 means decimal.
    ///
    /// # Errors
    /// Returns [`ErrorKind::TypeCoercion`](crate::ErrorKind::TypeCoercion)
    /// when the token does not fit the type or the tag is unknown.
    pub fn coerce(tag: &TypeTag, raw: &str) -> Result<Value> {
        match tag {
            TypeTag::String => Ok(Value::String(raw.to_string())),
            TypeTag::Float => raw
                .parse::<f64>()
                .map(Value::Float)
                .map_err(|_| Error::type_coercion(tag, raw, CoercionFailure::InvalidFloat)),
            TypeTag::Int(radix) => Self::coerce_int(tag, *radix, raw),
            TypeTag::Unknown(_) => Err(Error::type_coercion(
                tag,
                raw,
                CoercionFailure::UnknownType,
            )),
        }
    }

    fn coerce_int(tag: &TypeTag, radix: u32, raw: &str) -> Result<Value> {
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::type_coercion(tag, raw, CoercionFailure::NotDigits));
        }
        // Radix 0 reads the digits as decimal.
        let radix = if radix == 0 { 10 } else { radix };
        if !(2..=36).contains(&radix) {
            return Err(Error::type_coercion(
                tag,
                raw,
                CoercionFailure::InvalidRadix(radix),
            ));
        }

        // Only the leading run of digits valid in the radix is read.
        let valid = raw
            .bytes()
            .take_while(|b| char::from(*b).is_digit(radix))
            .count();
        if valid == 0 {
            return Err(Error::type_coercion(tag, raw, CoercionFailure::NoValidDigits));
        }
        i64::from_str_radix(&raw[..valid], radix)
            .map(Value::Int)
            .map_err(|_| Error::type_coercion(tag, raw, CoercionFailure::OutOfRange))
    }
}
