//! Validated ticker symbol.

use std::fmt;

use crate::validation::ValidationError;

/// Maximum accepted symbol length.
pub const MAX_SYMBOL_LEN: usize = 7;

/// A ticker symbol: 1-7 uppercase ASCII letters, nothing else.
///
/// Construction goes through [`Symbol::parse`], so a `Symbol` in hand is
/// always well-formed and safe to interpolate into a provider query.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Symbol(String);

impl Symbol {
    /// Validates and wraps a raw token.
    pub fn parse(token: &str) -> Result<Self, ValidationError> {
        let valid = !token.is_empty()
            && token.len() <= MAX_SYMBOL_LEN
            && token.bytes().all(|b| b.is_ascii_uppercase());
        if !valid {
            return Err(ValidationError::InvalidSymbol {
                token: token.to_string(),
            });
        }
        Ok(Self(token.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
