//! Errors produced while turning raw arguments into [`ResolvedArgs`].
//!
//! [`ResolvedArgs`]: crate::args::ResolvedArgs

use std::num::ParseIntError;

use thiserror::Error;

/// Errors that abort argument resolution.
///
/// There is no partial result: a caller receiving one of these must show
/// usage and exit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgsError {
    /// The token sequence could not be split into a key/value map.
    #[error("Malformed argument '{token}' at position {position}: {reason}")]
    Tokenization {
        position: usize,
        token: String,
        reason: String,
    },

    /// An integer field received a value that is not a base-10 integer.
    #[error("Invalid value '{value}' for {flag}: expected an integer")]
    Coercion {
        flag: String,
        value: String,
        #[source]
        source: ParseIntError,
    },
}

impl ArgsError {
    /// True for failures raised by the tokenizer.
    pub fn is_tokenization(&self) -> bool {
        matches!(self, ArgsError::Tokenization { .. })
    }

    /// True for failures raised while coercing a typed field.
    pub fn is_coercion(&self) -> bool {
        matches!(self, ArgsError::Coercion { .. })
    }
}
