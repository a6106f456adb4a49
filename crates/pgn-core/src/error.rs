//! Error types for movetext parsing and option lookup.

use thiserror::Error;

/// Structural errors in movetext.
///
/// Only broken variation nesting is reported. Malformed numbers, unterminated
/// comments and stray braces degrade to missing data instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MovetextError {
    #[error("unbalanced variation: ')' at byte {offset} closes nothing")]
    UnbalancedVariation { offset: usize },

    #[error("unclosed variation: {depth} '(' still open at end of movetext")]
    UnclosedVariation { depth: usize },

    #[error("variation nesting deeper than {limit} at byte {offset}")]
    VariationTooDeep { offset: usize, limit: usize },
}

/// Error returned when a named option (locale, view, surface, preset) is unknown.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownOption {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownOption {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}
