//! Error types for catalog construction and category resolution
//!
//! A lookup that finds nothing is not an error: resolution returns `None`.
//! The types here cover caller mistakes and malformed catalogs only.

use std::fmt;

use thiserror::Error;

/// Which end of a configuration key is being stripped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoration {
    Prefix,
    Suffix,
}

impl fmt::Display for Decoration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decoration::Prefix => write!(f, "prefix"),
            Decoration::Suffix => write!(f, "suffix"),
        }
    }
}

/// Errors raised while resolving a category from a decorated identifier
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The decoration is longer than the text it is supposed to decorate.
    ///
    /// Lengths are counted in characters. This means the caller passed a
    /// prefix or suffix without checking the text actually carries it.
    #[error("{decoration} of {decoration_len} characters is out of range for text of {text_len} characters")]
    OutOfRange {
        decoration: Decoration,
        text_len: usize,
        decoration_len: usize,
    },
}

impl ResolveError {
    /// Create an out-of-range error for the given decoration
    pub fn out_of_range(decoration: Decoration, text_len: usize, decoration_len: usize) -> Self {
        Self::OutOfRange {
            decoration,
            text_len,
            decoration_len,
        }
    }
}

/// Errors raised when building a custom category registry
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Duplicate category id: {0}")]
    DuplicateId(String),

    #[error("Duplicate category plural id: {0}")]
    DuplicatePluralId(String),
}

/// Error for string-to-enum conversions of catalog vocabulary
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown {kind}: {value}")]
pub struct ParseError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseError {
    /// Creates a parse error for an unrecognised token.
    ///
    /// # Example
    /// ```ignore
    /// _ => Err(ParseError::unknown("collision mode", s)),
    /// ```
    pub fn unknown(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}
