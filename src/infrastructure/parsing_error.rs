//! Parsing error types
//!
//! Field level failures are reported through a single `FieldNotFound` variant
//! carrying the field catalogue entry, so callers can match on the field
//! regardless of which region produced it. Query-level failures (`NoMatch`,
//! `AmbiguousMatch`) come straight from the query adapter.

use crate::domain::field::Field;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParsingError {
    #[error("'{query}' error, no nodes selected")]
    NoMatch { query: String },

    #[error("'{query}' error, {count} nodes selected")]
    AmbiguousMatch { query: String, count: usize },

    #[error("Invalid CSS selector: {selector} - {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("not found lang")]
    LanguageNotFound,

    #[error("unsupported region for language tag '{lang}'")]
    UnsupportedRegion { lang: String },

    #[error("not found {0}")]
    FieldNotFound(Field),

    #[error("invalid {field} data: {reason}")]
    InvalidData { field: Field, reason: String },
}

impl ParsingError {
    pub fn no_match(query: impl Into<String>) -> Self {
        Self::NoMatch { query: query.into() }
    }

    pub fn ambiguous_match(query: impl Into<String>, count: usize) -> Self {
        Self::AmbiguousMatch {
            query: query.into(),
            count,
        }
    }

    /// Create an invalid selector error
    pub fn invalid_selector(selector: &str, reason: &str) -> Self {
        Self::InvalidSelector {
            selector: selector.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn invalid_data(field: Field, reason: impl Into<String>) -> Self {
        Self::InvalidData {
            field,
            reason: reason.into(),
        }
    }

    /// The catalogue field this error is about, if any
    pub const fn field(&self) -> Option<Field> {
        match self {
            Self::FieldNotFound(field) | Self::InvalidData { field, .. } => Some(*field),
            _ => None,
        }
    }

    /// Whether the error means "nothing there" rather than "something wrong"
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::NoMatch { .. } | Self::FieldNotFound(_) | Self::LanguageNotFound
        )
    }

    /// Check if extraction of the remaining fields can continue after this error
    pub const fn is_recoverable(&self) -> bool {
        match self {
            Self::NoMatch { .. }
            | Self::AmbiguousMatch { .. }
            | Self::FieldNotFound(_)
            | Self::InvalidData { .. } => true,
            Self::InvalidSelector { .. }
            | Self::LanguageNotFound
            | Self::UnsupportedRegion { .. } => false,
        }
    }
}

pub type ParsingResult<T> = Result<T, ParsingError>;
