//! Error module re-export
//!
//! Parsers refer to `super::error` so the concrete error location can move
//! without touching every extractor.

pub use crate::infrastructure::parsing_error::{ParsingError, ParsingResult};
