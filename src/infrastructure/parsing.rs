//! HTML extraction for the regional Amazon sites
//!
//! Each page domain has one parser type built from a per-region rule table.
//! Field operations take a scope element (the document root or an item node)
//! and return an [`Extraction`]: the value, or the field's sentinel together
//! with the error that caused the fallback.

/// Expands to one `parse_*` method per field rule.
macro_rules! field_operations {
    ($($(#[$meta:meta])* $name:ident => $rule:ident;)*) => {
        $(
            $(#[$meta])*
            pub fn $name(&self, scope: ::scraper::ElementRef<'_>) -> $crate::infrastructure::parsing::Extraction<String> {
                self.$rule.extract(scope)
            }
        )*
    };
}

pub mod board_parser;
pub mod config;
pub mod error;
pub mod field;
pub mod keyword_parser;
pub mod listing_parser;
pub mod product_parser;
pub mod query;
pub mod region_detector;
pub mod regions;
pub mod registry;
pub mod review_parser;

// Re-export public types
pub use board_parser::BoardParser;
pub use config::ParsingConfig;
pub use error::{ParsingError, ParsingResult};
pub use field::{Extraction, FieldRule, FieldSpec, OnEmpty, OnMissing, Transform};
pub use keyword_parser::KeywordParser;
pub use listing_parser::ListingParser;
pub use product_parser::ProductParser;
pub use query::{find_nodes, CompiledQuery, Hit, Pick, Query, Step, Target};
pub use region_detector::{detect_region, parse_region};
pub use registry::ParserRegistry;
pub use review_parser::ReviewParser;

use scraper::Html;
use tracing::{debug, warn};

use crate::domain::field::Field;

/// Whole-page extraction into a domain record
pub trait PageExtractor {
    type Output;

    /// Run every field operation of the page.
    ///
    /// Field failures are logged and leave their sentinel; only a page that
    /// lacks its item list is reported as an error.
    fn extract_page(&self, html: &Html) -> ParsingResult<Self::Output>;
}

/// Take the value of a field for a record, logging why it fell back.
pub(crate) fn settle<T>(field: Field, extraction: Extraction<T>) -> T {
    let (value, error) = extraction.into_parts();
    if let Some(error) = error {
        if error.is_not_found() {
            debug!(%field, %error, "field left at its default");
        } else {
            warn!(%field, %error, "field extraction failed");
        }
    }
    value
}
