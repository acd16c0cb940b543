//! amz-page-parser - region-aware field extraction for Amazon pages
//!
//! Product, keyword search, category, seller, best seller board and review
//! pages of amazon.com, amazon.co.uk, amazon.de and amazon.fr are handled by
//! one parser per page kind, each built from a per-region rule table.
//!
//! ```no_run
//! use amz_page_parser::{detect_region, PageExtractor, ParserRegistry};
//! use scraper::Html;
//!
//! # fn main() -> anyhow::Result<()> {
//! let registry = ParserRegistry::new()?;
//! let html = Html::parse_document(&std::fs::read_to_string("product.html")?);
//! let region = detect_region(&html)?;
//! if let Some(parser) = registry.product(region) {
//!     let record = parser.extract_page(&html)?;
//!     println!("{} {}", record.asin, record.price);
//! }
//! # Ok(())
//! # }
//! ```

pub mod domain;
pub mod infrastructure;
pub mod utils;

pub use domain::{Field, Region};
pub use infrastructure::parsing::{
    detect_region, parse_region, Extraction, PageExtractor, ParserRegistry, ParsingConfig,
    ParsingError, ParsingResult,
};
