//! Parser registry
//!
//! Holds one compiled parser per page domain and region. It is built once,
//! never mutated afterwards, and shared by reference (or behind an `Arc`)
//! between threads.

use std::collections::BTreeMap;

use tracing::{debug, info};

use super::config::{ParsingConfig, RegionSpec};
use super::{
    BoardParser, KeywordParser, ListingParser, ParsingResult, ProductParser, ReviewParser,
};
use crate::domain::region::Region;

#[derive(Debug, Clone)]
struct RegionParsers {
    product: ProductParser,
    keyword: KeywordParser,
    category: ListingParser,
    seller: ListingParser,
    board: BoardParser,
    review: ReviewParser,
}

impl RegionParsers {
    fn compile(spec: &RegionSpec) -> ParsingResult<Self> {
        let region = spec.region;
        Ok(Self {
            product: ProductParser::new(region, &spec.product)?,
            keyword: KeywordParser::new(region, &spec.keyword)?,
            category: ListingParser::new(region, &spec.category)?,
            seller: ListingParser::new(region, &spec.seller)?,
            board: BoardParser::new(region, &spec.board)?,
            review: ReviewParser::new(region, &spec.review)?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct ParserRegistry {
    regions: BTreeMap<Region, RegionParsers>,
}

impl ParserRegistry {
    /// Registry over the built-in rules for every supported region.
    pub fn new() -> ParsingResult<Self> {
        Self::from_config(&ParsingConfig::default())
    }

    /// Compile every region of `config`. A later entry for the same region replaces an earlier one.
    pub fn from_config(config: &ParsingConfig) -> ParsingResult<Self> {
        let mut regions = BTreeMap::new();
        for spec in &config.regions {
            debug!("Compiling parsers for region {}", spec.region);
            regions.insert(spec.region, RegionParsers::compile(spec)?);
        }
        info!("Parser registry ready with {} regions", regions.len());
        Ok(Self { regions })
    }

    /// Registered regions in ascending order.
    pub fn regions(&self) -> Vec<Region> {
        self.regions.keys().copied().collect()
    }

    pub fn product(&self, region: Region) -> Option<&ProductParser> {
        self.regions.get(&region).map(|parsers| &parsers.product)
    }

    pub fn keyword(&self, region: Region) -> Option<&KeywordParser> {
        self.regions.get(&region).map(|parsers| &parsers.keyword)
    }

    pub fn category(&self, region: Region) -> Option<&ListingParser> {
        self.regions.get(&region).map(|parsers| &parsers.category)
    }

    pub fn seller(&self, region: Region) -> Option<&ListingParser> {
        self.regions.get(&region).map(|parsers| &parsers.seller)
    }

    pub fn board(&self, region: Region) -> Option<&BoardParser> {
        self.regions.get(&region).map(|parsers| &parsers.board)
    }

    pub fn review(&self, region: Region) -> Option<&ReviewParser> {
        self.regions.get(&region).map(|parsers| &parsers.review)
    }

    pub fn product_for_lang(&self, lang: &str) -> Option<&ProductParser> {
        Region::from_lang_tag(lang).and_then(|region| self.product(region))
    }

    pub fn keyword_for_lang(&self, lang: &str) -> Option<&KeywordParser> {
        Region::from_lang_tag(lang).and_then(|region| self.keyword(region))
    }

    pub fn category_for_lang(&self, lang: &str) -> Option<&ListingParser> {
        Region::from_lang_tag(lang).and_then(|region| self.category(region))
    }

    pub fn seller_for_lang(&self, lang: &str) -> Option<&ListingParser> {
        Region::from_lang_tag(lang).and_then(|region| self.seller(region))
    }

    pub fn board_for_lang(&self, lang: &str) -> Option<&BoardParser> {
        Region::from_lang_tag(lang).and_then(|region| self.board(region))
    }

    pub fn review_for_lang(&self, lang: &str) -> Option<&ReviewParser> {
        Region::from_lang_tag(lang).and_then(|region| self.review(region))
    }
}
