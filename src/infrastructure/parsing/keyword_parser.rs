//! Keyword search result page parser

use scraper::{ElementRef, Html};
use tracing::{debug, warn};

use super::config::KeywordSpec;
use super::field::FieldRule;
use super::query::CompiledQuery;
use super::{settle, PageExtractor, ParsingResult};
use crate::domain::field::Field;
use crate::domain::records::{KeywordItem, KeywordPage};
use crate::domain::region::Region;

/// Parser for keyword search result pages of one region
#[derive(Debug, Clone)]
pub struct KeywordParser {
    region: Region,
    items: CompiledQuery,
    current_page: FieldRule,
    next_page: FieldRule,
    keyword: FieldRule,
    asin: FieldRule,
    price: FieldRule,
    star: FieldRule,
    rating: FieldRule,
    sponsored: FieldRule,
    prime: FieldRule,
    sales: FieldRule,
    img: FieldRule,
    title: FieldRule,
}

impl KeywordParser {
    pub fn new(region: Region, spec: &KeywordSpec) -> ParsingResult<Self> {
        Ok(Self {
            region,
            items: spec.items.compile()?,
            current_page: spec.current_page.compile()?,
            next_page: spec.next_page.compile()?,
            keyword: spec.keyword.compile()?,
            asin: spec.asin.compile()?,
            price: spec.price.compile()?,
            star: spec.star.compile()?,
            rating: spec.rating.compile()?,
            sponsored: spec.sponsored.compile()?,
            prime: spec.prime.compile()?,
            sales: spec.sales.compile()?,
            img: spec.img.compile()?,
            title: spec.title.compile()?,
        })
    }

    pub const fn region(&self) -> Region {
        self.region
    }

    /// Result cards of the page, in document order.
    pub fn parse_all_products<'a>(&self, doc: ElementRef<'a>) -> ParsingResult<Vec<ElementRef<'a>>> {
        self.items.find_elements(doc)
    }

    field_operations! {
        parse_current_page_index => current_page;
        parse_next_page_url => next_page;
        /// Search box contents
        parse_keyword => keyword;

        // Item scope
        parse_asin => asin;
        parse_price => price;
        parse_star => star;
        parse_rating => rating;
        /// `"1"` for sponsored cards
        parse_sponsored => sponsored;
        parse_prime => prime;
        /// Monthly sales badge, `"2K+ bought"` reads as `"2000"`
        parse_sales => sales;
        parse_img => img;
        parse_title => title;
    }

    fn item(&self, card: ElementRef<'_>) -> KeywordItem {
        KeywordItem {
            asin: settle(Field::Asin, self.parse_asin(card)),
            title: settle(Field::Title, self.parse_title(card)),
            price: settle(Field::Price, self.parse_price(card)),
            star: settle(Field::Star, self.parse_star(card)),
            rating: settle(Field::Rating, self.parse_rating(card)),
            sponsored: settle(Field::Sponsored, self.parse_sponsored(card)),
            prime: settle(Field::Prime, self.parse_prime(card)),
            sales: settle(Field::Sales, self.parse_sales(card)),
            img_url: settle(Field::ImgUrl, self.parse_img(card)),
        }
    }
}

impl PageExtractor for KeywordParser {
    type Output = KeywordPage;

    fn extract_page(&self, html: &Html) -> ParsingResult<Self::Output> {
        let doc = html.root_element();
        let cards = self.parse_all_products(doc).inspect_err(|e| {
            warn!("No search results found for region {}: {}", self.region, e);
        })?;
        debug!("Found {} search result cards", cards.len());

        Ok(KeywordPage {
            region: self.region,
            keyword: settle(Field::Keyword, self.parse_keyword(doc)),
            current_page: settle(Field::CurrentPage, self.parse_current_page_index(doc)),
            next_page: settle(Field::NextPage, self.parse_next_page_url(doc)),
            items: cards.into_iter().map(|card| self.item(card)).collect(),
        })
    }
}
