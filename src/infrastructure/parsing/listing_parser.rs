//! Category and seller listing page parser
//!
//! Both page kinds render the same result grid; they only differ in the
//! rule table the parser is built from.

use scraper::{ElementRef, Html};
use tracing::{debug, warn};

use super::config::ListingSpec;
use super::field::FieldRule;
use super::query::CompiledQuery;
use super::{settle, PageExtractor, ParsingResult};
use crate::domain::field::Field;
use crate::domain::records::{ListingItem, ListingPage};
use crate::domain::region::Region;

#[derive(Debug, Clone)]
pub struct ListingParser {
    region: Region,
    items: CompiledQuery,
    current_page: FieldRule,
    max_page: FieldRule,
    next_page: FieldRule,
    content_id: FieldRule,
    content_link: FieldRule,
    pagination: FieldRule,
    category_name: FieldRule,
    asin: FieldRule,
    price: FieldRule,
    star: FieldRule,
    img: FieldRule,
    title: FieldRule,
}

impl ListingParser {
    pub fn new(region: Region, spec: &ListingSpec) -> ParsingResult<Self> {
        Ok(Self {
            region,
            items: spec.items.compile()?,
            current_page: spec.current_page.compile()?,
            max_page: spec.max_page.compile()?,
            next_page: spec.next_page.compile()?,
            content_id: spec.content_id.compile()?,
            content_link: spec.content_link.compile()?,
            pagination: spec.pagination.compile()?,
            category_name: spec.category_name.compile()?,
            asin: spec.asin.compile()?,
            price: spec.price.compile()?,
            star: spec.star.compile()?,
            img: spec.img.compile()?,
            title: spec.title.compile()?,
        })
    }

    pub const fn region(&self) -> Region {
        self.region
    }

    pub fn parse_all_products<'a>(&self, doc: ElementRef<'a>) -> ParsingResult<Vec<ElementRef<'a>>> {
        self.items.find_elements(doc)
    }

    field_operations! {
        parse_current_page_index => current_page;
        parse_max_page_num => max_page;
        parse_next_page_url => next_page;
        /// Refinement id following `p_72/`, read from the last refinement entry
        parse_content_id => content_id;
        parse_content_link => content_link;
        /// Result count summary, `"unknown"` when the page shows none
        parse_pagination => pagination;
        parse_category_name => category_name;

        parse_asin => asin;
        parse_price => price;
        parse_star => star;
        parse_img => img;
        parse_title => title;
    }

    fn item(&self, card: ElementRef<'_>) -> ListingItem {
        ListingItem {
            asin: settle(Field::Asin, self.parse_asin(card)),
            title: settle(Field::Title, self.parse_title(card)),
            price: settle(Field::Price, self.parse_price(card)),
            star: settle(Field::Star, self.parse_star(card)),
            img_url: settle(Field::ImgUrl, self.parse_img(card)),
        }
    }
}

impl PageExtractor for ListingParser {
    type Output = ListingPage;

    fn extract_page(&self, html: &Html) -> ParsingResult<Self::Output> {
        let doc = html.root_element();
        let cards = self.parse_all_products(doc).inspect_err(|e| {
            warn!("No listing items found for region {}: {}", self.region, e);
        })?;
        debug!("Found {} listing items", cards.len());

        Ok(ListingPage {
            region: self.region,
            current_page: settle(Field::CurrentPage, self.parse_current_page_index(doc)),
            max_page: settle(Field::MaxPage, self.parse_max_page_num(doc)),
            next_page: settle(Field::NextPage, self.parse_next_page_url(doc)),
            content_id: settle(Field::ContentId, self.parse_content_id(doc)),
            content_link: settle(Field::ContentLink, self.parse_content_link(doc)),
            pagination: settle(Field::Pagination, self.parse_pagination(doc)),
            category_name: settle(Field::CategoryName, self.parse_category_name(doc)),
            items: cards.into_iter().map(|card| self.item(card)).collect(),
        })
    }
}
