//! Best seller and new release board parser

use scraper::{ElementRef, Html};
use tracing::{debug, warn};

use super::config::BoardSpec;
use super::field::FieldRule;
use super::query::CompiledQuery;
use super::{settle, PageExtractor, ParsingResult};
use crate::domain::field::Field;
use crate::domain::records::{BoardItem, BoardPage};
use crate::domain::region::Region;

#[derive(Debug, Clone)]
pub struct BoardParser {
    region: Region,
    items: CompiledQuery,
    next_page: FieldRule,
    recs_list: FieldRule,
    reftag: FieldRule,
    offset: FieldRule,
    acp_param: FieldRule,
    acp_path: FieldRule,
    best_sellers: FieldRule,
    new_releases: FieldRule,
    asin: FieldRule,
    price: FieldRule,
    star: FieldRule,
    rating: FieldRule,
    title: FieldRule,
    rank: FieldRule,
}

impl BoardParser {
    pub fn new(region: Region, spec: &BoardSpec) -> ParsingResult<Self> {
        Ok(Self {
            region,
            items: spec.items.compile()?,
            next_page: spec.next_page.compile()?,
            recs_list: spec.recs_list.compile()?,
            reftag: spec.reftag.compile()?,
            offset: spec.offset.compile()?,
            acp_param: spec.acp_param.compile()?,
            acp_path: spec.acp_path.compile()?,
            best_sellers: spec.best_sellers.compile()?,
            new_releases: spec.new_releases.compile()?,
            asin: spec.asin.compile()?,
            price: spec.price.compile()?,
            star: spec.star.compile()?,
            rating: spec.rating.compile()?,
            title: spec.title.compile()?,
            rank: spec.rank.compile()?,
        })
    }

    pub const fn region(&self) -> Region {
        self.region
    }

    /// Ranked entries of the board. On some sites the whole list is a single node.
    pub fn parse_all_products<'a>(&self, doc: ElementRef<'a>) -> ParsingResult<Vec<ElementRef<'a>>> {
        self.items.find_elements(doc)
    }

    field_operations! {
        parse_next_page_url => next_page;
        /// Raw `data-client-recs-list` payload used to page through the board
        parse_recs_list => recs_list;
        parse_reftag => reftag;
        parse_offset => offset;
        parse_acp_param => acp_param;
        parse_acp_path => acp_path;
        parse_best_sellers_category => best_sellers;
        parse_new_releases_category => new_releases;

        parse_asin => asin;
        parse_price => price;
        parse_star => star;
        parse_rating => rating;
        parse_title => title;
        /// Board position without the leading `#`
        parse_rank => rank;
    }

    fn item(&self, entry: ElementRef<'_>) -> BoardItem {
        BoardItem {
            asin: settle(Field::Asin, self.parse_asin(entry)),
            rank: settle(Field::Rank, self.parse_rank(entry)),
            title: settle(Field::Title, self.parse_title(entry)),
            price: settle(Field::Price, self.parse_price(entry)),
            star: settle(Field::Star, self.parse_star(entry)),
            rating: settle(Field::Rating, self.parse_rating(entry)),
        }
    }
}

impl PageExtractor for BoardParser {
    type Output = BoardPage;

    fn extract_page(&self, html: &Html) -> ParsingResult<Self::Output> {
        let doc = html.root_element();
        let entries = self.parse_all_products(doc).inspect_err(|e| {
            warn!("No board entries found for region {}: {}", self.region, e);
        })?;
        debug!("Found {} board entries", entries.len());

        Ok(BoardPage {
            region: self.region,
            best_sellers_category: settle(Field::BestSellerCategory, self.parse_best_sellers_category(doc)),
            new_releases_category: settle(Field::NewReleasesCategory, self.parse_new_releases_category(doc)),
            next_page: settle(Field::NextPage, self.parse_next_page_url(doc)),
            recs_list: settle(Field::RecsList, self.parse_recs_list(doc)),
            reftag: settle(Field::Reftag, self.parse_reftag(doc)),
            offset: settle(Field::Offset, self.parse_offset(doc)),
            acp_param: settle(Field::AcpParam, self.parse_acp_param(doc)),
            acp_path: settle(Field::AcpPath, self.parse_acp_path(doc)),
            items: entries.into_iter().map(|entry| self.item(entry)).collect(),
        })
    }
}
