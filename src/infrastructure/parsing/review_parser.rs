//! Customer review list parser

use scraper::{ElementRef, Html};
use tracing::{debug, warn};

use super::config::ReviewSpec;
use super::field::FieldRule;
use super::query::CompiledQuery;
use super::{settle, PageExtractor, ParsingResult};
use crate::domain::field::Field;
use crate::domain::records::{ReviewPage, ReviewRecord};
use crate::domain::region::Region;

#[derive(Debug, Clone)]
pub struct ReviewParser {
    region: Region,
    items: CompiledQuery,
    reviewer: FieldRule,
    reviewer_link: FieldRule,
    star: FieldRule,
    title: FieldRule,
    date: FieldRule,
    purchase: FieldRule,
    content: FieldRule,
}

impl ReviewParser {
    pub fn new(region: Region, spec: &ReviewSpec) -> ParsingResult<Self> {
        Ok(Self {
            region,
            items: spec.items.compile()?,
            reviewer: spec.reviewer.compile()?,
            reviewer_link: spec.reviewer_link.compile()?,
            star: spec.star.compile()?,
            title: spec.title.compile()?,
            date: spec.date.compile()?,
            purchase: spec.purchase.compile()?,
            content: spec.content.compile()?,
        })
    }

    pub const fn region(&self) -> Region {
        self.region
    }

    pub fn parse_all_reviews<'a>(&self, doc: ElementRef<'a>) -> ParsingResult<Vec<ElementRef<'a>>> {
        self.items.find_elements(doc)
    }

    field_operations! {
        parse_reviewer => reviewer;
        parse_reviewer_link => reviewer_link;
        parse_star => star;
        parse_title => title;
        /// Date part of the "Reviewed in ... on" line
        parse_date => date;
        /// Purchased variant, e.g. `Color: Black`
        parse_purchase => purchase;
        parse_content => content;
    }

    fn review(&self, node: ElementRef<'_>) -> ReviewRecord {
        ReviewRecord {
            reviewer: settle(Field::Reviewer, self.parse_reviewer(node)),
            reviewer_link: settle(Field::ReviewerLink, self.parse_reviewer_link(node)),
            star: settle(Field::Star, self.parse_star(node)),
            title: settle(Field::Title, self.parse_title(node)),
            date: settle(Field::ReviewDate, self.parse_date(node)),
            purchase: settle(Field::Purchase, self.parse_purchase(node)),
            content: settle(Field::ReviewContent, self.parse_content(node)),
        }
    }
}

impl PageExtractor for ReviewParser {
    type Output = ReviewPage;

    fn extract_page(&self, html: &Html) -> ParsingResult<Self::Output> {
        let nodes = self.parse_all_reviews(html.root_element()).inspect_err(|e| {
            warn!("No reviews found for region {}: {}", self.region, e);
        })?;
        debug!("Found {} reviews", nodes.len());

        Ok(ReviewPage {
            region: self.region,
            reviews: nodes.into_iter().map(|node| self.review(node)).collect(),
        })
    }
}
