//! Product detail page parser

use std::collections::{BTreeMap, HashSet};

use regex::Regex;
use scraper::{ElementRef, Html};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use super::config::{CustomerReviewsSpec, ProductSpec, SpecsSpec, VariantSource};
use super::field::{Extraction, FieldRule};
use super::query::{CompiledQuery, Hit};
use super::{settle, PageExtractor, ParsingError, ParsingResult};
use crate::domain::field::Field;
use crate::domain::records::ProductRecord;
use crate::domain::region::Region;
use crate::utils::UNKNOWN;

#[derive(Debug, Clone)]
enum SpecsRule {
    VariationJson { pattern: Regex, marker: String },
    Variants { color: VariantRule, size: VariantRule },
}

#[derive(Debug, Clone)]
struct VariantRule {
    dropdown: CompiledQuery,
    options: CompiledQuery,
    swatches: CompiledQuery,
}

impl VariantRule {
    fn compile(source: &VariantSource) -> ParsingResult<Self> {
        Ok(Self {
            dropdown: source.dropdown.compile()?,
            options: source.options.compile()?,
            swatches: source.swatches.compile()?,
        })
    }

    /// Ids from the dropdown options when the dropdown exists, from swatches otherwise.
    fn collect(&self, doc: ElementRef<'_>, specs: &mut Vec<String>) {
        if self.dropdown.find(doc).is_ok() {
            if let Ok(options) = self.options.find(doc) {
                specs.extend(options.iter().filter_map(|option| {
                    option.value().split(',').nth(1).map(str::to_string)
                }));
            }
        } else if let Ok(swatches) = self.swatches.find(doc) {
            specs.extend(
                swatches
                    .iter()
                    .map(|swatch| swatch.value().into_owned())
                    .filter(|id| !id.is_empty()),
            );
        }
    }
}

#[derive(Debug, Clone)]
struct HistogramRule {
    rows: CompiledQuery,
    left: CompiledQuery,
    right: CompiledQuery,
}

impl HistogramRule {
    fn compile(spec: &CustomerReviewsSpec) -> ParsingResult<Self> {
        Ok(Self {
            rows: spec.rows.compile()?,
            left: spec.left.compile()?,
            right: spec.right.compile()?,
        })
    }
}

fn first_trimmed(query: &CompiledQuery, scope: ElementRef<'_>) -> Option<String> {
    query
        .find(scope)
        .ok()
        .and_then(|hits| hits.first().map(|hit| hit.value().trim().to_string()))
}

/// Parser for product detail pages of one region
#[derive(Debug, Clone)]
pub struct ProductParser {
    region: Region,
    asin: FieldRule,
    star: FieldRule,
    rating: FieldRule,
    title: FieldRule,
    img: FieldRule,
    price: FieldRule,
    dispatch_from: FieldRule,
    sold_by: FieldRule,
    dimensions: FieldRule,
    package_dimensions: FieldRule,
    package_weight: FieldRule,
    weight: FieldRule,
    first_available_date: FieldRule,
    seller_id: FieldRule,
    category_id: FieldRule,
    has_cart: FieldRule,
    coupon: FieldRule,
    color: FieldRule,
    size: FieldRule,
    specs: SpecsRule,
    description: FieldRule,
    delivery_time: FieldRule,
    fastest_delivery: FieldRule,
    prime_price: FieldRule,
    brand: FieldRule,
    category_hierarchy: FieldRule,
    customer_reviews: HistogramRule,
}

impl ProductParser {
    pub fn new(region: Region, spec: &ProductSpec) -> ParsingResult<Self> {
        let specs = match &spec.specs {
            SpecsSpec::VariationJson { key } => {
                let pattern = format!("\"{}(.*)", regex::escape(key));
                SpecsRule::VariationJson {
                    pattern: Regex::new(&pattern)
                        .map_err(|e| ParsingError::invalid_selector(&pattern, &e.to_string()))?,
                    marker: format!("\"{key}\" : "),
                }
            }
            SpecsSpec::Variants { color, size } => SpecsRule::Variants {
                color: VariantRule::compile(color)?,
                size: VariantRule::compile(size)?,
            },
        };

        Ok(Self {
            region,
            asin: spec.asin.compile()?,
            star: spec.star.compile()?,
            rating: spec.rating.compile()?,
            title: spec.title.compile()?,
            img: spec.img.compile()?,
            price: spec.price.compile()?,
            dispatch_from: spec.dispatch_from.compile()?,
            sold_by: spec.sold_by.compile()?,
            dimensions: spec.dimensions.compile()?,
            package_dimensions: spec.package_dimensions.compile()?,
            package_weight: spec.package_weight.compile()?,
            weight: spec.weight.compile()?,
            first_available_date: spec.first_available_date.compile()?,
            seller_id: spec.seller_id.compile()?,
            category_id: spec.category_id.compile()?,
            has_cart: spec.has_cart.compile()?,
            coupon: spec.coupon.compile()?,
            color: spec.color.compile()?,
            size: spec.size.compile()?,
            specs,
            description: spec.description.compile()?,
            delivery_time: spec.delivery_time.compile()?,
            fastest_delivery: spec.fastest_delivery.compile()?,
            prime_price: spec.prime_price.compile()?,
            brand: spec.brand.compile()?,
            category_hierarchy: spec.category_hierarchy.compile()?,
            customer_reviews: HistogramRule::compile(&spec.customer_reviews)?,
        })
    }

    pub const fn region(&self) -> Region {
        self.region
    }

    field_operations! {
        parse_asin => asin;
        parse_star => star;
        parse_rating => rating;
        parse_title => title;
        parse_img => img;
        parse_price => price;
        parse_dispatch_from => dispatch_from;
        parse_sold_by => sold_by;
        parse_product_dimensions => dimensions;
        parse_package_dimensions => package_dimensions;
        parse_package_weight => package_weight;
        parse_product_weight => weight;
        parse_first_available_date => first_available_date;
        parse_seller_id => seller_id;
        /// First digit run of the last best sellers rank link
        parse_category_id => category_id;
        /// `"true"` when an add-to-cart button exists
        parse_has_cart => has_cart;
        parse_coupon => coupon;
        parse_color => color;
        parse_size => size;
        /// Bullet points joined as `"1. a 2. b "`
        parse_description => description;
        parse_delivery_time => delivery_time;
        parse_fastest_delivery => fastest_delivery;
        parse_prime_price => prime_price;
        parse_brand => brand;
    }

    /// Variation ids offered on the page.
    ///
    /// A page without variations yields an empty list and no error.
    pub fn parse_specs(&self, doc: ElementRef<'_>) -> Extraction<Vec<String>> {
        match &self.specs {
            SpecsRule::VariationJson { pattern, marker } => {
                let text: String = doc.text().collect();
                let Some(json) = pattern
                    .find(&text)
                    .and_then(|found| found.as_str().split_once(marker.as_str()))
                    .map(|(_, rest)| rest.trim_matches(','))
                else {
                    debug!("no variation data on page");
                    return Extraction::found(Vec::new());
                };

                match serde_json::from_str::<Map<String, Value>>(json) {
                    Ok(variations) => {
                        let mut keys: Vec<String> = variations.into_iter().map(|(key, _)| key).collect();
                        keys.sort();
                        Extraction::found(keys)
                    }
                    Err(e) => {
                        warn!("Malformed variation data: {}", e);
                        Extraction::failed(Vec::new(), ParsingError::invalid_data(Field::Specs, e.to_string()))
                    }
                }
            }
            SpecsRule::Variants { color, size } => {
                let mut specs = Vec::new();
                color.collect(doc, &mut specs);
                size.collect(doc, &mut specs);

                let mut seen = HashSet::new();
                specs.retain(|id| seen.insert(id.clone()));
                Extraction::found(specs)
            }
        }
    }

    /// Breadcrumb trail, outermost category first.
    pub fn parse_category_hierarchy(&self, doc: ElementRef<'_>) -> Extraction<Vec<String>> {
        self.category_hierarchy.extract_all(doc)
    }

    /// Rating histogram: row label mapped to its percentage.
    pub fn parse_customer_reviews(&self, doc: ElementRef<'_>) -> Extraction<BTreeMap<String, String>> {
        let rows = match self.customer_reviews.rows.find(doc) {
            Ok(rows) => rows,
            Err(ParsingError::NoMatch { .. }) => {
                return Extraction::failed(BTreeMap::new(), ParsingError::FieldNotFound(Field::CustomerReviews));
            }
            Err(error) => return Extraction::failed(BTreeMap::new(), error),
        };

        let histogram = rows
            .iter()
            .filter_map(Hit::element)
            .filter_map(|row| {
                let label = first_trimmed(&self.customer_reviews.left, row)?;
                let share = first_trimmed(&self.customer_reviews.right, row)
                    .unwrap_or_else(|| UNKNOWN.to_string());
                Some((label, share))
            })
            .collect();
        Extraction::found(histogram)
    }
}

impl PageExtractor for ProductParser {
    type Output = ProductRecord;

    fn extract_page(&self, html: &Html) -> ParsingResult<Self::Output> {
        let doc = html.root_element();
        debug!("Extracting product page for region {}", self.region);

        let record = ProductRecord {
            region: self.region,
            asin: settle(Field::Asin, self.parse_asin(doc)),
            title: settle(Field::Title, self.parse_title(doc)),
            price: settle(Field::Price, self.parse_price(doc)),
            star: settle(Field::Star, self.parse_star(doc)),
            rating: settle(Field::Rating, self.parse_rating(doc)),
            img_url: settle(Field::ImgUrl, self.parse_img(doc)),
            dispatch_from: settle(Field::DispatchFrom, self.parse_dispatch_from(doc)),
            sold_by: settle(Field::SoldBy, self.parse_sold_by(doc)),
            dimensions: settle(Field::Dimensions, self.parse_product_dimensions(doc)),
            package_dimensions: settle(Field::PackageDimensions, self.parse_package_dimensions(doc)),
            weight: settle(Field::Weight, self.parse_product_weight(doc)),
            package_weight: settle(Field::PackageWeight, self.parse_package_weight(doc)),
            first_available_date: settle(Field::FirstAvailableDate, self.parse_first_available_date(doc)),
            seller_id: settle(Field::SellerId, self.parse_seller_id(doc)),
            category_id: settle(Field::CategoryId, self.parse_category_id(doc)),
            has_cart: settle(Field::HasCart, self.parse_has_cart(doc)),
            coupon: settle(Field::Coupon, self.parse_coupon(doc)),
            color: settle(Field::Color, self.parse_color(doc)),
            size: settle(Field::Size, self.parse_size(doc)),
            specs: settle(Field::Specs, self.parse_specs(doc)),
            description: settle(Field::Description, self.parse_description(doc)),
            delivery_time: settle(Field::DeliveryTime, self.parse_delivery_time(doc)),
            fastest_delivery: settle(Field::FastestDelivery, self.parse_fastest_delivery(doc)),
            prime_price: settle(Field::PrimePrice, self.parse_prime_price(doc)),
            brand: settle(Field::Brand, self.parse_brand(doc)),
            category_hierarchy: settle(Field::CategoryHierarchy, self.parse_category_hierarchy(doc)),
            customer_reviews: settle(Field::CustomerReviews, self.parse_customer_reviews(doc)),
        };

        debug!("Extracted product {} ({})", record.asin, record.title);
        Ok(record)
    }
}
