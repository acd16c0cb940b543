//! Parsing configuration for HTML extraction
//!
//! The complete rule table: for every region, one spec per page domain. The
//! default table is built from the region modules; a custom one can be loaded
//! from JSON and handed to [`ParserRegistry::from_config`].
//!
//! [`ParserRegistry::from_config`]: super::registry::ParserRegistry::from_config

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::field::FieldSpec;
use super::query::Query;
use super::regions;
use crate::domain::region::Region;

/// Main parsing configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsingConfig {
    pub regions: Vec<RegionSpec>,
}

impl Default for ParsingConfig {
    fn default() -> Self {
        Self {
            regions: Region::ALL.iter().map(|&region| regions::spec_for(region)).collect(),
        }
    }
}

impl ParsingConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read rule table {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse rule table {}", path.display()))?;
        info!("Loaded rules for {} regions from {:?}", config.regions.len(), path);
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
        let content = serde_json::to_string_pretty(self).context("Failed to serialize rule table")?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write rule table {}", path.display()))?;
        Ok(())
    }

    pub fn region(&self, region: Region) -> Option<&RegionSpec> {
        self.regions.iter().find(|spec| spec.region == region)
    }

    /// Keep only the listed regions.
    #[must_use]
    pub fn restricted_to(mut self, regions: &[Region]) -> Self {
        self.regions.retain(|spec| regions.contains(&spec.region));
        self
    }
}

/// Rules for one regional site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionSpec {
    pub region: Region,
    pub product: ProductSpec,
    pub keyword: KeywordSpec,
    pub category: ListingSpec,
    pub seller: ListingSpec,
    pub board: BoardSpec,
    pub review: ReviewSpec,
}

/// Product detail page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSpec {
    pub asin: FieldSpec,
    pub star: FieldSpec,
    pub rating: FieldSpec,
    pub title: FieldSpec,
    pub img: FieldSpec,
    pub price: FieldSpec,
    pub dispatch_from: FieldSpec,
    pub sold_by: FieldSpec,
    pub dimensions: FieldSpec,
    pub package_dimensions: FieldSpec,
    pub package_weight: FieldSpec,
    pub weight: FieldSpec,
    pub first_available_date: FieldSpec,
    pub seller_id: FieldSpec,
    pub category_id: FieldSpec,
    pub has_cart: FieldSpec,
    pub coupon: FieldSpec,
    pub color: FieldSpec,
    pub size: FieldSpec,
    pub specs: SpecsSpec,
    pub description: FieldSpec,
    pub delivery_time: FieldSpec,
    pub fastest_delivery: FieldSpec,
    pub prime_price: FieldSpec,
    pub brand: FieldSpec,
    pub category_hierarchy: FieldSpec,
    pub customer_reviews: CustomerReviewsSpec,
}

/// Where the list of variation ids comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SpecsSpec {
    /// JSON object embedded in a script as `"<key>" : {...},`; its keys are the specs
    VariationJson { key: String },
    /// Color and size pickers
    Variants {
        color: VariantSource,
        size: VariantSource,
    },
}

/// One variation picker: a native dropdown, or swatches when it is absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantSource {
    /// Presence of the dropdown selects the option form
    pub dropdown: Query,
    /// Options whose comma-separated value carries the id second
    pub options: Query,
    /// Swatch items carrying the id directly
    pub swatches: Query,
}

/// Rating histogram rows mapped left label to right label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerReviewsSpec {
    pub rows: Query,
    pub left: Query,
    pub right: Query,
}

/// Keyword search results page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordSpec {
    pub items: Query,
    pub current_page: FieldSpec,
    pub next_page: FieldSpec,
    pub keyword: FieldSpec,
    pub asin: FieldSpec,
    pub price: FieldSpec,
    pub star: FieldSpec,
    pub rating: FieldSpec,
    pub sponsored: FieldSpec,
    pub prime: FieldSpec,
    pub sales: FieldSpec,
    pub img: FieldSpec,
    pub title: FieldSpec,
}

/// Category browse and seller storefront pages share one layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingSpec {
    pub items: Query,
    pub current_page: FieldSpec,
    pub max_page: FieldSpec,
    pub next_page: FieldSpec,
    pub content_id: FieldSpec,
    pub content_link: FieldSpec,
    pub pagination: FieldSpec,
    pub category_name: FieldSpec,
    pub asin: FieldSpec,
    pub price: FieldSpec,
    pub star: FieldSpec,
    pub img: FieldSpec,
    pub title: FieldSpec,
}

/// Best seller and new release boards
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSpec {
    pub items: Query,
    pub next_page: FieldSpec,
    pub recs_list: FieldSpec,
    pub reftag: FieldSpec,
    pub offset: FieldSpec,
    pub acp_param: FieldSpec,
    pub acp_path: FieldSpec,
    pub best_sellers: FieldSpec,
    pub new_releases: FieldSpec,
    pub asin: FieldSpec,
    pub price: FieldSpec,
    pub star: FieldSpec,
    pub rating: FieldSpec,
    pub title: FieldSpec,
    pub rank: FieldSpec,
}

/// Review listing page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewSpec {
    pub items: Query,
    pub reviewer: FieldSpec,
    pub reviewer_link: FieldSpec,
    pub star: FieldSpec,
    pub title: FieldSpec,
    pub date: FieldSpec,
    pub purchase: FieldSpec,
    pub content: FieldSpec,
}
