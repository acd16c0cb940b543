use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::region::Region;

/// Everything read from a product detail page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub region: Region,
    pub asin: String,
    pub title: String,
    pub price: String,
    pub star: String,
    pub rating: String,
    pub img_url: String,
    pub dispatch_from: String,
    pub sold_by: String,
    pub dimensions: String,
    pub package_dimensions: String,
    pub weight: String,
    pub package_weight: String,
    pub first_available_date: String,
    pub seller_id: String,
    pub category_id: String,
    pub has_cart: String,
    pub coupon: String,
    pub color: String,
    pub size: String,
    pub specs: Vec<String>,
    pub description: String,
    pub delivery_time: String,
    pub fastest_delivery: String,
    pub prime_price: String,
    pub brand: String,
    pub category_hierarchy: Vec<String>,
    /// Rating histogram, e.g. `"5 star" -> "71%"`
    pub customer_reviews: BTreeMap<String, String>,
}

/// One result card on a keyword search page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordItem {
    pub asin: String,
    pub title: String,
    pub price: String,
    pub star: String,
    pub rating: String,
    pub sponsored: String,
    pub prime: String,
    pub sales: String,
    pub img_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordPage {
    pub region: Region,
    pub keyword: String,
    pub current_page: String,
    pub next_page: String,
    pub items: Vec<KeywordItem>,
}

/// One result card on a category or seller page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingItem {
    pub asin: String,
    pub title: String,
    pub price: String,
    pub star: String,
    pub img_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingPage {
    pub region: Region,
    pub current_page: String,
    pub max_page: String,
    pub next_page: String,
    pub content_id: String,
    pub content_link: String,
    pub pagination: String,
    pub category_name: String,
    pub items: Vec<ListingItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardItem {
    pub asin: String,
    pub rank: String,
    pub title: String,
    pub price: String,
    pub star: String,
    pub rating: String,
}

/// Best seller or new release board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardPage {
    pub region: Region,
    pub best_sellers_category: String,
    pub new_releases_category: String,
    pub next_page: String,
    pub recs_list: String,
    pub reftag: String,
    pub offset: String,
    pub acp_param: String,
    pub acp_path: String,
    pub items: Vec<BoardItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewRecord {
    pub reviewer: String,
    pub reviewer_link: String,
    pub star: String,
    pub title: String,
    pub date: String,
    pub purchase: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewPage {
    pub region: Region,
    pub reviews: Vec<ReviewRecord>,
}
