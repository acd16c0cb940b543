//! Catalogue of extractable fields
//!
//! Every field extracted by any page parser has exactly one entry here. The
//! entry doubles as the "not found" error kind for that field, so the same
//! value is reported whichever region produced the failure.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    // Shared by several page kinds
    Asin,
    Title,
    Price,
    Star,
    Rating,
    ImgUrl,
    NextPage,
    CurrentPage,

    // Product detail
    DispatchFrom,
    SoldBy,
    Dimensions,
    PackageDimensions,
    Weight,
    PackageWeight,
    FirstAvailableDate,
    SellerId,
    CategoryId,
    HasCart,
    Coupon,
    Color,
    Size,
    Specs,
    Description,
    DeliveryTime,
    FastestDelivery,
    PrimePrice,
    Brand,
    CategoryHierarchy,
    CustomerReviews,

    // Search and browse listings
    Keyword,
    Sponsored,
    Prime,
    Sales,
    MaxPage,
    ContentId,
    ContentLink,
    Pagination,
    CategoryName,

    // Best seller / new release boards
    RecsList,
    Reftag,
    Offset,
    AcpParam,
    AcpPath,
    BestSellerCategory,
    NewReleasesCategory,
    Rank,

    // Reviews
    Reviewer,
    ReviewerLink,
    ReviewDate,
    Purchase,
    ReviewContent,
}

impl Field {
    /// Human readable label used in error messages and logs.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Asin => "asin",
            Self::Title => "title",
            Self::Price => "price",
            Self::Star => "star",
            Self::Rating => "rating",
            Self::ImgUrl => "image url",
            Self::NextPage => "next page",
            Self::CurrentPage => "current page",
            Self::DispatchFrom => "dispatch from",
            Self::SoldBy => "sold by",
            Self::Dimensions => "dimensions",
            Self::PackageDimensions => "package dimensions",
            Self::Weight => "weight",
            Self::PackageWeight => "package weight",
            Self::FirstAvailableDate => "first available date",
            Self::SellerId => "seller id",
            Self::CategoryId => "category id",
            Self::HasCart => "cart",
            Self::Coupon => "coupon",
            Self::Color => "color",
            Self::Size => "size",
            Self::Specs => "specs",
            Self::Description => "description",
            Self::DeliveryTime => "delivery time",
            Self::FastestDelivery => "fastest delivery",
            Self::PrimePrice => "prime price",
            Self::Brand => "brand",
            Self::CategoryHierarchy => "category hierarchy",
            Self::CustomerReviews => "customer reviews",
            Self::Keyword => "keyword",
            Self::Sponsored => "sponsored",
            Self::Prime => "prime",
            Self::Sales => "sales",
            Self::MaxPage => "max page",
            Self::ContentId => "content id",
            Self::ContentLink => "content link",
            Self::Pagination => "pagination",
            Self::CategoryName => "category name",
            Self::RecsList => "recs list",
            Self::Reftag => "reftag",
            Self::Offset => "offset",
            Self::AcpParam => "acp param",
            Self::AcpPath => "acp path",
            Self::BestSellerCategory => "best seller category",
            Self::NewReleasesCategory => "new releases category",
            Self::Rank => "rank",
            Self::Reviewer => "reviewer",
            Self::ReviewerLink => "reviewer link",
            Self::ReviewDate => "review date",
            Self::Purchase => "purchase",
            Self::ReviewContent => "review content",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
