//! amazon.co.uk
//!
//! Search results and boards share the English markup of amazon.com.

#![allow(clippy::wildcard_imports)]

use super::*;
use crate::infrastructure::parsing::config::{ListingSpec, ProductSpec, ReviewSpec};

pub(super) fn spec() -> RegionSpec {
    RegionSpec {
        region: Region::Uk,
        product: product(),
        keyword: us::keyword(),
        category: category(),
        seller: seller(),
        board: us::board(),
        review: review(),
    }
}

fn product() -> ProductSpec {
    ProductSpec {
        asin: product_asin(),
        star: star_text("out of 5 stars", Numbers::Dot),
        rating: product_rating(
            Numbers::Dot,
            Some(Query::find("a").has_text("customer ratings").text()),
        ),
        title: product_title(),
        img: product_img(),
        price: product_price([
            Query::find("span[class='a-price'][data-a-color='base'] > span").text(),
            Query::find("span[class^='a-price'][data-a-color='price'] > span").text(),
            Query::find("span[class^='a-price'][data-a-color='base'] > span").text(),
            core_price(),
            Query::find("span[id^='a-price'][data-a-color='price'] > span").text(),
        ]),
        dispatch_from: dispatch_from("Dispatches from"),
        sold_by: text_field(
            Field::SoldBy,
            [merchant_inline("Sold by"), merchant_block("Sold by", true)],
        ),
        dimensions: detail(Field::Dimensions, "tbody > tr > th", "Product Dimensions"),
        package_dimensions: detail(
            Field::PackageDimensions,
            "tbody > tr > th",
            "Package Dimensions",
        ),
        package_weight: text_field(
            Field::PackageWeight,
            [table_row("tbody > tr > th", "Package Weight")],
        ),
        weight: detail(Field::Weight, "th", "Item Weight"),
        first_available_date: detail(
            Field::FirstAvailableDate,
            "tbody > tr > th",
            "Date First Available",
        ),
        seller_id: seller_id(),
        // a page without a rank row is not an error on this site
        category_id: category_id([
            rank_table_link("Best Sellers Rank"),
            rank_bullet_link("Best Sellers Rank"),
        ])
        .on_missing(OnMissing::Default),
        has_cart: has_cart("input#add-to-cart-button"),
        coupon: FieldSpec::unsupported(Field::Coupon),
        color: text_field(Field::Color, [labelled("Colour Name")]),
        size: text_field(Field::Size, [labelled("Size Name")]),
        specs: variants(),
        description: description("About this item"),
        delivery_time: delivery(Field::DeliveryTime, "PRIMARY"),
        fastest_delivery: delivery(Field::FastestDelivery, "SECONDARY"),
        prime_price: FieldSpec::unsupported(Field::PrimePrice),
        brand: FieldSpec::unsupported(Field::Brand),
        category_hierarchy: category_hierarchy(),
        customer_reviews: customer_reviews(),
    }
}

fn category() -> ListingSpec {
    ListingSpec {
        star: FieldSpec::new(Field::Star)
            .candidate(Query::find("span[aria-label*='out of 5 stars']").attr("aria-label"))
            .candidate(Query::find("span").has_text("out of 5 stars").text())
            .transforms([Transform::Trim, Transform::FirstWord, Transform::FormatNumber])
            .on_empty(OnEmpty::Default),
        ..us::listing()
    }
}

fn seller() -> ListingSpec {
    ListingSpec {
        price: card_price([Transform::DropMoneySym, Transform::FormatNumber]),
        ..us::listing()
    }
}

fn review() -> ReviewSpec {
    ReviewSpec {
        items: Query::find("body > div[review]"),
        reviewer: reviewer(),
        reviewer_link: reviewer_link(),
        star: star_text("out of 5 stars", Numbers::Dot),
        title: review_title("a[review-title] > span"),
        date: review_date(
            "span[data-hook*='review-date']",
            "Reviewed in the United Kingdom on",
        ),
        purchase: purchase(),
        content: review_content("div[review-text-content] > span"),
    }
}
