//! amazon.com

#![allow(clippy::wildcard_imports)]

use super::*;
use crate::infrastructure::parsing::config::{
    BoardSpec, KeywordSpec, ListingSpec, ProductSpec, ReviewSpec,
};

pub(super) fn spec() -> RegionSpec {
    RegionSpec {
        region: Region::Us,
        product: product(),
        keyword: keyword(),
        category: listing(),
        seller: listing(),
        board: board(),
        review: review(),
    }
}

fn product() -> ProductSpec {
    ProductSpec {
        asin: product_asin(),
        star: star_text("out of 5 stars", Numbers::Dot),
        rating: product_rating(Numbers::Dot, None),
        title: product_title(),
        img: product_img(),
        price: product_price([
            Query::find("span[class^='a-price'][data-a-color='price'] > span").text(),
            core_price(),
            Query::find("span[id^='a-price'][data-a-color='price'] > span").text(),
        ]),
        dispatch_from: dispatch_from("Ships from"),
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
        first_available_date: detail(Field::FirstAvailableDate, "th", "Date First Available"),
        seller_id: seller_id(),
        // a page without a rank row is not an error on this site
        category_id: category_id([
            rank_table_link("Best Sellers Rank"),
            rank_bullet_link("Best Sellers Rank"),
        ])
        .on_missing(OnMissing::Default),
        has_cart: has_cart("input[id*='add-to-cart-button']"),
        coupon: text_field(
            Field::Coupon,
            [Query::find("i")
                .has_text("Coupon")
                .following_sibling("span")
                .child("label")
                .text()],
        ),
        color: text_field(Field::Color, [labelled("Color:")]),
        size: text_field(Field::Size, [labelled("Size:"), table_cell("Size")]),
        specs: variation_json(),
        description: description("About this item"),
        delivery_time: delivery(Field::DeliveryTime, "PRIMARY"),
        fastest_delivery: delivery(Field::FastestDelivery, "SECONDARY"),
        prime_price: text_field(
            Field::PrimePrice,
            [Query::find("span")
                .has_text("Join Prime to buy this item at")
                .following_sibling("span")
                .text()],
        ),
        brand: text_field(Field::Brand, [table_cell("Brand")]),
        category_hierarchy: category_hierarchy(),
        customer_reviews: customer_reviews(),
    }
}

pub(super) fn keyword() -> KeywordSpec {
    KeywordSpec {
        items: result_cards(),
        current_page: current_page("Current page"),
        next_page: next_page_link("Go to next page"),
        keyword: search_keyword(),
        asin: card_asin(),
        price: card_price([Transform::Trim]),
        star: card_star("out of 5 stars", Numbers::Dot),
        rating: card_rating(
            Query::find("span > div > span[aria-label*='rating'] > a > span").text(),
            "0",
        ),
        sponsored: sponsored("Sponsored"),
        prime: prime(),
        sales: sales("bought in past month"),
        img: card_img(),
        title: card_title(),
    }
}

/// Category and seller pages; the site has no dedicated layout for either.
pub(super) fn listing() -> ListingSpec {
    ListingSpec {
        items: result_cards(),
        current_page: current_page("Current page"),
        max_page: max_page(),
        next_page: next_page_link("Go to next page"),
        content_id: content_id(),
        content_link: content_link(),
        pagination: pagination("results for"),
        category_name: category_name(),
        asin: card_asin(),
        price: card_price([Transform::Trim]),
        star: card_star("out of 5 stars", Numbers::Dot),
        img: card_img(),
        title: card_title(),
    }
}

pub(super) fn board() -> BoardSpec {
    BoardSpec {
        items: board_grid(),
        next_page: board_next_page("Next page"),
        recs_list: recs_attr(Field::RecsList, "data-client-recs-list"),
        reftag: recs_attr(Field::Reftag, "data-reftag"),
        offset: recs_attr(Field::Offset, "data-index-offset"),
        acp_param: acp_attr(Field::AcpParam, "data-acp-params"),
        acp_path: acp_attr(Field::AcpPath, "data-acp-path"),
        best_sellers: board_heading(Field::BestSellerCategory, "Best Sellers in"),
        new_releases: board_heading(Field::NewReleasesCategory, "New Releases in"),
        asin: board_asin(),
        price: board_price(),
        star: board_star(),
        rating: board_rating(),
        title: board_title(),
        rank: board_rank(),
    }
}

fn review() -> ReviewSpec {
    ReviewSpec {
        items: Query::find("div#cm-cr-dp-review-list > div"),
        reviewer: reviewer(),
        reviewer_link: reviewer_link(),
        star: star_text("out of 5 stars", Numbers::Dot),
        title: review_title("a[class*='review-title'] > span"),
        date: review_date(
            "span[class*='review-date']",
            "Reviewed in the United States on",
        ),
        purchase: purchase(),
        content: review_content("div[class*='review-text-content'] > span"),
    }
}
