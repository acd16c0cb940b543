//! amazon.de

#![allow(clippy::wildcard_imports)]

use super::*;
use crate::infrastructure::parsing::config::{
    BoardSpec, KeywordSpec, ListingSpec, ProductSpec, ReviewSpec,
};

pub(super) fn spec() -> RegionSpec {
    RegionSpec {
        region: Region::De,
        product: product(),
        keyword: keyword(),
        category: category(),
        seller: seller(),
        board: board(),
        review: review(),
    }
}

fn product() -> ProductSpec {
    ProductSpec {
        asin: product_asin(),
        star: star_text("von 5", Numbers::Comma),
        rating: product_rating(Numbers::Comma, None),
        title: product_title(),
        img: product_img(),
        price: product_price([core_price()]),
        dispatch_from: dispatch_from("Versand"),
        sold_by: text_field(
            Field::SoldBy,
            [
                merchant_block("Verkäufer", true),
                merchant_block("Verkäufer", false),
            ],
        ),
        dimensions: detail(Field::Dimensions, "tbody > tr > th", "Produktabmessungen"),
        package_dimensions: text_field(
            Field::PackageDimensions,
            [
                table_row("tbody > tr > th", "Verpackungsabmessungen"),
                table_row("tbody > tr > th", "Paket-Abmessungen"),
                bullet_row("Verpackungsabmessungen"),
            ],
        ),
        package_weight: FieldSpec::unsupported(Field::PackageWeight),
        weight: detail(Field::Weight, "tbody > tr > th", "Artikelgewicht"),
        first_available_date: text_field(
            Field::FirstAvailableDate,
            [
                table_row("tbody > tr > th", "Im Angebot von Amazon.de seit"),
                bullet_row("m Angebot von Amazon.de seit"),
            ],
        ),
        seller_id: seller_id(),
        category_id: category_id([rank_table_link("Amazon Bestseller-Rang")]),
        has_cart: has_cart("input#add-to-cart-button"),
        coupon: text_field(
            Field::Coupon,
            [Query::find("i")
                .has_text("Coupon")
                .following_sibling("label")
                .text()],
        ),
        color: text_field(Field::Color, [labelled("Farbe:")]),
        size: text_field(Field::Size, [table_cell("Größe")]),
        specs: variation_json(),
        description: description("Info zu diesem Artikel"),
        delivery_time: delivery(Field::DeliveryTime, "PRIMARY"),
        fastest_delivery: delivery(Field::FastestDelivery, "SECONDARY"),
        prime_price: FieldSpec::unsupported(Field::PrimePrice),
        brand: FieldSpec::unsupported(Field::Brand),
        category_hierarchy: category_hierarchy(),
        customer_reviews: customer_reviews(),
    }
}

fn keyword() -> KeywordSpec {
    KeywordSpec {
        items: result_cards(),
        current_page: current_page("Aktuelle Seite"),
        next_page: next_page_link("Zur nächsten Seite"),
        keyword: search_keyword(),
        asin: card_asin(),
        price: card_price([Transform::Trim]),
        star: card_star("von 5 Sternen", Numbers::Comma),
        rating: card_rating(
            Query::find("span[aria-label*='Gesponsert'] > a > span").text(),
            "0",
        ),
        // result cards keep the English badge
        sponsored: sponsored("Sponsored"),
        prime: prime(),
        sales: sales("Mal im letzten Monat gekauft"),
        img: card_img(),
        title: card_title(),
    }
}

fn category() -> ListingSpec {
    ListingSpec {
        items: result_cards(),
        current_page: current_page("Current page"),
        max_page: max_page(),
        next_page: next_page_link("Zur nächsten Seite"),
        content_id: content_id(),
        content_link: content_link(),
        pagination: pagination("Ergebnissen oder Vorschlägen für"),
        category_name: category_name(),
        asin: card_asin(),
        price: card_price([Transform::DropMoneySym, Transform::FormatNumberEuro]),
        star: card_star("von 5 Sternen", Numbers::Comma),
        img: card_img(),
        title: card_title(),
    }
}

fn seller() -> ListingSpec {
    ListingSpec {
        pagination: FieldSpec::unsupported(Field::Pagination),
        ..category()
    }
}

fn board() -> BoardSpec {
    BoardSpec {
        // the whole recommendation list is one node on this site
        items: recs_container().single(),
        next_page: board_next_page("Nächste Seite"),
        best_sellers: board_heading(Field::BestSellerCategory, "Bestseller in"),
        new_releases: board_heading(Field::NewReleasesCategory, "Neuerscheinungen in"),
        ..us::board()
    }
}

fn review() -> ReviewSpec {
    ReviewSpec {
        items: Query::find("body > li[data-hook*='review']"),
        reviewer: reviewer(),
        reviewer_link: reviewer_link(),
        star: star_text("von 5", Numbers::Comma),
        title: review_title("a[review-title] > span"),
        date: review_date(
            "span[data-hook*='review-date']",
            "Bewertet in Deutschland am",
        ),
        purchase: purchase(),
        content: review_content("div[review-text-content] > span"),
    }
}
