//! amazon.fr

#![allow(clippy::wildcard_imports)]

use super::*;
use crate::infrastructure::parsing::config::{KeywordSpec, ListingSpec, ProductSpec, ReviewSpec};

pub(super) fn spec() -> RegionSpec {
    RegionSpec {
        region: Region::Fr,
        product: product(),
        keyword: keyword(),
        category: category(),
        seller: seller(),
        board: us::board(),
        review: review(),
    }
}

fn product() -> ProductSpec {
    ProductSpec {
        asin: product_asin(),
        star: star_text("sur 5", Numbers::Comma),
        rating: product_rating(Numbers::Comma, None),
        title: product_title(),
        img: product_img(),
        price: product_price([core_price()]),
        dispatch_from: dispatch_from("Expédié par"),
        sold_by: text_field(
            Field::SoldBy,
            [
                merchant_block("Vendu par", true),
                merchant_block("Vendu par", false),
            ],
        ),
        dimensions: detail(Field::Dimensions, "tbody > tr > th", "Dimensions du produit"),
        package_dimensions: detail(Field::PackageDimensions, "th", "Dimensions du colis"),
        package_weight: detail(Field::PackageWeight, "th", "Artikelgewicht"),
        weight: detail(Field::Weight, "th", "Poids"),
        first_available_date: detail(
            Field::FirstAvailableDate,
            "tbody > tr > th",
            "Date de mise en ligne sur Amazon.fr",
        ),
        seller_id: seller_id(),
        // only the bullet list layout carries a usable link here
        category_id: category_id([Query::find("span")
            .has_text("Classement des meilleures ventes d'Amazon")
            .following_sibling("ul")
            .descendant("a")
            .attr("href")
            .last()]),
        has_cart: has_cart("input#add-to-cart-button"),
        coupon: FieldSpec::unsupported(Field::Coupon),
        color: text_field(Field::Color, [labelled("Couleur:"), table_cell("Couleur")]),
        size: text_field(Field::Size, [labelled("Taille:"), table_cell("Taille")]),
        specs: variants(),
        description: description("À propos de cet article"),
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
        current_page: current_page("Page actuelle"),
        next_page: next_page_link("Accéder à la page suivant"),
        keyword: search_keyword(),
        asin: card_asin(),
        price: card_price([Transform::DropMoneySym, Transform::FormatNumberEuro]),
        star: card_star("sur 5", Numbers::Comma),
        rating: card_rating(
            Query::find("span > div > span[aria-label*='évaluations'] > a > span").text(),
            "unknown",
        ),
        sponsored: sponsored("Sponsorisé"),
        prime: prime(),
        sales: sales("achetés au cours du mois dernier"),
        img: card_img(),
        title: card_title(),
    }
}

fn category() -> ListingSpec {
    ListingSpec {
        items: result_cards(),
        current_page: current_page("Current page"),
        max_page: max_page(),
        next_page: next_page_link("Accéder à la page suivante"),
        content_id: content_id(),
        content_link: content_link(),
        pagination: pagination("des plus de"),
        category_name: category_name(),
        asin: card_asin(),
        price: card_price([Transform::Trim]),
        star: card_star("sur 5", Numbers::Comma),
        img: card_img(),
        title: card_title(),
    }
}

fn seller() -> ListingSpec {
    ListingSpec {
        price: card_price([Transform::DropMoneySym, Transform::FormatNumberEuro]),
        ..category()
    }
}

fn review() -> ReviewSpec {
    ReviewSpec {
        items: Query::find("body > div[review]"),
        reviewer: reviewer(),
        reviewer_link: reviewer_link(),
        star: star_text("sur 5", Numbers::Comma),
        title: review_title("a[class*='review-title'] > span"),
        date: review_date("span[data-hook*='review-date']", "Avis laissé en France le"),
        purchase: purchase(),
        content: review_content("div[review-text-content] > span"),
    }
}
