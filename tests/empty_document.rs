//! Every operation on a page with nothing in it
//!
//! A scalar operation must hand back either a usable sentinel or an error,
//! never an empty string with no explanation.

use amz_page_parser::domain::Field;
use amz_page_parser::{detect_region, Extraction, PageExtractor, ParserRegistry, ParsingError, Region};
use rstest::rstest;
use scraper::{ElementRef, Html};

const EMPTY: &str = "<html><body></body></html>";

fn assert_accounted(name: &str, extraction: &Extraction<String>) {
    assert!(
        !extraction.value().is_empty() || extraction.error().is_some(),
        "{name} returned an empty value without an error"
    );
}

fn check_all<P>(parser: &P, scope: ElementRef<'_>, ops: &[(&str, fn(&P, ElementRef<'_>) -> Extraction<String>)]) {
    for (name, op) in ops {
        assert_accounted(name, &op(parser, scope));
    }
}

#[rstest]
#[case(Region::Us)]
#[case(Region::Uk)]
#[case(Region::De)]
#[case(Region::Fr)]
fn product_operations(#[case] region: Region) {
    use amz_page_parser::infrastructure::ProductParser as P;
    let html = Html::parse_document(EMPTY);
    let registry = ParserRegistry::new().unwrap();
    let parser = registry.product(region).unwrap();
    let doc = html.root_element();

    check_all(
        parser,
        doc,
        &[
            ("asin", P::parse_asin),
            ("star", P::parse_star),
            ("rating", P::parse_rating),
            ("title", P::parse_title),
            ("img", P::parse_img),
            ("price", P::parse_price),
            ("dispatch_from", P::parse_dispatch_from),
            ("sold_by", P::parse_sold_by),
            ("dimensions", P::parse_product_dimensions),
            ("package_dimensions", P::parse_package_dimensions),
            ("package_weight", P::parse_package_weight),
            ("weight", P::parse_product_weight),
            ("first_available_date", P::parse_first_available_date),
            ("seller_id", P::parse_seller_id),
            ("category_id", P::parse_category_id),
            ("has_cart", P::parse_has_cart),
            ("coupon", P::parse_coupon),
            ("color", P::parse_color),
            ("size", P::parse_size),
            ("description", P::parse_description),
            ("delivery_time", P::parse_delivery_time),
            ("fastest_delivery", P::parse_fastest_delivery),
            ("prime_price", P::parse_prime_price),
            ("brand", P::parse_brand),
        ],
    );

    assert!(parser.parse_specs(doc).value().is_empty());
    assert_eq!(
        parser.parse_category_hierarchy(doc).error(),
        Some(&ParsingError::FieldNotFound(Field::CategoryHierarchy))
    );
    assert_eq!(
        parser.parse_customer_reviews(doc).error(),
        Some(&ParsingError::FieldNotFound(Field::CustomerReviews))
    );

    let record = parser.extract_page(&html).unwrap();
    assert_eq!(record.price, "unknown");
    assert!(record.category_hierarchy.is_empty());
}

#[rstest]
#[case(Region::Us)]
#[case(Region::Uk)]
#[case(Region::De)]
#[case(Region::Fr)]
fn keyword_operations(#[case] region: Region) {
    use amz_page_parser::infrastructure::KeywordParser as P;
    let html = Html::parse_document(EMPTY);
    let registry = ParserRegistry::new().unwrap();
    let parser = registry.keyword(region).unwrap();
    let doc = html.root_element();

    check_all(
        parser,
        doc,
        &[
            ("current_page", P::parse_current_page_index),
            ("next_page", P::parse_next_page_url),
            ("keyword", P::parse_keyword),
            ("asin", P::parse_asin),
            ("price", P::parse_price),
            ("star", P::parse_star),
            ("rating", P::parse_rating),
            ("sponsored", P::parse_sponsored),
            ("prime", P::parse_prime),
            ("sales", P::parse_sales),
            ("img", P::parse_img),
            ("title", P::parse_title),
        ],
    );

    assert!(matches!(parser.parse_all_products(doc), Err(ParsingError::NoMatch { .. })));
    assert!(parser.extract_page(&html).is_err());
}

#[rstest]
#[case(Region::Us)]
#[case(Region::Uk)]
#[case(Region::De)]
#[case(Region::Fr)]
fn listing_operations(#[case] region: Region) {
    use amz_page_parser::infrastructure::ListingParser as P;
    let html = Html::parse_document(EMPTY);
    let registry = ParserRegistry::new().unwrap();
    let doc = html.root_element();

    for parser in [registry.category(region).unwrap(), registry.seller(region).unwrap()] {
        check_all(
            parser,
            doc,
            &[
                ("current_page", P::parse_current_page_index),
                ("max_page", P::parse_max_page_num),
                ("next_page", P::parse_next_page_url),
                ("content_id", P::parse_content_id),
                ("content_link", P::parse_content_link),
                ("pagination", P::parse_pagination),
                ("category_name", P::parse_category_name),
                ("asin", P::parse_asin),
                ("price", P::parse_price),
                ("star", P::parse_star),
                ("img", P::parse_img),
                ("title", P::parse_title),
            ],
        );
        assert!(matches!(parser.parse_all_products(doc), Err(ParsingError::NoMatch { .. })));
        assert!(parser.extract_page(&html).is_err());
    }
}

#[rstest]
#[case(Region::Us)]
#[case(Region::Uk)]
#[case(Region::De)]
#[case(Region::Fr)]
fn board_operations(#[case] region: Region) {
    use amz_page_parser::infrastructure::BoardParser as P;
    let html = Html::parse_document(EMPTY);
    let registry = ParserRegistry::new().unwrap();
    let parser = registry.board(region).unwrap();
    let doc = html.root_element();

    check_all(
        parser,
        doc,
        &[
            ("next_page", P::parse_next_page_url),
            ("recs_list", P::parse_recs_list),
            ("reftag", P::parse_reftag),
            ("offset", P::parse_offset),
            ("acp_param", P::parse_acp_param),
            ("acp_path", P::parse_acp_path),
            ("best_sellers", P::parse_best_sellers_category),
            ("new_releases", P::parse_new_releases_category),
            ("asin", P::parse_asin),
            ("price", P::parse_price),
            ("star", P::parse_star),
            ("rating", P::parse_rating),
            ("title", P::parse_title),
            ("rank", P::parse_rank),
        ],
    );

    assert!(matches!(parser.parse_all_products(doc), Err(ParsingError::NoMatch { .. })));
    assert!(parser.extract_page(&html).is_err());
}

#[rstest]
#[case(Region::Us)]
#[case(Region::Uk)]
#[case(Region::De)]
#[case(Region::Fr)]
fn review_operations(#[case] region: Region) {
    use amz_page_parser::infrastructure::ReviewParser as P;
    let html = Html::parse_document(EMPTY);
    let registry = ParserRegistry::new().unwrap();
    let parser = registry.review(region).unwrap();
    let doc = html.root_element();

    check_all(
        parser,
        doc,
        &[
            ("reviewer", P::parse_reviewer),
            ("reviewer_link", P::parse_reviewer_link),
            ("star", P::parse_star),
            ("title", P::parse_title),
            ("date", P::parse_date),
            ("purchase", P::parse_purchase),
            ("content", P::parse_content),
        ],
    );

    assert!(matches!(parser.parse_all_reviews(doc), Err(ParsingError::NoMatch { .. })));
    assert!(parser.extract_page(&html).is_err());
}

#[test]
fn region_is_not_guessed() {
    let html = Html::parse_document(EMPTY);
    assert_eq!(detect_region(&html), Err(ParsingError::LanguageNotFound));
}
