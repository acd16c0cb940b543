//! Product detail extraction across the four sites
mod common;

use amz_page_parser::domain::Field;
use amz_page_parser::{detect_region, PageExtractor, ParserRegistry, ParsingError, Region};
use rstest::rstest;
use scraper::Html;

#[rstest]
#[case(Region::Us, "$89.99", "4.6")]
#[case(Region::Uk, "£89.99", "4.6")]
#[case(Region::De, "89,99", "4.6")]
#[case(Region::Fr, "89,99", "4.6")]
fn product_fields_per_region(#[case] region: Region, #[case] price: &str, #[case] star: &str) {
    let html = Html::parse_document(&common::product_page(region));
    assert_eq!(detect_region(&html).unwrap(), region);

    let registry = ParserRegistry::new().unwrap();
    let parser = registry.product(region).unwrap();
    let doc = html.root_element();

    assert_eq!(parser.parse_asin(doc).into_result().unwrap(), "B0PROD0001");
    assert_eq!(parser.parse_title(doc).into_result().unwrap(), "Acme Pro Blender");
    assert_eq!(parser.parse_price(doc).into_result().unwrap(), price);
    assert_eq!(parser.parse_star(doc).into_result().unwrap(), star);
    assert_eq!(parser.parse_rating(doc).into_result().unwrap(), "12345");
    assert_eq!(
        parser.parse_img(doc).into_result().unwrap(),
        "https://m.media-amazon.com/images/I/blender.jpg"
    );
    assert_eq!(parser.parse_seller_id(doc).into_result().unwrap(), "A1SELLER");
    assert_eq!(parser.parse_has_cart(doc).into_result().unwrap(), "true");
    assert_eq!(parser.parse_product_dimensions(doc).into_result().unwrap(), "30 x 20 x 40 cm");
    assert_eq!(parser.parse_product_weight(doc).into_result().unwrap(), "2.5 kg");
    assert_eq!(parser.parse_description(doc).into_result().unwrap(), "1. Fast 2. Quiet ");
    assert_eq!(parser.parse_delivery_time(doc).into_result().unwrap(), "Tuesday, May 7");
    assert_eq!(
        parser.parse_category_hierarchy(doc).into_result().unwrap(),
        vec!["Home", "Kitchen"]
    );
}

#[rstest]
#[case(Region::Us)]
#[case(Region::Uk)]
#[case(Region::De)]
#[case(Region::Fr)]
fn absent_fields_report_their_catalogue_entry(#[case] region: Region) {
    let html = Html::parse_document(&common::product_page(region));
    let registry = ParserRegistry::new().unwrap();
    let parser = registry.product(region).unwrap();
    let doc = html.root_element();

    let fastest = parser.parse_fastest_delivery(doc);
    assert_eq!(fastest.error(), Some(&ParsingError::FieldNotFound(Field::FastestDelivery)));

    let reviews = parser.parse_customer_reviews(doc);
    assert!(reviews.value().is_empty());
    assert_eq!(reviews.error(), Some(&ParsingError::FieldNotFound(Field::CustomerReviews)));
}

#[rstest]
#[case(Region::Us, None)]
#[case(Region::Uk, None)]
#[case(Region::De, Some(ParsingError::FieldNotFound(Field::CategoryId)))]
#[case(Region::Fr, Some(ParsingError::FieldNotFound(Field::CategoryId)))]
fn category_id_without_rank_row(#[case] region: Region, #[case] error: Option<ParsingError>) {
    let html = Html::parse_document(&common::product_page(region));
    let registry = ParserRegistry::new().unwrap();
    let parser = registry.product(region).unwrap();

    assert_eq!(
        parser.parse_category_id(html.root_element()).into_parts(),
        ("unknown".to_string(), error)
    );
}

#[rstest]
#[case(Region::Uk, Field::Coupon)]
#[case(Region::De, Field::Brand)]
#[case(Region::De, Field::PackageWeight)]
#[case(Region::De, Field::PrimePrice)]
#[case(Region::Fr, Field::PrimePrice)]
#[case(Region::Fr, Field::Coupon)]
fn unsupported_fields_are_quiet(#[case] region: Region, #[case] field: Field) {
    let html = Html::parse_document(&common::product_page(region));
    let registry = ParserRegistry::new().unwrap();
    let parser = registry.product(region).unwrap();
    let doc = html.root_element();

    let extraction = match field {
        Field::Coupon => parser.parse_coupon(doc),
        Field::Brand => parser.parse_brand(doc),
        Field::PackageWeight => parser.parse_package_weight(doc),
        Field::PrimePrice => parser.parse_prime_price(doc),
        other => panic!("no product operation for {other}"),
    };
    assert_eq!(extraction.into_parts(), ("unknown".to_string(), None));
}

#[test]
fn category_id_keeps_first_digit_run_of_last_rank_link() {
    let html = Html::parse_document(
        r#"<html lang="en-us"><body><table><tbody><tr>
            <th>Best Sellers Rank</th>
            <td><span><span><a href="/gp/bestsellers/home-garden/1055398">Home</a></span>
                <span><a href="/gp/bestsellers/kitchen/289913/ref=pd_zg_hrsr_kitchen">Kitchen</a></span></span></td>
        </tr></tbody></table></body></html>"#,
    );
    let registry = ParserRegistry::new().unwrap();
    let parser = registry.product(Region::Us).unwrap();
    assert_eq!(
        parser.parse_category_id(html.root_element()).into_result().unwrap(),
        "289913"
    );
}

#[test]
fn category_id_without_digits_is_a_soft_miss() {
    let html = Html::parse_document(
        r#"<html lang="en-gb"><body><div>
            <span>Best Sellers Rank</span>
            <ul><li><span><a href="/gp/bestsellers/kitchen">Kitchen</a></span></li></ul>
        </div></body></html>"#,
    );
    let registry = ParserRegistry::new().unwrap();
    let parser = registry.product(Region::Uk).unwrap();
    assert_eq!(
        parser.parse_category_id(html.root_element()).into_parts(),
        ("unknown".to_string(), None)
    );
}

#[test]
fn merchant_rows_in_the_buy_box() {
    let html = Html::parse_document(
        r#"<html lang="en-us"><body><div id="tabular-buybox">
            <div><span>Ships from</span><span> Amazon.com </span></div>
            <div><span>Sold by</span><span> Acme Store </span></div>
        </div></body></html>"#,
    );
    let registry = ParserRegistry::new().unwrap();
    let parser = registry.product(Region::Us).unwrap();
    let doc = html.root_element();

    assert_eq!(parser.parse_dispatch_from(doc).into_value(), "Amazon.com");
    assert_eq!(parser.parse_sold_by(doc).into_value(), "Acme Store");
}

#[rstest]
#[case(Region::Us)]
#[case(Region::Uk)]
#[case(Region::De)]
#[case(Region::Fr)]
fn whole_record_is_assembled(#[case] region: Region) {
    let html = Html::parse_document(&common::product_page(region));
    let registry = ParserRegistry::new().unwrap();
    let record = registry.product(region).unwrap().extract_page(&html).unwrap();

    assert_eq!(record.region, region);
    assert_eq!(record.asin, "B0PROD0001");
    assert_eq!(record.has_cart, "true");
    assert_eq!(record.category_id, "unknown");
    assert!(record.specs.is_empty());

    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["img_url"], "https://m.media-amazon.com/images/I/blender.jpg");
}
