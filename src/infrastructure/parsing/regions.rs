//! Default rule tables, one module per regional site
//!
//! The four sites share most of their markup. The builders below capture
//! the shared shapes (label/value rows, merchant blocks, listing cards...)
//! and each region module fills in its own labels and quirks.

mod de;
mod fr;
mod uk;
mod us;

use super::config::{CustomerReviewsSpec, RegionSpec, SpecsSpec, VariantSource};
use super::field::{FieldSpec, OnEmpty, OnMissing, Transform};
use super::query::Query;
use crate::domain::field::Field;
use crate::domain::region::Region;

pub fn spec_for(region: Region) -> RegionSpec {
    match region {
        Region::Us => us::spec(),
        Region::Uk => uk::spec(),
        Region::De => de::spec(),
        Region::Fr => fr::spec(),
    }
}

/// How a star/rating number is written on the site.
#[derive(Clone, Copy)]
enum Numbers {
    /// `4.5`, `1,234`
    Dot,
    /// `4,5`, `1.234`
    Comma,
}

impl Numbers {
    const fn format(self) -> Transform {
        match self {
            Self::Dot => Transform::FormatNumber,
            Self::Comma => Transform::FormatNumberEuro,
        }
    }
}

fn text_field(field: Field, queries: impl IntoIterator<Item = Query>) -> FieldSpec {
    FieldSpec::new(field).candidates(queries).transform(Transform::Trim)
}

// Product detail page

fn product_asin() -> FieldSpec {
    FieldSpec::new(Field::Asin)
        .candidate(
            Query::find("div[id^='corePrice'][data-csa-c-asin]:not([data-csa-c-asin=''])")
                .attr("data-csa-c-asin"),
        )
        .candidate(Query::find("div#averageCustomerReviews[data-asin]").attr("data-asin"))
        .default_value("")
}

/// Star text such as `4.5 out of 5 stars` or `4,5 von 5 Sternen`.
fn star_text(label: &str, numbers: Numbers) -> FieldSpec {
    let spec = FieldSpec::new(Field::Star)
        .candidate(Query::find("span").has_text(label).text())
        .transform(Transform::Trim);
    match numbers {
        Numbers::Dot => spec.transforms([Transform::NumberHead, Transform::FormatNumber]),
        Numbers::Comma => spec.transforms([Transform::FirstWord, Transform::FormatNumberEuro]),
    }
}

fn rating_link() -> Query {
    Query::find("a#acrCustomerReviewLink > span#acrCustomerReviewText").text()
}

fn product_rating(numbers: Numbers, extra: Option<Query>) -> FieldSpec {
    let spec = FieldSpec::new(Field::Rating)
        .candidate(rating_link())
        .candidates(extra)
        .transforms([Transform::Trim, Transform::NumberHead, numbers.format()]);
    match numbers {
        Numbers::Dot => spec,
        Numbers::Comma => spec.transform(Transform::Trim),
    }
}

fn product_title() -> FieldSpec {
    FieldSpec::new(Field::Title)
        .candidate(Query::find("span#productTitle").text())
        .transform(Transform::FormatTitle)
}

fn product_img() -> FieldSpec {
    FieldSpec::new(Field::ImgUrl)
        .candidate(Query::find("div#imageBlock div[class='imgTagWrapper'] > img").attr("src"))
        .on_empty(OnEmpty::Fail)
}

fn core_price() -> Query {
    Query::find("div[id^='corePrice'][data-csa-c-asin] > div > span").text()
}

fn product_price(queries: impl IntoIterator<Item = Query>) -> FieldSpec {
    FieldSpec::new(Field::Price)
        .candidates(queries)
        .transforms([Transform::Trim, Transform::FirstNonEmptyWord])
}

/// `<div><span>Sold by</span><span>value</span></div>`
fn merchant_inline(label: &str) -> Query {
    Query::find("div > span").has_text(label).following_sibling("span").text()
}

/// Label and value in sibling rows of the buy box; `link` reads the value from an anchor.
fn merchant_block(label: &str, link: bool) -> Query {
    let query = Query::find("div > span")
        .has_text(label)
        .parent()
        .parent()
        .following_sibling("div")
        .child("div")
        .child("span");
    if link { query.child("a").text() } else { query.text() }
}

fn dispatch_from(label: &str) -> FieldSpec {
    text_field(
        Field::DispatchFrom,
        [merchant_inline(label), merchant_block(label, false)],
    )
}

/// Row of the technical details table.
fn table_row(th: &str, label: &str) -> Query {
    Query::find(th).has_text(label).following_sibling("td").text()
}

/// Row of the detail bullets list.
fn bullet_row(label: &str) -> Query {
    Query::find("span").has_text(label).following_sibling("span").text()
}

/// Value found either in the details table or in the detail bullets.
fn detail(field: Field, th: &str, label: &str) -> FieldSpec {
    text_field(field, [table_row(th, label), bullet_row(label)])
}

fn seller_id() -> FieldSpec {
    FieldSpec::new(Field::SellerId)
        .candidate(Query::find("input#deliveryBlockSelectMerchant").attr("value"))
        .on_empty(OnEmpty::Fail)
}

/// Best sellers rank link, reduced to its first digit run.
fn category_id(queries: impl IntoIterator<Item = Query>) -> FieldSpec {
    FieldSpec::new(Field::CategoryId)
        .candidates(queries)
        .transforms([Transform::NonEmpty, Transform::Digits])
}

fn rank_table_link(label: &str) -> Query {
    Query::find("tbody > tr > th")
        .has_text(label)
        .following_sibling("td")
        .child("span")
        .child("span")
        .child("a")
        .attr("href")
        .last()
}

fn rank_bullet_link(label: &str) -> Query {
    Query::find("span")
        .has_text(label)
        .parent()
        .child("ul")
        .child("li")
        .child("span")
        .child("a")
        .attr("href")
        .last()
}

fn has_cart(css: &str) -> FieldSpec {
    FieldSpec::new(Field::HasCart)
        .candidate(Query::find(css))
        .transform(Transform::Literal("true".into()))
        .default_value("false")
}

/// `<label>Color:</label><span>value</span>`
fn labelled(label: &str) -> Query {
    Query::find("label").has_text(label).following_sibling("span").text()
}

/// `<tr><td><span>Size</span></td><td><span>value</span></td></tr>`
fn table_cell(label: &str) -> Query {
    Query::find("span")
        .has_text(label)
        .parent()
        .following_sibling("td")
        .child("span")
        .text()
}

fn variation_json() -> SpecsSpec {
    SpecsSpec::VariationJson {
        key: "asinVariationValues".into(),
    }
}

fn variant_source(kind: &str) -> VariantSource {
    VariantSource {
        dropdown: Query::find(&format!("select#native_dropdown_selected_{kind}_name")).single(),
        options: Query::find(&format!("option[id*='native_{kind}_name']")).attr("value"),
        swatches: Query::find(&format!("li[id*='{kind}_name']")).attr("data-csa-c-item-id"),
    }
}

fn variants() -> SpecsSpec {
    SpecsSpec::Variants {
        color: variant_source("color"),
        size: variant_source("size"),
    }
}

fn description(heading: &str) -> FieldSpec {
    FieldSpec::new(Field::Description)
        .candidate(
            Query::find("h1")
                .has_text(heading)
                .next_sibling("ul")
                .child("li")
                .child("span")
                .text()
                .numbered(),
        )
        .on_empty(OnEmpty::Fail)
}

fn delivery(field: Field, slot: &str) -> FieldSpec {
    FieldSpec::new(field)
        .candidate(
            Query::find(&format!(
                "div#mir-layout-DELIVERY_BLOCK-slot-{slot}_DELIVERY_MESSAGE_LARGE > span"
            ))
            .attr("data-csa-c-delivery-time"),
        )
        .on_empty(OnEmpty::Fail)
}

fn category_hierarchy() -> FieldSpec {
    text_field(
        Field::CategoryHierarchy,
        [Query::find("div#wayfinding-breadcrumbs_feature_div li > span > a").text()],
    )
}

fn customer_reviews() -> CustomerReviewsSpec {
    CustomerReviewsSpec {
        rows: Query::find("li[class='a-align-center a-spacing-none']"),
        left: Query::find("span[class='a-list-item'] div[class*='a-text-left']")
            .text()
            .single(),
        right: Query::find("span[class='a-list-item'] div[class*='a-text-right']")
            .text()
            .single(),
    }
}

// Search and browse listings

fn result_cards() -> Query {
    Query::find("div[class][data-asin]:not([data-asin=''])[data-index][data-uuid]")
}

fn current_page(label: &str) -> FieldSpec {
    text_field(
        Field::CurrentPage,
        [Query::find(&format!("span[aria-label*='{label}']")).text()],
    )
}

fn next_page_link(label: &str) -> FieldSpec {
    FieldSpec::new(Field::NextPage)
        .candidate(Query::find(&format!("a[aria-label*='{label}']")).single().attr("href"))
}

fn search_keyword() -> FieldSpec {
    FieldSpec::new(Field::Keyword)
        .candidate(Query::find("input#twotabsearchtextbox").attr("value"))
        .on_empty(OnEmpty::Fail)
}

fn card_asin() -> FieldSpec {
    FieldSpec::new(Field::Asin).candidate(Query::scope().attr("data-asin"))
}

fn card_price(transforms: impl IntoIterator<Item = Transform>) -> FieldSpec {
    FieldSpec::new(Field::Price)
        .candidate(Query::find("span[class='a-price'] > span").text())
        .transforms(transforms)
        .on_empty(OnEmpty::Default)
}

/// Star rating carried by an `aria-label` such as `4.5 out of 5 stars`.
fn card_star(label: &str, numbers: Numbers) -> FieldSpec {
    FieldSpec::new(Field::Star)
        .candidate(Query::find(&format!("span[aria-label*='{label}']")).attr("aria-label"))
        .transforms([Transform::FirstWord, numbers.format()])
        .on_empty(OnEmpty::Default)
}

fn card_rating(query: Query, default: &str) -> FieldSpec {
    FieldSpec::new(Field::Rating)
        .candidate(query)
        .transform(Transform::FormatRating)
        .default_value(default)
}

fn sponsored(label: &str) -> FieldSpec {
    FieldSpec::new(Field::Sponsored)
        .candidate(Query::find("span").text_is(label))
        .transform(Transform::Literal("1".into()))
        .default_value("0")
}

fn prime() -> FieldSpec {
    FieldSpec::new(Field::Prime)
        .candidate(Query::find("i[aria-label='Amazon Prime']"))
        .transform(Transform::Literal("true".into()))
        .default_value("false")
}

fn sales(label: &str) -> FieldSpec {
    FieldSpec::new(Field::Sales)
        .candidate(Query::find("span").has_text(label).text())
        .transforms([Transform::TrimChars(label.into()), Transform::FormatNumber])
}

fn card_img() -> FieldSpec {
    FieldSpec::new(Field::ImgUrl).candidate(Query::find("img[class*='image']").attr("src"))
}

fn card_title() -> FieldSpec {
    FieldSpec::new(Field::Title)
        .candidate(Query::find("span[class*='text-normal']").text())
        .transform(Transform::FormatTitle)
}

fn max_page() -> FieldSpec {
    text_field(
        Field::MaxPage,
        [
            Query::find("span[class='s-pagination-item s-pagination-disabled']").text(),
            Query::find("a[class='s-pagination-item s-pagination-button']")
                .text()
                .last(),
        ],
    )
}

fn content_id() -> FieldSpec {
    FieldSpec::new(Field::ContentId)
        .candidate(Query::find("div#reviewsRefinements span > li").attr("id").last())
        .transforms([Transform::NonEmpty, Transform::After("p_72/".into())])
}

fn content_link() -> FieldSpec {
    FieldSpec::new(Field::ContentLink).candidate(
        Query::find("div#reviewsRefinements ul > span > span > li > span > a")
            .attr("href")
            .single(),
    )
}

fn pagination(label: &str) -> FieldSpec {
    FieldSpec::new(Field::Pagination)
        .candidate(Query::find("span").has_text(label).text().single())
        .on_missing(OnMissing::Default)
}

fn category_name() -> FieldSpec {
    FieldSpec::new(Field::CategoryName)
        .candidate(Query::find("form span#nav-search-label-id").deep_text().single())
        .on_missing(OnMissing::Default)
}

// Best seller and new release boards

fn board_grid() -> Query {
    Query::find("div#gridItemRoot")
}

fn recs_container() -> Query {
    Query::find("html > body > div#a-page div[data-client-recs-list][data-reftag]")
}

fn recs_attr(field: Field, attr: &str) -> FieldSpec {
    FieldSpec::new(field).candidate(recs_container().attr(attr))
}

fn acp_attr(field: Field, attr: &str) -> FieldSpec {
    FieldSpec::new(field)
        .candidate(Query::find("div[data-acp-params][data-acp-path]").single().attr(attr))
}

fn board_next_page(label: &str) -> FieldSpec {
    FieldSpec::new(Field::NextPage).candidate(
        Query::find("li > a[href]:not([href=''])")
            .has_text(label)
            .single()
            .attr("href"),
    )
}

fn board_heading(field: Field, label: &str) -> FieldSpec {
    FieldSpec::new(field)
        .candidate(Query::find("div > div > h1").has_text(label).text())
        .on_empty(OnEmpty::Fail)
}

fn board_asin() -> FieldSpec {
    FieldSpec::new(Field::Asin).candidate(Query::find("div[data-asin]").single().attr("data-asin"))
}

fn board_price() -> FieldSpec {
    let prices = || Query::scope().child("div").descendant("span[class*='price']");
    text_field(
        Field::Price,
        [prices().text().single(), prices().child("span").text().single()],
    )
}

fn board_star() -> FieldSpec {
    FieldSpec::new(Field::Star)
        .candidate(Query::find("div > a[title]").attr("title"))
        .transforms([Transform::Trim, Transform::NumberHead])
}

fn board_rating() -> FieldSpec {
    FieldSpec::new(Field::Rating).candidate(Query::find("div > a[title] > span").text())
}

fn board_title() -> FieldSpec {
    FieldSpec::new(Field::Title).candidate(Query::find("a > span > div").text())
}

fn board_rank() -> FieldSpec {
    FieldSpec::new(Field::Rank)
        .candidate(Query::find("div > span").text())
        .transform(Transform::Remove("#".into()))
}

// Reviews

fn reviewer() -> FieldSpec {
    text_field(
        Field::Reviewer,
        [Query::find("div[id*='customer_review'] > div > a > div > span").text()],
    )
}

fn reviewer_link() -> FieldSpec {
    FieldSpec::new(Field::ReviewerLink)
        .candidate(Query::find("div[id*='customer_review'] > div > a").attr("href"))
        .on_empty(OnEmpty::Fail)
}

fn review_title(css: &str) -> FieldSpec {
    text_field(Field::Title, [Query::find(css).text()])
}

fn review_date(css: &str, marker: &str) -> FieldSpec {
    FieldSpec::new(Field::ReviewDate)
        .candidate(Query::find(css).text())
        .transforms([Transform::Trim, Transform::After(marker.into()), Transform::Trim])
}

fn purchase() -> FieldSpec {
    text_field(
        Field::Purchase,
        [Query::find("div > a[class*='a-link-normal'] > span").text()],
    )
}

fn review_content(css: &str) -> FieldSpec {
    text_field(Field::ReviewContent, [Query::find(css).text()])
}
