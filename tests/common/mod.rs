//! Inline page fixtures shared by the integration tests
#![allow(dead_code)]

use amz_page_parser::Region;

/// Site wording used by the fixtures of one region
pub struct Labels {
    pub lang: &'static str,
    pub star: &'static str,
    pub rating: &'static str,
    pub price: &'static str,
    pub dimensions: &'static str,
    pub weight: &'static str,
    pub about: &'static str,
    pub card_star: &'static str,
    pub card_price: &'static str,
    pub sponsored: &'static str,
    pub sales: &'static str,
    pub current_page: &'static str,
    pub next_page: &'static str,
    pub listing_next_page: &'static str,
    pub pagination: &'static str,
    pub board_heading: &'static str,
    pub board_next: &'static str,
    pub review_star: &'static str,
    pub review_marker: &'static str,
}

pub const fn labels(region: Region) -> Labels {
    match region {
        Region::Us => Labels {
            lang: "en-us",
            star: "4.6 out of 5 stars",
            rating: "12,345 ratings",
            price: "$89.99",
            dimensions: "Product Dimensions",
            weight: "Item Weight",
            about: "About this item",
            card_star: "4.5 out of 5 stars",
            card_price: "$19.99",
            sponsored: "Sponsored",
            sales: "50+ bought in past month",
            current_page: "Current page",
            next_page: "Go to next page",
            listing_next_page: "Go to next page",
            pagination: "1-48 of over 3,000 results for",
            board_heading: "Best Sellers in",
            board_next: "Next page",
            review_star: "5.0 out of 5 stars",
            review_marker: "Reviewed in the United States on",
        },
        Region::Uk => Labels {
            lang: "en-gb",
            star: "4.6 out of 5 stars",
            rating: "12,345 ratings",
            price: "£89.99",
            dimensions: "Product Dimensions",
            weight: "Item Weight",
            about: "About this item",
            card_star: "4.5 out of 5 stars",
            card_price: "£19.99",
            sponsored: "Sponsored",
            sales: "50+ bought in past month",
            current_page: "Current page",
            next_page: "Go to next page",
            listing_next_page: "Go to next page",
            pagination: "1-48 of over 3,000 results for",
            board_heading: "Best Sellers in",
            board_next: "Next page",
            review_star: "5.0 out of 5 stars",
            review_marker: "Reviewed in the United Kingdom on",
        },
        Region::De => Labels {
            lang: "de-de",
            star: "4,6 von 5 Sternen",
            rating: "12.345 Sternebewertungen",
            price: "89,99 €",
            dimensions: "Produktabmessungen",
            weight: "Artikelgewicht",
            about: "Info zu diesem Artikel",
            card_star: "4,5 von 5 Sternen",
            card_price: "19,99 €",
            sponsored: "Sponsored",
            sales: "50+ Mal im letzten Monat gekauft",
            current_page: "Aktuelle Seite",
            next_page: "Zur nächsten Seite",
            listing_next_page: "Zur nächsten Seite",
            pagination: "1-16 von 200 Ergebnissen oder Vorschlägen für",
            board_heading: "Bestseller in",
            board_next: "Nächste Seite",
            review_star: "5,0 von 5 Sternen",
            review_marker: "Bewertet in Deutschland am",
        },
        Region::Fr => Labels {
            lang: "fr-fr",
            star: "4,6 sur 5 étoiles",
            rating: "12.345 évaluations",
            price: "89,99 €",
            dimensions: "Dimensions du produit",
            weight: "Poids",
            about: "À propos de cet article",
            card_star: "4,5 sur 5 étoiles",
            card_price: "19,99 €",
            sponsored: "Sponsorisé",
            sales: "50+ achetés au cours du mois dernier",
            current_page: "Page actuelle",
            next_page: "Accéder à la page suivante",
            listing_next_page: "Accéder à la page suivante",
            pagination: "1-24 des plus de 10 000 résultats",
            board_heading: "Best Sellers in",
            board_next: "Next page",
            review_star: "5,0 sur 5 étoiles",
            review_marker: "Avis laissé en France le",
        },
    }
}

pub fn product_page(region: Region) -> String {
    let l = labels(region);
    format!(
        r#"<html lang="{lang}"><body>
        <div id="wayfinding-breadcrumbs_feature_div"><ul>
            <li><span><a href="/home"> Home </a></span></li>
            <li><span><a href="/kitchen"> Kitchen </a></span></li>
        </ul></div>
        <span id="productTitle">  Acme Pro Blender  </span>
        <div id="averageCustomerReviews" data-asin="B0PROD0001">
            <i><span>{star}</span></i>
            <a id="acrCustomerReviewLink"><span id="acrCustomerReviewText">{rating}</span></a>
        </div>
        <div id="imageBlock"><div><div class="imgTagWrapper"><img src="https://m.media-amazon.com/images/I/blender.jpg"></div></div></div>
        <div id="corePrice_feature_div" data-csa-c-asin="B0PROD0001"><div><span>{price}</span></div></div>
        <input id="deliveryBlockSelectMerchant" value="A1SELLER">
        <input id="add-to-cart-button" type="submit">
        <table><tbody>
            <tr><th> {dimensions} </th><td> 30 x 20 x 40 cm </td></tr>
            <tr><th> {weight} </th><td> 2.5 kg </td></tr>
        </tbody></table>
        <h1> {about} </h1>
        <ul><li><span>Fast</span></li><li><span>Quiet</span></li></ul>
        <div id="mir-layout-DELIVERY_BLOCK-slot-PRIMARY_DELIVERY_MESSAGE_LARGE"><span data-csa-c-delivery-time="Tuesday, May 7">x</span></div>
        </body></html>"#,
        lang = l.lang,
        star = l.star,
        rating = l.rating,
        price = l.price,
        dimensions = l.dimensions,
        weight = l.weight,
        about = l.about,
    )
}

fn result_card(asin: &str, l: &Labels) -> String {
    format!(
        r#"<div class="s-result-item" data-asin="{asin}" data-index="1" data-uuid="{asin}-uuid">
            <img class="s-image" src="https://m.media-amazon.com/images/I/{asin}.jpg">
            <h2><span class="a-size-medium a-text-normal">USB Hub {asin}</span></h2>
            <span aria-label="{star}"></span>
            <span class="a-price"><span>{price}</span></span>
            <span>{sales}</span>
            <i aria-label="Amazon Prime"></i>
            <span>{sponsored}</span>
        </div>"#,
        star = l.card_star,
        price = l.card_price,
        sales = l.sales,
        sponsored = l.sponsored,
    )
}

pub fn search_page(region: Region) -> String {
    let l = labels(region);
    format!(
        r#"<html lang="{lang}"><body>
        <input id="twotabsearchtextbox" value="usb hub">
        {first}{second}
        <span aria-label="{current}, 1">1</span>
        <a aria-label="{next}, 2" href="/s?k=usb+hub&amp;page=2">2</a>
        </body></html>"#,
        lang = l.lang,
        first = result_card("B0HUB00001", &l),
        second = result_card("B0HUB00002", &l),
        current = l.current_page,
        next = l.next_page,
    )
}

pub fn listing_page(region: Region) -> String {
    let l = labels(region);
    format!(
        r#"<html lang="{lang}"><body>
        <form><span id="nav-search-label-id">Electronics</span></form>
        <span>{pagination}</span>
        {card}
        <span class="s-pagination-item s-pagination-disabled">20</span>
        <span aria-label="Current page, 1">1</span>
        <a aria-label="{next}" href="/s?page=2">2</a>
        </body></html>"#,
        lang = l.lang,
        pagination = l.pagination,
        card = result_card("B0CAM00001", &l),
        next = l.listing_next_page,
    )
}

pub fn board_page(region: Region) -> String {
    let l = labels(region);
    format!(
        r##"<html lang="{lang}"><body><div id="a-page">
        <div><div><h1>{heading} Electronics</h1></div></div>
        <div data-acp-params="tok=abc" data-acp-path="/acp/grid/"></div>
        <div data-client-recs-list="[]" data-reftag="zg_bs" data-index-offset="0">
            <div id="gridItemRoot"><div>
                <div><span class="zg-bdg-text">#1</span></div>
                <div data-asin="B0BOARD001">
                    <a href="/dp/B0BOARD001"><span><div>Echo Dot</div></span></a>
                    <div><a title="4.7 out of 5 stars" href="/r"><span>152,034</span></a></div>
                    <div><span class="p13n-sc-price">$49.99</span></div>
                </div>
            </div></div>
        </div>
        <ul><li><a href="/zgbs/pg=2">{next}</a></li></ul>
        </div></body></html>"##,
        lang = l.lang,
        heading = l.board_heading,
        next = l.board_next,
    )
}

fn review_body(l: &Labels) -> String {
    format!(
        r#"<div id="customer_review-R1">
            <div><a href="/gp/profile/amzn1.account.R1"><div><span class="a-profile-name">Jane D.</span></div></a></div>
            <div><i><span>{star}</span></i><a class="review-title" review-title href="/r/R1"><span>Works great</span></a></div>
            <span class="review-date" data-hook="review-date">{marker} 3 March 2024</span>
            <div><a class="a-link-normal" href="/dp/B0HUB00001"><span>Colour: Black</span></a></div>
            <div class="review-text-content" review-text-content><span> Solid. </span></div>
        </div>"#,
        star = l.review_star,
        marker = l.review_marker,
    )
}

pub fn review_page(region: Region) -> String {
    let l = labels(region);
    let body = review_body(&l);
    let list = match region {
        Region::Us => format!(r#"<div id="cm-cr-dp-review-list"><div id="R1">{body}</div></div>"#),
        Region::De => format!(r#"<li data-hook="review" id="R1">{body}</li>"#),
        Region::Uk | Region::Fr => format!(r#"<div review id="R1">{body}</div>"#),
    };
    format!(r#"<html lang="{}"><body>{list}</body></html>"#, l.lang)
}
