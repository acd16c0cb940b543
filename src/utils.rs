//! Text normalization helpers shared by every extractor
//!
//! All functions here are pure and total: they never fail, they only reshape
//! the text they are given. Locale handling is limited to the two number
//! conventions the supported sites use (`1,234.5` and `1.234,5`).

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::Html;
use url::Url;

use crate::domain::region::Region;

/// Currency markers checked in order; the first one present is removed.
const MONEY_SYMBOLS: [&str; 5] = ["$", "€", "£", "￥", "EUR"];

static DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+").unwrap());

/// Sentinel returned when a merchant cannot be derived from a link.
pub const UNKNOWN: &str = "unknown";

/// Normalize `1,234+` / `3k` style magnitudes.
///
/// `k`/`K` become `000`, thousands separators and a trailing `+` are dropped.
/// A decimal point is left alone, so `"3.5k"` yields `"3.5000"`.
pub fn format_number(s: &str) -> String {
    s.replace(['k', 'K'], "000").replace([',', '+'], "")
}

/// Normalize `1.234,56` style numbers into `1234.56`.
pub fn format_number_euro(s: &str) -> String {
    s.replace('.', "").replace(',', ".").replace(['k', 'K'], "000")
}

/// Replace quote characters with spaces and trim the result.
pub fn format_title(s: &str) -> String {
    s.replace(['\'', '"'], " ").trim().to_string()
}

/// Strip the first currency marker found (checked as `$ € £ ￥ EUR`) and trim.
pub fn drop_money_sym(s: &str) -> String {
    MONEY_SYMBOLS
        .iter()
        .find(|sym| s.contains(*sym))
        .map_or_else(|| s.to_string(), |sym| s.replace(sym, ""))
        .trim()
        .to_string()
}

/// Leading numeric magnitude of a phrase like `"4.5 out of 5 stars"`.
///
/// Takes the first space separated token and cuts it right after its last
/// digit. Tokens without any digit come back unchanged.
pub fn find_number_head(s: &str) -> String {
    let head = s.split(' ').next().unwrap_or_default();
    truncate_after_last_digit(head).unwrap_or(head).to_string()
}

/// Integer count out of strings like `"1,234 ratings"`.
pub fn format_rating(s: &str) -> String {
    match truncate_after_last_digit(s) {
        Some(head) => head.replace([',', '.'], ""),
        None => s.to_string(),
    }
}

fn truncate_after_last_digit(s: &str) -> Option<&str> {
    s.char_indices()
        .rev()
        .find(|(_, c)| c.is_ascii_digit())
        .map(|(idx, c)| &s[..idx + c.len_utf8()])
}

/// Seller identifier carried by a merchant link.
///
/// Returns the first `seller` query value, `"amazon"` for links that only carry
/// a `nodeId`, and `"unknown"` otherwise (including unparsable links).
pub fn formal_merchant(s: &str) -> String {
    let raw = unescape_html(s);
    let parsed = Url::parse(&raw).or_else(|_| {
        Url::parse(Region::Us.site_prefix()).and_then(|base| base.join(&raw))
    });
    let Ok(url) = parsed else {
        return UNKNOWN.to_string();
    };

    let mut has_node_id = false;
    for (key, value) in url.query_pairs() {
        match key.as_ref() {
            "seller" => return value.into_owned(),
            "nodeId" => has_node_id = true,
            _ => {}
        }
    }

    if has_node_id { "amazon".to_string() } else { UNKNOWN.to_string() }
}

/// Trim every character of `cutset` from both ends of `s`.
pub fn trim_chars(s: &str, cutset: &str) -> String {
    s.trim_matches(|c: char| cutset.contains(c)).to_string()
}

/// First run of decimal digits in `s`.
pub fn first_digits(s: &str) -> Option<&str> {
    DIGIT_RUN.find(s).map(|m| m.as_str())
}

/// Decode HTML character references (`&amp;` and friends).
fn unescape_html(s: &str) -> String {
    if !s.contains('&') {
        return s.to_string();
    }
    let fragment = Html::parse_fragment(s);
    fragment.root_element().text().collect()
}
