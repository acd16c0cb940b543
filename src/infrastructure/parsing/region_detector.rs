//! Region detection from the document language tag

use once_cell::sync::Lazy;
use scraper::Html;
use tracing::debug;

use super::query::{CompiledQuery, Query};
use super::{ParsingError, ParsingResult};
use crate::domain::region::Region;

static LANG: Lazy<ParsingResult<CompiledQuery>> =
    Lazy::new(|| Query::scope().attr("lang").single().compile());

/// Raw `lang` attribute of the root `<html>` element.
pub fn parse_region(html: &Html) -> ParsingResult<String> {
    let query = LANG.as_ref().map_err(Clone::clone)?;
    let hits = query
        .find(html.root_element())
        .map_err(|_| ParsingError::LanguageNotFound)?;

    match hits.first().map(|hit| hit.value()) {
        Some(lang) if !lang.is_empty() => Ok(lang.into_owned()),
        _ => Err(ParsingError::LanguageNotFound),
    }
}

/// Region whose sites declare the document's language tag.
pub fn detect_region(html: &Html) -> ParsingResult<Region> {
    let lang = parse_region(html)?;
    let region = Region::from_lang_tag(&lang).ok_or(ParsingError::UnsupportedRegion { lang })?;
    debug!("Detected region {}", region);
    Ok(region)
}
