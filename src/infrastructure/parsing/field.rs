//! Field rules
//!
//! A [`FieldSpec`] describes how one field is read on one regional site:
//! ordered candidate queries, the text transforms applied to the winning hit
//! and what to report when nothing (or only empty text) is found. Specs are
//! serializable so a whole region table can live in a JSON file.
//!
//! [`FieldRule`] is the compiled form used at extraction time. Its result is
//! an [`Extraction`]: the value, which is the field's sentinel when extraction
//! failed, together with the error, if any.

use std::borrow::Cow;

use scraper::ElementRef;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::error::{ParsingError, ParsingResult};
use super::query::{CompiledQuery, Hit, Pick, Query};
use crate::domain::field::Field;
use crate::utils::{self, UNKNOWN};

/// Post-processing applied, in order, to the text of the winning hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transform {
    Trim,
    FormatTitle,
    DropMoneySym,
    FormatNumber,
    FormatNumberEuro,
    NumberHead,
    FormatRating,
    /// Text before the first space
    FirstWord,
    /// First space-separated token, or the second one if the first is empty
    FirstNonEmptyWord,
    /// Fail the field when the text is empty at this point
    NonEmpty,
    /// Trim any of the given characters from both ends
    TrimChars(String),
    /// Text after the marker, trimmed; fails the field when the marker is absent
    After(String),
    Remove(String),
    /// First run of digits; none found is a soft miss
    Digits,
    /// Seller id carried by a merchant link
    Merchant,
    /// Replace the text with a fixed value (presence flags)
    Literal(String),
}

enum Miss {
    /// Give up quietly with the sentinel value
    Soft,
    /// Report the field as not found
    Hard,
}

impl Transform {
    fn apply(&self, input: String) -> Result<String, Miss> {
        let output = match self {
            Self::Trim => input.trim().to_string(),
            Self::FormatTitle => utils::format_title(&input),
            Self::DropMoneySym => utils::drop_money_sym(&input),
            Self::FormatNumber => utils::format_number(&input),
            Self::FormatNumberEuro => utils::format_number_euro(&input),
            Self::NumberHead => utils::find_number_head(&input),
            Self::FormatRating => utils::format_rating(&input),
            Self::FirstWord => input.split(' ').next().unwrap_or_default().to_string(),
            Self::FirstNonEmptyWord => {
                let mut words = input.split(' ');
                match (words.next(), words.next()) {
                    (Some(first), _) if !first.is_empty() => first.to_string(),
                    (_, Some(second)) => second.to_string(),
                    _ => String::new(),
                }
            }
            Self::NonEmpty => {
                if input.is_empty() {
                    return Err(Miss::Hard);
                }
                input
            }
            Self::TrimChars(cutset) => utils::trim_chars(&input, cutset),
            Self::After(marker) => match input.split_once(marker.as_str()) {
                Some((_, rest)) => rest.trim().to_string(),
                None => return Err(Miss::Hard),
            },
            Self::Remove(pattern) => input.replace(pattern.as_str(), ""),
            Self::Digits => match utils::first_digits(&input) {
                Some(digits) => digits.to_string(),
                None => return Err(Miss::Soft),
            },
            Self::Merchant => utils::formal_merchant(&input),
            Self::Literal(value) => value.clone(),
        };
        Ok(output)
    }
}

/// What to do when the final text is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnEmpty {
    /// Return the empty string as a valid value
    #[default]
    Keep,
    /// Return the sentinel without an error
    Default,
    /// Return the sentinel with the field's not-found error
    Fail,
}

/// What to do when no candidate matched at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnMissing {
    #[default]
    Fail,
    Default,
}

fn default_sentinel() -> String {
    UNKNOWN.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub field: Field,
    #[serde(default)]
    pub candidates: Vec<Query>,
    #[serde(default)]
    pub transforms: Vec<Transform>,
    #[serde(default)]
    pub on_empty: OnEmpty,
    #[serde(default)]
    pub on_missing: OnMissing,
    #[serde(default = "default_sentinel")]
    pub default: String,
}

impl FieldSpec {
    pub fn new(field: Field) -> Self {
        Self {
            field,
            candidates: Vec::new(),
            transforms: Vec::new(),
            on_empty: OnEmpty::Keep,
            on_missing: OnMissing::Fail,
            default: default_sentinel(),
        }
    }

    /// A field the site variant does not expose; it always yields the sentinel.
    pub fn unsupported(field: Field) -> Self {
        Self::new(field)
    }

    pub fn candidate(mut self, query: Query) -> Self {
        self.candidates.push(query);
        self
    }

    pub fn candidates(mut self, queries: impl IntoIterator<Item = Query>) -> Self {
        self.candidates.extend(queries);
        self
    }

    pub fn transform(mut self, transform: Transform) -> Self {
        self.transforms.push(transform);
        self
    }

    pub fn transforms(mut self, transforms: impl IntoIterator<Item = Transform>) -> Self {
        self.transforms.extend(transforms);
        self
    }

    pub const fn on_empty(mut self, policy: OnEmpty) -> Self {
        self.on_empty = policy;
        self
    }

    pub const fn on_missing(mut self, policy: OnMissing) -> Self {
        self.on_missing = policy;
        self
    }

    pub fn default_value(mut self, value: &str) -> Self {
        self.default = value.to_string();
        self
    }

    pub fn compile(&self) -> ParsingResult<FieldRule> {
        Ok(FieldRule {
            field: self.field,
            candidates: self
                .candidates
                .iter()
                .map(Query::compile)
                .collect::<ParsingResult<_>>()?,
            transforms: self.transforms.clone(),
            on_empty: self.on_empty,
            on_missing: self.on_missing,
            default: self.default.clone(),
        })
    }
}

/// A field value together with the error that produced it, if any.
///
/// On failure `value` holds the field's sentinel (`"unknown"`, `"0"`,
/// `"false"`, an empty list...), so callers that only want best-effort data
/// can ignore the error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction<T> {
    value: T,
    error: Option<ParsingError>,
}

impl<T> Extraction<T> {
    pub const fn found(value: T) -> Self {
        Self { value, error: None }
    }

    pub const fn failed(value: T, error: ParsingError) -> Self {
        Self {
            value,
            error: Some(error),
        }
    }

    pub const fn value(&self) -> &T {
        &self.value
    }

    pub const fn error(&self) -> Option<&ParsingError> {
        self.error.as_ref()
    }

    pub const fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    pub fn into_value(self) -> T {
        self.value
    }

    pub fn into_parts(self) -> (T, Option<ParsingError>) {
        (self.value, self.error)
    }

    pub fn into_result(self) -> ParsingResult<T> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.value),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Extraction<U> {
        Extraction {
            value: f(self.value),
            error: self.error,
        }
    }
}

/// Compiled [`FieldSpec`].
#[derive(Debug, Clone)]
pub struct FieldRule {
    field: Field,
    candidates: Vec<CompiledQuery>,
    transforms: Vec<Transform>,
    on_empty: OnEmpty,
    on_missing: OnMissing,
    default: String,
}

impl FieldRule {
    pub const fn field(&self) -> Field {
        self.field
    }

    pub fn is_supported(&self) -> bool {
        !self.candidates.is_empty()
    }

    pub fn sentinel(&self) -> &str {
        &self.default
    }

    /// Read a single value from `scope`.
    pub fn extract(&self, scope: ElementRef<'_>) -> Extraction<String> {
        if !self.is_supported() {
            return Extraction::found(self.default.clone());
        }

        let (query, hits) = match self.first_match(scope) {
            Ok(found) => found,
            Err(error) => return self.fail(error),
        };

        let raw = match query.pick() {
            Pick::First => hits.first().map(Hit::value).unwrap_or_default(),
            Pick::Last => hits.last().map(Hit::value).unwrap_or_default(),
            Pick::Numbered => Cow::Owned(
                hits.iter()
                    .enumerate()
                    .map(|(i, hit)| format!("{}. {} ", i + 1, hit.value()))
                    .collect(),
            ),
        };

        self.finish(raw.into_owned())
    }

    /// Read every hit of the first matching candidate, transformed.
    ///
    /// Hits whose transforms miss or leave nothing are skipped.
    pub fn extract_all(&self, scope: ElementRef<'_>) -> Extraction<Vec<String>> {
        if !self.is_supported() {
            return Extraction::found(Vec::new());
        }

        match self.first_match(scope) {
            Ok((_, hits)) => Extraction::found(
                hits.iter()
                    .filter_map(|hit| self.apply_transforms(hit.value().into_owned()).ok())
                    .filter(|value| !value.is_empty())
                    .collect(),
            ),
            Err(error) => self.fail(error).map(|_| Vec::new()),
        }
    }

    fn first_match<'a>(
        &self,
        scope: ElementRef<'a>,
    ) -> ParsingResult<(&CompiledQuery, Vec<Hit<'a>>)> {
        for query in &self.candidates {
            match query.find(scope) {
                Ok(hits) => return Ok((query, hits)),
                Err(ParsingError::NoMatch { .. }) => {
                    debug!(field = %self.field, query = query.expr(), "candidate did not match");
                }
                Err(error) => {
                    warn!(field = %self.field, %error, "candidate rejected");
                    return Err(error);
                }
            }
        }
        Err(ParsingError::FieldNotFound(self.field))
    }

    fn apply_transforms(&self, raw: String) -> Result<String, Miss> {
        self.transforms
            .iter()
            .try_fold(raw, |value, transform| transform.apply(value))
    }

    fn finish(&self, raw: String) -> Extraction<String> {
        let value = match self.apply_transforms(raw) {
            Ok(value) => value,
            Err(Miss::Soft) => return Extraction::found(self.default.clone()),
            Err(Miss::Hard) => return self.not_found(),
        };

        if !value.is_empty() {
            return Extraction::found(value);
        }
        match self.on_empty {
            OnEmpty::Keep => Extraction::found(value),
            OnEmpty::Default => Extraction::found(self.default.clone()),
            OnEmpty::Fail => self.not_found(),
        }
    }

    fn fail(&self, error: ParsingError) -> Extraction<String> {
        let missing = matches!(error, ParsingError::FieldNotFound(_));
        if missing && self.on_missing == OnMissing::Default {
            return Extraction::found(self.default.clone());
        }
        Extraction::failed(self.default.clone(), error)
    }

    fn not_found(&self) -> Extraction<String> {
        Extraction::failed(self.default.clone(), ParsingError::FieldNotFound(self.field))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    const PAGE: &str = r#"<html><body>
        <div id="corePrice_feature_div" data-csa-c-asin="B0TEST1234">
            <div><span>  $19.99 </span></div>
        </div>
        <span class="price-empty"><span>   </span></span>
        <a id="rank" href="/gp/bestsellers/kitchen/289913/ref=zg">Kitchen</a>
        <a id="plain" href="/gp/bestsellers/kitchen">Kitchen</a>
        <span class="date">Reviewed in the United States on May 1, 2024</span>
        <ul id="crumbs"><li><span><a> Home </a></span></li><li><span><a>Kitchen </a></span></li></ul>
        <div class="dup"></div><div class="dup"></div>
    </body></html>"#;

    fn doc() -> Html {
        Html::parse_document(PAGE)
    }

    fn extract(spec: &FieldSpec) -> Extraction<String> {
        let doc = doc();
        spec.compile().unwrap().extract(doc.root_element())
    }

    #[test]
    fn test_candidates_fall_through_to_first_match() {
        let spec = FieldSpec::new(Field::Price)
            .candidate(Query::find("span[data-a-color='price'] > span").text())
            .candidate(Query::find("div[id^='corePrice'][data-csa-c-asin] > div > span").text())
            .transforms([Transform::Trim, Transform::FirstNonEmptyWord]);

        assert_eq!(extract(&spec), Extraction::found("$19.99".to_string()));
    }

    #[test]
    fn test_missing_field_reports_its_catalogue_error() {
        let spec = FieldSpec::new(Field::Brand).candidate(Query::find("#brand").text());
        let result = extract(&spec);
        assert_eq!(result.value(), "unknown");
        assert_eq!(result.error(), Some(&ParsingError::FieldNotFound(Field::Brand)));

        let soft = spec.on_missing(OnMissing::Default);
        assert_eq!(extract(&soft), Extraction::found("unknown".to_string()));
    }

    #[test]
    fn test_empty_text_policies() {
        let base = FieldSpec::new(Field::Price)
            .candidate(Query::find("span.price-empty > span").text())
            .transform(Transform::Trim);

        assert_eq!(extract(&base), Extraction::found(String::new()));
        assert_eq!(
            extract(&base.clone().on_empty(OnEmpty::Default)),
            Extraction::found("unknown".to_string())
        );
        assert_eq!(
            extract(&base.on_empty(OnEmpty::Fail)).into_result(),
            Err(ParsingError::FieldNotFound(Field::Price))
        );
    }

    #[test]
    fn test_digits_soft_miss_and_last_pick() {
        let spec = FieldSpec::new(Field::CategoryId)
            .candidate(Query::find("a[href*='bestsellers']").attr("href").last())
            .transforms([Transform::NonEmpty, Transform::Digits]);
        // last hit has no digits: sentinel without error
        assert_eq!(extract(&spec), Extraction::found("unknown".to_string()));

        let first = FieldSpec::new(Field::CategoryId)
            .candidate(Query::find("a[href*='bestsellers']").attr("href"))
            .transform(Transform::Digits);
        assert_eq!(extract(&first), Extraction::found("289913".to_string()));
    }

    #[test]
    fn test_after_marker_missing_is_not_found() {
        let found = FieldSpec::new(Field::ReviewDate)
            .candidate(Query::find("span.date").text())
            .transform(Transform::After("Reviewed in the United States on".into()));
        assert_eq!(extract(&found), Extraction::found("May 1, 2024".to_string()));

        let missing = FieldSpec::new(Field::ReviewDate)
            .candidate(Query::find("span.date").text())
            .transform(Transform::After("Bewertet in Deutschland am".into()));
        assert_eq!(
            extract(&missing).into_parts(),
            ("unknown".to_string(), Some(ParsingError::FieldNotFound(Field::ReviewDate)))
        );
    }

    #[test]
    fn test_ambiguous_candidate_is_a_hard_failure() {
        let spec = FieldSpec::new(Field::AcpParam)
            .candidate(Query::find("div.dup").single())
            .candidate(Query::find("body"));
        let result = extract(&spec);
        assert!(matches!(result.error(), Some(ParsingError::AmbiguousMatch { count: 2, .. })));
        assert_eq!(result.value(), "unknown");
    }

    #[test]
    fn test_presence_flag_and_unsupported() {
        let flag = FieldSpec::new(Field::HasCart)
            .candidate(Query::find("#rank"))
            .transform(Transform::Literal("true".into()))
            .default_value("false");
        assert_eq!(extract(&flag), Extraction::found("true".to_string()));

        let absent = FieldSpec::new(Field::HasCart)
            .candidate(Query::find("#add-to-cart-button"))
            .transform(Transform::Literal("true".into()))
            .default_value("false");
        assert_eq!(extract(&absent).value(), "false");

        let unsupported = FieldSpec::unsupported(Field::Coupon).compile().unwrap();
        assert!(!unsupported.is_supported());
        assert_eq!(unsupported.extract(doc().root_element()), Extraction::found("unknown".to_string()));
    }

    #[test]
    fn test_extract_all_transforms_every_hit() {
        let doc = doc();
        let rule = FieldSpec::new(Field::CategoryHierarchy)
            .candidate(Query::find("#crumbs li > span > a").text())
            .transform(Transform::Trim)
            .compile()
            .unwrap();
        let result = rule.extract_all(doc.root_element());
        assert_eq!(result.into_result().unwrap(), vec!["Home", "Kitchen"]);
    }

    #[test]
    fn test_numbered_pick() {
        let spec = FieldSpec::new(Field::Description)
            .candidate(Query::find("#crumbs a").text().numbered())
            .on_empty(OnEmpty::Fail);
        assert_eq!(extract(&spec).into_value(), "1.  Home  2. Kitchen  ");
    }
}
