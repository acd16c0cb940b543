//! Typed query language over the parsed DOM
//!
//! A [`Query`] is a short path evaluated from a scope element: CSS selection
//! steps, text predicates and sibling/parent moves, followed by a projection
//! (the element, its text nodes or one of its attributes). Queries are plain
//! data so rule tables can be stored as JSON; [`Query::compile`] turns one
//! into a [`CompiledQuery`] holding parsed `scraper` selectors.
//!
//! [`find_nodes`] is the single entry point the extractors use to run a query.
//! It reports zero hits as `NoMatch` and, unless multiple hits are allowed,
//! more than one hit as `AmbiguousMatch`.

use std::borrow::Cow;
use std::collections::HashSet;
use std::fmt;

use scraper::{ElementRef, Selector};
use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use super::error::{ParsingError, ParsingResult};

/// One navigation step, applied to every node of the current working set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    /// Descendants matching a CSS selector
    Find(String),
    /// Direct children matching a CSS selector
    Child(String),
    /// Keep nodes whose first direct text child contains the needle
    HasText(String),
    /// Keep nodes with a direct text child equal to the value
    TextIs(String),
    /// Every following sibling element matching a CSS selector
    FollowingSibling(String),
    /// The first following sibling element matching a CSS selector
    NextSibling(String),
    Parent,
}

/// What a query yields for each node it ends on.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    #[default]
    Element,
    /// Each direct text child
    Text,
    /// Each descendant text node
    DeepText,
    /// The named attribute; nodes without it yield nothing
    Attr(String),
}

/// Which hit a scalar field reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pick {
    #[default]
    First,
    Last,
    /// All hits joined as `"1. a 2. b "`
    Numbered,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Query {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<Step>,
    #[serde(default)]
    pub target: Target,
    #[serde(default)]
    pub pick: Pick,
    /// Fail as ambiguous when more than one hit is produced
    #[serde(default)]
    pub exactly_one: bool,
}

impl Query {
    /// A query that starts and ends on the scope element itself.
    pub fn scope() -> Self {
        Self::default()
    }

    pub fn find(css: &str) -> Self {
        Self::scope().then(Step::Find(css.to_string()))
    }

    fn then(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }

    pub fn descendant(self, css: &str) -> Self {
        self.then(Step::Find(css.to_string()))
    }

    pub fn child(self, css: &str) -> Self {
        self.then(Step::Child(css.to_string()))
    }

    pub fn has_text(self, needle: &str) -> Self {
        self.then(Step::HasText(needle.to_string()))
    }

    pub fn text_is(self, value: &str) -> Self {
        self.then(Step::TextIs(value.to_string()))
    }

    pub fn following_sibling(self, css: &str) -> Self {
        self.then(Step::FollowingSibling(css.to_string()))
    }

    pub fn next_sibling(self, css: &str) -> Self {
        self.then(Step::NextSibling(css.to_string()))
    }

    pub fn parent(self) -> Self {
        self.then(Step::Parent)
    }

    pub fn text(mut self) -> Self {
        self.target = Target::Text;
        self
    }

    pub fn deep_text(mut self) -> Self {
        self.target = Target::DeepText;
        self
    }

    pub fn attr(mut self, name: &str) -> Self {
        self.target = Target::Attr(name.to_string());
        self
    }

    pub const fn last(mut self) -> Self {
        self.pick = Pick::Last;
        self
    }

    pub const fn numbered(mut self) -> Self {
        self.pick = Pick::Numbered;
        self
    }

    pub const fn single(mut self) -> Self {
        self.exactly_one = true;
        self
    }

    /// Parse every CSS selector in the query.
    pub fn compile(&self) -> ParsingResult<CompiledQuery> {
        let steps = self
            .steps
            .iter()
            .map(|step| {
                Ok(match step {
                    Step::Find(css) => CompiledStep::Find(compile_selector(css)?),
                    Step::Child(css) => CompiledStep::Child(compile_selector(css)?),
                    Step::HasText(needle) => CompiledStep::HasText(needle.clone()),
                    Step::TextIs(value) => CompiledStep::TextIs(value.clone()),
                    Step::FollowingSibling(css) => {
                        CompiledStep::FollowingSibling(compile_selector(css)?)
                    }
                    Step::NextSibling(css) => CompiledStep::NextSibling(compile_selector(css)?),
                    Step::Parent => CompiledStep::Parent,
                })
            })
            .collect::<ParsingResult<Vec<_>>>()?;

        Ok(CompiledQuery {
            steps,
            target: self.target.clone(),
            pick: self.pick,
            exactly_one: self.exactly_one,
            expr: self.to_string(),
        })
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.steps.is_empty() {
            f.write_str(".")?;
        }
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                f.write_str(" / ")?;
            }
            match step {
                Step::Find(css) => write!(f, "find({css})")?,
                Step::Child(css) => write!(f, "child({css})")?,
                Step::HasText(needle) => write!(f, "has_text({needle})")?,
                Step::TextIs(value) => write!(f, "text_is({value})")?,
                Step::FollowingSibling(css) => write!(f, "following_sibling({css})")?,
                Step::NextSibling(css) => write!(f, "next_sibling({css})")?,
                Step::Parent => f.write_str("..")?,
            }
        }
        match &self.target {
            Target::Element => Ok(()),
            Target::Text => f.write_str(" / text()"),
            Target::DeepText => f.write_str(" // text()"),
            Target::Attr(name) => write!(f, " / @{name}"),
        }
    }
}

fn compile_selector(css: &str) -> ParsingResult<Selector> {
    Selector::parse(css).map_err(|e| {
        warn!("Failed to compile selector '{}': {}", css, e);
        ParsingError::invalid_selector(css, &e.to_string())
    })
}

#[derive(Debug, Clone)]
enum CompiledStep {
    Find(Selector),
    Child(Selector),
    HasText(String),
    TextIs(String),
    FollowingSibling(Selector),
    NextSibling(Selector),
    Parent,
}

/// A query with its selectors parsed, ready to run against any scope.
#[derive(Debug, Clone)]
pub struct CompiledQuery {
    steps: Vec<CompiledStep>,
    target: Target,
    pick: Pick,
    exactly_one: bool,
    expr: String,
}

impl CompiledQuery {
    /// Printable form of the source query, used in errors and logs
    pub fn expr(&self) -> &str {
        &self.expr
    }

    pub const fn pick(&self) -> Pick {
        self.pick
    }

    pub const fn allows_multiple(&self) -> bool {
        !self.exactly_one
    }

    /// Every hit of the query from `root`, in document order. Never fails.
    pub fn evaluate<'a>(&self, root: ElementRef<'a>) -> Vec<Hit<'a>> {
        let mut nodes = vec![root];
        for step in &self.steps {
            nodes = apply_step(step, &nodes);
            if nodes.is_empty() {
                break;
            }
        }
        project(&self.target, &nodes)
    }

    /// Run the query with its own multiplicity rule.
    pub fn find<'a>(&self, root: ElementRef<'a>) -> ParsingResult<Vec<Hit<'a>>> {
        find_nodes(root, self, self.allows_multiple())
    }

    /// Element hits only, for item lists. Zero elements is `NoMatch`.
    pub fn find_elements<'a>(&self, root: ElementRef<'a>) -> ParsingResult<Vec<ElementRef<'a>>> {
        let elements: Vec<_> = self.find(root)?.iter().filter_map(Hit::element).collect();
        if elements.is_empty() {
            return Err(ParsingError::no_match(&self.expr));
        }
        Ok(elements)
    }
}

/// Evaluate `query` from `root`.
///
/// Zero hits is `NoMatch`; more than one hit is `AmbiguousMatch` unless
/// `allow_multiple` is set. Hits come back in document order.
pub fn find_nodes<'a>(
    root: ElementRef<'a>,
    query: &CompiledQuery,
    allow_multiple: bool,
) -> ParsingResult<Vec<Hit<'a>>> {
    let hits = query.evaluate(root);
    trace!(query = %query.expr, hits = hits.len(), "query evaluated");

    match hits.len() {
        0 => Err(ParsingError::no_match(&query.expr)),
        count if count > 1 && !allow_multiple => {
            Err(ParsingError::ambiguous_match(&query.expr, count))
        }
        _ => Ok(hits),
    }
}

fn apply_step<'a>(step: &CompiledStep, nodes: &[ElementRef<'a>]) -> Vec<ElementRef<'a>> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    let mut push = |el: ElementRef<'a>| {
        if seen.insert(el.id()) {
            out.push(el);
        }
    };

    for &node in nodes {
        match step {
            CompiledStep::Find(selector) => node.select(selector).for_each(&mut push),
            CompiledStep::Child(selector) => node
                .children()
                .filter_map(ElementRef::wrap)
                .filter(|child| selector.matches(child))
                .for_each(&mut push),
            CompiledStep::HasText(needle) => {
                if own_text(node).next().is_some_and(|text| text.contains(needle.as_str())) {
                    push(node);
                }
            }
            CompiledStep::TextIs(value) => {
                if own_text(node).any(|text| text == value) {
                    push(node);
                }
            }
            CompiledStep::FollowingSibling(selector) => node
                .next_siblings()
                .filter_map(ElementRef::wrap)
                .filter(|sibling| selector.matches(sibling))
                .for_each(&mut push),
            CompiledStep::NextSibling(selector) => {
                if let Some(sibling) = node
                    .next_siblings()
                    .filter_map(ElementRef::wrap)
                    .find(|sibling| selector.matches(sibling))
                {
                    push(sibling);
                }
            }
            CompiledStep::Parent => {
                if let Some(parent) = node.parent().and_then(ElementRef::wrap) {
                    push(parent);
                }
            }
        }
    }

    out
}

fn own_text<'a>(node: ElementRef<'a>) -> impl Iterator<Item = &'a str> {
    node.children()
        .filter_map(|child| child.value().as_text().map(|text| &**text))
}

fn project<'a>(target: &Target, nodes: &[ElementRef<'a>]) -> Vec<Hit<'a>> {
    match target {
        Target::Element => nodes.iter().copied().map(Hit::Element).collect(),
        Target::Text => nodes
            .iter()
            .flat_map(|node| own_text(*node))
            .map(Hit::Text)
            .collect(),
        Target::DeepText => nodes
            .iter()
            .flat_map(|node| node.text())
            .map(Hit::Text)
            .collect(),
        Target::Attr(name) => nodes
            .iter()
            .filter_map(|node| node.value().attr(name))
            .map(Hit::Attr)
            .collect(),
    }
}

/// A single query result.
#[derive(Debug, Clone, Copy)]
pub enum Hit<'a> {
    Element(ElementRef<'a>),
    Text(&'a str),
    Attr(&'a str),
}

impl<'a> Hit<'a> {
    /// Text carried by the hit; elements yield their concatenated text.
    pub fn value(&self) -> Cow<'a, str> {
        match self {
            Self::Element(element) => Cow::Owned(element.text().collect()),
            Self::Text(text) | Self::Attr(text) => Cow::Borrowed(*text),
        }
    }

    pub const fn element(&self) -> Option<ElementRef<'a>> {
        match self {
            Self::Element(element) => Some(*element),
            _ => None,
        }
    }
}
