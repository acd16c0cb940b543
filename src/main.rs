//! Dump one saved Amazon page as JSON
//!
//! ```text
//! amz-page-parser <page.html> [--domain product|keyword|category|seller|board|review] [--config app.json]
//! ```

use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, ValueEnum};
use scraper::Html;
use serde::Serialize;
use tracing::info;

use amz_page_parser::infrastructure::{init_logging_with_config, AppConfig, ConfigManager};
use amz_page_parser::{detect_region, PageExtractor, ParserRegistry, Region};

/// Page kind to extract
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Domain {
    Product,
    Keyword,
    Category,
    Seller,
    Board,
    Review,
}

#[derive(Debug, Parser)]
#[command(name = "amz-page-parser")]
#[command(version)]
#[command(about = "Extract the fields of a saved Amazon page and print them as JSON")]
struct CliArgs {
    /// Saved HTML page
    page: PathBuf,

    /// Which page kind the file holds
    #[arg(long, value_enum, default_value = "product")]
    domain: Domain,

    /// Application config file, created with defaults when missing
    #[arg(long)]
    config: Option<PathBuf>,
}

fn render<P>(parser: Option<&P>, html: &Html, region: Region, domain: Domain) -> Result<String>
where
    P: PageExtractor,
    P::Output: Serialize,
{
    let parser = parser.ok_or_else(|| anyhow!("no {domain:?} parser registered for region {region}"))?;
    let record = parser
        .extract_page(html)
        .with_context(|| format!("Failed to extract {domain:?} page"))?;
    serde_json::to_string_pretty(&record).context("Failed to serialize record")
}

fn main() -> Result<()> {
    let args = CliArgs::parse();

    let config = match &args.config {
        Some(path) => ConfigManager::new(path).load_config()?,
        None => AppConfig::default(),
    };
    init_logging_with_config(config.logging.clone())?;

    let registry = ParserRegistry::from_config(&config.parsing.rule_table()?)?;

    let content = fs::read_to_string(&args.page)
        .with_context(|| format!("Failed to read {}", args.page.display()))?;
    let html = Html::parse_document(&content);
    let region = detect_region(&html).context("Cannot tell which site the page comes from")?;
    info!("Extracting {:?} page for region {}", args.domain, region);

    let json = match args.domain {
        Domain::Product => render(registry.product(region), &html, region, args.domain)?,
        Domain::Keyword => render(registry.keyword(region), &html, region, args.domain)?,
        Domain::Category => render(registry.category(region), &html, region, args.domain)?,
        Domain::Seller => render(registry.seller(region), &html, region, args.domain)?,
        Domain::Board => render(registry.board(region), &html, region, args.domain)?,
        Domain::Review => render(registry.review(region), &html, region, args.domain)?,
    };
    println!("{json}");
    Ok(())
}
