//! Infrastructure layer: HTML extraction, configuration and logging

pub mod config;
pub mod logging;
pub mod parsing;
pub mod parsing_error;

// Re-export commonly used items
pub use config::{AppConfig, ConfigManager, LoggingConfig, ParserSettings};
pub use logging::{get_log_directory, init_logging, init_logging_with_config};
pub use parsing::{
    detect_region, parse_region, BoardParser, Extraction, KeywordParser, ListingParser,
    PageExtractor, ParserRegistry, ParsingConfig, ParsingError, ParsingResult, ProductParser,
    ReviewParser,
};
