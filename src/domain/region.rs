//! Supported marketplace regions

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four supported site locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Us,
    Uk,
    De,
    Fr,
}

pub mod lang {
    pub const US: &str = "en-us";
    pub const UK: &str = "en-gb";
    pub const DE: &str = "de-de";
    pub const FR: &str = "fr-fr";
}

pub mod site {
    pub const US: &str = "https://www.amazon.com";
    pub const UK: &str = "https://www.amazon.co.uk";
    pub const DE: &str = "https://www.amazon.de";
    pub const FR: &str = "https://www.amazon.fr";
}

impl Region {
    pub const ALL: [Self; 4] = [Self::Us, Self::Uk, Self::De, Self::Fr];

    /// Language tag declared by pages of this region (`<html lang="...">`).
    pub const fn lang_tag(self) -> &'static str {
        match self {
            Self::Us => lang::US,
            Self::Uk => lang::UK,
            Self::De => lang::DE,
            Self::Fr => lang::FR,
        }
    }

    pub const fn site_prefix(self) -> &'static str {
        match self {
            Self::Us => site::US,
            Self::Uk => site::UK,
            Self::De => site::DE,
            Self::Fr => site::FR,
        }
    }

    /// Map a document language tag to a region. Tags compare case-insensitively.
    pub fn from_lang_tag(tag: &str) -> Option<Self> {
        let tag = tag.trim();
        Self::ALL
            .into_iter()
            .find(|region| region.lang_tag().eq_ignore_ascii_case(tag))
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::Us => "US",
            Self::Uk => "UK",
            Self::De => "DE",
            Self::Fr => "FR",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
