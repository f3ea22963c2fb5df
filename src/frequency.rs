//! Change frequency tokens from the sitemap protocol.

use crate::error::SitemapError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How frequently a page is likely to change (`<changefreq>`).
///
/// These are hints for crawlers; the protocol defines exactly seven tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    /// The page changes every time it is accessed.
    Always,
    /// The page changes hourly.
    Hourly,
    /// The page changes daily.
    Daily,
    /// The page changes weekly.
    Weekly,
    /// The page changes monthly.
    Monthly,
    /// The page changes yearly.
    Yearly,
    /// The page is archived and will not change.
    Never,
}

impl ChangeFrequency {
    /// Literal token written into the `<changefreq>` element.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::Never => "never",
        }
    }
}

impl FromStr for ChangeFrequency {
    type Err = SitemapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "always" => Ok(Self::Always),
            "hourly" => Ok(Self::Hourly),
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            "yearly" => Ok(Self::Yearly),
            "never" => Ok(Self::Never),
            _ => Err(SitemapError::UnknownFrequency(s.to_string())),
        }
    }
}

impl fmt::Display for ChangeFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_seven_tokens() {
        let tokens = [
            "always", "hourly", "daily", "weekly", "monthly", "yearly", "never",
        ];
        for token in tokens {
            let freq: ChangeFrequency = token.parse().unwrap();
            assert_eq!(freq.as_str(), token);
        }
    }

    #[test]
    fn rejects_unknown_token() {
        let err = "biweekly".parse::<ChangeFrequency>().unwrap_err();
        assert!(matches!(err, SitemapError::UnknownFrequency(t) if t == "biweekly"));
    }

    #[test]
    fn rejects_wrong_case() {
        assert!("Daily".parse::<ChangeFrequency>().is_err());
    }

    #[test]
    fn display_matches_token() {
        assert_eq!(ChangeFrequency::Never.to_string(), "never");
    }
}
