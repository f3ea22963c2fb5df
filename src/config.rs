//! Writer limits and output formatting options.

use crate::error::SitemapError;
use serde::{Deserialize, Serialize};

/// Configuration for a [`Sitemap`](crate::Sitemap) writer.
///
/// Serde-derived so host applications can embed it in their own config files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SitemapConfig {
    /// Maximum number of URLs written into a single file before rotating
    /// to the next numbered file. The protocol caps this at 50000.
    pub max_urls_per_file: u64,
    /// Number of URLs buffered in memory between flushes to disk.
    pub buffer_size: u64,
    /// Whether emitted XML is indented (2 spaces per level).
    pub use_indent: bool,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            max_urls_per_file: 50_000,
            buffer_size: 1_000,
            use_indent: true,
        }
    }
}

impl SitemapConfig {
    /// Rejects limits that would make rotation or flushing degenerate.
    pub(crate) fn validate(&self) -> Result<(), SitemapError> {
        if self.max_urls_per_file == 0 {
            return Err(SitemapError::Config(
                "max_urls_per_file must be at least 1".to_string(),
            ));
        }
        if self.buffer_size == 0 {
            return Err(SitemapError::Config(
                "buffer_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = SitemapConfig::default();
        assert_eq!(cfg.max_urls_per_file, 50_000);
        assert_eq!(cfg.buffer_size, 1_000);
        assert!(cfg.use_indent);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = SitemapConfig {
            max_urls_per_file: 10,
            buffer_size: 2,
            use_indent: false,
        };
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: SitemapConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.max_urls_per_file, cfg.max_urls_per_file);
        assert_eq!(parsed.buffer_size, cfg.buffer_size);
        assert_eq!(parsed.use_indent, cfg.use_indent);
    }

    #[test]
    fn zero_limits_rejected() {
        let cfg = SitemapConfig {
            max_urls_per_file: 0,
            ..SitemapConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(SitemapError::Config(_))));

        let cfg = SitemapConfig {
            buffer_size: 0,
            ..SitemapConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(SitemapError::Config(_))));
    }
}
