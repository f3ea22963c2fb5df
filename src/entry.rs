//! One sitemap item as an explicit record.
//!
//! `UrlEntry` is the per-call input for [`Sitemap::add_entry`]; the writer's
//! chainable setters populate one pending `UrlEntry` internally, so both
//! surfaces share the same validation.
//!
//! [`Sitemap::add_entry`]: crate::Sitemap::add_entry

use crate::error::SitemapError;
use crate::frequency::ChangeFrequency;
use url::Url;

/// A single `<url>` entry with optional metadata.
///
/// All fields are optional; an empty entry emits a bare `<url></url>` element.
#[derive(Debug, Clone, Default)]
pub struct UrlEntry {
    pub(crate) loc: Option<String>,
    pub(crate) lastmod: Option<i64>,
    pub(crate) changefreq: Option<ChangeFrequency>,
    pub(crate) priority: Option<f64>,
    pub(crate) alternates: Vec<(String, String)>,
}

impl UrlEntry {
    /// Empty entry; populate with the builder methods below.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page URL (`<loc>`). Must be a valid absolute URL.
    pub fn location(mut self, url: &str) -> Result<Self, SitemapError> {
        validate_location(url)?;
        self.loc = Some(url.to_string());
        Ok(self)
    }

    /// Sets the last modification time (`<lastmod>`) as Unix seconds.
    pub fn last_modified(mut self, timestamp: i64) -> Self {
        self.lastmod = Some(timestamp);
        self
    }

    /// Sets the change frequency (`<changefreq>`).
    pub fn changefreq(mut self, frequency: ChangeFrequency) -> Self {
        self.changefreq = Some(frequency);
        self
    }

    /// Sets the priority (`<priority>`), 0.0 to 1.0.
    pub fn priority(mut self, priority: f64) -> Result<Self, SitemapError> {
        validate_priority(priority)?;
        self.priority = Some(priority);
        Ok(self)
    }

    /// Adds one alternate-language link (`<xhtml:link hreflang=…>`).
    ///
    /// Neither the language code nor the URL is validated, unlike
    /// [`location`](UrlEntry::location).
    pub fn alternate(mut self, lang: impl Into<String>, href: impl Into<String>) -> Self {
        self.insert_alternate(lang.into(), href.into());
        self
    }

    /// Inserts or overwrites one alternate-language entry. Overwriting an
    /// existing language code keeps its original insertion position.
    pub(crate) fn insert_alternate(&mut self, lang: String, href: String) {
        match self.alternates.iter_mut().find(|(l, _)| *l == lang) {
            Some(slot) => slot.1 = href,
            None => self.alternates.push((lang, href)),
        }
    }
}

/// Checks that `url` parses as an absolute URL.
pub(crate) fn validate_location(url: &str) -> Result<(), SitemapError> {
    match Url::parse(url) {
        Ok(_) => Ok(()),
        Err(_) => Err(SitemapError::InvalidLocation(url.to_string())),
    }
}

/// Checks that `priority` is a number within 0.0..=1.0 (NaN rejected).
pub(crate) fn validate_priority(priority: f64) -> Result<(), SitemapError> {
    if !(0.0..=1.0).contains(&priority) {
        return Err(SitemapError::PriorityOutOfRange(priority));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_accepts_absolute_urls() {
        assert!(validate_location("https://example.com/a/b?c=1").is_ok());
        assert!(validate_location("http://localhost:8080/").is_ok());
    }

    #[test]
    fn location_rejects_relative_and_garbage() {
        assert!(matches!(
            validate_location("/relative/path"),
            Err(SitemapError::InvalidLocation(_))
        ));
        assert!(validate_location("not a url").is_err());
        assert!(validate_location("").is_err());
    }

    #[test]
    fn priority_bounds() {
        assert!(validate_priority(0.0).is_ok());
        assert!(validate_priority(1.0).is_ok());
        assert!(matches!(
            validate_priority(1.1),
            Err(SitemapError::PriorityOutOfRange(_))
        ));
        assert!(validate_priority(-0.1).is_err());
        assert!(validate_priority(f64::NAN).is_err());
    }

    #[test]
    fn alternate_overwrite_keeps_insertion_order() {
        let mut entry = UrlEntry::new();
        entry.insert_alternate("fr".into(), "https://example.com/fr/".into());
        entry.insert_alternate("de".into(), "https://example.com/de/".into());
        entry.insert_alternate("fr".into(), "https://example.com/fr-v2/".into());

        assert_eq!(entry.alternates.len(), 2);
        assert_eq!(entry.alternates[0].0, "fr");
        assert_eq!(entry.alternates[0].1, "https://example.com/fr-v2/");
        assert_eq!(entry.alternates[1].0, "de");
    }

    #[test]
    fn builder_chain() {
        let entry = UrlEntry::new()
            .location("https://example.com/")
            .unwrap()
            .last_modified(0)
            .changefreq(ChangeFrequency::Daily)
            .priority(0.5)
            .unwrap()
            .alternate("en", "https://example.com/en/");
        assert_eq!(entry.loc.as_deref(), Some("https://example.com/"));
        assert_eq!(entry.changefreq, Some(ChangeFrequency::Daily));
        assert_eq!(entry.priority, Some(0.5));
        assert_eq!(entry.alternates.len(), 1);
    }
}
