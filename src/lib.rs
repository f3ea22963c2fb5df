//! Incremental sitemap writer (<http://www.sitemaps.org/>).
//!
//! Streams `<url>` entries into one or more sitemap XML files, rotating to a
//! numbered file (`sitemap_2.xml`, `sitemap_3.xml`, …) once the per-file URL
//! limit is reached, and flushing the in-memory XML buffer to disk in
//! fixed-size batches to bound memory use.
//!
//! ```no_run
//! use sitemap_writer::Sitemap;
//!
//! # fn main() -> Result<(), sitemap_writer::SitemapError> {
//! let mut sitemap = Sitemap::new("/var/www/sitemaps/sitemap.xml")?;
//! sitemap
//!     .set_location("https://example.com/")?
//!     .set_last_modified(1_705_314_600)?
//!     .set_frequency("daily")?
//!     .set_priority(0.8)?;
//! sitemap.add_item()?;
//! sitemap.finish()?;
//!
//! for url in sitemap.sitemap_urls("https://example.com/sitemaps/") {
//!     println!("{url}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod entry;
pub mod error;
pub mod frequency;
pub mod logging;
pub mod writer;

pub use config::SitemapConfig;
pub use entry::UrlEntry;
pub use error::SitemapError;
pub use frequency::ChangeFrequency;
pub use writer::Sitemap;
