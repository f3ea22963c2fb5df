//! Error type for sitemap construction, validation, and I/O.

use thiserror::Error;

/// Error returned by the sitemap writer.
///
/// Validation variants are raised at the setter call site before anything is
/// buffered or written, so the caller can correct the value and retry the same
/// item without side effects. I/O errors are propagated, never retried; an
/// I/O failure during flush or finalize is fatal to the writer instance.
#[derive(Debug, Error)]
pub enum SitemapError {
    /// Invalid construction argument (missing output directory, zero limit).
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Location is not a syntactically valid absolute URL.
    #[error("location must be a valid absolute URL, got: {0}")]
    InvalidLocation(String),

    /// Priority outside the sitemap protocol range.
    #[error("priority must be within 0.0..=1.0, got: {0}")]
    PriorityOutOfRange(f64),

    /// Change frequency token not recognized by the sitemap protocol.
    #[error(
        "unknown change frequency: {0}; valid values are \
         always, hourly, daily, weekly, monthly, yearly, never"
    )]
    UnknownFrequency(String),

    /// Operation attempted after `finish()` was called.
    #[error("sitemap writer already finished")]
    Finished,

    /// Underlying file open/write failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
