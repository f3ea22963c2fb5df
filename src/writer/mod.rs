//! The sitemap writer: chainable setters, item emission, file rotation.
//!
//! One `Sitemap` owns at most one open output file and one in-memory XML
//! buffer. Items are emitted synchronously on the calling thread; a writer
//! is not meant to be shared across threads (use separate writers with
//! separate output paths for concurrent generation).

mod path;
mod session;

use crate::config::SitemapConfig;
use crate::entry::{self, UrlEntry};
use crate::error::SitemapError;
use crate::frequency::ChangeFrequency;
use session::FileSession;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Incremental multi-file sitemap writer.
///
/// URLs are added one at a time, either through the chainable setters
/// followed by [`add_item`], or as an explicit [`UrlEntry`] record through
/// [`add_entry`]. Output rotates to a numbered file once the per-file URL
/// limit is reached, and the XML buffer is appended to disk every
/// `buffer_size` items.
///
/// The caller must call [`finish`] after the last item; dropping the writer
/// without it leaves the trailing file unterminated.
///
/// [`add_item`]: Sitemap::add_item
/// [`add_entry`]: Sitemap::add_entry
/// [`finish`]: Sitemap::finish
pub struct Sitemap {
    base_path: PathBuf,
    config: SitemapConfig,
    pending: UrlEntry,
    session: Option<FileSession>,
    written_files: Vec<PathBuf>,
    file_count: u32,
    total_urls: u64,
    finished: bool,
}

// Manual impl: the session's XML writer is not Debug.
impl fmt::Debug for Sitemap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sitemap")
            .field("base_path", &self.base_path)
            .field("config", &self.config)
            .field("file_count", &self.file_count)
            .field("total_urls", &self.total_urls)
            .field("finished", &self.finished)
            .finish_non_exhaustive()
    }
}

impl Sitemap {
    /// Writer with default limits (50000 URLs per file, 1000-item buffer,
    /// indented output).
    ///
    /// Fails with [`SitemapError::Config`] if the parent directory of `path`
    /// does not exist.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, SitemapError> {
        Self::with_config(path, SitemapConfig::default())
    }

    /// Writer with explicit limits.
    pub fn with_config(
        path: impl Into<PathBuf>,
        config: SitemapConfig,
    ) -> Result<Self, SitemapError> {
        config.validate()?;
        let base_path = path.into();
        let dir = base_path.parent().unwrap_or_else(|| Path::new(""));
        // An empty parent means the current directory.
        if !dir.as_os_str().is_empty() && !dir.is_dir() {
            return Err(SitemapError::Config(format!(
                "output directory does not exist: {}",
                dir.display()
            )));
        }

        Ok(Self {
            base_path,
            config,
            pending: UrlEntry::default(),
            session: None,
            written_files: Vec::new(),
            file_count: 0,
            total_urls: 0,
            finished: false,
        })
    }

    /// Sets the pending item's URL (`<loc>`). Must be a valid absolute URL.
    pub fn set_location(&mut self, url: &str) -> Result<&mut Self, SitemapError> {
        self.ensure_active()?;
        entry::validate_location(url)?;
        self.pending.loc = Some(url.to_string());
        Ok(self)
    }

    /// Sets the pending item's last modification time as Unix seconds.
    pub fn set_last_modified(&mut self, timestamp: i64) -> Result<&mut Self, SitemapError> {
        self.ensure_active()?;
        self.pending.lastmod = Some(timestamp);
        Ok(self)
    }

    /// Sets the pending item's change frequency from its protocol token
    /// (`always`, `hourly`, `daily`, `weekly`, `monthly`, `yearly`, `never`).
    pub fn set_frequency(&mut self, token: &str) -> Result<&mut Self, SitemapError> {
        self.ensure_active()?;
        self.pending.changefreq = Some(ChangeFrequency::from_str(token)?);
        Ok(self)
    }

    /// Typed variant of [`set_frequency`](Sitemap::set_frequency).
    pub fn set_changefreq(
        &mut self,
        frequency: ChangeFrequency,
    ) -> Result<&mut Self, SitemapError> {
        self.ensure_active()?;
        self.pending.changefreq = Some(frequency);
        Ok(self)
    }

    /// Sets the pending item's priority, 0.0 to 1.0.
    pub fn set_priority(&mut self, priority: f64) -> Result<&mut Self, SitemapError> {
        self.ensure_active()?;
        entry::validate_priority(priority)?;
        self.pending.priority = Some(priority);
        Ok(self)
    }

    /// Adds or overwrites one alternate-language link on the pending item.
    pub fn set_alternate_language(
        &mut self,
        lang: impl Into<String>,
        href: impl Into<String>,
    ) -> Result<&mut Self, SitemapError> {
        self.ensure_active()?;
        self.pending.insert_alternate(lang.into(), href.into());
        Ok(self)
    }

    /// Emits one `<url>` element from the pending setter state, then clears
    /// that state. Opens the first file on the first call and rotates to a
    /// new file once the current one holds `max_urls_per_file` URLs.
    pub fn add_item(&mut self) -> Result<(), SitemapError> {
        self.ensure_active()?;
        let entry = std::mem::take(&mut self.pending);
        self.add_entry(entry)
    }

    /// Emits one `<url>` element from an explicit record. Pending setter
    /// state is left untouched.
    pub fn add_entry(&mut self, entry: UrlEntry) -> Result<(), SitemapError> {
        self.ensure_active()?;

        let at_capacity = self
            .session
            .as_ref()
            .is_some_and(|s| s.urls_in_file() >= self.config.max_urls_per_file);
        if at_capacity {
            self.finalize_session()?;
        }
        if self.session.is_none() {
            self.open_next_file()?;
        }

        let buffer_size = self.config.buffer_size;
        if let Some(session) = self.session.as_mut() {
            // Checked before writing, so the flush points within a file are
            // at URL counts 0, B, 2B, and so on; the first flush puts the
            // prolog and root element on disk.
            if session.urls_in_file() % buffer_size == 0 {
                session.flush_to_disk()?;
            }
            session.write_entry(&entry)?;
            self.total_urls += 1;
        }
        Ok(())
    }

    /// Finalizes the current file: closes the root element, flushes the
    /// remaining buffer, and releases the handle. Idempotent; a second call
    /// performs no writes and returns `Ok`.
    ///
    /// After this, setters and add calls fail with
    /// [`SitemapError::Finished`].
    pub fn finish(&mut self) -> Result<(), SitemapError> {
        self.finalize_session()?;
        self.finished = true;
        Ok(())
    }

    /// Path of the file currently being written (the base path until the
    /// first rotation).
    pub fn current_file_path(&self) -> PathBuf {
        path::numbered_path(&self.base_path, self.file_count)
    }

    /// Paths of all files opened so far, in open order.
    pub fn written_file_paths(&self) -> &[PathBuf] {
        &self.written_files
    }

    /// Public URLs of the written files: each file's basename appended to
    /// `base_url`, in ledger order. For publishing into a sitemap index or
    /// robots.txt.
    pub fn sitemap_urls(&self, base_url: &str) -> Vec<String> {
        self.written_files
            .iter()
            .filter_map(|p| p.file_name())
            .map(|name| format!("{}{}", base_url, name.to_string_lossy()))
            .collect()
    }

    /// Total number of URLs added over the writer's lifetime.
    pub fn total_urls(&self) -> u64 {
        self.total_urls
    }

    fn ensure_active(&self) -> Result<(), SitemapError> {
        if self.finished {
            return Err(SitemapError::Finished);
        }
        Ok(())
    }

    fn open_next_file(&mut self) -> Result<(), SitemapError> {
        self.file_count += 1;
        let path = path::numbered_path(&self.base_path, self.file_count);
        tracing::debug!(path = %path.display(), file = self.file_count, "opening sitemap file");
        let session = FileSession::open(&path, self.config.use_indent)?;
        // Recorded only after a successful open, so the ledger never names
        // a file that was not created.
        self.written_files.push(path);
        self.session = Some(session);
        Ok(())
    }

    fn finalize_session(&mut self) -> Result<(), SitemapError> {
        if let Some(session) = self.session.take() {
            let urls = session.urls_in_file();
            session.finalize()?;
            tracing::info!(urls, file = self.file_count, "finalized sitemap file");
        }
        Ok(())
    }
}
