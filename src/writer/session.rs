//! One open output file: handle, XML buffer, and per-file URL count.

use crate::entry::UrlEntry;
use crate::error::SitemapError;
use chrono::{DateTime, SecondsFormat};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::fs::File;
use std::io::Write as _;
use std::path::Path;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";
const XHTML_NS: &str = "http://www.w3.org/1999/xhtml";

/// The currently open output file. XML events accumulate in an in-memory
/// buffer; `flush_to_disk` appends the buffered bytes through the held
/// handle, so the file on disk only ever grows.
pub(crate) struct FileSession {
    file: File,
    xml: Writer<Vec<u8>>,
    urls_in_file: u64,
}

impl FileSession {
    /// Creates (truncating any pre-existing file) the output file and buffers
    /// the XML prolog plus the opening `<urlset>` root element.
    pub(crate) fn open(path: &Path, use_indent: bool) -> Result<Self, SitemapError> {
        let file = File::create(path)?;
        let xml = if use_indent {
            Writer::new_with_indent(Vec::new(), b' ', 2)
        } else {
            Writer::new(Vec::new())
        };
        let mut session = Self {
            file,
            xml,
            urls_in_file: 0,
        };

        session
            .xml
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        let mut urlset = BytesStart::new("urlset");
        urlset.push_attribute(("xmlns", SITEMAP_NS));
        urlset.push_attribute(("xmlns:xhtml", XHTML_NS));
        session.xml.write_event(Event::Start(urlset))?;
        Ok(session)
    }

    /// Number of `<url>` elements written into this file so far.
    pub(crate) fn urls_in_file(&self) -> u64 {
        self.urls_in_file
    }

    /// Appends the buffered XML to the file and empties the buffer.
    pub(crate) fn flush_to_disk(&mut self) -> Result<(), SitemapError> {
        let buf = std::mem::take(self.xml.get_mut());
        if !buf.is_empty() {
            self.file.write_all(&buf)?;
            tracing::trace!(bytes = buf.len(), "flushed sitemap buffer to disk");
        }
        Ok(())
    }

    /// Buffers one `<url>` element. Unset fields are skipped entirely; no
    /// placeholder elements are emitted.
    pub(crate) fn write_entry(&mut self, entry: &UrlEntry) -> Result<(), SitemapError> {
        self.xml.write_event(Event::Start(BytesStart::new("url")))?;

        if let Some(loc) = &entry.loc {
            self.write_text_element("loc", loc)?;
        }
        if let Some(ts) = entry.lastmod {
            match DateTime::from_timestamp(ts, 0) {
                Some(dt) => {
                    let rendered = dt.to_rfc3339_opts(SecondsFormat::Secs, false);
                    self.write_text_element("lastmod", &rendered)?;
                }
                None => {
                    tracing::warn!(ts, "last-modified timestamp out of range, skipping <lastmod>");
                }
            }
        }
        if let Some(freq) = entry.changefreq {
            self.write_text_element("changefreq", freq.as_str())?;
        }
        if let Some(priority) = entry.priority {
            // Priority exactly 0.0 is treated as unset and emits nothing.
            if priority != 0.0 {
                self.write_text_element("priority", &format!("{priority:.1}"))?;
            }
        }
        for (lang, href) in &entry.alternates {
            let mut link = BytesStart::new("xhtml:link");
            link.push_attribute(("rel", "alternate"));
            link.push_attribute(("hreflang", lang.as_str()));
            link.push_attribute(("href", href.as_str()));
            self.xml.write_event(Event::Empty(link))?;
        }

        self.xml.write_event(Event::End(BytesEnd::new("url")))?;
        self.urls_in_file += 1;
        Ok(())
    }

    /// Closes the root element and appends all remaining buffered bytes.
    /// Consumes the session; the file handle is dropped on return.
    pub(crate) fn finalize(mut self) -> Result<(), SitemapError> {
        self.xml.write_event(Event::End(BytesEnd::new("urlset")))?;
        let mut buf = std::mem::take(self.xml.get_mut());
        buf.push(b'\n');
        self.file.write_all(&buf)?;
        Ok(())
    }

    fn write_text_element(&mut self, name: &str, text: &str) -> Result<(), SitemapError> {
        self.xml.write_event(Event::Start(BytesStart::new(name)))?;
        self.xml.write_event(Event::Text(BytesText::new(text)))?;
        self.xml.write_event(Event::End(BytesEnd::new(name)))?;
        Ok(())
    }
}
