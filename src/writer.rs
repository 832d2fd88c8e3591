use crate::error::SitemapError;
use crate::item::NewsItem;
use log::debug;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use time::format_description::well_known::Rfc3339;
use url::Url;

/// Standard sitemap XML namespace.
pub const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Google News sitemap extension namespace.
pub const NEWS_NS: &str = "http://www.google.com/schemas/sitemap-news/0.9";

/// XHTML namespace, declared on the root when enabled on the builder.
pub const XHTML_NS: &str = "http://www.w3.org/1999/xhtml";

/// A streaming writer for Google News XML sitemaps.
///
/// The writer owns its output sink for its whole lifetime. Construction
/// (through [`SitemapWriterBuilder`]) emits the XML declaration and the
/// opening `<urlset>` tag with its namespace declarations; each
/// [`add_item`](SitemapWriter::add_item) call appends one complete `<url>`
/// subtree and flushes it to the sink, so memory stays bounded regardless of
/// the number of entries; [`finish`](SitemapWriter::finish) closes the root
/// element and returns the sink.
///
/// `finish` consumes the writer, so adding an item to a finalized document
/// or finalizing twice is rejected at compile time.
///
/// # Examples
///
/// ```
/// use news_sitemap::{NewsItem, SitemapWriterBuilder};
/// use std::io::Cursor;
///
/// let sink = Cursor::new(Vec::new());
/// let mut writer = SitemapWriterBuilder::new().from_writer(sink).unwrap();
///
/// let item = NewsItem::builder()
///     .loc("https://example.com/articles/hello")
///     .name("Example Daily")
///     .language("en")
///     .title("Hello, world")
///     .publication_timestamp(1700000000)
///     .build()
///     .unwrap();
///
/// writer.add_item(&item).unwrap();
/// let sink = writer.finish().unwrap();
///
/// let xml = String::from_utf8(sink.into_inner()).unwrap();
/// assert!(xml.contains("<loc>https://example.com/articles/hello</loc>"));
/// assert!(xml.ends_with("</urlset>"));
/// ```
///
/// Writing to a file:
///
/// ```no_run
/// use news_sitemap::SitemapWriterBuilder;
///
/// let writer = SitemapWriterBuilder::new()
///     .from_path("/var/www/sitemap-news.xml")
///     .unwrap();
/// ```
pub struct SitemapWriter<W: Write = File> {
    writer: Writer<BufWriter<W>>,
}

impl<W: Write> SitemapWriter<W> {
    /// Appends one `<url>` entry for `item`.
    ///
    /// The item location is validated first: it must be a syntactically
    /// valid absolute URL (scheme and host). On validation failure nothing
    /// is written and the document stays well-formed, ready for further
    /// items.
    ///
    /// The emitted bytes are flushed to the sink before this method returns.
    pub fn add_item(&mut self, item: &NewsItem) -> Result<(), SitemapError> {
        validate_location(&item.loc)?;
        let date = item.publication_date.format(&Rfc3339)?;

        self.writer.write_event(Event::Start(BytesStart::new("url")))?;
        self.text_element("loc", &item.loc)?;

        self.writer
            .write_event(Event::Start(BytesStart::new("news:news")))?;
        self.writer
            .write_event(Event::Start(BytesStart::new("news:publication")))?;
        self.text_element("news:name", &item.name)?;
        self.text_element("news:language", &item.language)?;
        self.writer
            .write_event(Event::End(BytesEnd::new("news:publication")))?;

        if let Some(genres) = item.genres.as_deref().filter(|g| !g.is_empty()) {
            self.text_element("news:genres", genres)?;
        }
        self.text_element("news:publication_date", &date)?;
        self.text_element("news:title", &item.title)?;
        if !item.keywords.is_empty() {
            self.text_element("news:keywords", &item.keywords.join(", "))?;
        }

        self.writer
            .write_event(Event::End(BytesEnd::new("news:news")))?;
        self.writer.write_event(Event::End(BytesEnd::new("url")))?;
        self.writer.get_mut().flush()?;

        debug!("added sitemap entry for {}", item.loc);
        Ok(())
    }

    /// Closes the `</urlset>` root element, flushes, and returns the sink.
    pub fn finish(self) -> Result<W, SitemapError> {
        let mut writer = self.writer;
        writer.write_event(Event::End(BytesEnd::new("urlset")))?;

        let mut buf = writer.into_inner();
        buf.flush()?;
        debug!("sitemap document finalized");
        buf.into_inner().map_err(|e| SitemapError::Io(e.into_error()))
    }

    fn text_element(&mut self, tag: &str, value: &str) -> Result<(), SitemapError> {
        self.writer.write_event(Event::Start(BytesStart::new(tag)))?;
        self.writer.write_event(Event::Text(BytesText::new(value)))?;
        self.writer.write_event(Event::End(BytesEnd::new(tag)))?;
        Ok(())
    }
}

/// Builder for creating sitemap writers.
///
/// Output is pretty-indented by default; the XHTML namespace declaration is
/// off by default.
///
/// # Examples
///
/// ```
/// use news_sitemap::SitemapWriterBuilder;
/// use std::io::Cursor;
///
/// let writer = SitemapWriterBuilder::new()
///     .pretty(false)
///     .xhtml_namespace(true)
///     .from_writer(Cursor::new(Vec::new()))
///     .unwrap();
/// ```
pub struct SitemapWriterBuilder {
    pretty: bool,
    xhtml_namespace: bool,
}

impl SitemapWriterBuilder {
    /// Creates a builder with default settings.
    pub fn new() -> Self {
        Self {
            pretty: true,
            xhtml_namespace: false,
        }
    }

    /// Enables or disables two-space indentation of the output.
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Additionally declares the XHTML namespace on the root element,
    /// for sitemaps that carry `xhtml:link` alternates.
    pub fn xhtml_namespace(mut self, xhtml_namespace: bool) -> Self {
        self.xhtml_namespace = xhtml_namespace;
        self
    }

    /// Creates a [`SitemapWriter`] writing to a file at `path`.
    ///
    /// The parent directory must already exist. Any pre-existing file at
    /// `path` is removed first; the writer always starts a fresh document.
    /// The destination file is created (and the document prologue written)
    /// before this method returns, even if no item is ever added.
    pub fn from_path<P: AsRef<Path>>(self, path: P) -> Result<SitemapWriter<File>, SitemapError> {
        let path = path.as_ref();
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        if !dir.is_dir() {
            return Err(SitemapError::DirectoryNotFound(dir.to_path_buf()));
        }
        if path.exists() {
            fs::remove_file(path).map_err(|source| SitemapError::FileNotWritable {
                path: path.to_path_buf(),
                source,
            })?;
        }

        let file = File::create(path)?;
        debug!("created sitemap file {}", path.display());
        self.from_writer(file)
    }

    /// Creates a [`SitemapWriter`] writing to any [`Write`] sink.
    ///
    /// Useful for in-memory buffers or network streams. The document
    /// prologue (XML declaration and the opening `<urlset>` tag) is written
    /// and flushed immediately.
    pub fn from_writer<W: Write>(self, sink: W) -> Result<SitemapWriter<W>, SitemapError> {
        let buf = BufWriter::new(sink);
        let mut writer = if self.pretty {
            Writer::new_with_indent(buf, b' ', 2)
        } else {
            Writer::new(buf)
        };

        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

        let mut urlset = BytesStart::new("urlset");
        urlset.push_attribute(("xmlns", SITEMAP_NS));
        urlset.push_attribute(("xmlns:news", NEWS_NS));
        if self.xhtml_namespace {
            urlset.push_attribute(("xmlns:xhtml", XHTML_NS));
        }
        writer.write_event(Event::Start(urlset))?;
        writer.get_mut().flush()?;

        Ok(SitemapWriter { writer })
    }
}

impl Default for SitemapWriterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_location(location: &str) -> Result<(), SitemapError> {
    match Url::parse(location) {
        Ok(url) if url.has_host() => Ok(()),
        _ => Err(SitemapError::InvalidLocation(location.to_string())),
    }
}
