use crate::error::SitemapError;
use time::OffsetDateTime;

/// A single Google News sitemap entry.
///
/// A `NewsItem` describes one article: its URL, the publication it belongs
/// to, and the news metadata Google expects under the `news:news` element.
/// Items are immutable values built per entry with [`NewsItemBuilder`], so
/// no field can leak from one `add_item` call into the next.
///
/// # Examples
///
/// ```
/// use news_sitemap::NewsItem;
///
/// let item = NewsItem::builder()
///     .loc("https://example.com/articles/rust-1-90")
///     .name("Example Daily")
///     .language("en")
///     .title("Rust 1.90 released")
///     .publication_timestamp(1700000000)
///     .keywords(["rust", "release"])
///     .build()
///     .unwrap();
///
/// assert_eq!(item.language, "en");
/// assert_eq!(item.keywords, vec!["rust", "release"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsItem {
    /// Absolute URL of the article. Validated when the item is written.
    pub loc: String,
    /// Publication name.
    pub name: String,
    /// Publication language code, e.g. `en` or `fr`.
    pub language: String,
    /// Article title.
    pub title: String,
    /// Publication date, rendered as RFC 3339 on emission.
    pub publication_date: OffsetDateTime,
    /// Comma-separated genres. Omitted from the output when empty.
    pub genres: Option<String>,
    /// Article keywords, joined with `", "`. Omitted from the output when empty.
    pub keywords: Vec<String>,
}

impl NewsItem {
    /// Returns a builder with no fields set.
    pub fn builder() -> NewsItemBuilder {
        NewsItemBuilder::new()
    }
}

/// Builder for [`NewsItem`].
///
/// All required fields (`loc`, `name`, `language`, `title` and one of
/// `publication_date` / `publication_timestamp`) must be set before
/// [`build`](NewsItemBuilder::build) succeeds; `genres` and `keywords` are
/// optional.
#[derive(Debug, Default, Clone)]
pub struct NewsItemBuilder {
    loc: Option<String>,
    name: Option<String>,
    language: Option<String>,
    title: Option<String>,
    date: Option<OffsetDateTime>,
    timestamp: Option<i64>,
    genres: Option<String>,
    keywords: Vec<String>,
}

impl NewsItemBuilder {
    /// Creates a new `NewsItemBuilder` with no fields set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the absolute URL of the article.
    pub fn loc(mut self, loc: impl Into<String>) -> Self {
        self.loc = Some(loc.into());
        self
    }

    /// Sets the publication name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the publication language code.
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Sets the article title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the publication date.
    ///
    /// Takes precedence over [`publication_timestamp`](Self::publication_timestamp)
    /// when both are set.
    pub fn publication_date(mut self, date: OffsetDateTime) -> Self {
        self.date = Some(date);
        self
    }

    /// Sets the publication date from Unix epoch seconds.
    ///
    /// Conversion happens in [`build`](Self::build), which fails with
    /// [`SitemapError::InvalidTimestamp`] for values outside the
    /// representable date range.
    pub fn publication_timestamp(mut self, seconds: i64) -> Self {
        self.timestamp = Some(seconds);
        self
    }

    /// Sets the comma-separated genres string, e.g. `"PressRelease, Blog"`.
    pub fn genres(mut self, genres: impl Into<String>) -> Self {
        self.genres = Some(genres.into());
        self
    }

    /// Sets the article keywords.
    pub fn keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Builds the [`NewsItem`], failing if a required field is missing.
    pub fn build(self) -> Result<NewsItem, SitemapError> {
        let publication_date = match (self.date, self.timestamp) {
            (Some(date), _) => date,
            (None, Some(seconds)) => OffsetDateTime::from_unix_timestamp(seconds)
                .map_err(|_| SitemapError::InvalidTimestamp(seconds))?,
            (None, None) => return Err(SitemapError::MissingField("publication_date")),
        };

        Ok(NewsItem {
            loc: self.loc.ok_or(SitemapError::MissingField("loc"))?,
            name: self.name.ok_or(SitemapError::MissingField("name"))?,
            language: self.language.ok_or(SitemapError::MissingField("language"))?,
            title: self.title.ok_or(SitemapError::MissingField("title"))?,
            publication_date,
            genres: self.genres,
            keywords: self.keywords,
        })
    }
}
