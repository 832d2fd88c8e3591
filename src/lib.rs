/*!
 # news-sitemap

 A streaming generator for [Google News XML sitemaps](https://support.google.com/news/publisher-center/answer/9606710).

 The crate produces a standard `<urlset>` sitemap document whose `<url>`
 entries carry the Google News extension elements (`news:publication`,
 `news:publication_date`, `news:title`, optional `news:genres` and
 `news:keywords`). Entries are serialized incrementally through
 [`quick-xml`](https://docs.rs/quick-xml): each item is written and flushed
 as it is added, so generating a sitemap with millions of entries uses
 constant memory.

 ## Core types

 - [`NewsItem`] — one sitemap entry, built per call with [`NewsItemBuilder`].
 - [`SitemapWriter`] — owns the output sink and the document lifecycle:
   open root, append items, close root. Finalizing consumes the writer, so a
   closed document cannot be written to.
 - [`SitemapError`] — all failure modes; fatal and propagated, never retried.

 ## Getting started

 ```no_run
 use news_sitemap::{NewsItem, SitemapError, SitemapWriterBuilder};

 fn main() -> Result<(), SitemapError> {
     let mut writer = SitemapWriterBuilder::new().from_path("sitemap-news.xml")?;

     let item = NewsItem::builder()
         .loc("https://example.com/articles/rust-1-90")
         .name("Example Daily")
         .language("en")
         .title("Rust 1.90 released")
         .publication_timestamp(1700000000)
         .genres("PressRelease")
         .keywords(["rust", "release"])
         .build()?;

     writer.add_item(&item)?;
     writer.finish()?;

     Ok(())
 }
 ```

 Which produces:

 ```xml
 <?xml version="1.0" encoding="UTF-8"?>
 <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9" xmlns:news="http://www.google.com/schemas/sitemap-news/0.9">
   <url>
     <loc>https://example.com/articles/rust-1-90</loc>
     <news:news>
       <news:publication>
         <news:name>Example Daily</news:name>
         <news:language>en</news:language>
       </news:publication>
       <news:genres>PressRelease</news:genres>
       <news:publication_date>2023-11-14T22:13:20Z</news:publication_date>
       <news:title>Rust 1.90 released</news:title>
       <news:keywords>rust, release</news:keywords>
     </news:news>
   </url>
 </urlset>
 ```

 ## Validation

 Each item location must be a syntactically valid absolute URL (scheme and
 host); [`SitemapWriter::add_item`] rejects anything else before a single
 byte of that entry is written, so a validation failure never leaves a
 partial `<url>` element in the output.

 The writer assumes exclusive ownership of the destination path for its
 lifetime; concurrent writers to the same file would corrupt the document.

 ## License
 Licensed under either of

 -   Apache License, Version 2.0
     ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
 -   MIT license
     ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)

 at your option.
 */

/// Error types for sitemap generation
pub mod error;

/// Sitemap entry value and its builder
pub mod item;

/// Streaming sitemap document writer
pub mod writer;

#[doc(inline)]
pub use error::SitemapError;
#[doc(inline)]
pub use item::{NewsItem, NewsItemBuilder};
#[doc(inline)]
pub use writer::{SitemapWriter, SitemapWriterBuilder};
