use std::fs;

use news_sitemap::{NewsItem, SitemapError, SitemapWriterBuilder};
use quick_xml::Reader;
use quick_xml::events::Event;
use tempfile::tempdir;

fn sample_item(loc: &str) -> NewsItem {
    NewsItem::builder()
        .loc(loc)
        .name("Example")
        .language("en")
        .title("Hello")
        .publication_timestamp(1700000000)
        .build()
        .expect("valid item")
}

/// Parses the document, asserting well-formedness, and returns every
/// non-whitespace text node as `(enclosing element, text)` in document order.
fn collect_texts(xml: &str) -> Vec<(String, String)> {
    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<String> = Vec::new();
    let mut texts = Vec::new();

    loop {
        match reader.read_event().expect("well-formed XML") {
            Event::Start(e) => {
                stack.push(String::from_utf8(e.name().as_ref().to_vec()).unwrap());
            }
            Event::End(_) => {
                stack.pop();
            }
            Event::Text(t) => {
                let text = t.decode().unwrap().trim().to_string();
                if !text.is_empty() {
                    texts.push((stack.last().cloned().unwrap_or_default(), text));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    texts
}

fn count_elements(xml: &str, name: &str) -> usize {
    let mut reader = Reader::from_str(xml);
    let mut count = 0;

    loop {
        match reader.read_event().expect("well-formed XML") {
            Event::Start(e) if e.name().as_ref() == name.as_bytes() => count += 1,
            Event::Eof => break,
            _ => {}
        }
    }

    count
}

#[test]
fn end_to_end_single_item() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("sitemap-news.xml");

    let mut writer = SitemapWriterBuilder::new().from_path(&path).unwrap();
    writer.add_item(&sample_item("https://example.com/a")).unwrap();
    writer.finish().unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
    assert_eq!(count_elements(&content, "urlset"), 1);
    assert_eq!(count_elements(&content, "url"), 1);

    let texts = collect_texts(&content);
    assert!(texts.contains(&("loc".to_string(), "https://example.com/a".to_string())));
    assert!(texts.contains(&("news:name".to_string(), "Example".to_string())));
    assert!(texts.contains(&("news:language".to_string(), "en".to_string())));
    assert!(texts.contains(&("news:title".to_string(), "Hello".to_string())));
    assert!(texts.contains(&(
        "news:publication_date".to_string(),
        "2023-11-14T22:13:20Z".to_string()
    )));
}

#[test]
fn items_are_written_in_call_order() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("sitemap-news.xml");

    let mut writer = SitemapWriterBuilder::new().from_path(&path).unwrap();
    writer.add_item(&sample_item("https://example.com/a")).unwrap();
    writer.add_item(&sample_item("https://example.com/b")).unwrap();
    writer.add_item(&sample_item("https://example.com/c")).unwrap();
    writer.finish().unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(count_elements(&content, "url"), 3);

    let locs: Vec<String> = collect_texts(&content)
        .into_iter()
        .filter(|(element, _)| element == "loc")
        .map(|(_, text)| text)
        .collect();
    assert_eq!(
        locs,
        vec![
            "https://example.com/a",
            "https://example.com/b",
            "https://example.com/c"
        ]
    );
}

#[test]
fn invalid_location_appends_no_bytes() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("sitemap-news.xml");

    let mut writer = SitemapWriterBuilder::new().from_path(&path).unwrap();
    let size_before = fs::metadata(&path).unwrap().len();

    let result = writer.add_item(&sample_item("not a url"));
    assert!(matches!(
        result,
        Err(SitemapError::InvalidLocation(ref loc)) if loc == "not a url"
    ));

    let size_after = fs::metadata(&path).unwrap().len();
    assert_eq!(size_before, size_after);

    // the document is still usable after a rejected item
    writer.add_item(&sample_item("https://example.com/a")).unwrap();
    writer.finish().unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(count_elements(&content, "url"), 1);
}

#[test]
fn missing_parent_directory_creates_no_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing").join("sitemap-news.xml");

    let result = SitemapWriterBuilder::new().from_path(&path);
    assert!(matches!(result, Err(SitemapError::DirectoryNotFound(_))));
    assert!(!path.exists());
}

#[test]
fn destination_file_exists_before_first_item() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("sitemap-news.xml");

    let writer = SitemapWriterBuilder::new().from_path(&path).unwrap();
    assert!(path.exists());
    assert!(fs::metadata(&path).unwrap().len() > 0);

    writer.finish().unwrap();
}

#[test]
fn pre_existing_file_is_replaced() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("sitemap-news.xml");
    fs::write(&path, "stale content that is not XML").unwrap();

    let mut writer = SitemapWriterBuilder::new().from_path(&path).unwrap();
    writer.add_item(&sample_item("https://example.com/a")).unwrap();
    writer.finish().unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
    assert!(!content.contains("stale content"));
}

#[test]
fn optional_elements_present_iff_non_empty() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("sitemap-news.xml");

    let plain = sample_item("https://example.com/a");
    let tagged = NewsItem::builder()
        .loc("https://example.com/b")
        .name("Example")
        .language("en")
        .title("Hello")
        .publication_timestamp(1700000000)
        .genres("UserGenerated")
        .keywords(["a", "b", "c"])
        .build()
        .unwrap();

    let mut writer = SitemapWriterBuilder::new().from_path(&path).unwrap();
    writer.add_item(&plain).unwrap();
    writer.add_item(&tagged).unwrap();
    writer.finish().unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(count_elements(&content, "news:genres"), 1);
    assert_eq!(count_elements(&content, "news:keywords"), 1);

    let texts = collect_texts(&content);
    assert!(texts.contains(&("news:genres".to_string(), "UserGenerated".to_string())));
    assert!(texts.contains(&("news:keywords".to_string(), "a, b, c".to_string())));
}
