use feed_rs::model::Entry;
use feed_rs::parser;

use crate::domain::{FeedEntry, RawLink, HTML_MIME_TYPE};
use crate::errors::{PodcatcherError, PodcatcherResult};

const ENCLOSURE_REL: &str = "enclosure";

/// Parse a feed document into entries, keeping the order the document lists them
pub fn parse_entries(bytes: &[u8]) -> PodcatcherResult<Vec<FeedEntry>> {
    let parsed = parser::parse(bytes).map_err(|e| PodcatcherError::FeedParse(e.to_string()))?;

    parsed.entries.into_iter().map(entry_from_feed).collect()
}

fn entry_from_feed(entry: Entry) -> PodcatcherResult<FeedEntry> {
    let title = entry.title.map(|t| t.content).unwrap_or_default();

    let published_at = entry.published.or(entry.updated).ok_or_else(|| {
        PodcatcherError::FeedParse(format!("entry \"{}\" has no publish date", title))
    })?;

    let mut raw_links: Vec<RawLink> = entry
        .links
        .into_iter()
        .map(|link| {
            // Untyped links are the entry's web page unless marked as an enclosure
            let mime_type = link.media_type.unwrap_or_else(|| {
                if link.rel.as_deref() == Some(ENCLOSURE_REL) {
                    String::new()
                } else {
                    HTML_MIME_TYPE.to_string()
                }
            });
            RawLink::new(link.href, mime_type)
        })
        .collect();

    // RSS enclosures are reported as media content rather than links
    raw_links.extend(entry.media.into_iter().flat_map(|media| {
        media.content.into_iter().filter_map(|content| {
            let url = content.url?;
            let mime_type = content
                .content_type
                .map(|m| m.to_string())
                .unwrap_or_default();
            Some(RawLink::new(url.to_string(), mime_type))
        })
    }));

    Ok(FeedEntry::new(title, published_at).with_links(raw_links))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    const SAMPLE_RSS: &[u8] = br#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>Rustacean Station</title>
    <link>https://rustacean-station.org/</link>
    <description>Come journey with us into the weird, wonderful, and wily world of Rust.</description>
    <item>
      <title>Rust 1.75.0</title>
      <link>https://rustacean-station.org/episode/rust-1.75.0/</link>
      <enclosure url="https://cdn.example.com/rust-1.75.0.mp3" length="1234" type="audio/mpeg"/>
      <pubDate>Thu, 28 Dec 2023 18:00:00 +0000</pubDate>
      <guid>https://rustacean-station.org/episode/rust-1.75.0/</guid>
    </item>
    <item>
      <title>Rust 1.74.0</title>
      <link>https://rustacean-station.org/episode/rust-1.74.0/</link>
      <pubDate>Thu, 16 Nov 2023 18:00:00 +0000</pubDate>
      <guid>https://rustacean-station.org/episode/rust-1.74.0/</guid>
    </item>
  </channel>
</rss>"#;

    const SAMPLE_ATOM: &[u8] = br#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title>Example Cast</title>
  <id>https://example.com/feed.atom</id>
  <updated>2024-01-15T12:00:00Z</updated>
  <entry>
    <title>Understanding WebAssembly</title>
    <link href="https://example.com/posts/wasm-intro"/>
    <link rel="enclosure" type="audio/ogg" href="https://cdn.example.com/wasm-intro.ogg"/>
    <id>https://example.com/posts/wasm-intro</id>
    <updated>2024-01-15T12:00:00Z</updated>
  </entry>
</feed>"#;

    #[test]
    fn test_rss_entries_keep_document_order() {
        let entries = parse_entries(SAMPLE_RSS).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].title, "Rust 1.75.0");
        assert_eq!(entries[1].title, "Rust 1.74.0");
        assert_eq!(
            entries[0].published_at.date_naive(),
            NaiveDate::from_ymd_opt(2023, 12, 28).unwrap()
        );
    }

    #[test]
    fn test_rss_enclosure_is_media_link() {
        let entries = parse_entries(SAMPLE_RSS).unwrap();

        assert!(entries[0].raw_links[0].is_html());
        assert_eq!(
            entries[0].media_link(),
            Some("https://cdn.example.com/rust-1.75.0.mp3")
        );
    }

    #[test]
    fn test_rss_item_without_enclosure_has_no_media_link() {
        let entries = parse_entries(SAMPLE_RSS).unwrap();
        assert_eq!(entries[1].media_link(), None);
    }

    #[test]
    fn test_atom_enclosure_link() {
        let entries = parse_entries(SAMPLE_ATOM).unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(
            entries[0].media_link(),
            Some("https://cdn.example.com/wasm-intro.ogg")
        );
    }

    #[test]
    fn test_invalid_document_rejected() {
        let result = parse_entries(b"this is not a feed");
        assert!(matches!(result, Err(PodcatcherError::FeedParse(_))));
    }
}
