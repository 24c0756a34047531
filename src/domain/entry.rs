use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Media type of links that point at a web page rather than the episode audio
pub const HTML_MIME_TYPE: &str = "text/html";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawLink {
    pub href: String,
    pub mime_type: String,
}

impl RawLink {
    pub fn new(href: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            mime_type: mime_type.into(),
        }
    }

    pub fn is_html(&self) -> bool {
        self.mime_type.eq_ignore_ascii_case(HTML_MIME_TYPE)
    }
}

/// A single item of a parsed feed, in the order the feed document lists it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedEntry {
    pub title: String,
    pub published_at: DateTime<Utc>,
    pub raw_links: Vec<RawLink>,
}

impl FeedEntry {
    pub fn new(title: impl Into<String>, published_at: DateTime<Utc>) -> Self {
        Self {
            title: title.into(),
            published_at,
            raw_links: Vec::new(),
        }
    }

    pub fn with_links(mut self, raw_links: Vec<RawLink>) -> Self {
        self.raw_links = raw_links;
        self
    }

    /// First link that is not an HTML page, in document order
    pub fn media_link(&self) -> Option<&str> {
        self.raw_links
            .iter()
            .find(|link| !link.is_html())
            .map(|link| link.href.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn entry() -> FeedEntry {
        FeedEntry::new("Episode", Utc.with_ymd_and_hms(2019, 1, 1, 12, 0, 0).unwrap())
    }

    #[test]
    fn test_media_link_skips_html_links() {
        let entry = entry().with_links(vec![
            RawLink::new("https://example.com/ep1", "text/html"),
            RawLink::new("https://cdn.example.com/ep1.mp3", "audio/mpeg"),
            RawLink::new("https://cdn.example.com/ep1.ogg", "audio/ogg"),
        ]);

        assert_eq!(entry.media_link(), Some("https://cdn.example.com/ep1.mp3"));
    }

    #[test]
    fn test_media_link_absent_when_only_html() {
        let entry = entry().with_links(vec![
            RawLink::new("https://example.com/ep1", "text/html"),
            RawLink::new("https://example.com/ep1#comments", "TEXT/HTML"),
        ]);

        assert_eq!(entry.media_link(), None);
    }

    #[test]
    fn test_media_link_absent_without_links() {
        assert_eq!(entry().media_link(), None);
    }
}
