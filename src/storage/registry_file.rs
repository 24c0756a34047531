//! Subscription registry backed by a small CSV file:
//!
//! ```text
//! Name,url
//! rustacean,https://rustacean-station.org/podcast.rss
//! "Rust, in Production",https://example.com/rip.xml
//! ```
//!
//! Either field may be double-quoted, with `""` standing for a literal quote.

use std::path::Path;

use url::Url;

use crate::domain::Subscription;
use crate::errors::{PodcatcherError, PodcatcherResult};
use crate::storage::traits::SubscriptionRegistry;

#[derive(Debug, Clone, Default)]
pub struct FileSubscriptionRegistry {
    subscriptions: Vec<Subscription>,
}

impl FileSubscriptionRegistry {
    pub fn load<P: AsRef<Path>>(path: P) -> PodcatcherResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(PodcatcherError::Config(format!(
                "Could not find the subscription registry at {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let registry = Self::parse(&content)?;

        tracing::debug!(
            path = %path.display(),
            subscriptions = registry.subscriptions.len(),
            "Loaded subscription registry"
        );
        Ok(registry)
    }

    pub fn parse(content: &str) -> PodcatcherResult<Self> {
        let mut subscriptions: Vec<Subscription> = Vec::new();

        for (index, raw_line) in content.lines().enumerate() {
            let line_number = index + 1;
            let line = raw_line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if subscriptions.is_empty() && is_header(line) {
                continue;
            }

            let (name, address) = split_record(line).ok_or_else(|| {
                PodcatcherError::Config(format!(
                    "Registry line {}: expected 'name,url', got '{}'",
                    line_number, line
                ))
            })?;
            let name = name.as_str();
            let address = address.as_str();

            if name.is_empty() {
                return Err(PodcatcherError::Config(format!(
                    "Registry line {}: podcast name is empty",
                    line_number
                )));
            }

            Url::parse(address).map_err(|e| {
                PodcatcherError::Config(format!(
                    "Registry line {}: invalid url '{}' for {}: {}",
                    line_number, address, name, e
                ))
            })?;

            if subscriptions.iter().any(|s| s.name == name) {
                return Err(PodcatcherError::Config(format!(
                    "Registry line {}: podcast '{}' is defined more than once",
                    line_number, name
                )));
            }

            subscriptions.push(Subscription::new(name, address));
        }

        Ok(Self { subscriptions })
    }
}

/// Split a `name,url` record, unquoting either field
fn split_record(line: &str) -> Option<(String, String)> {
    let (name, rest) = read_field(line)?;
    let rest = rest.trim_start().strip_prefix(',')?;
    let (address, rest) = read_field(rest)?;
    if !rest.trim().is_empty() {
        return None;
    }
    Some((name, address))
}

/// Read one field up to the next separator, returning it with the unread rest
fn read_field(input: &str) -> Option<(String, &str)> {
    let input = input.trim_start();
    let Some(quoted) = input.strip_prefix('"') else {
        let end = input.find(',').unwrap_or(input.len());
        return Some((input[..end].trim().to_string(), &input[end..]));
    };

    let mut field = String::new();
    let mut chars = quoted.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if c != '"' {
            field.push(c);
            continue;
        }
        if let Some((_, '"')) = chars.peek() {
            chars.next();
            field.push('"');
            continue;
        }
        return Some((field, &quoted[i + 1..]));
    }

    // Unterminated quote
    None
}

fn is_header(line: &str) -> bool {
    split_record(line).map_or(false, |(name, address)| {
        name.eq_ignore_ascii_case("name") && address.eq_ignore_ascii_case("url")
    })
}

impl SubscriptionRegistry for FileSubscriptionRegistry {
    fn list_names(&self) -> Vec<String> {
        self.subscriptions.iter().map(|s| s.name.clone()).collect()
    }

    fn source_address(&self, name: &str) -> PodcatcherResult<String> {
        self.subscriptions
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.source_address.clone())
            .ok_or_else(|| PodcatcherError::UnknownSubscriptions(vec![name.to_string()]))
    }
}
