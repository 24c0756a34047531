use crate::domain::Snapshot;
use crate::errors::PodcatcherResult;
use crate::sources::{parse_entries, FeedFetcher};
use crate::storage::traits::{SnapshotRepository, SubscriptionRegistry};

pub struct CacheUpdateResult {
    pub updated: Vec<(String, usize)>, // (subscription, entry count)
    pub failed: Vec<(String, String)>, // (subscription, error_message)
}

/// Refreshes local feed snapshots from their source addresses
pub struct CacheService<R: SubscriptionRegistry, S: SnapshotRepository, F: FeedFetcher> {
    registry: R,
    snapshots: S,
    fetcher: F,
}

impl<R: SubscriptionRegistry, S: SnapshotRepository, F: FeedFetcher> CacheService<R, S, F> {
    pub fn new(registry: R, snapshots: S, fetcher: F) -> Self {
        Self {
            registry,
            snapshots,
            fetcher,
        }
    }

    /// Fetch and store a single subscription's feed, returning its entry count
    pub fn update_one(&self, name: &str) -> PodcatcherResult<usize> {
        let source_address = self.registry.source_address(name)?;
        let document = self.fetcher.fetch(&source_address)?;

        // Never cache a document that can't be read back
        let entries = parse_entries(&document)?;

        self.snapshots
            .save(&Snapshot::new(name.to_string(), source_address, document))?;

        Ok(entries.len())
    }

    /// Refresh every named subscription; a failure does not stop the others
    pub fn update(&self, names: &[String]) -> CacheUpdateResult {
        let mut result = CacheUpdateResult {
            updated: Vec::new(),
            failed: Vec::new(),
        };

        for name in names {
            match self.update_one(name) {
                Ok(count) => {
                    tracing::info!(subscription = %name, entries = count, "Feed cached");
                    result.updated.push((name.clone(), count));
                }
                Err(e) => {
                    tracing::warn!(subscription = %name, error = %e, "Failed to cache feed");
                    result.failed.push((name.clone(), e.to_string()));
                }
            }
        }

        result
    }
}
