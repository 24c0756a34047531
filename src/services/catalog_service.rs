use crate::domain::FeedEntry;
use crate::errors::{PodcatcherError, PodcatcherResult};
use crate::selection::{select_episodes, FilterSpec, SubscriptionEpisodes};
use crate::sources::parse_entries;
use crate::storage::traits::SnapshotRepository;

/// Reads cached feeds and runs episode selection over them
pub struct CatalogService<S: SnapshotRepository> {
    snapshots: S,
}

impl<S: SnapshotRepository> CatalogService<S> {
    pub fn new(snapshots: S) -> Self {
        Self { snapshots }
    }

    /// Entries of the cached feed, newest-first as the feed lists them
    pub fn read_cached_entries(&self, name: &str) -> PodcatcherResult<Vec<FeedEntry>> {
        let snapshot = self
            .snapshots
            .load(name)?
            .ok_or_else(|| PodcatcherError::NotCached(name.to_string()))?;

        parse_entries(&snapshot.document)
    }

    /// Select episodes for every subscription in `spec`, in the order it names them.
    ///
    /// All entry lists are read before selection starts; any cache miss or
    /// selection error fails the whole run.
    pub fn select(&self, spec: &FilterSpec) -> PodcatcherResult<Vec<SubscriptionEpisodes>> {
        let mut feeds = Vec::with_capacity(spec.subscription_names().len());
        for name in spec.subscription_names() {
            feeds.push((name.as_str(), self.read_cached_entries(name)?));
        }

        let mut results = Vec::with_capacity(feeds.len());
        for (name, entries) in &feeds {
            let selection = select_episodes(name, entries, spec)?;
            tracing::debug!(
                subscription = %name,
                entries = entries.len(),
                selected = selection.episodes.len(),
                "Selected episodes"
            );
            results.push(selection);
        }

        Ok(results)
    }
}
