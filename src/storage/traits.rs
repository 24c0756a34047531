use crate::domain::Snapshot;
use crate::errors::PodcatcherResult;

#[cfg_attr(test, mockall::automock)]
pub trait SubscriptionRegistry: Send + Sync {
    /// All subscription names, in registry order
    fn list_names(&self) -> Vec<String>;
    fn source_address(&self, name: &str) -> PodcatcherResult<String>;
}

#[cfg_attr(test, mockall::automock)]
pub trait SnapshotRepository: Send + Sync {
    /// Store a snapshot, replacing any previous one for the same subscription
    fn save(&self, snapshot: &Snapshot) -> PodcatcherResult<()>;
    fn load(&self, subscription_name: &str) -> PodcatcherResult<Option<Snapshot>>;
}
