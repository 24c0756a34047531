pub mod subscription;
pub mod entry;
pub mod episode;
pub mod snapshot;
pub mod download_job;

pub use subscription::Subscription;
pub use entry::{FeedEntry, RawLink, HTML_MIME_TYPE};
pub use episode::{Episode, DATE_FORMAT};
pub use snapshot::Snapshot;
pub use download_job::DownloadJob;
