pub mod traits;
pub mod registry_file;
pub mod sqlite;

pub use traits::{SnapshotRepository, SubscriptionRegistry};
pub use registry_file::FileSubscriptionRegistry;
pub use sqlite::{SqliteSnapshotRepository, SqliteStorage};
