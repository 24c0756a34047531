use crate::domain::Snapshot;
use crate::errors::{PodcatcherError, PodcatcherResult};
use crate::storage::sqlite::SqliteStorage;
use crate::storage::traits::SnapshotRepository;

pub struct SqliteSnapshotRepository {
    storage: SqliteStorage,
}

impl SqliteSnapshotRepository {
    pub fn new(storage: SqliteStorage) -> Self {
        Self { storage }
    }
}

impl SnapshotRepository for SqliteSnapshotRepository {
    fn save(&self, snapshot: &Snapshot) -> PodcatcherResult<()> {
        let conn = self.storage.connection()?;
        conn.execute(
            "INSERT INTO snapshots (subscription, source_address, document, fetched_at)
             VALUES (?1, ?2, ?3, datetime('now'))
             ON CONFLICT(subscription) DO UPDATE SET
                source_address = excluded.source_address,
                document = excluded.document,
                fetched_at = excluded.fetched_at",
            (
                &snapshot.subscription_name,
                &snapshot.source_address,
                &snapshot.document,
            ),
        )?;

        tracing::debug!(
            subscription = %snapshot.subscription_name,
            bytes = snapshot.document.len(),
            "Stored feed snapshot"
        );
        Ok(())
    }

    fn load(&self, subscription_name: &str) -> PodcatcherResult<Option<Snapshot>> {
        let conn = self.storage.connection()?;
        let mut stmt = conn.prepare(
            "SELECT subscription, source_address, document, fetched_at FROM snapshots WHERE subscription = ?1",
        )?;

        let snapshot = stmt.query_row([subscription_name], |row| {
            Ok(Snapshot {
                subscription_name: row.get(0)?,
                source_address: row.get(1)?,
                document: row.get(2)?,
                fetched_at: row.get(3)?,
            })
        });

        match snapshot {
            Ok(s) => Ok(Some(s)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(PodcatcherError::from(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_repo() -> SqliteSnapshotRepository {
        let storage = SqliteStorage::in_memory().unwrap();
        SqliteSnapshotRepository::new(storage)
    }

    fn snapshot(name: &str, document: &[u8]) -> Snapshot {
        Snapshot::new(
            name.to_string(),
            format!("https://example.com/{}.xml", name),
            document.to_vec(),
        )
    }

    #[test]
    fn test_save_and_load_snapshot() {
        let repo = setup_repo();
        repo.save(&snapshot("tech", b"<rss/>")).unwrap();

        let loaded = repo.load("tech").unwrap().unwrap();
        assert_eq!(loaded.subscription_name, "tech");
        assert_eq!(loaded.source_address, "https://example.com/tech.xml");
        assert_eq!(loaded.document, b"<rss/>");
        assert!(loaded.fetched_at.is_some());
    }

    #[test]
    fn test_load_missing_snapshot() {
        let repo = setup_repo();
        assert!(repo.load("tech").unwrap().is_none());
    }

    #[test]
    fn test_save_replaces_previous_snapshot() {
        let repo = setup_repo();
        repo.save(&snapshot("tech", b"old")).unwrap();
        repo.save(&snapshot("tech", b"new")).unwrap();

        let loaded = repo.load("tech").unwrap().unwrap();
        assert_eq!(loaded.document, b"new");
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let repo = setup_repo();
        repo.save(&snapshot("Tech", b"<rss/>")).unwrap();

        assert!(repo.load("tech").unwrap().is_none());
        assert!(repo.load("Tech").unwrap().is_some());
    }
}
