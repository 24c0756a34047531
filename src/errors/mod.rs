use thiserror::Error;

#[derive(Error, Debug)]
pub enum PodcatcherError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Podcasts not defined in the subscription registry: {}", .0.join(", "))]
    UnknownSubscriptions(Vec<String>),

    // Filter errors
    #[error("Invalid filter: {0}")]
    FilterSpec(String),

    // Cache errors
    #[error("No cached feed for '{0}', run with --update-cache first")]
    NotCached(String),

    #[error("Failed to cache {0} feed(s)")]
    CacheUpdate(usize),

    // Feed data errors
    #[error("Episode #{episode_number} \"{title}\" of {subscription} has no downloadable link")]
    LinkResolution {
        subscription: String,
        episode_number: u32,
        title: String,
    },

    #[error("Feed parsing failed: {0}")]
    FeedParse(String),

    // Network errors
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    // Storage errors
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    // Downloader errors
    #[error("Downloader failed: {0}")]
    Downloader(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type PodcatcherResult<T> = Result<T, PodcatcherError>;
