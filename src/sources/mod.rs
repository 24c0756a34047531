pub mod traits;
pub mod http;
pub mod parser;

pub use traits::FeedFetcher;
pub use http::HttpFeedFetcher;
pub use parser::parse_entries;
