pub mod catalog_service;
pub mod cache_service;
pub mod render_service;
pub mod download_service;

pub use catalog_service::CatalogService;
pub use cache_service::{CacheService, CacheUpdateResult};
pub use render_service::{render_all, JsonRenderer, Renderer, TextRenderer};
pub use download_service::{submit_downloads, Aria2Downloader, Downloader};
