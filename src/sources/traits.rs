use crate::errors::PodcatcherResult;

#[cfg_attr(test, mockall::automock)]
pub trait FeedFetcher: Send + Sync {
    /// Download the raw feed document at `url`
    fn fetch(&self, url: &str) -> PodcatcherResult<Vec<u8>>;
}
