pub mod filter;
pub mod engine;

pub use filter::{FilterCriteria, FilterSpec};
pub use engine::{select_episodes, SubscriptionEpisodes};
