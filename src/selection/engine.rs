//! Episode selection: numbering, filtering and link resolution for the entries
//! of one subscription.
//!
//! Entries are expected newest-first, as feeds list them. Episode numbers count
//! from the oldest entry, so the newest of `N` entries is episode `N`.

use serde::Serialize;

use crate::domain::{Episode, FeedEntry};
use crate::errors::{PodcatcherError, PodcatcherResult};
use crate::selection::FilterSpec;

/// The selected episodes of one subscription, ascending by episode number
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubscriptionEpisodes {
    pub subscription_name: String,
    pub episodes: Vec<Episode>,
}

/// Select the episodes of `subscription_name` that pass `spec`.
///
/// Pure: the result depends only on `entries` and `spec`. An entry that passes
/// every filter but carries no non-HTML link fails the whole selection.
pub fn select_episodes(
    subscription_name: &str,
    entries: &[FeedEntry],
    spec: &FilterSpec,
) -> PodcatcherResult<SubscriptionEpisodes> {
    let total = entries.len();
    let mut episodes = Vec::new();

    for (position, entry) in entries.iter().enumerate() {
        // Only the newest entry is ever looked at in latest mode
        if spec.latest_only() && position > 0 {
            break;
        }

        let episode_number = episode_number(total, position);
        let publish_date = entry.published_at.date_naive();

        if !spec.accepts_episode_number(episode_number)
            || !spec.accepts_date(publish_date)
            || !spec.accepts_title(&entry.title)
        {
            continue;
        }

        let media_link = entry
            .media_link()
            .ok_or_else(|| PodcatcherError::LinkResolution {
                subscription: subscription_name.to_string(),
                episode_number,
                title: entry.title.clone(),
            })?;

        episodes.push(Episode {
            subscription_name: subscription_name.to_string(),
            episode_number,
            title: entry.title.clone(),
            publish_date,
            media_link: media_link.to_string(),
        });
    }

    // Walked newest-first; present oldest-first
    episodes.reverse();

    Ok(SubscriptionEpisodes {
        subscription_name: subscription_name.to_string(),
        episodes,
    })
}

fn episode_number(total: usize, position: usize) -> u32 {
    u32::try_from(total - position).unwrap_or(u32::MAX)
}
