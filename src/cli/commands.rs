use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{ArgGroup, Parser};

use crate::domain::DATE_FORMAT;
use crate::selection::FilterCriteria;

const EXAMPLES: &str = "Examples:
    # update local versions of remote feeds
    podcatcher --update-cache

    # list the latest episode for all podcasts
    podcatcher --latest

    # list the latest episode for podcast1 and podcast2
    podcatcher --latest podcast1 podcast2

    # list episodes from all podcasts published on or after 01-01-2019
    podcatcher --after 01-01-2019

    # download episodes published after 01-01-2019 from podcast1 and podcast2
    podcatcher --download --after 01-01-2019 podcast1 podcast2

    # download episode 5 from podcast3
    podcatcher --download --exact-episode 5 podcast3

    # download the first ten episodes from podcast4
    podcatcher --download --before-episode 10 podcast4

    # list all episodes whose title contains 'apple'
    podcatcher --list --regex '.*apple'";

#[derive(Parser, Debug)]
#[command(name = "podcatcher")]
#[command(about = "List and download podcasts")]
#[command(version)]
#[command(after_help = EXAMPLES)]
#[command(group(ArgGroup::new("action").args(["list", "download", "update_cache"])))]
#[command(group(ArgGroup::new("selection").args(["all", "latest"])))]
pub struct Cli {
    /// List the selected episodes (default)
    #[arg(long)]
    pub list: bool,

    /// Download the selected episodes with aria2c
    #[arg(long)]
    pub download: bool,

    /// Refresh the local copies of the remote feeds
    #[arg(long)]
    pub update_cache: bool,

    /// Consider every episode (default)
    #[arg(long)]
    pub all: bool,

    /// Only the newest episode of each podcast
    #[arg(long)]
    pub latest: bool,

    /// Keep episodes whose title matches this regex from its start, ignoring case
    #[arg(long, value_name = "PATTERN")]
    pub regex: Option<String>,

    /// Episodes published on or after this date (DD-MM-YYYY)
    #[arg(long, value_name = "DATE", value_parser = parse_date)]
    pub after: Option<NaiveDate>,

    /// Episodes published before this date (DD-MM-YYYY)
    #[arg(long, value_name = "DATE", value_parser = parse_date)]
    pub before: Option<NaiveDate>,

    /// Only the episode carrying this number
    #[arg(long, value_name = "N")]
    pub exact_episode: Option<u32>,

    /// Only episodes numbered N or higher
    #[arg(long, value_name = "N")]
    pub after_episode: Option<u32>,

    /// Only episodes numbered N or lower
    #[arg(long, value_name = "N")]
    pub before_episode: Option<u32>,

    /// Path to the subscription registry [default: ~/.config/podcatcher/urls]
    #[arg(long, value_name = "PATH", env = "PODCATCHER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print listed episodes as JSON lines
    #[arg(long)]
    pub json: bool,

    /// Podcast names, as defined in the registry, to apply the action to
    pub podcast_names: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    List,
    Download,
    UpdateCache,
}

impl Cli {
    pub fn action(&self) -> Action {
        if self.download {
            Action::Download
        } else if self.update_cache {
            Action::UpdateCache
        } else {
            Action::List
        }
    }

    pub fn filter_criteria(&self) -> FilterCriteria {
        FilterCriteria {
            subscription_names: self.podcast_names.clone(),
            latest_only: self.latest,
            exact_episode: self.exact_episode,
            after_episode: self.after_episode,
            before_episode: self.before_episode,
            after_date: self.after,
            before_date: self.before,
            title_regex: self.regex.clone(),
        }
    }
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|e| format!("expected a DD-MM-YYYY date: {}", e))
}
