use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Day-month-year, used for CLI dates, listings and file names
pub const DATE_FORMAT: &str = "%d-%m-%Y";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    pub subscription_name: String,
    pub episode_number: u32,
    pub title: String,
    pub publish_date: NaiveDate,
    pub media_link: String,
}

impl Episode {
    pub fn formatted_date(&self) -> String {
        self.publish_date.format(DATE_FORMAT).to_string()
    }

    /// Format: "Episode #{number}: {dd-mm-YYYY} {title}"
    pub fn format(&self) -> String {
        format!(
            "Episode #{}: {} {}",
            self.episode_number,
            self.formatted_date(),
            self.title
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_episode_format() {
        let episode = Episode {
            subscription_name: "tech".to_string(),
            episode_number: 12,
            title: "Rust in Production".to_string(),
            publish_date: NaiveDate::from_ymd_opt(2019, 3, 1).unwrap(),
            media_link: "https://cdn.example.com/12.mp3".to_string(),
        };

        assert_eq!(episode.formatted_date(), "01-03-2019");
        assert_eq!(episode.format(), "Episode #12: 01-03-2019 Rust in Production");
    }
}
