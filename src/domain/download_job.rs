use std::path::{Path, PathBuf};

use serde::Serialize;

use super::Episode;

/// One entry of a batch handed to the external downloader
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DownloadJob {
    pub url: String,
    pub destination_directory: PathBuf,
    pub output_filename: String,
}

impl DownloadJob {
    pub fn from_episode(download_root: &Path, episode: &Episode) -> Self {
        Self {
            url: episode.media_link.clone(),
            destination_directory: download_root.join(&episode.subscription_name),
            output_filename: output_filename(episode),
        }
    }
}

/// Format: "#{number} {title}-{dd-mm-YYYY}.mp3"
fn output_filename(episode: &Episode) -> String {
    let title: String = episode
        .title
        .chars()
        .map(|c| match c {
            '/' | '\\' => '-',
            // A line break would start a new entry in the downloader's input file
            c if c.is_control() => ' ',
            c => c,
        })
        .collect();

    format!(
        "#{} {}-{}.mp3",
        episode.episode_number,
        title,
        episode.formatted_date()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn episode(number: u32, title: &str) -> Episode {
        Episode {
            subscription_name: "tech".to_string(),
            episode_number: number,
            title: title.to_string(),
            publish_date: NaiveDate::from_ymd_opt(2019, 2, 1).unwrap(),
            media_link: format!("https://cdn.example.com/{}.mp3", number),
        }
    }

    #[test]
    fn test_job_from_episode() {
        let job = DownloadJob::from_episode(Path::new("/home/user/Podcasts"), &episode(5, "Pilot"));

        assert_eq!(job.url, "https://cdn.example.com/5.mp3");
        assert_eq!(
            job.destination_directory,
            PathBuf::from("/home/user/Podcasts/tech")
        );
        assert_eq!(job.output_filename, "#5 Pilot-01-02-2019.mp3");
    }

    #[test]
    fn test_path_separators_in_title_are_replaced() {
        let job = DownloadJob::from_episode(Path::new("/tmp"), &episode(3, "AC/DC live"));
        assert_eq!(job.output_filename, "#3 AC-DC live-01-02-2019.mp3");
    }

    #[test]
    fn test_control_characters_in_title_are_replaced() {
        let job = DownloadJob::from_episode(
            Path::new("/tmp"),
            &episode(1, "Part one\nhttps://evil.example.com/x.sh\r\n  dir=/tmp/evil\t!"),
        );

        assert!(!job.output_filename.chars().any(char::is_control));
        assert_eq!(
            job.output_filename,
            "#1 Part one https:--evil.example.com-x.sh    dir=-tmp-evil !-01-02-2019.mp3"
        );
    }

    #[test]
    fn test_same_title_distinct_numbers_do_not_collide() {
        let root = Path::new("/tmp");
        let first = DownloadJob::from_episode(root, &episode(1, "Rerun"));
        let second = DownloadJob::from_episode(root, &episode(2, "Rerun"));

        assert_ne!(first.output_filename, second.output_filename);
    }
}
