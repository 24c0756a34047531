use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::domain::DownloadJob;
use crate::errors::{PodcatcherError, PodcatcherResult};
use crate::selection::SubscriptionEpisodes;

/// Hands a batch of jobs to an external download manager
#[cfg_attr(test, mockall::automock)]
pub trait Downloader {
    fn submit_batch(&self, jobs: &[DownloadJob]) -> PodcatcherResult<()>;
}

/// Jobs for every selected episode, subscriptions outer and episode numbers inner
pub fn build_jobs(selections: &[SubscriptionEpisodes], download_root: &Path) -> Vec<DownloadJob> {
    selections
        .iter()
        .flat_map(|selection| selection.episodes.iter())
        .map(|episode| DownloadJob::from_episode(download_root, episode))
        .collect()
}

/// Build the batch for `selections` and hand it to `downloader` in one call
pub fn submit_downloads<D: Downloader + ?Sized>(
    downloader: &D,
    selections: &[SubscriptionEpisodes],
    download_root: &Path,
) -> PodcatcherResult<usize> {
    let jobs = build_jobs(selections, download_root);
    downloader.submit_batch(&jobs)?;
    Ok(jobs.len())
}

/// aria2 input file: the URL followed by indented per-download options
pub fn aria2_input(jobs: &[DownloadJob]) -> String {
    let mut input = String::new();
    for job in jobs {
        input.push_str(&job.url);
        input.push('\n');
        input.push_str(&format!("  dir={}\n", job.destination_directory.display()));
        input.push_str(&format!("  out={}\n", job.output_filename));
    }
    input
}

pub struct Aria2Downloader {
    program: String,
    input_path: PathBuf,
}

impl Aria2Downloader {
    pub fn new(program: impl Into<String>, input_path: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            input_path: input_path.into(),
        }
    }

    fn arguments(&self) -> Vec<String> {
        vec![
            "--max-concurrent-downloads=3".to_string(),
            "--continue=true".to_string(),
            "--check-integrity=true".to_string(),
            "--split=5".to_string(),
            format!("--input-file={}", self.input_path.display()),
            "--deferred-input=true".to_string(),
            "--file-allocation=falloc".to_string(),
        ]
    }
}

impl Downloader for Aria2Downloader {
    /// Writes the input file and starts the downloader without waiting for it
    fn submit_batch(&self, jobs: &[DownloadJob]) -> PodcatcherResult<()> {
        if jobs.is_empty() {
            tracing::info!("No episodes to download");
            return Ok(());
        }

        if let Some(parent) = self.input_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.input_path, aria2_input(jobs))?;

        let child = Command::new(&self.program)
            .args(self.arguments())
            .stdin(Stdio::null())
            .spawn()
            .map_err(|e| {
                PodcatcherError::Downloader(format!("could not start {}: {}", self.program, e))
            })?;

        tracing::info!(
            program = %self.program,
            pid = child.id(),
            jobs = jobs.len(),
            "Started downloader"
        );
        Ok(())
    }
}
