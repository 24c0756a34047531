use chrono::NaiveDate;
use regex::{Regex, RegexBuilder};

use crate::errors::{PodcatcherError, PodcatcherResult};

/// Selection criteria exactly as the user supplied them
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    pub subscription_names: Vec<String>,
    pub latest_only: bool,
    pub exact_episode: Option<u32>,
    pub after_episode: Option<u32>,
    pub before_episode: Option<u32>,
    pub after_date: Option<NaiveDate>,
    pub before_date: Option<NaiveDate>,
    pub title_regex: Option<String>,
}

/// Validated selection criteria for one invocation.
///
/// Only obtainable through [`FilterCriteria::into_spec`], so every value
/// satisfies the option exclusivity rules and names known subscriptions.
#[derive(Debug, Clone)]
pub struct FilterSpec {
    subscription_names: Vec<String>,
    latest_only: bool,
    exact_episode: Option<u32>,
    after_episode: Option<u32>,
    before_episode: Option<u32>,
    after_date: Option<NaiveDate>,
    before_date: Option<NaiveDate>,
    title_regex: Option<Regex>,
}

impl FilterCriteria {
    /// Validate the criteria against the subscriptions known to the registry.
    ///
    /// `known_names` is in registry order; it becomes the selection when the
    /// user named no subscription.
    pub fn into_spec(self, known_names: &[String]) -> PodcatcherResult<FilterSpec> {
        self.check_option_conflicts()?;

        let title_regex = self
            .title_regex
            .as_deref()
            .map(compile_title_regex)
            .transpose()?;

        let subscription_names = resolve_subscription_names(self.subscription_names, known_names)?;

        Ok(FilterSpec {
            subscription_names,
            latest_only: self.latest_only,
            exact_episode: self.exact_episode,
            after_episode: self.after_episode,
            before_episode: self.before_episode,
            after_date: self.after_date,
            before_date: self.before_date,
            title_regex,
        })
    }

    fn check_option_conflicts(&self) -> PodcatcherResult<()> {
        if let (Some(before), Some(after)) = (self.before_date, self.after_date) {
            if before < after {
                return Err(PodcatcherError::FilterSpec(
                    "--before date can't be earlier than the --after date".to_string(),
                ));
            }
        }

        let episode_flags: Vec<&str> = [
            ("--exact-episode", self.exact_episode),
            ("--after-episode", self.after_episode),
            ("--before-episode", self.before_episode),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_some())
        .map(|(flag, _)| flag)
        .collect();

        if self.latest_only && !episode_flags.is_empty() {
            return Err(PodcatcherError::FilterSpec(format!(
                "--latest can't be combined with episode range flags ({})",
                episode_flags.join(", ")
            )));
        }

        if self.exact_episode.is_some() && episode_flags.len() > 1 {
            return Err(PodcatcherError::FilterSpec(format!(
                "--exact-episode can't be combined with {}",
                episode_flags[1..].join(" or ")
            )));
        }

        if let (Some(after), Some(before)) = (self.after_episode, self.before_episode) {
            if after > before {
                return Err(PodcatcherError::FilterSpec(format!(
                    "--after-episode ({}) can't be larger than --before-episode ({})",
                    after, before
                )));
            }
        }

        Ok(())
    }
}

/// Case-insensitive pattern that must match from the start of the title
fn compile_title_regex(pattern: &str) -> PodcatcherResult<Regex> {
    RegexBuilder::new(&format!("^(?:{})", pattern))
        .case_insensitive(true)
        .build()
        .map_err(|e| PodcatcherError::FilterSpec(format!("--regex '{}' is invalid: {}", pattern, e)))
}

fn resolve_subscription_names(
    requested: Vec<String>,
    known_names: &[String],
) -> PodcatcherResult<Vec<String>> {
    if requested.is_empty() {
        if known_names.is_empty() {
            return Err(PodcatcherError::Config(
                "The subscription registry has no podcasts".to_string(),
            ));
        }
        return Ok(known_names.to_vec());
    }

    let unknown: Vec<String> = requested
        .iter()
        .filter(|name| !known_names.contains(name))
        .cloned()
        .collect();

    if !unknown.is_empty() {
        return Err(PodcatcherError::UnknownSubscriptions(unknown));
    }

    // Keep the first occurrence of names given twice
    let mut names: Vec<String> = Vec::with_capacity(requested.len());
    for name in requested {
        if !names.contains(&name) {
            names.push(name);
        }
    }

    Ok(names)
}

impl FilterSpec {
    pub fn subscription_names(&self) -> &[String] {
        &self.subscription_names
    }

    pub fn latest_only(&self) -> bool {
        self.latest_only
    }

    /// Whether the episode number passes the exact/after/before episode filters
    pub fn accepts_episode_number(&self, number: u32) -> bool {
        if self.exact_episode.is_some_and(|exact| number != exact) {
            return false;
        }
        if self.after_episode.is_some_and(|after| number < after) {
            return false;
        }
        if self.before_episode.is_some_and(|before| number > before) {
            return false;
        }
        true
    }

    /// After is inclusive, before is exclusive of its boundary day
    pub fn accepts_date(&self, date: NaiveDate) -> bool {
        if self.after_date.is_some_and(|after| date < after) {
            return false;
        }
        if self.before_date.is_some_and(|before| date >= before) {
            return false;
        }
        true
    }

    pub fn accepts_title(&self, title: &str) -> bool {
        self.title_regex
            .as_ref()
            .map_or(true, |regex| regex.is_match(title))
    }
}
