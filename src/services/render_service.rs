use std::io::Write;

use crate::domain::Episode;
use crate::errors::PodcatcherResult;
use crate::selection::SubscriptionEpisodes;

/// Receives the selected episodes of one subscription at a time
pub trait Renderer {
    fn render(&mut self, subscription_name: &str, episodes: &[Episode]) -> PodcatcherResult<()>;
}

/// Render each subscription's selection, in order, one call per subscription
pub fn render_all<R: Renderer + ?Sized>(
    renderer: &mut R,
    selections: &[SubscriptionEpisodes],
) -> PodcatcherResult<()> {
    for selection in selections {
        renderer.render(&selection.subscription_name, &selection.episodes)?;
    }
    Ok(())
}

/// Human-readable listing
pub struct TextRenderer<W: Write> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, subscription_name: &str, episodes: &[Episode]) -> PodcatcherResult<()> {
        writeln!(self.out)?;
        writeln!(self.out, "Showing episodes for {}:", subscription_name)?;
        for episode in episodes {
            writeln!(self.out, "{}", episode.format())?;
        }
        Ok(())
    }
}

/// One JSON object per episode and line
pub struct JsonRenderer<W: Write> {
    out: W,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for JsonRenderer<W> {
    fn render(&mut self, _subscription_name: &str, episodes: &[Episode]) -> PodcatcherResult<()> {
        for episode in episodes {
            serde_json::to_writer(&mut self.out, episode)?;
            writeln!(self.out)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn episode(number: u32, title: &str, day: u32) -> Episode {
        Episode {
            subscription_name: "tech".to_string(),
            episode_number: number,
            title: title.to_string(),
            publish_date: NaiveDate::from_ymd_opt(2019, 1, day).unwrap(),
            media_link: format!("https://cdn.example.com/{}.mp3", number),
        }
    }

    #[test]
    fn test_text_renderer_header_and_lines() {
        let mut renderer = TextRenderer::new(Vec::new());
        renderer
            .render("tech", &[episode(1, "Pilot", 5), episode(4, "Finale", 26)])
            .unwrap();

        let output = String::from_utf8(renderer.into_inner()).unwrap();
        assert_eq!(
            output,
            "\nShowing episodes for tech:\nEpisode #1: 05-01-2019 Pilot\nEpisode #4: 26-01-2019 Finale\n"
        );
    }

    #[test]
    fn test_text_renderer_empty_selection_still_shows_header() {
        let mut renderer = TextRenderer::new(Vec::new());
        renderer.render("tech", &[]).unwrap();

        let output = String::from_utf8(renderer.into_inner()).unwrap();
        assert_eq!(output, "\nShowing episodes for tech:\n");
    }

    #[test]
    fn test_render_all_keeps_subscription_order() {
        let selections = vec![
            SubscriptionEpisodes {
                subscription_name: "zeta".to_string(),
                episodes: vec![episode(2, "Z", 3)],
            },
            SubscriptionEpisodes {
                subscription_name: "alpha".to_string(),
                episodes: vec![],
            },
        ];

        let mut renderer = TextRenderer::new(Vec::new());
        render_all(&mut renderer, &selections).unwrap();

        let output = String::from_utf8(renderer.into_inner()).unwrap();
        let zeta = output.find("Showing episodes for zeta:").unwrap();
        let alpha = output.find("Showing episodes for alpha:").unwrap();
        assert!(zeta < alpha);
    }

    #[test]
    fn test_json_renderer_one_object_per_line() {
        let mut renderer = JsonRenderer::new(Vec::new());
        renderer
            .render("tech", &[episode(1, "Pilot", 5), episode(2, "Second", 12)])
            .unwrap();

        let output = String::from_utf8(renderer.into_inner()).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["episode_number"], 1);
        assert_eq!(first["subscription_name"], "tech");
        assert_eq!(first["publish_date"], "2019-01-05");
    }
}
