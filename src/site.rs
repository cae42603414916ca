//! Static site data: show metadata and the episode catalog.
//!
//! The catalog is embedded at build time from `assets/episodes.json` so the
//! site ships as a fully static bundle with no fetch at runtime.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::utils::slugify;

pub struct PodcastMeta {
    pub title: &'static str,
    pub tagline: &'static str,
    pub author: &'static str,
    pub description: &'static str,
    pub feed_path: &'static str,
    pub contact_email: &'static str,
}

pub const PODCAST: PodcastMeta = PodcastMeta {
    title: "RustCast",
    tagline: "Conversations about systems, sound, and the web",
    author: "The RustCast crew",
    description: "A show about building software that lasts: audio tooling, \
                  browser internals, and the people who ship them. New \
                  episodes every other week.",
    feed_path: "/feed.xml",
    contact_email: "hello@rustcast.show",
};

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Episode {
    pub number: u32,
    pub title: String,
    pub summary: String,
    #[serde(default)]
    pub notes: Vec<String>,
    pub audio_url: String,
    pub duration_secs: u32,
    pub published: NaiveDate,
}

impl Episode {
    pub fn slug(&self) -> String {
        slugify(&self.title)
    }

    pub fn published_label(&self) -> String {
        self.published.format("%b %d, %Y").to_string()
    }
}

static EPISODES: Lazy<Vec<Episode>> = Lazy::new(|| {
    match serde_json::from_str::<Vec<Episode>>(include_str!("../assets/episodes.json")) {
        Ok(mut episodes) => {
            // Newest first on every listing.
            episodes.sort_by(|a, b| b.number.cmp(&a.number));
            episodes
        }
        Err(err) => {
            eprintln!("episodes.json is malformed: {err}");
            Vec::new()
        }
    }
});

pub fn episodes() -> &'static [Episode] {
    &EPISODES
}

pub fn episode_by_slug(slug: &str) -> Option<&'static Episode> {
    EPISODES.iter().find(|episode| episode.slug() == slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_parses_and_is_newest_first() {
        let all = episodes();
        assert!(!all.is_empty());
        for pair in all.windows(2) {
            assert!(pair[0].number > pair[1].number);
        }
    }

    #[test]
    fn slugs_are_unique_and_resolvable() {
        let all = episodes();
        for episode in all {
            let found = episode_by_slug(&episode.slug()).expect("slug resolves");
            assert_eq!(found.number, episode.number);
        }
        let mut slugs: Vec<String> = all.iter().map(Episode::slug).collect();
        slugs.sort();
        slugs.dedup();
        assert_eq!(slugs.len(), all.len());
    }

    #[test]
    fn unknown_slug_is_none() {
        assert!(episode_by_slug("no-such-episode").is_none());
    }
}
