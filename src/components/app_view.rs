//! Route table for the site.

use dioxus::prelude::*;

use crate::components::views::{About, EpisodeDetail, Home};
use crate::components::AppShell;

#[derive(Routable, Clone, PartialEq)]
pub enum AppView {
    #[layout(AppShell)]
    #[route("/")]
    Home {},
    #[route("/episodes/:slug")]
    EpisodeDetail { slug: String },
    #[route("/about")]
    About {},
}
