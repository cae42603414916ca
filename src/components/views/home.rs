use crate::components::{AppView, Icon};
use crate::site::{episodes, Episode, PODCAST};
use crate::utils::format_timestamp;
use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    let mut now_playing = use_context::<Signal<Option<Episode>>>();

    rsx! {
        section { class: "mb-10",
            h1 { class: "text-3xl font-bold text-white mb-2", "{PODCAST.title}" }
            p { class: "text-zinc-400 mb-1", "{PODCAST.tagline}" }
            p { class: "text-sm text-zinc-500 max-w-xl", "{PODCAST.description}" }
        }

        section {
            h2 { class: "text-sm font-semibold uppercase tracking-wider text-zinc-500 mb-4",
                "All episodes"
            }
            div { class: "flex flex-col gap-3",
                for episode in episodes().iter() {
                    div {
                        key: "{episode.number}",
                        class: "group flex items-center gap-4 rounded-xl border border-zinc-800/60 bg-zinc-900/40 p-4 hover:border-violet-500/40 transition-colors",
                        button {
                            r#type: "button",
                            class: "w-10 h-10 rounded-full bg-violet-500/15 text-violet-300 flex items-center justify-center hover:bg-violet-500/30 transition-colors flex-shrink-0",
                            aria_label: "Play episode {episode.number}",
                            onclick: {
                                let episode = episode.clone();
                                move |_| now_playing.set(Some(episode.clone()))
                            },
                            Icon { name: "play".to_string(), class: "w-4 h-4 ml-0.5".to_string() }
                        }
                        div { class: "min-w-0 flex-1",
                            Link {
                                to: AppView::EpisodeDetail {
                                    slug: episode.slug(),
                                },
                                class: "text-sm font-medium text-white hover:text-violet-300 transition-colors block truncate",
                                "Ep. {episode.number}: {episode.title}"
                            }
                            p { class: "text-xs text-zinc-500 truncate", "{episode.summary}" }
                        }
                        div { class: "text-right flex-shrink-0",
                            p { class: "text-xs text-zinc-400", "{episode.published_label()}" }
                            p { class: "text-xs text-zinc-600",
                                {format_timestamp(f64::from(episode.duration_secs))}
                            }
                        }
                    }
                }
            }
        }
    }
}
