use crate::components::{AppView, Icon};
use crate::site::{episode_by_slug, Episode};
use crate::utils::format_timestamp;
use dioxus::prelude::*;

#[component]
pub fn EpisodeDetail(slug: String) -> Element {
    let mut now_playing = use_context::<Signal<Option<Episode>>>();

    let Some(episode) = episode_by_slug(&slug) else {
        return rsx! {
            div { class: "text-center py-16",
                p { class: "text-zinc-400 mb-4", "That episode does not exist." }
                Link {
                    to: AppView::Home {},
                    class: "text-violet-400 hover:text-violet-300 text-sm",
                    "Back to all episodes"
                }
            }
        };
    };

    rsx! {
        Link {
            to: AppView::Home {},
            class: "inline-flex items-center gap-1 text-sm text-zinc-400 hover:text-white transition-colors mb-6",
            Icon { name: "arrow-left".to_string(), class: "w-4 h-4".to_string() }
            "All episodes"
        }

        article {
            header { class: "mb-6",
                p { class: "text-xs uppercase tracking-wider text-violet-400 mb-1",
                    "Episode {episode.number} \u{2022} {episode.published_label()} \u{2022} "
                    {format_timestamp(f64::from(episode.duration_secs))}
                }
                h1 { class: "text-2xl font-bold text-white mb-3", "{episode.title}" }
                p { class: "text-zinc-400", "{episode.summary}" }
            }

            button {
                r#type: "button",
                class: "inline-flex items-center gap-2 rounded-full bg-violet-600 hover:bg-violet-500 text-white text-sm font-medium px-5 py-2.5 transition-colors mb-8",
                onclick: {
                    let episode = episode.clone();
                    move |_| now_playing.set(Some(episode.clone()))
                },
                Icon { name: "play".to_string(), class: "w-4 h-4".to_string() }
                "Play episode"
            }

            if !episode.notes.is_empty() {
                section {
                    h2 { class: "text-sm font-semibold uppercase tracking-wider text-zinc-500 mb-3",
                        "Show notes"
                    }
                    ul { class: "list-disc list-inside flex flex-col gap-1.5 text-sm text-zinc-300",
                        for note in episode.notes.iter() {
                            li { "{note}" }
                        }
                    }
                }
            }
        }
    }
}
