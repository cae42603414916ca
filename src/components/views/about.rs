use crate::components::Icon;
use crate::site::PODCAST;
use dioxus::prelude::*;

#[component]
pub fn About() -> Element {
    rsx! {
        section { class: "max-w-xl",
            h1 { class: "text-2xl font-bold text-white mb-4", "About {PODCAST.title}" }
            p { class: "text-zinc-300 mb-4", "{PODCAST.description}" }
            p { class: "text-zinc-400 text-sm mb-8",
                "Hosted by {PODCAST.author}. The whole site is a static bundle: "
                "no accounts, no tracking, and the audio player runs entirely in "
                "your browser. Press ? anywhere for keyboard shortcuts."
            }

            h2 { class: "text-sm font-semibold uppercase tracking-wider text-zinc-500 mb-3",
                "Listen elsewhere"
            }
            div { class: "flex flex-col gap-2 text-sm",
                a {
                    href: PODCAST.feed_path,
                    class: "inline-flex items-center gap-2 text-zinc-300 hover:text-amber-400 transition-colors",
                    Icon { name: "rss".to_string(), class: "w-4 h-4".to_string() }
                    "Subscribe via RSS"
                }
                a {
                    href: "mailto:{PODCAST.contact_email}",
                    class: "inline-flex items-center gap-2 text-zinc-300 hover:text-violet-300 transition-colors",
                    Icon { name: "mic".to_string(), class: "w-4 h-4".to_string() }
                    "{PODCAST.contact_email}"
                }
            }
        }
    }
}
