use crate::components::{AppView, AudioController, Icon, Player, PlayerDisplaySignal};
use crate::player::DisplayState;
use crate::site::{Episode, PODCAST};
use dioxus::prelude::*;

/// Site chrome shared by every route: header, content outlet, the player bar
/// and the hidden audio controller. Also owns the shared player state.
#[component]
pub fn AppShell() -> Element {
    let now_playing = use_signal(|| None::<Episode>);
    let player_display = use_signal(DisplayState::default);

    use_context_provider(|| now_playing);
    use_context_provider(|| PlayerDisplaySignal(player_display));

    rsx! {
        div { class: "min-h-screen bg-zinc-950 text-zinc-100 pb-32 md:pb-28",
            header { class: "sticky top-0 z-40 bg-zinc-950/80 backdrop-blur-xl border-b border-zinc-800/60",
                div { class: "max-w-3xl mx-auto px-4 md:px-6 h-14 flex items-center justify-between",
                    Link {
                        to: AppView::Home {},
                        class: "flex items-center gap-2 text-white font-semibold tracking-tight",
                        Icon { name: "mic".to_string(), class: "w-5 h-5 text-violet-400".to_string() }
                        "{PODCAST.title}"
                    }
                    nav { class: "flex items-center gap-4 text-sm",
                        Link {
                            to: AppView::Home {},
                            class: "text-zinc-400 hover:text-white transition-colors",
                            "Episodes"
                        }
                        Link {
                            to: AppView::About {},
                            class: "text-zinc-400 hover:text-white transition-colors",
                            "About"
                        }
                        a {
                            href: PODCAST.feed_path,
                            class: "flex items-center gap-1 text-zinc-400 hover:text-amber-400 transition-colors",
                            Icon { name: "rss".to_string(), class: "w-4 h-4".to_string() }
                            "RSS"
                        }
                    }
                }
            }
            main { class: "max-w-3xl mx-auto px-4 md:px-6 py-8",
                Outlet::<AppView> {}
            }
            Player {}
            AudioController {}
        }
    }
}
