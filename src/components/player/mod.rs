use crate::components::{audio_manager, Icon, PlayerDisplaySignal};
use crate::player::{DisplayState, ToastKind};
use crate::site::Episode;
use dioxus::prelude::*;

mod controls;

use controls::{MuteButton, PlayPauseButton, ShortcutsOverlay, SpeedMenuButton};

/// The fixed bottom player bar plus its toast banner and help overlay.
#[component]
pub fn Player() -> Element {
    let now_playing = use_context::<Signal<Option<Episode>>>();
    let display = use_context::<PlayerDisplaySignal>().0;

    let current_episode = now_playing();
    let d: DisplayState = display();

    let on_volume_change = move |e: Event<FormData>| {
        if let Ok(val) = e.value().parse::<f64>() {
            audio_manager::set_volume((val / 100.0).clamp(0.0, 1.0));
        }
    };

    let on_seek_input = move |e: Event<FormData>| {
        if let Ok(percent) = e.value().parse::<f64>() {
            audio_manager::begin_seek(percent.clamp(0.0, 100.0) / 100.0);
        }
    };

    let on_seek_commit = move |e: Event<FormData>| {
        if let Ok(percent) = e.value().parse::<f64>() {
            audio_manager::commit_seek(percent.clamp(0.0, 100.0) / 100.0);
        }
    };

    rsx! {
        if let Some(toast) = d.toast.clone() {
            div { class: "fixed left-0 right-0 bottom-28 md:bottom-24 px-3 md:px-6 z-[60] pointer-events-none",
                div {
                    class: match toast.kind {
                        ToastKind::Error => "rounded-lg border border-rose-500/35 bg-rose-500/10 px-3 py-2 text-center text-xs text-rose-200 shadow-lg",
                        ToastKind::Info => "rounded-lg border border-violet-500/35 bg-violet-500/10 px-3 py-2 text-center text-xs text-violet-100 shadow-lg",
                    },
                    "{toast.message}"
                }
            }
        }
        if d.help_open {
            ShortcutsOverlay {}
        }
        div { class: "player-shell fixed bottom-0 left-0 right-0 bg-zinc-950/90 backdrop-blur-xl border-t border-zinc-800/60 z-50 md:h-24",
            div { class: "h-full flex flex-col md:flex-row md:items-center md:justify-between px-4 md:px-6 gap-3 md:gap-8 py-2 md:py-0",
                // Now playing info
                div { class: "flex items-center gap-3 md:gap-4 min-w-0 w-full md:w-1/4",
                    {
                        match &current_episode {
                            Some(episode) => rsx! {
                                div { class: "w-12 h-12 rounded-lg bg-gradient-to-br from-violet-600 to-indigo-700 flex items-center justify-center flex-shrink-0",
                                    Icon { name: "mic".to_string(), class: "w-5 h-5 text-white/80".to_string() }
                                }
                                div { class: "min-w-0 flex-1 overflow-hidden",
                                    p { class: "text-sm font-medium text-white truncate",
                                        "Ep. {episode.number}: {episode.title}"
                                    }
                                    p { class: "text-xs text-zinc-400 truncate", "{episode.published_label()}" }
                                }
                            },
                            None => rsx! {
                                div { class: "w-12 h-12 rounded-lg bg-zinc-800/50 flex items-center justify-center",
                                    Icon { name: "mic".to_string(), class: "w-5 h-5 text-zinc-600".to_string() }
                                }
                                div { class: "min-w-0 flex-1",
                                    p { class: "text-sm text-zinc-500", "Nothing playing" }
                                    p { class: "text-xs text-zinc-600", "Pick an episode to start" }
                                }
                            },
                        }
                    }
                }

                // Transport controls
                div { class: "flex flex-col items-center gap-2 w-full md:flex-1 md:max-w-2xl",
                    div { class: "flex items-center gap-2 md:gap-4 justify-center w-full",
                        PlayPauseButton {}
                        SpeedMenuButton {}
                        if d.buffering {
                            Icon { name: "spinner".to_string(), class: "w-4 h-4 text-zinc-500".to_string() }
                        }
                    }
                    // Progress bar
                    div { class: "flex items-center gap-2 md:gap-3 w-full",
                        span { class: "text-xs text-zinc-500 w-12 text-right", "{d.elapsed}" }
                        input {
                            id: "seek-slider",
                            r#type: "range",
                            min: "0",
                            max: "100",
                            step: "0.1",
                            disabled: !d.seek_enabled,
                            value: (d.progress * 100.0).to_string(),
                            class: "flex-1 h-1.5 bg-zinc-800 rounded-full appearance-none cursor-pointer accent-violet-500",
                            oninput: on_seek_input,
                            onchange: on_seek_commit,
                        }
                        span { class: "text-xs text-zinc-500 w-12", "{d.duration}" }
                    }
                }

                // Volume
                div { class: "flex items-center w-full md:w-1/4 justify-end gap-3",
                    MuteButton {}
                    input {
                        id: "volume-slider",
                        r#type: "range",
                        min: "0",
                        max: "100",
                        value: (d.volume * 100.0).round().to_string(),
                        class: "w-24 h-1.5 bg-zinc-800 rounded-full appearance-none cursor-pointer accent-zinc-400",
                        oninput: on_volume_change,
                    }
                }
            }
        }
    }
}
