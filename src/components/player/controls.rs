use crate::components::{audio_manager, Icon, PlayerDisplaySignal};
use crate::player::{speed_label, speed_options};
use dioxus::prelude::*;

/// Play/Pause button - the icon tracks the display state, which the
/// controller reconciles from the audio element's own events.
#[component]
pub(super) fn PlayPauseButton() -> Element {
    let display = use_context::<PlayerDisplaySignal>().0;
    let playing = display().playing;

    rsx! {
        button {
            id: "play-pause-btn",
            r#type: "button",
            class: "w-10 h-10 rounded-full bg-white flex items-center justify-center hover:scale-105 transition-transform shadow-lg",
            onclick: move |_| audio_manager::toggle_play_pause(),
            if playing {
                Icon {
                    name: "pause".to_string(),
                    class: "w-5 h-5 text-black".to_string(),
                }
            } else {
                Icon {
                    name: "play".to_string(),
                    class: "w-5 h-5 text-black ml-0.5".to_string(),
                }
            }
        }
    }
}

/// Mute toggle - restores the pre-mute volume on unmute.
#[component]
pub(super) fn MuteButton() -> Element {
    let display = use_context::<PlayerDisplaySignal>().0;
    let muted = display().muted;

    rsx! {
        button {
            id: "mute-btn",
            r#type: "button",
            class: if muted { "p-2 text-rose-400 hover:text-rose-300 transition-colors" } else { "p-2 text-zinc-400 hover:text-white transition-colors" },
            onclick: move |_| audio_manager::toggle_mute(),
            Icon {
                name: if muted { "volume-mute".to_string() } else { "volume".to_string() },
                class: "w-5 h-5".to_string(),
            }
        }
    }
}

/// Speed indicator + menu of the supported playback rates.
#[component]
pub(super) fn SpeedMenuButton() -> Element {
    let display = use_context::<PlayerDisplaySignal>().0;
    let d = display();

    rsx! {
        div { class: "relative",
            button {
                id: "speed-btn",
                r#type: "button",
                class: "flex items-center gap-1 p-2 text-zinc-400 hover:text-white transition-colors text-xs font-medium",
                onclick: move |_| audio_manager::toggle_speed_menu(),
                Icon { name: "gauge".to_string(), class: "w-4 h-4".to_string() }
                "{speed_label(d.speed)}"
            }
            if d.speed_menu_open {
                div {
                    id: "speed-menu",
                    class: "absolute bottom-12 left-1/2 -translate-x-1/2 bg-zinc-900/95 border border-zinc-800 rounded-xl py-1 shadow-xl min-w-20",
                    for (rate, checked) in speed_options(d.speed) {
                        button {
                            r#type: "button",
                            role: "menuitemradio",
                            aria_checked: checked,
                            class: if checked { "block w-full px-4 py-1.5 text-left text-xs text-violet-300 font-semibold" } else { "block w-full px-4 py-1.5 text-left text-xs text-zinc-400 hover:text-white transition-colors" },
                            onclick: move |_| audio_manager::set_playback_speed(rate),
                            "{speed_label(rate)}"
                        }
                    }
                }
            }
        }
    }
}

const SHORTCUT_ROWS: [(&str, &str); 8] = [
    ("Space", "Play / pause"),
    ("M", "Mute / unmute"),
    ("J / K", "Back / forward 10 seconds"),
    ("\u{2191} / \u{2193}", "Volume up / down"),
    ("L", "Playback speed menu"),
    ("Home", "Jump to start"),
    ("End", "Jump to end"),
    ("?", "Toggle this dialog"),
];

/// Keyboard shortcuts help dialog, toggled with `?`. Optional: the player
/// works fine without it ever being opened.
#[component]
pub(super) fn ShortcutsOverlay() -> Element {
    rsx! {
        div {
            id: "shortcuts-dialog",
            class: "fixed inset-0 z-[70] flex items-center justify-center bg-black/60 backdrop-blur-sm",
            onclick: move |_| audio_manager::toggle_help(),
            div { class: "bg-zinc-900 border border-zinc-800 rounded-2xl p-6 shadow-2xl max-w-sm w-full mx-4",
                div { class: "flex items-center gap-2 mb-4",
                    Icon { name: "keyboard".to_string(), class: "w-5 h-5 text-violet-400".to_string() }
                    h2 { class: "text-sm font-semibold text-white", "Keyboard shortcuts" }
                }
                for (keys, action) in SHORTCUT_ROWS {
                    div { class: "flex items-center justify-between py-1.5 border-b border-zinc-800/60 last:border-0",
                        span { class: "text-xs font-mono text-zinc-300 bg-zinc-800 rounded px-1.5 py-0.5", "{keys}" }
                        span { class: "text-xs text-zinc-400", "{action}" }
                    }
                }
            }
        }
    }
}
