//! Audio manager - owns the hidden audio element and the player controller,
//! outside of the component render cycle so playback never restarts when
//! unrelated state changes.
//!
//! The controller core lives in `crate::player` and knows nothing about the
//! browser; this module is the wasm shell that feeds it media events, timer
//! callbacks and keyboard shortcuts, and mirrors its display state into a
//! Dioxus signal for the player bar to render.

use dioxus::prelude::*;

use crate::player::DisplayState;

#[cfg(target_arch = "wasm32")]
use crate::player::{shortcut_for_key, MediaHandle, PlayerController, TimerHost, TimerKind};
#[cfg(target_arch = "wasm32")]
use crate::site::Episode;
#[cfg(target_arch = "wasm32")]
use gloo_timers::callback::Timeout;
#[cfg(target_arch = "wasm32")]
use std::cell::{Cell, RefCell};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
#[cfg(target_arch = "wasm32")]
use web_sys::{window, HtmlAudioElement, KeyboardEvent};

/// Context wrapper so the display signal is distinguishable from other
/// signals provided by the app shell.
#[derive(Clone, Copy)]
pub struct PlayerDisplaySignal(pub Signal<DisplayState>);

#[cfg(target_arch = "wasm32")]
pub const AUDIO_ELEMENT_ID: &str = "rustcast-audio";

#[cfg(target_arch = "wasm32")]
type WebPlayer = PlayerController<WebMedia, WebTimers>;

#[cfg(target_arch = "wasm32")]
thread_local! {
    static PLAYER: RefCell<Option<WebPlayer>> = const { RefCell::new(None) };
    static DISPLAY: Cell<Option<Signal<DisplayState>>> = const { Cell::new(None) };
}

/// Initialize the hidden audio element once.
#[cfg(target_arch = "wasm32")]
pub fn get_or_create_audio_element() -> Option<HtmlAudioElement> {
    let document = window()?.document()?;

    if let Some(existing) = document.get_element_by_id(AUDIO_ELEMENT_ID) {
        return existing.dyn_into::<HtmlAudioElement>().ok();
    }

    let audio: HtmlAudioElement = document.create_element("audio").ok()?.dyn_into().ok()?;
    audio.set_id(AUDIO_ELEMENT_ID);
    // Keep preload light so we stream instead of buffering entire files
    audio.set_attribute("preload", "metadata").ok()?;
    document.body()?.append_child(&audio).ok()?;

    Some(audio)
}

/// Run a controller call and mirror the resulting display state into the UI
/// signal. When the widget never initialized this is a safe no-op, so every
/// entry point stays harmless after an init failure.
#[cfg(target_arch = "wasm32")]
fn dispatch(f: impl FnOnce(&mut WebPlayer)) {
    let mut snapshot = None;
    PLAYER.with(|slot| {
        let mut guard = slot.borrow_mut();
        if let Some(player) = guard.as_mut() {
            f(player);
            snapshot = Some(player.display().clone());
        }
    });
    if let (Some(display), Some(mut signal)) = (snapshot, DISPLAY.with(Cell::get)) {
        if *signal.peek() != display {
            signal.set(display);
        }
    }
}

#[cfg(target_arch = "wasm32")]
struct WebMedia {
    audio: HtmlAudioElement,
}

#[cfg(target_arch = "wasm32")]
impl MediaHandle for WebMedia {
    fn current_time(&self) -> f64 {
        self.audio.current_time()
    }

    fn set_current_time(&self, seconds: f64) {
        self.audio.set_current_time(seconds);
    }

    fn duration(&self) -> f64 {
        self.audio.duration()
    }

    fn paused(&self) -> bool {
        self.audio.paused()
    }

    fn volume(&self) -> f64 {
        self.audio.volume()
    }

    fn set_volume(&self, volume: f64) {
        self.audio.set_volume(volume);
    }

    fn muted(&self) -> bool {
        self.audio.muted()
    }

    fn set_muted(&self, muted: bool) {
        self.audio.set_muted(muted);
    }

    fn playback_rate(&self) -> f64 {
        self.audio.playback_rate()
    }

    fn set_playback_rate(&self, rate: f64) {
        self.audio.set_playback_rate(rate);
    }

    fn request_play(&self) {
        let Ok(promise) = self.audio.play() else {
            return;
        };
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(err) = wasm_bindgen_futures::JsFuture::from(promise).await {
                dispatch(|player| player.on_play_rejected(play_rejection_message(&err)));
            }
        });
    }

    fn pause(&self) {
        let _ = self.audio.pause();
    }
}

/// One pending `Timeout` per timer kind; replacing a slot drops and thereby
/// cancels the previous one.
#[cfg(target_arch = "wasm32")]
#[derive(Default)]
struct WebTimers {
    seek_preview: Option<Timeout>,
    toast_hide: Option<Timeout>,
}

#[cfg(target_arch = "wasm32")]
impl WebTimers {
    fn slot(&mut self, kind: TimerKind) -> &mut Option<Timeout> {
        match kind {
            TimerKind::SeekPreview => &mut self.seek_preview,
            TimerKind::ToastHide => &mut self.toast_hide,
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl TimerHost for WebTimers {
    fn schedule(&mut self, kind: TimerKind, delay_ms: u32) {
        let timeout = Timeout::new(delay_ms, move || {
            dispatch(|player| player.on_timer(kind));
        });
        *self.slot(kind) = Some(timeout);
    }

    fn cancel(&mut self, kind: TimerKind) {
        *self.slot(kind) = None;
    }
}

#[cfg(target_arch = "wasm32")]
fn play_rejection_message(err: &JsValue) -> String {
    let name = js_sys::Reflect::get(err, &"name".into())
        .ok()
        .and_then(|value| value.as_string())
        .unwrap_or_default();
    match name.as_str() {
        "NotAllowedError" => "Playback was blocked by the browser. Tap play to start.".to_string(),
        "NotSupportedError" => "This episode's audio format is not supported here.".to_string(),
        _ => "Could not start playback.".to_string(),
    }
}

#[cfg(target_arch = "wasm32")]
fn media_error_message(audio: &HtmlAudioElement) -> String {
    let audio_js = JsValue::from(audio.clone());
    let code = js_sys::Reflect::get(&audio_js, &"error".into())
        .ok()
        .filter(|value| !value.is_null() && !value.is_undefined())
        .and_then(|error| js_sys::Reflect::get(&error, &"code".into()).ok())
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0) as u16;

    match code {
        1 => "Playback was aborted before the episode loaded.".to_string(),
        2 => "Network error while loading this episode.".to_string(),
        3 => "Audio playback failed due to a decode error.".to_string(),
        4 => "Failed to load audio because no supported source was found.".to_string(),
        _ => "Unable to load this audio source.".to_string(),
    }
}

#[cfg(target_arch = "wasm32")]
fn hook_media_event(audio: &HtmlAudioElement, name: &str, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    let _ = audio.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
    closure.forget();
}

#[cfg(target_arch = "wasm32")]
fn hook_media_events(audio: &HtmlAudioElement) {
    hook_media_event(audio, "loadedmetadata", || {
        dispatch(|player| player.on_metadata_loaded());
    });
    hook_media_event(audio, "timeupdate", || {
        dispatch(|player| player.on_time_update());
    });
    hook_media_event(audio, "play", || {
        dispatch(|player| player.on_play());
    });
    hook_media_event(audio, "pause", || {
        dispatch(|player| player.on_pause());
    });
    hook_media_event(audio, "ended", || {
        dispatch(|player| player.on_ended());
    });
    hook_media_event(audio, "waiting", || {
        dispatch(|player| player.on_waiting());
    });
    hook_media_event(audio, "canplay", || {
        dispatch(|player| player.on_can_play());
    });
    hook_media_event(audio, "error", {
        let audio = audio.clone();
        move || {
            let message = media_error_message(&audio);
            dispatch(|player| player.on_media_error(message));
        }
    });
}

#[cfg(target_arch = "wasm32")]
fn is_editable_shortcut_target(event: &KeyboardEvent) -> bool {
    let Some(target) = event.target() else {
        return false;
    };

    let mut current = target.dyn_into::<web_sys::Element>().ok();
    while let Some(element) = current {
        let tag = element.tag_name().to_ascii_lowercase();
        if tag == "input" || tag == "textarea" || tag == "select" {
            return true;
        }
        if element.has_attribute("contenteditable")
            && element
                .get_attribute("contenteditable")
                .map(|v| v.to_ascii_lowercase() != "false")
                .unwrap_or(true)
        {
            return true;
        }
        current = element.parent_element();
    }

    false
}

#[cfg(target_arch = "wasm32")]
fn hook_keyboard_shortcuts() {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };

    let key_cb = Closure::wrap(Box::new(move |event: KeyboardEvent| {
        if event.default_prevented() || event.is_composing() {
            return;
        }
        if is_editable_shortcut_target(&event) {
            return;
        }
        let focused = window()
            .and_then(|w| w.document())
            .map(|d| d.has_focus().unwrap_or(false))
            .unwrap_or(false);
        if !focused {
            return;
        }
        let Some(action) = shortcut_for_key(
            &event.key(),
            event.meta_key() || event.ctrl_key(),
            event.alt_key(),
        ) else {
            return;
        };
        event.prevent_default();
        dispatch(|player| player.apply_shortcut(action));
    }) as Box<dyn FnMut(KeyboardEvent)>);

    let _ = document.add_event_listener_with_callback("keydown", key_cb.as_ref().unchecked_ref());
    key_cb.forget();
}

/// Minimal control surface for external callers (embed scripts, devtools):
/// `window.rustcastPlayer.{play, pause, setSpeed, seekTo}`.
#[cfg(target_arch = "wasm32")]
fn install_control_surface() {
    let Some(win) = window() else {
        return;
    };
    let api = js_sys::Object::new();

    let play = Closure::wrap(Box::new(|| {
        dispatch(|player| player.play());
    }) as Box<dyn FnMut()>);
    let pause = Closure::wrap(Box::new(|| {
        dispatch(|player| player.pause());
    }) as Box<dyn FnMut()>);
    let set_speed = Closure::wrap(Box::new(|rate: f64| {
        dispatch(|player| player.set_playback_speed(rate));
    }) as Box<dyn FnMut(f64)>);
    let seek_to = Closure::wrap(Box::new(|seconds: f64| {
        dispatch(|player| player.seek_to(seconds));
    }) as Box<dyn FnMut(f64)>);

    let _ = js_sys::Reflect::set(&api, &"play".into(), play.as_ref());
    let _ = js_sys::Reflect::set(&api, &"pause".into(), pause.as_ref());
    let _ = js_sys::Reflect::set(&api, &"setSpeed".into(), set_speed.as_ref());
    let _ = js_sys::Reflect::set(&api, &"seekTo".into(), seek_to.as_ref());
    play.forget();
    pause.forget();
    set_speed.forget();
    seek_to.forget();

    let _ = js_sys::Reflect::set(win.as_ref(), &"rustcastPlayer".into(), &api);
}

/// Audio controller component - wires everything up once and follows the
/// selected episode. Renders nothing.
#[cfg(target_arch = "wasm32")]
#[component]
pub fn AudioController() -> Element {
    let now_playing = use_context::<Signal<Option<Episode>>>();
    let display = use_context::<PlayerDisplaySignal>().0;
    let mut last_src = use_signal(|| None::<String>);

    // One-time setup: audio element, controller, listeners, global surface.
    use_effect(move || {
        let Some(audio) = get_or_create_audio_element() else {
            // Required binding missing: the widget stays inert, the page
            // survives.
            web_sys::console::error_1(
                &"rustcast: could not create the audio element; player disabled".into(),
            );
            return;
        };

        DISPLAY.with(|slot| slot.set(Some(display)));
        let already_running = PLAYER.with(|slot| slot.borrow().is_some());
        if already_running {
            return;
        }

        PLAYER.with(|slot| {
            *slot.borrow_mut() = Some(PlayerController::new(
                WebMedia {
                    audio: audio.clone(),
                },
                WebTimers::default(),
            ));
        });
        hook_media_events(&audio);
        hook_keyboard_shortcuts();
        install_control_surface();
    });

    // Update the audio source when the selected episode changes.
    use_effect(move || {
        let Some(episode) = now_playing() else {
            return;
        };
        if last_src.peek().as_deref() == Some(episode.audio_url.as_str()) {
            return;
        }
        last_src.set(Some(episode.audio_url.clone()));

        if let Some(audio) = get_or_create_audio_element() {
            audio.set_src(&episode.audio_url);
            let _ = audio.set_attribute("data-src", &episode.audio_url);
            dispatch(|player| {
                player.on_source_changed();
                player.play();
            });
        }
    });

    rsx! {}
}

#[cfg(not(target_arch = "wasm32"))]
#[component]
pub fn AudioController() -> Element {
    rsx! {}
}

// --- user-intent entry points for the UI components ---------------------

#[cfg(target_arch = "wasm32")]
pub fn toggle_play_pause() {
    dispatch(|player| player.toggle_play_pause());
}

#[cfg(target_arch = "wasm32")]
pub fn begin_seek(fraction: f64) {
    dispatch(|player| player.begin_seek(fraction));
}

#[cfg(target_arch = "wasm32")]
pub fn commit_seek(fraction: f64) {
    dispatch(|player| player.commit_seek(fraction));
}

#[cfg(target_arch = "wasm32")]
pub fn set_volume(volume: f64) {
    dispatch(|player| player.set_volume(volume));
}

#[cfg(target_arch = "wasm32")]
pub fn toggle_mute() {
    dispatch(|player| player.toggle_mute());
}

#[cfg(target_arch = "wasm32")]
pub fn set_playback_speed(rate: f64) {
    dispatch(|player| player.set_playback_speed(rate));
}

#[cfg(target_arch = "wasm32")]
pub fn toggle_speed_menu() {
    dispatch(|player| player.toggle_speed_menu());
}

#[cfg(target_arch = "wasm32")]
pub fn toggle_help() {
    dispatch(|player| player.toggle_help());
}

#[cfg(not(target_arch = "wasm32"))]
mod native_stubs {
    #![allow(dead_code)]

    pub fn toggle_play_pause() {}
    pub fn begin_seek(_fraction: f64) {}
    pub fn commit_seek(_fraction: f64) {}
    pub fn set_volume(_volume: f64) {}
    pub fn toggle_mute() {}
    pub fn set_playback_speed(_rate: f64) {}
    pub fn toggle_speed_menu() {}
    pub fn toggle_help() {}
}

#[cfg(not(target_arch = "wasm32"))]
pub use native_stubs::*;
