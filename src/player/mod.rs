//! Player core - the controller that keeps the on-screen player state in sync
//! with the browser's audio element.
//!
//! Everything in this module is platform independent: the browser side is
//! reached only through the [`MediaHandle`] and [`TimerHost`] seams, so the
//! controller runs unchanged under a real `HtmlAudioElement` or the test
//! fakes.

mod controller;
mod media;
mod shortcuts;
mod state;
mod timers;

pub use controller::PlayerController;
pub use media::MediaHandle;
pub use shortcuts::{shortcut_for_key, ShortcutAction};
pub use state::{
    speed_label, speed_options, DisplayState, PlaybackState, Toast, ToastKind, SPEED_STEPS,
};
pub use timers::{TimerHost, TimerKind, SEEK_PREVIEW_DEBOUNCE_MS, TOAST_HIDE_MS};
