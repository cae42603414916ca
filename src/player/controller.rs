//! The player controller: single authority mediating between the UI widgets
//! and the media handle.
//!
//! User intents (clicks, drags, key presses) come in as method calls; media
//! lifecycle events come in as `on_*` calls; the result is always a fresh
//! [`DisplayState`] for the UI to render. The playing flag is reconciled from
//! the handle's own play/pause events, never from the request that triggered
//! them, so the icon stays truthful even when a pause lands during an
//! in-flight play promise.

use crate::player::media::MediaHandle;
use crate::player::shortcuts::ShortcutAction;
use crate::player::state::{
    speed_label, DisplayState, PlaybackState, Toast, ToastKind, DEFAULT_UNMUTE_VOLUME, SPEED_STEPS,
};
use crate::player::timers::{TimerHost, TimerKind, SEEK_PREVIEW_DEBOUNCE_MS, TOAST_HIDE_MS};
use crate::utils::format_timestamp;

const SEEK_STEP_SECS: f64 = 10.0;
const VOLUME_STEP: f64 = 0.05;

pub struct PlayerController<M: MediaHandle, T: TimerHost> {
    media: M,
    timers: T,
    state: PlaybackState,
    display: DisplayState,
    /// Known duration in seconds; 0 until metadata loads.
    duration: f64,
    /// Latest scrub fraction received inside the debounce window.
    pending_seek: Option<f64>,
    seek_window_open: bool,
}

impl<M: MediaHandle, T: TimerHost> PlayerController<M, T> {
    pub fn new(media: M, timers: T) -> Self {
        let volume = media.volume().clamp(0.0, 1.0);
        let muted = media.muted() || volume == 0.0;
        let rate = media.playback_rate();
        let state = PlaybackState {
            is_playing: !media.paused(),
            is_muted: muted,
            volume,
            playback_rate: rate,
            ..PlaybackState::default()
        };
        let display = DisplayState {
            playing: state.is_playing,
            muted,
            volume,
            speed: rate,
            ..DisplayState::default()
        };
        Self {
            media,
            timers,
            state,
            display,
            duration: 0.0,
            pending_seek: None,
            seek_window_open: false,
        }
    }

    pub fn display(&self) -> &DisplayState {
        &self.display
    }

    // --- user intents ---------------------------------------------------

    pub fn toggle_play_pause(&mut self) {
        if self.media.paused() {
            self.media.request_play();
        } else {
            self.media.pause();
        }
        // Icon refresh from the handle's actual flag; the play/pause events
        // reconcile it again once they land.
        self.display.playing = !self.media.paused();
    }

    /// External control surface / new-episode autostart.
    pub fn play(&mut self) {
        if self.media.paused() {
            self.media.request_play();
        }
        self.display.playing = !self.media.paused();
    }

    pub fn pause(&mut self) {
        if !self.media.paused() {
            self.media.pause();
        }
        self.display.playing = !self.media.paused();
    }

    /// Scrub preview while the slider is being dragged. The handle position
    /// is untouched; drags faster than the debounce window collapse to the
    /// latest fraction.
    pub fn begin_seek(&mut self, fraction: f64) {
        if !self.display.seek_enabled {
            return;
        }
        self.state.is_seeking = true;
        let fraction = fraction.clamp(0.0, 1.0);
        if self.seek_window_open {
            self.pending_seek = Some(fraction);
        } else {
            self.apply_seek_preview(fraction);
            self.seek_window_open = true;
            self.timers
                .schedule(TimerKind::SeekPreview, SEEK_PREVIEW_DEBOUNCE_MS);
        }
    }

    /// Drag release: write the chosen position to the handle.
    pub fn commit_seek(&mut self, fraction: f64) {
        self.state.is_seeking = false;
        self.pending_seek = None;
        self.seek_window_open = false;
        self.timers.cancel(TimerKind::SeekPreview);
        if !self.display.seek_enabled {
            return;
        }
        self.seek_to(fraction.clamp(0.0, 1.0) * self.duration);
    }

    /// Clamped absolute seek, shared by slider commits, Home/End keys and
    /// the global control surface. Emits a "Jumped to" toast.
    pub fn seek_to(&mut self, seconds: f64) {
        if !self.display.seek_enabled {
            return;
        }
        let target = seconds.clamp(0.0, self.duration);
        self.media.set_current_time(target);
        self.display.elapsed = format_timestamp(target);
        self.display.progress = if self.duration > 0.0 {
            target / self.duration
        } else {
            0.0
        };
        self.show_feedback(
            format!("Jumped to {}", format_timestamp(target)),
            ToastKind::Info,
        );
    }

    pub fn set_volume(&mut self, volume: f64) {
        let volume = if volume.is_finite() {
            volume.clamp(0.0, 1.0)
        } else {
            0.0
        };
        let muted = volume == 0.0;
        self.media.set_volume(volume);
        self.media.set_muted(muted);
        self.state.volume = volume;
        self.state.is_muted = muted;
        if volume > 0.0 {
            self.state.last_volume = Some(volume);
        }
        self.display.volume = volume;
        self.display.muted = muted;
    }

    pub fn toggle_mute(&mut self) {
        if self.state.is_muted {
            let restore = self.state.last_volume.unwrap_or(DEFAULT_UNMUTE_VOLUME);
            self.set_volume(restore);
        } else {
            self.state.last_volume = Some(self.state.volume);
            self.set_volume(0.0);
        }
    }

    /// No-op unless `rate` is one of [`SPEED_STEPS`].
    pub fn set_playback_speed(&mut self, rate: f64) {
        if !SPEED_STEPS.iter().any(|&step| (step - rate).abs() < f64::EPSILON) {
            return;
        }
        self.media.set_playback_rate(rate);
        self.state.playback_rate = rate;
        self.display.speed = rate;
        self.display.speed_menu_open = false;
        self.show_feedback(format!("Speed {}", speed_label(rate)), ToastKind::Info);
    }

    pub fn toggle_speed_menu(&mut self) {
        self.display.speed_menu_open = !self.display.speed_menu_open;
    }

    pub fn toggle_help(&mut self) {
        self.display.help_open = !self.display.help_open;
    }

    /// Show a transient toast; a new call preempts the pending hide timer.
    pub fn show_feedback(&mut self, message: String, kind: ToastKind) {
        self.display.toast = Some(Toast { message, kind });
        self.timers.schedule(TimerKind::ToastHide, TOAST_HIDE_MS);
    }

    pub fn apply_shortcut(&mut self, action: ShortcutAction) {
        match action {
            ShortcutAction::TogglePlay => {
                self.toggle_play_pause();
                let message = if self.media.paused() { "Paused" } else { "Playing" };
                self.show_feedback(message.to_string(), ToastKind::Info);
            }
            ShortcutAction::ToggleMute => {
                self.toggle_mute();
                let message = if self.state.is_muted {
                    "Muted".to_string()
                } else {
                    format!("Volume {}%", (self.state.volume * 100.0).round() as i32)
                };
                self.show_feedback(message, ToastKind::Info);
            }
            ShortcutAction::SeekBack => self.seek_by(-SEEK_STEP_SECS),
            ShortcutAction::SeekForward => self.seek_by(SEEK_STEP_SECS),
            ShortcutAction::VolumeUp => self.nudge_volume(VOLUME_STEP),
            ShortcutAction::VolumeDown => self.nudge_volume(-VOLUME_STEP),
            ShortcutAction::ToggleSpeedMenu => self.toggle_speed_menu(),
            ShortcutAction::JumpToStart => self.seek_to(0.0),
            ShortcutAction::JumpToEnd => self.seek_to(self.duration),
            ShortcutAction::ToggleHelp => self.toggle_help(),
        }
    }

    fn seek_by(&mut self, delta: f64) {
        if !self.display.seek_enabled {
            return;
        }
        self.seek_to(self.media.current_time() + delta);
    }

    fn nudge_volume(&mut self, delta: f64) {
        self.set_volume(self.state.volume + delta);
        self.show_feedback(
            format!("Volume {}%", (self.state.volume * 100.0).round() as i32),
            ToastKind::Info,
        );
    }

    // --- media lifecycle ------------------------------------------------

    pub fn on_metadata_loaded(&mut self) {
        let duration = self.media.duration();
        if duration.is_finite() && duration >= 0.0 {
            self.duration = duration;
            self.display.duration = format_timestamp(duration);
            self.display.seek_enabled = true;
        }
    }

    pub fn on_time_update(&mut self) {
        if self.state.is_seeking {
            return;
        }
        let time = self.media.current_time();
        self.display.elapsed = format_timestamp(time);
        self.display.progress = if self.duration > 0.0 {
            (time / self.duration).clamp(0.0, 1.0)
        } else {
            0.0
        };
    }

    pub fn on_play(&mut self) {
        self.state.is_playing = true;
        self.display.playing = true;
        self.display.buffering = false;
    }

    pub fn on_pause(&mut self) {
        self.state.is_playing = false;
        self.display.playing = false;
    }

    pub fn on_ended(&mut self) {
        self.state.is_playing = false;
        self.display.playing = false;
        if self.duration > 0.0 {
            self.display.elapsed = format_timestamp(self.duration);
            self.display.progress = 1.0;
        }
    }

    pub fn on_waiting(&mut self) {
        self.display.buffering = true;
    }

    pub fn on_can_play(&mut self) {
        self.display.buffering = false;
    }

    /// The play promise rejected (autoplay policy, network). State stays
    /// paused and the failure is user-visible only through the toast.
    pub fn on_play_rejected(&mut self, message: String) {
        self.state.is_playing = false;
        self.display.playing = false;
        self.show_feedback(message, ToastKind::Error);
    }

    pub fn on_media_error(&mut self, message: String) {
        self.state.is_playing = false;
        self.display.playing = false;
        self.display.buffering = false;
        self.show_feedback(message, ToastKind::Error);
    }

    /// The audio element got a new source: duration is unknown again and the
    /// seek slider goes inert until the next metadata load.
    pub fn on_source_changed(&mut self) {
        self.duration = 0.0;
        self.state.is_seeking = false;
        self.pending_seek = None;
        self.seek_window_open = false;
        self.timers.cancel(TimerKind::SeekPreview);
        self.display.elapsed = "00:00".to_string();
        self.display.duration = "--:--".to_string();
        self.display.progress = 0.0;
        self.display.seek_enabled = false;
        self.display.buffering = false;
    }

    // --- timers ---------------------------------------------------------

    pub fn on_timer(&mut self, kind: TimerKind) {
        match kind {
            TimerKind::SeekPreview => {
                self.seek_window_open = false;
                if let Some(fraction) = self.pending_seek.take() {
                    if self.state.is_seeking {
                        self.apply_seek_preview(fraction);
                    }
                }
            }
            TimerKind::ToastHide => {
                self.display.toast = None;
            }
        }
    }

    fn apply_seek_preview(&mut self, fraction: f64) {
        self.display.elapsed = format_timestamp(fraction * self.duration);
        self.display.progress = fraction;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Default)]
    struct FakeMedia {
        time: Cell<f64>,
        duration: Cell<f64>,
        paused: Cell<bool>,
        volume: Cell<f64>,
        muted: Cell<bool>,
        rate: Cell<f64>,
        play_requests: Cell<usize>,
        pause_calls: Cell<usize>,
    }

    impl FakeMedia {
        fn paused_with_duration(duration: f64) -> Self {
            let media = FakeMedia::default();
            media.paused.set(true);
            media.volume.set(1.0);
            media.rate.set(1.0);
            media.duration.set(duration);
            media
        }
    }

    impl MediaHandle for FakeMedia {
        fn current_time(&self) -> f64 {
            self.time.get()
        }
        fn set_current_time(&self, seconds: f64) {
            self.time.set(seconds);
        }
        fn duration(&self) -> f64 {
            self.duration.get()
        }
        fn paused(&self) -> bool {
            self.paused.get()
        }
        fn volume(&self) -> f64 {
            self.volume.get()
        }
        fn set_volume(&self, volume: f64) {
            self.volume.set(volume);
        }
        fn muted(&self) -> bool {
            self.muted.get()
        }
        fn set_muted(&self, muted: bool) {
            self.muted.set(muted);
        }
        fn playback_rate(&self) -> f64 {
            self.rate.get()
        }
        fn set_playback_rate(&self, rate: f64) {
            self.rate.set(rate);
        }
        fn request_play(&self) {
            // Browsers flip the paused flag immediately; the promise settles
            // later.
            self.play_requests.set(self.play_requests.get() + 1);
            self.paused.set(false);
        }
        fn pause(&self) {
            self.pause_calls.set(self.pause_calls.get() + 1);
            self.paused.set(true);
        }
    }

    #[derive(Default)]
    struct FakeTimers {
        scheduled: Vec<(TimerKind, u32)>,
        cancelled: Vec<TimerKind>,
    }

    impl TimerHost for FakeTimers {
        fn schedule(&mut self, kind: TimerKind, delay_ms: u32) {
            self.scheduled.push((kind, delay_ms));
        }
        fn cancel(&mut self, kind: TimerKind) {
            self.cancelled.push(kind);
        }
    }

    fn ready_player(duration: f64) -> PlayerController<FakeMedia, FakeTimers> {
        let mut player = PlayerController::new(
            FakeMedia::paused_with_duration(duration),
            FakeTimers::default(),
        );
        player.on_metadata_loaded();
        player
    }

    fn toast_message(player: &PlayerController<FakeMedia, FakeTimers>) -> &str {
        player
            .display()
            .toast
            .as_ref()
            .map(|t| t.message.as_str())
            .unwrap_or("")
    }

    #[test]
    fn volume_zero_reconciles_to_muted() {
        let mut player = ready_player(120.0);
        for &volume in &[1.0, 0.4, 0.0, 0.01] {
            player.set_volume(volume);
            assert_eq!(player.media.muted(), volume == 0.0, "volume {volume}");
            assert_eq!(player.display().muted, volume == 0.0);
            assert!((player.media.volume() - volume).abs() < 1e-12);
        }
    }

    #[test]
    fn mute_toggle_is_an_involution() {
        let mut player = ready_player(120.0);
        player.set_volume(0.73);
        player.toggle_mute();
        assert!(player.display().muted);
        assert_eq!(player.media.volume(), 0.0);
        player.toggle_mute();
        assert!(!player.display().muted);
        assert!((player.media.volume() - 0.73).abs() < 1e-12);
    }

    #[test]
    fn unmute_without_history_restores_default() {
        let media = FakeMedia::paused_with_duration(60.0);
        media.volume.set(0.0);
        media.muted.set(true);
        let mut player = PlayerController::new(media, FakeTimers::default());
        player.toggle_mute();
        assert!((player.media.volume() - DEFAULT_UNMUTE_VOLUME).abs() < 1e-12);
        assert!(!player.media.muted());
    }

    #[test]
    fn slider_to_zero_then_mute_toggle_restores_previous_volume() {
        let mut player = ready_player(120.0);
        player.set_volume(0.6);
        player.set_volume(0.0);
        assert!(player.display().muted);
        player.toggle_mute();
        assert!(!player.display().muted);
        assert!((player.display().volume - 0.6).abs() < 1e-12);
    }

    #[test]
    fn supported_speed_updates_indicator_and_checked_option() {
        let mut player = ready_player(120.0);
        player.toggle_speed_menu();
        player.set_playback_speed(1.25);
        assert_eq!(player.media.playback_rate(), 1.25);
        assert_eq!(speed_label(player.display().speed), "1.25x");
        assert!(!player.display().speed_menu_open, "menu closes on pick");
        let options = crate::player::state::speed_options(player.display().speed);
        assert_eq!(options.iter().filter(|(_, on)| *on).count(), 1);
        assert!(options.iter().any(|&(rate, on)| on && rate == 1.25));
        assert_eq!(toast_message(&player), "Speed 1.25x");
    }

    #[test]
    fn unsupported_speed_is_a_noop() {
        let mut player = ready_player(120.0);
        player.set_playback_speed(1.5);
        player.set_playback_speed(3.0);
        assert_eq!(player.media.playback_rate(), 1.5);
        assert_eq!(player.display().speed, 1.5);
    }

    #[test]
    fn scrub_preview_leaves_the_handle_untouched() {
        let mut player = ready_player(200.0);
        player.media.time.set(12.0);
        player.begin_seek(0.5);
        assert_eq!(player.display().elapsed, "01:40");
        assert_eq!(player.display().progress, 0.5);
        assert_eq!(player.media.current_time(), 12.0);
    }

    #[test]
    fn seek_commit_writes_position_and_toasts() {
        let mut player = ready_player(200.0);
        player.begin_seek(0.5);
        player.commit_seek(0.5);
        assert_eq!(player.media.current_time(), 100.0);
        assert_eq!(toast_message(&player), "Jumped to 01:40");
        assert!(!player.timers.cancelled.is_empty());
    }

    #[test]
    fn seek_commit_is_idempotent() {
        let mut player = ready_player(200.0);
        player.commit_seek(0.5);
        let first = player.media.current_time();
        player.commit_seek(0.5);
        assert!((player.media.current_time() - first).abs() < 1e-9);
    }

    #[test]
    fn fast_drags_collapse_to_the_latest_fraction() {
        let mut player = ready_player(100.0);
        player.begin_seek(0.1);
        player.begin_seek(0.2);
        player.begin_seek(0.3);
        // Leading edge applied immediately, the rest wait for the window.
        assert_eq!(player.display().progress, 0.1);
        let previews = player
            .timers
            .scheduled
            .iter()
            .filter(|(kind, _)| *kind == TimerKind::SeekPreview)
            .count();
        assert_eq!(previews, 1);
        player.on_timer(TimerKind::SeekPreview);
        assert_eq!(player.display().progress, 0.3);
        assert_eq!(player.display().elapsed, "00:30");
    }

    #[test]
    fn time_updates_are_ignored_while_seeking() {
        let mut player = ready_player(100.0);
        player.begin_seek(0.8);
        player.media.time.set(10.0);
        player.on_time_update();
        assert_eq!(player.display().progress, 0.8);
    }

    #[test]
    fn seek_is_inert_until_metadata_loads() {
        let media = FakeMedia::paused_with_duration(f64::NAN);
        let mut player = PlayerController::new(media, FakeTimers::default());
        assert!(!player.display().seek_enabled);
        player.begin_seek(0.5);
        player.commit_seek(0.5);
        assert_eq!(player.media.current_time(), 0.0);

        player.media.duration.set(90.0);
        player.on_metadata_loaded();
        assert!(player.display().seek_enabled);
        assert_eq!(player.display().duration, "01:30");
    }

    #[test]
    fn keyboard_seek_clamps_to_track_bounds() {
        let mut player = ready_player(120.0);
        player.media.time.set(3.0);
        player.apply_shortcut(ShortcutAction::SeekBack);
        assert_eq!(player.media.current_time(), 0.0);
        assert_eq!(toast_message(&player), "Jumped to 00:00");

        player.media.time.set(115.0);
        player.apply_shortcut(ShortcutAction::SeekForward);
        assert_eq!(player.media.current_time(), 120.0);
        assert_eq!(toast_message(&player), "Jumped to 02:00");
    }

    #[test]
    fn keyboard_volume_clamps_to_unit_range() {
        let mut player = ready_player(120.0);
        player.set_volume(0.98);
        player.apply_shortcut(ShortcutAction::VolumeUp);
        assert_eq!(player.display().volume, 1.0);
        assert_eq!(toast_message(&player), "Volume 100%");

        player.set_volume(0.03);
        player.apply_shortcut(ShortcutAction::VolumeDown);
        assert_eq!(player.display().volume, 0.0);
        assert!(player.display().muted);
        assert_eq!(toast_message(&player), "Volume 0%");
    }

    #[test]
    fn home_and_end_jump_to_track_edges() {
        let mut player = ready_player(200.0);
        player.media.time.set(50.0);
        player.apply_shortcut(ShortcutAction::JumpToEnd);
        assert_eq!(player.media.current_time(), 200.0);
        player.apply_shortcut(ShortcutAction::JumpToStart);
        assert_eq!(player.media.current_time(), 0.0);
    }

    #[test]
    fn play_toggle_toasts_the_resulting_state() {
        let mut player = ready_player(120.0);
        player.apply_shortcut(ShortcutAction::TogglePlay);
        assert_eq!(toast_message(&player), "Playing");
        assert_eq!(player.media.play_requests.get(), 1);
        player.apply_shortcut(ShortcutAction::TogglePlay);
        assert_eq!(toast_message(&player), "Paused");
        assert_eq!(player.media.pause_calls.get(), 1);
    }

    #[test]
    fn playing_flag_follows_media_events_not_requests() {
        let mut player = ready_player(120.0);
        player.toggle_play_pause();
        // Request sent; the state machine waits for the element's own event.
        assert!(!player.state.is_playing);
        player.on_play();
        assert!(player.state.is_playing);
        assert!(player.display().playing);
        player.on_pause();
        assert!(!player.state.is_playing);
        assert!(!player.display().playing);
    }

    #[test]
    fn rejected_play_stays_paused_and_reports() {
        let mut player = ready_player(120.0);
        player.toggle_play_pause();
        player.media.paused.set(true);
        player.on_play_rejected("Playback was blocked by the browser.".to_string());
        assert!(!player.display().playing);
        let toast = player.display().toast.clone().unwrap();
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(toast.message, "Playback was blocked by the browser.");
    }

    #[test]
    fn media_error_surfaces_as_error_toast() {
        let mut player = ready_player(120.0);
        player.on_play();
        player.on_media_error("Network error while loading this episode.".to_string());
        assert!(!player.display().playing);
        assert_eq!(
            player.display().toast.as_ref().map(|t| t.kind),
            Some(ToastKind::Error)
        );
    }

    #[test]
    fn new_toast_preempts_the_pending_hide_timer() {
        let mut player = ready_player(120.0);
        player.show_feedback("first".to_string(), ToastKind::Info);
        player.show_feedback("second".to_string(), ToastKind::Info);
        let hides = player
            .timers
            .scheduled
            .iter()
            .filter(|(kind, _)| *kind == TimerKind::ToastHide)
            .count();
        assert_eq!(hides, 2, "each toast re-arms the hide timer");
        assert_eq!(toast_message(&player), "second");
        player.on_timer(TimerKind::ToastHide);
        assert!(player.display().toast.is_none());
    }

    #[test]
    fn ended_snaps_display_to_the_end() {
        let mut player = ready_player(200.0);
        player.on_play();
        player.on_ended();
        assert!(!player.display().playing);
        assert_eq!(player.display().elapsed, "03:20");
        assert_eq!(player.display().progress, 1.0);
    }

    #[test]
    fn source_change_resets_duration_and_seek() {
        let mut player = ready_player(200.0);
        player.commit_seek(0.5);
        player.on_source_changed();
        assert!(!player.display().seek_enabled);
        assert_eq!(player.display().duration, "--:--");
        assert_eq!(player.display().elapsed, "00:00");
        assert_eq!(player.display().progress, 0.0);
    }

    #[test]
    fn waiting_and_canplay_drive_the_buffering_flag() {
        let mut player = ready_player(120.0);
        player.on_waiting();
        assert!(player.display().buffering);
        player.on_can_play();
        assert!(!player.display().buffering);
    }
}
