//! Owned player state. The controller is the only writer.

/// Playback rates offered by the speed menu, ascending.
pub const SPEED_STEPS: [f64; 7] = [0.5, 0.75, 1.0, 1.25, 1.5, 1.75, 2.0];

/// Volume restored on unmute when the user never picked one.
pub const DEFAULT_UNMUTE_VOLUME: f64 = 0.5;

/// What a feedback toast is about; controls the banner styling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Error,
}

/// Transient on-screen message, auto-hidden by the controller.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
}

/// Playback-facing state derived from user intents and media events.
#[derive(Clone, Debug, PartialEq)]
pub struct PlaybackState {
    pub is_playing: bool,
    pub is_muted: bool,
    /// Always within [0, 1].
    pub volume: f64,
    /// Always a member of [`SPEED_STEPS`].
    pub playback_rate: f64,
    /// True only while the user drags the seek slider.
    pub is_seeking: bool,
    /// Pre-mute volume, restored on unmute. None until the user sets one.
    pub last_volume: Option<f64>,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            is_playing: false,
            is_muted: false,
            volume: 1.0,
            playback_rate: 1.0,
            is_seeking: false,
            last_volume: None,
        }
    }
}

/// Everything the player bar renders. Mirrored into a Dioxus signal by the
/// wasm shell after every controller call.
#[derive(Clone, Debug, PartialEq)]
pub struct DisplayState {
    pub playing: bool,
    pub muted: bool,
    pub volume: f64,
    pub elapsed: String,
    pub duration: String,
    /// Progress fraction in [0, 1]; the scrub preview while seeking.
    pub progress: f64,
    /// The seek slider stays inert until metadata reports a usable duration.
    pub seek_enabled: bool,
    pub speed: f64,
    pub speed_menu_open: bool,
    pub help_open: bool,
    pub buffering: bool,
    pub toast: Option<Toast>,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self {
            playing: false,
            muted: false,
            volume: 1.0,
            elapsed: "00:00".to_string(),
            duration: "--:--".to_string(),
            progress: 0.0,
            seek_enabled: false,
            speed: 1.0,
            speed_menu_open: false,
            help_open: false,
            buffering: false,
            toast: None,
        }
    }
}

/// Indicator text for a playback rate, e.g. `1x`, `1.25x`.
pub fn speed_label(rate: f64) -> String {
    format!("{rate}x")
}

/// The speed menu entries with their checked flags for `current`.
pub fn speed_options(current: f64) -> [(f64, bool); SPEED_STEPS.len()] {
    let mut options = [(0.0, false); SPEED_STEPS.len()];
    for (slot, &step) in options.iter_mut().zip(SPEED_STEPS.iter()) {
        *slot = (step, (step - current).abs() < f64::EPSILON);
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speed_labels_drop_trailing_zeroes() {
        assert_eq!(speed_label(1.0), "1x");
        assert_eq!(speed_label(0.5), "0.5x");
        assert_eq!(speed_label(1.25), "1.25x");
    }

    #[test]
    fn speed_options_mark_exactly_one_entry() {
        for &step in &SPEED_STEPS {
            let checked = speed_options(step).iter().filter(|(_, on)| *on).count();
            assert_eq!(checked, 1, "rate {step}");
        }
        let none = speed_options(3.0).iter().filter(|(_, on)| *on).count();
        assert_eq!(none, 0);
    }
}
