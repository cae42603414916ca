//! The seam to the browser's playback primitive.

/// A reference to the media element that owns actual decoding and transport.
///
/// The controller never assumes a play request succeeded: `request_play` is
/// fire-and-forget, and the `play`/`pause` lifecycle events (or
/// `on_play_rejected`) are the source of truth for the playing flag.
pub trait MediaHandle {
    /// Current playback position in seconds.
    fn current_time(&self) -> f64;
    fn set_current_time(&self, seconds: f64);

    /// Track duration in seconds; NaN until metadata has loaded.
    fn duration(&self) -> f64;

    fn paused(&self) -> bool;

    fn volume(&self) -> f64;
    fn set_volume(&self, volume: f64);

    fn muted(&self) -> bool;
    fn set_muted(&self, muted: bool);

    fn playback_rate(&self) -> f64;
    fn set_playback_rate(&self, rate: f64);

    /// Ask the element to start playing. The outcome arrives asynchronously
    /// as a `play` event or a rejection routed to the controller.
    fn request_play(&self);

    /// Stop playback. Synchronous on every browser.
    fn pause(&self);
}
