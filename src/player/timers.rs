//! Cancellable one-shot timers owned by the controller.

/// Seek previews coalesce drag events inside this window.
pub const SEEK_PREVIEW_DEBOUNCE_MS: u32 = 100;

/// Feedback toasts auto-hide after this long.
pub const TOAST_HIDE_MS: u32 = 1500;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerKind {
    SeekPreview,
    ToastHide,
}

/// One pending timer per [`TimerKind`]; scheduling a kind replaces any timer
/// of the same kind already pending (last write wins, no leaked handles).
/// When a timer fires the host calls `PlayerController::on_timer`.
pub trait TimerHost {
    fn schedule(&mut self, kind: TimerKind, delay_ms: u32);
    fn cancel(&mut self, kind: TimerKind);
}
