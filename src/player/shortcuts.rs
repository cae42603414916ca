//! Keyboard shortcut table.
//!
//! The mapping is pure so it can be tested without a browser; the wasm shell
//! is responsible for suppressing dispatch inside editable elements and when
//! the document is unfocused.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShortcutAction {
    TogglePlay,
    ToggleMute,
    SeekBack,
    SeekForward,
    VolumeUp,
    VolumeDown,
    ToggleSpeedMenu,
    JumpToStart,
    JumpToEnd,
    ToggleHelp,
}

/// Map a `KeyboardEvent::key()` value to a player action.
///
/// Any meta/ctrl/alt chord is left to the browser so shortcuts never shadow
/// copy/paste or navigation.
pub fn shortcut_for_key(key: &str, meta_or_ctrl: bool, alt: bool) -> Option<ShortcutAction> {
    if meta_or_ctrl || alt {
        return None;
    }

    match key {
        " " | "Spacebar" => Some(ShortcutAction::TogglePlay),
        "m" | "M" => Some(ShortcutAction::ToggleMute),
        "j" | "J" => Some(ShortcutAction::SeekBack),
        "k" | "K" => Some(ShortcutAction::SeekForward),
        "ArrowUp" => Some(ShortcutAction::VolumeUp),
        "ArrowDown" => Some(ShortcutAction::VolumeDown),
        "l" | "L" => Some(ShortcutAction::ToggleSpeedMenu),
        "Home" => Some(ShortcutAction::JumpToStart),
        "End" => Some(ShortcutAction::JumpToEnd),
        "?" => Some(ShortcutAction::ToggleHelp),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_the_player_keys() {
        assert_eq!(shortcut_for_key(" ", false, false), Some(ShortcutAction::TogglePlay));
        assert_eq!(shortcut_for_key("Spacebar", false, false), Some(ShortcutAction::TogglePlay));
        assert_eq!(shortcut_for_key("m", false, false), Some(ShortcutAction::ToggleMute));
        assert_eq!(shortcut_for_key("j", false, false), Some(ShortcutAction::SeekBack));
        assert_eq!(shortcut_for_key("K", false, false), Some(ShortcutAction::SeekForward));
        assert_eq!(shortcut_for_key("ArrowUp", false, false), Some(ShortcutAction::VolumeUp));
        assert_eq!(shortcut_for_key("ArrowDown", false, false), Some(ShortcutAction::VolumeDown));
        assert_eq!(shortcut_for_key("l", false, false), Some(ShortcutAction::ToggleSpeedMenu));
        assert_eq!(shortcut_for_key("Home", false, false), Some(ShortcutAction::JumpToStart));
        assert_eq!(shortcut_for_key("End", false, false), Some(ShortcutAction::JumpToEnd));
        assert_eq!(shortcut_for_key("?", false, false), Some(ShortcutAction::ToggleHelp));
    }

    #[test]
    fn ignores_unrelated_keys() {
        assert_eq!(shortcut_for_key("a", false, false), None);
        assert_eq!(shortcut_for_key("Enter", false, false), None);
        assert_eq!(shortcut_for_key("ArrowLeft", false, false), None);
    }

    #[test]
    fn modifier_chords_fall_through_to_the_browser() {
        assert_eq!(shortcut_for_key(" ", true, false), None);
        assert_eq!(shortcut_for_key("m", false, true), None);
        assert_eq!(shortcut_for_key("Home", true, true), None);
    }
}
