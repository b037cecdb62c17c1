// Keyboard shortcuts handled while the widget has focus.

/// What a key press asks the player to do
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShortcutAction {
    TogglePlayback,
    /// Relative seek in seconds
    SeekBy(f64),
    /// Relative volume change
    VolumeBy(f64),
    Previous,
    Next,
}

/// Map a key name (DOM `KeyboardEvent.key`) to an action.
///
/// Presses with Ctrl/Meta/Alt held belong to the browser and are ignored.
pub fn shortcut_action(
    key: &str,
    modifier_held: bool,
    seek_step: f64,
    volume_step: f64,
) -> Option<ShortcutAction> {
    if modifier_held {
        return None;
    }

    match key {
        " " | "Spacebar" | "k" | "K" | "MediaPlayPause" => Some(ShortcutAction::TogglePlayback),
        "ArrowLeft" => Some(ShortcutAction::SeekBy(-seek_step)),
        "ArrowRight" => Some(ShortcutAction::SeekBy(seek_step)),
        "ArrowUp" => Some(ShortcutAction::VolumeBy(volume_step)),
        "ArrowDown" => Some(ShortcutAction::VolumeBy(-volume_step)),
        "p" | "P" | "MediaTrackPrevious" => Some(ShortcutAction::Previous),
        "n" | "N" | "MediaTrackNext" => Some(ShortcutAction::Next),
        _ => None,
    }
}

/// Focusable widgets inside the player that own some keys natively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    Button,
    Slider,
}

/// Whether a focused control keeps `key` for its own behavior.
///
/// Keys a control consumes stop at the control and never reach the
/// widget-level shortcut handler.
pub fn control_consumes_key(kind: ControlKind, key: &str) -> bool {
    match kind {
        ControlKind::Button => matches!(key, " " | "Spacebar" | "Enter"),
        ControlKind::Slider => matches!(
            key,
            "ArrowLeft" | "ArrowRight" | "ArrowUp" | "ArrowDown" | "Home" | "End" | "PageUp" | "PageDown"
        ),
    }
}
