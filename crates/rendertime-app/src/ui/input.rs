use eframe::egui::{InputState, Key, Modifiers};

use crate::action::{Action, ActionRequestQueue};

struct Shortcut {
    modifiers: Modifiers,
    key: Key,
    action: Action,
}

impl Shortcut {
    const fn command(key: Key, action: Action) -> Self {
        Self {
            modifiers: Modifiers::COMMAND,
            key,
            action,
        }
    }
}

// Enter is handled by the text fields themselves so it only fires while editing.
const SHORTCUTS: [Shortcut; 2] = [
    Shortcut::command(Key::Q, Action::Exit),
    Shortcut::command(Key::Backspace, Action::ClearInputs),
];

/// Turns shortcut key presses into actions.
///
/// Matching events are consumed, so a focused text field never sees them.
/// Must run before the widgets are drawn.
pub fn handle_input(i: &mut InputState, action_queue: &mut ActionRequestQueue) {
    if let Some(action) = triggered_action(|modifiers, key| i.consume_key(modifiers, key)) {
        action_queue.request(action);
    }
}

fn triggered_action(mut consume_key: impl FnMut(Modifiers, Key) -> bool) -> Option<Action> {
    // `Modifiers::COMMAND` matches Ctrl (Windows/Linux) or Cmd (Mac)
    SHORTCUTS
        .into_iter()
        .find(|shortcut| consume_key(shortcut.modifiers, shortcut.key))
        .map(|shortcut| shortcut.action)
}
