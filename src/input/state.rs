//! Input state management
//!
//! Polls keyboard and mouse (macroquad) once per frame and turns them into
//! a list of actions.

use macroquad::prelude::*;
use super::Action;
use crate::ui::NavButtons;

/// Map a key to its action
pub fn action_for_key(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Right | KeyCode::D | KeyCode::Space | KeyCode::PageDown => Some(Action::NextPage),
        KeyCode::Left | KeyCode::A | KeyCode::PageUp => Some(Action::PreviousPage),
        KeyCode::O => Some(Action::OpenPhotos),
        KeyCode::Escape => Some(Action::Quit),
        _ => None,
    }
}

/// Keys checked each frame
const BOUND_KEYS: &[KeyCode] = &[
    KeyCode::Right,
    KeyCode::D,
    KeyCode::Space,
    KeyCode::PageDown,
    KeyCode::Left,
    KeyCode::A,
    KeyCode::PageUp,
    KeyCode::O,
    KeyCode::Escape,
];

/// Per-frame input collection
pub struct InputState {
    /// Page-turn input is ignored until the book is visible
    pub navigation_enabled: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self { navigation_enabled: false }
    }

    /// Actions triggered this frame, in key order then mouse
    pub fn poll(&self, buttons: &NavButtons) -> Vec<Action> {
        let mut actions: Vec<Action> = BOUND_KEYS
            .iter()
            .filter(|&&key| is_key_pressed(key))
            .filter_map(|&key| action_for_key(key))
            .collect();

        if is_mouse_button_pressed(MouseButton::Left) {
            let (mx, my) = mouse_position();
            if let Some(action) = buttons.hit(mx, my) {
                actions.push(action);
            }
        }

        self.enabled(&mut actions);
        actions
    }

    /// Drop page turns while navigation is off. Repeats are kept; the
    /// controller ignores a turn requested mid-transition anyway.
    fn enabled(&self, actions: &mut Vec<Action>) {
        actions.retain(|a| self.navigation_enabled || !a.is_navigation());
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_bindings() {
        assert_eq!(action_for_key(KeyCode::Right), Some(Action::NextPage));
        assert_eq!(action_for_key(KeyCode::Space), Some(Action::NextPage));
        assert_eq!(action_for_key(KeyCode::A), Some(Action::PreviousPage));
        assert_eq!(action_for_key(KeyCode::O), Some(Action::OpenPhotos));
        assert_eq!(action_for_key(KeyCode::Z), None);
    }

    #[test]
    fn test_enabled_keeps_order_and_repeats() {
        let mut state = InputState::new();
        let frame = vec![Action::NextPage, Action::OpenPhotos, Action::NextPage, Action::PreviousPage];

        let mut actions = frame.clone();
        state.enabled(&mut actions);
        assert_eq!(actions, vec![Action::OpenPhotos]);

        state.navigation_enabled = true;
        let mut actions = frame.clone();
        state.enabled(&mut actions);
        assert_eq!(actions, frame);
    }

    #[test]
    fn test_every_bound_key_has_action() {
        assert!(BOUND_KEYS.iter().all(|&k| action_for_key(k).is_some()));
    }
}
