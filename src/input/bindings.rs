//! Key-to-action bindings
//!
//! Maps logical viewer actions to physical keys so the update loop polls
//! actions instead of hardcoded key codes, and bindings stay rebindable.

use rustc_hash::FxHashMap;
use winit::keyboard::KeyCode;

use super::InputState;

/// Logical actions the viewer responds to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewerAction {
    /// Move along the camera front vector
    MoveForward,
    /// Move against the camera front vector
    MoveBackward,
    /// Strafe left
    StrafeLeft,
    /// Strafe right
    StrafeRight,
    /// Fly up along the world up axis
    MoveUp,
    /// Fly down along the world up axis
    MoveDown,
    /// Switch to the fixed orthographic inspection view
    EnterOrthographic,
    /// Switch to the perspective free-look camera
    EnterPerspective,
    /// Request the window to close
    Quit,
}

/// Binding table from actions to physical keys
#[derive(Debug)]
pub struct KeyBindings {
    map: FxHashMap<ViewerAction, KeyCode>,
}

impl KeyBindings {
    /// Bindings used by the viewer: WASD + Q/E movement, O/P projection
    /// switch, Escape to quit
    pub fn with_defaults() -> Self {
        let mut map = FxHashMap::default();
        map.insert(ViewerAction::MoveForward, KeyCode::KeyW);
        map.insert(ViewerAction::MoveBackward, KeyCode::KeyS);
        map.insert(ViewerAction::StrafeLeft, KeyCode::KeyA);
        map.insert(ViewerAction::StrafeRight, KeyCode::KeyD);
        map.insert(ViewerAction::MoveUp, KeyCode::KeyQ);
        map.insert(ViewerAction::MoveDown, KeyCode::KeyE);
        map.insert(ViewerAction::EnterOrthographic, KeyCode::KeyO);
        map.insert(ViewerAction::EnterPerspective, KeyCode::KeyP);
        map.insert(ViewerAction::Quit, KeyCode::Escape);
        Self { map }
    }

    /// Rebind an action to a different key
    pub fn bind(&mut self, action: ViewerAction, key: KeyCode) {
        self.map.insert(action, key);
    }

    /// The key currently bound to an action
    pub fn key(&self, action: ViewerAction) -> Option<KeyCode> {
        self.map.get(&action).copied()
    }

    /// Whether the key bound to an action is currently held
    pub fn is_down(&self, input: &InputState, action: ViewerAction) -> bool {
        self.key(action)
            .is_some_and(|key| input.is_key_pressed(key))
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::event::ElementState;

    #[test]
    fn test_default_bindings() {
        let bindings = KeyBindings::with_defaults();

        assert_eq!(bindings.key(ViewerAction::MoveForward), Some(KeyCode::KeyW));
        assert_eq!(
            bindings.key(ViewerAction::EnterOrthographic),
            Some(KeyCode::KeyO)
        );
        assert_eq!(bindings.key(ViewerAction::Quit), Some(KeyCode::Escape));
    }

    #[test]
    fn test_is_down_follows_input_state() {
        let bindings = KeyBindings::with_defaults();
        let mut input = InputState::new();

        assert!(!bindings.is_down(&input, ViewerAction::MoveForward));

        input.process_keyboard(KeyCode::KeyW, ElementState::Pressed);
        assert!(bindings.is_down(&input, ViewerAction::MoveForward));

        input.process_keyboard(KeyCode::KeyW, ElementState::Released);
        assert!(!bindings.is_down(&input, ViewerAction::MoveForward));
    }

    #[test]
    fn test_rebind() {
        let mut bindings = KeyBindings::with_defaults();
        let mut input = InputState::new();

        bindings.bind(ViewerAction::MoveForward, KeyCode::ArrowUp);
        input.process_keyboard(KeyCode::ArrowUp, ElementState::Pressed);

        assert!(bindings.is_down(&input, ViewerAction::MoveForward));
    }
}
