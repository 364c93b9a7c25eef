//! Raw input state

use glam::Vec2;
use std::collections::HashSet;
use winit::event::ElementState;
use winit::keyboard::KeyCode;

use super::edge::{Edge, KeyEdge};

/// Scroll wheel step applied per line of scroll
const SPEED_SCALE_STEP: f32 = 0.10;
/// Lower bound of the movement speed multiplier
const SPEED_SCALE_MIN: f32 = 0.10;
/// Upper bound of the movement speed multiplier
const SPEED_SCALE_MAX: f32 = 5.00;

/// Raw input state mutated by window callbacks and read by the
/// [`ViewManager`](crate::view::ViewManager) each frame.
///
/// Cursor tracking keeps the last sampled position so per-event deltas
/// can be computed; the first sample after look-capture begins only
/// seeds that position, suppressing the large jump an undefined initial
/// cursor would otherwise cause.
#[derive(Debug)]
pub struct InputState {
    /// Currently pressed keys
    pressed_keys: HashSet<KeyCode>,
    /// Last sampled cursor position, `None` until the first sample
    last_cursor: Option<Vec2>,
    /// Scroll-tunable multiplier applied to the base movement speed
    speed_scale: f32,
    /// Edge detector for the enter-orthographic key
    ortho_key: KeyEdge,
    /// Edge detector for the enter-perspective key
    persp_key: KeyEdge,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            pressed_keys: HashSet::new(),
            last_cursor: None,
            speed_scale: 1.0,
            ortho_key: KeyEdge::new(),
            persp_key: KeyEdge::new(),
        }
    }

    /// Process a keyboard event
    pub fn process_keyboard(&mut self, key_code: KeyCode, state: ElementState) {
        match state {
            ElementState::Pressed => {
                self.pressed_keys.insert(key_code);
            }
            ElementState::Released => {
                self.pressed_keys.remove(&key_code);
            }
        }
    }

    /// Check if a key is currently pressed
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.pressed_keys.contains(&key)
    }

    /// Consume a raw cursor position sample and return the look offset.
    ///
    /// The x component is the horizontal delta; the y component is
    /// inverted (screen y grows downward, looking up is positive). The
    /// first sample yields a zero offset and only seeds the tracked
    /// position.
    pub fn sample_cursor(&mut self, position: Vec2) -> Vec2 {
        let offset = match self.last_cursor {
            Some(last) => Vec2::new(position.x - last.x, last.y - position.y),
            None => Vec2::ZERO,
        };
        self.last_cursor = Some(position);
        offset
    }

    /// Apply a scroll sample to the movement speed multiplier
    pub fn adjust_speed(&mut self, y_offset: f32) {
        self.speed_scale = (self.speed_scale + y_offset * SPEED_SCALE_STEP)
            .clamp(SPEED_SCALE_MIN, SPEED_SCALE_MAX);
    }

    /// Current movement speed multiplier, always within [0.10, 5.00]
    pub fn speed_scale(&self) -> f32 {
        self.speed_scale
    }

    /// Sample the enter-orthographic key state and report its edge
    pub fn ortho_toggle(&mut self, down: bool) -> Edge {
        self.ortho_key.update(down)
    }

    /// Sample the enter-perspective key state and report its edge
    pub fn persp_toggle(&mut self, down: bool) -> Edge {
        self.persp_key.update(down)
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
    fn test_first_cursor_sample_yields_zero_offset() {
        let mut input = InputState::new();

        let offset = input.sample_cursor(Vec2::new(500.0, 400.0));
        assert_eq!(offset, Vec2::ZERO);

        // Second sample measures from the seeded position
        let offset = input.sample_cursor(Vec2::new(510.0, 390.0));
        assert!((offset.x - 10.0).abs() < 1e-6);
        assert!((offset.y - 10.0).abs() < 1e-6); // inverted: cursor up is positive
    }

    #[test]
    fn test_cursor_vertical_inversion() {
        let mut input = InputState::new();
        input.sample_cursor(Vec2::new(0.0, 0.0));

        // Cursor moving down the screen produces a negative look offset
        let offset = input.sample_cursor(Vec2::new(0.0, 25.0));
        assert!((offset.y + 25.0).abs() < 1e-6);
    }

    #[test]
    fn test_speed_scale_clamps_low() {
        let mut input = InputState::new();

        // -60 lines from 1.0 would be -5.0 raw; clamps to the floor
        input.adjust_speed(-60.0);
        assert!((input.speed_scale() - 0.10).abs() < 1e-6);
    }

    #[test]
    fn test_speed_scale_clamps_high() {
        let mut input = InputState::new();

        for _ in 0..100 {
            input.adjust_speed(1.0);
        }
        assert!((input.speed_scale() - 5.00).abs() < 1e-6);
    }

    #[test]
    fn test_speed_scale_step() {
        let mut input = InputState::new();

        input.adjust_speed(1.0);
        assert!((input.speed_scale() - 1.10).abs() < 1e-6);
        input.adjust_speed(-2.0);
        assert!((input.speed_scale() - 0.90).abs() < 1e-6);
    }

    #[test]
    fn test_key_press_and_release() {
        let mut input = InputState::new();

        input.process_keyboard(KeyCode::KeyW, ElementState::Pressed);
        assert!(input.is_key_pressed(KeyCode::KeyW));

        // OS key repeat re-delivers Pressed while held
        input.process_keyboard(KeyCode::KeyW, ElementState::Pressed);
        assert!(input.is_key_pressed(KeyCode::KeyW));

        input.process_keyboard(KeyCode::KeyW, ElementState::Released);
        assert!(!input.is_key_pressed(KeyCode::KeyW));
    }
}
