//! View orchestration
//!
//! `ViewManager` owns the camera, input state, projection mode, and
//! frame clock, and turns raw window events plus per-frame key polling
//! into the view/projection/eye uniforms handed to the renderer.

use glam::Vec2;

use crate::core::FrameClock;
use crate::input::{InputState, KeyBindings, ViewerAction};

use super::projection::{ProjectionController, ProjectionMode, ViewUniforms};
use super::Camera;

/// Degrees of look rotation per pixel of cursor travel
const MOUSE_SENSITIVITY: f32 = 0.10;
/// Movement speed in world units per second before the speed scale
const BASE_MOVE_SPEED: f32 = 6.0;
/// Pitch clamp keeping the camera away from the gimbal poles
const PITCH_LIMIT_DEG: f32 = 89.0;

/// Orchestrates all view state for the frame loop.
///
/// Mouse and scroll events are applied as they arrive; keyboard state
/// is polled once per frame from [`tick`](Self::tick). All of it runs
/// on the event-loop thread, so none of this needs locking.
#[derive(Debug)]
pub struct ViewManager {
    camera: Camera,
    input: InputState,
    projection: ProjectionController,
    clock: FrameClock,
    bindings: KeyBindings,
    close_requested: bool,
}

impl ViewManager {
    pub fn new() -> Self {
        Self {
            camera: Camera::new(),
            input: InputState::new(),
            projection: ProjectionController::new(),
            clock: FrameClock::new(),
            bindings: KeyBindings::with_defaults(),
            close_requested: false,
        }
    }

    /// Input state, for forwarding keyboard events
    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn mode(&self) -> ProjectionMode {
        self.projection.mode()
    }

    /// Whether the quit key asked the outer loop to close the window
    pub fn close_requested(&self) -> bool {
        self.close_requested
    }

    /// Apply a raw cursor position sample.
    ///
    /// Used when the cursor is merely confined: positions keep
    /// reporting, and per-event deltas are derived from them. The
    /// orthographic inspection view deliberately ignores the look
    /// offset, though the sample is still consumed so the tracked
    /// cursor position stays current for the switch back.
    pub fn handle_cursor(&mut self, position: Vec2) {
        let offset = self.input.sample_cursor(position);
        self.apply_look(offset);
    }

    /// Apply a raw mouse motion delta.
    ///
    /// Used when the cursor is locked: the OS pins the cursor and stops
    /// reporting positions, so look runs on device deltas instead.
    /// Deltas arrive in screen coordinates, so the vertical axis is
    /// inverted here; there is no position to seed, so the first delta
    /// applies in full.
    pub fn handle_mouse_motion(&mut self, delta: Vec2) {
        self.apply_look(Vec2::new(delta.x, -delta.y));
    }

    /// Orientation only changes in perspective mode
    fn apply_look(&mut self, offset: Vec2) {
        let offset = offset * MOUSE_SENSITIVITY;

        if self.projection.mode() == ProjectionMode::Perspective {
            let yaw = self.camera.yaw() + offset.x;
            // Sole pitch clamp: the camera trusts its callers
            let pitch =
                (self.camera.pitch() + offset.y).clamp(-PITCH_LIMIT_DEG, PITCH_LIMIT_DEG);
            self.camera.set_orientation(yaw, pitch);
        }
    }

    /// Apply a scroll sample; tunes movement speed, never zoom
    pub fn handle_scroll(&mut self, y_offset: f32) {
        self.input.adjust_speed(y_offset);
    }

    /// Advance one frame: poll keys, integrate movement, and derive the
    /// uniforms for the active projection mode.
    pub fn tick(&mut self, aspect: f32) -> ViewUniforms {
        let dt = self.clock.tick();
        self.step(dt);
        self.projection.view_uniforms(&self.camera, aspect)
    }

    /// Keyboard polling and movement integration for one frame of `dt`
    /// seconds
    fn step(&mut self, dt: f32) {
        if self.bindings.is_down(&self.input, ViewerAction::Quit) {
            self.close_requested = true;
        }

        // Mode switches are edge-triggered so a held key fires once
        let ortho_down = self
            .bindings
            .is_down(&self.input, ViewerAction::EnterOrthographic);
        if self.input.ortho_toggle(ortho_down).rising() {
            self.projection.enter(ProjectionMode::Orthographic);
        }

        let persp_down = self
            .bindings
            .is_down(&self.input, ViewerAction::EnterPerspective);
        if self.input.persp_toggle(persp_down).rising() {
            self.projection.enter(ProjectionMode::Perspective);
        }

        // Movement only applies to the free-look camera
        if self.projection.mode() != ProjectionMode::Perspective {
            return;
        }

        let velocity = BASE_MOVE_SPEED * self.input.speed_scale() * dt;

        if self.bindings.is_down(&self.input, ViewerAction::MoveForward) {
            self.camera.move_along_front(velocity);
        }
        if self.bindings.is_down(&self.input, ViewerAction::MoveBackward) {
            self.camera.move_along_front(-velocity);
        }
        if self.bindings.is_down(&self.input, ViewerAction::StrafeLeft) {
            self.camera.strafe_right(-velocity);
        }
        if self.bindings.is_down(&self.input, ViewerAction::StrafeRight) {
            self.camera.strafe_right(velocity);
        }
        if self.bindings.is_down(&self.input, ViewerAction::MoveUp) {
            self.camera.move_along_world_up(velocity);
        }
        if self.bindings.is_down(&self.input, ViewerAction::MoveDown) {
            self.camera.move_along_world_up(-velocity);
        }
    }
}

impl Default for ViewManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use winit::event::ElementState;
    use winit::keyboard::KeyCode;

    fn press(view: &mut ViewManager, key: KeyCode) {
        view.input_mut().process_keyboard(key, ElementState::Pressed);
    }

    fn release(view: &mut ViewManager, key: KeyCode) {
        view.input_mut()
            .process_keyboard(key, ElementState::Released);
    }

    #[test]
    fn test_mouse_delta_scales_by_sensitivity() {
        let mut view = ViewManager::new();
        let start_yaw = view.camera().yaw();
        let start_pitch = view.camera().pitch();

        view.handle_cursor(Vec2::new(500.0, 400.0)); // seed
        view.handle_cursor(Vec2::new(550.0, 400.0)); // dx = 50

        assert!((view.camera().yaw() - start_yaw - 5.0).abs() < 1e-4);
        assert!((view.camera().pitch() - start_pitch).abs() < 1e-4);
    }

    #[test]
    fn test_raw_motion_drives_look_without_position_samples() {
        let mut view = ViewManager::new();
        let start_yaw = view.camera().yaw();

        // A pinned cursor reports the same position forever; those
        // samples must not be required for look to work
        for _ in 0..5 {
            view.handle_cursor(Vec2::new(500.0, 400.0));
        }
        assert!((view.camera().yaw() - start_yaw).abs() < 1e-6);

        // The first device delta applies in full, no seeding sample
        view.handle_mouse_motion(Vec2::new(50.0, 0.0));
        assert!((view.camera().yaw() - start_yaw - 5.0).abs() < 1e-4);
    }

    #[test]
    fn test_raw_motion_inverts_vertical_axis() {
        let mut view = ViewManager::new();
        let start_pitch = view.camera().pitch();

        // Device deltas grow downward; moving the mouse down looks down
        view.handle_mouse_motion(Vec2::new(0.0, 30.0));
        assert!((view.camera().pitch() - start_pitch + 3.0).abs() < 1e-4);
    }

    #[test]
    fn test_raw_motion_suppressed_in_orthographic() {
        let mut view = ViewManager::new();
        press(&mut view, KeyCode::KeyO);
        view.step(0.016);

        let yaw = view.camera().yaw();
        let pitch = view.camera().pitch();
        view.handle_mouse_motion(Vec2::new(200.0, -80.0));

        assert!((view.camera().yaw() - yaw).abs() < 1e-6);
        assert!((view.camera().pitch() - pitch).abs() < 1e-6);
    }

    #[test]
    fn test_raw_motion_pitch_clamped() {
        let mut view = ViewManager::new();

        view.handle_mouse_motion(Vec2::new(0.0, -1_000_000.0));
        assert!((view.camera().pitch() - 89.0).abs() < 1e-4);
    }

    #[test]
    fn test_pitch_clamped_against_huge_delta() {
        let mut view = ViewManager::new();

        view.handle_cursor(Vec2::new(0.0, 0.0));
        // Adversarial single-sample jump of a million pixels upward
        view.handle_cursor(Vec2::new(0.0, -1_000_000.0));
        assert!((view.camera().pitch() - 89.0).abs() < 1e-4);

        view.handle_cursor(Vec2::new(0.0, 1_000_000.0));
        assert!((view.camera().pitch() + 89.0).abs() < 1e-4);

        assert!((view.camera().front().length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_mouse_look_suppressed_in_orthographic() {
        let mut view = ViewManager::new();
        view.handle_cursor(Vec2::new(0.0, 0.0));

        press(&mut view, KeyCode::KeyO);
        view.step(0.016);
        assert_eq!(view.mode(), ProjectionMode::Orthographic);

        let yaw = view.camera().yaw();
        view.handle_cursor(Vec2::new(50.0, 0.0));
        assert!((view.camera().yaw() - yaw).abs() < 1e-6);

        // The sample was still consumed: back in perspective, a
        // same-position sample produces no jump
        release(&mut view, KeyCode::KeyO);
        press(&mut view, KeyCode::KeyP);
        view.step(0.016);
        view.handle_cursor(Vec2::new(50.0, 0.0));
        assert!((view.camera().yaw() - yaw).abs() < 1e-6);
    }

    #[test]
    fn test_mode_toggle_is_edge_triggered() {
        let mut view = ViewManager::new();

        press(&mut view, KeyCode::KeyO);
        for _ in 0..5 {
            view.step(0.016);
        }
        assert_eq!(view.mode(), ProjectionMode::Orthographic);

        // P fires while O is still held; the consumed O edge must not
        // re-trigger on later polls
        press(&mut view, KeyCode::KeyP);
        view.step(0.016);
        assert_eq!(view.mode(), ProjectionMode::Perspective);
        for _ in 0..5 {
            view.step(0.016);
        }
        assert_eq!(view.mode(), ProjectionMode::Perspective);
    }

    #[test]
    fn test_movement_is_frame_rate_independent() {
        let mut a = ViewManager::new();
        let mut b = ViewManager::new();
        press(&mut a, KeyCode::KeyW);
        press(&mut b, KeyCode::KeyW);

        for _ in 0..10 {
            a.step(0.01);
        }
        b.step(0.10);

        let drift = (a.camera().position - b.camera().position).length();
        assert!(drift < 1e-4, "drift = {drift}");
    }

    #[test]
    fn test_movement_speed_and_direction() {
        let mut view = ViewManager::new();
        let start = view.camera().position;
        let front = view.camera().front();

        press(&mut view, KeyCode::KeyW);
        view.step(0.5);

        // base 6.0 * scale 1.0 * dt 0.5 = 3.0 units along front
        let moved = view.camera().position - start;
        assert!((moved - front * 3.0).length() < 1e-4);
    }

    #[test]
    fn test_movement_ignored_in_orthographic() {
        let mut view = ViewManager::new();
        press(&mut view, KeyCode::KeyO);
        view.step(0.016);

        let pose = view.camera().position;
        let yaw = view.camera().yaw();

        for key in [
            KeyCode::KeyW,
            KeyCode::KeyA,
            KeyCode::KeyS,
            KeyCode::KeyD,
            KeyCode::KeyQ,
            KeyCode::KeyE,
        ] {
            press(&mut view, key);
        }
        for _ in 0..10 {
            view.step(0.1);
        }
        assert_eq!(view.camera().position, pose);

        // Switching back restores the exact perspective pose
        press(&mut view, KeyCode::KeyP);
        view.step(0.0);
        assert_eq!(view.camera().position, pose);
        assert_eq!(view.camera().yaw(), yaw);
    }

    #[test]
    fn test_scroll_tunes_speed_not_zoom() {
        let mut view = ViewManager::new();
        let zoom = view.camera().zoom;

        view.handle_scroll(3.0);
        press(&mut view, KeyCode::KeyW);
        let start = view.camera().position;
        view.step(1.0);

        // scale clamped arithmetic: 1.0 + 0.3 = 1.3 -> 7.8 units
        let moved = (view.camera().position - start).length();
        assert!((moved - 7.8).abs() < 1e-3);
        assert_eq!(view.camera().zoom, zoom);
    }

    #[test]
    fn test_quit_key_sets_flag_only() {
        let mut view = ViewManager::new();
        assert!(!view.close_requested());

        press(&mut view, KeyCode::Escape);
        view.step(0.016);

        assert!(view.close_requested());
        // The flag is sticky for the outer loop to observe
        release(&mut view, KeyCode::Escape);
        view.step(0.016);
        assert!(view.close_requested());
    }
}
