//! Projection mode state machine

use glam::{Mat4, Vec3};

use super::Camera;

/// Near clipping plane, shared by both modes
const NEAR_PLANE: f32 = 0.1;
/// Far clipping plane, shared by both modes
const FAR_PLANE: f32 = 100.0;

/// Fixed orthographic eye, lined up with the mug on the tabletop
const ORTHO_EYE: Vec3 = Vec3::new(-2.0, 0.95, 8.0);
/// Fixed orthographic look target
const ORTHO_TARGET: Vec3 = Vec3::new(-2.0, 0.95, -1.0);
/// Orthographic half extent; tight enough to crop the floor out of frame
const ORTHO_HALF_EXTENT: f32 = 0.85;

/// Active projection mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectionMode {
    /// Free-look camera with a perspective projection
    Perspective,
    /// Fixed inspection framing with an orthographic projection
    Orthographic,
}

/// The three values published to the shader boundary each frame
#[derive(Debug, Clone, Copy)]
pub struct ViewUniforms {
    pub view: Mat4,
    pub projection: Mat4,
    /// Viewer world position, used by the lighting calculations
    pub eye: Vec3,
}

/// Selects between the perspective free-look view and the fixed
/// orthographic inspection view.
///
/// The orthographic parameters are hand-tuned constants rather than a
/// snapshot of the live camera: switching modes must never leave the
/// viewer in a disorienting orthographic pose, so the framing is
/// deliberately decoupled from free-look state.
#[derive(Debug)]
pub struct ProjectionController {
    mode: ProjectionMode,
}

impl ProjectionController {
    /// Start in perspective free-look
    pub fn new() -> Self {
        Self {
            mode: ProjectionMode::Perspective,
        }
    }

    /// Currently active mode
    pub fn mode(&self) -> ProjectionMode {
        self.mode
    }

    /// Enter a mode. Always legal; re-entering the active mode is a
    /// no-op.
    pub fn enter(&mut self, mode: ProjectionMode) {
        if self.mode != mode {
            log::debug!("projection mode: {:?} -> {:?}", self.mode, mode);
            self.mode = mode;
        }
    }

    /// Derive the view/projection matrices and eye position for the
    /// active mode. The camera is only consulted in perspective mode.
    pub fn view_uniforms(&self, camera: &Camera, aspect: f32) -> ViewUniforms {
        match self.mode {
            ProjectionMode::Perspective => ViewUniforms {
                view: camera.view_matrix(),
                projection: Mat4::perspective_rh(
                    camera.zoom.to_radians(),
                    aspect,
                    NEAR_PLANE,
                    FAR_PLANE,
                ),
                eye: camera.position,
            },
            ProjectionMode::Orthographic => ViewUniforms {
                view: Mat4::look_at_rh(ORTHO_EYE, ORTHO_TARGET, Vec3::Y),
                projection: Mat4::orthographic_rh(
                    -ORTHO_HALF_EXTENT * aspect,
                    ORTHO_HALF_EXTENT * aspect,
                    -ORTHO_HALF_EXTENT,
                    ORTHO_HALF_EXTENT,
                    NEAR_PLANE,
                    FAR_PLANE,
                ),
                eye: ORTHO_EYE,
            },
        }
    }
}

impl Default for ProjectionController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn mat_diff(a: Mat4, b: Mat4) -> f32 {
        (a.to_cols_array()
            .iter()
            .zip(b.to_cols_array().iter())
            .map(|(x, y)| (x - y) * (x - y))
            .sum::<f32>())
        .sqrt()
    }

    #[test]
    fn test_starts_in_perspective() {
        let controller = ProjectionController::new();
        assert_eq!(controller.mode(), ProjectionMode::Perspective);
    }

    #[test]
    fn test_transitions_always_legal() {
        let mut controller = ProjectionController::new();

        controller.enter(ProjectionMode::Orthographic);
        assert_eq!(controller.mode(), ProjectionMode::Orthographic);

        // Self-transition is a no-op
        controller.enter(ProjectionMode::Orthographic);
        assert_eq!(controller.mode(), ProjectionMode::Orthographic);

        controller.enter(ProjectionMode::Perspective);
        assert_eq!(controller.mode(), ProjectionMode::Perspective);
    }

    #[test]
    fn test_perspective_uses_live_camera() {
        let controller = ProjectionController::new();
        let mut camera = Camera::new();

        let before = controller.view_uniforms(&camera, 1.25);
        camera.position += Vec3::new(3.0, 0.0, 0.0);
        let after = controller.view_uniforms(&camera, 1.25);

        assert!(mat_diff(before.view, after.view) > 1e-3);
        assert_eq!(after.eye, camera.position);
    }

    #[test]
    fn test_orthographic_ignores_live_camera() {
        let mut controller = ProjectionController::new();
        controller.enter(ProjectionMode::Orthographic);

        let mut camera = Camera::new();
        let before = controller.view_uniforms(&camera, 1.25);

        camera.position = Vec3::new(40.0, -7.0, 2.0);
        camera.set_orientation(35.0, 80.0);
        let after = controller.view_uniforms(&camera, 1.25);

        // The inspection view is a fixed framing, not camera-driven
        assert!(mat_diff(before.view, after.view) < 1e-6);
        assert!(mat_diff(before.projection, after.projection) < 1e-6);
        assert_eq!(after.eye, ORTHO_EYE);
    }

    #[test]
    fn test_orthographic_extent_scales_with_aspect() {
        let mut controller = ProjectionController::new();
        controller.enter(ProjectionMode::Orthographic);
        let camera = Camera::new();

        let aspect = 1000.0 / 800.0;
        let uniforms = controller.view_uniforms(&camera, aspect);

        // Reconstruct the right edge: ortho maps x = half_extent * aspect to clip x = 1
        let edge = Vec3::new(ORTHO_HALF_EXTENT * aspect, 0.0, -1.0);
        let clip = uniforms.projection.project_point3(edge);
        assert!((clip.x - 1.0).abs() < 1e-4);
    }
}
