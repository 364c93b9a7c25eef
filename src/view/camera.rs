//! Free-look camera

use glam::{Mat4, Vec3};

/// Initial camera position, pulled back and above the tabletop
const INITIAL_POSITION: Vec3 = Vec3::new(0.0, 5.0, 12.0);
/// Initial look direction, angled down toward the scene (normalized in `new`)
const INITIAL_FRONT: Vec3 = Vec3::new(0.0, -0.5, -2.0);
/// Vertical field of view in degrees
const INITIAL_ZOOM: f32 = 80.0;

/// First-person camera.
///
/// Orientation is stored as yaw/pitch angles in degrees; the `front`
/// vector is a cached value recomputed from the angles on every
/// orientation change. Integrating the direction vector directly would
/// accumulate drift, so the angles are the sole source of truth and
/// `front`/`up` stay unit length no matter how many updates pile up.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Camera position in world space
    pub position: Vec3,
    /// Vertical field of view in degrees
    pub zoom: f32,
    /// Look direction, always unit length, derived from yaw/pitch
    front: Vec3,
    /// Roll-free vertical reference, unit length
    up: Vec3,
    /// Horizontal look angle in degrees
    yaw: f32,
    /// Vertical look angle in degrees
    pitch: f32,
}

impl Camera {
    /// Create the camera at its fixed startup pose.
    ///
    /// Yaw and pitch are derived from the initial front vector via
    /// `atan2`/`asin` so the angles and the look direction agree from
    /// the first frame on.
    pub fn new() -> Self {
        let front = INITIAL_FRONT.normalize();
        let yaw = front.z.atan2(front.x).to_degrees();
        let pitch = front.y.asin().to_degrees();

        Self {
            position: INITIAL_POSITION,
            zoom: INITIAL_ZOOM,
            front,
            up: Vec3::Y,
            yaw,
            pitch,
        }
    }

    /// Look direction, unit length
    pub fn front(&self) -> Vec3 {
        self.front
    }

    /// Up vector, unit length
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Strafe direction, unit length
    pub fn right(&self) -> Vec3 {
        self.front.cross(self.up).normalize()
    }

    /// Horizontal look angle in degrees
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Vertical look angle in degrees
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// View matrix looking from the current position along `front`
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    /// Set the look angles and recompute the front vector.
    ///
    /// This is the only place `front` is ever assigned, which keeps it
    /// unit length regardless of how many orientation updates
    /// accumulate. Pitch clamping is the caller's responsibility
    /// ([`ViewManager`](crate::view::ViewManager) clamps before calling
    /// in); values near ±90° flip the view.
    pub fn set_orientation(&mut self, yaw_deg: f32, pitch_deg: f32) {
        self.yaw = yaw_deg;
        self.pitch = pitch_deg;

        let (yaw, pitch) = (yaw_deg.to_radians(), pitch_deg.to_radians());
        self.front = Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        )
        .normalize();
    }

    /// Move along the look direction
    pub fn move_along_front(&mut self, distance: f32) {
        self.position += self.front * distance;
    }

    /// Strafe along the right direction
    pub fn strafe_right(&mut self, distance: f32) {
        self.position += self.right() * distance;
    }

    /// Move along the world up axis
    pub fn move_along_world_up(&mut self, distance: f32) {
        self.position += Vec3::Y * distance;
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f32 = 1e-5;

    #[test]
    fn test_initial_angles_reconstruct_front() {
        let camera = Camera::new();
        let expected = INITIAL_FRONT.normalize();

        // Re-applying the derived angles must land on the same direction
        let mut copy = camera.clone();
        copy.set_orientation(camera.yaw(), camera.pitch());

        assert!((copy.front() - expected).length() < TOLERANCE);
    }

    #[test]
    fn test_front_stays_unit_length() {
        let mut camera = Camera::new();

        // Sweep through a long, messy sequence of orientations
        for i in 0..1000 {
            let yaw = (i as f32) * 7.31 - 400.0;
            let pitch = ((i as f32) * 1.7).sin() * 88.0;
            camera.set_orientation(yaw, pitch);

            assert!((camera.front().length() - 1.0).abs() < TOLERANCE);
            assert!((camera.up().length() - 1.0).abs() < TOLERANCE);
        }
    }

    #[test]
    fn test_view_matrix_looks_along_front() {
        let mut camera = Camera::new();
        camera.position = Vec3::new(1.0, 2.0, 3.0);
        camera.set_orientation(-90.0, 0.0);

        let view = camera.view_matrix();
        // A point straight ahead of the camera maps onto the -Z axis
        let ahead = camera.position + camera.front() * 5.0;
        let in_view = view.transform_point3(ahead);

        assert!(in_view.x.abs() < TOLERANCE);
        assert!(in_view.y.abs() < TOLERANCE);
        assert!((in_view.z + 5.0).abs() < 1e-4);
    }

    #[test]
    fn test_movement_directions() {
        let mut camera = Camera::new();
        camera.position = Vec3::ZERO;
        camera.set_orientation(-90.0, 0.0); // facing -Z

        camera.move_along_front(2.0);
        assert!((camera.position - Vec3::new(0.0, 0.0, -2.0)).length() < 1e-4);

        camera.strafe_right(3.0);
        assert!((camera.position.x - 3.0).abs() < 1e-4);

        camera.move_along_world_up(-1.5);
        assert!((camera.position.y + 1.5).abs() < 1e-4);
    }

    #[test]
    fn test_strafe_is_horizontal_while_pitched() {
        let mut camera = Camera::new();
        camera.position = Vec3::ZERO;
        camera.set_orientation(-90.0, -45.0);

        camera.strafe_right(1.0);
        // Right is front x up, so pitch never leaks into strafing
        assert!(camera.position.y.abs() < TOLERANCE);
    }
}
