use crate::math::{degrees_to_radians, Mat4, Vec3};

pub const YAW: f32 = -90.0;
pub const PITCH: f32 = 0.0;
pub const SPEED: f32 = 2.5;
pub const SENSITIVITY: f32 = 0.08;
pub const ZOOM: f32 = 45.0;

/// Pitch is held inside +-PITCH_LIMIT degrees so `front` never reaches the pole
/// and flips `up`.
pub const PITCH_LIMIT: f32 = 89.0;
pub const ZOOM_MIN: f32 = 1.0;
pub const ZOOM_MAX: f32 = 45.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraMovement {
    Forward,
    Backward,
    Left,
    Right,
}

/// Free-look camera driven by yaw/pitch Euler angles (degrees, no roll).
///
/// `front`, `right` and `up` are derived state: they are rebuilt from yaw and
/// pitch in full on every change, never rotated incrementally, so the basis
/// cannot drift out of orthonormality over a long session.
#[derive(Debug, Clone)]
pub struct Camera {
    pub position: Vec3,
    front: Vec3,
    up: Vec3,
    right: Vec3,
    world_up: Vec3,
    yaw: f32,
    pitch: f32,
    pub movement_speed: f32,
    pub mouse_sensitivity: f32,
    zoom: f32,
}

impl Camera {
    pub fn new(position: Vec3, world_up: Vec3, yaw: f32, pitch: f32) -> Self {
        let mut camera = Self {
            position,
            front: -Vec3::Z,
            up: world_up,
            right: Vec3::X,
            world_up,
            yaw,
            pitch,
            movement_speed: SPEED,
            mouse_sensitivity: SENSITIVITY,
            zoom: ZOOM,
        };
        camera.update_vectors();
        camera
    }

    /// Camera at `position` with +Y up and the default yaw/pitch (looking down -Z).
    pub fn at(position: Vec3) -> Self {
        Self::new(position, Vec3::Y, YAW, PITCH)
    }

    pub fn front(&self) -> Vec3 {
        self.front
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn world_up(&self) -> Vec3 {
        self.world_up
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Vertical field of view in degrees
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Set zoom directly, clamped to the scroll range.
    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom.clamp(ZOOM_MIN, ZOOM_MAX);
    }

    /// Move along `front` or `right`. `delta_time` is the frame time in seconds,
    /// which keeps speed independent of frame rate.
    pub fn process_movement(&mut self, direction: CameraMovement, delta_time: f32) {
        let velocity = self.movement_speed * delta_time;
        match direction {
            CameraMovement::Forward => self.position += self.front * velocity,
            CameraMovement::Backward => self.position -= self.front * velocity,
            CameraMovement::Left => self.position -= self.right * velocity,
            CameraMovement::Right => self.position += self.right * velocity,
        }
    }

    /// Apply a mouse delta. Yaw is left unbounded (trig wraps it); pitch is
    /// clamped to +-89 degrees when `constrain_pitch` is set.
    pub fn process_look(&mut self, dx: f32, dy: f32, constrain_pitch: bool) {
        self.yaw += dx * self.mouse_sensitivity;
        self.pitch += dy * self.mouse_sensitivity;

        if constrain_pitch {
            self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }

        self.update_vectors();
    }

    /// Scroll up narrows the field of view.
    pub fn process_zoom(&mut self, scroll_dy: f32) {
        self.set_zoom(self.zoom - scroll_dy);
    }

    /// Rebuild `front`, `right` and `up` from yaw and pitch.
    pub fn update_vectors(&mut self) {
        let yaw = degrees_to_radians(self.yaw);
        let pitch = degrees_to_radians(self.pitch);

        self.front = Vec3::new(yaw.cos() * pitch.cos(), pitch.sin(), yaw.sin() * pitch.cos()).normalized();
        self.right = self.front.cross(self.world_up).normalized();
        self.up = self.right.cross(self.front).normalized();
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at(self.position, self.position + self.front, self.up)
    }

    /// Perspective projection using the current zoom as vertical field of view.
    pub fn projection_matrix(&self, aspect: f32, near: f32, far: f32) -> Mat4 {
        Mat4::create_perspective(degrees_to_radians(self.zoom), aspect, near, far)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::at(Vec3::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_vec_eq(a: Vec3, b: Vec3) {
        assert!((a - b).magnitude() < 1e-5, "{} vs {}", a, b);
    }

    #[test]
    fn test_default_looks_down_negative_z() {
        let camera = Camera::default();
        assert_vec_eq(camera.front(), -Vec3::Z);
        assert_vec_eq(camera.right(), Vec3::X);
        assert_vec_eq(camera.up(), Vec3::Y);
        assert_eq!(camera.zoom(), ZOOM);
    }

    #[test]
    fn test_movement_directions() {
        let mut camera = Camera::default();
        camera.process_movement(CameraMovement::Right, 1.0);
        assert_vec_eq(camera.position, Vec3::new(SPEED, 0.0, 0.0));
        camera.process_movement(CameraMovement::Left, 2.0);
        assert_vec_eq(camera.position, Vec3::new(-SPEED, 0.0, 0.0));
        camera.process_movement(CameraMovement::Backward, 0.5);
        assert_vec_eq(camera.position, Vec3::new(-SPEED, 0.0, SPEED * 0.5));
    }

    #[test]
    fn test_look_turns_right() {
        let mut camera = Camera::default();
        // 90 degrees of yaw to the right
        camera.process_look(90.0 / SENSITIVITY, 0.0, true);
        assert!((camera.yaw() - 0.0).abs() < 1e-3);
        assert_vec_eq(camera.front(), Vec3::X);
        assert_vec_eq(camera.right(), Vec3::Z);
    }

    #[test]
    fn test_pitch_clamped() {
        let mut camera = Camera::default();
        camera.process_look(0.0, -10_000.0, true);
        assert_eq!(camera.pitch(), -PITCH_LIMIT);
        assert!(camera.up().y > 0.0);
    }

    #[test]
    fn test_pitch_unconstrained() {
        let mut camera = Camera::default();
        camera.process_look(0.0, 100.0 / SENSITIVITY, false);
        assert!(camera.pitch() > 90.0);
    }

    #[test]
    fn test_yaw_unbounded() {
        let mut camera = Camera::default();
        camera.process_look(720.0 / SENSITIVITY, 0.0, true);
        assert!((camera.yaw() - 630.0).abs() < 1e-2);
        assert_vec_eq(camera.front(), -Vec3::Z);
    }

    #[test]
    fn test_zoom_clamped() {
        let mut camera = Camera::default();
        camera.process_zoom(10.0);
        assert_eq!(camera.zoom(), 35.0);
        camera.process_zoom(100.0);
        assert_eq!(camera.zoom(), ZOOM_MIN);
        camera.process_zoom(-100.0);
        assert_eq!(camera.zoom(), ZOOM_MAX);
    }

    #[test]
    fn test_basis_stays_orthonormal() {
        let mut camera = Camera::default();
        for i in 0..1000 {
            camera.process_look(3.7, if i % 2 == 0 { 5.0 } else { -4.0 }, true);
        }
        assert!((camera.front().magnitude() - 1.0).abs() < 1e-5);
        assert!((camera.right().magnitude() - 1.0).abs() < 1e-5);
        assert!((camera.up().magnitude() - 1.0).abs() < 1e-5);
        assert!(camera.front().dot(camera.right()).abs() < 1e-5);
        assert!(camera.front().dot(camera.up()).abs() < 1e-5);
    }

    #[test]
    fn test_view_matrix_centers_eye() {
        let mut camera = Camera::at(Vec3::new(3.0, -1.0, 7.0));
        camera.process_look(123.0, 45.0, true);
        let eye_in_view = camera.view_matrix() * camera.position;
        assert_vec_eq(eye_in_view, Vec3::ZERO);
    }

    #[test]
    fn test_projection_uses_zoom() {
        let mut camera = Camera::default();
        camera.set_zoom(ZOOM_MAX);
        let wide = camera.projection_matrix(1.0, 0.1, 100.0);
        camera.set_zoom(10.0);
        let narrow = camera.projection_matrix(1.0, 0.1, 100.0);
        assert!(narrow.get(1, 1) > wide.get(1, 1));
    }
}
