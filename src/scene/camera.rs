use glam::{Mat4, Vec3};
use winit::event::KeyEvent;
use winit::keyboard::{KeyCode, PhysicalKey};

pub const DEFAULT_CAMERA_POSITION: Vec3 = Vec3::new(15.0, -15.0, 10.0);
pub const DEFAULT_CAMERA_TARGET: Vec3 = Vec3::new(0.0, 0.0, 3.0);

pub const ORBIT_SPEED: f32 = 0.02;
pub const ZOOM_SPEED: f32 = 0.02;
pub const LIFT_SPEED: f32 = 0.1;
const MIN_DISTANCE: f32 = 1.0;

/// Perspective camera looking at a fixed target, +Y up
#[derive(Debug, Clone, PartialEq)]
pub struct PerspectiveCamera {
    pub position: Vec3,
    pub target: Vec3,
    pub fov_degrees: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl PerspectiveCamera {
    pub fn new(fov_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            position: DEFAULT_CAMERA_POSITION,
            target: DEFAULT_CAMERA_TARGET,
            fov_degrees,
            aspect,
            near,
            far,
        }
    }

    pub fn look_at(&mut self, target: Vec3) {
        self.target = target;
    }

    pub fn set_aspect(&mut self, width: u32, height: u32) {
        self.aspect = width.max(1) as f32 / height.max(1) as f32;
    }

    pub fn view(&self) -> Mat4 {
        // A target straight above or below would make +Y degenerate
        let forward = (self.target - self.position).normalize_or_zero();
        let up = if forward.cross(Vec3::Y).length_squared() < 1e-8 {
            Vec3::Z
        } else {
            Vec3::Y
        };
        Mat4::look_at_rh(self.position, self.target, up)
    }

    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_degrees.to_radians(), self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection() * self.view()
    }
}

#[derive(Default, Clone, Copy)]
pub struct MovementState {
    pub zoom_in: bool,
    pub zoom_out: bool,
    pub orbit_left: bool,
    pub orbit_right: bool,
    pub raise: bool,
    pub lower: bool,
}

impl MovementState {
    const fn to_direction(&self, positive: bool, negative: bool) -> f32 {
        match (positive, negative) {
            (true, false) => 1.0,
            (false, true) => -1.0,
            _ => 0.0,
        }
    }

    const fn velocity(&self) -> (f32, f32, f32) {
        (
            self.to_direction(self.zoom_in, self.zoom_out),
            self.to_direction(self.orbit_right, self.orbit_left),
            self.to_direction(self.raise, self.lower),
        )
    }
}

/// Keyboard orbit around the camera target
#[derive(Default)]
pub struct OrbitController {
    pub movement: MovementState,
}

impl OrbitController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn process_keyboard(&mut self, event: &KeyEvent) {
        let is_pressed = event.state.is_pressed();
        if let PhysicalKey::Code(keycode) = event.physical_key {
            match keycode {
                KeyCode::KeyW => self.movement.zoom_in = is_pressed,
                KeyCode::KeyS => self.movement.zoom_out = is_pressed,
                KeyCode::KeyA => self.movement.orbit_left = is_pressed,
                KeyCode::KeyD => self.movement.orbit_right = is_pressed,
                KeyCode::KeyQ => self.movement.raise = is_pressed,
                KeyCode::KeyE => self.movement.lower = is_pressed,
                _ => {}
            }
        }
    }

    pub fn is_idle(&self) -> bool {
        self.movement.velocity() == (0.0, 0.0, 0.0)
    }

    /// Apply one frame of movement to the camera
    pub fn update(&self, camera: &mut PerspectiveCamera) {
        let (zoom, orbit, lift) = self.movement.velocity();
        if zoom == 0.0 && orbit == 0.0 && lift == 0.0 {
            return;
        }

        let offset = camera.position - camera.target;
        let rotated = glam::Quat::from_rotation_y(orbit * ORBIT_SPEED) * offset;

        let distance = rotated.length();
        let scaled = if distance > 0.0 {
            let new_distance = (distance * (1.0 - zoom * ZOOM_SPEED)).max(MIN_DISTANCE);
            rotated * (new_distance / distance)
        } else {
            rotated
        };

        camera.position = camera.target + scaled + Vec3::Y * lift * LIFT_SPEED;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn camera() -> PerspectiveCamera {
        PerspectiveCamera::new(75.0, 4.0 / 3.0, 0.1, 1000.0)
    }

    #[test]
    fn test_target_projects_to_center() {
        let cam = camera();
        let clip = cam.view_projection() * cam.target.extend(1.0);
        let ndc = clip.truncate() / clip.w;
        assert_relative_eq!(ndc.x, 0.0, epsilon = 1e-4);
        assert_relative_eq!(ndc.y, 0.0, epsilon = 1e-4);
        assert!(ndc.z > 0.0 && ndc.z < 1.0);
    }

    #[test]
    fn test_vertical_view_is_not_degenerate() {
        let mut cam = camera();
        cam.position = Vec3::new(0.0, 20.0, 0.0);
        cam.look_at(Vec3::ZERO);
        assert!(cam.view().is_finite());
    }

    #[test]
    fn test_set_aspect_guards_zero() {
        let mut cam = camera();
        cam.set_aspect(800, 0);
        assert_eq!(cam.aspect, 800.0);
    }

    #[test]
    fn test_orbit_keeps_distance() {
        let mut cam = camera();
        let before = cam.position.distance(cam.target);

        let mut controller = OrbitController::new();
        controller.movement.orbit_right = true;
        controller.update(&mut cam);

        assert_relative_eq!(cam.position.distance(cam.target), before, epsilon = 1e-3);
        assert_ne!(cam.position, DEFAULT_CAMERA_POSITION);
    }

    #[test]
    fn test_zoom_in_moves_closer() {
        let mut cam = camera();
        let before = cam.position.distance(cam.target);

        let mut controller = OrbitController::new();
        controller.movement.zoom_in = true;
        controller.update(&mut cam);

        assert!(cam.position.distance(cam.target) < before);
    }

    #[test]
    fn test_idle_controller_leaves_camera() {
        let mut cam = camera();
        let controller = OrbitController::new();
        assert!(controller.is_idle());
        controller.update(&mut cam);
        assert_eq!(cam.position, DEFAULT_CAMERA_POSITION);
    }
}
