use glam::{Mat4, Vec3};
use std::f32::consts::{PI, TAU};

pub const FOV_DEGREES: f32 = 15.0;
pub const NEAR_PLANE: f32 = 0.1;
pub const FAR_PLANE: f32 = 100.0;
pub const INITIAL_POSITION: Vec3 = Vec3::new(10.0, 10.0, 10.0);

pub const DAMPING_FACTOR: f32 = 0.05;
pub const ROTATE_SPEED: f32 = 1.0;
pub const ZOOM_STEP: f32 = 0.95;
pub const MIN_RADIUS: f32 = 1.0;
pub const MAX_RADIUS: f32 = 90.0;

// Keeps the view direction off the vertical axis
const POLAR_EPSILON: f32 = 1e-3;

/// Camera uniform buffer data for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    pub position: [f32; 3],
    pub _pad: f32,
}

/// Pointer drag in progress
#[derive(Debug, Default, Clone, Copy)]
struct DragState {
    active: bool,
    last: Option<(f32, f32)>,
}

/// Perspective camera orbiting a fixed target, with eased (damped) motion.
///
/// Pointer input only accumulates pending rotation and zoom; `update`
/// applies a fraction of it each frame so the camera glides to rest.
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
    radius: f32,
    azimuth: f32,
    polar: f32,
    aspect: f32,
    viewport: (u32, u32),
    pending_azimuth: f32,
    pending_polar: f32,
    pending_zoom: f32,
    damping: f32,
    drag: DragState,
}

impl OrbitCamera {
    /// Camera at the initial position looking at the origin
    pub fn new(width: u32, height: u32) -> Self {
        let mut camera = Self {
            target: Vec3::ZERO,
            fov_y: FOV_DEGREES.to_radians(),
            near: NEAR_PLANE,
            far: FAR_PLANE,
            radius: 1.0,
            azimuth: 0.0,
            polar: PI / 2.0,
            aspect: 1.0,
            viewport: (1, 1),
            pending_azimuth: 0.0,
            pending_polar: 0.0,
            pending_zoom: 1.0,
            damping: DAMPING_FACTOR,
            drag: DragState::default(),
        };
        camera.look_from(INITIAL_POSITION);
        camera.set_viewport(width, height);
        camera
    }

    /// Place the camera at `position`, keeping the current target
    pub fn look_from(&mut self, position: Vec3) {
        let offset = position - self.target;
        self.radius = offset.length().clamp(MIN_RADIUS, MAX_RADIUS);
        self.azimuth = offset.x.atan2(offset.z);
        self.polar = (offset.y / offset.length().max(f32::EPSILON))
            .clamp(-1.0, 1.0)
            .acos()
            .clamp(POLAR_EPSILON, PI - POLAR_EPSILON);
    }

    /// Update the aspect ratio for a new viewport. A zero-sized viewport
    /// (minimized window) keeps the previous aspect.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.viewport = (width, height);
        self.aspect = width as f32 / height as f32;
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn set_damping(&mut self, damping: f32) {
        self.damping = damping.clamp(0.0, 1.0);
    }

    pub fn position(&self) -> Vec3 {
        let (sin_polar, cos_polar) = self.polar.sin_cos();
        let (sin_azimuth, cos_azimuth) = self.azimuth.sin_cos();
        self.target
            + Vec3::new(
                self.radius * sin_polar * sin_azimuth,
                self.radius * cos_polar,
                self.radius * sin_polar * cos_azimuth,
            )
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position(), self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn to_uniform(&self) -> CameraUniform {
        CameraUniform {
            view_proj: self.view_projection().to_cols_array_2d(),
            position: self.position().to_array(),
            _pad: 0.0,
        }
    }

    pub fn begin_drag(&mut self) {
        self.drag = DragState {
            active: true,
            last: None,
        };
    }

    pub fn end_drag(&mut self) {
        self.drag = DragState::default();
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.active
    }

    /// Feed a cursor position in physical pixels; rotates while dragging
    pub fn cursor_moved(&mut self, x: f32, y: f32) {
        if !self.drag.active {
            return;
        }
        if let Some((last_x, last_y)) = self.drag.last {
            self.rotate_by_pixels(x - last_x, y - last_y);
        }
        self.drag.last = Some((x, y));
    }

    /// Queue a rotation; a drag across the full viewport height is one turn
    pub fn rotate_by_pixels(&mut self, dx: f32, dy: f32) {
        let height = self.viewport.1 as f32;
        self.pending_azimuth -= TAU * dx / height * ROTATE_SPEED;
        self.pending_polar -= TAU * dy / height * ROTATE_SPEED;
    }

    /// Queue a zoom; positive `steps` move towards the target
    pub fn zoom(&mut self, steps: f32) {
        self.pending_zoom *= ZOOM_STEP.powf(steps);
    }

    /// Advance the controller by one frame
    pub fn update(&mut self) {
        let damping = if self.damping > 0.0 { self.damping } else { 1.0 };

        self.azimuth += self.pending_azimuth * damping;
        self.polar = (self.polar + self.pending_polar * damping)
            .clamp(POLAR_EPSILON, PI - POLAR_EPSILON);
        self.radius = (self.radius * self.pending_zoom).clamp(MIN_RADIUS, MAX_RADIUS);

        self.pending_azimuth *= 1.0 - damping;
        self.pending_polar *= 1.0 - damping;
        self.pending_zoom = 1.0;
    }
}
