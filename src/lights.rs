use glam::Vec3;

/// Uniform light applied to every surface regardless of orientation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientLight {
    pub color: [f32; 3],
    pub intensity: f32,
}

/// Parallel light shining from `position` towards `target`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    pub color: [f32; 3],
    pub intensity: f32,
    pub position: Vec3,
    pub target: Vec3,
}

impl DirectionalLight {
    /// Unit vector pointing from the surface towards the light
    pub fn to_light(&self) -> Vec3 {
        (self.position - self.target).normalize_or(Vec3::Y)
    }
}

/// The fixed lighting rig of the scene
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lighting {
    pub ambient: AmbientLight,
    pub directional: DirectionalLight,
}

impl Default for Lighting {
    fn default() -> Self {
        Self {
            ambient: AmbientLight {
                color: [1.0, 1.0, 1.0],
                intensity: 0.5,
            },
            directional: DirectionalLight {
                color: [1.0, 1.0, 1.0],
                intensity: 1.0,
                position: Vec3::new(2.0, 5.0, 5.0),
                target: Vec3::new(-1.0, -1.0, 0.0),
            },
        }
    }
}

/// Light uniform buffer data for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightUniform {
    pub ambient: [f32; 3],
    pub _pad1: f32,
    pub direction: [f32; 3],
    pub _pad2: f32,
    pub directional: [f32; 3],
    pub _pad3: f32,
}

impl Lighting {
    pub fn to_uniform(&self) -> LightUniform {
        let scale = |c: [f32; 3], k: f32| [c[0] * k, c[1] * k, c[2] * k];
        LightUniform {
            ambient: scale(self.ambient.color, self.ambient.intensity),
            _pad1: 0.0,
            direction: self.directional.to_light().to_array(),
            _pad2: 0.0,
            directional: scale(self.directional.color, self.directional.intensity),
            _pad3: 0.0,
        }
    }
}
