use log::{debug, info};

use crate::camera::OrbitCamera;
use crate::color::ColorGenerator;
use crate::params::{ParameterChange, Parameters};
use crate::scene::{MeshResources, Scene};

/// Everything the frame loop mutates, independent of the window system.
///
/// `applied` always describes what the scene currently shows: the collection
/// holds `applied.count` elements oriented for `applied.angle`.
pub struct Visualization<H> {
    scene: Scene<H>,
    camera: OrbitCamera,
    applied: Parameters,
}

impl<H> Visualization<H> {
    /// Build the initial collection and orient it
    pub fn new<R>(
        params: Parameters,
        segments: u32,
        colors: ColorGenerator,
        viewport: (u32, u32),
        resources: &mut R,
    ) -> Self
    where
        R: MeshResources<Handle = H>,
    {
        let mut scene = Scene::new(segments, colors);
        scene.build_all(params.count, resources);
        scene.rotate(params.angle, params.count);

        Self {
            scene,
            camera: OrbitCamera::new(viewport.0, viewport.1),
            applied: params,
        }
    }

    /// React to one control-panel notification
    pub fn apply<R>(&mut self, change: ParameterChange, resources: &mut R)
    where
        R: MeshResources<Handle = H>,
    {
        match change {
            ParameterChange::Count(count) => {
                let count = Parameters::clamp_count(count);
                if count == self.applied.count {
                    return;
                }
                info!("Rebuilding ring: {} -> {} elements", self.applied.count, count);
                self.scene.destroy_all(resources);
                self.scene.build_all(count, resources);
                self.scene.rotate(self.applied.angle, count);
                self.applied.count = count;
            }
            ParameterChange::Angle(angle) => {
                let angle = Parameters::clamp_angle(angle);
                if angle == self.applied.angle {
                    return;
                }
                debug!("Reorienting ring: {:.1} -> {:.1} degrees", self.applied.angle, angle);
                self.scene.rotate(angle, self.applied.count);
                self.applied.angle = angle;
            }
        }
    }

    pub fn apply_all<R, I>(&mut self, changes: I, resources: &mut R)
    where
        R: MeshResources<Handle = H>,
        I: IntoIterator<Item = ParameterChange>,
    {
        for change in changes {
            self.apply(change, resources);
        }
    }

    /// Per-frame housekeeping before drawing
    pub fn update(&mut self) {
        self.camera.update();
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.set_viewport(width, height);
    }

    /// Release everything the scene still holds
    pub fn shutdown<R>(&mut self, resources: &mut R)
    where
        R: MeshResources<Handle = H>,
    {
        self.scene.destroy_all(resources);
    }

    pub fn parameters(&self) -> Parameters {
        self.applied
    }

    pub fn scene(&self) -> &Scene<H> {
        &self.scene
    }

    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut OrbitCamera {
        &mut self.camera
    }
}
