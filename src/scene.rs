//! Scene context: the mesh collection, its registry and the lighting rig.
//!
//! Elements are registered in a `SlotMap`, so a key from a previous
//! collection never resolves again once that collection is destroyed.

use glam::{Mat4, Vec3};
use log::{debug, warn};
use slotmap::{new_key_type, SlotMap};

use crate::color::ColorGenerator;
use crate::geometry::PolygonGeometry;
use crate::lights::Lighting;

pub const NAME_PREFIX: &str = "hexagon";
pub const POLYGON_RADIUS: f32 = 1.0;

new_key_type! {
    /// Stable handle of a registered mesh element
    pub struct MeshKey;
}

/// Surface appearance of an element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub color: [f32; 3],
}

/// A single flat polygon placed in the scene
#[derive(Debug, Clone)]
pub struct MeshElement {
    pub name: String,
    pub index: usize,
    pub geometry: PolygonGeometry,
    pub material: Material,
    pub position: Vec3,
    /// Rotation about the vertical axis, in radians
    pub rotation_y: f32,
}

impl MeshElement {
    pub fn rotation_degrees(&self) -> f32 {
        self.rotation_y.to_degrees()
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position) * Mat4::from_rotation_y(self.rotation_y)
    }
}

/// Owner of the rendering resources behind each element.
///
/// `create` runs when an element is built; `release` runs before it leaves
/// the scene and must free everything `create` allocated.
pub trait MeshResources {
    type Handle;

    fn create(&mut self, element: &MeshElement) -> Self::Handle;

    fn release(&mut self, handle: Self::Handle);
}

struct SceneNode<H> {
    element: MeshElement,
    resources: H,
}

pub struct Scene<H> {
    nodes: SlotMap<MeshKey, SceneNode<H>>,
    collection: Vec<MeshKey>,
    lighting: Lighting,
    segments: u32,
    colors: ColorGenerator,
}

impl<H> Scene<H> {
    /// Empty scene whose elements get `segments` outer vertices
    pub fn new(segments: u32, colors: ColorGenerator) -> Self {
        Self {
            nodes: SlotMap::with_key(),
            collection: Vec::new(),
            lighting: Lighting::default(),
            segments,
            colors,
        }
    }

    pub fn element_name(index: usize) -> String {
        format!("{} {}", NAME_PREFIX, index)
    }

    /// Create `count` elements indexed `0..count`, register them and
    /// allocate their resources
    pub fn build_all<R>(&mut self, count: u32, resources: &mut R)
    where
        R: MeshResources<Handle = H>,
    {
        if !self.collection.is_empty() {
            warn!(
                "build_all on a live collection of {}; destroying it first",
                self.collection.len()
            );
            self.destroy_all(resources);
        }

        for index in 0..count as usize {
            let element = MeshElement {
                name: Self::element_name(index),
                index,
                geometry: PolygonGeometry::circle(POLYGON_RADIUS, self.segments),
                material: Material {
                    color: self.colors.next_color(),
                },
                position: Vec3::ZERO,
                rotation_y: 0.0,
            };
            let handle = resources.create(&element);
            let key = self.nodes.insert(SceneNode {
                element,
                resources: handle,
            });
            self.collection.push(key);
        }

        debug!("Built {} elements", count);
    }

    /// Release every element's resources and remove it from the scene
    pub fn destroy_all<R>(&mut self, resources: &mut R)
    where
        R: MeshResources<Handle = H>,
    {
        let removed = self.collection.len();
        for key in self.collection.drain(..) {
            if let Some(node) = self.nodes.remove(key) {
                resources.release(node.resources);
            }
        }
        debug!("Destroyed {} elements", removed);
    }

    /// Set each element's rotation to `index * (angle / count)` degrees
    /// about the vertical axis. Absolute, so repeated calls are harmless.
    pub fn rotate(&mut self, angle: f32, count: u32) {
        if count == 0 {
            return;
        }
        let step = angle / count as f32;
        for (index, key) in self.collection.iter().enumerate() {
            if let Some(node) = self.nodes.get_mut(*key) {
                node.element.rotation_y = (index as f32 * step).to_radians();
            }
        }
    }

    pub fn len(&self) -> usize {
        self.collection.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collection.is_empty()
    }

    /// Number of elements registered in the scene, live or not
    pub fn registered(&self) -> usize {
        self.nodes.len()
    }

    pub fn keys(&self) -> &[MeshKey] {
        &self.collection
    }

    pub fn contains(&self, key: MeshKey) -> bool {
        self.nodes.contains_key(key)
    }

    pub fn get(&self, key: MeshKey) -> Option<&MeshElement> {
        self.nodes.get(key).map(|node| &node.element)
    }

    pub fn resources(&self, key: MeshKey) -> Option<&H> {
        self.nodes.get(key).map(|node| &node.resources)
    }

    /// Elements in collection order
    pub fn elements(&self) -> impl Iterator<Item = &MeshElement> + '_ {
        self.collection
            .iter()
            .filter_map(move |key| self.get(*key))
    }

    /// Elements paired with their resources, in collection order
    pub fn drawables(&self) -> impl Iterator<Item = (&MeshElement, &H)> + '_ {
        self.collection
            .iter()
            .filter_map(move |key| self.nodes.get(*key))
            .map(|node| (&node.element, &node.resources))
    }

    pub fn find_by_name(&self, name: &str) -> Option<MeshKey> {
        self.collection
            .iter()
            .copied()
            .find(|key| self.get(*key).is_some_and(|e| e.name == name))
    }

    pub fn lighting(&self) -> &Lighting {
        &self.lighting
    }

    pub fn segments(&self) -> u32 {
        self.segments
    }
}
