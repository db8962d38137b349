use std::collections::HashSet;

use hexagon_ring::color::ColorGenerator;
use hexagon_ring::{MeshElement, MeshResources, Scene};

/// Resource double that tracks which elements hold live resources
#[derive(Default)]
struct RecordingResources {
    next_id: u32,
    live: HashSet<u32>,
    released: Vec<u32>,
}

impl MeshResources for RecordingResources {
    type Handle = u32;

    fn create(&mut self, _element: &MeshElement) -> u32 {
        self.next_id += 1;
        self.live.insert(self.next_id);
        self.next_id
    }

    fn release(&mut self, handle: u32) {
        assert!(self.live.remove(&handle), "double release of {}", handle);
        self.released.push(handle);
    }
}

fn new_scene() -> Scene<u32> {
    Scene::new(6, ColorGenerator::seeded(1234))
}

fn degrees(scene: &Scene<u32>) -> Vec<f32> {
    scene.elements().map(|e| e.rotation_degrees()).collect()
}

#[test]
fn test_build_all_creates_count_elements_for_every_valid_count() {
    for count in 3..=10 {
        let mut resources = RecordingResources::default();
        let mut scene = new_scene();
        scene.build_all(count, &mut resources);

        assert_eq!(scene.len(), count as usize);
        assert_eq!(resources.live.len(), count as usize);
        let indices: Vec<usize> = scene.elements().map(|e| e.index).collect();
        assert_eq!(indices, (0..count as usize).collect::<Vec<_>>());
    }
}

#[test]
fn test_names_are_unique_and_indexed() {
    let mut resources = RecordingResources::default();
    let mut scene = new_scene();
    scene.build_all(7, &mut resources);

    let names: HashSet<String> = scene.elements().map(|e| e.name.clone()).collect();
    assert_eq!(names.len(), 7);
    for i in 0..7 {
        assert!(names.contains(&format!("hexagon {}", i)));
    }
}

#[test]
fn test_every_element_has_in_range_color() {
    let mut resources = RecordingResources::default();
    let mut scene = new_scene();
    scene.build_all(10, &mut resources);

    for element in scene.elements() {
        assert!(element
            .material
            .color
            .iter()
            .all(|c| (0.0..=1.0).contains(c)));
    }
}

#[test]
fn test_rotation_matches_index_times_step() {
    let mut resources = RecordingResources::default();
    let mut scene = new_scene();
    scene.build_all(4, &mut resources);

    for angle in [0.0_f32, 12.5, 45.0, 90.0, 133.3, 180.0] {
        scene.rotate(angle, 4);
        for (i, deg) in degrees(&scene).into_iter().enumerate() {
            let expected = i as f32 * (angle / 4.0);
            assert!((deg - expected).abs() < 1e-3, "element {}: {} vs {}", i, deg, expected);
        }
    }
}

#[test]
fn test_rotate_is_idempotent() {
    let mut resources = RecordingResources::default();
    let mut scene = new_scene();
    scene.build_all(6, &mut resources);

    scene.rotate(100.0, 6);
    let once = degrees(&scene);
    scene.rotate(100.0, 6);
    let twice = degrees(&scene);

    assert_eq!(once, twice);
}

#[test]
fn test_scenario_six_elements_at_one_hundred_degrees() {
    let mut resources = RecordingResources::default();
    let mut scene = new_scene();
    scene.build_all(6, &mut resources);
    scene.rotate(100.0, 6);

    assert_eq!(scene.len(), 6);
    let third = scene.elements().nth(3).unwrap();
    assert_eq!(third.index, 3);
    assert!((third.rotation_degrees() - 50.0).abs() < 1e-4);
}

#[test]
fn test_destroy_all_releases_every_resource() {
    let mut resources = RecordingResources::default();
    let mut scene = new_scene();
    scene.build_all(5, &mut resources);
    scene.destroy_all(&mut resources);

    assert!(scene.is_empty());
    assert_eq!(scene.registered(), 0);
    assert!(resources.live.is_empty());
    assert_eq!(resources.released.len(), 5);
}

#[test]
fn test_rebuild_replaces_identity() {
    let mut resources = RecordingResources::default();
    let mut scene = new_scene();
    scene.build_all(6, &mut resources);
    let old_keys = scene.keys().to_vec();

    scene.destroy_all(&mut resources);
    scene.build_all(3, &mut resources);

    assert_eq!(scene.registered(), 3);
    assert!(old_keys.iter().all(|key| !scene.contains(*key)));
    assert!(old_keys.iter().all(|key| scene.get(*key).is_none()));
    assert_eq!(resources.live.len(), 3);
}

#[test]
fn test_destroy_all_on_empty_scene_is_noop() {
    let mut resources = RecordingResources::default();
    let mut scene = new_scene();
    scene.destroy_all(&mut resources);
    assert!(scene.is_empty());
    assert!(resources.released.is_empty());
}

#[test]
fn test_drawables_follow_collection_order() {
    let mut resources = RecordingResources::default();
    let mut scene = new_scene();
    scene.build_all(4, &mut resources);

    let pairs: Vec<(usize, u32)> = scene.drawables().map(|(e, h)| (e.index, *h)).collect();
    assert_eq!(pairs, vec![(0, 1), (1, 2), (2, 3), (3, 4)]);
    assert_eq!(scene.resources(scene.keys()[2]), Some(&3));
}

#[test]
fn test_triangle_segment_setting() {
    let mut resources = RecordingResources::default();
    let mut scene: Scene<u32> = Scene::new(3, ColorGenerator::seeded(0));
    scene.build_all(3, &mut resources);
    assert!(scene.elements().all(|e| e.geometry.triangle_count() == 3));
}
