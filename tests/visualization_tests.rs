use hexagon_ring::color::ColorGenerator;
use hexagon_ring::{MeshElement, MeshResources, ParameterChange, Parameters, Visualization};

/// Counts allocations so leaks show up as a nonzero balance
#[derive(Default)]
struct CountingResources {
    created: usize,
    released: usize,
}

impl CountingResources {
    fn live(&self) -> usize {
        self.created - self.released
    }
}

impl MeshResources for CountingResources {
    type Handle = ();

    fn create(&mut self, _element: &MeshElement) {
        self.created += 1;
    }

    fn release(&mut self, _handle: ()) {
        self.released += 1;
    }
}

fn start(count: u32, angle: f32, resources: &mut CountingResources) -> Visualization<()> {
    Visualization::new(
        Parameters::new(count, angle),
        6,
        ColorGenerator::seeded(77),
        (800, 600),
        resources,
    )
}

fn rotations(viz: &Visualization<()>) -> Vec<f32> {
    viz.scene().elements().map(|e| e.rotation_degrees()).collect()
}

#[test]
fn test_startup_builds_and_orients_ring() {
    let mut resources = CountingResources::default();
    let viz = start(6, 100.0, &mut resources);

    assert_eq!(viz.scene().len(), 6);
    assert_eq!(resources.live(), 6);
    assert!((rotations(&viz)[3] - 50.0).abs() < 1e-4);
}

#[test]
fn test_count_change_rebuilds_with_last_angle() {
    let mut resources = CountingResources::default();
    let mut viz = start(6, 100.0, &mut resources);
    let old_keys = viz.scene().keys().to_vec();

    viz.apply(ParameterChange::Count(3), &mut resources);

    assert_eq!(viz.scene().len(), 3);
    assert_eq!(resources.live(), 3);
    assert_eq!(resources.released, 6);
    assert!(old_keys.iter().all(|k| !viz.scene().contains(*k)));

    let expected = [0.0, 100.0 / 3.0, 200.0 / 3.0];
    for (got, want) in rotations(&viz).iter().zip(expected) {
        assert!((got - want).abs() < 1e-3);
    }
    assert_eq!(viz.parameters(), Parameters::new(3, 100.0));
}

#[test]
fn test_angle_change_only_reorients() {
    let mut resources = CountingResources::default();
    let mut viz = start(4, 100.0, &mut resources);
    let keys = viz.scene().keys().to_vec();

    viz.apply(ParameterChange::Angle(60.0), &mut resources);

    assert_eq!(viz.scene().keys(), keys.as_slice());
    assert_eq!(resources.created, 4);
    let expected = [0.0, 15.0, 30.0, 45.0];
    for (got, want) in rotations(&viz).iter().zip(expected) {
        assert!((got - want).abs() < 1e-4);
    }
}

#[test]
fn test_repeated_changes_do_not_compound() {
    let mut resources = CountingResources::default();
    let mut viz = start(5, 90.0, &mut resources);
    let first = rotations(&viz);

    viz.apply(ParameterChange::Angle(90.0), &mut resources);
    viz.apply(ParameterChange::Angle(10.0), &mut resources);
    viz.apply(ParameterChange::Angle(90.0), &mut resources);

    assert_eq!(rotations(&viz), first);
}

#[test]
fn test_unchanged_count_does_not_rebuild() {
    let mut resources = CountingResources::default();
    let mut viz = start(6, 100.0, &mut resources);

    viz.apply(ParameterChange::Count(6), &mut resources);

    assert_eq!(resources.created, 6);
    assert_eq!(resources.released, 0);
}

#[test]
fn test_out_of_range_changes_are_clamped() {
    let mut resources = CountingResources::default();
    let mut viz = start(6, 100.0, &mut resources);

    viz.apply_all(
        [ParameterChange::Count(50), ParameterChange::Angle(-20.0)],
        &mut resources,
    );

    assert_eq!(viz.parameters(), Parameters::new(10, 0.0));
    assert_eq!(viz.scene().len(), 10);
    assert!(rotations(&viz).iter().all(|r| *r == 0.0));
}

#[test]
fn test_live_count_tracks_every_count_change() {
    let mut resources = CountingResources::default();
    let mut viz = start(3, 45.0, &mut resources);

    for count in [10, 4, 4, 7, 3, 9] {
        viz.apply(ParameterChange::Count(count), &mut resources);
        assert_eq!(viz.scene().len(), count as usize);
        assert_eq!(viz.scene().registered(), count as usize);
        assert_eq!(resources.live(), count as usize);
    }
}

#[test]
fn test_resize_updates_camera_aspect() {
    let mut resources = CountingResources::default();
    let mut viz = start(6, 100.0, &mut resources);

    viz.resize(1920, 1080);
    assert!((viz.camera().aspect() - 1920.0 / 1080.0).abs() < 1e-6);

    viz.resize(0, 0);
    assert!((viz.camera().aspect() - 1920.0 / 1080.0).abs() < 1e-6);
}

#[test]
fn test_camera_update_runs_each_frame() {
    let mut resources = CountingResources::default();
    let mut viz = start(6, 100.0, &mut resources);
    let before = viz.camera().position();

    viz.camera_mut().rotate_by_pixels(120.0, 0.0);
    viz.update();

    assert!(!viz.camera().position().abs_diff_eq(before, 1e-5));
}

#[test]
fn test_shutdown_releases_everything() {
    let mut resources = CountingResources::default();
    let mut viz = start(8, 100.0, &mut resources);

    viz.shutdown(&mut resources);

    assert_eq!(resources.live(), 0);
    assert!(viz.scene().is_empty());
}
