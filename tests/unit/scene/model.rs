use super::*;

#[test]
fn hero_scene_matches_layout() {
    let spec = SceneSpec::hero(7);
    assert_eq!(spec.primitives.len(), 4);
    assert_eq!(spec.particles.len(), PARTICLE_COUNT);
    assert_eq!(spec.primitives[0].position, [-2.5, 1.0, -2.0]);
    assert_eq!(spec.primitives[1].position, [3.0, -1.0, -1.0]);
    assert_eq!(spec.primitives[2].position, [2.0, 2.0, -3.0]);
    assert_eq!(spec.primitives[3].position, [-3.0, -2.0, -2.0]);
    assert_eq!(spec.primitives[1].color, ColorRole::Accent);
    assert!(matches!(spec.primitives[3].shape, Shape::Icosahedron { radius } if radius == 0.7));
    spec.validate().unwrap();
}

#[test]
fn particles_are_seeded_and_bounded() {
    let a = SceneSpec::hero(42);
    let b = SceneSpec::hero(42);
    let c = SceneSpec::hero(43);
    assert_eq!(a.particles, b.particles);
    assert_ne!(a.particles, c.particles);
    let half = PARTICLE_EXTENT / 2.0;
    assert!(
        a.particles
            .iter()
            .flatten()
            .all(|v| (-half..half).contains(v))
    );
}

#[test]
fn per_frame_spin_accumulates() {
    let spec = SceneSpec::hero(1);
    let fps = Fps::default();
    let s = spec.sample(FrameIndex(200), fps);
    assert!((s.primitives[0].rotation[1] - 1.0).abs() < 1e-12);
    assert!((s.primitives[3].rotation[0] - 0.6).abs() < 1e-12);

    let t = 200.0 / 60.0;
    assert!((s.primitives[2].rotation[0] - 0.3 * t).abs() < 1e-12);
    assert!((s.particle_rotation[1] - 0.02 * t).abs() < 1e-12);
}

#[test]
fn float_law_stays_within_amplitude() {
    let p = FloatParams {
        speed: 2.0,
        rotation_intensity: 1.0,
        float_intensity: 2.0,
        offset: 0.0,
    };
    for i in 0..500 {
        let (rot, y) = p.sample(i as f64 * 0.05);
        assert!(y.abs() <= 0.2 + 1e-12);
        assert!(rot[0].abs() <= 0.125 + 1e-12);
        assert!(rot[2].abs() <= 0.05 + 1e-12);
    }
    let (rot, y) = p.sample(0.0);
    assert!(y.abs() < 1e-12);
    assert!((rot[0] - 0.125).abs() < 1e-12);
}

#[test]
fn rotation_preserves_length_and_order() {
    let v = [1.0, 2.0, 3.0];
    let r = rotate_xyz(v, [0.3, -1.1, 2.0]);
    let len = |v: Vec3| (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
    assert!((len(v) - len(r)).abs() < 1e-12);

    let quarter_z = rotate_xyz([1.0, 0.0, 0.0], [0.0, 0.0, std::f64::consts::FRAC_PI_2]);
    assert!((quarter_z[1] - 1.0).abs() < 1e-12);
}

#[test]
fn camera_projects_origin_to_frame_center() {
    let cam = Camera::default();
    let p = cam.project([0.0, 0.0, 0.0], 800, 600).unwrap();
    assert!((p.screen.x - 400.0).abs() < 1e-9);
    assert!((p.screen.y - 300.0).abs() < 1e-9);
    assert_eq!(p.depth, 6.0);

    let up = cam.project([0.0, 1.0, 0.0], 800, 600).unwrap();
    assert!(up.screen.y < 300.0);
    assert!(cam.project([0.0, 0.0, 6.5], 800, 600).is_none());
}

#[test]
fn pose_transform_places_center_inside_group() {
    let spec = SceneSpec::hero(3);
    let s = spec.sample(FrameIndex(0), Fps::default());
    let pose = s.primitives[0];
    let expected = rotate_xyz(pose.position, pose.group_rotation);
    let c = pose.center();
    assert!((c[0] - expected[0]).abs() < 1e-12);
    assert!((c[1] - expected[1] - pose.group_offset_y).abs() < 1e-12);
}

#[test]
fn float_offset_is_exact_sine_scale() {
    let p = FloatParams {
        speed: 2.0,
        rotation_intensity: 1.0,
        float_intensity: 2.0,
        offset: 0.0,
    };
    let t = 1.3;
    let s = (t / 4.0 * 2.0_f64).sin();
    let (_, y) = p.sample(t);
    assert_eq!(y, s / 10.0 * 2.0);
}
